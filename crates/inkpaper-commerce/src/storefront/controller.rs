//! The storefront view controller.

use crate::cart::{Cart, ShippingPolicy};
use crate::catalog::{Catalog, Category, Product, FEATURED_COUNT};
use crate::checkout::{CheckoutForm, OrderConfirmation};
use crate::error::CommerceError;
use crate::ids::{OrderNumber, ProductId};
use crate::search::{filter, FilterCriteria, Listing, SpecialTag};
use crate::storefront::{CartSnapshot, FooterLink, Intent, Snapshot, View, ViewKind};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Owns all storefront state and applies intents to it one at a time.
///
/// Nothing mutable escapes: callers get shared references or a cloned
/// [`Snapshot`]. A rejected intent leaves every field as it was.
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    shipping: ShippingPolicy,
    view: View,
    criteria: FilterCriteria,
    listing: Listing,
    cart: Cart,
    cart_open: bool,
    rng: StdRng,
}

impl Storefront {
    /// Start on the home page with an empty cart and no filter.
    pub fn new(catalog: Catalog) -> Self {
        let criteria = FilterCriteria::All;
        let listing = filter(&catalog, &criteria);
        Self {
            catalog,
            shipping: ShippingPolicy::default(),
            view: View::Home,
            criteria,
            listing,
            cart: Cart::new(),
            cart_open: false,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Set the shipping policy.
    pub fn with_shipping(mut self, shipping: ShippingPolicy) -> Self {
        self.shipping = shipping;
        self
    }

    /// Seed the order-number generator, for reproducible confirmations.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn shipping(&self) -> &ShippingPolicy {
        &self.shipping
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Apply one intent.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), CommerceError> {
        let from = self.view.kind();
        let name = intent.name();
        tracing::debug!(intent = name, from = from.as_str(), "dispatch");

        let result = self.apply(intent);
        match &result {
            Ok(()) if self.view.kind() != from => {
                tracing::debug!(from = from.as_str(), to = self.view.kind().as_str(), "view changed");
            }
            Ok(()) => {}
            Err(e) => {
                tracing::warn!(intent = name, from = from.as_str(), error = %e, "intent rejected");
            }
        }
        result
    }

    /// Dispatch several intents, stopping at the first rejection.
    pub fn dispatch_all(
        &mut self,
        intents: impl IntoIterator<Item = Intent>,
    ) -> Result<(), CommerceError> {
        intents.into_iter().try_for_each(|i| self.dispatch(i))
    }

    fn apply(&mut self, intent: Intent) -> Result<(), CommerceError> {
        // The confirmation screen can only be left for home.
        if matches!(self.view, View::OrderSuccess(_)) && !matches!(intent, Intent::Home) {
            return Err(self.invalid(&intent));
        }

        match intent {
            Intent::Home => {
                self.set_criteria(FilterCriteria::All);
                self.view = View::Home;
            }
            Intent::Search(query) => self.show_listing(FilterCriteria::text(query)),
            Intent::SelectCategory(selection) => {
                self.show_listing(FilterCriteria::category(selection))
            }
            Intent::ShowSpecial(tag) => self.show_listing(FilterCriteria::special(tag)),
            Intent::FooterLink(link) => self.follow_footer(link),
            Intent::ClearFilters => self.set_criteria(FilterCriteria::All),
            Intent::OpenProduct(id) => {
                let product = self.find(&id)?.clone();
                self.view = View::Detail(product);
            }
            Intent::BackToShop => {
                if self.view.kind() != ViewKind::Detail {
                    return Err(self.invalid(&Intent::BackToShop));
                }
                self.view = View::Listing;
            }
            Intent::OpenAccount => self.view = View::Account,
            Intent::OpenSupport(topic) => self.view = View::Support(topic),
            Intent::OpenCart => self.cart_open = true,
            Intent::CloseCart => self.cart_open = false,
            Intent::AddToCart(id) => {
                let product = self.find(&id)?.clone();
                let quantity = self.cart.add(&product);
                self.cart_open = true;
                tracing::debug!(product = %id, quantity, "added to cart");
            }
            Intent::RemoveFromCart(id) => {
                self.cart.remove(&id);
            }
            Intent::AdjustQuantity { id, delta } => {
                self.cart.update_quantity(&id, delta);
            }
            Intent::Checkout => {
                self.cart_open = false;
                self.view = View::Checkout;
            }
            Intent::LeaveCheckout => {
                if self.view != View::Checkout {
                    return Err(self.invalid(&Intent::LeaveCheckout));
                }
                self.view = View::Home;
                self.cart_open = true;
            }
            Intent::PlaceOrder(form) => self.place_order(&form)?,
        }
        Ok(())
    }

    fn place_order(&mut self, form: &CheckoutForm) -> Result<(), CommerceError> {
        if self.view != View::Checkout {
            return Err(CommerceError::InvalidTransition {
                from: self.view.kind().to_string(),
                intent: "place_order".to_string(),
            });
        }
        if self.cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        form.validate()?;

        let confirmation = OrderConfirmation::new(
            OrderNumber::random(&mut self.rng),
            Utc::now(),
            form,
            self.cart.entries().to_vec(),
            self.cart.pricing(&self.shipping),
        );
        tracing::info!(
            order = %confirmation.number,
            items = confirmation.item_count(),
            total = confirmation.pricing.total.amount(),
            "order placed"
        );

        self.cart.clear();
        self.cart_open = false;
        self.view = View::OrderSuccess(confirmation);
        Ok(())
    }

    fn follow_footer(&mut self, link: FooterLink) {
        let criteria = match link {
            FooterLink::NewArrivals => FilterCriteria::special(SpecialTag::New),
            FooterLink::BestSellers => FilterCriteria::special(SpecialTag::Bestseller),
            FooterLink::Sales => FilterCriteria::special(SpecialTag::Sale),
            FooterLink::Pens => FilterCriteria::Category(Category::Pens),
            FooterLink::Notebooks => FilterCriteria::Category(Category::Notebooks),
            FooterLink::Support(topic) => {
                self.view = View::Support(topic);
                return;
            }
        };
        self.show_listing(criteria);
    }

    fn show_listing(&mut self, criteria: FilterCriteria) {
        self.set_criteria(criteria);
        self.view = View::Listing;
    }

    fn set_criteria(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.listing = filter(&self.catalog, &criteria);
            self.criteria = criteria;
        }
    }

    fn find(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.catalog
            .get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    fn invalid(&self, intent: &Intent) -> CommerceError {
        CommerceError::InvalidTransition {
            from: self.view.kind().to_string(),
            intent: intent.name().to_string(),
        }
    }

    /// Immutable copy of everything the front end renders.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            view: self.view.clone(),
            criteria: self.criteria.clone(),
            listing: self.listing.clone(),
            featured: self.catalog.featured(FEATURED_COUNT).to_vec(),
            cart: CartSnapshot {
                entries: self.cart.entries().to_vec(),
                pricing: self.cart.pricing(&self.shipping),
                item_count: self.cart.item_count(),
                entry_count: self.cart.entry_count(),
            },
            cart_open: self.cart_open,
        }
    }
}
