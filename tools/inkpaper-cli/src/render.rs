//! Terminal rendering of storefront snapshots.

use console::style;
use inkpaper_commerce::cart::CartPricing;
use inkpaper_commerce::catalog::Product;
use inkpaper_commerce::checkout::OrderConfirmation;
use inkpaper_commerce::search::Listing;
use inkpaper_commerce::storefront::{CartSnapshot, FooterLink, Snapshot, SupportTopic, View};

use crate::output::{badges, stars, Output};

/// Draw the screen a snapshot describes, then the cart panel if open.
pub fn snapshot(out: &Output, store_name: &str, snap: &Snapshot) {
    if out.is_json() {
        out.json(snap);
        return;
    }

    match &snap.view {
        View::Home => home(out, store_name, &snap.featured),
        View::Listing => listing(out, &snap.listing),
        View::Detail(product) => detail(out, product),
        View::Support(topic) => support(out, *topic),
        View::Account => account(out),
        View::Checkout => checkout(out, &snap.cart),
        View::OrderSuccess(order) => order_success(out, order),
    }

    if snap.cart_open {
        cart(out, &snap.cart);
    } else if snap.view.shows_chrome() && !snap.cart.is_empty() {
        out.line(&format!(
            "{}",
            style(format!("Cart: {} item(s), {}", snap.cart.item_count, snap.cart.pricing.subtotal)).dim()
        ));
    }
}

/// One catalog row: id, name, price and badges.
pub fn product_row(out: &Output, p: &Product) {
    out.list_item(&format!(
        "{} {}  {}  {}  {}",
        style(format!("[{}]", p.id)).dim(),
        p.name,
        style(p.price.display()).bold(),
        style(p.category).dim(),
        badges(p.is_new, p.is_sale, p.is_bestseller()),
    ));
}

pub fn listing(out: &Output, listing: &Listing) {
    out.header(&listing.title());
    out.line(&format!("{}", style(listing.summary()).dim()));
    if listing.is_empty() {
        out.info("No products match. Try 'clear' to see everything.");
        return;
    }
    for p in &listing.products {
        product_row(out, p);
    }
}

fn home(out: &Output, store_name: &str, featured: &[Product]) {
    out.header(store_name);
    out.line("Crafted for creators: fountain pens, notebooks and art supplies.");
    out.line("");
    out.line(&format!("{}", style("Featured").bold()));
    for p in featured {
        product_row(out, p);
    }
    out.line("");
    let shop: Vec<&str> = FooterLink::SHOP.iter().map(|l| l.label()).collect();
    out.kv("Shop", &shop.join(" · "));
}

fn detail(out: &Output, p: &Product) {
    out.header(&p.name);
    let tags = badges(p.is_new, p.is_sale, p.is_bestseller());
    if !tags.is_empty() {
        out.line(&tags);
    }
    out.kv("Price", &p.price.display());
    out.kv("Category", p.category.label());
    out.kv("Rating", &format!("{} ({} reviews)", stars(p.rating), p.reviews));
    out.kv("Id", p.id.as_str());
    out.line("");
    out.line(&p.description);
    out.line("");
    out.info(&format!("'add {}' to put it in your cart, 'back' to keep browsing", p.id));
}

fn support(out: &Output, topic: SupportTopic) {
    out.header(topic.label());
    match topic {
        SupportTopic::Faq => {
            out.kv("Do you ship internationally?", "Currently, we only ship within India.");
            out.kv(
                "What is your return policy?",
                "Returns within 7 days of delivery for unused items in original packaging.",
            );
            out.kv(
                "Are your fountain pens authentic?",
                "Yes, we are authorized retailers for every brand we list.",
            );
        }
        SupportTopic::ShippingReturns => {
            out.line("Standard delivery takes 3-5 business days for metros and 5-7 elsewhere.");
            out.line("Email support@inkandpaper.in with your order ID within 7 days to return.");
        }
        SupportTopic::TrackOrder => {
            out.line("Enter your order ID (e.g., #1234) to track the status of your package.");
        }
        SupportTopic::ContactUs => {
            out.kv("Email", "support@inkandpaper.in");
            out.kv("Hours", "Mon-Fri, 9am - 6pm IST");
        }
    }
    let others: Vec<&str> = SupportTopic::ALL
        .iter()
        .filter(|t| **t != topic)
        .map(|t| t.label())
        .collect();
    out.kv("See also", &others.join(" · "));
}

fn account(out: &Output) {
    out.header("My Account");
    out.line("You haven't placed any orders yet.");
    out.info("'support faq' for help, 'home' to keep shopping");
}

fn pricing(out: &Output, pricing: &CartPricing) {
    out.kv("Subtotal", &pricing.subtotal.display());
    out.kv("Shipping", &pricing.shipping_label());
    out.kv("Total", &style(pricing.total.display()).bold().to_string());
}

fn checkout(out: &Output, cart: &CartSnapshot) {
    out.header("Checkout");
    out.line(&format!("{}", style("Order Summary").bold()));
    for entry in &cart.entries {
        out.list_item(&format!(
            "{} x{}  {}",
            entry.product.name,
            entry.quantity,
            entry.line_total().display()
        ));
    }
    pricing(out, &cart.pricing);
    out.info("'place' to enter your details and pay, 'leave' to go back");
}

fn order_success(out: &Output, order: &OrderConfirmation) {
    out.header("Order Placed Successfully!");
    out.success(&order.message());
    out.kv("Items", &order.item_count().to_string());
    out.kv("Paid", &format!("{} via {}", order.pricing.total.display(), order.payment));
    out.kv("Placed", &order.placed_at.format("%d %b %Y, %H:%M UTC").to_string());
    out.info("'home' to continue shopping");
}

pub fn cart(out: &Output, cart: &CartSnapshot) {
    out.header(&format!("Your Cart ({})", cart.entry_count));
    if cart.is_empty() {
        out.line("Your cart is empty.");
        return;
    }
    for entry in &cart.entries {
        out.list_item(&format!(
            "{} {}  {} x{} = {}",
            style(format!("[{}]", entry.product.id)).dim(),
            entry.product.name,
            entry.product.price,
            entry.quantity,
            style(entry.line_total().display()).bold(),
        ));
    }
    pricing(out, &cart.pricing);
}
