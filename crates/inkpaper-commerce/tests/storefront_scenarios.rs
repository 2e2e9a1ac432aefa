/// End-to-end storefront sessions driven only through the public API.
use inkpaper_commerce::prelude::*;

fn form() -> CheckoutForm {
    CheckoutForm {
        contact: ContactDetails::new("reader@example.in"),
        shipping: ShippingAddress {
            first_name: "Meera".into(),
            last_name: "Iyer".into(),
            address: "14 Residency Road".into(),
            city: "Bengaluru".into(),
            state: "Karnataka".into(),
            pincode: "560025".into(),
            phone: "+91 90000 00000".into(),
        },
        payment: PaymentMethod::Upi,
    }
}

#[test]
fn adding_the_same_product_twice_merges_entries() {
    let mut store = Storefront::new(Catalog::ink_and_paper());
    let p1 = ProductId::new("1");

    store.dispatch(Intent::AddToCart(p1.clone())).unwrap();
    let snap = store.snapshot();
    assert_eq!(snap.cart.entries.len(), 1);
    assert_eq!(snap.cart.entries[0].quantity, 1);

    store.dispatch(Intent::AddToCart(p1.clone())).unwrap();
    let snap = store.snapshot();
    assert_eq!(snap.cart.entries.len(), 1);
    assert_eq!(snap.cart.entries[0].product.id, p1);
    assert_eq!(snap.cart.entries[0].quantity, 2);
    assert_eq!(snap.cart.pricing.subtotal, Money::new(5920));
}

#[test]
fn quantity_never_drops_below_one() {
    let mut store = Storefront::new(Catalog::ink_and_paper());
    let id = ProductId::new("6");
    store.dispatch(Intent::AddToCart(id.clone())).unwrap();
    store
        .dispatch(Intent::AdjustQuantity { id: id.clone(), delta: 2 })
        .unwrap();
    assert_eq!(store.cart().get(&id).unwrap().quantity, 3);

    store
        .dispatch(Intent::AdjustQuantity { id: id.clone(), delta: -100 })
        .unwrap();
    assert_eq!(store.cart().get(&id).unwrap().quantity, 1);
}

#[test]
fn bestseller_listing_is_exactly_the_derived_set() {
    let catalog = Catalog::ink_and_paper();
    let listing = filter(&catalog, &FilterCriteria::Special(SpecialTag::Bestseller));

    let expected: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| p.rating >= 4.8 || p.reviews > 1000)
        .collect();
    let actual: Vec<&Product> = listing.products.iter().collect();
    assert_eq!(actual, expected);
}

#[test]
fn placing_an_order_empties_the_cart_for_good() {
    let mut store = Storefront::new(Catalog::ink_and_paper());
    store
        .dispatch_all([
            Intent::AddToCart(ProductId::new("2")),
            Intent::AddToCart(ProductId::new("9")),
            Intent::Checkout,
            Intent::PlaceOrder(form()),
        ])
        .unwrap();

    let snap = store.snapshot();
    assert_eq!(snap.view.kind(), ViewKind::OrderSuccess);
    assert!(snap.cart.is_empty());
    if let View::OrderSuccess(order) = &snap.view {
        assert_eq!(order.pricing.subtotal, Money::new(9900));
        assert!(order.pricing.ships_free());
        assert_eq!(order.payment, "UPI / Netbanking");
    }

    store.dispatch(Intent::Home).unwrap();
    let snap = store.snapshot();
    assert_eq!(snap.view, View::Home);
    assert!(snap.cart.is_empty());
    assert_eq!(snap.cart.item_count, 0);
}

#[test]
fn removing_an_unknown_id_changes_nothing() {
    let mut store = Storefront::new(Catalog::ink_and_paper());
    store.dispatch(Intent::AddToCart(ProductId::new("4"))).unwrap();
    let before = store.snapshot();

    store
        .dispatch(Intent::RemoveFromCart(ProductId::new("nonexistent-id")))
        .unwrap();
    assert_eq!(store.snapshot(), before);
}

#[test]
fn empty_search_is_distinguishable_from_no_filter() {
    let mut store = Storefront::new(Catalog::ink_and_paper());
    store.dispatch(Intent::Search("quill".into())).unwrap();
    let listing = store.snapshot().listing;
    assert!(listing.is_empty());
    assert!(listing.is_filtered());
    assert_eq!(listing.title(), "Search: \"quill\"");
    assert_eq!(listing.summary(), "0 products found");

    store.dispatch(Intent::Search("   ".into())).unwrap();
    let listing = store.snapshot().listing;
    assert!(!listing.is_filtered());
    assert_eq!(listing.len(), store.catalog().len());
}

#[test]
fn snapshots_serialize_for_front_ends() {
    let mut store = Storefront::new(Catalog::ink_and_paper());
    store.dispatch(Intent::OpenProduct(ProductId::new("3"))).unwrap();
    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert_eq!(json["view"]["view"], "detail");
    assert_eq!(json["view"]["payload"]["id"], "3");
    assert_eq!(json["criteria"]["kind"], "all");
}
