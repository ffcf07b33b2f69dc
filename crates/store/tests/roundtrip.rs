//! Full registry round-trip through a `.dat` file.

use domain::{Catalog, ClientDirectory, Money, OrderLedger, OrderState, PersonalInfo, PizzaKind};
use store::{RegistrySnapshot, load_from, save_to};

fn populated_registries() -> (Catalog, ClientDirectory, OrderLedger) {
    let mut catalog = Catalog::new();
    catalog
        .create_ingredient("Cheese", Money::from_cents(200))
        .unwrap();
    catalog
        .create_ingredient("Tomato", Money::from_cents(100))
        .unwrap();
    catalog
        .create_ingredient("Ham", Money::from_cents(150))
        .unwrap();
    catalog
        .forbid_ingredient("Ham", PizzaKind::Regional)
        .unwrap();
    catalog
        .create_pizza("Margherita", PizzaKind::Vegetarian)
        .unwrap();
    catalog
        .add_ingredient_to_pizza("Margherita", "Cheese")
        .unwrap();
    catalog
        .add_ingredient_to_pizza("Margherita", "Tomato")
        .unwrap();
    catalog
        .set_sale_price("Margherita", Money::from_cents(500))
        .unwrap();

    let mut directory = ClientDirectory::new();
    directory
        .register(
            "marie@example.fr",
            "secret123",
            PersonalInfo::new("Dupont", "Marie", "1 rue des Lilas", 30),
        )
        .unwrap();

    let mut ledger = OrderLedger::new();
    let processed = ledger.open_order("marie@example.fr");
    directory.attach_order("marie@example.fr", processed);
    ledger
        .order_mut(processed)
        .unwrap()
        .add_pizza("Margherita")
        .unwrap();
    ledger.validate(processed).unwrap();
    ledger.process_pending();

    let pending = ledger.open_order("marie@example.fr");
    directory.attach_order("marie@example.fr", pending);
    ledger
        .order_mut(pending)
        .unwrap()
        .add_pizza("Margherita")
        .unwrap();
    ledger.validate(pending).unwrap();

    (catalog, directory, ledger)
}

#[test]
fn registry_round_trips_through_a_dat_file() {
    let (catalog, directory, ledger) = populated_registries();
    let snapshot = RegistrySnapshot::capture(&catalog, &directory, &ledger);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.dat");
    save_to(&path, &snapshot).unwrap();

    let (catalog2, directory2, ledger2) = load_from(&path).unwrap().restore().unwrap();

    // Catalog: prices, restrictions, pizzas.
    assert_eq!(
        catalog2.ingredient("cheese").unwrap().price(),
        Money::from_cents(200)
    );
    assert!(catalog2.is_forbidden(PizzaKind::Regional, "ham"));
    let pizza = catalog2.pizza("Margherita").unwrap();
    assert_eq!(catalog2.minimal_price(pizza), Money::from_cents(420));
    assert_eq!(catalog2.sale_price(pizza), Money::from_cents(500));

    // Directory: client and credentials survive, sessions do not.
    let client = directory2.client("marie@example.fr").unwrap();
    assert!(client.password_matches("secret123"));
    assert_eq!(client.orders().len(), 2);

    // Ledger: both order lists and the counter.
    assert_eq!(ledger2.processed().len(), 1);
    assert_eq!(ledger2.pending().len(), 1);
    assert_eq!(ledger2.next_id(), ledger.next_id());
    let processed = ledger2.processed_orders();
    assert_eq!(processed[0].state(), OrderState::Processed);
    assert_eq!(processed[0].pizzas(), ["Margherita"]);
}

#[test]
fn snapshot_restore_is_exact_for_empty_registries() {
    let snapshot = RegistrySnapshot::capture(
        &Catalog::new(),
        &ClientDirectory::new(),
        &OrderLedger::new(),
    );
    let (catalog, directory, ledger) = snapshot.restore().unwrap();
    assert!(catalog.pizzas().is_empty());
    assert_eq!(directory.clients().count(), 0);
    assert_eq!(ledger.next_id(), 1);
}
