//! End-to-end scenarios through the [`Pizzeria`] facade: catalog setup,
//! accounts, the order lifecycle, evaluations, filters, and persistence.

use domain::{
    CatalogError, Money, OrderState, PersonalInfo, PizzaKind, RegisterError, Session,
};
use services::{Pizzeria, ServiceError};

fn info() -> PersonalInfo {
    PersonalInfo::new("Dupont", "Marie", "1 rue des Lilas", 30)
}

fn pizzeria_with_menu() -> Pizzeria {
    let mut pizzeria = Pizzeria::new();
    pizzeria
        .create_ingredient("Cheese", Money::from_cents(200))
        .unwrap();
    pizzeria
        .create_ingredient("Tomato", Money::from_cents(100))
        .unwrap();
    pizzeria
        .create_ingredient("Ham", Money::from_cents(150))
        .unwrap();
    pizzeria
        .create_pizza("Margherita", PizzaKind::Vegetarian)
        .unwrap();
    pizzeria
        .add_ingredient_to_pizza("Margherita", "Cheese")
        .unwrap();
    pizzeria
        .add_ingredient_to_pizza("Margherita", "Tomato")
        .unwrap();
    pizzeria.create_pizza("Regina", PizzaKind::Meat).unwrap();
    pizzeria.add_ingredient_to_pizza("Regina", "Ham").unwrap();
    pizzeria
        .add_ingredient_to_pizza("Regina", "Cheese")
        .unwrap();
    pizzeria
}

fn logged_in_client(pizzeria: &mut Pizzeria) -> Session {
    pizzeria
        .register("marie@example.fr", "secret123", info())
        .unwrap();
    pizzeria.login("marie@example.fr", "secret123").unwrap()
}

#[test]
fn minimal_price_guards_the_sale_price() {
    let mut pizzeria = pizzeria_with_menu();

    // 2.00 + 1.00 cost, 40% markup, rounded up to the tenth: 4.20.
    assert_eq!(
        pizzeria.minimal_price_of("Margherita").unwrap(),
        Money::from_cents(420)
    );

    let too_low = pizzeria.set_sale_price("Margherita", Money::from_cents(400));
    assert!(matches!(
        too_low,
        Err(CatalogError::BelowMinimalPrice { .. })
    ));

    pizzeria
        .set_sale_price("Margherita", Money::from_cents(500))
        .unwrap();
    assert_eq!(
        pizzeria.sale_price_of("Margherita").unwrap(),
        Money::from_cents(500)
    );

    let stats_profit = pizzeria.stats().profit_per_pizza();
    let margherita = stats_profit.iter().find(|(n, _)| n == "Margherita");
    assert_eq!(margherita.unwrap().1, Money::from_cents(80));
}

#[test]
fn registration_enforces_the_account_rules() {
    let mut pizzeria = Pizzeria::new();

    assert_eq!(
        pizzeria.register("marie@example.fr", "short77", info()),
        Err(RegisterError::PasswordTooShort)
    );
    assert_eq!(
        pizzeria.register("not-an-email", "secret123", info()),
        Err(RegisterError::InvalidEmail)
    );
    pizzeria
        .register("marie@example.fr", "secret123", info())
        .unwrap();
    // Same address in a different case is still a duplicate.
    assert_eq!(
        pizzeria.register("MARIE@example.fr", "another99", info()),
        Err(RegisterError::DuplicateEmail)
    );
}

#[test]
fn full_order_lifecycle() {
    let mut pizzeria = pizzeria_with_menu();
    pizzeria
        .set_sale_price("Margherita", Money::from_cents(500))
        .unwrap();
    let session = logged_in_client(&mut pizzeria);

    let id = pizzeria.start_order(&session).unwrap();
    pizzeria
        .add_pizzas_to_order(&session, id, "margherita", 2)
        .unwrap();
    pizzeria
        .remove_pizza_from_order(&session, id, "Margherita")
        .unwrap();

    let in_progress = pizzeria.orders_in_progress(&session).unwrap();
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].pizzas(), ["Margherita"]);

    pizzeria.validate_order(&session, id).unwrap();
    // Frozen after validation.
    assert!(matches!(
        pizzeria.add_pizzas_to_order(&session, id, "Regina", 1),
        Err(ServiceError::Order(_))
    ));

    let batch = pizzeria.process_pending_orders();
    assert_eq!(batch, [id]);
    assert!(pizzeria.process_pending_orders().is_empty());

    let past = pizzeria.past_orders(&session).unwrap();
    assert_eq!(past.len(), 1);
    assert_eq!(past[0].state(), OrderState::Processed);
    assert_eq!(
        past[0].total_price(pizzeria.catalog()),
        Money::from_cents(500)
    );
    assert!(pizzeria.orders_in_progress(&session).unwrap().is_empty());
}

#[test]
fn orders_are_private_to_their_owner() {
    let mut pizzeria = pizzeria_with_menu();
    let marie = logged_in_client(&mut pizzeria);
    pizzeria
        .register("paul@example.fr", "password8", info())
        .unwrap();
    let paul = pizzeria.login("paul@example.fr", "password8").unwrap();

    let id = pizzeria.start_order(&marie).unwrap();
    assert!(matches!(
        pizzeria.add_pizzas_to_order(&paul, id, "Margherita", 1),
        Err(ServiceError::NotOrderOwner { .. })
    ));
    assert!(matches!(
        pizzeria.cancel_order(&paul, id),
        Err(ServiceError::NotOrderOwner { .. })
    ));
}

#[test]
fn cancel_only_while_composing() {
    let mut pizzeria = pizzeria_with_menu();
    let session = logged_in_client(&mut pizzeria);

    let id = pizzeria.start_order(&session).unwrap();
    pizzeria
        .add_pizzas_to_order(&session, id, "Margherita", 1)
        .unwrap();
    pizzeria.validate_order(&session, id).unwrap();
    assert!(matches!(
        pizzeria.cancel_order(&session, id),
        Err(ServiceError::Order(_))
    ));

    let second = pizzeria.start_order(&session).unwrap();
    pizzeria.cancel_order(&session, second).unwrap();
    // The cancelled order is gone from the client's view entirely.
    assert_eq!(pizzeria.orders_in_progress(&session).unwrap().len(), 0);
}

#[test]
fn rating_requires_a_processed_purchase_and_happens_once() {
    let mut pizzeria = pizzeria_with_menu();
    let session = logged_in_client(&mut pizzeria);

    assert!(matches!(
        pizzeria.rate_pizza(&session, "Margherita", 4, None),
        Err(ServiceError::NotPurchased { .. })
    ));

    let id = pizzeria.start_order(&session).unwrap();
    pizzeria
        .add_pizzas_to_order(&session, id, "Margherita", 1)
        .unwrap();
    pizzeria.validate_order(&session, id).unwrap();

    // Validated but not yet processed does not count as a purchase.
    assert!(matches!(
        pizzeria.rate_pizza(&session, "Margherita", 4, None),
        Err(ServiceError::NotPurchased { .. })
    ));

    pizzeria.process_pending_orders();
    assert!(matches!(
        pizzeria.rate_pizza(&session, "Margherita", 6, None),
        Err(ServiceError::InvalidRating { rating: 6 })
    ));
    pizzeria
        .rate_pizza(&session, "Margherita", 4, Some("Tres bonne".to_string()))
        .unwrap();
    assert!(matches!(
        pizzeria.rate_pizza(&session, "Margherita", 5, None),
        Err(ServiceError::AlreadyRated { .. })
    ));

    assert_eq!(pizzeria.average_rating("Margherita").unwrap(), Some(4.0));
    assert_eq!(pizzeria.average_rating("Regina").unwrap(), None);
    assert!(pizzeria.average_rating("Quattro").is_err());
    let evaluations = pizzeria.evaluations("Margherita").unwrap();
    assert_eq!(evaluations.len(), 1);
    assert_eq!(evaluations[0].comment(), Some("Tres bonne"));
}

#[test]
fn filters_combine_and_clear() {
    let mut pizzeria = pizzeria_with_menu();
    pizzeria
        .set_sale_price("Margherita", Money::from_cents(500))
        .unwrap();
    pizzeria
        .set_sale_price("Regina", Money::from_cents(600))
        .unwrap();

    pizzeria.set_kind_filter(PizzaKind::Vegetarian);
    let names: Vec<&str> = pizzeria
        .filtered_pizzas()
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(names, ["Margherita"]);

    // Adding a price cap below every vegetarian pizza empties the view.
    pizzeria.set_max_price_filter(Money::from_cents(450));
    assert!(pizzeria.filtered_pizzas().is_empty());

    pizzeria.clear_filters();
    assert_eq!(pizzeria.filtered_pizzas().len(), 2);

    pizzeria.require_ingredient_filter(["ham"]);
    let names: Vec<&str> = pizzeria
        .filtered_pizzas()
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(names, ["Regina"]);
}

#[test]
fn logout_invalidates_the_session() {
    let mut pizzeria = pizzeria_with_menu();
    let session = logged_in_client(&mut pizzeria);
    pizzeria.logout(&session).unwrap();
    assert!(matches!(
        pizzeria.start_order(&session),
        Err(ServiceError::Session(_))
    ));
}

#[test]
fn statistics_follow_processed_orders() {
    let mut pizzeria = pizzeria_with_menu();
    pizzeria
        .set_sale_price("Margherita", Money::from_cents(500))
        .unwrap();
    pizzeria
        .set_sale_price("Regina", Money::from_cents(700))
        .unwrap();
    let session = logged_in_client(&mut pizzeria);

    // Nothing processed yet: everything is zero or empty.
    assert_eq!(pizzeria.stats().total_profit(), Money::zero());
    assert!(pizzeria.stats().client_activity().is_empty());

    let id = pizzeria.start_order(&session).unwrap();
    pizzeria
        .add_pizzas_to_order(&session, id, "Margherita", 2)
        .unwrap();
    pizzeria
        .add_pizzas_to_order(&session, id, "Regina", 1)
        .unwrap();
    pizzeria.validate_order(&session, id).unwrap();
    pizzeria.process_pending_orders();

    let ranking = pizzeria.stats().ranking_by_purchase_count();
    assert_eq!(ranking[0].name, "Margherita");
    assert_eq!(ranking[0].count, 2);
    assert_eq!(ranking[1].name, "Regina");
    assert_eq!(ranking[1].count, 1);

    let activity = pizzeria.stats().client_activity();
    assert_eq!(activity.len(), 1);
    assert_eq!(activity[0].email, "marie@example.fr");
    assert_eq!(activity[0].pizzas_ordered, 3);

    assert_eq!(pizzeria.processed_orders().len(), 1);
    assert_eq!(
        pizzeria.processed_orders_for_client("marie@example.fr").len(),
        1
    );
}

#[test]
fn save_and_load_through_the_facade() {
    let mut pizzeria = pizzeria_with_menu();
    pizzeria
        .set_sale_price("Margherita", Money::from_cents(500))
        .unwrap();
    let session = logged_in_client(&mut pizzeria);
    let id = pizzeria.start_order(&session).unwrap();
    pizzeria
        .add_pizzas_to_order(&session, id, "Margherita", 1)
        .unwrap();
    pizzeria.validate_order(&session, id).unwrap();
    pizzeria.process_pending_orders();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pizzeria.dat");
    pizzeria.save(&path).unwrap();

    let mut restored = Pizzeria::load(&path).unwrap();
    assert_eq!(
        restored.sale_price_of("Margherita").unwrap(),
        Money::from_cents(500)
    );
    assert_eq!(restored.processed_orders().len(), 1);

    // Sessions do not survive a restore; credentials do.
    assert!(matches!(
        restored.orders_in_progress(&session),
        Err(ServiceError::Session(_))
    ));
    let fresh = restored.login("marie@example.fr", "secret123").unwrap();
    assert_eq!(restored.past_orders(&fresh).unwrap().len(), 1);
}
