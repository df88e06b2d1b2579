//! Property-based tests for the builder and its pricing.
//!
//! These tests drive builders with arbitrary action sequences and verify that:
//! - Totals are a pure function of the current selections
//! - `rush_fee + subtotal == total` for every multiplier
//! - The custom-quote flag mirrors the current selections exactly
//! - Applying a preset twice equals applying it once
//! - Snapshots survive the quote store and JSON unchanged

use proptest::prelude::*;

use service_quote::adapters::InMemoryQuoteStore;
use service_quote::domain::builder::{compute_totals, BuilderSnapshot, QuoteBuilder, QuoteTotals, Selection};
use service_quote::domain::catalog::{CatalogRegistry, DimensionRole, Price};
use service_quote::domain::foundation::{Money, Multiplier, ServiceType};
use service_quote::domain::recommendation::CategoryKey;
use service_quote::ports::QuoteStore;

#[derive(Debug, Clone)]
enum Action {
    Select(usize, usize),
    Toggle(usize, usize),
    Category(usize),
    Next,
    Prev,
    GoTo(usize),
}

fn arb_service() -> impl Strategy<Value = ServiceType> {
    prop::sample::select(ServiceType::all().to_vec())
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => (any::<usize>(), any::<usize>()).prop_map(|(d, o)| Action::Select(d, o)),
        2 => (any::<usize>(), any::<usize>()).prop_map(|(d, o)| Action::Toggle(d, o)),
        1 => any::<usize>().prop_map(Action::Category),
        1 => Just(Action::Next),
        1 => Just(Action::Prev),
        1 => (0usize..10).prop_map(Action::GoTo),
    ]
}

fn arb_actions() -> impl Strategy<Value = Vec<Action>> {
    prop::collection::vec(arb_action(), 0..30)
}

fn builder_after(service: ServiceType, actions: &[Action]) -> QuoteBuilder {
    let registry = CatalogRegistry::embedded().unwrap();
    let catalog = registry.catalog(service).clone();
    let mut builder = QuoteBuilder::new(catalog.clone());
    let dimensions = catalog.schema().dimensions();
    let mut categories: Vec<CategoryKey> = catalog.presets().categories().cloned().collect();
    categories.push(CategoryKey::try_new("no-such-category").unwrap());

    for action in actions {
        match *action {
            Action::Select(d, o) | Action::Toggle(d, o) => {
                let dimension = &dimensions[d % dimensions.len()];
                let option = dimension.options()[o % dimension.options().len()].id();
                if matches!(action, Action::Select(..)) {
                    builder.select(dimension.id(), option);
                } else {
                    builder.toggle_add_on(dimension.id(), option);
                }
            }
            Action::Category(c) => {
                builder.set_category(&categories[c % categories.len()]);
            }
            Action::Next => {
                builder.next();
            }
            Action::Prev => {
                builder.prev();
            }
            Action::GoTo(step) => {
                builder.go_to(step);
            }
        }
    }
    builder
}

fn expects_custom_quote(builder: &QuoteBuilder) -> bool {
    builder.catalog().schema().dimensions().iter().any(|dimension| {
        matches!(
            dimension.role(),
            DimensionRole::Primary | DimensionRole::Deliverable
        ) && matches!(
            builder.selection(dimension.id()),
            Some(Selection::Single {
                price: Price::RequiresQuote,
                ..
            })
        )
    })
}

proptest! {
    /// Recomputing from the same selections always yields the stored totals.
    #[test]
    fn totals_are_a_pure_function_of_selections(service in arb_service(), actions in arb_actions()) {
        let builder = builder_after(service, &actions);
        let schema = builder.catalog().schema();

        let first = compute_totals(schema, builder.selections(), builder.timeline_multiplier());
        let second = compute_totals(schema, builder.selections(), builder.timeline_multiplier());

        prop_assert_eq!(first, second);
        prop_assert_eq!(first, builder.totals());
    }

    /// Rush fee and subtotal always add up to the total.
    #[test]
    fn rounding_law_holds(units in 0i64..1_000_000, factor in 1.0f64..4.0) {
        let multiplier = Multiplier::try_new(factor).unwrap();
        let totals = QuoteTotals::from_subtotal(Money::from_units(units), multiplier, false);

        prop_assert_eq!(totals.rush_fee + totals.subtotal, totals.total);
        prop_assert!(totals.total >= totals.subtotal);
    }

    /// Rounding law holds for real builders too.
    #[test]
    fn builder_rounding_law_holds(service in arb_service(), actions in arb_actions()) {
        let totals = builder_after(service, &actions).totals();
        prop_assert_eq!(totals.rush_fee + totals.subtotal, totals.total);
    }

    /// The flag is set exactly when a primary or deliverable selection
    /// requires a custom quote.
    #[test]
    fn custom_quote_flag_mirrors_selections(service in arb_service(), actions in arb_actions()) {
        let builder = builder_after(service, &actions);
        prop_assert_eq!(builder.totals().has_custom_quote, expects_custom_quote(&builder));
    }

    /// A second application of the same preset changes nothing.
    #[test]
    fn preset_application_is_idempotent(
        service in arb_service(),
        actions in arb_actions(),
        pick in any::<usize>(),
    ) {
        let mut builder = builder_after(service, &actions);
        let categories: Vec<CategoryKey> =
            builder.catalog().presets().categories().cloned().collect();
        let category = &categories[pick % categories.len()];

        builder.apply_recommendations(category);
        let once = builder.snapshot();
        builder.apply_recommendations(category);

        prop_assert_eq!(builder.snapshot(), once);
    }

    /// Step position never leaves the wizard.
    #[test]
    fn step_stays_in_range(service in arb_service(), actions in arb_actions()) {
        let builder = builder_after(service, &actions);
        let step = builder.current_step().value();
        prop_assert!(step >= 1);
        prop_assert!(step <= builder.step_count() + 1);
    }

    /// Saved snapshots come back unchanged, from the store and from JSON.
    #[test]
    fn snapshots_round_trip(service in arb_service(), actions in arb_actions()) {
        let builder = builder_after(service, &actions);
        let mut store = InMemoryQuoteStore::new();
        builder.save_to(&mut store);

        let stored = store.service_config(service).cloned().unwrap();
        prop_assert_eq!(&stored, &builder.snapshot());

        let json = serde_json::to_string(&stored).unwrap();
        let parsed: BuilderSnapshot = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&parsed, &stored);

        let mut restored = QuoteBuilder::new(builder.catalog().clone());
        prop_assert!(restored.load_from(&store));
        prop_assert_eq!(restored.snapshot(), builder.snapshot());

        store.clear_service_config(service);
        prop_assert!(store.service_config(service).is_none());
    }
}
