use foresight_core::config::ThresholdTable;
use foresight_core::models::BadgeTier;
use proptest::prelude::*;

const TIERS: [BadgeTier; 4] = [
    BadgeTier::Bronze,
    BadgeTier::Silver,
    BadgeTier::Gold,
    BadgeTier::Platinum,
];

/// Four strictly ascending bounds.
fn arb_bounds() -> impl Strategy<Value = Vec<f64>> {
    (-100.0f64..100.0, proptest::collection::vec(0.5f64..50.0, 3)).prop_map(|(start, steps)| {
        let mut bounds = vec![start];
        for step in steps {
            let last = bounds[bounds.len() - 1];
            bounds.push(last + step);
        }
        bounds
    })
}

fn table_at_least(bounds: &[f64]) -> ThresholdTable<BadgeTier> {
    ThresholdTable::at_least(TIERS.into_iter().zip(bounds.iter().copied()).collect())
}

fn table_at_most(bounds: &[f64]) -> ThresholdTable<BadgeTier> {
    ThresholdTable::at_most(TIERS.into_iter().zip(bounds.iter().rev().copied()).collect())
}

proptest! {
    #[test]
    fn generated_tables_are_valid(bounds in arb_bounds()) {
        prop_assert!(table_at_least(&bounds).validate("t").is_ok());
        prop_assert!(table_at_most(&bounds).validate("t").is_ok());
    }

    #[test]
    fn at_least_is_monotonic(bounds in arb_bounds(), a in -200.0f64..300.0, b in -200.0f64..300.0) {
        let table = table_at_least(&bounds);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(table.highest_met(lo) <= table.highest_met(hi));
    }

    #[test]
    fn at_most_is_antitonic(bounds in arb_bounds(), a in -200.0f64..300.0, b in -200.0f64..300.0) {
        let table = table_at_most(&bounds);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(table.highest_met(lo) >= table.highest_met(hi));
    }

    #[test]
    fn classify_always_yields_a_level(bounds in arb_bounds(), value in -200.0f64..300.0) {
        prop_assert!(table_at_least(&bounds).classify(value).is_some());
        prop_assert!(table_at_most(&bounds).classify(value).is_some());
    }
}
