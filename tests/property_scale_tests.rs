use chrono::{DateTime, Duration, Utc};
use profile_charts::core::{
    XpEvent, compute_nice_ceiling, cumulative_xp_series, map_linear, map_value_to_y,
};
use proptest::prelude::*;

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_600_000_000, 0).expect("valid epoch")
}

proptest! {
    #[test]
    fn cumulative_series_is_monotonic_and_totals_amounts(
        raw in prop::collection::vec((0i64..100_000, 0u64..1_000_000), 0..64)
    ) {
        let events: Vec<XpEvent> = raw
            .iter()
            .map(|(offset, amount)| XpEvent::new("/p", *amount, epoch() + Duration::seconds(*offset)))
            .collect();

        let series = cumulative_xp_series(&events);
        prop_assert_eq!(series.len(), events.len());
        prop_assert!(series.windows(2).all(|pair| pair[0].cumulative <= pair[1].cumulative));
        prop_assert!(series.windows(2).all(|pair| pair[0].created_at <= pair[1].created_at));

        let total: u64 = raw.iter().map(|(_, amount)| amount).sum();
        prop_assert_eq!(series.last().map_or(0, |point| point.cumulative), total);
    }

    #[test]
    fn nice_ceiling_is_smallest_covering_multiple(
        value in 0.0f64..10_000_000.0,
        step_index in 0usize..4
    ) {
        let step = [1.0, 10.0, 500.0, 1000.0][step_index];
        let ceiling = compute_nice_ceiling(value, step);

        prop_assert!(ceiling >= value);
        prop_assert!(ceiling >= step);
        prop_assert!(ceiling - value < step || value == 0.0);
        prop_assert_eq!((ceiling / step).fract(), 0.0);
    }

    #[test]
    fn map_linear_stays_inside_range_for_domain_values(
        domain_min in -1_000_000.0f64..1_000_000.0,
        domain_span in 1.0f64..1_000_000.0,
        factor in 0.0f64..=1.0,
        range_min in -2_000.0f64..2_000.0,
        range_span in 0.0f64..4_000.0
    ) {
        let domain_max = domain_min + domain_span;
        let value = domain_min + factor * domain_span;
        let range_max = range_min + range_span;

        let mapped = map_linear(value, domain_min, domain_max, range_min, range_max);
        prop_assert!(mapped >= range_min - 1e-3);
        prop_assert!(mapped <= range_max + 1e-3);
    }

    #[test]
    fn degenerate_domain_always_maps_to_range_min(
        value in -1e12f64..1e12,
        domain in -1e12f64..1e12,
        range_min in -5_000.0f64..5_000.0,
        range_max in -5_000.0f64..5_000.0
    ) {
        prop_assert_eq!(map_linear(value, domain, domain, range_min, range_max), range_min);
    }

    #[test]
    fn value_mapping_is_order_reversing(
        a in 0.0f64..10_000.0,
        b in 0.0f64..10_000.0,
        plot_height in 1.0f64..2_000.0
    ) {
        let max_value = compute_nice_ceiling(a.max(b), 1000.0);
        let (ya, yb) = (
            map_value_to_y(a, max_value, plot_height),
            map_value_to_y(b, max_value, plot_height),
        );
        if a < b {
            prop_assert!(ya >= yb);
        }
        prop_assert!((0.0..=plot_height + 1e-9).contains(&ya));
    }
}
