use contrib_analysis::decomposition::decompose;
use contrib_analysis::stacking::{build_segments, StackBuilder};
use contrib_core::PeriodTable;
use proptest::prelude::*;

const TOL: f64 = 1e-9;

fn labels(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}

/// Strictly positive tables: every prior total and category value is nonzero.
fn arb_positive_table() -> impl Strategy<Value = PeriodTable> {
    (2usize..12, 1usize..8).prop_flat_map(|(periods, categories)| {
        prop::collection::vec(prop::collection::vec(0.5f64..1000.0, categories), periods)
            .prop_map(move |rows| {
                PeriodTable::new(labels("p", periods), labels("c", categories), rows).unwrap()
            })
    })
}

/// Single-period tables of signed values, with exact zeros mixed in.
fn arb_signed_rows() -> impl Strategy<Value = PeriodTable> {
    (1usize..10, 1usize..10).prop_flat_map(|(periods, categories)| {
        let cell = prop_oneof![
            3 => -1.0f64..1.0,
            1 => Just(0.0),
        ];
        prop::collection::vec(prop::collection::vec(cell, categories), periods).prop_map(
            move |rows| PeriodTable::new(labels("p", periods), labels("c", categories), rows).unwrap(),
        )
    })
}

// ── Decomposition sum property ───────────────────────────────────────────

proptest! {
    #[test]
    fn contributions_sum_to_growth(table in arb_positive_table()) {
        let d = decompose(&table).unwrap();
        for (g, row) in d.growth.values().zip(d.contributions.rows()) {
            let sum: f64 = row.iter().sum();
            prop_assert!((sum - g).abs() < TOL, "sum {} != growth {}", sum, g);
        }
    }
}

// ── First-period exclusion ───────────────────────────────────────────────

proptest! {
    #[test]
    fn output_has_one_fewer_period(table in arb_positive_table()) {
        let d = decompose(&table).unwrap();
        prop_assert_eq!(d.growth.len(), table.n_periods() - 1);
        prop_assert_eq!(d.contributions.n_periods(), table.n_periods() - 1);
        prop_assert_eq!(d.contributions.periods(), &table.periods()[1..]);
    }
}

// ── Stack reconstruction ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn row_extents_match_signed_sums(table in arb_signed_rows()) {
        let s = build_segments(&table).unwrap();
        for (p, row) in table.rows().iter().enumerate() {
            let pos: f64 = row.iter().filter(|v| **v >= 0.0).sum();
            let neg: f64 = row.iter().filter(|v| **v < 0.0).sum();
            let max_top = s.tops().row(p).unwrap().iter().copied().fold(f64::MIN, f64::max);
            let min_bottom = s.bottoms().row(p).unwrap().iter().copied().fold(f64::MAX, f64::min);
            prop_assert!((max_top - pos).abs() < TOL, "max top {} != {}", max_top, pos);
            prop_assert!((min_bottom - neg).abs() < TOL, "min bottom {} != {}", min_bottom, neg);
        }
    }

    #[test]
    fn zero_values_have_zero_height(table in arb_signed_rows()) {
        let s = build_segments(&table).unwrap();
        for (p, row) in table.rows().iter().enumerate() {
            for (c, v) in row.iter().enumerate() {
                let seg = s.segment(p, c).unwrap();
                if *v == 0.0 {
                    prop_assert_eq!(seg.top, seg.bottom);
                }
                prop_assert!(seg.top >= seg.bottom);
            }
        }
    }
}

// ── Column-order sensitivity ─────────────────────────────────────────────

proptest! {
    #[test]
    fn column_permutation_keeps_extents(table in arb_signed_rows()) {
        let reversed: Vec<String> = table.categories().iter().rev().cloned().collect();
        let order: Vec<&str> = reversed.iter().map(String::as_str).collect();
        let permuted = table.reorder_categories(&order).unwrap();

        let a = build_segments(&table).unwrap();
        let b = build_segments(&permuted).unwrap();
        for p in 0..table.n_periods() {
            let (lo_a, hi_a) = a.row_extent(p).unwrap();
            let (lo_b, hi_b) = b.row_extent(p).unwrap();
            prop_assert!((lo_a - lo_b).abs() < TOL);
            prop_assert!((hi_a - hi_b).abs() < TOL);
        }
    }

    #[test]
    fn parallel_build_is_identical(table in arb_signed_rows()) {
        let sequential = StackBuilder::new().with_parallel_threshold(usize::MAX).build(&table).unwrap();
        let parallel = StackBuilder::new().with_parallel_threshold(1).build(&table).unwrap();
        prop_assert_eq!(sequential, parallel);
    }
}
