//! Stack geometry tests (STACK-01 through STACK-08).

use contrib_analysis::stacking::{build_segments, Segment, StackBuilder, StackSegments};
use contrib_analysis::{analyze, decompose};
use contrib_core::config::AnalysisConfig;
use contrib_core::errors::AnalysisError;
use contrib_core::PeriodTable;

fn one_row(values: Vec<f64>) -> PeriodTable {
    let categories: Vec<String> = (1..=values.len()).map(|i| format!("cat{i}")).collect();
    PeriodTable::new(["2020"], categories, vec![values]).unwrap()
}

/// STACK-01: the mixed-sign worked example.
#[test]
fn test_worked_example() {
    let s = build_segments(&one_row(vec![5.0, -3.0, 2.0])).unwrap();
    assert_eq!(s.tops().row(0).unwrap(), &[5.0, 0.0, 7.0]);
    assert_eq!(s.bottoms().row(0).unwrap(), &[0.0, -3.0, 5.0]);
    assert_eq!(s.segment(0, 1), Some(Segment { top: 0.0, bottom: -3.0 }));
    assert_eq!(s.row_extent(0), Some((-3.0, 7.0)));
}

/// STACK-02: output tables carry the input's labels.
#[test]
fn test_labels_preserved() {
    let table = PeriodTable::new(
        ["2020", "2021"],
        ["A", "B"],
        vec![vec![0.1, -0.2], vec![-0.05, 0.3]],
    )
    .unwrap();
    let s = build_segments(&table).unwrap();
    assert!(s.tops().same_axes(&table));
    assert!(s.bottoms().same_axes(&table));
    assert_eq!(s.tops().get("2021", "B"), Some(0.3));
    assert_eq!(s.bottoms().get("2021", "A"), Some(-0.05));
}

/// STACK-03: a zero value is a zero-height segment at the positive height.
#[test]
fn test_zero_height_segment() {
    let s = build_segments(&one_row(vec![1.5, 0.0, -1.0])).unwrap();
    let seg = s.segment(0, 1).unwrap();
    assert!(seg.is_empty());
    assert_eq!(seg.top, 1.5);
    assert_eq!(seg.height(), 0.0);
}

/// STACK-04: mismatched top/bottom tables are an InvalidShape error.
#[test]
fn test_mismatched_parts_rejected() {
    let a = one_row(vec![1.0, 2.0]);
    let b = one_row(vec![1.0, 2.0, 3.0]);
    assert!(matches!(
        StackSegments::from_parts(a, b),
        Err(AnalysisError::InvalidShape { .. })
    ));
}

/// STACK-05: the parallel path matches the sequential path.
#[test]
fn test_parallel_matches_sequential() {
    let rows: Vec<Vec<f64>> = (0..64)
        .map(|i| (0..5).map(|j| ((i * 7 + j * 3) % 11) as f64 - 5.0).collect())
        .collect();
    let periods: Vec<String> = (0..64).map(|i| i.to_string()).collect();
    let table = PeriodTable::new(periods, ["a", "b", "c", "d", "e"], rows).unwrap();

    let sequential = StackBuilder::new().with_parallel_threshold(usize::MAX).build(&table).unwrap();
    let parallel = StackBuilder::new().with_parallel_threshold(1).build(&table).unwrap();
    assert_eq!(sequential, parallel);
}

/// STACK-06: overall extent spans every bar.
#[test]
fn test_overall_extent() {
    let table = PeriodTable::new(
        ["1", "2"],
        ["a", "b"],
        vec![vec![0.2, -0.1], vec![-0.4, 0.1]],
    )
    .unwrap();
    let s = build_segments(&table).unwrap();
    let (lo, hi) = s.overall_extent();
    assert!((lo + 0.4).abs() < 1e-12);
    assert!((hi - 0.2).abs() < 1e-12);
}

/// STACK-07: the pipeline stacks the contribution table it decomposed.
#[test]
fn test_pipeline_stacks_contributions() {
    let table = PeriodTable::new(
        ["2019", "2020", "2021"],
        ["A", "B"],
        vec![vec![10.0, 20.0], vec![15.0, 25.0], vec![12.0, 30.0]],
    )
    .unwrap();
    let analysis = analyze(&table, &AnalysisConfig::default()).unwrap();
    assert_eq!(analysis.decomposition, decompose(&table).unwrap());
    assert!(analysis.segments.tops().same_axes(&analysis.decomposition.contributions));

    // 2021: A = -3/40 stacks down, B = 5/40 stacks up from zero
    let a = analysis.segments.segment(1, 0).unwrap();
    let b = analysis.segments.segment(1, 1).unwrap();
    assert_eq!(a.top, 0.0);
    assert!((a.bottom + 0.075).abs() < 1e-12);
    assert_eq!(b.bottom, 0.0);
    assert!((b.top - 0.125).abs() < 1e-12);
}

/// STACK-08: swapping columns moves segments but keeps the row extent.
#[test]
fn test_column_swap_moves_segments() {
    let forward = build_segments(&one_row(vec![1.0, 2.0])).unwrap();
    let swapped = build_segments(&one_row(vec![2.0, 1.0])).unwrap();

    assert_eq!(forward.tops().row(0).unwrap(), &[1.0, 3.0]);
    assert_eq!(forward.bottoms().row(0).unwrap(), &[0.0, 1.0]);
    assert_eq!(swapped.tops().row(0).unwrap(), &[2.0, 3.0]);
    assert_eq!(swapped.bottoms().row(0).unwrap(), &[0.0, 2.0]);
    assert_eq!(forward.row_extent(0), Some((0.0, 3.0)));
    assert_eq!(swapped.row_extent(0), Some((0.0, 3.0)));
}
