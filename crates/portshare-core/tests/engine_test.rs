use portshare_core::{allocate, recommend, PortshareError};
use portshare_types::{AllocationParams, PotentialCategory, Recommendation, SubdivisionInput};

fn inputs(pairs: &[(&str, i64)]) -> Vec<SubdivisionInput> {
    pairs.iter().map(|(name, count)| SubdivisionInput::new(*name, *count)).collect()
}

#[test]
fn empty_input_yields_empty_output() {
    let out = allocate(&[], &AllocationParams::new(10)).unwrap();
    assert!(out.is_empty());
}

#[test]
fn zero_homepass_subdivision_gets_nothing() {
    // Scenario A
    let out = allocate(&inputs(&[("X", 0)]), &AllocationParams::new(10)).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].allocated_units, 0);
    assert_eq!(out[0].capacity_metric, 0);
    assert_eq!(out[0].obtainable_metric, 0);
    assert_eq!(out[0].rank, 1);
    assert_eq!(out[0].category, PotentialCategory::NoPotential);
}

#[test]
fn exact_shares_allocate_without_remainder() {
    // Scenario B: shares are exactly 6.0 and 4.0
    let out = allocate(&inputs(&[("A", 60), ("B", 40)]), &AllocationParams::new(10)).unwrap();

    let a = out.iter().find(|r| r.name == "A").unwrap();
    let b = out.iter().find(|r| r.name == "B").unwrap();
    assert_eq!(a.allocated_units, 6);
    assert_eq!(b.allocated_units, 4);
    assert_eq!(a.capacity_metric, 96);
    assert_eq!(b.capacity_metric, 64);
    assert_eq!(a.obtainable_metric, 29); // round(28.8)
    assert_eq!(b.obtainable_metric, 19); // round(19.2)

    // mean of positive obtainables is 24
    assert_eq!(a.category, PotentialCategory::HighPotential);
    assert_eq!(b.category, PotentialCategory::LowPotential);
    assert_eq!(a.rank, 1);
    assert_eq!(b.rank, 2);

    // output is ordered by obtainable metric descending
    assert_eq!(out[0].name, "A");
    assert_eq!(out[1].name, "B");
}

#[test]
fn full_tie_resolves_by_input_order() {
    // Scenario C: all shares 1/3, one leftover unit goes to the first record
    let out =
        allocate(&inputs(&[("A", 1), ("B", 1), ("C", 1)]), &AllocationParams::new(1)).unwrap();

    let units: Vec<u64> = ["A", "B", "C"]
        .iter()
        .map(|n| out.iter().find(|r| r.name == *n).unwrap().allocated_units)
        .collect();
    assert_eq!(units, vec![1, 0, 0]);
}

#[test]
fn zero_budget_ranks_in_input_order() {
    // Scenario D
    let out =
        allocate(&inputs(&[("B", 5), ("A", 3), ("C", 9)]), &AllocationParams::new(0)).unwrap();

    assert!(out.iter().all(|r| r.allocated_units == 0));
    assert!(out.iter().all(|r| r.category == PotentialCategory::NoPotential));
    let named: Vec<(&str, u32)> = out.iter().map(|r| (r.name.as_str(), r.rank)).collect();
    assert_eq!(named, vec![("B", 1), ("A", 2), ("C", 3)]);
}

#[test]
fn leftover_goes_to_largest_remainder() {
    // shares 3.5, 2.1, 1.4 -> floors 3, 2, 1, leftover 1 to the .5 remainder
    let out =
        allocate(&inputs(&[("A", 5), ("B", 3), ("C", 2)]), &AllocationParams::new(7)).unwrap();
    let units: Vec<u64> = ["A", "B", "C"]
        .iter()
        .map(|n| out.iter().find(|r| r.name == *n).unwrap().allocated_units)
        .collect();
    assert_eq!(units, vec![4, 2, 1]);
}

#[test]
fn remainder_tie_prefers_higher_homepass() {
    // counts 30 and 10 over budget 2: shares 1.5 and 0.5 tie on remainder,
    // the larger subdivision wins the marginal unit
    let out = allocate(&inputs(&[("Small", 10), ("Big", 30)]), &AllocationParams::new(2))
        .unwrap();
    let big = out.iter().find(|r| r.name == "Big").unwrap();
    let small = out.iter().find(|r| r.name == "Small").unwrap();
    assert_eq!(big.allocated_units, 2);
    assert_eq!(small.allocated_units, 0);
}

#[test]
fn equal_obtainable_metrics_share_minimum_rank() {
    // units 2, 1, 1 -> SOM 10, 5, 5: ranks 1, 2, 2
    let out = allocate(
        &inputs(&[("Half", 100), ("QuarterA", 50), ("QuarterB", 50)]),
        &AllocationParams::new(4),
    )
    .unwrap();

    let half = out.iter().find(|r| r.name == "Half").unwrap();
    let qa = out.iter().find(|r| r.name == "QuarterA").unwrap();
    let qb = out.iter().find(|r| r.name == "QuarterB").unwrap();
    assert_eq!(half.obtainable_metric, 10);
    assert_eq!(qa.obtainable_metric, 5);
    assert_eq!(qb.obtainable_metric, 5);
    assert_eq!(half.rank, 1);
    assert_eq!(qa.rank, 2);
    assert_eq!(qb.rank, 2);

    // mean of positives is 20/3; only the 10 clears it
    assert_eq!(half.category, PotentialCategory::HighPotential);
    assert_eq!(qa.category, PotentialCategory::LowPotential);
    assert_eq!(qb.category, PotentialCategory::LowPotential);
}

#[test]
fn single_positive_record_is_low_potential() {
    // one record: its obtainable equals the positive mean, not above it
    let out = allocate(&inputs(&[("Solo", 80)]), &AllocationParams::new(5)).unwrap();
    assert!(out[0].obtainable_metric > 0);
    assert_eq!(out[0].category, PotentialCategory::LowPotential);
    assert_eq!(out[0].rank, 1);
}

#[test]
fn negative_homepass_is_rejected() {
    let err = allocate(&inputs(&[("A", -1)]), &AllocationParams::new(10)).unwrap_err();
    assert!(matches!(err, PortshareError::InvalidInput { parameter: "homepass", .. }));
}

#[test]
fn negative_budget_is_rejected() {
    let err = allocate(&inputs(&[("A", 5)]), &AllocationParams::new(-3)).unwrap_err();
    assert!(matches!(err, PortshareError::InvalidInput { parameter: "total_budget", .. }));
}

#[test]
fn non_positive_capacity_is_rejected() {
    let params = AllocationParams::new(10).with_unit_capacity(0);
    let err = allocate(&inputs(&[("A", 5)]), &params).unwrap_err();
    assert!(matches!(err, PortshareError::InvalidInput { parameter: "unit_capacity", .. }));
}

#[test]
fn out_of_range_fraction_is_rejected() {
    let params = AllocationParams::new(10).with_obtainable_fraction(1.5);
    let err = allocate(&inputs(&[("A", 5)]), &params).unwrap_err();
    assert!(matches!(
        err,
        PortshareError::InvalidInput { parameter: "obtainable_fraction", .. }
    ));
}

#[test]
fn repeated_calls_are_bit_identical() {
    let records = inputs(&[("A", 17), ("B", 3), ("C", 41), ("D", 0)]);
    let params = AllocationParams::new(23);
    let first = allocate(&records, &params).unwrap();
    let second = allocate(&records, &params).unwrap();
    assert_eq!(first, second);
}

#[test]
fn recommendations_follow_category_and_metrics() {
    // From Scenario B: A is high potential with 29 < 96 * 0.6
    let out = allocate(&inputs(&[("A", 60), ("B", 40)]), &AllocationParams::new(10)).unwrap();
    let a = out.iter().find(|r| r.name == "A").unwrap();
    let b = out.iter().find(|r| r.name == "B").unwrap();

    assert_eq!(
        recommend(a.category, a.obtainable_metric, a.capacity_metric),
        Recommendation::ExpandCoverage
    );
    assert_eq!(
        recommend(b.category, b.obtainable_metric, b.capacity_metric),
        Recommendation::LocalStrategy
    );

    // Scenario D rows are never a priority
    let zeroed = allocate(&inputs(&[("A", 60)]), &AllocationParams::new(0)).unwrap();
    assert_eq!(
        recommend(zeroed[0].category, zeroed[0].obtainable_metric, zeroed[0].capacity_metric),
        Recommendation::NotPriority
    );
}
