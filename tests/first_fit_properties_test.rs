use first_fit_packer::domain::ports::Packer;
use first_fit_packer::{first_fit, first_fit_loads, FirstFitPacker, OversizePolicy};
use proptest::prelude::*;

fn capacity_and_weights() -> impl Strategy<Value = (u64, Vec<u64>)> {
    (1u64..=100).prop_flat_map(|capacity| {
        (
            Just(capacity),
            prop::collection::vec(0..=capacity, 0..60),
        )
    })
}

#[test]
fn test_reference_scenario() {
    assert_eq!(first_fit(&[4, 7, 3, 5, 2], 10), 3);
    assert_eq!(first_fit_loads(&[4, 7, 3, 5, 2], 10), vec![9, 7, 5]);
}

#[test]
fn test_single_item_uses_one_bin() {
    assert_eq!(first_fit(&[10], 10), 1);
    assert_eq!(first_fit(&[1], 10), 1);
}

#[test]
fn test_order_changes_loads() {
    assert_eq!(first_fit_loads(&[7, 4, 3], 10), vec![10, 4]);
    assert_eq!(first_fit_loads(&[4, 7, 3], 10), vec![7, 7]);
}

#[test]
fn test_order_changes_bin_count() {
    assert_eq!(first_fit(&[2, 5, 4, 7, 1, 3, 8], 10), 4);
    assert_eq!(first_fit(&[8, 7, 5, 4, 3, 2, 1], 10), 3);
}

proptest! {
    #[test]
    fn bin_count_between_volume_bound_and_item_count((capacity, weights) in capacity_and_weights()) {
        let count = first_fit(&weights, capacity) as u64;
        let total: u64 = weights.iter().sum();

        prop_assert!(count >= total.div_ceil(capacity));
        prop_assert!(count <= weights.len() as u64);
    }

    #[test]
    fn loads_respect_capacity_and_conserve_weight((capacity, weights) in capacity_and_weights()) {
        let loads = first_fit_loads(&weights, capacity);

        prop_assert!(loads.iter().all(|load| *load <= capacity));
        prop_assert_eq!(loads.iter().sum::<u64>(), weights.iter().sum::<u64>());
    }

    #[test]
    fn no_later_bin_fits_into_an_earlier_one((capacity, weights) in capacity_and_weights()) {
        let loads = first_fit_loads(&weights, capacity);

        for i in 0..loads.len() {
            for j in (i + 1)..loads.len() {
                prop_assert!(loads[i] + loads[j] > capacity);
            }
        }
    }

    #[test]
    fn packing_is_idempotent((capacity, weights) in capacity_and_weights()) {
        let packer = FirstFitPacker::new(OversizePolicy::Reject);
        let first = packer.pack(capacity, &weights).unwrap();
        let second = packer.pack(capacity, &weights).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn accept_policy_matches_reference_function(
        capacity in 1u64..=50,
        weights in prop::collection::vec(0u64..=120, 0..40),
    ) {
        let packing = FirstFitPacker::new(OversizePolicy::Accept)
            .pack(capacity, &weights)
            .unwrap();

        prop_assert_eq!(packing.bin_count(), first_fit(&weights, capacity));
        let oversized = weights.iter().filter(|w| **w > capacity).count();
        prop_assert_eq!(packing.overfull_bins().len(), oversized);
    }
}
