use kpermute::{Permutation32, Permutation64, permute32_range_seed, permute64_range_seed};

#[test]
fn scenario_range_32() {
    let perm = permute32_range_seed(-100, 199, 1, 0).unwrap();

    let y = perm.encode(-50).unwrap();
    assert!((-100..=199).contains(&y));
    assert_eq!(perm.decode(y).unwrap(), -50);
}

#[test]
fn values_outside_window_are_rejected() {
    let perm = permute32_range_seed(-100, 199, 1, 0).unwrap();
    assert!(perm.encode(-101).is_err());
    assert!(perm.encode(200).is_err());
}

#[test]
fn decreasing_range_is_rejected() {
    assert!(permute32_range_seed(10, 5, 1, 0).is_err());
    assert!(permute64_range_seed(10, 5, 1, 0).is_err());
}

#[test]
fn full_domain_range_overflows() {
    assert!(permute32_range_seed(i32::MIN, i32::MAX, 1, 0).is_err());
    assert!(permute64_range_seed(i64::MIN, i64::MAX, 1, 0).is_err());
}

#[test]
fn round_trips_across_the_window_64() {
    let perm = permute64_range_seed(-1_000, 1_000, 3, 0).unwrap();
    for x in [-1000i64, -1, 0, 1, 1000] {
        let y = perm.encode(x).unwrap();
        assert!((-1000..=1000).contains(&y));
        assert_eq!(perm.decode(y).unwrap(), x);
    }
}

#[test]
fn iterator_matches_encode_within_window() {
    let perm = permute32_range_seed(10, 19, 7, 0).unwrap();
    let collected: Vec<i32> = perm.iter_from(15).collect();

    assert_eq!(collected.len(), 5);
    for (i, v) in collected.iter().enumerate() {
        assert_eq!(*v, perm.encode(15 + i as i32).unwrap());
    }
}
