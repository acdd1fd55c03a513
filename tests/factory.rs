use kpermute::{Permutation32, Permutation64, permute32_seed, permute64_seed};

const BOUNDARIES_32: [i32; 9] = [-1, -2, 0, 16, 17, 1 << 10, (1 << 10) + 1, 1 << 20, (1 << 20) + 1];
const BOUNDARIES_64: [i64; 9] = [-1, -2, 0, 16, 17, 1 << 10, (1 << 10) + 1, 1 << 20, (1 << 20) + 1];

/// Enables the `tracing::debug!` construction events for local debugging;
/// harmless to call repeatedly across tests.
fn init_logger() {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[test]
fn every_boundary_constructs_and_round_trips_32() {
    init_logger();
    for &size in &BOUNDARIES_32 {
        let perm = permute32_seed(size, 12345, 0).unwrap();
        assert_eq!(perm.size(), size);

        let probe: i32 = if size == -1 || size < -1 { 7 } else { size.min(7).max(0) };
        if size != 0 {
            let enc = perm.encode_unchecked(probe);
            assert_eq!(perm.decode_unchecked(enc), probe);
        }
    }
}

#[test]
fn every_boundary_constructs_and_round_trips_64() {
    for &size in &BOUNDARIES_64 {
        let perm = permute64_seed(size, 12345, 0).unwrap();
        assert_eq!(perm.size(), size);

        let probe: i64 = if size == -1 || size < -1 { 7 } else { size.min(7).max(0) };
        if size != 0 {
            let enc = perm.encode_unchecked(probe);
            assert_eq!(perm.decode_unchecked(enc), probe);
        }
    }
}

#[test]
fn negative_rounds_is_rejected() {
    assert!(matches!(
        permute32_seed(100, 1, -1),
        Err(kpermute::PermuteError::InvalidRounds { rounds: -1 })
    ));
    assert!(matches!(
        permute64_seed(100, 1, -1),
        Err(kpermute::PermuteError::InvalidRounds { rounds: -1 })
    ));
}

#[test]
fn rounds_one_vs_five_differ_for_size_512() {
    let a = permute32_seed(512, 88, 1).unwrap();
    let b = permute32_seed(512, 88, 5).unwrap();

    let outputs: std::collections::HashSet<i32> =
        (0..512).map(|i| a.encode(i).unwrap()).collect();
    assert_eq!(outputs.len(), 512);

    assert!((0..512).any(|i| a.encode(i).unwrap() != b.encode(i).unwrap()));
}

#[test]
fn determinism_across_identical_construction() {
    let a = permute32_seed(10_000, 2024, 0).unwrap();
    let b = permute32_seed(10_000, 2024, 0).unwrap();

    for x in (0..10_000).step_by(137) {
        assert_eq!(a.encode(x).unwrap(), b.encode(x).unwrap());
    }

    let ia: Vec<i32> = a.iter_from(0).take(50).collect();
    let ib: Vec<i32> = b.iter_from(0).take(50).collect();
    assert_eq!(ia, ib);
}
