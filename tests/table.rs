use kpermute::{Permutation32, permute32_seed};

#[test]
fn scenario_size_5_is_a_bijection() {
    let perm = permute32_seed(5, 1, 0).unwrap();

    let outputs: std::collections::HashSet<i32> =
        (0..5).map(|i| perm.encode(i).unwrap()).collect();
    assert_eq!(outputs.len(), 5);
    assert_eq!(outputs, (0..5).collect());

    let iterated: std::collections::HashSet<i32> = perm.iter_from(0).collect();
    assert_eq!(iterated.len(), 5);
}

#[test]
fn size_zero_produces_an_empty_domain() {
    let perm = permute32_seed(0, 1, 0).unwrap();
    assert_eq!(perm.iter_from(0).count(), 0);
}

#[test]
fn size_one_is_identity() {
    let perm = permute32_seed(1, 3, 0).unwrap();
    assert_eq!(perm.encode(0).unwrap(), 0);
    assert_eq!(perm.decode(0).unwrap(), 0);
}

#[test]
fn size_sixteen_is_still_a_table() {
    let perm = permute32_seed(16, 2, 0).unwrap();
    let outputs: std::collections::HashSet<i32> =
        (0..16).map(|i| perm.encode(i).unwrap()).collect();
    assert_eq!(outputs.len(), 16);
}
