pub(crate) use super::*;

#[test]
fn test_new_is_empty() {
    let v = Vector::<f64>::new();
    assert_eq!(v.len(), 0);
    assert!(v.is_empty());
    assert_eq!(v, Vector::default());
}

#[test]
fn test_from_slice_and_from_vec() {
    let a = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    let b = Vector::from_vec(vec![1.0_f64, 2.0, 3.0]);
    assert_eq!(a.len(), 3);
    assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(a, b);
}

#[test]
fn test_index_reads() {
    let v = Vector::from_slice(&[4.0_f64, 5.0]);
    assert!((v[0] - 4.0).abs() < 1e-12);
    assert!((v[1] - 5.0).abs() < 1e-12);
}

#[test]
fn test_get_out_of_range() {
    let v = Vector::from_slice(&[1.0_f64, 2.0]);
    assert!(matches!(v.get(2), Err(MatrizError::IndexOutOfRange { .. })));
}

#[test]
fn test_at_falls_back_to_zero() {
    let v = Vector::from_slice(&[4.0_f64, 5.0]);
    assert!((v.at(1) - 5.0).abs() < 1e-12);
    assert_eq!(v.at(9), 0.0);
}

#[test]
fn test_set_and_get_mut() {
    let mut v = Vector::from_slice(&[1.0_f64, 2.0]);
    v.set(0, 7.0).expect("in bounds");
    *v.get_mut(1).expect("in bounds") = -3.0;
    assert!((v[0] - 7.0).abs() < 1e-12);
    assert!((v[1] + 3.0).abs() < 1e-12);

    assert!(v.set(5, 0.0).is_err());
}

#[test]
fn test_add_and_sub() {
    let a = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    let b = Vector::from_slice(&[10.0_f64, 20.0, 30.0]);
    let sum = Vector::add(&a, &b).expect("same dimension");
    assert_eq!(sum, Vector::from_slice(&[11.0, 22.0, 33.0]));
    let diff = Vector::sub(&b, &a).expect("same dimension");
    assert_eq!(diff, Vector::from_slice(&[9.0, 18.0, 27.0]));
}

#[test]
fn test_add_dimension_mismatch() {
    let a = Vector::from_slice(&[1.0_f64, 2.0]);
    let b = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    assert!(matches!(
        Vector::add(&a, &b),
        Err(MatrizError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_add_operator_mismatch_keeps_left_operand() {
    let a = Vector::from_slice(&[1.0_f64, 2.0]);
    let b = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    let c = &a + &b;
    assert_eq!(c, a);
}

#[test]
fn test_add_assign_and_mismatch() {
    let mut a = Vector::from_slice(&[1.0_f64, 2.0]);
    a += &Vector::from_slice(&[1.0_f64, 1.0]);
    assert_eq!(a, Vector::from_slice(&[2.0, 3.0]));

    let before = a.clone();
    a += &Vector::from_slice(&[1.0_f64]);
    assert_eq!(a, before);
}

#[test]
fn test_sub_assign_mismatch_leaves_receiver_unchanged() {
    let mut a = Vector::from_slice(&[1.0_f64, 2.0]);
    let before = a.clone();
    a -= &Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    assert_eq!(a, before);
}

#[test]
fn test_scale_and_operators() {
    let v = Vector::from_slice(&[1.0_f64, -2.0, 3.0]);
    let scaled = v.scale(2.0);
    assert_eq!(scaled, Vector::from_slice(&[2.0, -4.0, 6.0]));
    assert_eq!(&v * 2.0, scaled);

    let mut inplace = v.clone();
    inplace *= 2.0;
    assert_eq!(inplace, scaled);
}

#[test]
fn test_equality_dimension_mismatch_is_false() {
    let a = Vector::from_slice(&[1.0_f64, 2.0]);
    let b = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    assert_ne!(a, b);

    let c = Vector::from_slice(&[1.0_f64, 2.5]);
    assert_ne!(a, c);
    assert_eq!(a, a.clone());
}

#[test]
fn test_dot() {
    let a = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    let b = Vector::from_slice(&[4.0_f64, -5.0, 6.0]);
    let dot = a.dot(&b).expect("same dimension");
    assert!((dot - 12.0).abs() < 1e-12);
}

#[test]
fn test_dot_dimension_mismatch() {
    let a = Vector::from_slice(&[1.0_f64, 2.0]);
    let b = Vector::from_slice(&[1.0_f64]);
    assert!(matches!(
        a.dot(&b),
        Err(MatrizError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_dot_empty_is_zero() {
    let a = Vector::<f64>::new();
    let b = Vector::<f64>::new();
    assert_eq!(a.dot(&b).expect("same dimension"), 0.0);
}

#[test]
fn test_norm_three_four_five() {
    let v = Vector::from_slice(&[3.0_f64, 4.0]);
    assert!((v.norm() - 5.0).abs() < 1e-12);
    // Second call hits the cache and agrees.
    assert!((v.norm() - 5.0).abs() < 1e-12);
}

#[test]
fn test_zero_vector_norm_is_cached_zero() {
    let v = Vector::from_slice(&[0.0_f64, 0.0, 0.0]);
    assert_eq!(v.norm(), 0.0);
    assert_eq!(v.norm(), 0.0);
}

#[test]
fn test_norm_cache_invalidated_by_mutation() {
    let mut v = Vector::from_slice(&[3.0_f64, 4.0]);
    assert!((v.norm() - 5.0).abs() < 1e-12);

    v.set(0, 0.0).expect("in bounds");
    assert!((v.norm() - 4.0).abs() < 1e-12);

    *v.get_mut(1).expect("in bounds") = 0.0;
    assert_eq!(v.norm(), 0.0);
}

#[test]
fn test_norm_cache_invalidated_by_compound_assign() {
    let mut v = Vector::from_slice(&[3.0_f64, 4.0]);
    assert!((v.norm() - 5.0).abs() < 1e-12);
    v *= 2.0;
    assert!((v.norm() - 10.0).abs() < 1e-12);

    v += &Vector::from_slice(&[0.0_f64, -8.0]);
    assert!((v.norm() - 6.0).abs() < 1e-12);
}

#[test]
fn test_normalize() {
    let mut v = Vector::from_slice(&[3.0_f64, 4.0]);
    v.normalize().expect("nonzero vector");
    assert!((v[0] - 0.6).abs() < 1e-12);
    assert!((v[1] - 0.8).abs() < 1e-12);
    assert!((v.norm() - 1.0).abs() < 1e-12);
}

#[test]
fn test_normalize_zero_vector_errors_and_leaves_unmodified() {
    let mut v = Vector::from_slice(&[0.0_f64, 0.0]);
    assert!(matches!(
        v.normalize(),
        Err(MatrizError::DegenerateOperation { .. })
    ));
    assert_eq!(v, Vector::from_slice(&[0.0, 0.0]));
}

#[test]
fn test_normalized_is_pure() {
    let v = Vector::from_slice(&[0.0_f64, -5.0]);
    let unit = v.normalized().expect("nonzero vector");
    assert_eq!(unit, Vector::from_slice(&[0.0, -1.0]));
    assert_eq!(v, Vector::from_slice(&[0.0, -5.0]));
}

#[test]
fn test_cross_known_values() {
    let x = Vector::from_slice(&[1.0_f64, 0.0, 0.0]);
    let y = Vector::from_slice(&[0.0_f64, 1.0, 0.0]);
    let z = x.cross(&y).expect("both 3-dimensional");
    assert_eq!(z, Vector::from_slice(&[0.0, 0.0, 1.0]));
}

#[test]
fn test_cross_requires_dimension_three() {
    let a = Vector::from_slice(&[1.0_f64, 0.0]);
    let b = Vector::from_slice(&[0.0_f64, 1.0, 0.0]);
    assert!(matches!(
        a.cross(&b),
        Err(MatrizError::DegenerateOperation { .. })
    ));
    assert!(matches!(
        b.cross(&a),
        Err(MatrizError::DegenerateOperation { .. })
    ));
}

#[test]
fn test_project_onto_dimension_mismatch() {
    let a = Vector::from_slice(&[1.0_f64, 2.0]);
    let b = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    assert!(matches!(
        a.project_onto(&b),
        Err(MatrizError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_project_onto_zero_receiver_is_degenerate() {
    let zero = Vector::from_slice(&[0.0_f64, 0.0]);
    let b = Vector::from_slice(&[1.0_f64, 2.0]);
    assert!(matches!(
        zero.project_onto(&b),
        Err(MatrizError::DegenerateOperation { .. })
    ));
}

#[test]
fn test_display_bracketed() {
    let v = Vector::from_slice(&[3.0_f64, 4.0]);
    assert_eq!(format!("{v}"), "[ 3 4 ]");
    assert_eq!(format!("{}", Vector::<f64>::new()), "[ ]");
}
