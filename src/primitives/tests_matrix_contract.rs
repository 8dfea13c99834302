// =========================================================================
// FALSIFY-MX: Matrix primitives contract (matriz primitives)
//
// Algebraic laws the dense matrix type must uphold, plus the degrade
// contract of the operator sugar.
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
//   - Strang (2016) "Introduction to Linear Algebra" (elementary row ops)
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Addition round-trip: (A + B) - B = A
#[test]
fn falsify_mx_001_add_sub_roundtrip() {
    let a = Matrix::from_vec(2, 3, vec![1.0_f64, -2.0, 3.5, 0.0, 4.0, -6.0]).expect("valid");
    let b = Matrix::from_vec(2, 3, vec![9.0_f64, 8.0, -7.0, 6.5, -5.0, 4.0]).expect("valid");

    let roundtrip = &(&a + &b) - &b;

    for (i, (x, y)) in roundtrip.as_slice().iter().zip(a.as_slice()).enumerate() {
        assert!(
            (x - y).abs() < 1e-9,
            "FALSIFIED MX-001: ((A+B)-B)[{i}]={x} != A[{i}]={y}"
        );
    }
}

/// FALSIFY-MX-002: Scalar scaling is associative: A * (s*t) = (A * s) * t
#[test]
fn falsify_mx_002_scalar_scaling_associative() {
    let a = Matrix::from_vec(2, 2, vec![1.5_f64, -2.0, 0.25, 8.0]).expect("valid");
    let (s, t) = (3.0_f64, -0.5_f64);

    let once = a.mul_scalar(s * t);
    let twice = a.mul_scalar(s).mul_scalar(t);

    for (i, (x, y)) in once.as_slice().iter().zip(twice.as_slice()).enumerate() {
        assert!(
            (x - y).abs() < 1e-9,
            "FALSIFIED MX-002: (A*(s*t))[{i}]={x} != ((A*s)*t)[{i}]={y}"
        );
    }
}

/// FALSIFY-MX-003: Row exchange is an involution
#[test]
fn falsify_mx_003_row_exchange_involution() {
    let a = Matrix::from_vec(3, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0])
        .expect("valid");

    let twice = a
        .row_swapped(0, 2)
        .and_then(|m| m.row_swapped(0, 2))
        .expect("valid rows");

    assert_eq!(twice, a, "FALSIFIED MX-003: double exchange changed A");
}

/// FALSIFY-MX-004: Transpose involution: (A^T)^T = A
#[test]
fn falsify_mx_004_transpose_involution() {
    let a = Matrix::from_vec(2, 3, vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let att = a.transpose().transpose();

    assert_eq!(att, a, "FALSIFIED MX-004: (A^T)^T != A");
}

/// FALSIFY-MX-005: Matmul shape: (m×k) * (k×n) = (m×n)
#[test]
fn falsify_mx_005_matmul_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0_f64; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0_f64; 12]).expect("valid");
    let c = a.matmul(&b).expect("compatible dims");

    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED MX-005: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
}

/// FALSIFY-MX-006: Identity is neutral: I * A = A and A * I = A
#[test]
fn falsify_mx_006_identity_neutral() {
    let a = Matrix::from_vec(3, 3, vec![2.0_f64, -1.0, 0.5, 3.0, 4.0, -2.0, 0.0, 1.0, 7.0])
        .expect("valid");
    let i = Matrix::<f64>::identity(3);

    assert_eq!(i.matmul(&a).expect("square"), a, "FALSIFIED MX-006: I*A != A");
    assert_eq!(a.matmul(&i).expect("square"), a, "FALSIFIED MX-006: A*I != A");
}

/// FALSIFY-MX-007: Column-scale derivation leaves the source untouched
/// and negates exactly the chosen column.
#[test]
fn falsify_mx_007_column_scale_derivation() {
    let m = Matrix::from_rows(vec![
        vec![1.0_f64, 2.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ])
    .expect("rectangular");

    let derived = m.column_scaled(0, -1.0).expect("column 0 exists");

    assert_eq!(derived.row(0).unwrap(), &[-1.0, 2.0, 0.0]);
    assert_eq!(derived.row(1).unwrap(), &[0.0, 1.0, 0.0]);
    assert_eq!(derived.row(2).unwrap(), &[0.0, 0.0, 1.0]);
    assert_eq!(
        m.row(0).unwrap(),
        &[1.0, 2.0, 0.0],
        "FALSIFIED MX-007: source matrix was mutated"
    );
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// FALSIFY-MX-001-prop: (A + B) - B = A for random shapes and data
        #[test]
        fn falsify_mx_001_prop_add_sub_roundtrip(
            rows in 1usize..5,
            cols in 1usize..5,
            a_data in proptest::collection::vec(-100.0f64..100.0, 16),
            b_data in proptest::collection::vec(-100.0f64..100.0, 16),
        ) {
            let n = rows * cols;
            let a = Matrix::from_vec(rows, cols, a_data[..n].to_vec()).expect("sized");
            let b = Matrix::from_vec(rows, cols, b_data[..n].to_vec()).expect("sized");

            let roundtrip = &(&a + &b) - &b;

            for (x, y) in roundtrip.as_slice().iter().zip(a.as_slice()) {
                prop_assert!(
                    (x - y).abs() < 1e-9,
                    "FALSIFIED MX-001-prop: {} != {}", x, y
                );
            }
        }

        /// FALSIFY-MX-002-prop: A * (s*t) = (A * s) * t for random scalars
        #[test]
        fn falsify_mx_002_prop_scalar_associative(
            rows in 1usize..5,
            cols in 1usize..5,
            data in proptest::collection::vec(-100.0f64..100.0, 16),
            s in -10.0f64..10.0,
            t in -10.0f64..10.0,
        ) {
            let n = rows * cols;
            let a = Matrix::from_vec(rows, cols, data[..n].to_vec()).expect("sized");

            let once = a.mul_scalar(s * t);
            let twice = a.mul_scalar(s).mul_scalar(t);

            for (x, y) in once.as_slice().iter().zip(twice.as_slice()) {
                prop_assert!(
                    (x - y).abs() < 1e-8,
                    "FALSIFIED MX-002-prop: {} != {}", x, y
                );
            }
        }

        /// FALSIFY-MX-003-prop: double row exchange is the identity
        #[test]
        fn falsify_mx_003_prop_row_exchange_involution(
            rows in 1usize..6,
            cols in 1usize..5,
            data in proptest::collection::vec(-100.0f64..100.0, 25),
            pick_i in 0usize..32,
            pick_j in 0usize..32,
        ) {
            let n = rows * cols;
            let a = Matrix::from_vec(rows, cols, data[..n].to_vec()).expect("sized");
            let i = pick_i % rows;
            let j = pick_j % rows;

            let twice = a
                .row_swapped(i, j)
                .and_then(|m| m.row_swapped(i, j))
                .expect("valid rows");

            prop_assert_eq!(twice, a);
        }
    }
}
