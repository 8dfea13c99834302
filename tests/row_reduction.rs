//! Elementary-operation chains: forward elimination expressed both as a
//! sequence of pure transforms and as an accumulating in-place derivation.

use matriz::prelude::*;

fn example_system() -> Matrix<f64> {
    Matrix::from_rows(vec![
        vec![2.0, 1.0, -1.0],
        vec![-3.0, -1.0, 2.0],
        vec![-2.0, 1.0, 2.0],
    ])
    .expect("rectangular")
}

#[test]
fn forward_elimination_via_pure_transforms() {
    let a = example_system();

    let u = a
        .row_added(1, 0, 1.5)
        .and_then(|m| m.row_added(2, 0, 1.0))
        .and_then(|m| m.row_added(2, 1, -4.0))
        .expect("valid row indices");

    // Upper triangular: everything below the diagonal is eliminated.
    for i in 0..3 {
        for j in 0..i {
            assert!(
                u.get(i, j).unwrap().abs() < 1e-12,
                "entry ({i},{j}) survived elimination: {}",
                u.get(i, j).unwrap()
            );
        }
    }

    // The determinant is the product of the pivots; no exchanges happened,
    // so it must match det(A) = -1.
    let det: f64 = (0..3).map(|i| u.get(i, i).unwrap()).product();
    assert!((det + 1.0).abs() < 1e-12);

    // Pure transforms never touch their source.
    assert_eq!(a, example_system());
}

#[test]
fn in_place_derivation_matches_pure_chain() {
    let pure = example_system()
        .row_added(1, 0, 1.5)
        .and_then(|m| m.row_added(2, 0, 1.0))
        .and_then(|m| m.row_added(2, 1, -4.0))
        .expect("valid row indices");

    let mut accumulated = example_system();
    accumulated.add_scaled_row(1, 0, 1.5).expect("valid rows");
    accumulated.add_scaled_row(2, 0, 1.0).expect("valid rows");
    accumulated.add_scaled_row(2, 1, -4.0).expect("valid rows");

    assert_eq!(accumulated, pure);
}

#[test]
fn pivot_exchange_then_scale() {
    let a = Matrix::from_rows(vec![vec![0.0, 2.0], vec![4.0, 1.0]]).expect("rectangular");

    // Zero pivot at (0,0): exchange rows, then rescale the new pivot row.
    let reduced = a
        .row_swapped(0, 1)
        .and_then(|m| m.row_scaled(0, 0.25))
        .expect("valid indices");

    assert_eq!(reduced.row(0).unwrap(), &[1.0, 0.25]);
    assert_eq!(reduced.row(1).unwrap(), &[0.0, 2.0]);
}

#[test]
fn column_chain_mirrors_row_chain_on_transpose() {
    let a = example_system();

    let by_columns = a
        .column_added(1, 0, 1.5)
        .and_then(|m| m.column_added(2, 0, 1.0))
        .expect("valid column indices");
    let by_rows_on_transpose = a
        .transpose()
        .row_added(1, 0, 1.5)
        .and_then(|m| m.row_added(2, 0, 1.0))
        .expect("valid row indices");

    assert_eq!(by_columns.transpose(), by_rows_on_transpose);
}
