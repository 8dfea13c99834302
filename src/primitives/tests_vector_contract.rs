// =========================================================================
// FALSIFY-VE: Vector primitives contract (matriz primitives)
//
// Geometric laws the dense vector type must uphold, including the
// pinned-down projection semantics.
//
// References:
//   - Cauchy-Schwarz inequality: |dot(u,v)| <= norm(u) * norm(v)
//   - Lagrange's identity (cross product anticommutativity)
// =========================================================================

use super::*;

/// FALSIFY-VE-001: Dot product is commutative: dot(u,v) = dot(v,u)
#[test]
fn falsify_ve_001_dot_commutative() {
    let u = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    let v = Vector::from_slice(&[4.0_f64, 5.0, 6.0]);

    let uv = u.dot(&v).expect("same dimension");
    let vu = v.dot(&u).expect("same dimension");

    assert!(
        (uv - vu).abs() < 1e-9,
        "FALSIFIED VE-001: dot(u,v)={uv} != dot(v,u)={vu}"
    );
}

/// FALSIFY-VE-002: Norm is non-negative and matches the 3-4-5 triangle
#[test]
fn falsify_ve_002_norm_nonneg() {
    let v = Vector::from_slice(&[-3.0_f64, 4.0]);
    let n = v.norm();

    assert!(n >= 0.0, "FALSIFIED VE-002: norm={n}, expected >= 0.0");
    assert!(
        (n - 5.0).abs() < 1e-9,
        "FALSIFIED VE-002: norm of [-3,4]={n}, expected 5.0"
    );
}

/// FALSIFY-VE-003: Cauchy-Schwarz: |dot(u,v)| <= norm(u) * norm(v)
#[test]
fn falsify_ve_003_cauchy_schwarz() {
    let u = Vector::from_slice(&[1.0_f64, -2.0, 3.0, 0.5]);
    let v = Vector::from_slice(&[4.0_f64, 0.0, -1.0, 2.0]);

    let dot = u.dot(&v).expect("same dimension").abs();
    let bound = u.norm() * v.norm();

    assert!(
        dot <= bound + 1e-9,
        "FALSIFIED VE-003: |dot|={dot} > norm(u)*norm(v)={bound}"
    );
}

/// FALSIFY-VE-004: Cross product of a vector with itself is zero
#[test]
fn falsify_ve_004_cross_self_is_zero() {
    let v = Vector::from_slice(&[2.5_f64, -1.0, 4.0]);
    let c = v.cross(&v).expect("3-dimensional");

    assert_eq!(
        c,
        Vector::from_slice(&[0.0, 0.0, 0.0]),
        "FALSIFIED VE-004: v x v != 0"
    );
}

/// FALSIFY-VE-005: Cross product anticommutes: u x v = -(v x u)
#[test]
fn falsify_ve_005_cross_anticommutative() {
    let u = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
    let v = Vector::from_slice(&[-4.0_f64, 0.5, 2.0]);

    let uv = u.cross(&v).expect("3-dimensional");
    let vu_negated = v.cross(&u).expect("3-dimensional").scale(-1.0);

    assert_eq!(uv, vu_negated, "FALSIFIED VE-005: u x v != -(v x u)");
}

/// FALSIFY-VE-006: Normalizing a nonzero vector yields unit norm
#[test]
fn falsify_ve_006_normalize_unit_norm() {
    let mut v = Vector::from_slice(&[1.0_f64, -2.0, 2.0]);
    v.normalize().expect("nonzero vector");

    assert!(
        (v.norm() - 1.0).abs() < 1e-9,
        "FALSIFIED VE-006: norm after normalize = {}",
        v.norm()
    );
}

/// FALSIFY-VE-007: Projection divides by the receiver's squared norm.
///
/// `u.project_onto(v)` computes `u * ((u·v)/(u·u))`, which is the textbook
/// projection of v onto the line spanned by u. The textbook projection of
/// u onto v (divide by v·v) is a different vector; this test pins down
/// which of the two the method produces.
#[test]
fn falsify_ve_007_projection_divides_by_receiver_norm() {
    let u = Vector::from_slice(&[1.0_f64, 0.0]);
    let v = Vector::from_slice(&[3.0_f64, 4.0]);

    let p = u.project_onto(&v).expect("same dimension");

    // (u·v)/(u·u) = 3/1, so the result is u scaled by 3.
    assert_eq!(
        p,
        Vector::from_slice(&[3.0, 0.0]),
        "FALSIFIED VE-007: projection did not scale the receiver by (u.v)/(u.u)"
    );

    // The would-be projection of u onto v divides by v·v = 25 and scales v.
    let onto_argument = v.scale(3.0 / 25.0);
    assert_ne!(
        p, onto_argument,
        "FALSIFIED VE-007: projection unexpectedly divides by the argument's norm"
    );
}

mod vector_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// FALSIFY-VE-008-prop: Triangle inequality:
        /// norm(u + v) <= norm(u) + norm(v)
        #[test]
        fn falsify_ve_008_prop_triangle_inequality(
            dim in 1usize..8,
            u_data in proptest::collection::vec(-100.0f64..100.0, 8),
            v_data in proptest::collection::vec(-100.0f64..100.0, 8),
        ) {
            let u = Vector::from_slice(&u_data[..dim]);
            let v = Vector::from_slice(&v_data[..dim]);

            let lhs = (&u + &v).norm();
            let rhs = u.norm() + v.norm();

            prop_assert!(
                lhs <= rhs + 1e-9,
                "FALSIFIED VE-008-prop: norm(u+v)={} > {}", lhs, rhs
            );
        }

        /// FALSIFY-VE-009-prop: Norm homogeneity:
        /// norm(s * v) = |s| * norm(v)
        #[test]
        fn falsify_ve_009_prop_norm_homogeneity(
            dim in 1usize..8,
            data in proptest::collection::vec(-100.0f64..100.0, 8),
            s in -10.0f64..10.0,
        ) {
            let v = Vector::from_slice(&data[..dim]);

            let lhs = v.scale(s).norm();
            let rhs = s.abs() * v.norm();

            prop_assert!(
                (lhs - rhs).abs() < 1e-6 * (1.0 + rhs),
                "FALSIFIED VE-009-prop: norm(s*v)={} != |s|*norm(v)={}", lhs, rhs
            );
        }

        /// FALSIFY-VE-001-prop: dot commutativity over random vectors
        #[test]
        fn falsify_ve_001_prop_dot_commutative(
            dim in 1usize..8,
            u_data in proptest::collection::vec(-100.0f64..100.0, 8),
            v_data in proptest::collection::vec(-100.0f64..100.0, 8),
        ) {
            let u = Vector::from_slice(&u_data[..dim]);
            let v = Vector::from_slice(&v_data[..dim]);

            let uv = u.dot(&v).expect("same dimension");
            let vu = v.dot(&u).expect("same dimension");

            prop_assert!(
                (uv - vu).abs() < 1e-9,
                "FALSIFIED VE-001-prop: {} != {}", uv, vu
            );
        }
    }
}
