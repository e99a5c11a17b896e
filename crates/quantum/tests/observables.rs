use quantum::{
    apply_cnot,
    gates::{hadamard, rx, ry},
    observables::{expect_z, expect_z_string, expect_zz, norm_sq},
};
use tn::{mps::MPS, truncation::Truncation};

#[test]
fn bell_observables() {
    let trunc = Truncation {
        max_bond: 8,
        cutoff: 1e-12,
    };
    let mut psi = MPS::new_zero(2);

    psi.apply_1q(0, hadamard());
    apply_cnot(&mut psi, 0, 1, trunc);

    assert!(expect_z(&psi, 0).abs() < 1e-12);
    assert!(expect_z(&psi, 1).abs() < 1e-12);
    assert!((expect_zz(&psi, 0, 1) - 1.0).abs() < 1e-12);
    assert!((norm_sq(&psi) - 1.0).abs() < 1e-12);
}

#[test]
fn rotations_follow_cosine_law() {
    let theta = 0.83;
    let mut psi = MPS::new_zero(3);
    psi.apply_1q(0, rx(theta));
    psi.apply_1q(2, ry(theta));

    assert!((expect_z(&psi, 0) - theta.cos()).abs() < 1e-12);
    assert!((expect_z(&psi, 2) - theta.cos()).abs() < 1e-12);
    assert!((expect_zz(&psi, 0, 2) - theta.cos().powi(2)).abs() < 1e-12);
}

#[test]
fn repeated_site_cancels() {
    let mut psi = MPS::new_zero(2);
    psi.apply_1q(1, rx(1.1));
    assert!((expect_z_string(&psi, &[1, 1]) - 1.0).abs() < 1e-12);
}
