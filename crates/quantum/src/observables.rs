use crate::env::{push_left, IDENTITY, PAULI_Z};
use tn::mps::{C64, MPS};

fn contract_diagonal(psi: &MPS, z_on: impl Fn(usize) -> bool) -> f64 {
    let env = psi
        .sites
        .iter()
        .enumerate()
        .fold(vec![C64::new(1.0, 0.0)], |env, (k, a)| {
            let diag = if z_on(k) { PAULI_Z } else { IDENTITY };
            push_left(&env, a, diag)
        });
    env.first().map_or(0.0, |v| v.re)
}

/// ⟨ψ|ψ⟩. Truncation can move this away from one.
pub fn norm_sq(psi: &MPS) -> f64 {
    contract_diagonal(psi, |_| false)
}

/// Normalised ⟨Π_{q ∈ qubits} Z_q⟩ for any set of sites.
///
/// A site listed an even number of times contributes the identity.
pub fn expect_z_string(psi: &MPS, qubits: &[usize]) -> f64 {
    let norm = norm_sq(psi);
    if norm == 0.0 {
        return 0.0;
    }
    let numer = contract_diagonal(psi, |k| qubits.iter().filter(|&&q| q == k).count() % 2 == 1);
    numer / norm
}

/// Expectation value ⟨Z_k⟩ for a qubit at site k.
pub fn expect_z(psi: &MPS, k: usize) -> f64 {
    expect_z_string(psi, &[k])
}

/// Expectation value ⟨Z_i Z_j⟩, any pair of sites.
pub fn expect_zz(psi: &MPS, i: usize, j: usize) -> f64 {
    expect_z_string(psi, &[i, j])
}
