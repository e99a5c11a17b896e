use crate::hamiltonian::Hamiltonian;
use crate::observables::expect_z_string;
use tn::mps::MPS;

/// Expectation value ⟨ψ|H|ψ⟩ / ⟨ψ|ψ⟩ for a diagonal Z-string Hamiltonian.
pub fn energy(psi: &MPS, h: &Hamiltonian) -> f64 {
    h.terms()
        .iter()
        .map(|t| t.coeff * expect_z_string(psi, &t.qubits))
        .sum()
}
