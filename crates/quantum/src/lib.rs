pub mod energy;
pub mod gates;
pub mod hamiltonian;
pub mod measurement;
pub mod observables;
mod env;

use tn::{mps::MPS, truncation::Truncation};

/// CNOT with `control` and `target` anywhere in the chain.
pub fn apply_cnot(psi: &mut MPS, control: usize, target: usize, trunc: Truncation) {
    psi.apply_2q(control, target, gates::cnot(), trunc);
}
