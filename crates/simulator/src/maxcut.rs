//! Ising form of the Max-Cut problem.
//!
//! For edge weights `w_uv` the cut size is `Σ w_uv (1 - Z_u Z_v) / 2`.
//! Minimising `H = Σ (w_uv / 2) Z_u Z_v` plus the constant `-Σ w_uv / 2`
//! therefore minimises the negated cut.

use ansatz::ProblemGraph;
use quantum::hamiltonian::Hamiltonian;

/// Returns `(H, offset)` with `⟨H⟩ + offset = -E[cut]`.
pub fn build_observable(graph: &ProblemGraph) -> (Hamiltonian, f64) {
    let mut h = Hamiltonian::new(graph.num_nodes());
    let mut offset = 0.0;
    for (u, v, w) in graph.edges() {
        h.push_term(0.5 * w, vec![u, v]);
        offset -= 0.5 * w;
    }
    (h, offset)
}

/// Expected cut size for an objective value that excludes the offset.
pub fn expected_cut(value: f64, offset: f64) -> f64 {
    -(value + offset)
}
