//! The evaluation loop: parameters in, scalar or distribution out.
//!
//! Circuits are built once per configuration and only re-bound per call. The
//! oracle and optimizer are passed in explicitly; no state is kept between
//! runs.

use ansatz::{two_local, Circuit, ConfigError, CostSign, Entanglement, ProblemGraph};
use quantum::hamiltonian::Hamiltonian;
use rng::ShakeRng;
use tracing::{debug, info};

use crate::distribution::Distribution;
use crate::error::Result;
use crate::maxcut::expected_cut;
use crate::optimizer::{OptimizationResult, Optimizer};
use crate::oracle::Oracle;

/// Initial point, uniform in [0, 2π) per parameter.
pub fn random_initial_point(num_parameters: usize, rng: &mut ShakeRng) -> Vec<f64> {
    rng.angles(num_parameters, b"INITIAL_POINT")
}

fn check_len(circuit: &Circuit, params: &[f64]) -> Result<()> {
    if params.len() != circuit.num_parameters() {
        return Err(ConfigError::ParameterCount {
            expected: circuit.num_parameters(),
            got: params.len(),
        }
        .into());
    }
    Ok(())
}

/// ⟨H⟩ for one parameter vector, offset excluded.
pub fn expectation<O: Oracle>(
    oracle: &mut O,
    circuit: &Circuit,
    observable: &Hamiltonian,
    params: &[f64],
) -> Result<f64> {
    check_len(circuit, params)?;
    Ok(oracle.evaluate(circuit, observable, params)?)
}

/// Measurement distribution for one parameter vector.
pub fn sample<O: Oracle>(oracle: &mut O, circuit: &Circuit, params: &[f64]) -> Result<Distribution> {
    check_len(circuit, params)?;
    Ok(oracle.sample(circuit, params)?)
}

/// Minimises ⟨H⟩ over the circuit parameters starting from `initial`.
pub fn minimize<O: Oracle, M: Optimizer>(
    oracle: &mut O,
    optimizer: &M,
    circuit: &Circuit,
    observable: &Hamiltonian,
    initial: Vec<f64>,
) -> Result<OptimizationResult> {
    check_len(circuit, &initial)?;
    let result = optimizer.minimize(
        |params: &[f64]| oracle.evaluate(circuit, observable, params),
        initial,
    )?;
    debug!(
        value = result.optimal_value,
        evaluations = result.num_evaluations,
        converged = result.converged,
        "minimisation finished"
    );
    Ok(result)
}

/// Outcome of a QAOA Max-Cut run.
#[derive(Debug, Clone)]
pub struct QaoaOutcome {
    pub optimization: OptimizationResult,
    /// Constant dropped from the observable.
    pub offset: f64,
    /// `-(optimal_value + offset)`.
    pub expected_cut: f64,
    /// Most frequent bitstring when sampling the optimal circuit.
    pub best_bitstring: u64,
    pub best_cut: f64,
    pub distribution: Distribution,
}

impl QaoaOutcome {
    /// `best_cut / max_cut`, when `graph` is small enough to solve exactly.
    ///
    /// Enumerates every partition, so it is kept out of [`run_qaoa`] and out
    /// of the timed part of a sweep.
    pub fn approximation_ratio(&self, graph: &ProblemGraph) -> Option<f64> {
        graph
            .max_cut_brute_force()
            .filter(|&(_, max)| max > 0.0)
            .map(|(_, max)| self.best_cut / max)
    }
}

/// Builds the QAOA ansatz for `graph`, optimizes it from a random start and
/// samples the optimum.
pub fn run_qaoa<O: Oracle, M: Optimizer>(
    oracle: &mut O,
    optimizer: &M,
    graph: &ProblemGraph,
    reps: usize,
    sign: CostSign,
    rng: &mut ShakeRng,
) -> Result<QaoaOutcome> {
    let n = graph.num_nodes();
    let circuit = ansatz::qaoa(graph, n, reps, sign)?.measure_all();
    let (observable, offset) = oracle.build_observable(graph)?;

    let initial = random_initial_point(circuit.num_parameters(), rng);
    let optimization = minimize(oracle, optimizer, &circuit, &observable, initial)?;
    let distribution = sample(oracle, &circuit, &optimization.optimal_params)?;

    let (best_bitstring, _) = distribution.most_likely().unwrap_or((0, 0));
    let best_cut = graph.cut_value(best_bitstring);

    let outcome = QaoaOutcome {
        expected_cut: expected_cut(optimization.optimal_value, offset),
        optimization,
        offset,
        best_bitstring,
        best_cut,
        distribution,
    };
    info!(
        qubits = n,
        reps,
        expected_cut = outcome.expected_cut,
        best_cut = outcome.best_cut,
        "qaoa run finished"
    );
    Ok(outcome)
}

/// Samples a two-local ansatz at a random parameter point.
pub fn run_vqe_sampling<O: Oracle>(
    oracle: &mut O,
    num_qubits: usize,
    reps: usize,
    entanglement: Entanglement,
    rng: &mut ShakeRng,
) -> Result<Distribution> {
    let circuit = two_local(num_qubits, reps, entanglement)?.measure_all();
    let params = random_initial_point(circuit.num_parameters(), rng);
    let dist = sample(oracle, &circuit, &params)?;
    info!(
        qubits = num_qubits,
        reps,
        entanglement = entanglement.name(),
        support = dist.support(),
        "vqe sampling finished"
    );
    Ok(dist)
}
