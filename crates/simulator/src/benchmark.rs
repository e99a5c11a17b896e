//! Runtime sweeps over qubit count and ansatz depth.

use std::time::Instant;

use ansatz::{CostSign, Entanglement, ProblemGraph};
use rng::ShakeRng;
use tracing::info;

use crate::error::Result;
use crate::evaluation::{run_qaoa, run_vqe_sampling};
use crate::optimizer::Optimizer;
use crate::oracle::{MpsOracle, OracleConfig};

/// Grid of (qubits, reps) points, visited qubits-major.
#[derive(Clone, Debug)]
pub struct SweepPlan {
    pub qubits: Vec<usize>,
    pub reps: Vec<usize>,
}

impl SweepPlan {
    pub fn new(qubits: Vec<usize>, reps: Vec<usize>) -> Self {
        Self { qubits, reps }
    }

    pub fn with_qubits(mut self, qubits: Vec<usize>) -> Self {
        self.qubits = qubits;
        self
    }

    pub fn with_reps(mut self, reps: Vec<usize>) -> Self {
        self.reps = reps;
        self
    }

    pub fn len(&self) -> usize {
        self.qubits.len() * self.reps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn points(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.qubits
            .iter()
            .flat_map(move |&n| self.reps.iter().map(move |&r| (n, r)))
    }
}

impl Default for SweepPlan {
    fn default() -> Self {
        Self::new(vec![4, 6, 8], vec![1, 2, 3])
    }
}

/// Problem graph family for QAOA sweeps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GraphFamily {
    Complete,
    Ring,
    Random { edge_prob: f64 },
}

impl GraphFamily {
    pub fn name(self) -> &'static str {
        match self {
            GraphFamily::Complete => "complete",
            GraphFamily::Ring => "ring",
            GraphFamily::Random { .. } => "random",
        }
    }

    pub fn generate(self, n: usize, rng: &mut ShakeRng) -> Result<ProblemGraph> {
        Ok(match self {
            GraphFamily::Complete => ProblemGraph::complete(n),
            GraphFamily::Ring => ProblemGraph::ring(n),
            GraphFamily::Random { edge_prob } => ProblemGraph::erdos_renyi(n, edge_prob, rng)?,
        })
    }
}

/// One timed sweep point.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchRecord {
    pub algorithm: &'static str,
    pub topology: &'static str,
    pub qubits: usize,
    pub reps: usize,
    pub parameters: usize,
    pub entangling_gates: usize,
    pub evaluations: usize,
    pub seconds: f64,
    /// Expected cut for QAOA, distinct outcomes for VQE sampling.
    pub value: f64,
}

/// Optimizes QAOA at every plan point; each point gets a fresh oracle and
/// a seed derived from its (qubits, reps).
pub fn sweep_qaoa<M: Optimizer>(
    config: &OracleConfig,
    optimizer: &M,
    family: GraphFamily,
    sign: CostSign,
    plan: &SweepPlan,
) -> Result<Vec<BenchRecord>> {
    let base = ShakeRng::new(config.seed.as_bytes());
    let mut records = Vec::new();

    for (n, reps) in plan.points() {
        let mut rng = base.derive(b"QAOA_POINT", point_key(n, reps));
        let graph = family.generate(n, &mut rng)?;
        let mut oracle = MpsOracle::new(config.clone());

        let start = Instant::now();
        let outcome = run_qaoa(&mut oracle, optimizer, &graph, reps, sign, &mut rng)?;
        let seconds = start.elapsed().as_secs_f64();

        let record = BenchRecord {
            algorithm: "qaoa",
            topology: family.name(),
            qubits: n,
            reps,
            parameters: 2 * reps,
            entangling_gates: 2 * reps * graph.num_edges(),
            evaluations: outcome.optimization.num_evaluations,
            seconds,
            value: outcome.expected_cut,
        };
        info!(
            qubits = n,
            reps,
            seconds,
            evaluations = record.evaluations,
            "qaoa point"
        );
        records.push(record);
    }

    Ok(records)
}

/// Samples the two-local ansatz at every plan point.
pub fn sweep_vqe(
    config: &OracleConfig,
    entanglement: Entanglement,
    plan: &SweepPlan,
) -> Result<Vec<BenchRecord>> {
    let base = ShakeRng::new(config.seed.as_bytes());
    let mut records = Vec::new();

    for (n, reps) in plan.points() {
        let mut rng = base.derive(b"VQE_POINT", point_key(n, reps));
        let mut oracle = MpsOracle::new(config.clone());

        let start = Instant::now();
        let dist = run_vqe_sampling(&mut oracle, n, reps, entanglement, &mut rng)?;
        let seconds = start.elapsed().as_secs_f64();

        let record = BenchRecord {
            algorithm: "vqe",
            topology: entanglement.name(),
            qubits: n,
            reps,
            parameters: n * (reps + 1),
            entangling_gates: reps * entanglement.gates_per_block(n),
            evaluations: 1,
            seconds,
            value: dist.support() as f64,
        };
        info!(
            qubits = n,
            reps,
            entanglement = entanglement.name(),
            seconds,
            "vqe point"
        );
        records.push(record);
    }

    Ok(records)
}

fn point_key(n: usize, reps: usize) -> u64 {
    ((n as u64) << 32) | reps as u64
}
