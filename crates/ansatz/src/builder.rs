//! Ansatz templates: QAOA for Max-Cut and two-local VQE circuits.

use crate::circuit::{Angle, Circuit, Instruction};
use crate::error::ConfigError;
use crate::graph::ProblemGraph;

/// Sign of the cost-layer phase in the QAOA ansatz.
///
/// `Negative` applies `RZ(-γ·w)` per edge and is the default used throughout
/// the benchmarks. `Positive` (`RZ(+γ·w)`, the textbook form) exists so the
/// two can be compared; it changes the sign of the objective landscape in γ.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CostSign {
    #[default]
    Negative,
    Positive,
}

impl CostSign {
    fn factor(self) -> f64 {
        match self {
            CostSign::Negative => -1.0,
            CostSign::Positive => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entanglement {
    /// Nearest-neighbour chain, `CX(i, i+1)`.
    Linear,
    /// Every pair `i < j`.
    Full,
}

impl Entanglement {
    pub fn name(self) -> &'static str {
        match self {
            Entanglement::Linear => "linear",
            Entanglement::Full => "full",
        }
    }

    pub fn gates_per_block(self, n: usize) -> usize {
        match self {
            Entanglement::Linear => n.saturating_sub(1),
            Entanglement::Full => n * n.saturating_sub(1) / 2,
        }
    }

    fn pairs(self, n: usize) -> Vec<(usize, usize)> {
        match self {
            Entanglement::Linear => (0..n.saturating_sub(1)).map(|i| (i, i + 1)).collect(),
            Entanglement::Full => (0..n)
                .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
                .collect(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Topology {
    Qaoa { graph: ProblemGraph, sign: CostSign },
    TwoLocal(Entanglement),
}

impl Topology {
    pub fn name(&self) -> &'static str {
        match self {
            Topology::Qaoa { .. } => "qaoa",
            Topology::TwoLocal(e) => e.name(),
        }
    }
}

pub fn parameter_count(num_qubits: usize, reps: usize, topology: &Topology) -> usize {
    match topology {
        Topology::Qaoa { .. } => 2 * reps,
        Topology::TwoLocal(_) => num_qubits * (reps + 1),
    }
}

pub fn build(num_qubits: usize, reps: usize, topology: &Topology) -> Result<Circuit, ConfigError> {
    match topology {
        Topology::Qaoa { graph, sign } => qaoa(graph, num_qubits, reps, *sign),
        Topology::TwoLocal(ent) => two_local(num_qubits, reps, *ent),
    }
}

/// Index of `γ_p` in the QAOA parameter vector.
pub fn gamma_index(p: usize) -> usize {
    p
}

/// Index of `β_p` in the QAOA parameter vector.
pub fn beta_index(p: usize, reps: usize) -> usize {
    reps + p
}

/// QAOA ansatz for Max-Cut on `graph`.
///
/// Layout: H on every qubit, then per repetition `p` the cost layer
/// `CX(u,v) · RZ(±γ_p·w)_v · CX(u,v)` for each edge in insertion order and
/// the mixer `RX(2β_p)` on every qubit. Parameters are `[γ_0.., β_0..]`.
pub fn qaoa(
    graph: &ProblemGraph,
    num_qubits: usize,
    reps: usize,
    sign: CostSign,
) -> Result<Circuit, ConfigError> {
    check_qubits(num_qubits)?;
    if graph.num_nodes() != num_qubits {
        return Err(ConfigError::GraphSizeMismatch {
            graph_nodes: graph.num_nodes(),
            qubits: num_qubits,
        });
    }

    let mut circuit = Circuit::new(num_qubits, 2 * reps);
    for q in 0..num_qubits {
        circuit.push(Instruction::H(q));
    }

    let edges: Vec<_> = graph.edges().collect();
    for p in 0..reps {
        for &(u, v, w) in &edges {
            circuit.push(Instruction::Cx { control: u, target: v });
            circuit.push(Instruction::Rz {
                qubit: v,
                angle: Angle::scaled(gamma_index(p), sign.factor() * w),
            });
            circuit.push(Instruction::Cx { control: u, target: v });
        }
        for q in 0..num_qubits {
            circuit.push(Instruction::Rx {
                qubit: q,
                angle: Angle::scaled(beta_index(p, reps), 2.0),
            });
        }
    }

    Ok(circuit)
}

/// RY rotation layers interleaved with CX entangling blocks.
///
/// Layer 0 is one RY per qubit; each of the `reps` repetitions adds an
/// entangling block and another RY layer. Parameter `r·n + q` drives the RY
/// of qubit `q` in layer `r`.
pub fn two_local(num_qubits: usize, reps: usize, entanglement: Entanglement) -> Result<Circuit, ConfigError> {
    check_qubits(num_qubits)?;

    let mut circuit = Circuit::new(num_qubits, num_qubits * (reps + 1));
    push_ry_layer(&mut circuit, num_qubits, 0);

    let pairs = entanglement.pairs(num_qubits);
    for r in 1..=reps {
        for &(control, target) in &pairs {
            circuit.push(Instruction::Cx { control, target });
        }
        push_ry_layer(&mut circuit, num_qubits, r);
    }

    Ok(circuit)
}

fn push_ry_layer(circuit: &mut Circuit, n: usize, layer: usize) {
    for q in 0..n {
        circuit.push(Instruction::Ry {
            qubit: q,
            angle: Angle::param(layer * n + q),
        });
    }
}

fn check_qubits(num_qubits: usize) -> Result<(), ConfigError> {
    if num_qubits == 0 {
        return Err(ConfigError::ZeroQubits);
    }
    Ok(())
}
