//! Configuration errors, raised before any circuit is built.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The qubit register is empty.
    #[error("qubit count must be at least 1")]
    ZeroQubits,

    /// Graph size and qubit register disagree.
    #[error("graph has {graph_nodes} nodes but the register has {qubits} qubits")]
    GraphSizeMismatch { graph_nodes: usize, qubits: usize },

    /// Node labels are not exactly `0..n`.
    #[error("node labels must be exactly 0..{expected}, got {found:?}")]
    NonContiguousNodes { expected: usize, found: Vec<usize> },

    /// Edge endpoint outside `0..num_nodes`.
    #[error("edge ({u}, {v}) references a node outside 0..{num_nodes}")]
    NodeOutOfRange { u: usize, v: usize, num_nodes: usize },

    #[error("self loop on node {0}")]
    SelfLoop(usize),

    #[error("duplicate edge ({u}, {v})")]
    DuplicateEdge { u: usize, v: usize },

    #[error("edge ({u}, {v}) has non-finite weight {weight}")]
    NonFiniteWeight { u: usize, v: usize, weight: f64 },

    #[error("edge probability {0} is outside [0, 1]")]
    EdgeProbability(f64),

    /// Parameter vector length does not match the circuit.
    #[error("circuit takes {expected} parameters, got {got}")]
    ParameterCount { expected: usize, got: usize },
}
