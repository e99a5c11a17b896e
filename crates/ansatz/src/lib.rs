//! Ansatz construction for variational benchmarks.
//!
//! Circuits here are pure descriptions: gates, qubit indices and parameter
//! references. Nothing in this crate simulates anything.

pub mod builder;
pub mod circuit;
pub mod error;
pub mod graph;

pub use builder::{
    beta_index, build, gamma_index, parameter_count, qaoa, two_local, CostSign, Entanglement,
    Topology,
};
pub use circuit::{Angle, BoundCircuit, BoundGate, Circuit, Instruction};
pub use error::ConfigError;
pub use graph::ProblemGraph;
