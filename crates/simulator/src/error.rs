//! Error types of the evaluation loop.

use ansatz::ConfigError;
use thiserror::Error;

/// Failures reported by a simulation oracle.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum OracleError {
    #[error("circuit has {qubits} qubits, backend limit is {limit}")]
    TooManyQubits { qubits: usize, limit: usize },

    #[error("observable acts on {observable} qubits, circuit has {circuit}")]
    ObservableSize { observable: usize, circuit: usize },

    #[error("observable term touches qubit {qubit}, register has {num_qubits}")]
    ObservableQubit { qubit: usize, num_qubits: usize },

    #[error("sampling needs a measured circuit")]
    NoMeasurement,

    #[error("shot count must be positive")]
    ZeroShots,

    #[error("expectation value is not finite ({0})")]
    NonFinite(f64),

    #[error("circuit rejected")]
    Rejected(#[from] ConfigError),
}

/// Anything that ends a benchmark run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
