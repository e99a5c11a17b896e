//! Evaluation loop for variational ansatz benchmarks.
//!
//! [`ansatz`] builds the circuits; this crate binds parameters, hands them to
//! an [`Oracle`], optionally drives an [`Optimizer`], and times sweeps.

pub mod benchmark;
pub mod distribution;
pub mod error;
pub mod evaluation;
pub mod maxcut;
pub mod optimizer;
pub mod oracle;
mod output;

pub use benchmark::{sweep_qaoa, sweep_vqe, BenchRecord, GraphFamily, SweepPlan};
pub use distribution::{format_bitstring, Distribution};
pub use error::{Error, OracleError, Result};
pub use evaluation::{expectation, minimize, random_initial_point, run_qaoa, run_vqe_sampling, sample, QaoaOutcome};
pub use optimizer::{NelderMead, OptimizationResult, Optimizer};
pub use oracle::{MpsOracle, Oracle, OracleConfig};
pub use output::{write_csv, write_records};
