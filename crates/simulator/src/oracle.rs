//! Circuit evaluation backends.
//!
//! The evaluation loop only talks to the [`Oracle`] trait. [`MpsOracle`] is
//! the bundled backend: a matrix product state with truncated SVD after each
//! two-qubit gate.

use ansatz::{BoundCircuit, BoundGate, Circuit, ProblemGraph};
use quantum::{energy::energy, gates, hamiltonian::Hamiltonian, measurement::sample_bitstring};
use rayon::prelude::*;
use rng::ShakeRng;
use tn::{mps::MPS, truncation::Truncation};
use tracing::debug;

use crate::distribution::Distribution;
use crate::error::OracleError;
use crate::maxcut;

/// Bitstrings are packed into `u64`.
pub const MAX_SUPPORTED_QUBITS: usize = 64;

/// Simulation capability consumed by the evaluation loop.
pub trait Oracle {
    /// Max-Cut observable for `graph` and its constant offset.
    fn build_observable(&self, graph: &ProblemGraph) -> Result<(Hamiltonian, f64), OracleError> {
        Ok(maxcut::build_observable(graph))
    }

    /// ⟨H⟩ on the state prepared by `circuit` with `params` bound. The offset
    /// is not included.
    fn evaluate(
        &mut self,
        circuit: &Circuit,
        observable: &Hamiltonian,
        params: &[f64],
    ) -> Result<f64, OracleError>;

    /// Measurement outcome frequencies of a measured circuit.
    fn sample(&mut self, circuit: &Circuit, params: &[f64]) -> Result<Distribution, OracleError>;
}

#[derive(Clone, Debug)]
pub struct OracleConfig {
    pub truncation: Truncation,
    pub shots: usize,
    pub max_qubits: usize,
    pub seed: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            truncation: Truncation::default(),
            shots: 1024,
            max_qubits: MAX_SUPPORTED_QUBITS,
            seed: "default-seed".to_string(),
        }
    }
}

impl OracleConfig {
    pub fn with_truncation(mut self, truncation: Truncation) -> Self {
        self.truncation = truncation;
        self
    }

    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Capped at [`MAX_SUPPORTED_QUBITS`].
    pub fn with_max_qubits(mut self, max_qubits: usize) -> Self {
        self.max_qubits = max_qubits.min(MAX_SUPPORTED_QUBITS);
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }
}

pub struct MpsOracle {
    config: OracleConfig,
    rng: ShakeRng,
    sample_calls: u64,
    evaluations: usize,
}

impl MpsOracle {
    pub fn new(config: OracleConfig) -> Self {
        let rng = ShakeRng::new(config.seed.as_bytes());
        Self {
            config,
            rng,
            sample_calls: 0,
            evaluations: 0,
        }
    }

    pub fn config(&self) -> &OracleConfig {
        &self.config
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    fn check_size(&self, circuit: &Circuit) -> Result<(), OracleError> {
        let limit = self.config.max_qubits.min(MAX_SUPPORTED_QUBITS);
        if circuit.num_qubits() > limit {
            return Err(OracleError::TooManyQubits {
                qubits: circuit.num_qubits(),
                limit,
            });
        }
        Ok(())
    }

    /// Runs the bound circuit from |0…0⟩.
    pub fn prepare(&self, bound: &BoundCircuit<'_>) -> MPS {
        let trunc = self.config.truncation;
        let mut psi = MPS::new_zero(bound.circuit().num_qubits());
        for gate in bound.gates() {
            match gate {
                BoundGate::H(q) => psi.apply_1q(q, gates::hadamard()),
                BoundGate::Rx(q, theta) => psi.apply_1q(q, gates::rx(theta)),
                BoundGate::Ry(q, theta) => psi.apply_1q(q, gates::ry(theta)),
                BoundGate::Rz(q, theta) => psi.apply_1q(q, gates::rz(theta)),
                BoundGate::Cx(c, t) => psi.apply_2q(c, t, gates::cnot(), trunc),
            }
        }
        psi
    }
}

impl Oracle for MpsOracle {
    fn evaluate(
        &mut self,
        circuit: &Circuit,
        observable: &Hamiltonian,
        params: &[f64],
    ) -> Result<f64, OracleError> {
        self.check_size(circuit)?;
        if observable.num_qubits() != circuit.num_qubits() {
            return Err(OracleError::ObservableSize {
                observable: observable.num_qubits(),
                circuit: circuit.num_qubits(),
            });
        }
        if let Some(q) = observable.max_qubit().filter(|&q| q >= circuit.num_qubits()) {
            return Err(OracleError::ObservableQubit {
                qubit: q,
                num_qubits: circuit.num_qubits(),
            });
        }

        let bound = circuit.bind(params)?;
        let psi = self.prepare(&bound);
        let value = energy(&psi, observable);
        if !value.is_finite() {
            return Err(OracleError::NonFinite(value));
        }

        self.evaluations += 1;
        debug!(
            evaluation = self.evaluations,
            value,
            bond = psi.max_bond_dim(),
            "evaluated expectation"
        );
        Ok(value)
    }

    fn sample(&mut self, circuit: &Circuit, params: &[f64]) -> Result<Distribution, OracleError> {
        self.check_size(circuit)?;
        if !circuit.has_measurement() {
            return Err(OracleError::NoMeasurement);
        }
        if self.config.shots == 0 {
            return Err(OracleError::ZeroShots);
        }

        let bound = circuit.bind(params)?;
        let psi = self.prepare(&bound);

        // One stream per (call, shot): results do not depend on thread count.
        let call = self.rng.derive(b"SAMPLE_CALL", self.sample_calls);
        self.sample_calls += 1;

        let samples: Vec<u64> = (0..self.config.shots)
            .into_par_iter()
            .map(|shot| {
                let mut rng = call.derive(b"SHOT", shot as u64);
                sample_bitstring(&psi, &mut rng)
            })
            .collect();

        let dist = Distribution::from_samples(circuit.num_qubits(), samples);
        debug!(
            shots = dist.shots(),
            support = dist.support(),
            bond = psi.max_bond_dim(),
            "sampled circuit"
        );
        Ok(dist)
    }
}
