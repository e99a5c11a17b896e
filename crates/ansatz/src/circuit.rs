//! Parameterized circuit descriptions.
//!
//! A [`Circuit`] is built once per (topology, depth) and reused for every
//! parameter vector. [`Circuit::bind`] only borrows the parameters; angles
//! are resolved lazily while iterating the bound gates.

use crate::error::ConfigError;

/// Rotation angle: a constant, or `scale * params[index]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Angle {
    Fixed(f64),
    Param { index: usize, scale: f64 },
}

impl Angle {
    pub fn param(index: usize) -> Self {
        Angle::Param { index, scale: 1.0 }
    }

    pub fn scaled(index: usize, scale: f64) -> Self {
        Angle::Param { index, scale }
    }

    /// Callers must have checked `params` against the circuit length.
    #[inline]
    fn resolve(self, params: &[f64]) -> f64 {
        match self {
            Angle::Fixed(v) => v,
            Angle::Param { index, scale } => scale * params[index],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Instruction {
    H(usize),
    Rx { qubit: usize, angle: Angle },
    Ry { qubit: usize, angle: Angle },
    Rz { qubit: usize, angle: Angle },
    Cx { control: usize, target: usize },
}

impl Instruction {
    pub fn is_entangling(&self) -> bool {
        matches!(self, Instruction::Cx { .. })
    }

    pub fn is_rotation(&self) -> bool {
        matches!(
            self,
            Instruction::Rx { .. } | Instruction::Ry { .. } | Instruction::Rz { .. }
        )
    }
}

/// Instruction with its angle substituted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundGate {
    H(usize),
    Rx(usize, f64),
    Ry(usize, f64),
    Rz(usize, f64),
    Cx(usize, usize),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Circuit {
    num_qubits: usize,
    num_parameters: usize,
    instructions: Vec<Instruction>,
    measured: bool,
}

impl Circuit {
    pub(crate) fn new(num_qubits: usize, num_parameters: usize) -> Self {
        Self {
            num_qubits,
            num_parameters,
            instructions: Vec::new(),
            measured: false,
        }
    }

    pub(crate) fn push(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Appends a terminal measurement of every qubit.
    pub fn measure_all(mut self) -> Self {
        self.measured = true;
        self
    }

    pub fn has_measurement(&self) -> bool {
        self.measured
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn num_parameters(&self) -> usize {
        self.num_parameters
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn entangling_gate_count(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_entangling()).count()
    }

    pub fn rotation_count(&self) -> usize {
        self.instructions.iter().filter(|i| i.is_rotation()).count()
    }

    pub fn bind<'a>(&'a self, params: &'a [f64]) -> Result<BoundCircuit<'a>, ConfigError> {
        if params.len() != self.num_parameters {
            return Err(ConfigError::ParameterCount {
                expected: self.num_parameters,
                got: params.len(),
            });
        }
        Ok(BoundCircuit {
            circuit: self,
            params,
        })
    }
}

/// A circuit paired with one parameter vector.
#[derive(Clone, Copy, Debug)]
pub struct BoundCircuit<'a> {
    circuit: &'a Circuit,
    params: &'a [f64],
}

impl<'a> BoundCircuit<'a> {
    pub fn circuit(&self) -> &'a Circuit {
        self.circuit
    }

    pub fn params(&self) -> &'a [f64] {
        self.params
    }

    pub fn gates(&self) -> impl Iterator<Item = BoundGate> + 'a {
        let params = self.params;
        self.circuit.instructions.iter().map(move |inst| match *inst {
            Instruction::H(q) => BoundGate::H(q),
            Instruction::Rx { qubit, angle } => BoundGate::Rx(qubit, angle.resolve(params)),
            Instruction::Ry { qubit, angle } => BoundGate::Ry(qubit, angle.resolve(params)),
            Instruction::Rz { qubit, angle } => BoundGate::Rz(qubit, angle.resolve(params)),
            Instruction::Cx { control, target } => BoundGate::Cx(control, target),
        })
    }
}
