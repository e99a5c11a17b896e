/// One weighted Pauli-Z product, `coeff * Π_{q ∈ qubits} Z_q`.
#[derive(Clone, Debug, PartialEq)]
pub struct ZTerm {
    pub coeff: f64,
    pub qubits: Vec<usize>,
}

impl ZTerm {
    /// ±1 eigenvalue of the Z product on a computational-basis state.
    pub fn sign_on(&self, bits: u64) -> f64 {
        let ones = self.qubits.iter().filter(|&&q| (bits >> q) & 1 == 1).count();
        if ones % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }
}

/// Diagonal (Ising-form) observable over a fixed qubit register.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hamiltonian {
    num_qubits: usize,
    terms: Vec<ZTerm>,
}

impl Hamiltonian {
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            terms: Vec::new(),
        }
    }

    pub fn with_term(mut self, coeff: f64, qubits: Vec<usize>) -> Self {
        self.push_term(coeff, qubits);
        self
    }

    pub fn push_term(&mut self, coeff: f64, qubits: Vec<usize>) {
        self.terms.push(ZTerm { coeff, qubits });
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn terms(&self) -> &[ZTerm] {
        &self.terms
    }

    /// Largest qubit index any term touches.
    pub fn max_qubit(&self) -> Option<usize> {
        self.terms.iter().flat_map(|t| t.qubits.iter().copied()).max()
    }

    /// Classical energy of a basis state; bit `q` of `bits` is qubit `q`.
    pub fn value_on(&self, bits: u64) -> f64 {
        self.terms.iter().map(|t| t.coeff * t.sign_on(bits)).sum()
    }
}
