use std::collections::BTreeMap;

use quantum::hamiltonian::Hamiltonian;

/// Measured bitstring frequencies.
///
/// Keys store qubit `k` in bit `k`. [`format_bitstring`] prints them with
/// qubit 0 rightmost.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Distribution {
    num_qubits: usize,
    shots: usize,
    counts: BTreeMap<u64, usize>,
}

impl Distribution {
    pub fn from_samples(num_qubits: usize, samples: impl IntoIterator<Item = u64>) -> Self {
        let mut counts = BTreeMap::new();
        let mut shots = 0;
        for bits in samples {
            *counts.entry(bits).or_insert(0) += 1;
            shots += 1;
        }
        Self {
            num_qubits,
            shots,
            counts,
        }
    }

    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    pub fn shots(&self) -> usize {
        self.shots
    }

    pub fn counts(&self) -> &BTreeMap<u64, usize> {
        &self.counts
    }

    pub fn support(&self) -> usize {
        self.counts.len()
    }

    pub fn probability(&self, bits: u64) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.counts.get(&bits).copied().unwrap_or(0) as f64 / self.shots as f64
    }

    pub fn probabilities(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        let shots = self.shots as f64;
        self.counts.iter().map(move |(&b, &c)| (b, c as f64 / shots))
    }

    /// Most frequent outcome; ties go to the smallest bitstring.
    pub fn most_likely(&self) -> Option<(u64, usize)> {
        self.counts
            .iter()
            .fold(None, |best: Option<(u64, usize)>, (&b, &c)| match best {
                Some((_, bc)) if bc >= c => best,
                _ => Some((b, c)),
            })
    }

    pub fn expectation(&self, h: &Hamiltonian) -> f64 {
        self.probabilities().map(|(b, p)| p * h.value_on(b)).sum()
    }
}

/// `bits` as a string of `num_qubits` characters, qubit `num_qubits - 1`
/// first.
pub fn format_bitstring(bits: u64, num_qubits: usize) -> String {
    (0..num_qubits)
        .rev()
        .map(|q| if (bits >> q) & 1 == 1 { '1' } else { '0' })
        .collect()
}
