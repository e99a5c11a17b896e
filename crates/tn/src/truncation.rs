/// Bond truncation applied after every two-site SVD.
///
/// Singular values at or below `cutoff` are dropped, and at most `max_bond`
/// are kept. At least one value always survives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Truncation {
    pub max_bond: usize,
    pub cutoff: f64,
}

impl Truncation {
    pub fn new(max_bond: usize, cutoff: f64) -> Self {
        Self { max_bond, cutoff }
    }

    /// No bond cap; only numerically zero singular values are dropped.
    pub fn exact() -> Self {
        Self {
            max_bond: usize::MAX,
            cutoff: 1e-12,
        }
    }
}

impl Default for Truncation {
    fn default() -> Self {
        Self {
            max_bond: 64,
            cutoff: 1e-10,
        }
    }
}
