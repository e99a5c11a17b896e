use crate::truncation::Truncation;
use faer::Mat;
use num_complex::Complex64;

pub type C64 = Complex64;

/// One-qubit gate in the computational basis, `u[out][in]`.
pub type Gate1 = [[C64; 2]; 2];

/// Two-qubit gate, row/column index `2 * p_first + p_second`.
pub type Gate2 = [[C64; 4]; 4];

/// Site tensor with (left bond, physical, right bond) indices.
#[derive(Clone, Debug)]
pub struct Tensor3 {
    pub data: Vec<C64>,
    pub dl: usize,
    pub dp: usize,
    pub dr: usize,
}

impl Tensor3 {
    pub fn zeros(dl: usize, dp: usize, dr: usize) -> Self {
        Self {
            data: vec![C64::new(0.0, 0.0); dl * dp * dr],
            dl,
            dp,
            dr,
        }
    }

    #[inline]
    fn idx(&self, l: usize, p: usize, r: usize) -> usize {
        (l * self.dp + p) * self.dr + r
    }

    #[inline]
    pub fn get(&self, l: usize, p: usize, r: usize) -> C64 {
        self.data[self.idx(l, p, r)]
    }

    #[inline]
    pub fn set(&mut self, l: usize, p: usize, r: usize, v: C64) {
        let i = self.idx(l, p, r);
        self.data[i] = v;
    }
}

/// Open-boundary matrix product state over qubits.
#[derive(Clone, Debug)]
pub struct MPS {
    pub sites: Vec<Tensor3>,
}

impl MPS {
    /// Product state |0…0⟩ on `n` qubits.
    pub fn new_zero(n: usize) -> Self {
        let mut sites = Vec::with_capacity(n);
        for _ in 0..n {
            let mut t = Tensor3::zeros(1, 2, 1);
            t.set(0, 0, 0, C64::new(1.0, 0.0));
            sites.push(t);
        }
        Self { sites }
    }

    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    /// Largest bond dimension currently present in the chain.
    pub fn max_bond_dim(&self) -> usize {
        self.sites
            .iter()
            .map(|s| s.dl.max(s.dr))
            .max()
            .unwrap_or(1)
    }

    pub fn apply_1q(&mut self, k: usize, u: Gate1) {
        let s = &self.sites[k];
        let mut out = Tensor3::zeros(s.dl, s.dp, s.dr);

        for l in 0..s.dl {
            for r in 0..s.dr {
                for p in 0..2 {
                    let mut acc = C64::new(0.0, 0.0);
                    for pp in 0..2 {
                        acc += u[p][pp] * s.get(l, pp, r);
                    }
                    out.set(l, p, r, acc);
                }
            }
        }
        self.sites[k] = out;
    }

    /// Two-qubit gate on any pair of distinct sites.
    ///
    /// `a` is the first (high-order) index of `u`. Non-adjacent pairs are
    /// brought together with a SWAP chain, which is undone afterwards, so
    /// every other site ends where it started.
    pub fn apply_2q(&mut self, a: usize, b: usize, u: Gate2, trunc: Truncation) {
        debug_assert_ne!(a, b, "two-qubit gate needs distinct sites");

        let (lo, hi, gate) = if a < b {
            (a, b, u)
        } else {
            (b, a, reverse_qubit_order(u))
        };

        let swap = swap_gate();
        for k in (lo + 1..hi).rev() {
            self.apply_2q_svd(k, swap, trunc);
        }
        self.apply_2q_svd(lo, gate, trunc);
        for k in lo + 1..hi {
            self.apply_2q_svd(k, swap, trunc);
        }
    }

    /// Two-qubit gate on adjacent sites (k, k+1), followed by a truncated SVD
    /// split back into two site tensors.
    pub fn apply_2q_svd(&mut self, k: usize, u: Gate2, trunc: Truncation) {
        let theta = self.contract_pair(k, u);
        let dl = self.sites[k].dl;
        let dr = self.sites[k + 1].dr;

        let svd = theta.thin_svd();
        let s = svd.s_diagonal();

        let mut kept = 0;
        for i in 0..s.nrows() {
            let sv = s.read(i).re;
            if sv > trunc.cutoff && kept < trunc.max_bond {
                kept += 1;
            }
        }
        kept = kept.max(1);

        let u_full = svd.u();
        let v_full = svd.v();
        let u_mat = u_full.submatrix(0, 0, u_full.nrows(), kept);
        let v_mat = v_full.submatrix(0, 0, v_full.nrows(), kept);

        let mut new_a = Tensor3::zeros(dl, 2, kept);
        for l in 0..dl {
            for p in 0..2 {
                for m in 0..kept {
                    let sv = s.read(m).re;
                    new_a.set(l, p, m, u_mat.read(l * 2 + p, m) * sv);
                }
            }
        }

        let mut new_b = Tensor3::zeros(kept, 2, dr);
        for m in 0..kept {
            for p in 0..2 {
                for r in 0..dr {
                    new_b.set(m, p, r, v_mat.read(p * dr + r, m).conj());
                }
            }
        }

        self.sites[k] = new_a;
        self.sites[k + 1] = new_b;
    }

    /// Gate applied to the merged two-site tensor, reshaped to
    /// (dl·2) × (2·dr) for the SVD.
    fn contract_pair(&self, k: usize, u: Gate2) -> Mat<C64> {
        let a = &self.sites[k];
        let b = &self.sites[k + 1];
        let dl = a.dl;
        let dr = b.dr;

        let mut merged = vec![C64::new(0.0, 0.0); dl * 4 * dr];
        for l in 0..dl {
            for m in 0..a.dr {
                for q1 in 0..2 {
                    let av = a.get(l, q1, m);
                    if av == C64::new(0.0, 0.0) {
                        continue;
                    }
                    for q2 in 0..2 {
                        for r in 0..dr {
                            merged[(l * 4 + q1 * 2 + q2) * dr + r] += av * b.get(m, q2, r);
                        }
                    }
                }
            }
        }

        let mut theta = Mat::<C64>::zeros(dl * 2, 2 * dr);
        for l in 0..dl {
            for r in 0..dr {
                for p1 in 0..2 {
                    for p2 in 0..2 {
                        let i = p1 * 2 + p2;
                        let mut v = C64::new(0.0, 0.0);
                        for j in 0..4 {
                            v += u[i][j] * merged[(l * 4 + j) * dr + r];
                        }
                        theta.write(l * 2 + p1, p2 * dr + r, v);
                    }
                }
            }
        }
        theta
    }
}

fn swap_gate() -> Gate2 {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [
        [o, z, z, z],
        [z, z, o, z],
        [z, o, z, z],
        [z, z, z, o],
    ]
}

/// Same operator with the roles of its two qubits exchanged.
fn reverse_qubit_order(u: Gate2) -> Gate2 {
    let perm = |i: usize| (i & 1) << 1 | (i >> 1);
    let mut out = [[C64::new(0.0, 0.0); 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            out[perm(i)][perm(j)] = u[i][j];
        }
    }
    out
}
