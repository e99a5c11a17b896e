use tn::mps::{C64, Tensor3};

/// Diagonal single-site weights for the identity.
pub(crate) const IDENTITY: [f64; 2] = [1.0, 1.0];

/// Diagonal single-site weights for Pauli Z.
pub(crate) const PAULI_Z: [f64; 2] = [1.0, -1.0];

/// Absorbs site `a` into a left environment, with a diagonal operator
/// `diag` sandwiched on the physical index.
///
/// `env` is a `dl × dl` matrix (ket index major); the result is `dr × dr`.
pub(crate) fn push_left(env: &[C64], a: &Tensor3, diag: [f64; 2]) -> Vec<C64> {
    let mut next = vec![C64::new(0.0, 0.0); a.dr * a.dr];
    for l in 0..a.dl {
        for lp in 0..a.dl {
            let lval = env[l * a.dl + lp];
            if lval == C64::new(0.0, 0.0) {
                continue;
            }
            for p in 0..a.dp {
                let w = lval * diag[p];
                for r in 0..a.dr {
                    let aval = w * a.get(l, p, r);
                    for rp in 0..a.dr {
                        next[r * a.dr + rp] += aval * a.get(lp, p, rp).conj();
                    }
                }
            }
        }
    }
    next
}

fn push_right(env: &[C64], a: &Tensor3) -> Vec<C64> {
    let mut next = vec![C64::new(0.0, 0.0); a.dl * a.dl];
    for r in 0..a.dr {
        for rp in 0..a.dr {
            let rval = env[r * a.dr + rp];
            if rval == C64::new(0.0, 0.0) {
                continue;
            }
            for p in 0..a.dp {
                for l in 0..a.dl {
                    let aval = a.get(l, p, r) * rval;
                    for lp in 0..a.dl {
                        next[l * a.dl + lp] += aval * a.get(lp, p, rp).conj();
                    }
                }
            }
        }
    }
    next
}

/// Norm environment of sites `0..k`.
pub(crate) fn left_env(sites: &[Tensor3], k: usize) -> Vec<C64> {
    sites[..k]
        .iter()
        .fold(vec![C64::new(1.0, 0.0)], |env, a| push_left(&env, a, IDENTITY))
}

/// Norm environment of sites `k+1..`.
pub(crate) fn right_env(sites: &[Tensor3], k: usize) -> Vec<C64> {
    sites[k + 1..]
        .iter()
        .rev()
        .fold(vec![C64::new(1.0, 0.0)], |env, a| push_right(&env, a))
}

/// Unnormalised weight of physical value `p` at site `s`, given the
/// environments on both sides. Clamped at zero against rounding.
pub(crate) fn site_weight(left: &[C64], right: &[C64], s: &Tensor3, p: usize) -> f64 {
    let mut acc = C64::new(0.0, 0.0);
    for l in 0..s.dl {
        for lp in 0..s.dl {
            let lval = left[l * s.dl + lp];
            for r in 0..s.dr {
                let kv = lval * s.get(l, p, r);
                for rp in 0..s.dr {
                    acc += kv * s.get(lp, p, rp).conj() * right[r * s.dr + rp];
                }
            }
        }
    }
    acc.re.max(0.0)
}
