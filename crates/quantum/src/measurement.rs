use crate::env::{left_env, right_env, site_weight};
use rng::ShakeRng;
use tn::mps::{Tensor3, MPS};

/// Projective Z measurement of site `k`; collapses `psi` onto the outcome.
pub fn measure_z(psi: &mut MPS, k: usize, rng: &mut ShakeRng) -> u8 {
    let s = &psi.sites[k];
    let left = left_env(&psi.sites, k);
    let right = right_env(&psi.sites, k);

    let probs = [
        site_weight(&left, &right, s, 0),
        site_weight(&left, &right, s, 1),
    ];
    let total = probs[0] + probs[1];
    if total == 0.0 {
        return 0;
    }

    let x = rng.next_f64(b"MEASURE_Z") * total;
    let outcome = if x < probs[0] { 0 } else { 1 };

    // Rescale so the collapsed state keeps the pre-measurement norm.
    let scale = (total / probs[outcome]).sqrt();
    if !scale.is_finite() {
        return outcome as u8;
    }

    let mut t = Tensor3::zeros(s.dl, s.dp, s.dr);
    for l in 0..s.dl {
        for r in 0..s.dr {
            t.set(l, outcome, r, s.get(l, outcome, r) * scale);
        }
    }

    psi.sites[k] = t;
    outcome as u8
}

/// Draws one full computational-basis bitstring from `psi`.
///
/// Bit `k` of the result is the outcome on site `k`. `psi` is left untouched;
/// the collapse happens on a private copy.
pub fn sample_bitstring(psi: &MPS, rng: &mut ShakeRng) -> u64 {
    let mut work = psi.clone();
    let mut bits = 0u64;
    for k in 0..work.num_sites() {
        if measure_z(&mut work, k, rng) == 1 {
            bits |= 1 << k;
        }
    }
    bits
}
