use num_complex::Complex64;
use tn::mps::{Gate1, Gate2};

pub type C64 = Complex64;

pub fn hadamard() -> Gate1 {
    let s = 1.0 / 2.0_f64.sqrt();
    [
        [C64::new(s, 0.0), C64::new(s, 0.0)],
        [C64::new(s, 0.0), C64::new(-s, 0.0)],
    ]
}

pub fn pauli_x() -> Gate1 {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [[z, o], [o, z]]
}

/// exp(-i θ X / 2)
pub fn rx(theta: f64) -> Gate1 {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [C64::new(c, 0.0), C64::new(0.0, -s)],
        [C64::new(0.0, -s), C64::new(c, 0.0)],
    ]
}

/// exp(-i θ Y / 2), real-valued.
pub fn ry(theta: f64) -> Gate1 {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [C64::new(c, 0.0), C64::new(-s, 0.0)],
        [C64::new(s, 0.0), C64::new(c, 0.0)],
    ]
}

/// exp(-i θ Z / 2) = diag(e^{-iθ/2}, e^{iθ/2})
pub fn rz(theta: f64) -> Gate1 {
    let z = C64::new(0.0, 0.0);
    [
        [C64::from_polar(1.0, -theta / 2.0), z],
        [z, C64::from_polar(1.0, theta / 2.0)],
    ]
}

/// |00>→|00>, |01>→|01>, |10>→|11>, |11>→|10>
pub fn cnot() -> Gate2 {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [
        [o, z, z, z],
        [z, o, z, z],
        [z, z, z, o],
        [z, z, o, z],
    ]
}
