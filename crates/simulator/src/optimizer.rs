//! Derivative-free minimisers behind a common trait.
//!
//! The evaluation loop hands an objective closure to an [`Optimizer`] and
//! gets the best point back. The first error the objective returns stops
//! the search and is passed through unchanged.

use tracing::{debug, warn};

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Best parameter vector found.
    pub optimal_params: Vec<f64>,
    /// Objective value at `optimal_params`.
    pub optimal_value: f64,
    pub num_evaluations: usize,
    pub num_iterations: usize,
    /// Best value after each iteration.
    pub history: Vec<f64>,
    /// Whether the tolerance test passed before the budget ran out.
    pub converged: bool,
}

pub trait Optimizer {
    fn minimize<F, E>(&self, objective: F, initial_params: Vec<f64>) -> Result<OptimizationResult, E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>;
}

/// Nelder–Mead downhill simplex.
#[derive(Debug, Clone)]
pub struct NelderMead {
    pub maxiter: usize,
    /// Stop once the spread of simplex values falls below this.
    pub ftol: f64,
    /// ...and the simplex diameter falls below this.
    pub xtol: f64,
    /// Edge length of the initial simplex.
    pub initial_step: f64,
}

impl Default for NelderMead {
    fn default() -> Self {
        Self {
            maxiter: 200,
            ftol: 1e-6,
            xtol: 1e-4,
            initial_step: 0.5,
        }
    }
}

impl NelderMead {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_maxiter(mut self, maxiter: usize) -> Self {
        self.maxiter = maxiter;
        self
    }

    pub fn with_tolerances(mut self, ftol: f64, xtol: f64) -> Self {
        self.ftol = ftol;
        self.xtol = xtol;
        self
    }

    pub fn with_initial_step(mut self, step: f64) -> Self {
        self.initial_step = step;
        self
    }
}

const REFLECT: f64 = 1.0;
const EXPAND: f64 = 2.0;
const CONTRACT: f64 = 0.5;
const SHRINK: f64 = 0.5;

/// `a + t * (b - a)`
fn lerp(a: &[f64], b: &[f64], t: f64) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| x + t * (y - x)).collect()
}

impl Optimizer for NelderMead {
    fn minimize<F, E>(&self, mut objective: F, initial_params: Vec<f64>) -> Result<OptimizationResult, E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
    {
        let n = initial_params.len();
        let mut num_evaluations = 0;
        let mut eval = |x: &[f64]| {
            num_evaluations += 1;
            objective(x)
        };

        let mut simplex: Vec<(Vec<f64>, f64)> = Vec::with_capacity(n + 1);
        let f0 = eval(&initial_params)?;
        simplex.push((initial_params.clone(), f0));
        for i in 0..n {
            let mut point = initial_params.clone();
            point[i] += self.initial_step;
            let f = eval(&point)?;
            simplex.push((point, f));
        }

        let mut history = Vec::new();
        let mut converged = false;
        let mut iterations = 0;

        while iterations < self.maxiter {
            simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
            history.push(simplex[0].1);

            let spread = simplex[n].1 - simplex[0].1;
            let diameter = simplex[1..]
                .iter()
                .flat_map(|(p, _)| p.iter().zip(&simplex[0].0).map(|(a, b)| (a - b).abs()))
                .fold(0.0_f64, f64::max);
            if n == 0 || (spread <= self.ftol && diameter <= self.xtol) {
                converged = true;
                break;
            }
            iterations += 1;

            let mut centroid = vec![0.0; n];
            for (p, _) in &simplex[..n] {
                for (c, x) in centroid.iter_mut().zip(p) {
                    *c += x / n as f64;
                }
            }

            let worst = simplex[n].0.clone();
            let f_best = simplex[0].1;
            let f_second_worst = simplex[n - 1].1;
            let f_worst = simplex[n].1;

            let reflected = lerp(&centroid, &worst, -REFLECT);
            let f_reflected = eval(&reflected)?;

            if f_reflected < f_best {
                let expanded = lerp(&centroid, &worst, -EXPAND);
                let f_expanded = eval(&expanded)?;
                simplex[n] = if f_expanded < f_reflected {
                    (expanded, f_expanded)
                } else {
                    (reflected, f_reflected)
                };
                continue;
            }

            if f_reflected < f_second_worst {
                simplex[n] = (reflected, f_reflected);
                continue;
            }

            // Outside contraction towards the reflected point, inside towards
            // the worst one.
            let (contracted, bound) = if f_reflected < f_worst {
                (lerp(&centroid, &reflected, CONTRACT), f_reflected)
            } else {
                (lerp(&centroid, &worst, CONTRACT), f_worst)
            };
            let f_contracted = eval(&contracted)?;
            if f_contracted < bound {
                simplex[n] = (contracted, f_contracted);
                continue;
            }

            let best = simplex[0].0.clone();
            for vertex in simplex.iter_mut().skip(1) {
                let point = lerp(&best, &vertex.0, SHRINK);
                let f = eval(&point)?;
                *vertex = (point, f);
            }
        }

        simplex.sort_by(|a, b| a.1.total_cmp(&b.1));
        let (optimal_params, optimal_value) = simplex.swap_remove(0);

        if converged {
            debug!(iterations, num_evaluations, optimal_value, "nelder-mead converged");
        } else {
            warn!(
                iterations,
                num_evaluations, optimal_value, "nelder-mead stopped at iteration budget"
            );
        }

        Ok(OptimizationResult {
            optimal_params,
            optimal_value,
            num_evaluations,
            num_iterations: iterations,
            history,
            converged,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_quadratic_minimum() {
        let nm = NelderMead::new().with_maxiter(500).with_tolerances(1e-12, 1e-8);
        let result = nm
            .minimize(
                |x: &[f64]| -> Result<f64, ()> { Ok((x[0] - 1.0).powi(2) + 3.0 * (x[1] + 2.0).powi(2)) },
                vec![0.0, 0.0],
            )
            .unwrap();

        assert!(result.converged);
        assert!((result.optimal_params[0] - 1.0).abs() < 1e-3);
        assert!((result.optimal_params[1] + 2.0).abs() < 1e-3);
        assert!(result.optimal_value < 1e-6);
    }

    #[test]
    fn history_is_non_increasing() {
        let nm = NelderMead::new().with_maxiter(50);
        let result = nm
            .minimize(
                |x: &[f64]| -> Result<f64, ()> { Ok(x.iter().map(|v| v.sin() + 0.1 * v * v).sum()) },
                vec![2.0, -1.0, 0.5],
            )
            .unwrap();
        assert!(result.history.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn objective_error_stops_search() {
        let nm = NelderMead::new();
        let mut calls = 0;
        let err = nm
            .minimize(
                |_x: &[f64]| {
                    calls += 1;
                    if calls == 3 {
                        Err("backend down")
                    } else {
                        Ok(0.0)
                    }
                },
                vec![0.0, 0.0],
            )
            .unwrap_err();
        assert_eq!(err, "backend down");
        assert_eq!(calls, 3);
    }

    #[test]
    fn initial_simplex_uses_step() {
        let mut seen = Vec::new();
        NelderMead::new()
            .with_maxiter(0)
            .with_initial_step(0.25)
            .minimize(
                |x: &[f64]| -> Result<f64, ()> {
                    seen.push(x.to_vec());
                    Ok(x.iter().sum())
                },
                vec![1.0, 2.0],
            )
            .unwrap();
        assert_eq!(seen, vec![vec![1.0, 2.0], vec![1.25, 2.0], vec![1.0, 2.25]]);
    }

    #[test]
    fn empty_parameter_vector() {
        let result = NelderMead::new()
            .minimize(|_x: &[f64]| -> Result<f64, ()> { Ok(4.0) }, vec![])
            .unwrap();
        assert!(result.converged);
        assert_eq!(result.optimal_value, 4.0);
        assert_eq!(result.num_evaluations, 1);
    }
}
