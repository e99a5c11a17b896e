use ansatz::{qaoa, Circuit, ConfigError, CostSign, ProblemGraph};
use quantum::hamiltonian::Hamiltonian;
use rng::ShakeRng;
use simulator::{
    expectation, minimize, run_qaoa, Distribution, Error, MpsOracle, NelderMead, Oracle,
    OracleConfig, OracleError,
};

/// Succeeds a fixed number of times, then fails.
struct FlakyOracle {
    remaining: usize,
}

impl Oracle for FlakyOracle {
    fn evaluate(
        &mut self,
        _circuit: &Circuit,
        _observable: &Hamiltonian,
        params: &[f64],
    ) -> Result<f64, OracleError> {
        if self.remaining == 0 {
            return Err(OracleError::NonFinite(f64::NAN));
        }
        self.remaining -= 1;
        Ok(params.iter().map(|p| p * p).sum())
    }

    fn sample(&mut self, _circuit: &Circuit, _params: &[f64]) -> Result<Distribution, OracleError> {
        Err(OracleError::ZeroShots)
    }
}

#[test]
fn oracle_failure_stops_minimisation() {
    let graph = ProblemGraph::ring(3);
    let circuit = qaoa(&graph, 3, 1, CostSign::Negative).unwrap();
    let (h, _) = simulator::maxcut::build_observable(&graph);
    let mut oracle = FlakyOracle { remaining: 5 };

    let err = minimize(&mut oracle, &NelderMead::new(), &circuit, &h, vec![1.0, 1.0]).unwrap_err();
    assert!(matches!(err, Error::Oracle(OracleError::NonFinite(_))));
    assert_eq!(oracle.remaining, 0);
}

#[test]
fn sampling_failure_surfaces_from_run() {
    let graph = ProblemGraph::unweighted(2, [(0, 1)]).unwrap();
    let mut oracle = FlakyOracle { remaining: usize::MAX };
    let mut rng = ShakeRng::new(b"flaky");
    let optimizer = NelderMead::new().with_maxiter(5);

    let err = run_qaoa(&mut oracle, &optimizer, &graph, 1, CostSign::Negative, &mut rng).unwrap_err();
    assert!(matches!(err, Error::Oracle(OracleError::ZeroShots)));
}

#[test]
fn initial_point_length_is_checked_before_the_oracle() {
    let graph = ProblemGraph::complete(3);
    let circuit = qaoa(&graph, 3, 2, CostSign::Negative).unwrap();
    let (h, _) = simulator::maxcut::build_observable(&graph);
    let mut oracle = FlakyOracle { remaining: 0 };

    let err = minimize(&mut oracle, &NelderMead::new(), &circuit, &h, vec![0.0; 3]).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::ParameterCount { expected: 4, got: 3 })
    ));
}

#[test]
fn observable_size_mismatch() {
    let graph = ProblemGraph::complete(3);
    let circuit = qaoa(&graph, 3, 1, CostSign::Negative).unwrap();
    let h = Hamiltonian::new(4).with_term(1.0, vec![0, 3]);
    let mut oracle = MpsOracle::new(OracleConfig::default());

    let err = expectation(&mut oracle, &circuit, &h, &[0.1, 0.2]).unwrap_err();
    assert!(matches!(
        err,
        Error::Oracle(OracleError::ObservableSize { observable: 4, circuit: 3 })
    ));
}

#[test]
fn graph_larger_than_register_is_a_config_error() {
    let graph = ProblemGraph::complete(5);
    let err = qaoa(&graph, 4, 1, CostSign::Negative).unwrap_err();
    assert_eq!(
        err,
        ConfigError::GraphSizeMismatch {
            graph_nodes: 5,
            qubits: 4
        }
    );
    let wrapped: Error = err.into();
    assert!(wrapped.to_string().contains('5'));
}
