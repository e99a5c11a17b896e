use ansatz::{
    beta_index, build, gamma_index, parameter_count, qaoa, two_local, BoundGate, ConfigError,
    CostSign, Entanglement, Instruction, ProblemGraph, Topology,
};

#[test]
fn single_qubit_two_local_has_no_entanglers() {
    for ent in [Entanglement::Linear, Entanglement::Full] {
        for reps in 0..4 {
            let c = two_local(1, reps, ent).unwrap();
            assert_eq!(c.entangling_gate_count(), 0);
            assert_eq!(c.num_parameters(), reps + 1);
        }
    }
}

#[test]
fn linear_three_qubits_depth_zero() {
    let c = two_local(3, 0, Entanglement::Linear).unwrap();
    assert_eq!(c.len(), 3);
    assert_eq!(c.rotation_count(), 3);
    assert_eq!(c.entangling_gate_count(), 0);
    assert_eq!(c.num_parameters(), 3);
}

#[test]
fn linear_chain_order() {
    let c = two_local(4, 1, Entanglement::Linear).unwrap();
    let cx: Vec<_> = c
        .instructions()
        .iter()
        .filter_map(|i| match i {
            Instruction::Cx { control, target } => Some((*control, *target)),
            _ => None,
        })
        .collect();
    assert_eq!(cx, vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn full_pairs_order() {
    let c = two_local(3, 1, Entanglement::Full).unwrap();
    let cx: Vec<_> = c
        .instructions()
        .iter()
        .filter_map(|i| match i {
            Instruction::Cx { control, target } => Some((*control, *target)),
            _ => None,
        })
        .collect();
    assert_eq!(cx, vec![(0, 1), (0, 2), (1, 2)]);
}

#[test]
fn edgeless_graph_gives_only_mixers() {
    let g = ProblemGraph::unweighted(3, [] as [(usize, usize); 0]).unwrap();
    let c = qaoa(&g, 3, 2, CostSign::Negative).unwrap();
    assert_eq!(c.entangling_gate_count(), 0);
    assert_eq!(c.len(), 3 + 2 * 3);
    assert!(c
        .instructions()
        .iter()
        .all(|i| matches!(i, Instruction::H(_) | Instruction::Rx { .. })));
}

#[test]
fn qaoa_binds_negative_weighted_gamma_and_doubled_beta() {
    let g = ProblemGraph::new(2, [(0, 1, 1.5)]).unwrap();
    let c = qaoa(&g, 2, 1, CostSign::Negative).unwrap();
    let params = [0.4, 0.3];
    let gates: Vec<_> = c.bind(&params).unwrap().gates().collect();

    assert_eq!(gates[0], BoundGate::H(0));
    assert_eq!(gates[1], BoundGate::H(1));
    assert_eq!(gates[2], BoundGate::Cx(0, 1));
    assert_eq!(gates[3], BoundGate::Rz(1, -0.4 * 1.5));
    assert_eq!(gates[4], BoundGate::Cx(0, 1));
    assert_eq!(gates[5], BoundGate::Rx(0, 2.0 * 0.3));
    assert_eq!(gates[6], BoundGate::Rx(1, 2.0 * 0.3));
}

#[test]
fn negated_gamma_matches_positive_convention() {
    let g = ProblemGraph::complete(4);
    let reps = 2;
    let neg = qaoa(&g, 4, reps, CostSign::Negative).unwrap();
    let pos = qaoa(&g, 4, reps, CostSign::Positive).unwrap();

    let params = [0.7, -0.2, 0.25, 1.1];
    let mut flipped = params;
    for p in 0..reps {
        flipped[gamma_index(p)] = -flipped[gamma_index(p)];
    }
    assert_eq!(flipped[beta_index(0, reps)], params[beta_index(0, reps)]);

    let a: Vec<_> = neg.bind(&flipped).unwrap().gates().collect();
    let b: Vec<_> = pos.bind(&params).unwrap().gates().collect();
    assert_eq!(a, b);
}

#[test]
fn parameter_count_matches_build() {
    let topologies = [
        Topology::Qaoa {
            graph: ProblemGraph::ring(5),
            sign: CostSign::default(),
        },
        Topology::TwoLocal(Entanglement::Linear),
        Topology::TwoLocal(Entanglement::Full),
    ];
    for t in &topologies {
        let c = build(5, 3, t).unwrap();
        assert_eq!(c.num_parameters(), parameter_count(5, 3, t), "{}", t.name());
    }
}

#[test]
fn rejects_zero_qubits() {
    assert_eq!(
        two_local(0, 1, Entanglement::Linear).unwrap_err(),
        ConfigError::ZeroQubits
    );
    let g = ProblemGraph::unweighted(0, [] as [(usize, usize); 0]).unwrap();
    assert_eq!(qaoa(&g, 0, 1, CostSign::Negative).unwrap_err(), ConfigError::ZeroQubits);
}

#[test]
fn rejects_graph_register_mismatch() {
    let g = ProblemGraph::complete(4);
    assert_eq!(
        qaoa(&g, 5, 1, CostSign::Negative).unwrap_err(),
        ConfigError::GraphSizeMismatch {
            graph_nodes: 4,
            qubits: 5
        }
    );
}

#[test]
fn rejects_bad_graphs() {
    assert!(matches!(
        ProblemGraph::from_labelled([0, 1, 3], [(0, 1, 1.0)]),
        Err(ConfigError::NonContiguousNodes { expected: 3, .. })
    ));
    assert!(ProblemGraph::from_labelled([2, 0, 1], [(0, 2, 1.0)]).is_ok());
    assert!(matches!(
        ProblemGraph::unweighted(3, [(0, 3)]),
        Err(ConfigError::NodeOutOfRange { .. })
    ));
    assert_eq!(
        ProblemGraph::unweighted(3, [(1, 1)]).unwrap_err(),
        ConfigError::SelfLoop(1)
    );
    assert!(matches!(
        ProblemGraph::unweighted(3, [(0, 1), (1, 0)]),
        Err(ConfigError::DuplicateEdge { u: 1, v: 0 })
    ));
    assert!(matches!(
        ProblemGraph::new(2, [(0, 1, f64::NAN)]),
        Err(ConfigError::NonFiniteWeight { .. })
    ));
}

#[test]
fn bind_checks_length() {
    let c = two_local(2, 1, Entanglement::Linear).unwrap();
    assert_eq!(
        c.bind(&[0.0; 3]).unwrap_err(),
        ConfigError::ParameterCount {
            expected: 4,
            got: 3
        }
    );
}
