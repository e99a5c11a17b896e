use std::time::Instant;

use ansatz::{CostSign, Entanglement, ProblemGraph};
use simulator::{
    sweep_qaoa, sweep_vqe, write_records, GraphFamily, NelderMead, OracleConfig, SweepPlan,
};

fn config() -> OracleConfig {
    OracleConfig::default().with_shots(64).with_seed("sweep-tests")
}

#[test]
fn default_plan_visits_qubits_major() {
    let plan = SweepPlan::default();
    let points: Vec<_> = plan.points().collect();
    assert_eq!(plan.len(), 9);
    assert_eq!(points[0], (4, 1));
    assert_eq!(points[1], (4, 2));
    assert_eq!(points[3], (6, 1));
    assert_eq!(points[8], (8, 3));
}

#[test]
fn vqe_sweep_records_counts() {
    let plan = SweepPlan::new(vec![1, 3], vec![0, 2]);
    let records = sweep_vqe(&config(), Entanglement::Linear, &plan).unwrap();

    assert_eq!(records.len(), 4);
    for r in &records {
        assert_eq!(r.algorithm, "vqe");
        assert_eq!(r.topology, "linear");
        assert_eq!(r.parameters, r.qubits * (r.reps + 1));
        assert_eq!(r.entangling_gates, r.reps * (r.qubits - 1));
        assert!(r.value >= 1.0);
        assert!(r.seconds >= 0.0);
    }

    // N = 3, R = 0: three rotations and nothing else.
    let r = records.iter().find(|r| r.qubits == 3 && r.reps == 0).unwrap();
    assert_eq!(r.parameters, 3);
    assert_eq!(r.entangling_gates, 0);
}

#[test]
fn full_sweep_counts_all_pairs() {
    let plan = SweepPlan::new(vec![4], vec![2]);
    let records = sweep_vqe(&config(), Entanglement::Full, &plan).unwrap();
    assert_eq!(records[0].entangling_gates, 2 * 6);
    assert_eq!(records[0].topology, "full");
}

#[test]
fn qaoa_sweep_is_reproducible() {
    let plan = SweepPlan::new(vec![3, 4], vec![1]);
    let optimizer = NelderMead::new().with_maxiter(20);

    let run = || {
        sweep_qaoa(&config(), &optimizer, GraphFamily::Ring, CostSign::Negative, &plan).unwrap()
    };
    let a = run();
    let b = run();

    assert_eq!(a.len(), 2);
    assert_eq!(a[0].parameters, 2);
    assert_eq!(a[0].entangling_gates, 2 * 3);
    assert_eq!(a[1].entangling_gates, 2 * 4);
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.value, y.value);
        assert_eq!(x.evaluations, y.evaluations);
        assert!(x.value >= 0.0 && x.value <= x.qubits as f64);
    }
}

#[test]
fn qaoa_timing_excludes_exact_max_cut() {
    // Depth zero keeps the quantum part trivial; enumerating K20 is not.
    let plan = SweepPlan::new(vec![20], vec![0]);
    let config = OracleConfig::default().with_shots(1).with_seed("timing");
    let records = sweep_qaoa(
        &config,
        &NelderMead::new(),
        GraphFamily::Complete,
        CostSign::Negative,
        &plan,
    )
    .unwrap();

    let start = Instant::now();
    let (_, max_cut) = ProblemGraph::complete(20).max_cut_brute_force().unwrap();
    let brute_force = start.elapsed().as_secs_f64();

    assert_eq!(max_cut, 100.0);
    assert_eq!(records[0].evaluations, 1);
    assert!(
        records[0].seconds < brute_force,
        "recorded {} s, brute force alone {} s",
        records[0].seconds,
        brute_force
    );
}

#[test]
fn bad_edge_probability_aborts_sweep() {
    let plan = SweepPlan::new(vec![3], vec![1]);
    let result = sweep_qaoa(
        &config(),
        &NelderMead::new(),
        GraphFamily::Random { edge_prob: 1.5 },
        CostSign::Negative,
        &plan,
    );
    assert!(result.is_err());
}

#[test]
fn records_write_as_csv() {
    let plan = SweepPlan::new(vec![2], vec![1]);
    let records = sweep_vqe(&config(), Entanglement::Full, &plan).unwrap();
    let mut buf = Vec::new();
    write_records(&mut buf, &records).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("algorithm,topology,qubits,reps,parameters,entangling_gates,evaluations,seconds,value")
    );
    assert!(lines.next().unwrap().starts_with("vqe,full,2,1,4,1,1,"));
    assert_eq!(lines.next(), None);
}
