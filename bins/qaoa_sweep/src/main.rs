use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use ansatz::CostSign;
use simulator::{sweep_qaoa, write_csv, GraphFamily, NelderMead, OracleConfig, SweepPlan};
use tn::truncation::Truncation;

/// QAOA Max-Cut runtime sweep on the MPS simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated qubit counts
    #[arg(long, default_value = "4,6,8")]
    qubits: String,

    /// Comma-separated QAOA depths
    #[arg(long, default_value = "1,2,3")]
    reps: String,

    /// Problem graph family
    #[arg(long, value_enum, default_value_t = Graph::Ring)]
    graph: Graph,

    /// Edge probability for random graphs
    #[arg(long, default_value_t = 0.5)]
    edge_prob: f64,

    /// Use RZ(+γ·w) in the cost layer instead of RZ(-γ·w)
    #[arg(long)]
    positive_cost: bool,

    /// Nelder-Mead iteration budget per point
    #[arg(long, default_value_t = 200)]
    maxiter: usize,

    /// Edge length of the initial Nelder-Mead simplex
    #[arg(long, default_value_t = 0.5)]
    initial_step: f64,

    /// Shots used to sample the optimized circuit
    #[arg(long, default_value_t = 1024)]
    shots: usize,

    /// Maximum bond dimension
    #[arg(long, default_value_t = 64)]
    max_bond: usize,

    /// SVD cutoff
    #[arg(long, default_value_t = 1e-10)]
    cutoff: f64,

    /// RNG seed (full reproducibility)
    #[arg(long, env = "SWEEP_SEED", default_value = "qaoa-sweep")]
    seed: String,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Output CSV path
    #[arg(long, env = "SWEEP_OUT", default_value = "qaoa_sweep.csv")]
    out: String,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Graph {
    Complete,
    Ring,
    Random,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to build Rayon thread pool")?;
    }

    let plan = SweepPlan::default()
        .with_qubits(parse_list(&args.qubits).context("invalid --qubits")?)
        .with_reps(parse_list(&args.reps).context("invalid --reps")?);
    let family = match args.graph {
        Graph::Complete => GraphFamily::Complete,
        Graph::Ring => GraphFamily::Ring,
        Graph::Random => GraphFamily::Random {
            edge_prob: args.edge_prob,
        },
    };
    let sign = if args.positive_cost {
        CostSign::Positive
    } else {
        CostSign::Negative
    };
    let config = OracleConfig::default()
        .with_truncation(Truncation::new(args.max_bond, args.cutoff))
        .with_shots(args.shots)
        .with_seed(args.seed.clone());
    if !(args.initial_step.is_finite() && args.initial_step > 0.0) {
        bail!("--initial-step must be positive, got {}", args.initial_step);
    }
    let optimizer = NelderMead::new()
        .with_maxiter(args.maxiter)
        .with_initial_step(args.initial_step);

    tracing::info!(
        points = plan.len(),
        graph = family.name(),
        max_bond = args.max_bond,
        "starting qaoa sweep"
    );
    let records = sweep_qaoa(&config, &optimizer, family, sign, &plan)
        .context("qaoa sweep failed")?;

    for r in &records {
        println!(
            "qubits={} reps={} evals={} seconds={:.4} expected_cut={:.4}",
            r.qubits, r.reps, r.evaluations, r.seconds, r.value
        );
    }

    write_csv(&args.out, &records).with_context(|| format!("failed to write {}", args.out))?;
    println!("wrote {} rows to {}", records.len(), args.out);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_list(input: &str) -> Result<Vec<usize>> {
    let values = input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<usize>().with_context(|| format!("not an integer: {t:?}")))
        .collect::<Result<Vec<_>>>()?;
    if values.is_empty() {
        bail!("expected at least one value");
    }
    Ok(values)
}
