use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use ansatz::Entanglement;
use simulator::{sweep_vqe, write_csv, OracleConfig, SweepPlan};
use tn::truncation::Truncation;

/// Two-local VQE ansatz sampling sweep on the MPS simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated qubit counts
    #[arg(long, default_value = "4,6,8")]
    qubits: String,

    /// Comma-separated repetition counts
    #[arg(long, default_value = "1,2,3")]
    reps: String,

    /// Entangler layout
    #[arg(long, value_enum, default_value_t = Layout::Both)]
    entanglement: Layout,

    /// Shots per point
    #[arg(long, default_value_t = 1024)]
    shots: usize,

    /// Maximum bond dimension
    #[arg(long, default_value_t = 64)]
    max_bond: usize,

    /// SVD cutoff
    #[arg(long, default_value_t = 1e-10)]
    cutoff: f64,

    /// RNG seed (full reproducibility)
    #[arg(long, env = "SWEEP_SEED", default_value = "vqe-sweep")]
    seed: String,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Output CSV path
    #[arg(long, env = "SWEEP_OUT", default_value = "vqe_sweep.csv")]
    out: String,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Layout {
    Linear,
    Full,
    Both,
}

impl Layout {
    fn entanglements(self) -> &'static [Entanglement] {
        match self {
            Layout::Linear => &[Entanglement::Linear],
            Layout::Full => &[Entanglement::Full],
            Layout::Both => &[Entanglement::Linear, Entanglement::Full],
        }
    }
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
    let config = OracleConfig::default()
        .with_truncation(Truncation::new(args.max_bond, args.cutoff))
        .with_shots(args.shots)
        .with_seed(args.seed.clone());

    let mut records = Vec::new();
    for &entanglement in args.entanglement.entanglements() {
        tracing::info!(
            points = plan.len(),
            entanglement = entanglement.name(),
            max_bond = args.max_bond,
            "starting vqe sweep"
        );
        let rows = sweep_vqe(&config, entanglement, &plan)
            .with_context(|| format!("{} sweep failed", entanglement.name()))?;
        records.extend(rows);
    }

    for r in &records {
        println!(
            "{} qubits={} reps={} params={} cx={} seconds={:.4} outcomes={}",
            r.topology, r.qubits, r.reps, r.parameters, r.entangling_gates, r.seconds, r.value
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
