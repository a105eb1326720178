//! Command-line front end for the CPU scheduling simulator.
//!
//! ```text
//! cpu-sched run --input workload.json --policy rr --quantum 4
//! cpu-sched run --random 8 --seed 42 --policy sjf --format json
//! cpu-sched run --random 8 --policy rr --quantum 2 --save replay.json
//! cpu-sched compare --input workload.json --quantum 2
//! cpu-sched demo
//! ```

mod render;

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;

use cpu_schedule::workload::{random_workload, WorkloadShape};
use cpu_schedule::{compare_policies, simulate, PolicyKind, Process, SimulationRequest};

#[derive(Debug, Parser)]
#[command(name = "cpu-sched", version, about = "Simulate uniprocessor CPU scheduling policies")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one policy and print its schedule.
    Run(RunArgs),
    /// Run every applicable policy on the same workload.
    Compare(CompareArgs),
    /// Run the four-process textbook workload under every policy.
    Demo {
        /// Round-Robin time quantum.
        #[arg(short, long, default_value_t = 4)]
        quantum: i64,
    },
}

#[derive(Debug, Args)]
struct WorkloadArgs {
    /// JSON file with `processes` (and optionally `policy`, `quantum`).
    #[arg(short, long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate this many random processes instead of reading a file.
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Debug, Args)]
struct RunArgs {
    #[command(flatten)]
    workload: WorkloadArgs,

    /// Policy (FCFS, SJF, PRIORITY, RR). Overrides the input file.
    #[arg(short, long)]
    policy: Option<PolicyKind>,

    /// Round-Robin quantum. Overrides the input file.
    #[arg(short, long)]
    quantum: Option<i64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Write the resolved request to this file, e.g. to replay a random workload.
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct CompareArgs {
    #[command(flatten)]
    workload: WorkloadArgs,

    /// Round-Robin quantum.
    #[arg(short, long, default_value_t = 4)]
    quantum: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

/// On-disk workload: a process list plus optional defaults.
#[derive(Debug, Deserialize)]
struct WorkloadFile {
    processes: Vec<Process>,
    #[serde(default)]
    policy: Option<PolicyKind>,
    #[serde(default)]
    quantum: Option<i64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Run(args) => run(args),
        Command::Compare(args) => compare(args),
        Command::Demo { quantum } => {
            let reports = compare_policies(&textbook_workload(), quantum)?;
            for report in &reports {
                print!("{}", render::report_table(report));
                println!();
            }
            print!("{}", render::comparison_table(&reports));
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: RunArgs) -> Result<()> {
    let file = load_workload(&args.workload)?;
    let Some(policy) = args.policy.or(file.policy) else {
        bail!("no policy given: pass --policy or set \"policy\" in the input file");
    };

    let request = SimulationRequest {
        processes: file.processes,
        policy,
        quantum: args.quantum.or(file.quantum),
    };
    if let Some(path) = &args.save {
        fs::write(path, request.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
    }
    let report = simulate(&request).with_context(|| format!("simulating {policy}"))?;

    match args.format {
        Format::Table => print!("{}", render::report_table(&report)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn compare(args: CompareArgs) -> Result<()> {
    let file = load_workload(&args.workload)?;
    let reports = compare_policies(&file.processes, args.quantum)?;
    print!("{}", render::comparison_table(&reports));
    Ok(())
}

fn load_workload(args: &WorkloadArgs) -> Result<WorkloadFile> {
    if let Some(count) = args.random {
        let mut rng = StdRng::seed_from_u64(args.seed);
        let processes = random_workload(&mut rng, &WorkloadShape::new(count));
        log::debug!("generated {count} processes with seed {}", args.seed);
        return Ok(WorkloadFile {
            processes,
            policy: None,
            quantum: None,
        });
    }

    let Some(path) = &args.input else {
        bail!("no workload given: pass --input <FILE> or --random <N>");
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn textbook_workload() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 5).with_priority(3),
        Process::new("P2", 1, 3).with_priority(1),
        Process::new("P3", 2, 8).with_priority(4),
        Process::new("P4", 3, 6).with_priority(2),
    ]
}
