use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "hpfold developers",
    version,
    about = "hpfold CLI - Heuristic search for low-energy HP/HPC protein foldings on the cubic lattice.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for a low-energy folding of a sequence, optionally under a time budget.
    Run(RunArgs),
    /// Validate and score one explicit folding of a sequence.
    Score(ScoreArgs),
}

/// Search algorithms selectable from the command line; each name maps to
/// the algorithm's default parameter set. Use a configuration file to tune
/// individual parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    RandomSampling,
    HillClimbing,
    SimulatedAnnealing,
    BruteForce,
    BreadthFirst,
    DepthFirst,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// The residue sequence to fold, e.g. HCPHPHPHCH (codes: H, P, C).
    #[arg(value_name = "SEQUENCE")]
    pub sequence: String,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Search algorithm to use; overrides the algorithm table from the
    /// config file (with that algorithm's default parameters).
    #[arg(short, long, value_enum, value_name = "NAME")]
    pub algorithm: Option<AlgorithmArg>,

    /// Wall-clock budget in seconds. When set, the search repeats whole
    /// units of work until the budget is spent.
    #[arg(short, long, value_name = "SECONDS")]
    pub time_budget: Option<f64>,

    /// Seed for the random number generator, for reproducible runs.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Override the contact-energy parameter file (TOML).
    #[arg(long, value_name = "PATH")]
    pub energy_params: Option<PathBuf>,

    /// Path for the tabular experiment results file.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path for the best folding record (amino,fold format).
    #[arg(short, long, value_name = "PATH")]
    pub best_output: Option<PathBuf>,
}

/// Arguments for the `score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// The residue sequence, e.g. HPHPHH (codes: H, P, C).
    #[arg(value_name = "SEQUENCE")]
    pub sequence: String,

    /// The folding as comma-separated step codes, e.g. 1,2,-1,-2,3.
    #[arg(value_name = "FOLDING")]
    pub folding: String,

    /// Override the contact-energy parameter file (TOML).
    #[arg(long, value_name = "PATH")]
    pub energy_params: Option<PathBuf>,
}
