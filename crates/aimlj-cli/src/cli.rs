use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III, Victor Wai Tak Kam",
    version,
    about = "AIM-LJ CLI - Lennard-Jones 12-6 parameters for small molecules from atom-in-molecule volumes.",
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

    /// Number of ligand files processed in parallel.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Derive sigma/epsilon for one or more ligand description files.
    Run(RunArgs),
    /// Print the built-in reference table and scaling exponents as TOML.
    Defaults,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Ligand description files (TOML).
    #[arg(required = true, value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// CSV file for the resulting parameters. Written to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    // --- Reference Data ---
    /// TOML file whose rows and exponents replace the built-in ones.
    #[arg(short, long, value_name = "PATH")]
    pub reference: Option<PathBuf>,

    /// Optimiser output to take radii and exponents from.
    /// Defaults to `../../optimise.out` relative to the working directory.
    #[arg(long, value_name = "PATH", conflicts_with = "no_optimise_output")]
    pub optimise_output: Option<PathBuf>,

    /// Never read an optimiser output, even if one exists at the default location.
    #[arg(long)]
    pub no_optimise_output: bool,

    /// Directory the default optimiser output location is resolved from.
    #[arg(long, value_name = "PATH")]
    pub work_dir: Option<PathBuf>,

    // --- Scaling Overrides ---
    /// Override the epsilon prefactor alpha.
    #[arg(long, value_name = "FLOAT")]
    pub alpha: Option<f64>,

    /// Override the volume-ratio exponent beta.
    #[arg(long, value_name = "FLOAT")]
    pub beta: Option<f64>,

    /// Keep sigma in Angstrom-equivalent and epsilon in Hartree-equivalent units.
    #[arg(long)]
    pub identity_units: bool,
}
