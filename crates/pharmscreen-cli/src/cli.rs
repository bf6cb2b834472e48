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
    author = "PharmScreen Contributors",
    version,
    about = "PharmScreen CLI - batch drug-target descriptor screening with interaction scoring and Lipinski Rule-of-Five evaluation.",
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

    /// Write logs to a specified file in addition to the console output.
    /// The screen command defaults this to `analyser.log`.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Screen every drug against every target protein and write the report.
    Screen(ScreenArgs),
    /// Compute the descriptor panel for a single SMILES string or protein sequence.
    Inspect(InspectArgs),
}

/// Arguments for the `screen` subcommand.
#[derive(Args, Debug)]
pub struct ScreenArgs {
    /// Path to the drug input CSV with `Name` and `SMILES` columns.
    /// Defaults to `drug.csv`.
    #[arg(short, long, value_name = "PATH")]
    pub drugs: Option<PathBuf>,

    /// Path to the protein FASTA input. Defaults to `proteins.fasta`.
    #[arg(short, long, value_name = "PATH")]
    pub proteins: Option<PathBuf>,

    /// Path for the output report CSV. Defaults to `output.csv`.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a TOML configuration file with `[inputs]`, `[output]`, and
    /// `[lipinski]` sections. CLI arguments override file values.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(subcommand)]
    pub command: InspectCommands,
}

#[derive(Subcommand, Debug)]
pub enum InspectCommands {
    /// Compute the six molecular descriptors for one SMILES string.
    Drug {
        #[arg(required = true, value_name = "SMILES")]
        smiles: String,
    },
    /// Compute the four sequence properties for one protein sequence.
    Protein {
        #[arg(required = true, value_name = "SEQUENCE")]
        sequence: String,
    },
}
