use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "refmol - prints the bundled reference molecular geometries (water, formaldehyde) as labeled coordinate tables.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to an optional settings file in TOML format
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the number of decimal places for coordinate values
    #[arg(long, value_name = "INT")]
    pub precision: Option<usize>,

    /// Write the report to a file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print only the named built-in geometry; may be repeated.
    /// Built-in order is kept regardless of the order given here.
    #[arg(short, long = "molecule", value_name = "NAME")]
    pub molecules: Vec<String>,
}
