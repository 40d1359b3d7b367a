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
    author = "Rami Khoury",
    version,
    about = "protchar CLI - Sequence-derived physicochemical characterization of protein sequences: net charge, isoelectric point, composition, molecular weight, and hydrophobicity.",
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
    /// Characterize a single protein sequence and export its report.
    Analyze(AnalyzeArgs),
    /// Characterize a list of protein sequences and export the averaged report.
    Batch(BatchArgs),
}

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// The protein sequence, as one-letter codes over the 21-letter alphabet.
    #[arg(
        value_name = "SEQUENCE",
        required_unless_present = "input",
        conflicts_with = "input"
    )]
    pub sequence: Option<String>,

    /// Read the sequence from a file instead; line breaks inside the
    /// sequence and '#' comment lines are ignored.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Protein name used in the report header.
    #[arg(short, long, default_value = "protein")]
    pub name: String,

    /// Path for the report; written to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format for the descriptors.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Additionally evaluate the net charge at this pH.
    #[arg(long, value_name = "PH")]
    pub ph: Option<f64>,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// File with one sequence per line; blank lines and '#' comment lines
    /// are skipped.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Dataset name used in the report header.
    #[arg(short, long, default_value = "dataset")]
    pub name: String,

    /// Path for the report; written to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format for the descriptors.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The fixed-format text report.
    Text,
    /// The full descriptor set as JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_accepts_a_positional_sequence() {
        let cli = Cli::try_parse_from(["protchar", "analyze", "MKTAYIAK"]).unwrap();
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.sequence.as_deref(), Some("MKTAYIAK"));
        assert_eq!(args.name, "protein");
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn analyze_rejects_sequence_and_input_together() {
        let result = Cli::try_parse_from(["protchar", "analyze", "AG", "--input", "x.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn batch_requires_an_input_file() {
        assert!(Cli::try_parse_from(["protchar", "batch"]).is_err());
        let cli = Cli::try_parse_from(["protchar", "batch", "-i", "seqs.txt", "-f", "json"]).unwrap();
        let Commands::Batch(args) = cli.command else {
            panic!("expected batch");
        };
        assert_eq!(args.format, OutputFormat::Json);
    }
}
