use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "reporank",
    version,
    about = "Rank software repositories from collected quality, popularity and maintainability metadata"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Explicit config file, used instead of ./reporank.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and rank repositories from a metadata CSV
    Rank(RankCommand),
    /// Summarize contributor-share dispersion of a pattern trie dump
    Dispersion(DispersionCommand),
    /// Assemble one metadata CSV row from captured tool outputs
    Collect(CollectCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum RankFormat {
    Md,
    Json,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum DispersionFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct RankCommand {
    /// Metadata CSV file, or a directory of them
    #[arg(short, long = "csv-file", visible_alias = "csv_file")]
    pub csv_file: PathBuf,

    /// Where to write the ranked CSV
    #[arg(short, long = "output-csv-file", visible_alias = "output_csv_file")]
    pub output_csv_file: PathBuf,

    /// Append every remaining input and derived column
    #[arg(short, long, visible_alias = "print-detailed")]
    pub detailed: bool,

    /// Divide quality counts by the `nloc` column before scaling
    #[arg(long)]
    pub normalize_quality: bool,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: RankFormat,
}

#[derive(Args)]
pub struct DispersionCommand {
    pub path: PathBuf,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: DispersionFormat,
}

#[derive(Args)]
pub struct CollectCommand {
    /// Repository URL, as https://github.com/<owner>/<repo>
    #[arg(short, long)]
    pub repo_url: String,

    /// Captured GitHub repository API response
    #[arg(long)]
    pub repository_json: Option<PathBuf>,

    #[arg(long)]
    pub num_commits: Option<u64>,

    #[arg(long)]
    pub open_issues: Option<u64>,

    /// Closed issues and PRs over two years, one year, six months, one month
    #[arg(long, value_delimiter = ',')]
    pub closed_issues: Option<Vec<u64>>,

    /// Per-file function statistics from the complexity analyzer
    #[arg(long)]
    pub complexity_json: Option<PathBuf>,

    #[arg(long, requires = "cpplint_nloc")]
    pub cpplint_log: Option<PathBuf>,

    #[arg(long, requires = "cpplint_log")]
    pub cpplint_nloc: Option<u64>,

    #[arg(long)]
    pub scancode_json: Option<PathBuf>,

    #[arg(long, requires = "flawfinder_stats")]
    pub flawfinder_sarif: Option<PathBuf>,

    #[arg(long, requires = "flawfinder_sarif")]
    pub flawfinder_stats: Option<PathBuf>,

    /// Don't print the CSV header line
    #[arg(short = 'p', long)]
    pub no_header: bool,
}
