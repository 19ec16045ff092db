use std::path::PathBuf;

use clap::Parser;

/// Default name of the generated license file.
pub const LICENSE_FILE_NAME: &str = "THIRD_PARTY_LICENSE";

#[derive(Parser, Debug)]
#[command(
    name = "license-collector",
    about = "Collect third-party licenses of Go and npm dependencies into a single file",
    version
)]
pub struct Cli {
    /// Go project directory (containing vendor/modules.txt)
    #[arg(long = "go-project", value_name = "DIR")]
    pub go_project: Option<PathBuf>,

    /// npm project directory (containing package.json)
    #[arg(long = "npm-project", value_name = "DIR")]
    pub npm_project: Option<PathBuf>,

    /// node_modules directory, when it is not inside the npm project
    #[arg(long = "npm-node-modules", value_name = "DIR")]
    pub npm_node_modules: Option<PathBuf>,

    /// Output file
    #[arg(long, default_value = LICENSE_FILE_NAME, value_name = "FILE")]
    pub out: PathBuf,

    /// Output format
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Tool config file [default: ./.license-collector/config.toml, fallback ~/.config/license-collector/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print a per-license summary table
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
