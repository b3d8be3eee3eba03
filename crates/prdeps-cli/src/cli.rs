//! CLI argument definitions for prdeps.
//!
//! Uses `clap` derive macros. Short flags follow the long-standing Go tool
//! (`-s`, `-t`, `-T`, `-d`, `-f`).

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "prdeps",
    version,
    about = "Print the dependency graph of Go packages",
    long_about = "prdeps walks the transitive imports of one or more Go packages and prints \
                  one line per package, indented by depth. Without arguments it uses the \
                  package in the current directory, which must be inside $GOPATH/src."
)]
pub struct Cli {
    /// Import paths to start from
    #[arg(value_name = "IMPORT_PATH")]
    pub import_paths: Vec<String>,

    /// Include standard library packages
    #[arg(short = 's', long = "std", overrides_with = "no_std")]
    pub std: bool,

    /// Exclude standard library packages, even when the config enables them
    #[arg(long = "no-std", overrides_with = "std")]
    pub no_std: bool,

    /// Follow test imports of the root packages
    #[arg(short = 't', long = "test")]
    pub test: bool,

    /// Follow external test imports of the root packages
    #[arg(short = 'T', long = "xtest")]
    pub xtest: bool,

    /// Maximum recursion depth
    #[arg(short = 'd', long = "depth", value_name = "N")]
    pub depth: Option<usize>,

    /// Output template, e.g. "{{.Indent}}{{.ImportPath}}:"
    #[arg(short = 'f', long = "format", value_name = "TEMPLATE")]
    pub format: Option<String>,

    /// Resolve packages from a TOML package index instead of `go list`
    #[arg(long, value_name = "FILE")]
    pub packages: Option<PathBuf>,

    /// Go tool used to resolve packages
    #[arg(long, env = "PRDEPS_GO", value_name = "BIN")]
    pub go: Option<String>,

    /// User configuration file [default: ~/.prdeps/config.toml]
    #[arg(long, env = "PRDEPS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse command-line arguments.
pub fn parse() -> Cli {
    Cli::parse()
}
