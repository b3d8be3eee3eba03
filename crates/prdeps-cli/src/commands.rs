//! Turns parsed arguments and user configuration into a print operation.

use miette::Result;

use prdeps_core::config::UserConfig;
use prdeps_core::options::{ImportMode, TraversalOptions};
use prdeps_ops::ops_print::{self, PrintOptions};

use crate::cli::Cli;

/// Run `prdeps` for a parsed invocation. Command-line values take precedence
/// over the user configuration.
pub fn exec(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => UserConfig::load_from(path)?,
        None => UserConfig::load()?,
    };

    let mut go = config.go;
    if let Some(binary) = cli.go {
        go.binary = binary;
    }

    if cli.test && cli.xtest {
        tracing::warn!("--test and --xtest both given; following test imports");
    }
    let include_std = !cli.no_std && (cli.std || config.defaults.std);

    let opts = PrintOptions {
        roots: cli.import_paths,
        traversal: TraversalOptions {
            include_std,
            mode: ImportMode::from_flags(cli.test, cli.xtest),
            max_depth: cli.depth.or(config.defaults.depth),
        },
        format: cli.format.or(config.defaults.format),
        packages: cli.packages,
        go,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ops_print::print_deps(&opts, &mut out)
}
