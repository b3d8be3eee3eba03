//! Resolution through `go list -json`.

use prdeps_core::config::GoConfig;
use prdeps_core::package::Package;
use prdeps_util::process::CommandBuilder;

use crate::resolver::{ResolveError, Resolver};

/// Resolves import paths by asking the Go tool.
///
/// Each lookup runs `<binary> list -json [flags...] <import path>` and decodes
/// the single JSON object it prints. The tool reports the canonical import
/// path, so `./foo` or a vendored path comes back under its real name.
#[derive(Debug, Clone)]
pub struct GoListResolver {
    binary: String,
    flags: Vec<String>,
}

impl GoListResolver {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
            flags: Vec::new(),
        }
    }

    /// Build a resolver from the `[go]` section of the user config.
    pub fn from_config(config: &GoConfig) -> Self {
        Self::new(config.binary.clone()).with_flags(config.flags.iter().cloned())
    }

    /// Extra flags passed before the import path, e.g. `-tags=integration`.
    pub fn with_flags(mut self, flags: impl IntoIterator<Item = String>) -> Self {
        self.flags.extend(flags);
        self
    }

    fn command(&self, import_path: &str) -> CommandBuilder {
        CommandBuilder::new(self.binary.clone())
            .args(["list", "-json"])
            .args(self.flags.iter().cloned())
            .arg(import_path)
    }
}

impl Resolver for GoListResolver {
    fn resolve(&self, import_path: &str) -> Result<Package, ResolveError> {
        let cmd = self.command(import_path);
        let output = cmd.exec().map_err(|e| ResolveError::Command {
            command: cmd.display(),
            message: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = match stderr.trim() {
                "" => format!("{} exited with {}", cmd.program(), output.status),
                text => text.to_string(),
            };
            return Err(ResolveError::NotFound(reason));
        }

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}
