use std::process::{Command, Output};

use crate::errors::PrdepsError;

/// Builder for constructing and executing external processes.
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    program: String,
    args: Vec<String>,
}

impl CommandBuilder {
    /// Create a new builder for the given program.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments.
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The program this builder will run.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Render the command line for diagnostics, e.g. `go list -json fmt`.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Execute the command and return its output.
    pub fn exec(&self) -> Result<Output, PrdepsError> {
        tracing::trace!(command = %self.display(), "spawning");
        Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(PrdepsError::from)
    }
}
