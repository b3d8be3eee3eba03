//! Shared utilities for prdeps.
//!
//! Cross-cutting concerns used by the other prdeps crates: the unified error
//! type and the builder used to spawn external tools such as `go list`.

pub mod errors;
pub mod process;
