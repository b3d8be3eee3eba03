//! Core data types for prdeps.
//!
//! This crate defines the types shared by the resolvers and the traversal:
//! package metadata, the output template, traversal options, the user
//! configuration file, and default-root derivation from the working directory.
//!
//! This crate is intentionally free of process spawning and output streams.

pub mod config;
pub mod options;
pub mod package;
pub mod srcroot;
pub mod template;
