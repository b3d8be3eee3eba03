//! High-level operations wiring the CLI to the resolvers and renderer.
//!
//! [`traverse::Traversal`] is the depth-first walk over the import graph;
//! [`render_cache::RenderCache`] replays text already produced for a
//! `(depth, import path)` pair; [`ops_print`] assembles both for `prdeps`.

pub mod ops_print;
pub mod render_cache;
pub mod traverse;
