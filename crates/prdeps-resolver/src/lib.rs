//! Package resolution: maps import paths to package metadata.
//!
//! [`resolver::Resolver`] is the seam; [`golist::GoListResolver`] asks the Go
//! tool, [`index::PackageIndex`] reads a static TOML index, and
//! [`cache::ResolverCache`] memoizes whichever one is in use.

pub mod cache;
pub mod golist;
pub mod index;
pub mod resolver;
