//! Default root derivation from the working directory.
//!
//! When no import path is given on the command line, the package in the
//! current directory is used, provided the directory sits inside the
//! `src` tree of the GOPATH.

use std::path::{Component, Path, PathBuf};

use prdeps_util::errors::PrdepsError;

use crate::config::home_dir;

/// The `src` directory of the first GOPATH entry (`$HOME/go/src` when unset).
pub fn gopath_src() -> PathBuf {
    let gopath = std::env::var_os("GOPATH")
        .and_then(|value| std::env::split_paths(&value).find(|p| !p.as_os_str().is_empty()))
        .unwrap_or_else(|| home_dir().join("go"));
    gopath.join("src")
}

/// The import path of `wd` relative to `src_dir`.
///
/// Fails unless `wd` is a strict subdirectory of `src_dir`. A relative path
/// whose first element starts with `.` is rejected too, since it cannot be an
/// import path.
pub fn go_subpath(src_dir: &Path, wd: &Path) -> Result<String, PrdepsError> {
    if wd.as_os_str().is_empty() {
        return Err(PrdepsError::Usage {
            message: "working directory is not in GOPATH".to_string(),
        });
    }
    let not_in_gopath = || PrdepsError::Usage {
        message: format!("working directory {} is not in GOPATH", wd.display()),
    };

    let rel = wd.strip_prefix(src_dir).map_err(|_| not_in_gopath())?;
    let mut parts = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            _ => return Err(not_in_gopath()),
        }
    }

    match parts.first() {
        Some(first) if !first.starts_with('.') => Ok(parts.join("/")),
        _ => Err(not_in_gopath()),
    }
}

/// Derive the default root import path from the current directory.
pub fn default_root() -> Result<String, PrdepsError> {
    let wd = std::env::current_dir().map_err(|e| PrdepsError::Usage {
        message: format!("cannot determine working directory: {e}"),
    })?;
    go_subpath(&gopath_src(), &wd)
}
