use std::path::PathBuf;

use prdeps_core::options::{ImportMode, TraversalOptions};
use prdeps_ops::ops_print::{print_deps, PrintOptions};
use tempfile::TempDir;

const INDEX: &str = r#"
[[package]]
import-path = "example.com/app"
imports = ["fmt", "example.com/lib", "C"]
test-imports = ["testing", "example.com/testutil"]

[[package]]
import-path = "example.com/lib"
imports = ["example.com/lib/internal", "strings"]

[[package]]
import-path = "example.com/lib/internal"

[[package]]
import-path = "example.com/testutil"
imports = ["example.com/lib"]

[[package]]
import-path = "fmt"
standard = true
imports = ["io"]

[[package]]
import-path = "io"
standard = true

[[package]]
import-path = "strings"
standard = true

[[package]]
import-path = "testing"
standard = true
"#;

fn index() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("packages.toml");
    std::fs::write(&path, INDEX).unwrap();
    (tmp, path)
}

fn print(opts: &PrintOptions) -> String {
    let mut out = Vec::new();
    print_deps(opts, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_default_output() {
    let (_tmp, path) = index();
    let opts = PrintOptions {
        roots: vec!["example.com/app".to_string()],
        packages: Some(path),
        ..Default::default()
    };
    assert_eq!(
        print(&opts),
        "example.com/app:\n  example.com/lib:\n    example.com/lib/internal:\n"
    );
}

#[test]
fn test_with_std_and_depth() {
    let (_tmp, path) = index();
    let opts = PrintOptions {
        roots: vec!["example.com/app".to_string()],
        packages: Some(path),
        traversal: TraversalOptions {
            include_std: true,
            max_depth: Some(1),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(
        print(&opts),
        "example.com/app:\n  example.com/lib:\n  fmt:\n"
    );
}

#[test]
fn test_test_imports_with_format() {
    let (_tmp, path) = index();
    let opts = PrintOptions {
        roots: vec!["example.com/app".to_string()],
        packages: Some(path),
        format: Some("{{.Depth}} {{.ImportPath}}".to_string()),
        traversal: TraversalOptions {
            mode: ImportMode::Test,
            ..Default::default()
        },
        ..Default::default()
    };
    assert_eq!(
        print(&opts),
        "0 example.com/app\n1 example.com/testutil\n2 example.com/lib\n3 example.com/lib/internal\n"
    );
}

#[test]
fn test_bad_template_fails_before_output() {
    let (_tmp, path) = index();
    let opts = PrintOptions {
        roots: vec!["example.com/app".to_string()],
        packages: Some(path),
        format: Some("{{.Nope}}".to_string()),
        ..Default::default()
    };
    let mut out = Vec::new();
    let err = print_deps(&opts, &mut out).unwrap_err();
    assert!(err.to_string().contains("unknown field .Nope"), "got: {err}");
    assert!(out.is_empty());
}

#[test]
fn test_missing_dependency_keeps_partial_output() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("packages.toml");
    std::fs::write(
        &path,
        "[[package]]\nimport-path = \"a\"\nimports = [\"b\", \"gone\"]\n\n[[package]]\nimport-path = \"b\"\n",
    )
    .unwrap();
    let opts = PrintOptions {
        roots: vec!["a".to_string(), "b".to_string()],
        packages: Some(path),
        ..Default::default()
    };
    let mut out = Vec::new();
    let err = print_deps(&opts, &mut out).unwrap_err();
    assert!(err.to_string().contains("\"gone\""), "got: {err}");
    assert_eq!(String::from_utf8(out).unwrap(), "a:\n  b:\n");
}

#[test]
fn test_missing_index_is_config_error() {
    let tmp = TempDir::new().unwrap();
    let opts = PrintOptions {
        roots: vec!["a".to_string()],
        packages: Some(tmp.path().join("missing.toml")),
        ..Default::default()
    };
    let mut out = Vec::new();
    let err = print_deps(&opts, &mut out).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"), "got: {err}");
}
