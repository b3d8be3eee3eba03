use prdeps_core::package::Package;

#[test]
fn test_decode_go_list_json() {
    let json = r#"{
        "Dir": "/home/u/go/src/example.com/app",
        "ImportPath": "example.com/app",
        "Name": "main",
        "Stale": true,
        "Imports": ["example.com/lib", "fmt"],
        "TestImports": ["testing"],
        "XTestImports": ["example.com/app", "testing"]
    }"#;
    let pkg: Package = serde_json::from_str(json).unwrap();
    assert_eq!(pkg.import_path, "example.com/app");
    assert_eq!(pkg.name, "main");
    assert_eq!(pkg.imports, vec!["example.com/lib", "fmt"]);
    assert_eq!(pkg.test_imports, vec!["testing"]);
    assert_eq!(pkg.xtest_imports, vec!["example.com/app", "testing"]);
    assert!(!pkg.is_standard());
}

#[test]
fn test_decode_standard_package() {
    let json = r#"{"ImportPath": "fmt", "Goroot": true, "Standard": true}"#;
    let pkg: Package = serde_json::from_str(json).unwrap();
    assert!(pkg.is_standard());
    assert!(pkg.imports.is_empty());
}

#[test]
fn test_goroot_alone_marks_standard() {
    let pkg = Package {
        goroot: true,
        ..Package::new("cmd/internal/x")
    };
    assert!(pkg.is_standard());
}

#[test]
fn test_missing_import_path_is_rejected() {
    assert!(serde_json::from_str::<Package>(r#"{"Name": "x"}"#).is_err());
}
