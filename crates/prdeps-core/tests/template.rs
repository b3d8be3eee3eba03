use prdeps_core::package::Package;
use prdeps_core::template::{NodeContext, OutputTemplate, Renderer, DEFAULT_TEMPLATE};

fn sample() -> Package {
    Package {
        name: "http".to_string(),
        dir: "/usr/lib/go/src/net/http".to_string(),
        doc: "Package http provides HTTP client and server implementations.".to_string(),
        goroot: true,
        standard: true,
        imports: vec!["io".to_string(), "net".to_string()],
        test_imports: vec!["testing".to_string()],
        ..Package::new("net/http")
    }
}

#[test]
fn test_default_template_renders_indent_and_path() {
    let pkg = sample();
    let tmpl = OutputTemplate::default();
    assert_eq!(tmpl.execute(&NodeContext::new(&pkg, 0)), "net/http:\n");
    assert_eq!(tmpl.execute(&NodeContext::new(&pkg, 2)), "    net/http:\n");
}

#[test]
fn test_trailing_newline_appended_once() {
    let tmpl = OutputTemplate::parse("{{.ImportPath}}").unwrap();
    assert_eq!(tmpl.source(), "{{.ImportPath}}\n");

    let tmpl = OutputTemplate::parse("{{.ImportPath}}\n").unwrap();
    assert_eq!(tmpl.source(), "{{.ImportPath}}\n");
}

#[test]
fn test_all_fields_render() {
    let pkg = sample();
    let tmpl = OutputTemplate::parse(
        "{{.Depth}}|{{.Name}}|{{.Goroot}}|{{.Standard}}|{{.Imports}}|{{.TestImports}}|{{.XTestImports}}",
    )
    .unwrap();
    assert_eq!(
        tmpl.execute(&NodeContext::new(&pkg, 1)),
        "1|http|true|true|[io net]|[testing]|[]\n"
    );
}

#[test]
fn test_whitespace_inside_action_is_ignored() {
    let pkg = sample();
    let tmpl = OutputTemplate::parse("{{ .Dir }}").unwrap();
    assert_eq!(
        tmpl.execute(&NodeContext::new(&pkg, 0)),
        "/usr/lib/go/src/net/http\n"
    );
}

#[test]
fn test_literal_text_is_preserved() {
    let pkg = sample();
    let tmpl = OutputTemplate::parse("pkg {{.Name}} }} done").unwrap();
    assert_eq!(tmpl.execute(&NodeContext::new(&pkg, 0)), "pkg http }} done\n");
}

#[test]
fn test_unknown_field_is_error() {
    let err = OutputTemplate::parse("{{.Version}}").unwrap_err();
    assert!(err.to_string().contains("unknown field .Version"), "got: {err}");
}

#[test]
fn test_missing_dot_is_error() {
    let err = OutputTemplate::parse("{{ImportPath}}").unwrap_err();
    assert!(err.to_string().contains("expected a field reference"), "got: {err}");
}

#[test]
fn test_unclosed_action_is_error() {
    let err = OutputTemplate::parse("ok {{.ImportPath").unwrap_err();
    assert!(err.to_string().contains("unclosed action at byte 3"), "got: {err}");
}

#[test]
fn test_renderer_impl_matches_execute() {
    let pkg = sample();
    let tmpl = OutputTemplate::parse(DEFAULT_TEMPLATE).unwrap();
    let ctx = NodeContext::new(&pkg, 1);
    assert_eq!(tmpl.render(&ctx).unwrap(), tmpl.execute(&ctx));
}
