//! Output templates for rendering visited packages.
//!
//! A template is literal text interleaved with `{{.Field}}` actions that are
//! replaced by attributes of the package being rendered. Templates are parsed
//! once up front so that a malformed `--format` fails before any traversal
//! starts; executing a parsed template cannot fail.

use prdeps_util::errors::{PrdepsError, PrdepsResult};

use crate::package::Package;

/// Template used when the caller does not supply one.
pub const DEFAULT_TEMPLATE: &str = "{{.Indent}}{{.ImportPath}}:";

/// Indentation emitted once per level of depth.
pub const INDENT_UNIT: &str = "  ";

/// Indentation string for a node at `depth`.
pub fn indent(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

/// A package attribute that can be interpolated into a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ImportPath,
    Indent,
    Depth,
    Name,
    Dir,
    Doc,
    Goroot,
    Standard,
    Imports,
    TestImports,
    XTestImports,
}

impl Field {
    /// All fields, in the order they are listed in diagnostics.
    pub const ALL: [Field; 11] = [
        Field::ImportPath,
        Field::Indent,
        Field::Depth,
        Field::Name,
        Field::Dir,
        Field::Doc,
        Field::Goroot,
        Field::Standard,
        Field::Imports,
        Field::TestImports,
        Field::XTestImports,
    ];

    /// The name used inside `{{.Name}}` actions.
    pub fn name(self) -> &'static str {
        match self {
            Field::ImportPath => "ImportPath",
            Field::Indent => "Indent",
            Field::Depth => "Depth",
            Field::Name => "Name",
            Field::Dir => "Dir",
            Field::Doc => "Doc",
            Field::Goroot => "Goroot",
            Field::Standard => "Standard",
            Field::Imports => "Imports",
            Field::TestImports => "TestImports",
            Field::XTestImports => "XTestImports",
        }
    }

    /// Look up a field by its template name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    fn write_value(self, ctx: &NodeContext<'_>, out: &mut String) {
        let pkg = ctx.package;
        match self {
            Field::ImportPath => out.push_str(&pkg.import_path),
            Field::Indent => out.push_str(&ctx.indent),
            Field::Depth => out.push_str(&ctx.depth.to_string()),
            Field::Name => out.push_str(&pkg.name),
            Field::Dir => out.push_str(&pkg.dir),
            Field::Doc => out.push_str(&pkg.doc),
            Field::Goroot => out.push_str(&pkg.goroot.to_string()),
            Field::Standard => out.push_str(&pkg.standard.to_string()),
            Field::Imports => write_list(&pkg.imports, out),
            Field::TestImports => write_list(&pkg.test_imports, out),
            Field::XTestImports => write_list(&pkg.xtest_imports, out),
        }
    }
}

/// Lists print as `[a b c]`.
fn write_list(items: &[String], out: &mut String) {
    out.push('[');
    out.push_str(&items.join(" "));
    out.push(']');
}

/// Everything a template can see about one visited node.
#[derive(Debug, Clone)]
pub struct NodeContext<'a> {
    pub package: &'a Package,
    pub depth: usize,
    pub indent: String,
}

impl<'a> NodeContext<'a> {
    pub fn new(package: &'a Package, depth: usize) -> Self {
        Self {
            package,
            depth,
            indent: indent(depth),
        }
    }
}

/// Turns a node context into the text block written for that node.
pub trait Renderer {
    fn render(&self, ctx: &NodeContext<'_>) -> PrdepsResult<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// A parsed output template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl OutputTemplate {
    /// Parse `source`, appending a trailing newline when it lacks one.
    pub fn parse(source: &str) -> Result<Self, PrdepsError> {
        let mut source = source.to_string();
        if !source.ends_with('\n') {
            source.push('\n');
        }

        let mut segments = Vec::new();
        let mut rest = source.as_str();
        let mut offset = 0;
        while let Some(start) = rest.find("{{") {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let body = &rest[start + 2..];
            let end = body.find("}}").ok_or_else(|| PrdepsError::Template {
                message: format!("unclosed action at byte {}", offset + start),
            })?;
            segments.push(Segment::Field(parse_action(&body[..end])?));
            let consumed = start + 2 + end + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { source, segments })
    }

    /// The template text, including the appended newline.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render a node.
    pub fn execute(&self, ctx: &NodeContext<'_>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => field.write_value(ctx, &mut out),
            }
        }
        out
    }
}

impl Default for OutputTemplate {
    fn default() -> Self {
        Self {
            source: format!("{DEFAULT_TEMPLATE}\n"),
            segments: vec![
                Segment::Field(Field::Indent),
                Segment::Field(Field::ImportPath),
                Segment::Literal(":\n".to_string()),
            ],
        }
    }
}

impl Renderer for OutputTemplate {
    fn render(&self, ctx: &NodeContext<'_>) -> PrdepsResult<String> {
        Ok(self.execute(ctx))
    }
}

fn parse_action(action: &str) -> Result<Field, PrdepsError> {
    let action = action.trim();
    let name = action.strip_prefix('.').ok_or_else(|| PrdepsError::Template {
        message: format!("expected a field reference such as .ImportPath, found {action:?}"),
    })?;
    Field::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        PrdepsError::Template {
            message: format!("unknown field .{name} (known fields: {})", known.join(", ")),
        }
    })
}
