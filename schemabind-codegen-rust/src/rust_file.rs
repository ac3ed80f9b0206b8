//! RustFile abstraction for structured Rust file generation.
//!
//! Provides a high-level API for generating Rust files with
//! organized imports and body content.

use std::collections::{BTreeMap, BTreeSet};

use schemabind_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// A Rust use statement. Symbols render sorted and deduplicated.
#[derive(Debug, Clone)]
pub struct Use {
    module: String,
    symbols: BTreeSet<String>,
}

impl Use {
    /// Create a use statement for a module.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: BTreeSet::new(),
        }
    }

    /// Add a symbol to import from the module.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.insert(symbol.into());
        self
    }

    /// Add multiple symbols to import.
    pub fn symbols(mut self, symbols: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Register a symbol on an existing statement.
    pub fn insert(&mut self, symbol: impl Into<String>) {
        self.symbols.insert(symbol.into());
    }

    /// Format the use statement as a string.
    fn format(&self) -> String {
        let symbols: Vec<&str> = self.symbols.iter().map(String::as_str).collect();
        match symbols.as_slice() {
            [] => format!("use {};", self.module),
            [symbol] => format!("use {}::{};", self.module, symbol),
            _ => format!("use {}::{{{}}};", self.module, symbols.join(", ")),
        }
    }
}

impl Renderable for Use {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(self.format())]
    }
}

/// Collects the imports a generated file needs while its body is compiled.
#[derive(Debug, Clone, Default)]
pub struct Imports {
    modules: BTreeMap<String, Use>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import `symbol` from `module`.
    pub fn add(&mut self, module: &str, symbol: &str) {
        self.modules
            .entry(module.to_string())
            .or_insert_with(|| Use::new(module))
            .insert(symbol);
    }

    /// Import a path as a whole, e.g. a glob `super::types::*`.
    pub fn add_path(&mut self, path: &str) {
        self.modules
            .entry(path.to_string())
            .or_insert_with(|| Use::new(path));
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// A structured representation of a Rust file.
///
/// Organizes code into imports and body sections.
///
/// # Example
///
/// ```ignore
/// let file = RustFile::new()
///     .use_stmt(Use::new("serde").symbols(["Deserialize", "Serialize"]))
///     .add(user_struct)
///     .add(user_impl)
///     .render_with_header(GENERATED_HEADER);
/// ```
#[derive(Debug, Default)]
pub struct RustFile {
    uses: Vec<Use>,
    body: Vec<Vec<CodeFragment>>,
}

impl RustFile {
    /// Create a new empty RustFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a use statement.
    pub fn use_stmt(mut self, use_stmt: Use) -> Self {
        self.uses.push(use_stmt);
        self
    }

    /// Add every collected import.
    pub fn imports(mut self, imports: Imports) -> Self {
        self.uses.extend(imports.modules.into_values());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Append a body element in place.
    pub fn push(&mut self, node: &impl Renderable) {
        self.body.push(node.to_fragments());
    }

    /// Render the file with Rust indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::RUST)
    }

    /// Render the file with a header comment.
    pub fn render_with_header(&self, header: &str) -> String {
        let content = self.render();
        if content.is_empty() {
            format!("{}\n", header)
        } else {
            format!("{}\n\n{}", header, content)
        }
    }

    fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        // 1. Render use statements
        for use_stmt in &self.uses {
            builder.emit(use_stmt);
        }

        // 2. Blank line between uses and body
        if !self.uses.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        // 3. Render body with blank lines between elements
        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.uses.is_empty() && self.body.is_empty()
    }
}

/// A raw code fragment that implements Renderable.
///
/// Useful for adding raw code strings to RustFile body.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Create a raw code fragment from multiple lines.
    pub fn lines(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(
            lines
                .into_iter()
                .map(Into::into)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| CodeFragment::Line(line.to_string()))
            .collect()
    }
}
