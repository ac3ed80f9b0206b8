//! Rust function builder.

use schemabind_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter in a Rust function.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// The `&self` receiver.
    pub fn self_ref() -> Self {
        Self::new("&self", "")
    }

    fn format(&self) -> String {
        if self.ty.is_empty() {
            self.name.clone()
        } else {
            format!("{}: {}", self.name, self.ty)
        }
    }
}

/// Builder for Rust functions.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    attrs: Vec<String>,
    is_public: bool,
    generics: Vec<String>,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<CodeFragment>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            attrs: Vec::new(),
            is_public: true,
            generics: Vec::new(),
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn attr(mut self, attr: impl Into<String>) -> Self {
        self.attrs.push(attr.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.is_public = false;
        self
    }

    /// Add a generic parameter, e.g. `S: serde::Serializer`.
    pub fn generic(mut self, generic: impl Into<String>) -> Self {
        self.generics.push(generic.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::Line(line.into()));
        self
    }

    /// Add nested body content such as blocks.
    pub fn body_fragments(mut self, fragments: impl IntoIterator<Item = CodeFragment>) -> Self {
        self.body.extend(fragments);
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(CodeFragment::Line(line.to_string()));
        }
        self
    }

    fn signature(&self) -> String {
        let vis = if self.is_public { "pub " } else { "" };
        let generics = if self.generics.is_empty() {
            String::new()
        } else {
            format!("<{}>", self.generics.join(", "))
        };
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!(
                "{}fn {}{}({}) -> {} {{",
                vis, self.name, generics, params, ret
            ),
            None => format!("{}fn {}{}({}) {{", vis, self.name, generics, params),
        }
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::rust();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::RustDoc(doc.clone()));
        }

        for attr in &self.attrs {
            fragments.push(CodeFragment::Line(format!("#[{}]", attr)));
        }

        fragments.push(CodeFragment::block(self.signature(), self.body.clone()));
        fragments
    }
}

/// One arm of a [`Match`].
#[derive(Debug, Clone)]
pub struct Arm {
    pattern: String,
    body: String,
}

impl Arm {
    /// An arm whose body is a single expression.
    pub fn new(pattern: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            body: body.into(),
        }
    }
}

/// Builder for `match` expressions.
#[derive(Debug, Clone)]
pub struct Match {
    expr: String,
    binding: Option<String>,
    arms: Vec<Arm>,
    suffix: String,
}

impl Match {
    pub fn new(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            binding: None,
            arms: Vec::new(),
            suffix: String::new(),
        }
    }

    pub fn arm(mut self, arm: Arm) -> Self {
        self.arms.push(arm);
        self
    }

    pub fn arms(mut self, arms: impl IntoIterator<Item = Arm>) -> Self {
        self.arms.extend(arms);
        self
    }

    /// Assign the result to a new local, rendering `let name = match ...`.
    pub fn bind(mut self, name: impl Into<String>) -> Self {
        self.binding = Some(name.into());
        self
    }

    /// Text after the closing brace, e.g. `.map_err(D::Error::custom)`.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

impl Renderable for Match {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let arms = self
            .arms
            .iter()
            .map(|arm| CodeFragment::Line(format!("{} => {},", arm.pattern, arm.body)))
            .collect();
        let binding = self
            .binding
            .as_deref()
            .map(|name| format!("let {} = ", name))
            .unwrap_or_default();
        vec![CodeFragment::block_with_close(
            format!("{}match {} {{", binding, self.expr),
            arms,
            format!("}}{}", self.suffix),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_fn() {
        let f = Fn::new("get_me").build();
        assert_eq!(f, "pub fn get_me() {\n}\n");
    }

    #[test]
    fn test_fn_with_params() {
        let f = Fn::new("send_message")
            .param(Param::self_ref())
            .param(Param::new("chat_id", "i64"))
            .param(Param::new("text", "&str"))
            .returns("Result<Message, Error>")
            .body_line("todo!()")
            .build();
        assert!(f.contains(
            "pub fn send_message(&self, chat_id: i64, text: &str) -> Result<Message, Error> {"
        ));
        assert!(f.contains("    todo!()"));
    }

    #[test]
    fn test_generic_fn() {
        let f = Fn::new("serialize")
            .private()
            .generic("S: serde::Serializer")
            .param(Param::self_ref())
            .param(Param::new("serializer", "S"))
            .returns("Result<S::Ok, S::Error>")
            .build();
        assert!(f.starts_with(
            "fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {"
        ));
    }

    #[test]
    fn test_nested_body() {
        let f = Fn::new("run")
            .private()
            .body_fragments([CodeFragment::block(
                "if let Some(opts) = opts {",
                vec![CodeFragment::line("apply(opts);")],
            )])
            .build();
        assert_eq!(
            f,
            "fn run() {\n    if let Some(opts) = opts {\n        apply(opts);\n    }\n}\n"
        );
    }

    #[test]
    fn test_match_with_suffix() {
        let mut builder = CodeBuilder::rust();
        builder.emit(
            &Match::new("name")
                .arm(Arm::new("\"a\"", "Ok(1)"))
                .arm(Arm::new("_", "Err(())"))
                .suffix("?;"),
        );
        assert_eq!(
            builder.build(),
            "match name {\n    \"a\" => Ok(1),\n    _ => Err(()),\n}?;\n"
        );
    }

    #[test]
    fn test_bound_match() {
        let mut builder = CodeBuilder::rust();
        builder.emit(
            &Match::new("tag")
                .bind("decoded")
                .arm(Arm::new("_", "1"))
                .suffix(";"),
        );
        assert_eq!(builder.build(), "let decoded = match tag {\n    _ => 1,\n};\n");
    }

    #[test]
    fn test_fn_with_doc() {
        let f = Fn::new("get_me").doc("A simple method.").build();
        assert!(f.starts_with("/// A simple method.\n"));
    }
}
