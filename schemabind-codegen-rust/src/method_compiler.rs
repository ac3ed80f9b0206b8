//! Compiles the operation surface: the client struct, one method per
//! operation and its options struct.

use eyre::{Result, WrapErr, bail};
use schemabind_codegen::{
    builder::{CodeFragment, PrimitiveType, TypeMapper, TypeRef},
    schema::{
        FieldEncodingStrategy, FieldMapper, FilePolicy, Owner, Presence, ReturnShape, SchemaIndex,
    },
};
use schemabind_ir::{ApiDescription, FieldDescriptor, MethodDescriptor};
use tracing::debug;

use crate::{
    ast::{Field, Fn, Impl, Param, Struct},
    docs::{link, paragraphs},
    naming::{RUST_NAMING, opts_name},
    rust_file::{Imports, RustFile},
    type_compiler::RUNTIME,
    type_mapper::RustCodeTypeMapper,
};

/// One parameter of an operation.
struct Arg<'f> {
    field: &'f FieldDescriptor,
    /// Parameter name for required arguments, member name in the options
    /// struct otherwise.
    name: String,
    ty: TypeRef,
    strategy: FieldEncodingStrategy,
}

impl Arg<'_> {
    fn wire(&self) -> &str {
        &self.field.name
    }

    /// Expression reading the argument inside the generated method.
    fn access(&self) -> String {
        if self.field.required {
            self.name.clone()
        } else {
            format!("opts.{}", self.name)
        }
    }

    fn is_string(&self) -> bool {
        self.ty.unwrapped().as_primitive() == Some(PrimitiveType::String)
    }
}

/// A compiled operation.
struct CompiledMethod {
    function: Fn,
    opts: Struct,
}

/// Emits `methods.rs`.
pub struct MethodCompiler<'a> {
    api: &'a ApiDescription,
    index: &'a SchemaIndex,
    client: &'a str,
    mapper: FieldMapper<'a>,
    types: RustCodeTypeMapper,
}

impl<'a> MethodCompiler<'a> {
    pub fn new(api: &'a ApiDescription, index: &'a SchemaIndex, client: &'a str) -> Self {
        Self {
            api,
            index,
            client,
            mapper: FieldMapper::new(index),
            types: RustCodeTypeMapper::new(),
        }
    }

    pub fn compile(&self) -> Result<RustFile> {
        let mut file = RustFile::new();
        let mut imports = Imports::new();
        if !self.api.types.is_empty() {
            imports.add_path("super::types::*");
        }

        file.push(&self.client_struct());
        file.push(&self.client_constructor());

        let mut operations = Impl::new(format!("{}<T>", self.client)).generics("T: Transport");
        let mut options = Vec::with_capacity(self.api.methods.len());
        for method in self.api.methods.values() {
            let compiled = self
                .compile_method(method, &mut imports)
                .wrap_err_with(|| format!("failed to compile method `{}`", method.name))?;
            operations = operations.method(compiled.function);
            options.push(compiled.opts);
        }

        if !options.is_empty() {
            for symbol in ["Error", "Params", "Request", "RequestOpts", "Transport"] {
                imports.add(RUNTIME, symbol);
            }
            file.push(&operations);
        }
        for opts in &options {
            file.push(opts);
        }

        debug!(methods = options.len(), client = self.client, "compiled operations");
        Ok(file.imports(imports))
    }

    fn client_struct(&self) -> Struct {
        Struct::new(format!("{}<T>", self.client))
            .doc("Client for every operation of the API, sending requests through a [`Transport`](schemabind_runtime::Transport).")
            .derives(["Debug", "Clone"])
            .field(Field::new("transport", "T").private())
    }

    fn client_constructor(&self) -> Impl {
        Impl::new(format!("{}<T>", self.client))
            .generics("T")
            .method(
                Fn::new("new")
                    .param(Param::new("transport", "T"))
                    .returns("Self")
                    .body_line("Self { transport }"),
            )
            .method(
                Fn::new("transport")
                    .doc("The transport requests are sent through.")
                    .param(Param::self_ref())
                    .returns("&T")
                    .body_line("&self.transport"),
            )
    }

    fn args<'m>(&self, method: &'m MethodDescriptor) -> Result<Vec<Arg<'m>>> {
        method
            .fields
            .iter()
            .map(|field| {
                let resolved = self
                    .mapper
                    .resolve(field)
                    .wrap_err_with(|| format!("parameter `{}`", field.name))?;
                let ty = self
                    .mapper
                    .map_field(Owner::Method(&method.name), field)
                    .wrap_err_with(|| format!("parameter `{}`", field.name))?;
                let name = if field.required {
                    RUST_NAMING.param_name(&field.name)
                } else {
                    RUST_NAMING.member_name(&field.name)
                };
                Ok(Arg {
                    field,
                    name,
                    ty,
                    strategy: FieldEncodingStrategy::decide(
                        self.index,
                        &method.name,
                        field,
                        &resolved,
                    ),
                })
            })
            .collect()
    }

    fn compile_method(
        &self,
        method: &MethodDescriptor,
        imports: &mut Imports,
    ) -> Result<CompiledMethod> {
        let args = self.args(method)?;
        let (required, optional): (Vec<&Arg<'_>>, Vec<&Arg<'_>>) =
            args.iter().partition(|arg| arg.field.required);
        let opts_type = opts_name(&method.name);

        let shape = ReturnShape::from_method(method)?;
        let value = self.types.render_type(&self.mapper.map_type(shape.value())?);
        let (returns, decoder) = if shape.is_dual() {
            (format!("(Option<{}>, bool)", value), "decode_dual")
        } else {
            (value, "decode")
        };
        imports.add(RUNTIME, decoder);

        let mut function = Fn::new(RUST_NAMING.function_name(&method.name))
            .doc(self.method_doc(method, &required, &opts_type))
            .param(Param::self_ref());
        for arg in &required {
            function = function.param(Param::new(&arg.name, self.param_type(&arg.ty)));
        }
        function = function
            .param(Param::new("opts", format!("Option<&{}>", opts_type)))
            .returns(format!("Result<{}, Error>", returns));

        let binding = if args.is_empty() { "let" } else { "let mut" };
        function = function.body_line(format!("{} params = Params::new();", binding));
        let multipart = args.iter().any(|arg| arg.strategy.may_attach());
        if multipart {
            imports.add(RUNTIME, "Parts");
            function = function.body_line("let mut parts = Parts::new();");
        }

        for arg in &required {
            function = function.body_fragments(self.encode(arg, &args, imports)?);
        }
        if !optional.is_empty() {
            let mut body = Vec::new();
            for arg in &optional {
                body.extend(self.encode(arg, &args, imports)?);
            }
            function = function.body_fragments([CodeFragment::block("if let Some(opts) = opts {", body)]);
        }

        let parts = if multipart { ".with_parts(parts)" } else { "" };
        function = function
            .body_fragments([CodeFragment::Blank])
            .body_line("let request_opts = opts.and_then(|opts| opts.request_opts.as_ref());")
            .body_line(format!(
                "let request = Request::new({:?}, params){}.with_opts(request_opts);",
                method.name, parts
            ))
            .body_line("let payload = self.transport.request(request)?;")
            .body_line(format!("{}(&payload)", decoder));

        let mut opts = Struct::new(&opts_type)
            .doc(format!(
                "Optional parameters for [`{}::{}`].",
                self.client,
                RUST_NAMING.function_name(&method.name)
            ))
            .derives(["Debug", "Clone", "Default", "PartialEq"]);
        for arg in &optional {
            opts = opts.field(
                Field::new(&arg.name, self.types.render_type(&arg.ty)).doc(&arg.field.description),
            );
        }
        opts = opts.field(
            Field::new("request_opts", "Option<RequestOpts>").doc("Transport options for this call."),
        );

        Ok(CompiledMethod { function, opts })
    }

    /// Description, required parameter list, options note and reference link.
    fn method_doc(&self, method: &MethodDescriptor, required: &[&Arg<'_>], opts_type: &str) -> String {
        let mut sections = paragraphs(&method.description);
        let mut bullets: Vec<String> = required
            .iter()
            .map(|arg| {
                let description = arg.field.description.trim();
                let types = arg.field.types.join(" or ");
                if description.is_empty() {
                    format!("- `{}` (`{}`)", arg.wire(), types)
                } else {
                    format!("- `{}` (`{}`): {}", arg.wire(), types, description)
                }
            })
            .collect();
        bullets.push(format!(
            "- `opts` ([`{}`]): optional parameters, may be `None`",
            opts_type
        ));
        sections.push(bullets.join("\n"));
        sections.extend(method.href.as_deref().map(link));
        sections.join("\n\n")
    }

    /// Required parameters borrow everything but numbers and booleans.
    fn param_type(&self, ty: &TypeRef) -> String {
        match ty.as_primitive() {
            Some(PrimitiveType::String) | None => self.types.render_type(&TypeRef::ref_(ty.clone())),
            Some(_) => self.types.render_type(ty),
        }
    }

    /// Statements writing one argument into the request.
    fn encode(&self, arg: &Arg<'_>, args: &[Arg<'_>], imports: &mut Imports) -> Result<Vec<CodeFragment>> {
        let wire = arg.wire();
        let value = arg.access();

        if let FieldEncodingStrategy::Scalar { presence } = &arg.strategy {
            let text = |expr: &str| {
                if arg.is_string() {
                    if arg.field.required {
                        expr.to_string()
                    } else {
                        format!("{}.as_str()", expr)
                    }
                } else {
                    format!("{}.to_string()", expr)
                }
            };
            let insert = |expr: &str| format!("params.insert({:?}, {});", wire, text(expr));
            return Ok(match presence {
                Presence::Always => vec![CodeFragment::line(insert(&value))],
                Presence::NonZero => {
                    imports.add(RUNTIME, "is_zero");
                    vec![CodeFragment::block(
                        format!("if !is_zero(&{}) {{", value),
                        vec![CodeFragment::line(insert(&value))],
                    )]
                }
                Presence::WhenSet => vec![CodeFragment::block(
                    format!("if let Some({}) = &{} {{", arg.name, value),
                    vec![CodeFragment::line(insert(&arg.name))],
                )],
                Presence::NonZeroUnless { sibling, equals } => {
                    imports.add(RUNTIME, "is_zero");
                    let condition = sibling_condition(args, sibling, equals)?;
                    vec![CodeFragment::block(
                        format!("if !is_zero(&{}) || {} {{", value, condition),
                        vec![CodeFragment::line(insert(&value))],
                    )]
                }
            });
        }

        let statement = |item: &str| -> String {
            match &arg.strategy {
                FieldEncodingStrategy::File { policy } => {
                    let policy = match policy {
                        FilePolicy::Any => "AttachPolicy::Any",
                        FilePolicy::UploadOnly => "AttachPolicy::UploadOnly",
                    };
                    format!(
                        "attach_file({:?}, {}, {}, &mut params, &mut parts)?;",
                        wire, item, policy
                    )
                }
                FieldEncodingStrategy::Media => format!(
                    "params.insert({:?}, encode_media({:?}, {}, &mut parts)?);",
                    wire, wire, item
                ),
                FieldEncodingStrategy::MediaSequence => format!(
                    "params.insert({:?}, encode_media_group({:?}, {}, &mut parts)?);",
                    wire, wire, item
                ),
                _ => format!("params.insert({:?}, encode_json({:?}, {})?);", wire, wire, item),
            }
        };
        match &arg.strategy {
            FieldEncodingStrategy::File { .. } => {
                imports.add(RUNTIME, "attach_file");
                imports.add(RUNTIME, "AttachPolicy");
                imports.add(RUNTIME, "InputFile");
            }
            FieldEncodingStrategy::Media => imports.add(RUNTIME, "encode_media"),
            FieldEncodingStrategy::MediaSequence => imports.add(RUNTIME, "encode_media_group"),
            _ => imports.add(RUNTIME, "encode_json"),
        }

        Ok(if arg.field.required {
            vec![CodeFragment::line(statement(&value))]
        } else {
            vec![CodeFragment::block(
                format!("if let Some({}) = &{} {{", arg.name, value),
                vec![CodeFragment::line(statement(&arg.name))],
            )]
        })
    }
}

/// Condition under which a zero value is still written: the sibling
/// parameter holds `equals`.
fn sibling_condition(args: &[Arg<'_>], sibling: &str, equals: &str) -> Result<String> {
    let Some(arg) = args.iter().find(|arg| arg.wire() == sibling) else {
        bail!("override refers to unknown sibling parameter `{}`", sibling);
    };
    let value = arg.access();
    Ok(if arg.ty.is_optional() && arg.is_string() {
        format!("{}.as_deref() == Some({:?})", value, equals)
    } else if arg.is_string() {
        format!("{} == {:?}", value, equals)
    } else {
        format!("{}.to_string() == {:?}", value, equals)
    })
}
