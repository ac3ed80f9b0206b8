//! Compiles the type universe: aggregates, placeholders and family enums.

use eyre::{Result, WrapErr, bail};
use schemabind_codegen::{
    builder::{CodeFragment, Renderable, TypeMapper, TypeRef},
    schema::{Family, FamilyRegistry, FieldMapper, Owner, RUNTIME_FILE_TYPE, SchemaIndex, TypeClass},
};
use schemabind_ir::{ApiDescription, FieldDescriptor, TypeDescriptor};
use tracing::debug;

use crate::{
    ast::{Arm, Enum, Field, Fn, Impl, Match, Param, SerdeAttr, Struct, Variant},
    docs::item_doc,
    naming::RUST_NAMING,
    rust_file::{Imports, RustFile},
    type_mapper::RustCodeTypeMapper,
};

pub(crate) const RUNTIME: &str = "schemabind_runtime";

/// Wire field synthesized by the encoder for media family members.
const MEDIA_TYPE_FIELD: &str = "type";

/// Wire field of a media member registered under the bare part name.
const PRIMARY_MEDIA_FIELD: &str = "media";

const STRUCT_DERIVES: [&str; 4] = ["Debug", "Clone", "Default", "PartialEq"];

/// A struct member derived from a schema field.
struct Member<'f> {
    field: &'f FieldDescriptor,
    name: String,
    ty: TypeRef,
}

impl Member<'_> {
    fn is_sequence(&self) -> bool {
        self.ty.unwrapped().is_array()
    }

    fn is_file(&self) -> bool {
        self.ty.unwrapped() == &TypeRef::named(RUNTIME_FILE_TYPE)
    }
}

/// Emits `types.rs`.
pub struct TypeCompiler<'a> {
    api: &'a ApiDescription,
    index: &'a SchemaIndex,
    mapper: FieldMapper<'a>,
    types: RustCodeTypeMapper,
}

impl<'a> TypeCompiler<'a> {
    pub fn new(api: &'a ApiDescription, index: &'a SchemaIndex) -> Self {
        Self {
            api,
            index,
            mapper: FieldMapper::new(index),
            types: RustCodeTypeMapper::new(),
        }
    }

    /// Compile every generated type in document order.
    pub fn compile(&self) -> Result<RustFile> {
        let mut file = RustFile::new();
        let mut imports = Imports::new();
        let mut count = 0;

        for ty in self.api.types.values() {
            let compiled = match self.index.classify(&ty.name) {
                Some(TypeClass::Aggregate) => self.compile_aggregate(ty, &mut file, &mut imports),
                Some(TypeClass::Placeholder) => {
                    self.compile_placeholder(ty, &mut file, &mut imports);
                    Ok(())
                }
                Some(TypeClass::Family) => match self.index.family(&ty.name) {
                    Some(family) => self.compile_family(ty, family, &mut file, &mut imports),
                    None => bail!("type `{}` is classified as a family but has none", ty.name),
                },
                Some(TypeClass::File) | None => continue,
            };
            compiled.wrap_err_with(|| format!("failed to compile type `{}`", ty.name))?;
            count += 1;
        }

        debug!(types = count, "compiled type universe");
        Ok(file.imports(imports))
    }

    fn members<'t>(&self, ty: &'t TypeDescriptor, media: bool) -> Result<Vec<Member<'t>>> {
        ty.fields
            .iter()
            .filter(|field| !(media && field.name == MEDIA_TYPE_FIELD))
            .map(|field| {
                let mapped = self
                    .mapper
                    .map_field(Owner::Type(&ty.name), field)
                    .wrap_err_with(|| format!("field `{}`", field.name))?;
                Ok(Member {
                    field,
                    name: RUST_NAMING.member_name(&field.name),
                    ty: mapped,
                })
            })
            .collect()
    }

    fn compile_aggregate(
        &self,
        ty: &TypeDescriptor,
        file: &mut RustFile,
        imports: &mut Imports,
    ) -> Result<()> {
        let media = self.index.is_media_implementer(&ty.name);
        let members = self.members(ty, media)?;
        let shadowed = media || members.iter().any(Member::is_sequence);
        let name = RUST_NAMING.type_name(&ty.name);

        imports.add("serde", "Deserialize");
        imports.add("serde", "Serialize");
        if members.iter().any(Member::is_file) {
            imports.add(RUNTIME, "InputFile");
        }

        // A shadowed type's Serialize is hand-written below.
        let derives = STRUCT_DERIVES
            .into_iter()
            .chain((!shadowed).then_some("Serialize"))
            .chain(["Deserialize"]);
        let mut def = Struct::new(&name).derives(derives);
        if let Some(doc) = item_doc(&ty.description, ty.href.as_deref()) {
            def = def.doc(doc);
        }
        for member in &members {
            let mut attr = SerdeAttr::new().rename_if(&member.name, &member.field.name);
            if !member.field.required {
                attr = attr.defaulted();
                if !shadowed {
                    attr = attr.skip_zero();
                }
            }
            def = def.field(
                Field::new(&member.name, self.types.render_type(&member.ty))
                    .doc(&member.field.description)
                    .serde(attr),
            );
        }
        file.push(&def);

        if shadowed {
            let kind = media.then(|| self.media_kind(&ty.name));
            file.push(&shadow_serialize(&name, &members, kind));
        }
        if media {
            imports.add(RUNTIME, "MediaParams");
            imports.add(RUNTIME, "Parts");
            file.push(&media_params(&name, &members));
        }
        Ok(())
    }

    fn compile_placeholder(&self, ty: &TypeDescriptor, file: &mut RustFile, imports: &mut Imports) {
        imports.add("serde", "Deserialize");
        imports.add("serde", "Serialize");

        let derives = STRUCT_DERIVES
            .into_iter()
            .chain(["Serialize", "Deserialize"]);
        let mut def = Struct::new(RUST_NAMING.type_name(&ty.name)).derives(derives);
        if let Some(doc) = item_doc(&ty.description, ty.href.as_deref()) {
            def = def.doc(doc);
        }
        file.push(&def);
    }

    fn compile_family(
        &self,
        ty: &TypeDescriptor,
        family: &Family,
        file: &mut RustFile,
        imports: &mut Imports,
    ) -> Result<()> {
        let name = RUST_NAMING.type_name(&ty.name);
        let variants: Vec<(String, String)> = family
            .implementers
            .iter()
            .map(|imp| (family.variant_name(imp), RUST_NAMING.type_name(imp)))
            .collect();
        let Some((first_variant, first_type)) = variants.first() else {
            bail!("family `{}` has no implementers", family.name);
        };

        imports.add("serde", "Deserialize");
        imports.add("serde", "Serialize");
        imports.add(RUNTIME, "Family");
        imports.add(RUNTIME, "Implementer");

        let mut def = Enum::new(&name)
            .derives(["Debug", "Clone", "PartialEq", "Serialize"])
            .attr(SerdeAttr::new().untagged().to_string());
        if let Some(doc) = item_doc(&ty.description, ty.href.as_deref()) {
            def = def.doc(doc);
        }
        for (variant, imp) in &variants {
            def = def.variant(Variant::new(variant).tuple(imp));
        }
        file.push(&def);

        file.push(&Impl::new(&name).item(&FamilyTable {
            family,
            api: self.api,
            registry: self.index.registry(),
        }));

        file.push(
            &Impl::new(&name).for_trait("Default").method(
                Fn::new("default")
                    .private()
                    .returns("Self")
                    .body_line(format!("Self::{}({}::default())", first_variant, first_type)),
            ),
        );

        let arms = variants
            .iter()
            .zip(&family.implementers)
            .map(|((variant, _), imp)| {
                Arm::new(
                    format!("{:?}", imp),
                    format!("serde_json::from_value(value).map(Self::{})", variant),
                )
            })
            .chain([Arm::new(
                "other",
                format!(
                    "return Err(D::Error::custom(format!(\"unknown {} implementer `{{other}}`\")))",
                    family.name
                ),
            )]);
        let dispatch = Match::new("Self::FAMILY.select(&value).map_err(D::Error::custom)?")
            .bind("decoded")
            .arms(arms)
            .suffix(";");
        file.push(
            &Impl::new(&name)
                .generics("'de")
                .for_trait("Deserialize<'de>")
                .method(
                    Fn::new("deserialize")
                        .private()
                        .generic("D: serde::Deserializer<'de>")
                        .param(Param::new("deserializer", "D"))
                        .returns("Result<Self, D::Error>")
                        .body_line("use serde::de::Error as _;")
                        .body_fragments([CodeFragment::Blank])
                        .body_line("let value = serde_json::Value::deserialize(deserializer)?;")
                        .body_fragments(dispatch.to_fragments())
                        .body_line("decoded.map_err(D::Error::custom)"),
                ),
        );

        if ty.name == self.index.media_family() {
            imports.add(RUNTIME, "MediaParams");
            imports.add(RUNTIME, "Parts");
            let delegate = Match::new("self").arms(variants.iter().map(|(variant, _)| {
                Arm::new(
                    format!("Self::{}(media)", variant),
                    "media.media_params(name, parts)",
                )
            }));
            file.push(
                &Impl::new(&name)
                    .for_trait("MediaParams")
                    .method(media_params_fn().body_fragments(delegate.to_fragments())),
            );
        }
        Ok(())
    }

    /// Constant `type` value of a media member: its discriminator tag, or the
    /// type name without the family prefix, lower-cased.
    fn media_kind(&self, ty_name: &str) -> String {
        let media_family = self.index.media_family();
        self.index
            .family(media_family)
            .and_then(|family| family.discriminator.as_ref())
            .filter(|disc| disc.field == MEDIA_TYPE_FIELD)
            .and_then(|disc| disc.tag(ty_name))
            .map(str::to_string)
            .unwrap_or_else(|| {
                ty_name
                    .strip_prefix(media_family)
                    .unwrap_or(ty_name)
                    .to_lowercase()
            })
    }
}

/// `Serialize` through a borrowed shadow struct: unset sequences become `[]`
/// and media members get their constant `type`.
fn shadow_serialize(name: &str, members: &[Member<'_>], kind: Option<String>) -> Impl {
    let borrowed = RustCodeTypeMapper::with_lifetime("'a");
    let shadow_name = if members.is_empty() {
        "Shadow"
    } else {
        "Shadow<'a>"
    };
    let mut shadow = Struct::new(shadow_name).private().derive("Serialize");
    let mut init = Vec::new();

    if let Some(kind) = kind {
        shadow = shadow.field(
            Field::new("kind", "&'static str")
                .private()
                .serde(SerdeAttr::new().rename(MEDIA_TYPE_FIELD)),
        );
        init.push(CodeFragment::line(format!("kind: {:?},", kind)));
    }

    for member in members {
        let mut attr = SerdeAttr::new().rename_if(&member.name, &member.field.name);
        let (ty, value) = if member.is_sequence() {
            let value = if member.field.required {
                format!("&self.{}", member.name)
            } else {
                format!("self.{}.as_deref().unwrap_or_default()", member.name)
            };
            (TypeRef::ref_(member.ty.unwrapped().clone()), value)
        } else {
            if !member.field.required {
                attr = attr.skip_zero();
            }
            (TypeRef::ref_(member.ty.clone()), format!("&self.{}", member.name))
        };
        shadow = shadow.field(
            Field::new(&member.name, borrowed.render_type(&ty))
                .private()
                .serde(attr),
        );
        init.push(CodeFragment::line(format!("{}: {},", member.name, value)));
    }

    Impl::new(name).for_trait("Serialize").method(
        Fn::new("serialize")
            .private()
            .generic("S: serde::Serializer")
            .param(Param::self_ref())
            .param(Param::new("serializer", "S"))
            .returns("Result<S::Ok, S::Error>")
            .body_fragments(shadow.to_fragments())
            .body_fragments([CodeFragment::Blank, CodeFragment::block("Shadow {", init)])
            .body_line(".serialize(serializer)"),
    )
}

fn media_params_fn() -> Fn {
    Fn::new("media_params")
        .private()
        .param(Param::self_ref())
        .param(Param::new("name", "&str"))
        .param(Param::new("parts", "&mut Parts"))
        .returns("Result<serde_json::Value, serde_json::Error>")
}

/// `MediaParams` for a media member: uploads are registered as parts and
/// replaced by their attachment references before serializing.
fn media_params(name: &str, members: &[Member<'_>]) -> Impl {
    let files: Vec<&Member<'_>> = members.iter().filter(|m| m.is_file()).collect();
    let method = if files.is_empty() {
        media_params_fn().body_line("serde_json::to_value(self)")
    } else {
        let mut fields: Vec<CodeFragment> = files
            .iter()
            .map(|member| {
                let part = if member.field.name == PRIMARY_MEDIA_FIELD {
                    "name".to_string()
                } else {
                    format!("&format!(\"{{name}}_{}\")", member.field.name)
                };
                let value = if member.field.required {
                    format!("self.{}.attach({}, parts)", member.name, part)
                } else {
                    format!(
                        "self.{}.as_ref().map(|file| file.attach({}, parts))",
                        member.name, part
                    )
                };
                CodeFragment::line(format!("{}: {},", member.name, value))
            })
            .collect();
        if files.len() < members.len() {
            fields.push(CodeFragment::line("..self.clone()"));
        }
        media_params_fn()
            .body_fragments([CodeFragment::block_with_close(
                "let attached = Self {",
                fields,
                "};",
            )])
            .body_line("serde_json::to_value(&attached)")
    };
    Impl::new(name).for_trait("MediaParams").method(method)
}

/// The `FAMILY` constant decode dispatch reads.
struct FamilyTable<'a> {
    family: &'a Family,
    api: &'a ApiDescription,
    registry: &'a FamilyRegistry,
}

impl Renderable for FamilyTable<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let discriminator = match &self.family.discriminator {
            Some(disc) => format!("Some({:?})", disc.field),
            None => "None".to_string(),
        };
        let implementers = self
            .family
            .implementers
            .iter()
            .map(|imp| {
                let tag = self
                    .family
                    .discriminator
                    .as_ref()
                    .and_then(|disc| disc.tag(imp))
                    .map_or_else(|| "None".to_string(), |tag| format!("Some({:?})", tag));
                let required: Vec<String> = self
                    .api
                    .type_named(imp)
                    .map(|ty| {
                        ty.fields
                            .iter()
                            .filter(|f| f.required)
                            .map(|f| format!("{:?}", f.name))
                            .collect()
                    })
                    .unwrap_or_default();
                let constants: Vec<String> = self
                    .registry
                    .constants(self.api, &self.family.name, imp)
                    .iter()
                    .map(|(field, value)| format!("({:?}, {:?})", field, value))
                    .collect();
                CodeFragment::block_with_close(
                    "Implementer {",
                    vec![
                        CodeFragment::line(format!("name: {:?},", imp)),
                        CodeFragment::line(format!("tag: {},", tag)),
                        CodeFragment::line(format!("required: &[{}],", required.join(", "))),
                        CodeFragment::line(format!("constants: &[{}],", constants.join(", "))),
                    ],
                    "},",
                )
            })
            .collect();

        vec![
            CodeFragment::rust_doc("Implementers of this family, in declaration order."),
            CodeFragment::block_with_close(
                "pub const FAMILY: Family = Family {",
                vec![
                    CodeFragment::line(format!("name: {:?},", self.family.name)),
                    CodeFragment::line(format!("discriminator: {},", discriminator)),
                    CodeFragment::block_with_close("implementers: &[", implementers, "],"),
                ],
                "};",
            ),
        ]
    }
}
