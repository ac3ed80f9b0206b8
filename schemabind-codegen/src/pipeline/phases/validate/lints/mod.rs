//! Built-in lints for schema validation.

mod duplicate_field;
mod empty_description;
mod field_type;
mod override_target;
mod return_shape;
mod subtype;
mod unresolved_type;

pub use duplicate_field::DuplicateFieldLint;
pub use empty_description::EmptyDescriptionLint;
pub use field_type::FieldTypeLint;
pub use override_target::OverrideTargetLint;
pub use return_shape::ReturnShapeLint;
pub use subtype::SubtypeLint;
pub use unresolved_type::UnresolvedTypeLint;

use schemabind_ir::{ApiDescription, FieldDescriptor};

/// Every field of every type and method, with its diagnostic location.
fn all_fields(api: &ApiDescription) -> impl Iterator<Item = (String, &FieldDescriptor)> {
    let type_fields = api.types.values().flat_map(|ty| {
        ty.fields
            .iter()
            .map(move |f| (format!("types.{}.{}", ty.name, f.name), f))
    });
    let method_fields = api.methods.values().flat_map(|method| {
        method
            .fields
            .iter()
            .map(move |f| (format!("methods.{}.{}", method.name, f.name), f))
    });
    type_fields.chain(method_fields)
}
