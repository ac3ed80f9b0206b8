//! Schema analysis shared by every target language.
//!
//! - [`FamilyRegistry`] - polymorphic families, their implementers and discriminators
//! - [`SchemaIndex`] - what every type name denotes, plus encoding configuration
//! - [`FieldMapper`] - schema field to [`TypeRef`](crate::builder::TypeRef)
//! - [`FieldEncodingStrategy`] - how a method parameter becomes wire data
//! - [`ReturnShape`] - how a method result is decoded

mod index;
mod mapper;
mod overrides;
mod registry;
mod returns;
mod strategy;

pub use index::{SchemaIndex, TypeClass};
pub use mapper::{FieldMapper, Owner, RUNTIME_FILE_TYPE};
pub use overrides::{ConditionalZero, EncodingOverrides};
pub use registry::{Discriminator, Family, FamilyRegistry, extract_constant};
pub use returns::ReturnShape;
pub use strategy::{FieldEncodingStrategy, FilePolicy, Presence};
