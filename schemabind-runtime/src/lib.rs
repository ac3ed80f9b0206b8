//! Support library for client bindings generated by schemabind.
//!
//! Generated operations assemble a [`Request`] out of a flat [`Params`] map
//! and, for file or media bearing operations, a [`Parts`] collection of
//! side-channel uploads. The request is handed to a [`Transport`], and the
//! opaque payload that comes back is decoded with [`decode`] or
//! [`decode_dual`].
//!
//! # Module Organization
//!
//! - [`Params`], [`Parts`] - the wire contract of one call
//! - [`InputFile`], [`attach_file`] - file references and attachment tokens
//! - [`MediaParams`] - media values that register their own uploads
//! - [`Family`] - static implementer tables used to decode polymorphic payloads
//! - [`Zero`] - value-level absence for optional scalars

mod decode;
mod encode;
mod error;
mod family;
mod file;
mod params;
mod transport;
mod zero;

pub use decode::{decode, decode_dual};
pub use encode::{MediaParams, encode_json, encode_media, encode_media_group};
pub use error::{DispatchError, Error, Result};
pub use family::{Family, Implementer};
pub use file::{AttachPolicy, InputFile, NamedFile, attach_file};
pub use params::{Params, Parts};
pub use transport::{Request, RequestOpts, Transport};
pub use zero::{Zero, is_zero};
