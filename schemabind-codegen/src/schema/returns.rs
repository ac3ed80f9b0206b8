//! Method result shapes.

use eyre::{Result, bail, eyre};
use schemabind_ir::{MethodDescriptor, WireType};

/// How a method result is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnShape {
    /// The result is always the given type.
    Single(WireType),
    /// The result is either the given type or a boolean.
    Dual(WireType),
}

impl ReturnShape {
    pub fn from_method(method: &MethodDescriptor) -> Result<Self> {
        let parse = |descriptor: &str| {
            WireType::parse(descriptor).ok_or_else(|| {
                eyre!(
                    "method `{}` returns unparseable type `{}`",
                    method.name,
                    descriptor
                )
            })
        };

        match method.returns.as_slice() {
            [single] => Ok(Self::Single(parse(single)?)),
            [first, second] => {
                let first = parse(first)?;
                if parse(second)? != WireType::Boolean || first == WireType::Boolean {
                    bail!(
                        "method `{}` has two return types but the second is not the only boolean",
                        method.name
                    );
                }
                Ok(Self::Dual(first))
            }
            [] => bail!("method `{}` declares no return type", method.name),
            _ => bail!(
                "method `{}` declares {} return types",
                method.name,
                method.returns.len()
            ),
        }
    }

    /// The non-boolean result type.
    pub fn value(&self) -> &WireType {
        match self {
            Self::Single(ty) | Self::Dual(ty) => ty,
        }
    }

    pub fn is_dual(&self) -> bool {
        matches!(self, Self::Dual(_))
    }
}
