//! The closed vocabulary of PHPDoc pseudo-types.
//!
//! Lookup is case-insensitive.  A [`KnownType`] is resolved against a
//! [`TypeContext`] rather than storing a ready-made mask because some
//! keywords (`array`) go through context interning.

use crate::context::TypeContext;
use crate::mask::{PrimitiveKind, TypeMask};

/// A recognised pseudo-type keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownType {
    /// `int`, `integer`, `long`
    Integer,
    /// `number`, `numeric`: integer or float
    Number,
    String,
    /// `bool`, `boolean`, `false`, `true`
    Boolean,
    /// `float`, `double`
    Float,
    Array,
    /// Placeholder until a dedicated resource category exists; maps to an
    /// object of unknown class.
    Resource,
    Null,
    Object,
    Void,
    Callable,
    Mixed,
}

impl KnownType {
    /// Look up `name` in the keyword table, ignoring ASCII case.
    pub fn lookup(name: &str) -> Option<KnownType> {
        // No keyword is longer than eight bytes.
        if name.len() > 8 {
            return None;
        }
        let known = match name.to_ascii_lowercase().as_str() {
            "int" | "integer" | "long" => KnownType::Integer,
            "number" | "numeric" => KnownType::Number,
            "string" => KnownType::String,
            "bool" | "boolean" | "false" | "true" => KnownType::Boolean,
            "float" | "double" => KnownType::Float,
            "array" => KnownType::Array,
            "resource" => KnownType::Resource,
            "null" => KnownType::Null,
            "object" => KnownType::Object,
            "void" => KnownType::Void,
            "callable" => KnownType::Callable,
            "mixed" => KnownType::Mixed,
            _ => return None,
        };
        Some(known)
    }

    /// Resolve this keyword to a mask of `ctx`.
    pub fn mask(self, ctx: &mut TypeContext) -> TypeMask {
        match self {
            KnownType::Integer => ctx.get_mask(PrimitiveKind::Integer),
            KnownType::Number => {
                ctx.get_mask(PrimitiveKind::Integer) | ctx.get_mask(PrimitiveKind::Float)
            }
            KnownType::String => ctx.get_mask(PrimitiveKind::String),
            KnownType::Boolean => ctx.get_mask(PrimitiveKind::Boolean),
            KnownType::Float => ctx.get_mask(PrimitiveKind::Float),
            KnownType::Array => ctx.array_of(&TypeMask::UNINITIALIZED),
            KnownType::Resource | KnownType::Object => ctx.get_mask(PrimitiveKind::Object),
            KnownType::Null => ctx.get_mask(PrimitiveKind::Null),
            KnownType::Void => TypeMask::UNINITIALIZED,
            KnownType::Callable => ctx.get_mask(PrimitiveKind::Callable),
            KnownType::Mixed => TypeMask::ANY,
        }
    }
}

/// Whether `name` is one of the pseudo-type keywords.
pub fn is_known(name: &str) -> bool {
    KnownType::lookup(name).is_some()
}

/// The mask of the keyword `name`, or `uninitialized` when `name` is not a
/// keyword (callers then fall through to nominal resolution).
pub fn get_known_mask(ctx: &mut TypeContext, name: &str) -> TypeMask {
    KnownType::lookup(name)
        .map(|known| known.mask(ctx))
        .unwrap_or(TypeMask::UNINITIALIZED)
}
