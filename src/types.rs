//! Data types shared across the crate.
//!
//! This module holds the "model" structs: parsed docblocks and their tags,
//! routines extracted from PHP source, and the resolved signatures built
//! from them.

use crate::mask::TypeMask;
use crate::names::NamingContext;

// ─── Docblocks ──────────────────────────────────────────────────────────────

/// A parsed PHPDoc comment: free-text summary plus tags in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    /// Text before the first tag, lines joined with `\n`.
    pub summary: String,
    pub tags: Vec<DocTag>,
}

/// One `@tag` of a docblock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocTag {
    /// `@param`.
    Param(ParamTag),
    /// Any other tag.  Its body is kept verbatim and not interpreted here.
    Other(GenericTag),
}

/// A `@param [Type] [$name] [description]` tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamTag {
    /// The variable name WITHOUT the `$` sigil, if the tag names one.
    pub variable: Option<String>,
    /// The raw type annotation (e.g. `int|null`, `\Foo[]`).
    pub type_text: Option<String>,
    pub description: String,
    /// Whether the variable was written as `...$name`.
    pub is_variadic: bool,
}

/// Any tag other than `@param`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericTag {
    /// Tag name without the `@` (e.g. `return`, `throws`).
    pub name: String,
    pub body: String,
}

// ─── Source routines ────────────────────────────────────────────────────────

/// A parameter as declared in PHP source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    /// The parameter name including the `$` prefix (e.g. "$text").
    pub name: String,
    /// Native type hint text, if any (e.g. "?int", "Foo|Bar").
    pub type_hint: Option<String>,
    /// Whether this parameter is variadic (has `...`).
    pub is_variadic: bool,
}

/// A function or method found while scanning a PHP file.
#[derive(Debug, Clone)]
pub struct SourceRoutine {
    /// The function or method name.
    pub name: String,
    /// Short name of the enclosing class-like, for methods.
    pub class_name: Option<String>,
    pub parameters: Vec<ParameterInfo>,
    /// Native return type hint text, if any.
    pub return_hint: Option<String>,
    /// The docblock directly preceding the declaration.
    pub docblock: Option<DocBlock>,
    /// Namespace and imports in effect at the declaration.
    pub naming: NamingContext,
}

impl SourceRoutine {
    /// `Class::method` for methods, the plain name (namespace-qualified if
    /// any) for functions.
    pub fn display_name(&self) -> String {
        match (&self.class_name, self.naming.namespace()) {
            (Some(class), Some(ns)) => format!("{ns}\\{class}::{}", self.name),
            (Some(class), None) => format!("{class}::{}", self.name),
            (None, Some(ns)) => format!("{ns}\\{}", self.name),
            (None, None) => self.name.clone(),
        }
    }
}

// ─── Resolved signatures ────────────────────────────────────────────────────

/// Where a resolved type came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSource {
    /// A docblock `@param` / `@return` tag.
    DocBlock,
    /// The native type hint in the declaration.
    Native,
    /// Nothing was declared.
    None,
}

/// One parameter of a [`RoutineSignature`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParameter {
    /// Name without the `$` sigil.
    pub name: String,
    pub mask: TypeMask,
    pub source: TypeSource,
}

/// Parameter and return masks of a routine, valid in the
/// [`TypeContext`](crate::TypeContext) they were resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineSignature {
    pub parameters: Vec<ResolvedParameter>,
    pub return_mask: TypeMask,
    pub return_source: TypeSource,
}
