//! Annotation string → [`TypeMask`].
//!
//! The grammar is deliberately narrow:
//!
//! ```text
//! annotation := name
//!             | annotation "[]"              element-then-brackets
//!             | "array[" annotation "]"      prefix-bracket form
//! ```
//!
//! Anything else degrades to `void` (the empty mask).  A garbled annotation
//! only costs precision for its own slot; it never fails the analysis.

use crate::context::TypeContext;
use crate::docblock::split_alternatives;
use crate::known_types::KnownType;
use crate::mask::TypeMask;
use crate::names::{self, NamingContext};

/// Resolves annotation strings in one lexical scope.
///
/// The naming context is borrowed because it belongs to the annotation
/// site; the [`TypeContext`] is passed per call because it belongs to the
/// routine being analysed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationParser<'n> {
    naming: Option<&'n NamingContext>,
}

impl<'n> AnnotationParser<'n> {
    pub fn new(naming: Option<&'n NamingContext>) -> Self {
        Self { naming }
    }

    /// A parser without namespace or imports; names resolve globally.
    pub fn global() -> Self {
        Self { naming: None }
    }

    pub fn naming(&self) -> Option<&'n NamingContext> {
        self.naming
    }

    /// Resolve one annotation such as `int`, `Foo[]` or `array[\Bar]`.
    ///
    /// Array layers are peeled off in a loop, so nesting depth is bounded
    /// only by the length of the input.
    pub fn parse(
        &self,
        ctx: &mut TypeContext,
        annotation: &str,
        fully_qualified: bool,
    ) -> TypeMask {
        let (element, depth) = peel_arrays(annotation);
        let mut mask = match element {
            Some(element) => self.parse_element(ctx, element, fully_qualified),
            None => TypeMask::UNINITIALIZED,
        };
        for _ in 0..depth {
            mask = ctx.array_of(&mask);
        }
        mask
    }

    /// Resolve an annotation with no array layers left: a keyword or a
    /// class name.
    fn parse_element(
        &self,
        ctx: &mut TypeContext,
        annotation: &str,
        fully_qualified: bool,
    ) -> TypeMask {
        if annotation.is_empty() {
            return TypeMask::UNINITIALIZED;
        }

        if let Some(known) = KnownType::lookup(annotation) {
            return known.mask(ctx);
        }

        if !is_class_name(annotation) {
            tracing::trace!(annotation, "ignoring unparseable type name");
            return TypeMask::UNINITIALIZED;
        }

        let qname = names::resolve(self.naming, annotation, fully_qualified);
        if qname.is_primitive()
            && let Some(known) = KnownType::lookup(qname.name())
        {
            // An import can rewrite a name into a bare keyword; the keyword
            // wins over a class of the same name.
            return known.mask(ctx);
        }

        ctx.nominal_type_mask(&qname, true)
    }

    /// [`parse`](Self::parse) for an annotation that may be absent.
    pub fn parse_optional(
        &self,
        ctx: &mut TypeContext,
        annotation: Option<&str>,
        fully_qualified: bool,
    ) -> TypeMask {
        match annotation {
            Some(annotation) => self.parse(ctx, annotation, fully_qualified),
            None => TypeMask::UNINITIALIZED,
        }
    }

    /// Union of [`parse`](Self::parse) over alternative names, as produced
    /// for `int|string`.  An empty list yields `void`.
    pub fn parse_many<S: AsRef<str>>(
        &self,
        ctx: &mut TypeContext,
        names: &[S],
        fully_qualified: bool,
    ) -> TypeMask {
        names.iter().fold(TypeMask::UNINITIALIZED, |acc, name| {
            acc | self.parse(ctx, name.as_ref(), fully_qualified)
        })
    }

    /// Split raw docblock type text (`?Foo`, `int|string[]`) into
    /// alternatives and resolve them all.
    pub fn parse_text(&self, ctx: &mut TypeContext, text: &str) -> TypeMask {
        self.parse_many(ctx, &split_alternatives(text), false)
    }
}

/// Strip every `[]` suffix and `array[...]` wrapper from `annotation`.
///
/// Returns the innermost element with the number of array layers around
/// it.  The element is `None` when a bracket form is not recognised; the
/// layers outside it still count.
fn peel_arrays(annotation: &str) -> (Option<&str>, usize) {
    let mut rest = annotation.trim();
    let mut depth = 0;
    while rest.ends_with(']') {
        rest = if let Some(element) = rest.strip_suffix("[]") {
            element.trim()
        } else if let Some(inner) = strip_array_prefix(rest) {
            inner.trim()
        } else {
            tracing::trace!(annotation = rest, "unrecognised bracket form");
            return (None, depth);
        };
        depth += 1;
    }
    (Some(rest), depth)
}

/// `array[Inner]` → `Inner`, matching the `array` keyword case-insensitively.
fn strip_array_prefix(annotation: &str) -> Option<&str> {
    const PREFIX: &str = "array[";
    let head = annotation.get(..PREFIX.len())?;
    if !head.eq_ignore_ascii_case(PREFIX) {
        return None;
    }
    annotation.get(PREFIX.len()..annotation.len() - 1)
}

/// Whether `name` is syntactically a (possibly qualified) PHP class name.
fn is_class_name(name: &str) -> bool {
    let name = name.strip_prefix('\\').unwrap_or(name);
    !name.is_empty()
        && name.split('\\').all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(c) if c == '_' || c.is_ascii_alphabetic() || !c.is_ascii() => chars
                    .all(|c| c == '_' || c.is_ascii_alphanumeric() || !c.is_ascii()),
                _ => false,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_name_syntax() {
        assert!(is_class_name("Foo"));
        assert!(is_class_name("\\App\\Models\\User"));
        assert!(is_class_name("_Private\\Ünïcode"));
        assert!(!is_class_name("array["));
        assert!(!is_class_name("Foo\\"));
        assert!(!is_class_name("1Foo"));
        assert!(!is_class_name("array<int>"));
        assert!(!is_class_name("$this"));
    }

    #[test]
    fn peeling_counts_both_array_forms() {
        assert_eq!(peel_arrays("int"), (Some("int"), 0));
        assert_eq!(peel_arrays(" int[][] "), (Some("int"), 2));
        assert_eq!(peel_arrays("array[Foo[]][]"), (Some("Foo"), 3));
        assert_eq!(peel_arrays("[]"), (Some(""), 1));
        assert_eq!(peel_arrays("list[int][]"), (None, 1));
    }

    #[test]
    fn array_prefix_is_case_insensitive() {
        assert_eq!(strip_array_prefix("ARRAY[int]"), Some("int"));
        assert_eq!(strip_array_prefix("Array[]"), Some(""));
        assert_eq!(strip_array_prefix("list[int]"), None);
    }
}
