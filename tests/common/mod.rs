#![allow(dead_code)]

use phpdoc_typemask::{AnnotationParser, NamingContext, TypeContext, TypeMask};

/// Parse `annotation` in `ctx` without namespace or imports.
pub fn parse(ctx: &mut TypeContext, annotation: &str) -> TypeMask {
    AnnotationParser::global().parse(ctx, annotation, false)
}

/// Parse `annotation` in a fresh context and render the result.
pub fn describe(annotation: &str) -> String {
    let mut ctx = TypeContext::new();
    let mask = parse(&mut ctx, annotation);
    ctx.describe(&mask)
}

/// Parse `annotation` in `naming` (fresh context) and render the result.
pub fn describe_in(naming: &NamingContext, annotation: &str) -> String {
    let mut ctx = TypeContext::new();
    let mask = AnnotationParser::new(Some(naming)).parse(&mut ctx, annotation, false);
    ctx.describe(&mask)
}

/// A naming context for `namespace` with `(alias, target)` imports.
pub fn naming(namespace: Option<&str>, aliases: &[(&str, &str)]) -> NamingContext {
    let mut naming = NamingContext::with_namespace(namespace);
    for (alias, target) in aliases {
        naming.add_alias(alias, target);
    }
    naming
}

/// The keywords of the pseudo-type vocabulary.
pub const KEYWORDS: &[&str] = &[
    "int", "integer", "long", "number", "numeric", "string", "bool", "boolean", "false", "true",
    "float", "double", "array", "resource", "null", "object", "void", "callable", "mixed",
];
