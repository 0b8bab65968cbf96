//! Function and method extraction.
//!
//! Imports are tracked per namespace: entering a `namespace` statement
//! starts a fresh [`NamingContext`], and a `use` statement applies to the
//! routines declared after it at that level.

use mago_syntax::ast::*;

use crate::names::NamingContext;
use crate::types::{ParameterInfo, SourceRoutine};

use super::DocblockCtx;
use super::use_statements::register_use_items;

pub(super) fn collect_routines<'a>(
    statements: impl Iterator<Item = &'a Statement<'a>>,
    inherited: &NamingContext,
    doc_ctx: &DocblockCtx<'a>,
    out: &mut Vec<SourceRoutine>,
) {
    let mut naming = inherited.clone();

    for statement in statements {
        match statement {
            // Imports apply from their position onward.
            Statement::Use(use_stmt) => register_use_items(&use_stmt.items, &mut naming),
            Statement::Namespace(namespace) => {
                let name = namespace.name.as_ref().map(|ident| ident.value());
                let scope = NamingContext::with_namespace(name);
                collect_routines(namespace.statements().iter(), &scope, doc_ctx, out);
            }
            Statement::Block(block) => {
                collect_routines(block.statements.iter(), &naming, doc_ctx, out);
            }
            Statement::Function(func) => {
                out.push(SourceRoutine {
                    name: func.name.value.to_string(),
                    class_name: None,
                    parameters: extract_parameters(&func.parameter_list),
                    return_hint: func
                        .return_type_hint
                        .as_ref()
                        .map(|rth| hint_text(&rth.hint)),
                    docblock: doc_ctx.docblock_for(func),
                    naming: naming.clone(),
                });
            }
            Statement::Class(class) => {
                collect_methods(class.name.value, class.members.iter(), &naming, doc_ctx, out);
            }
            Statement::Interface(iface) => {
                collect_methods(iface.name.value, iface.members.iter(), &naming, doc_ctx, out);
            }
            Statement::Trait(trait_def) => {
                collect_methods(
                    trait_def.name.value,
                    trait_def.members.iter(),
                    &naming,
                    doc_ctx,
                    out,
                );
            }
            Statement::Enum(enum_def) => {
                collect_methods(
                    enum_def.name.value,
                    enum_def.members.iter(),
                    &naming,
                    doc_ctx,
                    out,
                );
            }
            _ => {}
        }
    }
}

fn collect_methods<'a>(
    class_name: &str,
    members: impl Iterator<Item = &'a ClassLikeMember<'a>>,
    naming: &NamingContext,
    doc_ctx: &DocblockCtx<'a>,
    out: &mut Vec<SourceRoutine>,
) {
    for member in members {
        if let ClassLikeMember::Method(method) = member {
            out.push(SourceRoutine {
                name: method.name.value.to_string(),
                class_name: Some(class_name.to_string()),
                parameters: extract_parameters(&method.parameter_list),
                return_hint: method
                    .return_type_hint
                    .as_ref()
                    .map(|rth| hint_text(&rth.hint)),
                docblock: doc_ctx.docblock_for(method),
                naming: naming.clone(),
            });
        }
    }
}

fn extract_parameters(parameter_list: &FunctionLikeParameterList) -> Vec<ParameterInfo> {
    parameter_list
        .parameters
        .iter()
        .map(|param| ParameterInfo {
            name: param.variable.name.to_string(),
            type_hint: param.hint.as_ref().map(|h| hint_text(h)),
            is_variadic: param.ellipsis.is_some(),
        })
        .collect()
}

/// Render a native type hint in annotation syntax.
///
/// Intersections keep only their left-most member; the annotation grammar
/// has no way to express them.  Native-only keywords are spelled with the
/// vocabulary the grammar knows: `iterable` as `array|\Traversable` and
/// `never` as `void`.
fn hint_text(hint: &Hint) -> String {
    match hint {
        Hint::Identifier(ident) => ident.value().to_string(),
        Hint::Nullable(nullable) => format!("?{}", hint_text(nullable.hint)),
        Hint::Union(union) => format!("{}|{}", hint_text(union.left), hint_text(union.right)),
        Hint::Intersection(intersection) => hint_text(intersection.left),
        Hint::Parenthesized(paren) => hint_text(paren.hint),
        Hint::Iterable(_) => "array|\\Traversable".to_string(),
        Hint::Never(_) => "void".to_string(),
        Hint::Void(ident)
        | Hint::Float(ident)
        | Hint::Bool(ident)
        | Hint::Integer(ident)
        | Hint::String(ident)
        | Hint::Object(ident)
        | Hint::Mixed(ident) => ident.value.to_string(),
        Hint::Null(keyword)
        | Hint::True(keyword)
        | Hint::False(keyword)
        | Hint::Array(keyword)
        | Hint::Callable(keyword)
        | Hint::Static(keyword)
        | Hint::Self_(keyword)
        | Hint::Parent(keyword) => keyword.value.to_string(),
    }
}
