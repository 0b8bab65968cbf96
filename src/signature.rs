//! Resolving a routine's documented parameter and return types.
//!
//! For each parameter the docblock `@param` tag (found by
//! [`find_param_tag`]) wins; without one the native type hint is used.  The
//! same precedence applies to `@return` against the native return hint.

use crate::annotation::AnnotationParser;
use crate::context::TypeContext;
use crate::docblock::find_param_tag;
use crate::mask::TypeMask;
use crate::translate::translate;
use crate::types::{ResolvedParameter, RoutineSignature, SourceRoutine, TypeSource};

/// Resolve every parameter and the return type of `routine` into `ctx`.
pub fn resolve_signature(ctx: &mut TypeContext, routine: &SourceRoutine) -> RoutineSignature {
    let parser = AnnotationParser::new(Some(&routine.naming));
    let docblock = routine.docblock.as_ref();

    let parameters = routine
        .parameters
        .iter()
        .enumerate()
        .map(|(index, param)| {
            let name = param.name.strip_prefix('$').unwrap_or(&param.name);
            let documented = find_param_tag(docblock, index, name)
                .filter(|tag| tag.type_text.is_some())
                .map(|tag| parser.parse_many(ctx, &tag.alternatives(), false));

            let (mask, source) = match documented {
                Some(mask) => (mask, TypeSource::DocBlock),
                None => native(&parser, ctx, param.type_hint.as_deref()),
            };

            ResolvedParameter {
                name: name.to_string(),
                mask,
                source,
            }
        })
        .collect();

    let (return_mask, return_source) = match docblock.and_then(|doc| doc.return_type()) {
        Some(text) => (parser.parse_text(ctx, text), TypeSource::DocBlock),
        None => native(&parser, ctx, routine.return_hint.as_deref()),
    };

    RoutineSignature {
        parameters,
        return_mask,
        return_source,
    }
}

/// Bring a signature resolved in `source` over into `target`.
pub fn translate_signature(
    target: &mut TypeContext,
    source: &TypeContext,
    signature: &RoutineSignature,
) -> RoutineSignature {
    RoutineSignature {
        parameters: signature
            .parameters
            .iter()
            .map(|param| ResolvedParameter {
                mask: translate(target, source, &param.mask),
                ..param.clone()
            })
            .collect(),
        return_mask: translate(target, source, &signature.return_mask),
        return_source: signature.return_source,
    }
}

fn native(
    parser: &AnnotationParser<'_>,
    ctx: &mut TypeContext,
    hint: Option<&str>,
) -> (TypeMask, TypeSource) {
    match hint {
        Some(hint) => (parser.parse_text(ctx, hint), TypeSource::Native),
        None => (TypeMask::UNINITIALIZED, TypeSource::None),
    }
}
