//! Locating the `@param` tag that documents a given parameter.

use crate::types::{DocBlock, ParamTag};

/// Find the `@param` tag for the parameter at `param_index` named
/// `param_name` (with or without the `$` sigil).
///
/// Tags are scanned in order with a running index over `@param` tags only.
/// A tag without a variable name is a positional candidate: if it sits at
/// `param_index` it becomes the current result, but scanning goes on.  A
/// tag whose variable matches `param_name` (ignoring case) wins outright,
/// even if a positional candidate was found earlier.
pub fn find_param_tag<'d>(
    doc_block: Option<&'d DocBlock>,
    param_index: usize,
    param_name: &str,
) -> Option<&'d ParamTag> {
    let doc_block = doc_block?;
    let param_name = param_name.strip_prefix('$').unwrap_or(param_name);

    let mut result = None;
    for (pi, tag) in doc_block.param_tags().enumerate() {
        match &tag.variable {
            None if pi == param_index => result = Some(tag),
            None => {}
            Some(variable) if variable.eq_ignore_ascii_case(param_name) => return Some(tag),
            Some(_) => {}
        }
    }
    result
}
