//! PHPDoc tag extraction.
//!
//! Turns raw `/** ... */` text into a [`DocBlock`]: the free-text summary
//! followed by every `@tag` in document order.  `@param` tags are split
//! into type, variable and description; every other tag keeps its body
//! verbatim.  Lines that do not start a tag continue the previous one.

use crate::types::{DocBlock, DocTag, GenericTag, ParamTag};

use super::types::split_type_token;

impl DocBlock {
    /// Parse the text of a docblock comment.
    ///
    /// Accepts the comment with or without its `/**` / `*/` delimiters.
    pub fn parse(docblock: &str) -> DocBlock {
        let trimmed = docblock.trim();
        let inner = trimmed.strip_prefix("/**").unwrap_or(trimmed);
        let inner = inner.strip_suffix("*/").unwrap_or(inner);

        let mut block = DocBlock::default();
        let mut summary: Vec<&str> = Vec::new();

        for line in inner.lines() {
            let line = line.trim().trim_start_matches('*').trim();

            if let Some(tag) = line.strip_prefix('@') {
                let (name, body) = match tag.find(char::is_whitespace) {
                    Some(pos) => (&tag[..pos], tag[pos..].trim()),
                    None => (tag, ""),
                };
                if name.is_empty() {
                    continue;
                }
                block.tags.push(parse_tag(name, body));
                continue;
            }

            if line.is_empty() {
                continue;
            }

            match block.tags.last_mut() {
                Some(DocTag::Param(param)) => append_line(&mut param.description, line),
                Some(DocTag::Other(other)) => append_line(&mut other.body, line),
                None => summary.push(line),
            }
        }

        block.summary = summary.join("\n");
        block
    }

    /// `@param` tags in document order.
    pub fn param_tags(&self) -> impl Iterator<Item = &ParamTag> {
        self.tags.iter().filter_map(|tag| match tag {
            DocTag::Param(param) => Some(param),
            DocTag::Other(_) => None,
        })
    }

    /// The first non-`@param` tag called `name` (without `@`).
    pub fn tag(&self, name: &str) -> Option<&GenericTag> {
        self.tags.iter().find_map(|tag| match tag {
            DocTag::Other(other) if other.name.eq_ignore_ascii_case(name) => Some(other),
            _ => None,
        })
    }

    /// The raw type of the `@return` tag, if any.
    pub fn return_type(&self) -> Option<&str> {
        let body = &self.tag("return")?.body;
        let (type_token, _) = split_type_token(body);
        (!type_token.is_empty()).then_some(type_token)
    }
}

impl ParamTag {
    /// The documented type split into alternative names
    /// (`?int` → `["int", "null"]`).
    pub fn alternatives(&self) -> Vec<String> {
        self.type_text
            .as_deref()
            .map(super::split_alternatives)
            .unwrap_or_default()
    }
}

fn parse_tag(name: &str, body: &str) -> DocTag {
    if name == "param" {
        DocTag::Param(parse_param_body(body))
    } else {
        DocTag::Other(GenericTag {
            name: name.to_string(),
            body: body.to_string(),
        })
    }
}

/// Parse the body of a `@param` tag.
///
/// Handles:
///   - `@param Type $name description`
///   - `@param Type ...$name` / `@param Type &$name`
///   - `@param $name description` (no type)
///   - `@param Type description` (no name; matched by position)
fn parse_param_body(body: &str) -> ParamTag {
    let mut tag = ParamTag::default();

    let (type_token, remainder) = if variable_token(body).is_some() {
        ("", body)
    } else {
        split_type_token(body)
    };
    if !type_token.is_empty() {
        tag.type_text = Some(type_token.to_string());
    }

    let remainder = remainder.trim_start();
    let (first, rest) = match remainder.find(char::is_whitespace) {
        Some(pos) => (&remainder[..pos], &remainder[pos..]),
        None => (remainder, ""),
    };

    match variable_token(first) {
        Some((name, variadic)) => {
            tag.variable = Some(name.to_string());
            tag.is_variadic = variadic;
            tag.description = rest.trim().to_string();
        }
        None => tag.description = remainder.trim().to_string(),
    }

    tag
}

/// If `s` starts with a variable (`$x`, `...$x`, `&$x`, `&...$x`), return
/// its name without sigils and whether it is variadic.
fn variable_token(s: &str) -> Option<(&str, bool)> {
    let s = s.split_whitespace().next()?;
    let s = s.strip_prefix('&').unwrap_or(s);
    let (s, variadic) = match s.strip_prefix("...") {
        Some(rest) => (rest, true),
        None => (s, false),
    };
    let name = s.strip_prefix('$')?;
    let name = name.trim_end_matches([',', '.', ')']);
    (!name.is_empty()).then_some((name, variadic))
}

fn append_line(text: &mut String, line: &str) {
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(line);
}
