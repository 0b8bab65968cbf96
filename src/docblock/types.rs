//! Type-text utilities for raw docblock annotations.
//!
//! These helpers cut a tag body into its type token and split a type token
//! into the alternative names [`AnnotationParser::parse_many`] expects.
//!
//! [`AnnotationParser::parse_many`]: crate::AnnotationParser::parse_many

/// Split off the first type token from `s`, respecting `<…>`, `(…)`,
/// `[…]` and `{…}` nesting.
///
/// Returns `(type_token, remainder)` where `type_token` is the full type
/// (e.g. `array<int, User>`) and `remainder` is whatever follows.
pub(crate) fn split_type_token(s: &str) -> (&str, &str) {
    let mut depth = 0i32;
    for (i, c) in s.char_indices() {
        match c {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => depth -= 1,
            c if c.is_whitespace() && depth <= 0 => return (&s[..i], &s[i..]),
            _ => {}
        }
    }
    (s, "")
}

/// Split raw type text into alternative names.
///
///   - `int|string`   → `["int", "string"]`
///   - `?Foo`         → `["Foo", "null"]`
///   - `\Foo[]|null`  → `["\Foo[]", "null"]`
///   - `(int|bool)`   → `["int", "bool"]`
///
/// `|` only splits at nesting depth 0, so `array[int|string]` stays one
/// alternative (and later degrades like any other unrecognised name).
/// Trailing punctuation that leaks in from descriptions is dropped.
pub fn split_alternatives(text: &str) -> Vec<String> {
    let text = text.trim().trim_end_matches(['.', ',']);
    let mut out = Vec::new();
    push_alternatives(text, &mut out);
    out
}

fn push_alternatives(text: &str, out: &mut Vec<String>) {
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => depth -= 1,
            '|' if depth == 0 => {
                push_alternative(&text[start..i], out);
                start = i + 1;
            }
            _ => {}
        }
    }
    push_alternative(&text[start..], out);
}

fn push_alternative(part: &str, out: &mut Vec<String>) {
    let part = part.trim();
    if part.is_empty() {
        return;
    }

    if let Some(inner) = part.strip_prefix('?') {
        push_alternative(inner, out);
        out.push("null".to_string());
        return;
    }

    // A fully parenthesised group is just a nested union.
    if let Some(inner) = part.strip_prefix('(').and_then(|p| p.strip_suffix(')'))
        && is_balanced(inner)
    {
        push_alternatives(inner, out);
        return;
    }

    out.push(part.to_string());
}

fn is_balanced(s: &str) -> bool {
    let mut depth = 0i32;
    for c in s.chars() {
        match c {
            '<' | '(' | '[' | '{' => depth += 1,
            '>' | ')' | ']' | '}' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_token_stops_at_whitespace_outside_nesting() {
        assert_eq!(
            split_type_token("array<int, User> $users the users"),
            ("array<int, User>", " $users the users")
        );
        assert_eq!(split_type_token("int"), ("int", ""));
    }

    #[test]
    fn alternatives() {
        assert_eq!(split_alternatives("int|string"), vec!["int", "string"]);
        assert_eq!(split_alternatives("?\\Foo"), vec!["\\Foo", "null"]);
        assert_eq!(split_alternatives("(int|bool)"), vec!["int", "bool"]);
        assert_eq!(split_alternatives("Foo[]|null."), vec!["Foo[]", "null"]);
        assert_eq!(split_alternatives("array[int|string]"), vec!["array[int|string]"]);
        assert!(split_alternatives("  ").is_empty());
    }

    #[test]
    fn parenthesised_array_is_not_unwrapped() {
        assert_eq!(split_alternatives("(A|B)[]"), vec!["(A|B)[]"]);
    }
}
