//! Class-name resolution for annotation text.
//!
//! A [`NamingContext`] describes the lexical scope an annotation appeared
//! in: the current namespace and the `use` imports visible there.  The
//! [`resolve`] function turns a raw name such as `Carbon` or
//! `Models\User` into a [`QualifiedName`] using PHP's rules:
//!
//!   1. A leading `\` (or an explicit "already qualified" flag) keeps the
//!      name verbatim.
//!   2. The first segment is looked up in the import table; an alias
//!      replaces that segment with its full target.
//!   3. A leading `namespace\` segment is replaced by the current namespace.
//!   4. Otherwise the current namespace is prepended.
//!
//! Reserved class names (`self`, `static`, `parent`) and bare primitive
//! spellings are never translated.

use std::collections::HashMap;
use std::fmt;

use crate::known_types;

/// Names that refer to the enclosing class rather than a declared type.
const RESERVED_CLASS_NAMES: &[&str] = &["self", "static", "parent"];

/// The namespace and imports in effect where an annotation appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingContext {
    namespace: Option<String>,
    /// Lower-cased alias → fully-qualified target (no leading `\`).
    aliases: HashMap<String, String>,
}

impl NamingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context for the given namespace (`None` or `""` is the global one).
    pub fn with_namespace(namespace: Option<&str>) -> Self {
        let mut ctx = Self::default();
        ctx.set_namespace(namespace);
        ctx
    }

    pub fn set_namespace(&mut self, namespace: Option<&str>) {
        self.namespace = namespace
            .map(|ns| ns.trim_matches('\\'))
            .filter(|ns| !ns.is_empty())
            .map(str::to_string);
    }

    /// Register `use Target as Alias;` (or `use Target;` when the alias is
    /// the last segment of the target).
    pub fn add_alias(&mut self, alias: &str, target: &str) {
        let target = target.trim_start_matches('\\');
        if alias.is_empty() || target.is_empty() {
            return;
        }
        self.aliases
            .insert(alias.to_ascii_lowercase(), target.to_string());
    }

    /// Register an import by its target alone; the alias is the target's
    /// last segment.
    pub fn add_import(&mut self, target: &str) {
        self.add_alias(short_name(target.trim_start_matches('\\')), target);
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// The import target registered for `alias`, ignoring case.
    pub fn alias(&self, alias: &str) -> Option<&str> {
        self.aliases
            .get(&alias.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Apply alias and namespace rules to a relative name.
    fn translate(&self, name: &QualifiedName) -> QualifiedName {
        let full = name.to_string();
        let (first, rest) = match full.split_once('\\') {
            Some((first, rest)) => (first, Some(rest)),
            None => (full.as_str(), None),
        };

        if let Some(target) = self.alias(first) {
            return match rest {
                Some(rest) => QualifiedName::parse(&format!("{target}\\{rest}")),
                None => QualifiedName::parse(target),
            };
        }

        if let Some(rest) = rest
            && first.eq_ignore_ascii_case("namespace")
        {
            return self.prefixed(rest);
        }

        self.prefixed(&full)
    }

    fn prefixed(&self, name: &str) -> QualifiedName {
        match &self.namespace {
            Some(ns) => QualifiedName::parse(&format!("{ns}\\{name}")),
            None => QualifiedName::parse(name),
        }
    }
}

/// A resolved type name: namespace segments plus a simple name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    namespace: Vec<String>,
    name: String,
}

impl QualifiedName {
    /// Split `text` on `\` without applying any naming rules.  A leading
    /// `\` is ignored.
    pub fn parse(text: &str) -> Self {
        let text = text.trim().trim_start_matches('\\');
        let mut segments: Vec<String> = text
            .split('\\')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        let name = segments.pop().unwrap_or_default();
        Self {
            namespace: segments,
            name,
        }
    }

    /// The last segment.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &[String] {
        &self.namespace
    }

    /// Whether the name has no namespace segments.
    pub fn is_simple(&self) -> bool {
        self.namespace.is_empty()
    }

    /// `self`, `static` or `parent`.
    pub fn is_reserved(&self) -> bool {
        self.is_simple()
            && RESERVED_CLASS_NAMES
                .iter()
                .any(|r| r.eq_ignore_ascii_case(&self.name))
    }

    /// Whether this is a bare pseudo-type keyword such as `int`.
    pub fn is_primitive(&self) -> bool {
        self.is_simple() && known_types::is_known(&self.name)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.namespace {
            write!(f, "{segment}\\")?;
        }
        f.write_str(&self.name)
    }
}

/// Resolve a raw class name to a fully-qualified one.
///
/// With `fully_qualified` set, or when the name starts with `\`, the text is
/// taken verbatim.  Otherwise the naming context (when present) rewrites
/// it through imports and the current namespace.
pub fn resolve(
    naming: Option<&NamingContext>,
    raw_name: &str,
    fully_qualified: bool,
) -> QualifiedName {
    let raw_name = raw_name.trim();
    let qname = QualifiedName::parse(raw_name);
    if fully_qualified || raw_name.starts_with('\\') {
        return qname;
    }

    match naming {
        Some(naming) if !qname.is_reserved() && !qname.is_primitive() => naming.translate(&qname),
        _ => qname,
    }
}

/// The last `\`-separated segment of a name.
pub(crate) fn short_name(name: &str) -> &str {
    name.rsplit('\\').next().unwrap_or(name)
}
