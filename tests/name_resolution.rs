//! Tests for namespace and import handling.

mod common;

use common::{describe_in, naming};
use phpdoc_typemask::{NamingContext, QualifiedName, resolve};

// ─── resolve ────────────────────────────────────────────────────────────────

#[test]
fn test_fully_qualified_names_are_verbatim() {
    let ns = naming(Some("App"), &[("Foo", "Vendor\\Foo")]);
    assert_eq!(resolve(Some(&ns), "\\Foo", false).to_string(), "Foo");
    assert_eq!(resolve(Some(&ns), "Foo", true).to_string(), "Foo");
    assert_eq!(
        resolve(Some(&ns), "\\Other\\Thing", false).to_string(),
        "Other\\Thing"
    );
}

#[test]
fn test_unqualified_name_gets_current_namespace() {
    let ns = naming(Some("App\\Models"), &[]);
    let qname = resolve(Some(&ns), "User", false);
    assert_eq!(qname.to_string(), "App\\Models\\User");
    assert_eq!(qname.name(), "User");
    assert_eq!(qname.namespace(), ["App", "Models"]);
}

#[test]
fn test_without_naming_context_names_stay_global() {
    assert_eq!(resolve(None, "User", false).to_string(), "User");
    assert_eq!(resolve(None, "Models\\User", false).to_string(), "Models\\User");
}

#[test]
fn test_alias_replaces_whole_name() {
    let ns = naming(Some("App"), &[("Carbon", "Carbon\\CarbonImmutable")]);
    assert_eq!(
        resolve(Some(&ns), "Carbon", false).to_string(),
        "Carbon\\CarbonImmutable"
    );
    assert_eq!(
        resolve(Some(&ns), "carbon", false).to_string(),
        "Carbon\\CarbonImmutable",
        "alias lookup ignores case"
    );
}

#[test]
fn test_alias_replaces_first_segment_of_qualified_name() {
    let ns = naming(Some("App"), &[("Models", "Domain\\Models")]);
    assert_eq!(
        resolve(Some(&ns), "Models\\User", false).to_string(),
        "Domain\\Models\\User"
    );
    assert_eq!(
        resolve(Some(&ns), "Other\\User", false).to_string(),
        "App\\Other\\User"
    );
}

#[test]
fn test_namespace_keyword_prefix() {
    let ns = naming(Some("App"), &[]);
    assert_eq!(
        resolve(Some(&ns), "namespace\\Service", false).to_string(),
        "App\\Service"
    );
}

#[test]
fn test_reserved_names_are_not_translated() {
    let ns = naming(Some("App"), &[]);
    for reserved in ["self", "static", "parent", "SELF"] {
        let qname = resolve(Some(&ns), reserved, false);
        assert!(qname.is_reserved(), "{reserved}");
        assert_eq!(qname.to_string(), reserved);
    }
}

#[test]
fn test_add_import_uses_last_segment() {
    let mut ns = NamingContext::with_namespace(Some("\\App\\"));
    ns.add_import("\\Illuminate\\Support\\Collection");
    assert_eq!(ns.namespace(), Some("App"));
    assert_eq!(ns.alias("collection"), Some("Illuminate\\Support\\Collection"));
}

#[test]
fn test_qualified_name_flags() {
    assert!(QualifiedName::parse("int").is_primitive());
    assert!(!QualifiedName::parse("App\\int").is_primitive());
    assert!(QualifiedName::parse("\\static").is_reserved());
    assert!(QualifiedName::parse("Foo").is_simple());
}

// ─── Annotation parsing through a naming context ────────────────────────────

#[test]
fn test_annotations_resolve_through_imports() {
    let ns = naming(Some("App"), &[("Carbon", "Carbon\\Carbon")]);
    assert_eq!(describe_in(&ns, "Carbon"), "\\Carbon\\Carbon|null");
    assert_eq!(describe_in(&ns, "User"), "\\App\\User|null");
    assert_eq!(describe_in(&ns, "\\User"), "\\User|null");
    assert_eq!(describe_in(&ns, "Carbon[]"), "(\\Carbon\\Carbon|null)[]");
    assert_eq!(describe_in(&ns, "array[User]"), "(\\App\\User|null)[]");
}

#[test]
fn test_keywords_are_never_namespaced() {
    let ns = naming(Some("App"), &[]);
    assert_eq!(describe_in(&ns, "int"), "int");
    assert_eq!(describe_in(&ns, "void"), "void");
    assert_eq!(describe_in(&ns, "Mixed"), "mixed");
}

// Known sharp edge: an import that rewrites a name into a bare keyword
// spelling resolves to the keyword, even if a global class of that name
// exists.
#[test]
fn test_alias_onto_keyword_spelling_resolves_as_keyword() {
    let ns = naming(Some("App"), &[("Num", "Integer")]);
    assert_eq!(describe_in(&ns, "Num"), "int");

    let ns = naming(Some("App"), &[("Text", "\\String")]);
    assert_eq!(describe_in(&ns, "Text"), "string");
}

#[test]
fn test_namespaced_keyword_spelling_stays_nominal() {
    let ns = naming(Some("App"), &[("Num", "Types\\Integer")]);
    assert_eq!(describe_in(&ns, "Num"), "\\Types\\Integer|null");
    assert_eq!(describe_in(&ns, "\\Types\\Integer"), "\\Types\\Integer|null");
}
