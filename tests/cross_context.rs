//! Tests for moving masks between independent type contexts.

mod common;

use common::{naming, parse};
use phpdoc_typemask::{
    AnnotationParser, PrimitiveKind, TypeContext, TypeMask, resolve_and_translate, translate,
};

#[test]
fn test_primitive_masks_pass_through() {
    let source = TypeContext::new();
    let mut target = TypeContext::new();
    let mask = TypeMask::primitive(PrimitiveKind::String) | TypeMask::primitive(PrimitiveKind::Null);
    assert_eq!(translate(&mut target, &source, &mask), mask);
    assert_eq!(translate(&mut target, &source, &TypeMask::ANY), TypeMask::ANY);
    assert!(
        translate(&mut target, &source, &TypeMask::UNINITIALIZED).is_uninitialized()
    );
    assert!(target.is_empty());
}

#[test]
fn test_translating_from_a_clone_is_identity() {
    let mut ctx = TypeContext::new();
    let masks = [
        parse(&mut ctx, "\\Foo"),
        parse(&mut ctx, "Bar[][]"),
        parse(&mut ctx, "array[\\Foo]"),
        parse(&mut ctx, "int"),
    ];
    let snapshot = ctx.clone();
    for mask in &masks {
        assert_eq!(&translate(&mut ctx, &snapshot, mask), mask);
    }
    assert_eq!(ctx.len(), snapshot.len(), "nothing new should be interned");
}

#[test]
fn test_same_class_in_two_contexts() {
    let mut a = TypeContext::new();
    let mut b = TypeContext::new();

    // Shift b's slot numbering so the two masks are bit-incompatible.
    parse(&mut b, "\\Unrelated");
    parse(&mut b, "\\AlsoUnrelated");

    let foo_a = parse(&mut a, "\\Foo");
    let foo_b = parse(&mut b, "\\Foo");
    assert_ne!(foo_a, foo_b, "slot numbers differ between contexts");

    let translated = translate(&mut b, &a, &foo_a);
    assert_eq!(translated, foo_b);
    assert_eq!(b.describe(&translated), "\\Foo|null");
}

#[test]
fn test_translation_before_target_knows_the_type() {
    let mut a = TypeContext::new();
    let mut b = TypeContext::new();
    parse(&mut b, "\\Unrelated");

    let mask = parse(&mut a, "\\Foo[]");
    let translated = translate(&mut b, &a, &mask);
    assert_eq!(b.describe(&translated), "(\\Foo|null)[]");

    // Parsing the same annotation in b afterwards lands on the same slots.
    assert_eq!(parse(&mut b, "\\Foo[]"), translated);
}

#[test]
fn test_nested_arrays_are_reinterned_recursively() {
    let mut a = TypeContext::new();
    let mut b = TypeContext::new();
    parse(&mut b, "string[]");

    let mask = parse(&mut a, "array[\\Foo[]]");
    let translated = translate(&mut b, &a, &mask);
    assert_eq!(b.describe(&translated), a.describe(&mask));
    assert_eq!(parse(&mut b, "\\Foo[][]"), translated);
}

#[test]
fn test_resolve_and_translate() {
    let ns = naming(Some("App"), &[("Carbon", "Carbon\\Carbon")]);
    let parser = AnnotationParser::new(Some(&ns));

    let mut callee = TypeContext::new();
    let mut caller = TypeContext::new();
    parse(&mut caller, "\\Something\\Else");

    let mask = resolve_and_translate(&mut caller, &mut callee, &parser, &["Carbon", "int"], false);
    assert_eq!(caller.describe(&mask), "int|\\Carbon\\Carbon|null");
    assert_eq!(callee.len(), 1, "the source context interned the class");
    assert_eq!(mask, parse(&mut caller, "\\Carbon\\Carbon") | parse(&mut caller, "int"));
}

#[test]
#[should_panic(expected = "source context only has 0 entries")]
fn test_foreign_mask_is_a_contract_violation() {
    let mut a = TypeContext::new();
    let foo = parse(&mut a, "\\Foo");

    let empty = TypeContext::new();
    let mut target = TypeContext::new();
    translate(&mut target, &empty, &foo);
}
