//! Moving masks between independently interned contexts.
//!
//! Slot numbers are private to the [`TypeContext`] that assigned them, so a
//! mask computed while analysing one routine cannot be merged into another
//! routine's context as-is.  [`translate`] walks the slots of a mask, looks
//! their descriptors up in the source arena and re-interns them in the
//! target.  Primitive bits carry over untouched.

use std::collections::HashMap;

use crate::annotation::AnnotationParser;
use crate::context::{TypeContext, TypeDescriptor};
use crate::mask::TypeMask;

/// The mask in `target` denoting the same types as `mask` does in `source`.
///
/// # Panics
///
/// If `mask` references a slot that `source` never assigned, i.e. the mask
/// was not produced by `source` (or a context it was cloned from).
pub fn translate(target: &mut TypeContext, source: &TypeContext, mask: &TypeMask) -> TypeMask {
    if !mask.has_slots() {
        return mask.clone();
    }

    let mut memo = HashMap::new();
    let mut out = mask.primitive_part();
    for slot in mask.slots() {
        translate_slot(target, source, slot, &mut memo);
        if let Some(translated) = memo.get(&slot) {
            out |= translated;
        }
    }
    out
}

/// Translate `root` and every slot it depends on, filling `memo`.
///
/// Element slots are translated before the array that holds them, using an
/// explicit work stack so arbitrarily deep nesting needs no recursion.
fn translate_slot(
    target: &mut TypeContext,
    source: &TypeContext,
    root: u32,
    memo: &mut HashMap<u32, TypeMask>,
) {
    let mut stack = vec![(root, false)];
    while let Some((slot, elements_done)) = stack.pop() {
        if memo.contains_key(&slot) {
            continue;
        }

        let translated = match source.descriptor(slot) {
            Some(TypeDescriptor::Class(name)) => target.class_mask(name.as_str()),
            Some(TypeDescriptor::ArrayOf(element)) if !elements_done => {
                stack.push((slot, true));
                stack.extend(
                    element
                        .slots()
                        .filter(|s| !memo.contains_key(s))
                        .map(|s| (s, false)),
                );
                continue;
            }
            Some(TypeDescriptor::ArrayOf(element)) => {
                let mut translated_element = element.primitive_part();
                for s in element.slots() {
                    if let Some(done) = memo.get(&s) {
                        translated_element |= done;
                    }
                }
                target.array_of(&translated_element)
            }
            None => panic!(
                "type mask references slot {slot}, but the source context only has {} entries",
                source.len()
            ),
        };
        memo.insert(slot, translated);
    }
}

/// Resolve `names` in `source` and bring the result over into `target`.
///
/// This is the usual way to merge one routine's documented parameter or
/// return types into a caller's (or callee's) context.
pub fn resolve_and_translate<S: AsRef<str>>(
    target: &mut TypeContext,
    source: &mut TypeContext,
    parser: &AnnotationParser<'_>,
    names: &[S],
    fully_qualified: bool,
) -> TypeMask {
    let mask = parser.parse_many(source, names, fully_qualified);
    let translated = translate(target, source, &mask);
    tracing::debug!(
        source = %source.describe(&mask),
        target = %target.describe(&translated),
        "translated annotation mask"
    );
    translated
}
