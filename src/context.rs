//! Per-scope type registry.
//!
//! A [`TypeContext`] interns nominal class types and "array of X" types and
//! hands out [`TypeMask`] slots for them.  The arena is append-only: a slot,
//! once assigned, always denotes the same descriptor.  That property is what
//! makes masks from a clone of a context valid in the original and lets
//! [`translate`](crate::translate) walk a foreign arena safely.

use std::collections::HashMap;

use serde::Serialize;
use ustr::{Ustr, ustr};

use crate::mask::{PrimitiveKind, TypeMask};
use crate::names::QualifiedName;

/// A type interned by a [`TypeContext`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// A class, interface, trait or enum, by fully-qualified name (no
    /// leading `\`).
    Class(Ustr),
    /// An array whose elements have the given mask (of the same context).
    ArrayOf(TypeMask),
}

/// Lookup key for the arena.  Class names are case-insensitive in PHP.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum DescriptorKey {
    Class(Ustr),
    ArrayOf(TypeMask),
}

/// Registry of interned type descriptors for one analysed routine or scope.
#[derive(Debug, Clone, Default)]
pub struct TypeContext {
    descriptors: Vec<TypeDescriptor>,
    index: HashMap<DescriptorKey, u32>,
}

impl TypeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of interned descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// The mask of a primitive category.
    pub fn get_mask(&self, kind: PrimitiveKind) -> TypeMask {
        TypeMask::primitive(kind)
    }

    /// The descriptor stored at `slot`, if this context has one.
    pub fn descriptor(&self, slot: u32) -> Option<&TypeDescriptor> {
        self.descriptors.get(slot as usize)
    }

    /// All interned descriptors with their slots, in interning order.
    pub fn descriptors(&self) -> impl Iterator<Item = (u32, &TypeDescriptor)> {
        self.descriptors
            .iter()
            .enumerate()
            .map(|(slot, d)| (slot as u32, d))
    }

    /// The mask of "array of `element`", unioned with the generic array bit.
    ///
    /// An element mask with no usable information (`void` or `mixed`)
    /// yields the plain array-of-unknown mask without interning anything.
    pub fn array_of(&mut self, element: &TypeMask) -> TypeMask {
        let array = TypeMask::primitive(PrimitiveKind::Array);
        if element.is_uninitialized() || element.is_any() {
            return array;
        }
        let slot = self.intern(
            DescriptorKey::ArrayOf(element.clone()),
            TypeDescriptor::ArrayOf(element.clone()),
        );
        array | TypeMask::from_slot(slot)
    }

    /// The mask of the nominal type `name`, optionally also permitting
    /// `null` (PHPDoc object annotations are implicitly nullable).
    pub fn nominal_type_mask(&mut self, name: &QualifiedName, allow_null: bool) -> TypeMask {
        let mask = self.class_mask(&name.to_string());
        if allow_null {
            mask | TypeMask::primitive(PrimitiveKind::Null)
        } else {
            mask
        }
    }

    /// Slot-only mask for the class `fqn`.
    pub(crate) fn class_mask(&mut self, fqn: &str) -> TypeMask {
        let fqn = fqn.strip_prefix('\\').unwrap_or(fqn);
        let key = DescriptorKey::Class(ustr(&fqn.to_ascii_lowercase()));
        let slot = self.intern(key, TypeDescriptor::Class(ustr(fqn)));
        TypeMask::from_slot(slot)
    }

    fn intern(&mut self, key: DescriptorKey, descriptor: TypeDescriptor) -> u32 {
        if let Some(&slot) = self.index.get(&key) {
            return slot;
        }
        let slot = self.descriptors.len() as u32;
        self.descriptors.push(descriptor);
        self.index.insert(key, slot);
        slot
    }

    // ─── Rendering ──────────────────────────────────────────────────────

    /// Render `mask` as a PHPDoc-style type string, e.g. `int|\Foo|null`.
    ///
    /// Slots unknown to this context render as `#<slot>`.
    pub fn describe(&self, mask: &TypeMask) -> String {
        if mask.is_any() {
            return "mixed".to_string();
        }
        if mask.is_uninitialized() {
            return "void".to_string();
        }
        self.describe_parts(mask).join("|")
    }

    fn describe_parts(&self, mask: &TypeMask) -> Vec<String> {
        let mut parts: Vec<String> = Vec::new();
        let has_typed_array = mask
            .slots()
            .any(|s| matches!(self.descriptor(s), Some(TypeDescriptor::ArrayOf(_))));

        for kind in mask.primitives() {
            // `int[]` already says "array"; repeating the bare bit is noise.
            if kind == PrimitiveKind::Array && has_typed_array {
                continue;
            }
            if kind == PrimitiveKind::Null {
                continue;
            }
            parts.push(kind.keyword().to_string());
        }
        for slot in mask.slots() {
            parts.push(self.describe_slot(slot));
        }
        if mask.contains(PrimitiveKind::Null) {
            parts.push("null".to_string());
        }
        parts
    }

    fn describe_slot(&self, slot: u32) -> String {
        // Arrays of arrays are walked in a loop, adding one `[]` per level.
        let mut depth = 0usize;
        let mut current = slot;
        let mut out = loop {
            match self.descriptor(current) {
                Some(TypeDescriptor::Class(name)) => break format!("\\{name}"),
                Some(TypeDescriptor::ArrayOf(element)) => {
                    depth += 1;
                    if let Some(inner) = self.sole_typed_array(element) {
                        current = inner;
                        continue;
                    }
                    let parts = self.describe_parts(element);
                    if parts.len() > 1 {
                        break format!("({})", parts.join("|"));
                    }
                    break parts.concat();
                }
                None => break format!("#{current}"),
            }
        };
        out.reserve(depth * 2);
        for _ in 0..depth {
            out.push_str("[]");
        }
        out
    }

    /// The slot of `mask` when the mask is exactly one typed array (plus
    /// the generic array bit it always carries).
    fn sole_typed_array(&self, mask: &TypeMask) -> Option<u32> {
        if mask.is_any() || mask.primitives().any(|k| k != PrimitiveKind::Array) {
            return None;
        }
        let mut slots = mask.slots();
        let slot = slots.next()?;
        if slots.next().is_some() {
            return None;
        }
        matches!(self.descriptor(slot), Some(TypeDescriptor::ArrayOf(_))).then_some(slot)
    }

    /// A serialisable view of the interned descriptors, for reporting.
    pub fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot {
            types: self
                .descriptors()
                .map(|(slot, _)| SnapshotEntry {
                    slot,
                    rendered: self.describe_slot(slot),
                })
                .collect(),
        }
    }
}

/// Serialisable snapshot of a [`TypeContext`]'s slot assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextSnapshot {
    pub types: Vec<SnapshotEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry {
    pub slot: u32,
    pub rendered: String,
}
