//! Type masks.
//!
//! A [`TypeMask`] is a set of possible runtime type categories.  The low
//! bits are fixed primitive categories shared by every context; the
//! remaining bits ("slots") point at descriptors interned by one particular
//! [`TypeContext`](crate::TypeContext) and are meaningless anywhere else.
//!
//! Two values are special:
//!   - the empty mask, `uninitialized`, which doubles as `void`
//!   - `any`, the top value, which absorbs every other mask in a union

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Primitive type categories that do not need interning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Integer,
    Float,
    String,
    Boolean,
    /// An array whose element type is unknown.
    Array,
    Callable,
    /// An object whose class is unknown.
    Object,
    Null,
}

impl PrimitiveKind {
    /// Every kind, in rendering order (`null` last).
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Integer,
        PrimitiveKind::Float,
        PrimitiveKind::String,
        PrimitiveKind::Boolean,
        PrimitiveKind::Array,
        PrimitiveKind::Callable,
        PrimitiveKind::Object,
        PrimitiveKind::Null,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }

    /// The PHPDoc spelling used when rendering masks.
    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Integer => "int",
            PrimitiveKind::Float => "float",
            PrimitiveKind::String => "string",
            PrimitiveKind::Boolean => "bool",
            PrimitiveKind::Array => "array",
            PrimitiveKind::Callable => "callable",
            PrimitiveKind::Object => "object",
            PrimitiveKind::Null => "null",
        }
    }
}

const ANY_BIT: u16 = 1 << 15;

/// A union of possible runtime types, valid only inside the
/// [`TypeContext`](crate::TypeContext) that produced it.
///
/// Masks are immutable values.  Union is [`BitOr`]; two masks are equal
/// when they hold the same primitives and the same slots.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct TypeMask {
    primitives: u16,
    slots: SlotBits,
}

impl TypeMask {
    /// No type information (`void`).
    pub const UNINITIALIZED: TypeMask = TypeMask {
        primitives: 0,
        slots: SlotBits::EMPTY,
    };

    /// The top value (`mixed`).
    pub const ANY: TypeMask = TypeMask {
        primitives: ANY_BIT,
        slots: SlotBits::EMPTY,
    };

    /// A mask holding exactly one primitive category.
    pub const fn primitive(kind: PrimitiveKind) -> TypeMask {
        TypeMask {
            primitives: kind.bit(),
            slots: SlotBits::EMPTY,
        }
    }

    pub(crate) fn from_slot(slot: u32) -> TypeMask {
        let mut slots = SlotBits::EMPTY;
        slots.insert(slot);
        TypeMask {
            primitives: 0,
            slots,
        }
    }

    pub fn is_uninitialized(&self) -> bool {
        self.primitives == 0 && self.slots.is_empty()
    }

    pub fn is_any(&self) -> bool {
        self.primitives & ANY_BIT != 0
    }

    /// Whether the primitive category `kind` is part of this mask.
    ///
    /// `any` contains every category.
    pub fn contains(&self, kind: PrimitiveKind) -> bool {
        self.is_any() || self.primitives & kind.bit() != 0
    }

    /// The primitive categories set in this mask, in rendering order.
    pub fn primitives(&self) -> impl Iterator<Item = PrimitiveKind> + '_ {
        PrimitiveKind::ALL
            .into_iter()
            .filter(|k| self.primitives & k.bit() != 0)
    }

    /// Context-specific slots referenced by this mask, ascending.
    pub fn slots(&self) -> impl Iterator<Item = u32> + '_ {
        self.slots.iter()
    }

    /// Whether any context-specific bit is set.
    pub fn has_slots(&self) -> bool {
        !self.slots.is_empty()
    }

    /// The same mask with every context-specific bit cleared.
    pub fn primitive_part(&self) -> TypeMask {
        TypeMask {
            primitives: self.primitives,
            slots: SlotBits::EMPTY,
        }
    }

    /// Union of two masks.  `any` absorbs everything.
    pub fn union(&self, other: &TypeMask) -> TypeMask {
        let mut out = self.clone();
        out |= other;
        out
    }
}

impl BitOrAssign<&TypeMask> for TypeMask {
    fn bitor_assign(&mut self, rhs: &TypeMask) {
        if self.is_any() {
            return;
        }
        if rhs.is_any() {
            *self = TypeMask::ANY;
            return;
        }
        self.primitives |= rhs.primitives;
        self.slots.union_with(&rhs.slots);
    }
}

impl BitOrAssign for TypeMask {
    fn bitor_assign(&mut self, rhs: TypeMask) {
        *self |= &rhs;
    }
}

impl BitOr for TypeMask {
    type Output = TypeMask;

    fn bitor(mut self, rhs: TypeMask) -> TypeMask {
        self |= &rhs;
        self
    }
}

impl BitOr<&TypeMask> for &TypeMask {
    type Output = TypeMask;

    fn bitor(self, rhs: &TypeMask) -> TypeMask {
        self.union(rhs)
    }
}

impl From<PrimitiveKind> for TypeMask {
    fn from(kind: PrimitiveKind) -> Self {
        TypeMask::primitive(kind)
    }
}

impl fmt::Debug for TypeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any() {
            return f.write_str("TypeMask(any)");
        }
        if self.is_uninitialized() {
            return f.write_str("TypeMask(void)");
        }
        let mut list = f.debug_list();
        for kind in self.primitives() {
            list.entry(&kind);
        }
        for slot in self.slots() {
            list.entry(&format_args!("#{slot}"));
        }
        list.finish()
    }
}

// ─── Slot bit set ───────────────────────────────────────────────────────────

/// Set of interned slots, stored as a sorted list without duplicates.
///
/// Masks usually reference a handful of slots regardless of how many the
/// context holds, so the set is sparse.  The canonical order makes
/// structurally equal sets compare and hash equal.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
struct SlotBits(Vec<u32>);

impl SlotBits {
    const EMPTY: SlotBits = SlotBits(Vec::new());

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, slot: u32) {
        if let Err(pos) = self.0.binary_search(&slot) {
            self.0.insert(pos, slot);
        }
    }

    fn union_with(&mut self, other: &SlotBits) {
        if other.0.is_empty() {
            return;
        }
        if self.0.is_empty() {
            self.0.clone_from(&other.0);
            return;
        }

        let (lhs, rhs) = (&self.0, &other.0);
        let mut merged = Vec::with_capacity(lhs.len() + rhs.len());
        let (mut i, mut j) = (0, 0);
        while i < lhs.len() && j < rhs.len() {
            match lhs[i].cmp(&rhs[j]) {
                Ordering::Less => {
                    merged.push(lhs[i]);
                    i += 1;
                }
                Ordering::Greater => {
                    merged.push(rhs[j]);
                    j += 1;
                }
                Ordering::Equal => {
                    merged.push(lhs[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        merged.extend_from_slice(&lhs[i..]);
        merged.extend_from_slice(&rhs[j..]);
        self.0 = merged;
    }

    fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}
