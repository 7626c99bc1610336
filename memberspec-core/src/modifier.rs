//! Output-language modifiers and the platform flag translation table.
//!
//! Hosts that introspect compiled members report modifiers as an integer of
//! bit flags. [`translate`] maps that integer onto abstract [`Modifier`] tags
//! in a fixed order, independent of how the bits were combined.

use std::fmt;

use bitflags::bitflags;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Member modifier bits as reported by a host reflection facility.
    ///
    /// Values follow the JVM access-flag encoding. Bits outside this table
    /// (native, interface, synthetic, ...) are dropped on translation.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const PUBLIC = 0x0001;
        const PRIVATE = 0x0002;
        const PROTECTED = 0x0004;
        const STATIC = 0x0008;
        const FINAL = 0x0010;
        const SYNCHRONIZED = 0x0020;
        const VOLATILE = 0x0040;
        const TRANSIENT = 0x0080;
        const ABSTRACT = 0x0400;
        const STRICT = 0x0800;
    }
}

/// An abstract visibility or behavior tag on a generated member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Abstract,
    Final,
    Static,
    Transient,
    Synchronized,
    Volatile,
    /// Strict floating-point semantics.
    #[serde(rename = "strictfp")]
    StrictFp,
}

/// Translation order. Output sets always list modifiers in this order.
const TRANSLATION_TABLE: [(ModifierFlags, Modifier); 10] = [
    (ModifierFlags::ABSTRACT, Modifier::Abstract),
    (ModifierFlags::FINAL, Modifier::Final),
    (ModifierFlags::PRIVATE, Modifier::Private),
    (ModifierFlags::PROTECTED, Modifier::Protected),
    (ModifierFlags::PUBLIC, Modifier::Public),
    (ModifierFlags::STATIC, Modifier::Static),
    (ModifierFlags::STRICT, Modifier::StrictFp),
    (ModifierFlags::TRANSIENT, Modifier::Transient),
    (ModifierFlags::SYNCHRONIZED, Modifier::Synchronized),
    (ModifierFlags::VOLATILE, Modifier::Volatile),
];

impl Modifier {
    /// Keyword for this modifier in the output language.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Abstract => "abstract",
            Self::Final => "final",
            Self::Static => "static",
            Self::Transient => "transient",
            Self::Synchronized => "synchronized",
            Self::Volatile => "volatile",
            Self::StrictFp => "strictfp",
        }
    }

    /// Whether this modifier controls visibility.
    pub fn is_access(&self) -> bool {
        matches!(self, Self::Public | Self::Private | Self::Protected)
    }

    /// The platform flag bit for this modifier.
    pub fn flag(&self) -> ModifierFlags {
        match self {
            Self::Public => ModifierFlags::PUBLIC,
            Self::Private => ModifierFlags::PRIVATE,
            Self::Protected => ModifierFlags::PROTECTED,
            Self::Abstract => ModifierFlags::ABSTRACT,
            Self::Final => ModifierFlags::FINAL,
            Self::Static => ModifierFlags::STATIC,
            Self::Transient => ModifierFlags::TRANSIENT,
            Self::Synchronized => ModifierFlags::SYNCHRONIZED,
            Self::Volatile => ModifierFlags::VOLATILE,
            Self::StrictFp => ModifierFlags::STRICT,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ordered, duplicate-free set of modifiers.
///
/// Equality is order-sensitive: `{public, static}` and `{static, public}`
/// are different sets because renderers emit them in stored order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierSet(IndexSet<Modifier>);

impl ModifierSet {
    /// Create an empty modifier set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a modifier. Returns `false` if it was already present.
    pub fn insert(&mut self, modifier: Modifier) -> bool {
        self.0.insert(modifier)
    }

    /// Remove a modifier, keeping the order of the others.
    pub fn remove(&mut self, modifier: Modifier) -> bool {
        self.0.shift_remove(&modifier)
    }

    /// Replace any visibility modifier with `access`.
    ///
    /// The new visibility is placed first. Modifiers other than public,
    /// protected or private leave the set unchanged.
    pub fn set_access(&mut self, access: Modifier) {
        if !access.is_access() {
            return;
        }
        self.0.retain(|m| !m.is_access());
        self.0.shift_insert(0, access);
    }

    /// Check if a modifier is present.
    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    /// Iterate in stored order.
    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }

    /// Number of modifiers.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no modifiers are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Modifiers as a vector, in stored order.
    pub fn to_vec(&self) -> Vec<Modifier> {
        self.iter().collect()
    }

    /// Encode back into platform flag bits.
    pub fn to_flags(&self) -> ModifierFlags {
        self.iter().fold(ModifierFlags::empty(), |flags, m| flags | m.flag())
    }
}

impl PartialEq for ModifierSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl Eq for ModifierSet {}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Modifier> for ModifierSet {
    fn extend<I: IntoIterator<Item = Modifier>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<const N: usize> From<[Modifier; N]> for ModifierSet {
    fn from(modifiers: [Modifier; N]) -> Self {
        modifiers.into_iter().collect()
    }
}

impl From<&[Modifier]> for ModifierSet {
    fn from(modifiers: &[Modifier]) -> Self {
        modifiers.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a ModifierSet {
    type Item = Modifier;
    type IntoIter = std::iter::Copied<indexmap::set::Iter<'a, Modifier>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

/// Translate platform modifier bits into a modifier set.
///
/// Modifiers are emitted in a fixed order (abstract, final, private,
/// protected, public, static, strictfp, transient, synchronized, volatile)
/// regardless of how the bits were combined. Unknown bits are ignored.
pub fn translate(flags: u32) -> ModifierSet {
    let flags = ModifierFlags::from_bits_truncate(flags);
    TRANSLATION_TABLE
        .iter()
        .filter(|(flag, _)| flags.contains(*flag))
        .map(|(_, modifier)| *modifier)
        .collect()
}
