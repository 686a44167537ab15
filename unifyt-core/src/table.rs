//! The unit-name table collaborator.
//!
//! The engine never owns unit definitions. It resolves names through a [`UnitTable`], which maps a canonical name to
//! its dimension and its scale relative to the base unit of that dimension:
//!
//! ```text
//! v_base = v_src * src.scale
//! v_dst  = v_base / dst.scale
//! ```
//!
//! Tables are read-only lookups from the engine's point of view. Who builds them, how they are cached and whether
//! they change at runtime is up to the caller.

use crate::dimension::Dimension;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Definition of a named unit: its dimension and scale to the base unit.
///
/// For example, kilometre is `UnitDef { dimension: Dimension::LENGTH, scale: 1000.0 }` because `1 km = 1000 m`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitDef {
    /// Dimension of the unit.
    pub dimension: Dimension,
    /// Factor converting one of this unit into the base unit of its dimension.
    pub scale: f64,
}

impl UnitDef {
    /// Creates a definition.
    #[inline]
    pub const fn new(dimension: Dimension, scale: f64) -> Self {
        Self { dimension, scale }
    }
}

/// Static description of one unit and every name it answers to.
///
/// Entries are `const`-constructible so that unit tables can live in read-only data; see [`unit_table!`].
///
/// [`unit_table!`]: crate::unit_table
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitEntry {
    /// Canonical name first, then abbreviations and plurals.
    pub names: &'static [&'static str],
    /// Dimension of the unit.
    pub dimension: Dimension,
    /// Scale to the base unit.
    pub scale: f64,
}

impl UnitEntry {
    /// Canonical (first) name.
    pub fn canonical_name(&self) -> &'static str {
        self.names.first().copied().unwrap_or("")
    }

    /// The definition shared by every name of this entry.
    #[inline]
    pub const fn def(&self) -> UnitDef {
        UnitDef::new(self.dimension, self.scale)
    }
}

/// Name → definition lookup consumed by the unit parser.
pub trait UnitTable {
    /// Returns the definition of `name`, or `None` when the name is unknown.
    fn lookup(&self, name: &str) -> Option<UnitDef>;

    /// Near-miss names for an unknown `name`, attached to `UnitNotFound` errors.
    fn suggest(&self, _name: &str) -> Vec<String> {
        Vec::new()
    }
}

impl<T: UnitTable + ?Sized> UnitTable for &T {
    fn lookup(&self, name: &str) -> Option<UnitDef> {
        (**self).lookup(name)
    }
    fn suggest(&self, name: &str) -> Vec<String> {
        (**self).suggest(name)
    }
}

impl<T: UnitTable + ?Sized> UnitTable for Box<T> {
    fn lookup(&self, name: &str) -> Option<UnitDef> {
        (**self).lookup(name)
    }
    fn suggest(&self, name: &str) -> Vec<String> {
        (**self).suggest(name)
    }
}

impl<T: UnitTable + ?Sized> UnitTable for Arc<T> {
    fn lookup(&self, name: &str) -> Option<UnitDef> {
        (**self).lookup(name)
    }
    fn suggest(&self, name: &str) -> Vec<String> {
        (**self).suggest(name)
    }
}

impl UnitTable for HashMap<String, UnitDef> {
    fn lookup(&self, name: &str) -> Option<UnitDef> {
        self.get(name).copied()
    }
}

impl UnitTable for BTreeMap<String, UnitDef> {
    fn lookup(&self, name: &str) -> Option<UnitDef> {
        self.get(name).copied()
    }
}

impl UnitTable for [UnitEntry] {
    fn lookup(&self, name: &str) -> Option<UnitDef> {
        self.iter()
            .find(|entry| entry.names.contains(&name))
            .map(UnitEntry::def)
    }
}
