//! Dimensional analysis and unit-conversion engine.
//!
//! `unifyt-core` provides a small runtime units model:
//!
//! - A [`Dimension`] is a vector of seven exponents, one per SI base quantity.
//! - A [`Unit`] pairs a dimension with a scale to the base unit of that dimension.
//! - A [`Quantity`] is a [`Magnitude`] (scalar or `ndarray` array) tagged with a unit.
//!
//! Unit names are resolved through a [`UnitTable`] supplied by the caller; this crate ships no unit definitions.
//! Most users should depend on `unifyt` (the facade crate), which provides a built-in table and a registry.
//!
//! # What this crate solves
//!
//! - Explicit dimension checks: adding metres to seconds is an error, not a silent bug.
//! - O(1) conversion between any two compatible units through the common base unit.
//! - Compound units (`kilogram * meter / second^2`) built by parsing or by arithmetic.
//! - NumPy-style broadcasting for array magnitudes.
//!
//! # What this crate does not try to solve
//!
//! - Offset units such as degrees Celsius; only ratio scalings are modelled.
//! - Symbolic simplification: `meter * second / second` is simply `meter`, but the engine does not know that a
//!   `joule` is a `newton * meter` beyond the two having equal dimension and scale.
//!
//! # Quick start
//!
//! ```rust
//! use std::collections::HashMap;
//! use unifyt_core::{Dimension, Quantity, UnitDef};
//!
//! let mut table = HashMap::new();
//! table.insert("meter".to_string(), UnitDef::new(Dimension::LENGTH, 1.0));
//! table.insert("kilometer".to_string(), UnitDef::new(Dimension::LENGTH, 1000.0));
//! table.insert("second".to_string(), UnitDef::new(Dimension::TIME, 1.0));
//! table.insert("hour".to_string(), UnitDef::new(Dimension::TIME, 3600.0));
//!
//! let d = Quantity::create(100.0, "meter", &table).unwrap();
//! let t = Quantity::create(10.0, "second", &table).unwrap();
//! let v = (&d / &t).unwrap();
//! let kmh = v.to_spec("kilometer / hour", &table).unwrap();
//! assert!((kmh.value().unwrap() - 36.0).abs() < 1e-9);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for [`Dimension`], [`Unit`], [`Magnitude`] and [`Quantity`]. Units serialize
//!   with their dimension and scale, so they deserialize without a table.
//!
//! # Errors
//!
//! Every fallible operation returns [`UnitResult`]. Results containing NaN fail with [`UnitError::InvalidValue`];
//! infinities and magnitudes beyond [`Limits::current`] fail with [`UnitError::Overflow`].
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod convert;
mod dimension;
mod error;
mod limits;
mod macros;
mod magnitude;
mod parse;
mod quantity;
mod table;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use convert::{convert, convert_value};
pub use dimension::{BaseQuantity, Dimension, BASE_QUANTITY_COUNT};
pub use error::{Operation, UnitError, UnitResult};
pub use limits::Limits;
pub use magnitude::Magnitude;
pub use parse::parse_compound;
pub use quantity::{Quantity, EQ_RELATIVE_TOLERANCE};
pub use table::{UnitDef, UnitEntry, UnitTable};
pub use unit::{Term, Unit, UnitSpec};

#[cfg(test)]
mod tests {
    use super::*;

    const UNITS: &[UnitEntry] = unit_table!(Dimension::LENGTH;
        ["meter", "m"] => 1.0,
        ["kilometer", "km"] => 1_000.0,
    );

    #[test]
    fn reexports_compose() {
        let km = Unit::from_name("km", UNITS).unwrap();
        let q = Quantity::new(2.0, km).unwrap();
        let m = q.to_spec("m", UNITS).unwrap();
        assert_eq!(m.value(), Some(2_000.0));
        assert_eq!(convert_value(1.0, q.unit(), m.unit()).unwrap(), 1_000.0);
    }

    #[test]
    fn table_lookup_through_trait_object() {
        let table: &dyn UnitTable = &UNITS;
        let unit = parse_compound("km^2", table).unwrap();
        assert_eq!(unit.scale(), 1e6);
    }
}
