//! Physical quantities with runtime units.
//!
//! `unifyt` is the user-facing crate in this workspace. It re-exports the engine from `unifyt-core` and adds a unit
//! registry pre-loaded with several hundred built-in units, physical constants, array helpers, JSON records and a
//! TOML configuration layer.
//!
//! A value is a [`Quantity`]: a scalar or `ndarray` magnitude tagged with a [`Unit`]. Units are resolved by name or
//! by compound expression (`"kilogram * meter / second^2"`) through a [`UnitRegistry`]; dimensions are checked at
//! runtime on every operation.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (adding metres to seconds is an error).
//! - Converts between any compatible units, including compound ones built by arithmetic.
//! - Lets applications define their own units and aliases, in code or in a config file.
//!
//! # What this crate does not try to solve
//!
//! - Offset temperature scales (Celsius, Fahrenheit); only ratio units exist.
//! - Compile-time unit checking; every check happens when the operation runs.
//! - Exact arithmetic: magnitudes are `f64`.
//!
//! # Quick start
//!
//! ```rust
//! let distance = unifyt::quantity(100.0, "meter").unwrap();
//! let time = unifyt::quantity(10.0, "second").unwrap();
//!
//! let speed = (&distance / &time).unwrap();
//! let kmh = speed.to(&unifyt::unit("kilometer / hour").unwrap()).unwrap();
//! assert!((kmh.value().unwrap() - 36.0).abs() < 1e-9);
//!
//! // Different dimensions cannot be added.
//! assert!((&distance + &time).is_err());
//! ```
//!
//! Custom units go into a registry of your own:
//!
//! ```rust
//! use unifyt::UnitRegistry;
//!
//! let mut registry = UnitRegistry::with_builtin();
//! registry.define("smoot", "1.7018 meter").unwrap();
//! let bridge = registry.quantity(364.4, "smoot").unwrap();
//! let meters = bridge.to_spec("meter", &registry).unwrap();
//! assert!((meters.value().unwrap() - 620.136).abs() < 1e-2);
//! ```
//!
//! # Modules
//!
//! - [`units`]: built-in unit tables grouped by dimension.
//! - [`registry`]: the [`UnitRegistry`].
//! - [`constants`]: CODATA 2018 constants as quantities.
//! - [`utils`]: `linspace`, reductions and other array helpers.
//! - [`serialization`]: JSON records and files.
//! - [`config`]: TOML configuration for limits and registry contents.
//!
//! # Logging
//!
//! The crate logs through the `log` facade (registry changes at `debug`, conversions at `trace`, configuration
//! fallbacks at `warn`) and never installs a logger itself.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use unifyt_core::*;

/// Declares a `&'static [UnitEntry]`; see [`units`] for examples.
pub use unifyt_core::unit_table;

pub mod config;
pub mod constants;
pub mod error;
pub mod registry;
pub mod serialization;
pub mod units;
pub mod utils;

pub use config::UnifytConfig;
pub use constants::get_constant;
pub use error::{ConfigError, ConstantError, RegistryError, SerializationError};
pub use registry::UnitRegistry;
pub use serialization::QuantityRecord;

/// Resolves a unit expression through the global built-in registry.
#[inline]
pub fn unit(expression: &str) -> UnitResult<Unit> {
    UnitRegistry::global().unit(expression)
}

/// Creates a quantity whose unit is resolved through the global built-in registry.
#[inline]
pub fn quantity<S: UnitSpec>(magnitude: impl Into<Magnitude>, spec: S) -> UnitResult<Quantity> {
    UnitRegistry::global().quantity(magnitude, spec)
}
