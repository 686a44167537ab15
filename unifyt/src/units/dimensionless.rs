//! Dimensionless units: ratios and plane angles.
//!
//! Angles are treated as pure numbers (the radian is `m/m`), so degrees and radians convert into each other and into
//! `dimensionless` freely. Angle scales are derived from `π` instead of rounded decimals.

use core::f64::consts::PI;
use unifyt_core::{Dimension, UnitEntry};

/// Pure numbers and parts-per notation.
pub const DIMENSIONLESS: &[UnitEntry] = crate::unit_table!(Dimension::DIMENSIONLESS;
    ["dimensionless", "unitless"] => 1.0,
    ["percent", "%"] => 1e-2,
    ["ppm"] => 1e-6,
    ["ppb"] => 1e-9,
    ["ppt"] => 1e-12,
);

/// Plane and solid angles.
pub const ANGLE: &[UnitEntry] = crate::unit_table!(Dimension::DIMENSIONLESS;
    ["radian", "rad", "radians"] => 1.0,
    ["degree", "deg", "degrees", "°"] => PI / 180.0,
    ["arcminute", "arcmin", "arcminutes"] => PI / 10_800.0,
    ["arcsecond", "arcsec", "arcseconds"] => PI / 648_000.0,
    ["gradian", "grad", "gon"] => PI / 200.0,
    ["turn", "revolution", "rev"] => 2.0 * PI,
    ["steradian", "sr"] => 1.0,
);
