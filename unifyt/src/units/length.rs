//! Length, area and volume units.
//!
//! The base unit is the metre. Notes on definitions used here:
//!
//! - The international inch is exactly `0.0254 m`; foot, yard and mile follow from it.
//! - The **astronomical unit** is exactly `149_597_870_700 m` (IAU 2012).
//! - The **parsec** is defined from the au via `pc = au * 648000 / π`.
//! - The **light-year** uses the exact speed of light and one Julian year (`365.25 d`).
//! - Volumes use US customary definitions (`1 gal = 231 in³`).

use super::dimensions;
use core::f64::consts::PI;
use unifyt_core::{Dimension, UnitEntry};

/// Astronomical unit in metres.
pub const AU: f64 = 149_597_870_700.0;
/// Parsec in metres.
pub const PARSEC: f64 = AU * 648_000.0 / PI;
/// Light-year in metres.
pub const LIGHT_YEAR: f64 = 299_792_458.0 * 31_557_600.0;
/// US liquid gallon in cubic metres.
pub const US_GALLON: f64 = 3.785_411_784e-3;

// ─────────────────────────────────────────────────────────────────────────────
// Length
// ─────────────────────────────────────────────────────────────────────────────

/// Lengths.
pub const LENGTH: &[UnitEntry] = crate::unit_table!(Dimension::LENGTH;
    ["meter", "m", "meters", "metre", "metres"] => 1.0,
    ["kilometer", "km", "kilometers"] => 1e3,
    ["centimeter", "cm", "centimeters"] => 1e-2,
    ["millimeter", "mm", "millimeters"] => 1e-3,
    ["micrometer", "um", "µm", "micrometers", "micron"] => 1e-6,
    ["nanometer", "nm", "nanometers"] => 1e-9,
    ["picometer", "pm", "picometers"] => 1e-12,
    ["femtometer", "fm", "fermi"] => 1e-15,
    ["angstrom", "Å", "ångström"] => 1e-10,
    ["inch", "in", "inches"] => 0.0254,
    ["foot", "ft", "feet"] => 0.3048,
    ["yard", "yd", "yards"] => 0.9144,
    ["mile", "mi", "miles"] => 1_609.344,
    ["nautical_mile", "nmi"] => 1_852.0,
    ["fathom", "fathoms"] => 1.8288,
    ["chain", "chains"] => 20.1168,
    ["furlong", "furlongs"] => 201.168,
    ["league", "leagues"] => 4_828.032,
    ["astronomical_unit", "au", "AU"] => AU,
    ["light_year", "ly", "light_years"] => LIGHT_YEAR,
    ["parsec", "pc", "parsecs"] => PARSEC,
    ["kiloparsec", "kpc"] => PARSEC * 1e3,
    ["megaparsec", "Mpc"] => PARSEC * 1e6,
);

// ─────────────────────────────────────────────────────────────────────────────
// Area and volume
// ─────────────────────────────────────────────────────────────────────────────

/// Areas.
pub const AREA: &[UnitEntry] = crate::unit_table!(dimensions::AREA;
    ["square_meter", "m2", "m²"] => 1.0,
    ["square_kilometer", "km2", "km²"] => 1e6,
    ["square_centimeter", "cm2", "cm²"] => 1e-4,
    ["square_foot", "ft2", "sq_ft"] => 0.092_903_04,
    ["hectare", "ha", "hectares"] => 1e4,
    ["acre", "acres"] => 4_046.856_422_4,
);

/// Volumes.
pub const VOLUME: &[UnitEntry] = crate::unit_table!(dimensions::VOLUME;
    ["cubic_meter", "m3", "m³"] => 1.0,
    ["cubic_centimeter", "cm3", "cc"] => 1e-6,
    ["liter", "L", "l", "liters", "litre", "litres"] => 1e-3,
    ["milliliter", "mL", "ml", "milliliters"] => 1e-6,
    ["gallon", "gal", "gallons"] => US_GALLON,
    ["quart", "qt", "quarts"] => US_GALLON / 4.0,
    ["pint", "pt", "pints"] => US_GALLON / 8.0,
    ["cup", "cups"] => US_GALLON / 16.0,
    ["fluid_ounce", "fl_oz"] => US_GALLON / 128.0,
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use unifyt_core::UnitTable;

    #[test]
    fn parsec_in_light_years() {
        assert_relative_eq!(PARSEC / LIGHT_YEAR, 3.261_563_777, max_relative = 1e-9);
        assert_relative_eq!(LENGTH.lookup("pc").unwrap().scale, 3.085_677_581_491_367e16, max_relative = 1e-15);
    }

    #[test]
    fn imperial_chain() {
        let mile = LENGTH.lookup("mile").unwrap().scale;
        let foot = LENGTH.lookup("ft").unwrap().scale;
        assert_relative_eq!(mile / foot, 5_280.0, max_relative = 1e-12);
    }

    #[test]
    fn liter_is_a_cubic_decimeter() {
        assert_eq!(VOLUME.lookup("L").unwrap().scale, 1e-3);
        assert_relative_eq!(VOLUME.lookup("gal").unwrap().scale / VOLUME.lookup("fl_oz").unwrap().scale, 128.0);
    }
}
