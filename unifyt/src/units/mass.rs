//! Mass units.
//!
//! The base unit is the kilogram. The avoirdupois pound is exactly `0.45359237 kg`; particle masses are CODATA 2018
//! values and the solar/Earth masses are nominal.

use unifyt_core::{Dimension, UnitEntry};

const POUND: f64 = 0.453_592_37;

/// Masses.
pub const MASS: &[UnitEntry] = crate::unit_table!(Dimension::MASS;
    ["kilogram", "kg", "kilograms"] => 1.0,
    ["gram", "g", "grams"] => 1e-3,
    ["milligram", "mg", "milligrams"] => 1e-6,
    ["microgram", "ug", "µg", "micrograms"] => 1e-9,
    ["tonne", "t", "tonnes", "ton", "tons", "metric_ton"] => 1e3,
    ["pound", "lb", "lbs", "pounds"] => POUND,
    ["ounce", "oz", "ounces"] => POUND / 16.0,
    ["stone", "st"] => POUND * 14.0,
    ["grain", "gr", "grains"] => POUND / 7_000.0,
    ["carat", "ct", "carats"] => 2e-4,
    ["slug", "slugs"] => 14.593_902_937,
    ["atomic_mass_unit", "amu", "u", "dalton", "Da"] => 1.660_539_066_60e-27,
    ["electron_mass", "m_e"] => 9.109_383_701_5e-31,
    ["proton_mass", "m_p"] => 1.672_621_923_69e-27,
    ["neutron_mass", "m_n"] => 1.674_927_498_04e-27,
    ["earth_mass", "M_earth"] => 5.972_17e24,
    ["solar_mass", "M_sun"] => 1.988_47e30,
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use unifyt_core::UnitTable;

    #[test]
    fn avoirdupois() {
        assert_relative_eq!(MASS.lookup("oz").unwrap().scale, 0.028_349_523_125);
        assert_relative_eq!(MASS.lookup("st").unwrap().scale, 6.350_293_18, max_relative = 1e-12);
    }
}
