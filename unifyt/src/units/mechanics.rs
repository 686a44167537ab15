//! Mechanical units: motion, force, pressure and fluids.

use super::dimensions;
use super::length::US_GALLON;
use unifyt_core::UnitEntry;

const STANDARD_GRAVITY: f64 = 9.806_65;
const POUND_FORCE: f64 = 0.453_592_37 * STANDARD_GRAVITY;
const ATMOSPHERE: f64 = 101_325.0;

// ─────────────────────────────────────────────────────────────────────────────
// Kinematics
// ─────────────────────────────────────────────────────────────────────────────

/// Speeds.
pub const VELOCITY: &[UnitEntry] = crate::unit_table!(dimensions::VELOCITY;
    ["meter_per_second", "mps"] => 1.0,
    ["kilometer_per_hour", "kph"] => 1.0 / 3.6,
    ["mile_per_hour", "mph"] => 0.447_04,
    ["knot", "kt", "kn", "knots"] => 1_852.0 / 3_600.0,
    ["mach"] => 343.0,
);

/// Accelerations.
pub const ACCELERATION: &[UnitEntry] = crate::unit_table!(dimensions::ACCELERATION;
    ["standard_gravity", "g0", "g_n"] => STANDARD_GRAVITY,
    ["galileo", "Gal"] => 1e-2,
);

// ─────────────────────────────────────────────────────────────────────────────
// Force and pressure
// ─────────────────────────────────────────────────────────────────────────────

/// Forces.
pub const FORCE: &[UnitEntry] = crate::unit_table!(dimensions::FORCE;
    ["newton", "N", "newtons"] => 1.0,
    ["kilonewton", "kN"] => 1e3,
    ["meganewton", "MN"] => 1e6,
    ["dyne", "dyn"] => 1e-5,
    ["kilogram_force", "kgf"] => STANDARD_GRAVITY,
    ["gram_force", "gf"] => STANDARD_GRAVITY * 1e-3,
    ["ton_force", "tf"] => STANDARD_GRAVITY * 1e3,
    ["pound_force", "lbf"] => POUND_FORCE,
    ["poundal", "pdl"] => 0.138_254_954_376,
    ["kip", "kips"] => POUND_FORCE * 1e3,
);

/// Pressures and stresses.
pub const PRESSURE: &[UnitEntry] = crate::unit_table!(dimensions::PRESSURE;
    ["pascal", "Pa"] => 1.0,
    ["kilopascal", "kPa"] => 1e3,
    ["megapascal", "MPa"] => 1e6,
    ["gigapascal", "GPa"] => 1e9,
    ["bar", "bars"] => 1e5,
    ["millibar", "mbar"] => 1e2,
    ["microbar", "ubar"] => 0.1,
    ["barye", "Ba"] => 0.1,
    ["atmosphere", "atm"] => ATMOSPHERE,
    ["technical_atmosphere", "at"] => 98_066.5,
    ["torr", "Torr"] => ATMOSPHERE / 760.0,
    ["millimeter_mercury", "mmHg"] => 133.322_387_415,
    ["inch_mercury", "inHg"] => 3_386.389,
    ["pound_per_square_inch", "psi", "PSI"] => POUND_FORCE / (0.0254 * 0.0254),
);

// ─────────────────────────────────────────────────────────────────────────────
// Fluids
// ─────────────────────────────────────────────────────────────────────────────

/// Dynamic viscosity.
pub const DYNAMIC_VISCOSITY: &[UnitEntry] = crate::unit_table!(dimensions::DYNAMIC_VISCOSITY;
    ["pascal_second", "Pa_s"] => 1.0,
    ["poise", "P"] => 0.1,
    ["centipoise", "cP"] => 1e-3,
);

/// Kinematic viscosity.
pub const KINEMATIC_VISCOSITY: &[UnitEntry] = crate::unit_table!(dimensions::KINEMATIC_VISCOSITY;
    ["stokes", "St"] => 1e-4,
    ["centistokes", "cSt"] => 1e-6,
);

/// Mass density.
pub const DENSITY: &[UnitEntry] = crate::unit_table!(dimensions::DENSITY;
    ["kilogram_per_cubic_meter", "kg_m3"] => 1.0,
    ["gram_per_cubic_centimeter", "g_cm3"] => 1e3,
    ["gram_per_liter", "g_L"] => 1.0,
);

/// Volumetric flow rate.
pub const VOLUMETRIC_FLOW: &[UnitEntry] = crate::unit_table!(dimensions::VOLUMETRIC_FLOW;
    ["cubic_meter_per_second", "m3_s"] => 1.0,
    ["liter_per_second", "L_s"] => 1e-3,
    ["liter_per_minute", "L_min"] => 1e-3 / 60.0,
    ["gallon_per_minute", "gpm"] => US_GALLON / 60.0,
);

/// Fuel economy (distance per volume).
pub const FUEL_ECONOMY: &[UnitEntry] = crate::unit_table!(dimensions::FUEL_ECONOMY;
    ["kilometer_per_liter", "km_L"] => 1e3 / 1e-3,
    ["mile_per_gallon", "mpg"] => 1_609.344 / US_GALLON,
);

/// Fuel consumption (volume per distance).
pub const FUEL_CONSUMPTION: &[UnitEntry] = crate::unit_table!(dimensions::FUEL_CONSUMPTION;
    ["liter_per_100km", "L_100km"] => 1e-3 / 1e5,
);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use unifyt_core::UnitTable;

    #[test]
    fn derived_force_and_pressure() {
        assert_relative_eq!(FORCE.lookup("lbf").unwrap().scale, 4.448_221_615_260_5, max_relative = 1e-12);
        assert_relative_eq!(PRESSURE.lookup("psi").unwrap().scale, 6_894.757_293_168, max_relative = 1e-12);
        assert_relative_eq!(PRESSURE.lookup("Torr").unwrap().scale, 133.322_368_421, max_relative = 1e-10);
    }

    #[test]
    fn knot_is_a_nautical_mile_per_hour() {
        assert_relative_eq!(VELOCITY.lookup("kn").unwrap().scale, 0.514_444_444, max_relative = 1e-9);
    }

    #[test]
    fn fuel_economy() {
        assert_relative_eq!(FUEL_ECONOMY.lookup("mpg").unwrap().scale, 425_143.7, max_relative = 1e-6);
    }
}
