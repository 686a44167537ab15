//! Temperature, energy and power units.
//!
//! Temperatures are absolute: only `kelvin`, its submultiple and the Rankine scale (`5/9 K`) are provided, since
//! Celsius and Fahrenheit need an offset that a scale factor cannot express.
//!
//! The thermochemical calorie is exactly `4.184 J`; the electronvolt uses the exact elementary charge.

use super::dimensions;
use unifyt_core::{Dimension, UnitEntry};

/// Thermodynamic temperature.
pub const TEMPERATURE: &[UnitEntry] = crate::unit_table!(Dimension::TEMPERATURE;
    ["kelvin", "K", "kelvins"] => 1.0,
    ["millikelvin", "mK"] => 1e-3,
    ["rankine", "degR"] => 5.0 / 9.0,
);

// ─────────────────────────────────────────────────────────────────────────────
// Energy and power
// ─────────────────────────────────────────────────────────────────────────────

/// Energy, work and heat.
pub const ENERGY: &[UnitEntry] = crate::unit_table!(dimensions::ENERGY;
    ["joule", "J", "joules"] => 1.0,
    ["kilojoule", "kJ"] => 1e3,
    ["megajoule", "MJ"] => 1e6,
    ["gigajoule", "GJ"] => 1e9,
    ["calorie", "cal", "calories"] => 4.184,
    ["kilocalorie", "kcal", "Calorie"] => 4_184.0,
    ["electronvolt", "eV"] => 1.602_176_634e-19,
    ["watt_hour", "Wh"] => 3_600.0,
    ["kilowatt_hour", "kWh"] => 3.6e6,
    ["erg", "ergs"] => 1e-7,
    ["british_thermal_unit", "BTU", "btu"] => 1_055.06,
    ["therm", "therms"] => 1.055_06e8,
    ["quad", "quads"] => 1.055_06e18,
    ["ton_tnt"] => 4.184e9,
    ["kiloton_tnt"] => 4.184e12,
    ["megaton_tnt"] => 4.184e15,
    ["rydberg", "Ry"] => 2.179_872_361_103_5e-18,
    ["hartree", "Ha", "E_h"] => 4.359_744_722_207_1e-18,
);

/// Power.
pub const POWER: &[UnitEntry] = crate::unit_table!(dimensions::POWER;
    ["watt", "W", "watts"] => 1.0,
    ["milliwatt", "mW"] => 1e-3,
    ["microwatt", "uW"] => 1e-6,
    ["nanowatt", "nW"] => 1e-9,
    ["kilowatt", "kW", "kilowatts"] => 1e3,
    ["megawatt", "MW", "megawatts"] => 1e6,
    ["gigawatt", "GW"] => 1e9,
    ["terawatt", "TW"] => 1e12,
    ["horsepower", "hp"] => 745.699_871_582_270_2,
    ["metric_horsepower", "PS"] => 735.498_75,
    ["boiler_horsepower"] => 9_809.5,
);

// ─────────────────────────────────────────────────────────────────────────────
// Heat transfer
// ─────────────────────────────────────────────────────────────────────────────

/// Thermal conductivity.
pub const THERMAL_CONDUCTIVITY: &[UnitEntry] = crate::unit_table!(dimensions::THERMAL_CONDUCTIVITY;
    ["watt_per_meter_kelvin", "W_m_K"] => 1.0,
);

/// Heat capacity (entropy).
pub const HEAT_CAPACITY: &[UnitEntry] = crate::unit_table!(dimensions::HEAT_CAPACITY;
    ["joule_per_kelvin", "J_K"] => 1.0,
);

/// Specific heat capacity.
pub const SPECIFIC_HEAT_CAPACITY: &[UnitEntry] = crate::unit_table!(dimensions::SPECIFIC_HEAT_CAPACITY;
    ["joule_per_kilogram_kelvin", "J_kg_K"] => 1.0,
);
