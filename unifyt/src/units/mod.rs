//! Built-in unit tables grouped by dimension.
//!
//! Every table is a `&'static [UnitEntry]` declared with [`unit_table!`](crate::unit_table). Each entry lists the
//! names a unit answers to (canonical name first) and its scale to the SI base unit of its dimension.
//!
//! ## Modules
//!
//! - [`length`]: length, area and volume (metre is the base).
//! - [`mass`]: mass (kilogram is the base).
//! - [`time`]: time and frequency (second is the base).
//! - [`radiation`]: radioactivity and absorbed/equivalent dose.
//! - [`electromagnetic`]: current, charge, potential, resistance, capacitance, inductance, magnetism.
//! - [`thermodynamic`]: temperature, energy, power and heat transfer.
//! - [`chemistry`]: amount of substance, photometry and related derived units.
//! - [`mechanics`]: velocity, acceleration, force, pressure, flow and fluid properties.
//! - [`dimensionless`]: ratios and plane angles.
//!
//! Only ratio units are listed: offset scales such as degrees Celsius cannot be expressed as a pure factor and are
//! not available.

use unifyt_core::UnitEntry;

pub mod chemistry;
pub mod dimensionless;
pub mod electromagnetic;
pub mod length;
pub mod mass;
pub mod mechanics;
pub mod radiation;
pub mod thermodynamic;
pub mod time;

/// Exponent vectors of the derived dimensions used by the built-in tables.
///
/// Order of the exponents: length, mass, time, current, temperature, amount, luminosity.
pub mod dimensions {
    use unifyt_core::Dimension;

    /// `L²`
    pub const AREA: Dimension = Dimension::new([2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    /// `L³`
    pub const VOLUME: Dimension = Dimension::new([3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    /// `T⁻¹`
    pub const FREQUENCY: Dimension = Dimension::new([0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0]);
    /// `L T⁻¹`
    pub const VELOCITY: Dimension = Dimension::new([1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0]);
    /// `L T⁻²`
    pub const ACCELERATION: Dimension = Dimension::new([1.0, 0.0, -2.0, 0.0, 0.0, 0.0, 0.0]);
    /// `L M T⁻²`
    pub const FORCE: Dimension = Dimension::new([1.0, 1.0, -2.0, 0.0, 0.0, 0.0, 0.0]);
    /// `L² M T⁻²`
    pub const ENERGY: Dimension = Dimension::new([2.0, 1.0, -2.0, 0.0, 0.0, 0.0, 0.0]);
    /// `L² M T⁻³`
    pub const POWER: Dimension = Dimension::new([2.0, 1.0, -3.0, 0.0, 0.0, 0.0, 0.0]);
    /// `L⁻¹ M T⁻²`
    pub const PRESSURE: Dimension = Dimension::new([-1.0, 1.0, -2.0, 0.0, 0.0, 0.0, 0.0]);
    /// `L⁻¹ M T⁻¹`
    pub const DYNAMIC_VISCOSITY: Dimension = Dimension::new([-1.0, 1.0, -1.0, 0.0, 0.0, 0.0, 0.0]);
    /// `L² T⁻¹`
    pub const KINEMATIC_VISCOSITY: Dimension = Dimension::new([2.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0]);
    /// `L⁻³ M`
    pub const DENSITY: Dimension = Dimension::new([-3.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    /// `L³ T⁻¹`
    pub const VOLUMETRIC_FLOW: Dimension = Dimension::new([3.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0]);
    /// Distance per volume, `L⁻²`.
    pub const FUEL_ECONOMY: Dimension = Dimension::new([-2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    /// Volume per distance, `L²`.
    pub const FUEL_CONSUMPTION: Dimension = AREA;
    /// `T I`
    pub const CHARGE: Dimension = Dimension::new([0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
    /// `L² M T⁻³ I⁻¹`
    pub const VOLTAGE: Dimension = Dimension::new([2.0, 1.0, -3.0, -1.0, 0.0, 0.0, 0.0]);
    /// `L² M T⁻³ I⁻²`
    pub const RESISTANCE: Dimension = Dimension::new([2.0, 1.0, -3.0, -2.0, 0.0, 0.0, 0.0]);
    /// `L⁻² M⁻¹ T⁴ I²`
    pub const CAPACITANCE: Dimension = Dimension::new([-2.0, -1.0, 4.0, 2.0, 0.0, 0.0, 0.0]);
    /// `L² M T⁻² I⁻²`
    pub const INDUCTANCE: Dimension = Dimension::new([2.0, 1.0, -2.0, -2.0, 0.0, 0.0, 0.0]);
    /// `L² M T⁻² I⁻¹`
    pub const MAGNETIC_FLUX: Dimension = Dimension::new([2.0, 1.0, -2.0, -1.0, 0.0, 0.0, 0.0]);
    /// `M T⁻² I⁻¹`
    pub const MAGNETIC_FLUX_DENSITY: Dimension = Dimension::new([0.0, 1.0, -2.0, -1.0, 0.0, 0.0, 0.0]);
    /// `L M T⁻³ Θ⁻¹`
    pub const THERMAL_CONDUCTIVITY: Dimension = Dimension::new([1.0, 1.0, -3.0, 0.0, -1.0, 0.0, 0.0]);
    /// `L² M T⁻² Θ⁻¹`
    pub const HEAT_CAPACITY: Dimension = Dimension::new([2.0, 1.0, -2.0, 0.0, -1.0, 0.0, 0.0]);
    /// `L² T⁻² Θ⁻¹`
    pub const SPECIFIC_HEAT_CAPACITY: Dimension = Dimension::new([2.0, 0.0, -2.0, 0.0, -1.0, 0.0, 0.0]);
    /// `L² T⁻²` (gray, sievert)
    pub const ABSORBED_DOSE: Dimension = Dimension::new([2.0, 0.0, -2.0, 0.0, 0.0, 0.0, 0.0]);
    /// `M N⁻¹`
    pub const MOLAR_MASS: Dimension = Dimension::new([0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 0.0]);
    /// `L⁻³ N`
    pub const MOLAR_CONCENTRATION: Dimension = Dimension::new([-3.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    /// `T⁻¹ N`
    pub const CATALYTIC_ACTIVITY: Dimension = Dimension::new([0.0, 0.0, -1.0, 0.0, 0.0, 1.0, 0.0]);
    /// `J` (lumen = candela · steradian)
    pub const LUMINOUS_FLUX: Dimension = Dimension::new([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    /// `L⁻² J`
    pub const ILLUMINANCE: Dimension = Dimension::new([-2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
}

/// Every built-in table, in registration order.
pub const ALL: &[&[UnitEntry]] = &[
    dimensionless::DIMENSIONLESS,
    dimensionless::ANGLE,
    length::LENGTH,
    length::AREA,
    length::VOLUME,
    mass::MASS,
    time::TIME,
    time::FREQUENCY,
    electromagnetic::CURRENT,
    electromagnetic::CHARGE,
    electromagnetic::VOLTAGE,
    electromagnetic::RESISTANCE,
    electromagnetic::CAPACITANCE,
    electromagnetic::INDUCTANCE,
    electromagnetic::MAGNETIC_FLUX,
    electromagnetic::MAGNETIC_FLUX_DENSITY,
    thermodynamic::TEMPERATURE,
    thermodynamic::ENERGY,
    thermodynamic::POWER,
    thermodynamic::THERMAL_CONDUCTIVITY,
    thermodynamic::HEAT_CAPACITY,
    thermodynamic::SPECIFIC_HEAT_CAPACITY,
    chemistry::AMOUNT,
    chemistry::MOLAR_MASS,
    chemistry::MOLAR_CONCENTRATION,
    chemistry::CATALYTIC_ACTIVITY,
    chemistry::LUMINOUS_INTENSITY,
    chemistry::LUMINOUS_FLUX,
    chemistry::ILLUMINANCE,
    mechanics::VELOCITY,
    mechanics::ACCELERATION,
    mechanics::FORCE,
    mechanics::PRESSURE,
    mechanics::DYNAMIC_VISCOSITY,
    mechanics::KINEMATIC_VISCOSITY,
    mechanics::DENSITY,
    mechanics::VOLUMETRIC_FLOW,
    mechanics::FUEL_ECONOMY,
    mechanics::FUEL_CONSUMPTION,
    radiation::RADIOACTIVITY,
    radiation::ABSORBED_DOSE,
];

/// Iterates over every built-in entry.
pub fn entries() -> impl Iterator<Item = &'static UnitEntry> {
    ALL.iter().flat_map(|table| table.iter())
}
