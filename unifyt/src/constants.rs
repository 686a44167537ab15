//! Physical constants (CODATA 2018) and a few astronomical reference values.
//!
//! Constants are stored as plain records (value plus unit expression) and turned into [`Quantity`] values on
//! demand through the global registry. Lookup accepts either the descriptive name or the usual symbol:
//!
//! ```rust
//! use unifyt::constants::get_constant;
//!
//! let c = get_constant("c").unwrap();
//! let same = get_constant("speed_of_light").unwrap();
//! assert_eq!(c, same);
//! assert_eq!(c.unit().to_string(), "meter / second");
//! ```

use crate::error::{ConstantError, ConstantResult};
use crate::registry::UnitRegistry;
use unifyt_core::{Quantity, Unit, UnitResult};

/// A named physical constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    /// Descriptive snake_case name.
    pub name: &'static str,
    /// Conventional symbol.
    pub symbol: &'static str,
    /// Value expressed in `unit`.
    pub value: f64,
    /// Unit expression resolvable through the built-in registry.
    pub unit: &'static str,
}

impl Constant {
    const fn new(name: &'static str, symbol: &'static str, value: f64, unit: &'static str) -> Self {
        Self {
            name,
            symbol,
            value,
            unit,
        }
    }

    /// Resolved unit of the constant.
    pub fn resolved_unit(&self) -> UnitResult<Unit> {
        UnitRegistry::global().unit(self.unit)
    }

    /// The constant as a quantity.
    pub fn quantity(&self) -> UnitResult<Quantity> {
        UnitRegistry::global().quantity(self.value, self.unit)
    }
}

/// Every known constant.
pub const CONSTANTS: &[Constant] = &[
    // Fundamental
    Constant::new("speed_of_light", "c", 299_792_458.0, "meter / second"),
    Constant::new("planck", "h", 6.626_070_15e-34, "joule * second"),
    Constant::new("reduced_planck", "hbar", 1.054_571_817e-34, "joule * second"),
    Constant::new("gravitational_constant", "G", 6.674_30e-11, "meter^3 / kilogram / second^2"),
    Constant::new("elementary_charge", "e_charge", 1.602_176_634e-19, "coulomb"),
    Constant::new("electron_mass", "m_e", 9.109_383_701_5e-31, "kilogram"),
    Constant::new("proton_mass", "m_p", 1.672_621_923_69e-27, "kilogram"),
    Constant::new("neutron_mass", "m_n", 1.674_927_498_04e-27, "kilogram"),
    Constant::new("muon_mass", "m_mu", 1.883_531_627e-28, "kilogram"),
    Constant::new("avogadro", "N_A", 6.022_140_76e23, "1 / mole"),
    Constant::new("boltzmann", "k_B", 1.380_649e-23, "joule / kelvin"),
    Constant::new("gas_constant", "R", 8.314_462_618, "joule / mole / kelvin"),
    Constant::new("stefan_boltzmann", "sigma", 5.670_374_419e-8, "watt / meter^2 / kelvin^4"),
    Constant::new("vacuum_permittivity", "epsilon_0", 8.854_187_812_8e-12, "farad / meter"),
    Constant::new("vacuum_permeability", "mu_0", 1.256_637_062_12e-6, "henry / meter"),
    Constant::new("faraday", "F", 96_485.332_12, "coulomb / mole"),
    Constant::new("standard_gravity", "g_n", 9.806_65, "meter / second^2"),
    Constant::new("standard_atmosphere", "atm", 101_325.0, "pascal"),
    // Atomic
    Constant::new("atomic_mass_unit", "u", 1.660_539_066_60e-27, "kilogram"),
    Constant::new("rydberg", "R_inf", 10_973_731.568_160, "1 / meter"),
    Constant::new("bohr_radius", "a_0", 5.291_772_109_03e-11, "meter"),
    Constant::new("fine_structure", "alpha", 7.297_352_569_3e-3, "dimensionless"),
    Constant::new("compton_wavelength", "lambda_C", 2.426_310_238_67e-12, "meter"),
    Constant::new("electron_radius", "r_e", 2.817_940_326_2e-15, "meter"),
    Constant::new("thomson_cross_section", "sigma_T", 6.652_458_732_1e-29, "meter^2"),
    Constant::new("bohr_magneton", "mu_B", 9.274_010_078_3e-24, "joule / tesla"),
    Constant::new("nuclear_magneton", "mu_N", 5.050_783_746_1e-27, "joule / tesla"),
    // Electromagnetic
    Constant::new("vacuum_impedance", "Z_0", 376.730_313_668, "ohm"),
    Constant::new("conductance_quantum", "G_0", 7.748_091_729e-5, "1 / ohm"),
    Constant::new("josephson", "K_J", 483_597.848_4e9, "hertz / volt"),
    Constant::new("von_klitzing", "R_K", 25_812.807_45, "ohm"),
    Constant::new("flux_quantum", "Phi_0", 2.067_833_848e-15, "weber"),
    // Radiation
    Constant::new("wien", "b_wien", 2.897_771_955e-3, "meter * kelvin"),
    Constant::new("radiation_first", "c1", 3.741_771_852e-16, "watt * meter^2"),
    Constant::new("radiation_second", "c2", 1.438_776_877e-2, "meter * kelvin"),
    // Planck units
    Constant::new("planck_length", "l_P", 1.616_255e-35, "meter"),
    Constant::new("planck_mass", "m_P", 2.176_434e-8, "kilogram"),
    Constant::new("planck_time", "t_P", 5.391_247e-44, "second"),
    Constant::new("planck_temperature", "T_P", 1.416_784e32, "kelvin"),
    // Astronomical
    Constant::new("astronomical_unit", "AU", 1.495_978_707e11, "meter"),
    Constant::new("light_year", "ly", 9.460_730_472_580_8e15, "meter"),
    Constant::new("parsec", "pc", 3.085_677_581_491_367_3e16, "meter"),
    Constant::new("solar_mass", "M_sun", 1.988_47e30, "kilogram"),
    Constant::new("solar_radius", "R_sun", 6.96e8, "meter"),
    Constant::new("solar_luminosity", "L_sun", 3.828e26, "watt"),
    Constant::new("earth_mass", "M_earth", 5.972_17e24, "kilogram"),
    Constant::new("earth_radius", "R_earth", 6.371e6, "meter"),
    Constant::new("cmb_temperature", "T_CMB", 2.725, "kelvin"),
];

/// Finds a constant record by name or symbol.
pub fn find_constant(name: &str) -> Option<&'static Constant> {
    CONSTANTS
        .iter()
        .find(|c| c.name == name || c.symbol == name)
}

/// Returns a constant as a quantity, looked up by name or symbol.
///
/// Unknown names fail with [`ConstantError::NotFound`], suggesting constants whose name starts with the query.
pub fn get_constant(name: &str) -> ConstantResult<Quantity> {
    match find_constant(name) {
        Some(constant) => Ok(constant.quantity()?),
        None => Err(ConstantError::NotFound {
            name: name.to_string(),
            suggestions: CONSTANTS
                .iter()
                .filter(|c| !name.is_empty() && c.name.starts_with(name))
                .take(3)
                .map(|c| c.name.to_string())
                .collect(),
        }),
    }
}

/// Names of every constant, sorted.
pub fn list_constants() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = CONSTANTS.iter().map(|c| c.name).collect();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;
    use unifyt_core::Dimension;

    #[test]
    fn every_constant_resolves() {
        for constant in CONSTANTS {
            let q = constant
                .quantity()
                .unwrap_or_else(|e| panic!("{}: {e}", constant.name));
            assert_eq!(q.value(), Some(constant.value), "{}", constant.name);
        }
    }

    #[test]
    fn names_and_symbols_are_unique() {
        let mut seen = HashSet::new();
        for constant in CONSTANTS {
            assert!(seen.insert(constant.name), "{}", constant.name);
            assert!(seen.insert(constant.symbol), "{}", constant.symbol);
        }
    }

    #[test]
    fn derived_dimensions() {
        let g = get_constant("G").unwrap();
        assert_eq!(
            g.dimension(),
            Dimension::LENGTH * 3.0 - Dimension::MASS - Dimension::TIME * 2.0
        );
        assert!(get_constant("alpha").unwrap().is_dimensionless());
        let c = find_constant("speed_of_light").unwrap();
        assert_eq!(c.symbol, "c");
        assert!(c.resolved_unit().unwrap().is_compatible_with(&UnitRegistry::global().unit("mph").unwrap()));
        assert_eq!(
            get_constant("k_B").unwrap().dimension(),
            get_constant("R").unwrap().dimension() + Dimension::AMOUNT
        );
    }

    #[test]
    fn energy_of_a_photon() {
        let h = get_constant("h").unwrap();
        let c = get_constant("c").unwrap();
        let registry = UnitRegistry::global();
        let wavelength = registry.quantity(500.0, "nanometer").unwrap();
        let energy = (&(&h * &c).unwrap() / &wavelength).unwrap();
        let ev = energy.to_spec("electronvolt", registry).unwrap();
        assert_relative_eq!(ev.value().unwrap(), 2.479_683_969, max_relative = 1e-8);
    }

    #[test]
    fn unknown_constant() {
        let err = get_constant("planck_").unwrap_err();
        assert!(err.to_string().starts_with("physical constant 'planck_'"), "{err}");
        match err {
            ConstantError::NotFound { suggestions, .. } => {
                assert!(suggestions.iter().all(|s| s.starts_with("planck_")));
                assert!(!suggestions.is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn listing_is_sorted() {
        let names = list_constants();
        assert_eq!(names.len(), CONSTANTS.len());
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
        assert!(names.contains(&"boltzmann"));
    }
}
