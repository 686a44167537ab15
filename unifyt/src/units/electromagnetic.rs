//! Electromagnetic units.
//!
//! SI units with their common decimal multiples, plus the Gaussian `statampere`/`statvolt` and the CGS `gauss` and
//! `maxwell`.

use super::dimensions;
use unifyt_core::{Dimension, UnitEntry};

/// Electric current.
pub const CURRENT: &[UnitEntry] = crate::unit_table!(Dimension::CURRENT;
    ["ampere", "A", "amperes", "amp", "amps"] => 1.0,
    ["kiloampere", "kA"] => 1e3,
    ["milliampere", "mA"] => 1e-3,
    ["microampere", "uA"] => 1e-6,
    ["nanoampere", "nA"] => 1e-9,
    ["picoampere", "pA"] => 1e-12,
    ["statampere", "statA"] => 3.335_64e-10,
);

/// Electric charge.
pub const CHARGE: &[UnitEntry] = crate::unit_table!(dimensions::CHARGE;
    ["coulomb", "C", "coulombs"] => 1.0,
    ["ampere_hour", "Ah"] => 3_600.0,
    ["milliampere_hour", "mAh"] => 3.6,
);

/// Electric potential.
pub const VOLTAGE: &[UnitEntry] = crate::unit_table!(dimensions::VOLTAGE;
    ["volt", "V", "volts"] => 1.0,
    ["kilovolt", "kV"] => 1e3,
    ["megavolt", "MV"] => 1e6,
    ["millivolt", "mV"] => 1e-3,
    ["microvolt", "uV"] => 1e-6,
    ["nanovolt", "nV"] => 1e-9,
    ["statvolt", "statV"] => 299.792_458,
);

/// Electrical resistance.
pub const RESISTANCE: &[UnitEntry] = crate::unit_table!(dimensions::RESISTANCE;
    ["ohm", "Ω", "ohms"] => 1.0,
    ["kiloohm", "kΩ", "kilohm"] => 1e3,
    ["megaohm", "MΩ", "megohm"] => 1e6,
);

/// Capacitance.
pub const CAPACITANCE: &[UnitEntry] = crate::unit_table!(dimensions::CAPACITANCE;
    ["farad", "F", "farads"] => 1.0,
    ["millifarad", "mF"] => 1e-3,
    ["microfarad", "uF"] => 1e-6,
    ["nanofarad", "nF"] => 1e-9,
    ["picofarad", "pF"] => 1e-12,
);

/// Inductance.
pub const INDUCTANCE: &[UnitEntry] = crate::unit_table!(dimensions::INDUCTANCE;
    ["henry", "H", "henries"] => 1.0,
    ["millihenry", "mH"] => 1e-3,
    ["microhenry", "uH"] => 1e-6,
    ["nanohenry", "nH"] => 1e-9,
);

/// Magnetic flux.
pub const MAGNETIC_FLUX: &[UnitEntry] = crate::unit_table!(dimensions::MAGNETIC_FLUX;
    ["weber", "Wb"] => 1.0,
    ["milliweber", "mWb"] => 1e-3,
    ["maxwell", "Mx"] => 1e-8,
);

/// Magnetic flux density.
pub const MAGNETIC_FLUX_DENSITY: &[UnitEntry] = crate::unit_table!(dimensions::MAGNETIC_FLUX_DENSITY;
    ["tesla", "T"] => 1.0,
    ["millitesla", "mT"] => 1e-3,
    ["microtesla", "uT"] => 1e-6,
    ["nanotesla", "nT"] => 1e-9,
    ["gauss", "G"] => 1e-4,
    ["milligauss", "mG"] => 1e-7,
);
