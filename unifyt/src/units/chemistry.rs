//! Amount of substance and photometric units.

use super::dimensions;
use unifyt_core::{Dimension, UnitEntry};

/// Amount of substance.
pub const AMOUNT: &[UnitEntry] = crate::unit_table!(Dimension::AMOUNT;
    ["mole", "mol", "moles"] => 1.0,
    ["kilomole", "kmol"] => 1e3,
    ["millimole", "mmol"] => 1e-3,
    ["micromole", "umol"] => 1e-6,
);

/// Molar mass.
pub const MOLAR_MASS: &[UnitEntry] = crate::unit_table!(dimensions::MOLAR_MASS;
    ["kilogram_per_mole", "kg_mol"] => 1.0,
    ["gram_per_mole", "g_mol"] => 1e-3,
);

/// Molar concentration; `molar` is one mole per litre.
pub const MOLAR_CONCENTRATION: &[UnitEntry] = crate::unit_table!(dimensions::MOLAR_CONCENTRATION;
    ["molar", "M"] => 1e3,
    ["millimolar", "mM"] => 1.0,
    ["micromolar", "uM"] => 1e-3,
    ["nanomolar", "nM"] => 1e-6,
);

/// Catalytic activity; the enzyme unit is one micromole per minute.
pub const CATALYTIC_ACTIVITY: &[UnitEntry] = crate::unit_table!(dimensions::CATALYTIC_ACTIVITY;
    ["katal", "kat"] => 1.0,
    ["enzyme_unit", "U"] => 1e-6 / 60.0,
);

// ─────────────────────────────────────────────────────────────────────────────
// Photometry
// ─────────────────────────────────────────────────────────────────────────────

/// Luminous intensity.
pub const LUMINOUS_INTENSITY: &[UnitEntry] = crate::unit_table!(Dimension::LUMINOSITY;
    ["candela", "cd", "candelas"] => 1.0,
);

/// Luminous flux.
pub const LUMINOUS_FLUX: &[UnitEntry] = crate::unit_table!(dimensions::LUMINOUS_FLUX;
    ["lumen", "lm", "lumens"] => 1.0,
);

/// Illuminance.
pub const ILLUMINANCE: &[UnitEntry] = crate::unit_table!(dimensions::ILLUMINANCE;
    ["lux", "lx"] => 1.0,
    ["foot_candle", "fc"] => 10.763_910_416_709_722,
    ["phot", "ph"] => 1e4,
);
