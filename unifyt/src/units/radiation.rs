//! Radioactivity and radiation dose units.
//!
//! Activity shares the dimension of frequency (`s⁻¹`). Absorbed dose (gray) and equivalent dose (sievert) are both
//! `J/kg`; they are kept apart by name only. The legacy `rad` dose unit is omitted because `rad` is the radian.

use super::dimensions;
use unifyt_core::UnitEntry;

/// Activity of a radioactive source.
pub const RADIOACTIVITY: &[UnitEntry] = crate::unit_table!(dimensions::FREQUENCY;
    ["becquerel", "Bq"] => 1.0,
    ["kilobecquerel", "kBq"] => 1e3,
    ["megabecquerel", "MBq"] => 1e6,
    ["gigabecquerel", "GBq"] => 1e9,
    ["curie", "Ci"] => 3.7e10,
    ["millicurie", "mCi"] => 3.7e7,
    ["microcurie", "uCi"] => 3.7e4,
    ["rutherford", "Rd"] => 1e6,
);

/// Absorbed and equivalent dose.
pub const ABSORBED_DOSE: &[UnitEntry] = crate::unit_table!(dimensions::ABSORBED_DOSE;
    ["gray", "Gy"] => 1.0,
    ["milligray", "mGy"] => 1e-3,
    ["sievert", "Sv"] => 1.0,
    ["millisievert", "mSv"] => 1e-3,
    ["microsievert", "uSv"] => 1e-6,
    ["rem"] => 1e-2,
    ["millirem", "mrem"] => 1e-5,
);
