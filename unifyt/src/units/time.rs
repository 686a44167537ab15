//! Time and frequency units.
//!
//! The base unit is the second. `year` is the 365-day calendar year; the decade, century and millennium are Julian
//! (`365.25 d` per year), as is `julian_year`. `month` is one twelfth of a Julian year.

use super::dimensions;
use unifyt_core::{Dimension, UnitEntry};

const DAY: f64 = 86_400.0;
const JULIAN_YEAR: f64 = 365.25 * DAY;

/// Durations.
pub const TIME: &[UnitEntry] = crate::unit_table!(Dimension::TIME;
    ["second", "s", "sec", "seconds"] => 1.0,
    ["millisecond", "ms", "milliseconds"] => 1e-3,
    ["microsecond", "us", "µs", "microseconds"] => 1e-6,
    ["nanosecond", "ns", "nanoseconds"] => 1e-9,
    ["picosecond", "ps", "picoseconds"] => 1e-12,
    ["femtosecond", "fs", "femtoseconds"] => 1e-15,
    ["attosecond", "as", "attoseconds"] => 1e-18,
    ["shake", "shakes"] => 1e-8,
    ["minute", "min", "minutes"] => 60.0,
    ["hour", "h", "hr", "hours"] => 3_600.0,
    ["day", "d", "days"] => DAY,
    ["week", "weeks"] => 7.0 * DAY,
    ["fortnight", "fortnights"] => 14.0 * DAY,
    ["month", "months"] => JULIAN_YEAR / 12.0,
    ["year", "yr", "years"] => 365.0 * DAY,
    ["julian_year", "julian_years"] => JULIAN_YEAR,
    ["decade", "decades"] => 10.0 * JULIAN_YEAR,
    ["century", "centuries"] => 100.0 * JULIAN_YEAR,
    ["millennium", "millennia"] => 1_000.0 * JULIAN_YEAR,
);

/// Frequencies and rotation rates.
pub const FREQUENCY: &[UnitEntry] = crate::unit_table!(dimensions::FREQUENCY;
    ["hertz", "Hz"] => 1.0,
    ["millihertz", "mHz"] => 1e-3,
    ["kilohertz", "kHz"] => 1e3,
    ["megahertz", "MHz"] => 1e6,
    ["gigahertz", "GHz"] => 1e9,
    ["terahertz", "THz"] => 1e12,
    ["rps"] => 1.0,
    ["rpm"] => 1.0 / 60.0,
);
