//! Unit conversion.
//!
//! Conversion is a single multiplication by `source.scale / target.scale`; incompatible dimensions are rejected
//! before any arithmetic happens.

use crate::error::{Operation, UnitResult};
use crate::limits::Limits;
use crate::magnitude::Magnitude;
use crate::quantity::Quantity;
use crate::unit::Unit;

/// Re-expresses `quantity` in `target`.
///
/// Converting a quantity to its own unit returns the magnitude unchanged.
pub fn convert(quantity: &Quantity, target: &Unit) -> UnitResult<Quantity> {
    let factor = quantity.unit().conversion_factor_to(target)?;
    log::trace!("convert {} -> {} (factor {factor})", quantity.unit(), target);
    let magnitude = if factor == 1.0 {
        quantity.magnitude().clone()
    } else {
        quantity.magnitude().map(|v| v * factor)
    };
    Quantity::checked(Operation::Conversion, magnitude, target.clone())
}

/// Converts a bare number from one unit to another.
///
/// ```rust
/// use unifyt_core::{convert_value, Dimension, Unit};
///
/// let mile = Unit::new("mile", Dimension::LENGTH, 1609.344).unwrap();
/// let km = Unit::new("kilometer", Dimension::LENGTH, 1000.0).unwrap();
/// assert!((convert_value(1.0, &mile, &km).unwrap() - 1.609344).abs() < 1e-12);
/// ```
pub fn convert_value(value: f64, from: &Unit, to: &Unit) -> UnitResult<f64> {
    let converted = value * from.conversion_factor_to(to)?;
    Limits::current().check(&Magnitude::Scalar(converted), Operation::Conversion)?;
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use crate::error::UnitError;
    use approx::assert_relative_eq;

    fn unit(name: &str, dimension: Dimension, scale: f64) -> Unit {
        Unit::new(name, dimension, scale).unwrap()
    }

    #[test]
    fn converts_arrays_element_wise() {
        let km = unit("km", Dimension::LENGTH, 1_000.0);
        let m = unit("m", Dimension::LENGTH, 1.0);
        let q = Quantity::new([1.0, 2.5], km).unwrap();
        let out = convert(&q, &m).unwrap();
        assert_eq!(out.magnitude(), &Magnitude::from([1_000.0, 2_500.0]));
        assert_eq!(out.unit(), &m);
    }

    #[test]
    fn rejects_incompatible_target() {
        let m = unit("m", Dimension::LENGTH, 1.0);
        let s = unit("s", Dimension::TIME, 1.0);
        let err = convert(&Quantity::new(1.0, m.clone()).unwrap(), &s).unwrap_err();
        assert!(matches!(err, UnitError::Dimensionality { operation: Operation::Conversion, .. }));
        assert!(convert_value(1.0, &m, &s).is_err());
    }

    #[test]
    fn conversion_overflow_is_reported() {
        let big = unit("big", Dimension::LENGTH, 1e300);
        let small = unit("small", Dimension::LENGTH, 1e-300);
        assert!(matches!(
            convert_value(1.0, &big, &small),
            Err(UnitError::Overflow { operation: Operation::Conversion, .. })
        ));
    }

    #[test]
    fn bare_values() {
        let h = unit("hour", Dimension::TIME, 3_600.0);
        let min = unit("minute", Dimension::TIME, 60.0);
        assert_relative_eq!(convert_value(1.5, &h, &min).unwrap(), 90.0);
    }
}
