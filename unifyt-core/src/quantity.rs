//! Quantity type and its arithmetic.

use crate::convert::convert;
use crate::dimension::Dimension;
use crate::error::{Operation, UnitResult};
use crate::limits::Limits;
use crate::magnitude::Magnitude;
use crate::table::UnitTable;
use crate::unit::{power, Unit, UnitSpec};
use core::fmt::{Display, Formatter};
use core::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Relative tolerance of `==` between quantities whose units differ.
pub const EQ_RELATIVE_TOLERANCE: f64 = 1e-12;

/// A magnitude tagged with a unit.
///
/// Quantities are immutable values: every operation returns a new quantity or an error. All fallible results pass
/// through [`Limits::current`], so a NaN or an overflowing magnitude can never escape an operation.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use unifyt_core::{Dimension, Quantity, UnitDef};
///
/// let mut table = HashMap::new();
/// table.insert("meter".to_string(), UnitDef::new(Dimension::LENGTH, 1.0));
/// table.insert("kilometer".to_string(), UnitDef::new(Dimension::LENGTH, 1000.0));
///
/// let a = Quantity::create(1.0, "kilometer", &table).unwrap();
/// let b = Quantity::create(500.0, "meter", &table).unwrap();
/// let sum = (&a + &b).unwrap();
/// assert_eq!(sum.value(), Some(1.5));
/// assert_eq!(sum.to_string(), "1.5 kilometer");
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawQuantity"))]
pub struct Quantity {
    #[cfg_attr(feature = "serde", serde(rename = "value"))]
    magnitude: Magnitude,
    unit: Unit,
}

impl Quantity {
    /// Creates a quantity from a magnitude and an already resolved unit.
    ///
    /// ```rust
    /// use unifyt_core::{Dimension, Quantity, Unit, UnitError};
    ///
    /// let meter = Unit::new("meter", Dimension::LENGTH, 1.0).unwrap();
    /// assert!(Quantity::new([1.0, 2.0], meter.clone()).is_ok());
    /// assert!(matches!(Quantity::new(f64::NAN, meter), Err(UnitError::InvalidValue { .. })));
    /// ```
    pub fn new(magnitude: impl Into<Magnitude>, unit: Unit) -> UnitResult<Self> {
        Self::checked(Operation::Construction, magnitude.into(), unit)
    }

    /// Creates a quantity from a magnitude and a unit spec (a [`Unit`] or an expression resolved through `table`).
    pub fn create<S, T>(magnitude: impl Into<Magnitude>, spec: S, table: &T) -> UnitResult<Self>
    where
        S: UnitSpec,
        T: UnitTable + ?Sized,
    {
        let unit = spec.resolve(table)?;
        Self::new(magnitude, unit)
    }

    /// A pure number.
    pub fn dimensionless(magnitude: impl Into<Magnitude>) -> UnitResult<Self> {
        Self::new(magnitude, Unit::dimensionless())
    }

    pub(crate) fn checked(operation: Operation, magnitude: Magnitude, unit: Unit) -> UnitResult<Self> {
        Limits::current().check(&magnitude, operation)?;
        Ok(Self { magnitude, unit })
    }

    /// Numeric payload.
    #[inline]
    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    /// The scalar value, or `None` for array quantities.
    #[inline]
    pub fn value(&self) -> Option<f64> {
        self.magnitude.as_scalar()
    }

    /// Unit of the quantity.
    #[inline]
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Dimension of the unit.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    /// `true` when the unit has no dimension.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_dimensionless()
    }

    /// Shape of the magnitude (`[]` for scalars).
    #[inline]
    pub fn shape(&self) -> Vec<usize> {
        self.magnitude.shape()
    }

    /// Splits the quantity into magnitude and unit.
    #[inline]
    pub fn into_parts(self) -> (Magnitude, Unit) {
        (self.magnitude, self.unit)
    }

    /// Checks the magnitude against explicit limits instead of the installed ones.
    pub fn validate_with(&self, limits: &Limits) -> UnitResult<()> {
        limits.check(&self.magnitude, Operation::Construction)
    }

    /// `true` when both quantities have the same dimension.
    #[inline]
    pub fn is_compatible_with(&self, other: &Quantity) -> bool {
        self.unit.is_compatible_with(&other.unit)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────

    /// Converts to `target`, rescaling the magnitude.
    ///
    /// ```rust
    /// use unifyt_core::{Dimension, Quantity, Unit};
    ///
    /// let km = Unit::new("kilometer", Dimension::LENGTH, 1000.0).unwrap();
    /// let m = Unit::new("meter", Dimension::LENGTH, 1.0).unwrap();
    /// let q = Quantity::new(1.0, km).unwrap();
    /// assert_eq!(q.to(&m).unwrap().value(), Some(1000.0));
    /// ```
    #[inline]
    pub fn to(&self, target: &Unit) -> UnitResult<Quantity> {
        convert(self, target)
    }

    /// Converts to a unit spec resolved through `table`.
    pub fn to_spec<S, T>(&self, spec: S, table: &T) -> UnitResult<Quantity>
    where
        S: UnitSpec,
        T: UnitTable + ?Sized,
    {
        let target = spec.resolve(table)?;
        convert(self, &target)
    }

    /// Converts to the SI base units of the quantity's dimension.
    pub fn to_base_units(&self) -> UnitResult<Quantity> {
        convert(self, &self.unit.to_base_units())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    /// Sum in the unit of `self`; `other` is converted first.
    pub fn add(&self, other: &Quantity) -> UnitResult<Quantity> {
        self.combine_aligned(other, Operation::Addition, |a, b| a + b)
    }

    /// Difference in the unit of `self`; `other` is converted first.
    pub fn sub(&self, other: &Quantity) -> UnitResult<Quantity> {
        self.combine_aligned(other, Operation::Subtraction, |a, b| a - b)
    }

    /// Product; the unit is the product of the units.
    ///
    /// ```rust
    /// use unifyt_core::{Dimension, Quantity, Unit};
    ///
    /// let m = Unit::new("meter", Dimension::LENGTH, 1.0).unwrap();
    /// let side = Quantity::new(3.0, m).unwrap();
    /// let area = side.mul(&side).unwrap();
    /// assert_eq!(area.value(), Some(9.0));
    /// assert_eq!(area.unit().to_string(), "meter^2");
    /// ```
    pub fn mul(&self, other: &Quantity) -> UnitResult<Quantity> {
        let unit = self.unit.multiply(&other.unit)?;
        let magnitude = self
            .magnitude
            .zip_with(&other.magnitude, Operation::Multiplication, |a, b| a * b)?;
        Self::checked(Operation::Multiplication, magnitude, unit)
    }

    /// Quotient; the unit is the quotient of the units.
    pub fn div(&self, other: &Quantity) -> UnitResult<Quantity> {
        let unit = self.unit.divide(&other.unit)?;
        let magnitude = self
            .magnitude
            .zip_with(&other.magnitude, Operation::Division, |a, b| a / b)?;
        Self::checked(Operation::Division, magnitude, unit)
    }

    /// Raises magnitude and unit to the power `n`.
    pub fn pow(&self, n: f64) -> UnitResult<Quantity> {
        let unit = self.unit.pow(n)?;
        let magnitude = self.magnitude.map(|v| power(v, n));
        Self::checked(Operation::Exponentiation, magnitude, unit)
    }

    /// Square root; negative magnitudes fail with [`UnitError::InvalidValue`](crate::UnitError::InvalidValue).
    #[inline]
    pub fn sqrt(&self) -> UnitResult<Quantity> {
        self.pow(0.5)
    }

    /// `1 / self`, with unit `dimensionless / unit`.
    pub fn recip(&self) -> UnitResult<Quantity> {
        let unit = self.unit.recip()?;
        Self::checked(Operation::Division, self.magnitude.map(|v| 1.0 / v), unit)
    }

    /// Multiplies the magnitude by a plain number, keeping the unit.
    pub fn mul_scalar(&self, factor: f64) -> UnitResult<Quantity> {
        Self::checked(
            Operation::Multiplication,
            self.magnitude.map(|v| v * factor),
            self.unit.clone(),
        )
    }

    /// Divides the magnitude by a plain number, keeping the unit.
    pub fn div_scalar(&self, divisor: f64) -> UnitResult<Quantity> {
        Self::checked(
            Operation::Division,
            self.magnitude.map(|v| v / divisor),
            self.unit.clone(),
        )
    }

    /// Adds a plain number to a dimensionless quantity, in the quantity's own unit.
    ///
    /// Dimensioned quantities fail with [`UnitError::Dimensionality`](crate::UnitError::Dimensionality).
    pub fn add_scalar(&self, term: f64) -> UnitResult<Quantity> {
        self.shift(term, Operation::Addition)
    }

    /// Subtracts a plain number from a dimensionless quantity, in the quantity's own unit.
    pub fn sub_scalar(&self, term: f64) -> UnitResult<Quantity> {
        self.shift(-term, Operation::Subtraction)
    }

    fn shift(&self, term: f64, operation: Operation) -> UnitResult<Quantity> {
        if !self.is_dimensionless() {
            return Err(self.unit.mismatch(&Unit::dimensionless(), operation));
        }
        Self::checked(operation, self.magnitude.map(|v| v + term), self.unit.clone())
    }

    /// Negated magnitude, same unit.
    pub fn neg(&self) -> Quantity {
        Quantity {
            magnitude: self.magnitude.map(|v| -v),
            unit: self.unit.clone(),
        }
    }

    /// Absolute magnitude, same unit.
    pub fn abs(&self) -> Quantity {
        Quantity {
            magnitude: self.magnitude.map(f64::abs),
            unit: self.unit.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Ordering
    // ─────────────────────────────────────────────────────────────────────────

    /// `self < other` for every broadcast element pair.
    ///
    /// ```rust
    /// use unifyt_core::{Dimension, Quantity, Unit};
    ///
    /// let km = Unit::new("kilometer", Dimension::LENGTH, 1000.0).unwrap();
    /// let m = Unit::new("meter", Dimension::LENGTH, 1.0).unwrap();
    /// let s = Unit::new("second", Dimension::TIME, 1.0).unwrap();
    ///
    /// let a = Quantity::new(1.0, km).unwrap();
    /// let b = Quantity::new(1500.0, m).unwrap();
    /// assert!(a.try_lt(&b).unwrap());
    /// assert!(a.try_lt(&Quantity::new(1.0, s).unwrap()).is_err());
    /// ```
    pub fn try_lt(&self, other: &Quantity) -> UnitResult<bool> {
        self.compare(other, |a, b| a < b)
    }

    /// `self <= other` for every element pair; equal within [`EQ_RELATIVE_TOLERANCE`] counts.
    pub fn try_le(&self, other: &Quantity) -> UnitResult<bool> {
        self.compare(other, |a, b| a < b || close(a, b))
    }

    /// `self > other` for every broadcast element pair.
    pub fn try_gt(&self, other: &Quantity) -> UnitResult<bool> {
        self.compare(other, |a, b| a > b)
    }

    /// `self >= other` for every element pair; equal within [`EQ_RELATIVE_TOLERANCE`] counts.
    pub fn try_ge(&self, other: &Quantity) -> UnitResult<bool> {
        self.compare(other, |a, b| a > b || close(a, b))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Factor bringing `other`'s magnitude into `self`'s unit.
    fn alignment_factor(&self, other: &Quantity, operation: Operation) -> UnitResult<f64> {
        if !self.unit.is_compatible_with(&other.unit) {
            return Err(self.unit.mismatch(&other.unit, operation));
        }
        if self.unit == other.unit {
            Ok(1.0)
        } else {
            Ok(other.unit.scale() / self.unit.scale())
        }
    }

    fn combine_aligned(
        &self,
        other: &Quantity,
        operation: Operation,
        f: impl Fn(f64, f64) -> f64,
    ) -> UnitResult<Quantity> {
        let factor = self.alignment_factor(other, operation)?;
        let magnitude = self
            .magnitude
            .zip_with(&other.magnitude, operation, |a, b| f(a, b * factor))?;
        Self::checked(operation, magnitude, self.unit.clone())
    }

    fn compare(&self, other: &Quantity, pred: impl Fn(f64, f64) -> bool) -> UnitResult<bool> {
        let factor = self.alignment_factor(other, Operation::Comparison)?;
        self.magnitude
            .all_pairs(&other.magnitude, Operation::Comparison, |a, b| pred(a, b * factor))
    }
}

pub(crate) fn close(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() <= EQ_RELATIVE_TOLERANCE * a.abs().max(b.abs())
}

/// Total equality: incompatible units or unbroadcastable shapes compare unequal.
///
/// Identical units compare magnitudes exactly; otherwise `other` is converted into `self`'s unit and compared with a
/// relative tolerance of [`EQ_RELATIVE_TOLERANCE`].
impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        let Ok(factor) = self.alignment_factor(other, Operation::Comparison) else {
            return false;
        };
        let result = if factor == 1.0 {
            self.magnitude
                .all_pairs(&other.magnitude, Operation::Comparison, |a, b| a == b)
        } else {
            self.magnitude
                .all_pairs(&other.magnitude, Operation::Comparison, |a, b| {
                    close(a, b * factor)
                })
        };
        result.unwrap_or(false)
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&self.magnitude, f)?;
        write!(f, " {}", self.unit)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator overloads
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! quantity_binop {
    ($trait:ident, $method:ident) => {
        impl $trait<&Quantity> for &Quantity {
            type Output = UnitResult<Quantity>;
            #[inline]
            fn $method(self, rhs: &Quantity) -> Self::Output {
                Quantity::$method(self, rhs)
            }
        }

        impl $trait<Quantity> for Quantity {
            type Output = UnitResult<Quantity>;
            #[inline]
            fn $method(self, rhs: Quantity) -> Self::Output {
                Quantity::$method(&self, &rhs)
            }
        }

        impl $trait<&Quantity> for Quantity {
            type Output = UnitResult<Quantity>;
            #[inline]
            fn $method(self, rhs: &Quantity) -> Self::Output {
                Quantity::$method(&self, rhs)
            }
        }

        impl $trait<Quantity> for &Quantity {
            type Output = UnitResult<Quantity>;
            #[inline]
            fn $method(self, rhs: Quantity) -> Self::Output {
                Quantity::$method(self, &rhs)
            }
        }
    };
}

quantity_binop!(Add, add);
quantity_binop!(Sub, sub);
quantity_binop!(Mul, mul);
quantity_binop!(Div, div);

impl Mul<f64> for &Quantity {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl Mul<f64> for Quantity {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        self.mul_scalar(rhs)
    }
}

impl Mul<Quantity> for f64 {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn mul(self, rhs: Quantity) -> Self::Output {
        rhs.mul_scalar(self)
    }
}

impl Mul<&Quantity> for f64 {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn mul(self, rhs: &Quantity) -> Self::Output {
        rhs.mul_scalar(self)
    }
}

impl Div<f64> for &Quantity {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.div_scalar(rhs)
    }
}

impl Div<f64> for Quantity {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        self.div_scalar(rhs)
    }
}

impl Add<f64> for &Quantity {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        self.add_scalar(rhs)
    }
}

impl Add<f64> for Quantity {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        self.add_scalar(rhs)
    }
}

impl Add<Quantity> for f64 {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn add(self, rhs: Quantity) -> Self::Output {
        rhs.add_scalar(self)
    }
}

impl Add<&Quantity> for f64 {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn add(self, rhs: &Quantity) -> Self::Output {
        rhs.add_scalar(self)
    }
}

impl Sub<f64> for &Quantity {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        self.sub_scalar(rhs)
    }
}

impl Sub<f64> for Quantity {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        self.sub_scalar(rhs)
    }
}

impl Sub<Quantity> for f64 {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn sub(self, rhs: Quantity) -> Self::Output {
        rhs.neg().add_scalar(self)
    }
}

impl Sub<&Quantity> for f64 {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn sub(self, rhs: &Quantity) -> Self::Output {
        rhs.neg().add_scalar(self)
    }
}

impl Div<Quantity> for f64 {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn div(self, rhs: Quantity) -> Self::Output {
        rhs.recip()?.mul_scalar(self)
    }
}

impl Div<&Quantity> for f64 {
    type Output = UnitResult<Quantity>;
    #[inline]
    fn div(self, rhs: &Quantity) -> Self::Output {
        rhs.recip()?.mul_scalar(self)
    }
}

impl Neg for Quantity {
    type Output = Quantity;
    #[inline]
    fn neg(self) -> Self::Output {
        Quantity::neg(&self)
    }
}

impl Neg for &Quantity {
    type Output = Quantity;
    #[inline]
    fn neg(self) -> Self::Output {
        Quantity::neg(self)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawQuantity {
    value: Magnitude,
    unit: Unit,
}

#[cfg(feature = "serde")]
impl TryFrom<RawQuantity> for Quantity {
    type Error = crate::error::UnitError;

    fn try_from(raw: RawQuantity) -> Result<Self, Self::Error> {
        Quantity::new(raw.value, raw.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnitError;
    use crate::table::UnitEntry;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn table() -> Vec<UnitEntry> {
        let mut entries = crate::unit_table!(Dimension::LENGTH;
            ["meter", "m"] => 1.0,
            ["kilometer", "km"] => 1_000.0,
        )
        .to_vec();
        entries.extend_from_slice(crate::unit_table!(Dimension::TIME;
            ["second", "s"] => 1.0,
            ["hour", "h"] => 3_600.0,
        ));
        entries
    }

    fn q(magnitude: impl Into<Magnitude>, unit: &str) -> Quantity {
        Quantity::create(magnitude, unit, table().as_slice()).unwrap()
    }

    fn unit(expr: &str) -> Unit {
        Unit::parse(expr, table().as_slice()).unwrap()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn construction_guards() {
        let m = unit("meter");
        assert!(matches!(
            Quantity::new(f64::NAN, m.clone()),
            Err(UnitError::InvalidValue { operation: Operation::Construction, .. })
        ));
        assert!(matches!(
            Quantity::new(f64::INFINITY, m.clone()),
            Err(UnitError::Overflow { .. })
        ));
        assert!(Quantity::new([1.0, 2.0, 3.0], m).is_ok());
    }

    #[test]
    fn create_resolves_expressions() {
        let v = q(5.0, "km / h");
        assert_eq!(v.dimension(), Dimension::LENGTH - Dimension::TIME);
        assert!(matches!(
            Quantity::create(1.0, "parsec", table().as_slice()),
            Err(UnitError::UnitNotFound { .. })
        ));
    }

    #[test]
    fn accessors_and_parts() {
        let a = q([1.0, 2.0], "m");
        assert_eq!(a.value(), None);
        assert_eq!(a.shape(), vec![2]);
        let (magnitude, unit) = a.into_parts();
        assert_eq!(magnitude, Magnitude::from([1.0, 2.0]));
        assert_eq!(unit.to_string(), "m");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn kilometer_to_meter() {
        let m = q(1.0, "kilometer").to(&unit("meter")).unwrap();
        assert_eq!(m.value(), Some(1000.0));
        assert_eq!(m.unit().to_string(), "meter");
    }

    #[test]
    fn conversion_to_own_unit_is_identity() {
        let a = q([1.5, -2.25, 1e10], "km / h");
        let b = a.to(a.unit()).unwrap();
        assert_eq!(a.magnitude(), b.magnitude());
    }

    #[test]
    fn incompatible_conversion_fails() {
        let err = q(1.0, "meter").to(&unit("second")).unwrap_err();
        assert_eq!(err.operation(), Some(Operation::Conversion));
    }

    #[test]
    fn to_base_units() {
        let v = q(36.0, "km / h").to_base_units().unwrap();
        assert_relative_eq!(v.value().unwrap(), 10.0, max_relative = 1e-12);
        assert_eq!(v.unit().to_string(), "meter / second");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn addition_keeps_left_unit() {
        let sum = (q(1.0, "kilometer") + q(500.0, "meter")).unwrap();
        assert_relative_eq!(sum.value().unwrap(), 1.5);
        assert_eq!(sum.unit().to_string(), "kilometer");

        let sum = (q(500.0, "meter") + q(1.0, "kilometer")).unwrap();
        assert_relative_eq!(sum.value().unwrap(), 1500.0);
        assert_eq!(sum.unit().to_string(), "meter");
    }

    #[test]
    fn addition_of_incompatible_units_fails() {
        let err = (q(1.0, "meter") + q(1.0, "second")).unwrap_err();
        match err {
            UnitError::Dimensionality { operation, left, right, .. } => {
                assert_eq!(operation, Operation::Addition);
                assert_eq!(left, "meter");
                assert_eq!(right, "second");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn subtraction() {
        let d = (&q(2.0, "km") - &q(250.0, "m")).unwrap();
        assert_relative_eq!(d.value().unwrap(), 1.75);
    }

    #[test]
    fn division_builds_velocity() {
        let v = (q(10.0, "meter") / q(2.0, "second")).unwrap();
        assert_eq!(v.value(), Some(5.0));
        assert!(v.unit().is_compatible_with(&unit("meter/second")));
    }

    #[test]
    fn velocity_in_kilometers_per_hour() {
        let v = (q(100.0, "meter") / q(10.0, "second")).unwrap();
        assert_eq!(v.value(), Some(10.0));
        let kmh = v.to(&unit("kilometer/hour")).unwrap();
        assert_relative_eq!(kmh.value().unwrap(), 36.0, max_relative = 1e-12);
    }

    #[test]
    fn power_squares_magnitude_and_unit() {
        let area = q(3.0, "meter").pow(2.0).unwrap();
        assert_eq!(area.value(), Some(9.0));
        assert_eq!(area.dimension().exponent(crate::BaseQuantity::Length), 2.0);
        let side = area.sqrt().unwrap();
        assert_eq!(side.value(), Some(3.0));
        assert_eq!(side.dimension(), Dimension::LENGTH);
    }

    #[test]
    fn sqrt_of_negative_is_invalid() {
        assert!(matches!(
            q(-4.0, "m").pow(2.0).unwrap().neg().sqrt(),
            Err(UnitError::InvalidValue { operation: Operation::Exponentiation, .. })
        ));
    }

    #[test]
    fn division_by_zero_overflows() {
        assert!(matches!(
            q(1.0, "m") / q(0.0, "s"),
            Err(UnitError::Overflow { operation: Operation::Division, .. })
        ));
        assert!(matches!(
            q(0.0, "m") / q(0.0, "s"),
            Err(UnitError::InvalidValue { operation: Operation::Division, .. })
        ));
    }

    #[test]
    fn scalar_operators_keep_unit() {
        let d = q(2.0, "km");
        assert_eq!((&d * 3.0).unwrap().value(), Some(6.0));
        assert_eq!((3.0 * &d).unwrap().value(), Some(6.0));
        assert_eq!((&d / 4.0).unwrap().value(), Some(0.5));
        assert_eq!((d / 4.0).unwrap().unit().to_string(), "km");
    }

    #[test]
    fn plain_numbers_add_to_dimensionless_only() {
        let ratio = Quantity::dimensionless(0.25).unwrap();
        assert_eq!((&ratio + 1.0).unwrap().value(), Some(1.25));
        assert_eq!((1.0 + &ratio).unwrap().value(), Some(1.25));
        assert_eq!((&ratio - 1.0).unwrap().value(), Some(-0.75));
        assert_eq!((1.0 - ratio).unwrap().value(), Some(0.75));

        let d = q(2.0, "km");
        for result in [&d + 1.0, 1.0 + &d, &d - 1.0, 1.0 - &d] {
            assert!(matches!(
                result,
                Err(UnitError::Dimensionality { ref right, .. }) if right == "dimensionless"
            ));
        }
        assert_eq!(d.sub_scalar(1.0).unwrap_err().operation(), Some(Operation::Subtraction));
    }

    #[test]
    fn number_divided_by_quantity() {
        let t = q(4.0, "s");
        let f = (2.0 / &t).unwrap();
        assert_eq!(f.value(), Some(0.5));
        assert_eq!(f.unit().to_string(), "1 / s");
        assert_eq!(f.dimension(), -Dimension::TIME);
        assert!(matches!(1.0 / q(0.0, "s"), Err(UnitError::Overflow { .. })));
    }

    #[test]
    fn negation_absolute_and_reciprocal() {
        let t = q(-4.0, "s");
        assert_eq!((-&t).value(), Some(4.0));
        assert_eq!(t.abs().value(), Some(4.0));
        let f = t.recip().unwrap();
        assert_eq!(f.value(), Some(-0.25));
        assert_eq!(f.unit().to_string(), "1 / s");
    }

    #[test]
    fn array_arithmetic_broadcasts() {
        let d = q([1.0, 2.0, 3.0], "km");
        let t = q(2.0, "h");
        let v = (&d / &t).unwrap();
        assert_eq!(v.magnitude(), &Magnitude::from([0.5, 1.0, 1.5]));

        let mismatch = &q([1.0, 2.0], "m") + &q([1.0, 2.0, 3.0], "m");
        assert!(matches!(mismatch, Err(UnitError::Shape { .. })));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn equality_across_units() {
        assert_eq!(q(1.0, "km"), q(1000.0, "m"));
        assert_ne!(q(1.0, "km"), q(1001.0, "m"));
        assert_ne!(q(1.0, "m"), q(1.0, "s"));
        assert_ne!(q([1.0, 2.0], "m"), q([1.0, 2.0, 3.0], "m"));
    }

    #[test]
    fn ordering_converts_right_operand() {
        assert!(q(1.0, "km").try_gt(&q(999.0, "m")).unwrap());
        assert!(q(1.0, "km").try_ge(&q(1000.0, "m")).unwrap());
        assert!(q(1.0, "km").try_le(&q(1000.0, "m")).unwrap());
        assert!(!q(1.0, "km").try_lt(&q(1000.0, "m")).unwrap());
    }

    #[test]
    fn ordering_incompatible_units_fails() {
        let err = q(1.0, "m").try_lt(&q(1.0, "s")).unwrap_err();
        assert_eq!(err.operation(), Some(Operation::Comparison));
    }

    #[test]
    fn array_ordering_holds_for_every_element() {
        let a = q([1.0, 2.0, 3.0], "m");
        assert!(a.try_lt(&q(4.0, "m")).unwrap());
        assert!(!a.try_lt(&q(2.5, "m")).unwrap());
    }

    #[test]
    fn display() {
        assert_eq!(q(1.5, "km").to_string(), "1.5 km");
        assert_eq!(q([1.0, 2.0], "m / s").to_string(), "[1, 2] m / s");
        assert_eq!(format!("{:.2}", q(1.0 / 3.0, "km")), "0.33 km");
        assert_eq!(format!("{:>6.1}", q(2.24, "s")), "   2.2 s");
    }

    #[test]
    fn quantities_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Quantity>();
        assert_send_sync::<Unit>();
        assert_send_sync::<Magnitude>();
        assert_send_sync::<Dimension>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_without_table() {
        let a = q([1.0, 2.0], "km / h");
        let json = serde_json::to_string(&a).unwrap();
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
        assert_eq!(back.unit().to_string(), "km / h");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_addition_then_subtraction(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let x = q(a, "km");
            let y = q(b, "m");
            let back = (&(&x + &y).unwrap() - &y).unwrap();
            prop_assert!((back.value().unwrap() - a).abs() <= 1e-9 * (1.0 + a.abs()));
        }

        #[test]
        fn prop_conversion_round_trip(v in -1e9..1e9f64) {
            let x = q(v, "km / h");
            let back = x.to(&unit("m / s")).unwrap().to(x.unit()).unwrap();
            prop_assert!((back.value().unwrap() - v).abs() <= 1e-9 * (1.0 + v.abs()));
        }

        #[test]
        fn prop_multiplication_commutes(a in -1e3..1e3f64, b in -1e3..1e3f64) {
            let x = q(a, "m");
            let y = q(b, "s");
            prop_assert_eq!((&x * &y).unwrap(), (&y * &x).unwrap());
        }
    }
}
