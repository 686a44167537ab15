//! Runtime units.
//!
//! A [`Unit`] pairs a [`Dimension`] with a `scale`: the factor converting one of the unit into the base unit of its
//! dimension (kilometre has scale `1000`, because the base unit of length is the metre). Every pairwise conversion
//! is then two divisions through the common base:
//!
//! ```text
//! factor(a → b) = a.scale / b.scale
//! ```
//!
//! Compound units are built algebraically: multiplying units adds their dimensions and multiplies their scales,
//! dividing subtracts and divides, raising to a power scales the dimension and exponentiates the scale. Units keep a
//! list of symbolic [`Term`]s alongside so they can be printed (and re-parsed) as `kilogram * meter / second^2`.

use crate::dimension::Dimension;
use crate::error::{Operation, UnitError, UnitResult};
use crate::table::{UnitDef, UnitTable};
use core::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One named factor of a unit expression, e.g. `second^-2`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    /// Name as written when the unit was resolved.
    pub name: String,
    /// Exponent of the term; never zero inside a [`Unit`].
    pub exponent: f64,
}

impl Term {
    fn new(name: impl Into<String>, exponent: f64) -> Self {
        Self {
            name: name.into(),
            exponent,
        }
    }
}

/// A named or compound measurement unit.
///
/// # Invariants
///
/// - `scale` is finite and strictly positive (only ratio scalings are modelled, no offsets).
/// - The dimension is computed once, when the unit is created, and never changes.
///
/// Equality compares dimension and scale only (scales within a relative tolerance of `1e-12`): `m`, `meter` and
/// `kilometer / 1000` are the same unit even though they print differently.
///
/// ```rust
/// use unifyt_core::{Dimension, Unit};
///
/// let meter = Unit::new("meter", Dimension::LENGTH, 1.0).unwrap();
/// let kilometer = Unit::new("kilometer", Dimension::LENGTH, 1000.0).unwrap();
/// let hour = Unit::new("hour", Dimension::TIME, 3600.0).unwrap();
///
/// let speed = kilometer.divide(&hour).unwrap();
/// assert_eq!(speed.to_string(), "kilometer / hour");
/// assert!(speed.is_compatible_with(&meter.divide(&hour).unwrap()));
/// assert!((speed.scale() - 1000.0 / 3600.0).abs() < 1e-15);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawUnit"))]
pub struct Unit {
    terms: Vec<Term>,
    factor: f64,
    dimension: Dimension,
    scale: f64,
}

impl Unit {
    /// Creates a named unit from its dimension and scale to the base unit.
    pub fn new(name: impl Into<String>, dimension: Dimension, scale: f64) -> UnitResult<Self> {
        let scale = check_scale(Operation::Construction, scale)?;
        Ok(Self {
            terms: vec![Term::new(name, 1.0)],
            factor: 1.0,
            dimension,
            scale,
        })
    }

    /// Creates a named unit from a table definition.
    #[inline]
    pub fn from_def(name: impl Into<String>, def: UnitDef) -> UnitResult<Self> {
        Self::new(name, def.dimension, def.scale)
    }

    /// Resolves a single unit name through `table`.
    ///
    /// Fails with [`UnitError::UnitNotFound`] (carrying the table's suggestions) when the name is unknown.
    pub fn from_name<T: UnitTable + ?Sized>(name: &str, table: &T) -> UnitResult<Self> {
        match table.lookup(name) {
            Some(def) => Self::from_def(name, def),
            None => Err(UnitError::UnitNotFound {
                name: name.to_string(),
                suggestions: table.suggest(name),
            }),
        }
    }

    /// Parses a compound expression such as `"kilogram * meter / second ^ 2"`.
    ///
    /// See [`parse_compound`](crate::parse::parse_compound) for the accepted syntax.
    #[inline]
    pub fn parse<T: UnitTable + ?Sized>(expression: &str, table: &T) -> UnitResult<Self> {
        crate::parse::parse_compound(expression, table)
    }

    /// The unit of pure numbers (scale 1, no terms).
    pub fn dimensionless() -> Self {
        Self {
            terms: Vec::new(),
            factor: 1.0,
            dimension: Dimension::DIMENSIONLESS,
            scale: 1.0,
        }
    }

    /// A dimensionless unit worth `value`, as produced by numeric factors in expressions (`"1000 meter"`).
    pub fn numeric(value: f64) -> UnitResult<Self> {
        let scale = check_scale(Operation::Construction, value)?;
        Ok(Self {
            terms: Vec::new(),
            factor: scale,
            dimension: Dimension::DIMENSIONLESS,
            scale,
        })
    }

    /// The canonical base unit of `dimension` (scale 1), spelled with SI base unit names.
    ///
    /// ```rust
    /// use unifyt_core::{Dimension, Unit};
    ///
    /// let accel = Dimension::LENGTH - Dimension::TIME * 2.0;
    /// assert_eq!(Unit::base(accel).to_string(), "meter / second^2");
    /// ```
    pub fn base(dimension: Dimension) -> Self {
        let terms = dimension
            .iter()
            .map(|(base, exponent)| Term::new(base.base_unit(), exponent))
            .collect();
        Self {
            terms,
            factor: 1.0,
            dimension,
            scale: 1.0,
        }
    }

    /// Dimension of this unit.
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Factor converting one of this unit into the base unit of its dimension.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Symbolic terms, in order of first appearance.
    #[inline]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Bare numeric multiplier that appeared in the unit's expression (`1.0` when none did).
    #[inline]
    pub fn numeric_factor(&self) -> f64 {
        self.factor
    }

    /// `true` when every dimension exponent is zero.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// `true` when this unit is one of the SI base units of its dimension (scale exactly 1).
    #[inline]
    pub fn is_base(&self) -> bool {
        self.scale == 1.0
    }

    /// Product of two units.
    pub fn multiply(&self, other: &Unit) -> UnitResult<Unit> {
        let scale = check_scale(Operation::Multiplication, self.scale * other.scale)?;
        Ok(Unit {
            terms: merge_terms(&self.terms, &other.terms, 1.0),
            factor: self.factor * other.factor,
            dimension: self.dimension.add(other.dimension),
            scale,
        })
    }

    /// Quotient of two units.
    pub fn divide(&self, other: &Unit) -> UnitResult<Unit> {
        let scale = check_scale(Operation::Division, self.scale / other.scale)?;
        Ok(Unit {
            terms: merge_terms(&self.terms, &other.terms, -1.0),
            factor: self.factor / other.factor,
            dimension: self.dimension.subtract(other.dimension),
            scale,
        })
    }

    /// This unit raised to the power `n` (`n` may be fractional).
    pub fn pow(&self, n: f64) -> UnitResult<Unit> {
        if !n.is_finite() {
            return Err(UnitError::invalid(
                Operation::Exponentiation,
                format!("exponent must be finite, got {n}"),
            ));
        }
        if n == 0.0 {
            return Ok(Unit::dimensionless());
        }
        let scale = check_scale(Operation::Exponentiation, power(self.scale, n))?;
        let terms = self
            .terms
            .iter()
            .map(|t| Term::new(t.name.clone(), t.exponent * n))
            .collect();
        Ok(Unit {
            terms,
            factor: power(self.factor, n),
            dimension: self.dimension.scale(n),
            scale,
        })
    }

    /// `dimensionless / self`.
    pub fn recip(&self) -> UnitResult<Unit> {
        Unit::dimensionless().divide(self)
    }

    /// Two units are compatible (convertible, addable, orderable) iff their dimensions are equal.
    #[inline]
    pub fn is_compatible_with(&self, other: &Unit) -> bool {
        self.dimension.equals(&other.dimension)
    }

    /// Multiplier turning a value expressed in `self` into the same value expressed in `other`.
    ///
    /// ```rust
    /// use unifyt_core::{Dimension, Unit};
    ///
    /// let km = Unit::new("kilometer", Dimension::LENGTH, 1000.0).unwrap();
    /// let m = Unit::new("meter", Dimension::LENGTH, 1.0).unwrap();
    /// assert_eq!(km.conversion_factor_to(&m).unwrap(), 1000.0);
    /// ```
    pub fn conversion_factor_to(&self, other: &Unit) -> UnitResult<f64> {
        if !self.is_compatible_with(other) {
            return Err(self.mismatch(other, Operation::Conversion));
        }
        Ok(self.scale / other.scale)
    }

    /// Same dimension, scale 1: the normalization target for this unit.
    #[inline]
    pub fn to_base_units(&self) -> Unit {
        Unit::base(self.dimension)
    }

    /// Same dimension and scale under a single new name.
    pub fn renamed(&self, name: impl Into<String>) -> Unit {
        Unit {
            terms: vec![Term::new(name, 1.0)],
            factor: 1.0,
            dimension: self.dimension,
            scale: self.scale,
        }
    }

    pub(crate) fn mismatch(&self, other: &Unit, operation: Operation) -> UnitError {
        UnitError::Dimensionality {
            operation,
            left: self.to_string(),
            right: other.to_string(),
            left_dimension: self.dimension,
            right_dimension: other.dimension,
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::dimensionless()
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && crate::quantity::close(self.scale, other.scale)
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let render = |t: &Term, exponent: f64| {
            if exponent == 1.0 {
                t.name.clone()
            } else {
                format!("{}^{}", t.name, exponent)
            }
        };
        let numerator: Vec<String> = self
            .terms
            .iter()
            .filter(|t| t.exponent > 0.0)
            .map(|t| render(t, t.exponent))
            .collect();
        let denominator: Vec<String> = self
            .terms
            .iter()
            .filter(|t| t.exponent < 0.0)
            .map(|t| render(t, -t.exponent))
            .collect();
        let has_factor = self.factor != 1.0;

        if numerator.is_empty() && denominator.is_empty() {
            return if has_factor {
                write!(f, "{}", self.factor)
            } else {
                f.write_str("dimensionless")
            };
        }

        let mut head = numerator.join(" * ");
        if has_factor {
            head = if head.is_empty() {
                self.factor.to_string()
            } else {
                format!("{} {}", self.factor, head)
            };
        }
        if head.is_empty() {
            head.push('1');
        }
        if denominator.is_empty() {
            f.write_str(&head)
        } else {
            write!(f, "{} / {}", head, denominator.join(" * "))
        }
    }
}

/// Anything that designates a unit: a [`Unit`] value or an expression to parse.
pub trait UnitSpec {
    /// Produces the unit, resolving names through `table` when needed.
    fn resolve<T: UnitTable + ?Sized>(self, table: &T) -> UnitResult<Unit>;
}

impl UnitSpec for Unit {
    fn resolve<T: UnitTable + ?Sized>(self, _table: &T) -> UnitResult<Unit> {
        Ok(self)
    }
}

impl UnitSpec for &Unit {
    fn resolve<T: UnitTable + ?Sized>(self, _table: &T) -> UnitResult<Unit> {
        Ok(self.clone())
    }
}

impl UnitSpec for &str {
    fn resolve<T: UnitTable + ?Sized>(self, table: &T) -> UnitResult<Unit> {
        Unit::parse(self, table)
    }
}

impl UnitSpec for &String {
    fn resolve<T: UnitTable + ?Sized>(self, table: &T) -> UnitResult<Unit> {
        Unit::parse(self, table)
    }
}

impl UnitSpec for String {
    fn resolve<T: UnitTable + ?Sized>(self, table: &T) -> UnitResult<Unit> {
        Unit::parse(&self, table)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

/// `base^n`, using integer powers when `n` is integral so that `10^3` stays exact.
pub(crate) fn power(base: f64, n: f64) -> f64 {
    if n.fract() == 0.0 && n.abs() <= f64::from(i32::MAX) {
        base.powi(n as i32)
    } else {
        base.powf(n)
    }
}

fn check_scale(operation: Operation, scale: f64) -> UnitResult<f64> {
    if scale.is_nan() {
        Err(UnitError::invalid(operation, "unit scale is NaN"))
    } else if scale.is_infinite() {
        Err(UnitError::Overflow {
            operation,
            magnitude: scale,
            limit: f64::MAX,
        })
    } else if scale <= 0.0 {
        Err(UnitError::invalid(
            operation,
            format!("unit scale must be positive, got {scale}"),
        ))
    } else {
        Ok(scale)
    }
}

fn merge_terms(left: &[Term], right: &[Term], sign: f64) -> Vec<Term> {
    let mut out = left.to_vec();
    for term in right {
        match out.iter_mut().find(|t| t.name == term.name) {
            Some(existing) => existing.exponent += sign * term.exponent,
            None => out.push(Term::new(term.name.clone(), sign * term.exponent)),
        }
    }
    out.retain(|t| t.exponent != 0.0);
    out
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawUnit {
    terms: Vec<Term>,
    #[serde(default = "one")]
    factor: f64,
    dimension: Dimension,
    scale: f64,
}

#[cfg(feature = "serde")]
fn one() -> f64 {
    1.0
}

#[cfg(feature = "serde")]
impl TryFrom<RawUnit> for Unit {
    type Error = UnitError;

    fn try_from(raw: RawUnit) -> Result<Self, Self::Error> {
        let scale = check_scale(Operation::Construction, raw.scale)?;
        let factor = check_scale(Operation::Construction, raw.factor)?;
        let mut terms = raw.terms;
        terms.retain(|t| t.exponent != 0.0);
        Ok(Unit {
            terms,
            factor,
            dimension: raw.dimension,
            scale,
        })
    }
}
