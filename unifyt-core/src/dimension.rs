//! Dimension vectors.
//!
//! A [`Dimension`] is the physical "shape" of a quantity, independent of scale: one exponent per SI base quantity.
//! Metres are `L^1`, accelerations are `L^1 T^-2`, and so on. Two units can be converted into each other (or added,
//! or ordered) exactly when their dimensions are equal.

use core::fmt::{Display, Formatter, Result};
use core::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of SI base quantities tracked by a [`Dimension`].
pub const BASE_QUANTITY_COUNT: usize = 7;

/// The seven SI base quantities, in the order used by [`Dimension::exponents`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseQuantity {
    /// Length (L), base unit metre.
    Length,
    /// Mass (M), base unit kilogram.
    Mass,
    /// Time (T), base unit second.
    Time,
    /// Electric current (I), base unit ampere.
    Current,
    /// Thermodynamic temperature (Θ), base unit kelvin.
    Temperature,
    /// Amount of substance (N), base unit mole.
    Amount,
    /// Luminous intensity (J), base unit candela.
    Luminosity,
}

impl BaseQuantity {
    /// All base quantities in vector order.
    pub const ALL: [BaseQuantity; BASE_QUANTITY_COUNT] = [
        BaseQuantity::Length,
        BaseQuantity::Mass,
        BaseQuantity::Time,
        BaseQuantity::Current,
        BaseQuantity::Temperature,
        BaseQuantity::Amount,
        BaseQuantity::Luminosity,
    ];

    /// Position of this quantity inside the exponent vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case quantity name, as printed by [`Dimension`]'s `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            BaseQuantity::Length => "length",
            BaseQuantity::Mass => "mass",
            BaseQuantity::Time => "time",
            BaseQuantity::Current => "current",
            BaseQuantity::Temperature => "temperature",
            BaseQuantity::Amount => "amount",
            BaseQuantity::Luminosity => "luminosity",
        }
    }

    /// Conventional dimension symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseQuantity::Length => "L",
            BaseQuantity::Mass => "M",
            BaseQuantity::Time => "T",
            BaseQuantity::Current => "I",
            BaseQuantity::Temperature => "Θ",
            BaseQuantity::Amount => "N",
            BaseQuantity::Luminosity => "J",
        }
    }

    /// Name of the SI base unit measuring this quantity.
    pub const fn base_unit(self) -> &'static str {
        match self {
            BaseQuantity::Length => "meter",
            BaseQuantity::Mass => "kilogram",
            BaseQuantity::Time => "second",
            BaseQuantity::Current => "ampere",
            BaseQuantity::Temperature => "kelvin",
            BaseQuantity::Amount => "mole",
            BaseQuantity::Luminosity => "candela",
        }
    }
}

/// Vector of exponents over the seven SI base quantities.
///
/// Dimensions are plain `Copy` values compared by content. Equality is exact: no tolerance is applied, so
/// `L^0.5 * L^0.5 == L^1` holds while an exponent computed as `0.1 + 0.2` does not equal `0.3`.
///
/// ```rust
/// use unifyt_core::Dimension;
///
/// let velocity = Dimension::LENGTH - Dimension::TIME;
/// let acceleration = velocity - Dimension::TIME;
/// assert_eq!(acceleration, Dimension::new([1.0, 0.0, -2.0, 0.0, 0.0, 0.0, 0.0]));
/// assert_eq!(acceleration.to_string(), "length * time^-2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Dimension([f64; BASE_QUANTITY_COUNT]);

impl Dimension {
    /// All exponents zero.
    pub const DIMENSIONLESS: Self = Self([0.0; BASE_QUANTITY_COUNT]);
    /// `L^1`.
    pub const LENGTH: Self = Self([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    /// `M^1`.
    pub const MASS: Self = Self([0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    /// `T^1`.
    pub const TIME: Self = Self([0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    /// `I^1`.
    pub const CURRENT: Self = Self([0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
    /// `Θ^1`.
    pub const TEMPERATURE: Self = Self([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    /// `N^1`.
    pub const AMOUNT: Self = Self([0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    /// `J^1`.
    pub const LUMINOSITY: Self = Self([0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);

    /// Builds a dimension from its raw exponents, ordered as [`BaseQuantity::ALL`].
    #[inline]
    pub const fn new(exponents: [f64; BASE_QUANTITY_COUNT]) -> Self {
        Self(exponents)
    }

    /// Dimension of a single base quantity raised to the first power.
    pub const fn of(base: BaseQuantity) -> Self {
        match base {
            BaseQuantity::Length => Self::LENGTH,
            BaseQuantity::Mass => Self::MASS,
            BaseQuantity::Time => Self::TIME,
            BaseQuantity::Current => Self::CURRENT,
            BaseQuantity::Temperature => Self::TEMPERATURE,
            BaseQuantity::Amount => Self::AMOUNT,
            BaseQuantity::Luminosity => Self::LUMINOSITY,
        }
    }

    /// Raw exponents.
    #[inline]
    pub const fn exponents(&self) -> [f64; BASE_QUANTITY_COUNT] {
        self.0
    }

    /// Exponent of one base quantity.
    #[inline]
    pub const fn exponent(&self, base: BaseQuantity) -> f64 {
        self.0[base.index()]
    }

    /// Returns a copy with the exponent of `base` replaced.
    #[inline]
    pub fn with_exponent(mut self, base: BaseQuantity, exponent: f64) -> Self {
        self.0[base.index()] = exponent;
        self
    }

    /// `true` when every exponent is zero.
    #[inline]
    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }

    /// Element-wise sum (dimension of a product).
    #[inline]
    pub fn add(self, other: Self) -> Self {
        self.zip(other, |a, b| a + b)
    }

    /// Element-wise difference (dimension of a quotient).
    #[inline]
    pub fn subtract(self, other: Self) -> Self {
        self.zip(other, |a, b| a - b)
    }

    /// Every exponent multiplied by `n` (dimension of a power).
    #[inline]
    pub fn scale(self, n: f64) -> Self {
        let mut out = self.0;
        for e in out.iter_mut() {
            *e *= n;
        }
        // 0 * -n would otherwise leave -0.0 behind, which prints oddly
        Self(out).normalized()
    }

    /// Exact equality of all exponents.
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Iterator over `(base, exponent)` pairs with a non-zero exponent.
    pub fn iter(&self) -> impl Iterator<Item = (BaseQuantity, f64)> + '_ {
        BaseQuantity::ALL
            .iter()
            .map(move |&b| (b, self.exponent(b)))
            .filter(|(_, e)| *e != 0.0)
    }

    fn zip(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let mut out = [0.0; BASE_QUANTITY_COUNT];
        for (i, e) in out.iter_mut().enumerate() {
            *e = f(self.0[i], other.0[i]);
        }
        Self(out).normalized()
    }

    fn normalized(mut self) -> Self {
        for e in self.0.iter_mut() {
            if *e == 0.0 {
                *e = 0.0;
            }
        }
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Add for Dimension {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Dimension::add(self, rhs)
    }
}

impl Sub for Dimension {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Dimension {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Neg for Dimension {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl From<BaseQuantity> for Dimension {
    fn from(base: BaseQuantity) -> Self {
        Dimension::of(base)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_dimensionless() {
            return f.write_str("dimensionless");
        }
        let mut first = true;
        for (base, exponent) in self.iter() {
            if !first {
                f.write_str(" * ")?;
            }
            first = false;
            if exponent == 1.0 {
                f.write_str(base.name())?;
            } else {
                write!(f, "{}^{}", base.name(), exponent)?;
            }
        }
        Ok(())
    }
}
