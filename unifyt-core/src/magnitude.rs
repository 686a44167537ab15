//! Numeric payload of a quantity: a scalar or an n-dimensional array.
//!
//! Binary operations between magnitudes follow NumPy broadcasting: shapes are aligned from the trailing axis and an
//! axis of length 1 stretches to match the other operand.

use crate::error::{Operation, UnitError, UnitResult};
use core::fmt::{Display, Formatter};
use ndarray::{Array1, ArrayD, IxDyn, Zip};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scalar or homogeneous `f64` array.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMagnitude", into = "RawMagnitude"))]
pub enum Magnitude {
    /// A single number.
    Scalar(f64),
    /// An array of at least one dimension.
    Array(ArrayD<f64>),
}

impl Magnitude {
    /// Builds an array magnitude from a shape and row-major data.
    pub fn from_shape_vec(shape: &[usize], data: Vec<f64>) -> UnitResult<Self> {
        ArrayD::from_shape_vec(IxDyn(shape), data)
            .map(Magnitude::from)
            .map_err(|e| UnitError::Shape {
                operation: Operation::Construction,
                reason: e.to_string(),
            })
    }

    /// `true` for [`Magnitude::Scalar`].
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Magnitude::Scalar(_))
    }

    /// The scalar value, if this is a scalar.
    #[inline]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Magnitude::Scalar(v) => Some(*v),
            Magnitude::Array(_) => None,
        }
    }

    /// The array, if this is an array.
    #[inline]
    pub fn as_array(&self) -> Option<&ArrayD<f64>> {
        match self {
            Magnitude::Scalar(_) => None,
            Magnitude::Array(a) => Some(a),
        }
    }

    /// Owned array view of the data; scalars become 0-d arrays.
    pub fn to_array(&self) -> ArrayD<f64> {
        match self {
            Magnitude::Scalar(v) => ArrayD::from_elem(IxDyn(&[]), *v),
            Magnitude::Array(a) => a.clone(),
        }
    }

    /// Shape of the data (`[]` for scalars).
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Magnitude::Scalar(_) => Vec::new(),
            Magnitude::Array(a) => a.shape().to_vec(),
        }
    }

    /// Number of axes (`0` for scalars).
    pub fn ndim(&self) -> usize {
        match self {
            Magnitude::Scalar(_) => 0,
            Magnitude::Array(a) => a.ndim(),
        }
    }

    /// Number of elements (`1` for scalars).
    pub fn len(&self) -> usize {
        match self {
            Magnitude::Scalar(_) => 1,
            Magnitude::Array(a) => a.len(),
        }
    }

    /// `true` for arrays with no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the elements in logical (row-major) order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            Magnitude::Scalar(v) => Box::new(core::iter::once(*v)),
            Magnitude::Array(a) => Box::new(a.iter().copied()),
        }
    }

    /// Applies `f` to every element.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Magnitude {
        match self {
            Magnitude::Scalar(v) => Magnitude::Scalar(f(*v)),
            Magnitude::Array(a) => Magnitude::Array(a.mapv(f)),
        }
    }

    /// Combines two magnitudes element-wise after broadcasting them to a common shape.
    pub fn zip_with(
        &self,
        other: &Magnitude,
        operation: Operation,
        f: impl Fn(f64, f64) -> f64,
    ) -> UnitResult<Magnitude> {
        match (self, other) {
            (Magnitude::Scalar(a), Magnitude::Scalar(b)) => Ok(Magnitude::Scalar(f(*a, *b))),
            (Magnitude::Scalar(a), Magnitude::Array(b)) => {
                Ok(Magnitude::Array(b.mapv(|y| f(*a, y))))
            }
            (Magnitude::Array(a), Magnitude::Scalar(b)) => {
                Ok(Magnitude::Array(a.mapv(|x| f(x, *b))))
            }
            (Magnitude::Array(a), Magnitude::Array(b)) => {
                let shape = broadcast_shape(a.shape(), b.shape())
                    .ok_or_else(|| shape_mismatch(operation, a.shape(), b.shape()))?;
                let (va, vb) = match (a.broadcast(shape.as_slice()), b.broadcast(shape.as_slice())) {
                    (Some(va), Some(vb)) => (va, vb),
                    _ => return Err(shape_mismatch(operation, a.shape(), b.shape())),
                };
                let out = Zip::from(&va).and(&vb).map_collect(|&x, &y| f(x, y));
                Ok(Magnitude::from(out))
            }
        }
    }

    /// `true` when `pred` holds for every broadcast element pair.
    pub fn all_pairs(
        &self,
        other: &Magnitude,
        operation: Operation,
        pred: impl Fn(f64, f64) -> bool,
    ) -> UnitResult<bool> {
        let flags = self.zip_with(other, operation, |a, b| if pred(a, b) { 1.0 } else { 0.0 })?;
        let all = flags.iter().all(|flag| flag == 1.0);
        Ok(all)
    }

    /// `true` when any element is NaN.
    pub fn has_nan(&self) -> bool {
        self.iter().any(f64::is_nan)
    }

    /// Largest absolute element, ignoring NaN (`0` for empty arrays).
    pub fn max_abs(&self) -> f64 {
        self.iter().fold(0.0, |acc, v| acc.max(v.abs()))
    }
}

fn broadcast_shape(a: &[usize], b: &[usize]) -> Option<Vec<usize>> {
    let ndim = a.len().max(b.len());
    let axis = |shape: &[usize], i: usize| {
        let offset = ndim - shape.len();
        if i < offset {
            1
        } else {
            shape[i - offset]
        }
    };
    (0..ndim)
        .map(|i| match (axis(a, i), axis(b, i)) {
            (x, y) if x == y => Some(x),
            (1, y) => Some(y),
            (x, 1) => Some(x),
            _ => None,
        })
        .collect()
}

fn shape_mismatch(operation: Operation, a: &[usize], b: &[usize]) -> UnitError {
    UnitError::Shape {
        operation,
        reason: format!("operands with shapes {a:?} and {b:?} cannot be broadcast together"),
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Magnitude::Scalar(0.0)
    }
}

impl From<f64> for Magnitude {
    fn from(value: f64) -> Self {
        Magnitude::Scalar(value)
    }
}

impl From<i32> for Magnitude {
    fn from(value: i32) -> Self {
        Magnitude::Scalar(f64::from(value))
    }
}

impl From<Vec<f64>> for Magnitude {
    fn from(values: Vec<f64>) -> Self {
        Magnitude::Array(Array1::from_vec(values).into_dyn())
    }
}

impl From<&[f64]> for Magnitude {
    fn from(values: &[f64]) -> Self {
        Magnitude::from(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Magnitude {
    fn from(values: [f64; N]) -> Self {
        Magnitude::from(values.to_vec())
    }
}

impl From<Array1<f64>> for Magnitude {
    fn from(array: Array1<f64>) -> Self {
        Magnitude::Array(array.into_dyn())
    }
}

impl From<ArrayD<f64>> for Magnitude {
    fn from(array: ArrayD<f64>) -> Self {
        if array.ndim() == 0 {
            if let Some(&v) = array.first() {
                return Magnitude::Scalar(v);
            }
        }
        Magnitude::Array(array)
    }
}

impl Display for Magnitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Magnitude::Scalar(v) => Display::fmt(v, f),
            Magnitude::Array(a) => Display::fmt(a, f),
        }
    }
}

/// Wire shape: a bare number or `{ "shape": [...], "data": [...] }`.
#[cfg(feature = "serde")]
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawMagnitude {
    Scalar(f64),
    Array { shape: Vec<usize>, data: Vec<f64> },
}

#[cfg(feature = "serde")]
impl From<Magnitude> for RawMagnitude {
    fn from(magnitude: Magnitude) -> Self {
        match magnitude {
            Magnitude::Scalar(v) => RawMagnitude::Scalar(v),
            Magnitude::Array(a) => RawMagnitude::Array {
                shape: a.shape().to_vec(),
                data: a.iter().copied().collect(),
            },
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawMagnitude> for Magnitude {
    type Error = UnitError;

    fn try_from(raw: RawMagnitude) -> Result<Self, Self::Error> {
        match raw {
            RawMagnitude::Scalar(v) => Ok(Magnitude::Scalar(v)),
            RawMagnitude::Array { shape, data } => Magnitude::from_shape_vec(&shape, data),
        }
    }
}
