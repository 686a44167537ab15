//! Array helpers for quantities.
//!
//! NumPy-flavoured constructors and reductions that keep the unit attached. Inputs given in different but
//! compatible units are converted to the unit of the first (or primary) argument before any arithmetic.
//!
//! Reductions take an optional axis: `None` collapses the whole array to a scalar, `Some(k)` reduces along axis `k`
//! and drops it from the shape. Empty inputs and out-of-range axes fail with
//! [`UnitError::Shape`].

use ndarray::{Array1, ArrayD, Axis, IxDyn};
use unifyt_core::{Limits, Magnitude, Operation, Quantity, Unit, UnitError, UnitResult};

/// Relative tolerance used by [`isclose`] callers that want NumPy's default.
pub const DEFAULT_RTOL: f64 = 1e-5;

/// Absolute tolerance used by [`isclose`] callers that want NumPy's default.
pub const DEFAULT_ATOL: f64 = 1e-8;

// =============================================================================
// Constructors
// =============================================================================

/// `num` evenly spaced values from `start` to `stop` inclusive, in the unit of `start`.
///
/// ```rust
/// use unifyt::{utils, UnitRegistry};
///
/// let registry = UnitRegistry::global();
/// let start = registry.quantity(0.0, "meter").unwrap();
/// let stop = registry.quantity(1.0, "kilometer").unwrap();
/// let steps = utils::linspace(&start, &stop, 5).unwrap();
/// assert_eq!(steps.shape(), vec![5]);
/// assert_eq!(steps.magnitude().iter().nth(1), Some(250.0));
/// ```
pub fn linspace(start: &Quantity, stop: &Quantity, num: usize) -> UnitResult<Quantity> {
    let unit = start.unit();
    let from = scalar(start, "start")?;
    let to = scalar(&stop.to(unit)?, "stop")?;
    Quantity::new(Array1::linspace(from, to, num), unit.clone())
}

/// Values from `start` (inclusive) to `stop` (exclusive) in increments of `step`, in the unit of `start`.
pub fn arange(start: &Quantity, stop: &Quantity, step: &Quantity) -> UnitResult<Quantity> {
    let unit = start.unit();
    let from = scalar(start, "start")?;
    let to = scalar(&stop.to(unit)?, "stop")?;
    let by = scalar(&step.to(unit)?, "step")?;
    if by == 0.0 {
        return Err(UnitError::InvalidValue {
            operation: Operation::Construction,
            reason: "step must be non-zero".to_string(),
        });
    }
    Quantity::new(Array1::range(from, to, by), unit.clone())
}

/// An array of zeros.
pub fn zeros(shape: &[usize], unit: Unit) -> UnitResult<Quantity> {
    Quantity::new(ArrayD::zeros(IxDyn(shape)), unit)
}

/// An array of ones.
pub fn ones(shape: &[usize], unit: Unit) -> UnitResult<Quantity> {
    Quantity::new(ArrayD::ones(IxDyn(shape)), unit)
}

/// An array filled with the value of a scalar quantity.
pub fn full(shape: &[usize], fill: &Quantity) -> UnitResult<Quantity> {
    let value = scalar(fill, "fill value")?;
    Quantity::new(ArrayD::from_elem(IxDyn(shape), value), fill.unit().clone())
}

// =============================================================================
// Joining
// =============================================================================

/// Joins arrays along an existing axis, converting every input to the unit of the first.
pub fn concatenate(quantities: &[Quantity], axis: usize) -> UnitResult<Quantity> {
    let (unit, arrays) = aligned_arrays(quantities, "concatenate")?;
    if let Some(a) = arrays.iter().find(|a| axis >= a.ndim()) {
        return Err(axis_out_of_bounds(axis, a.ndim()));
    }
    let views: Vec<_> = arrays.iter().map(|a| a.view()).collect();
    let joined = ndarray::concatenate(Axis(axis), &views).map_err(|e| aggregation_shape(e.to_string()))?;
    finish(Magnitude::from(joined), unit)
}

/// Joins arrays along a new axis, converting every input to the unit of the first.
pub fn stack(quantities: &[Quantity], axis: usize) -> UnitResult<Quantity> {
    let (unit, arrays) = aligned_arrays(quantities, "stack")?;
    if let Some(a) = arrays.iter().find(|a| axis > a.ndim()) {
        return Err(axis_out_of_bounds(axis, a.ndim() + 1));
    }
    let views: Vec<_> = arrays.iter().map(|a| a.view()).collect();
    let stacked = ndarray::stack(Axis(axis), &views).map_err(|e| aggregation_shape(e.to_string()))?;
    finish(Magnitude::from(stacked), unit)
}

fn aligned_arrays(quantities: &[Quantity], what: &str) -> UnitResult<(Unit, Vec<ArrayD<f64>>)> {
    let first = quantities
        .first()
        .ok_or_else(|| aggregation_shape(format!("need at least one quantity to {what}")))?;
    let unit = first.unit().clone();
    let mut arrays = Vec::with_capacity(quantities.len());
    for quantity in quantities {
        arrays.push(quantity.to(&unit)?.magnitude().to_array());
    }
    Ok((unit, arrays))
}

// =============================================================================
// Reductions
// =============================================================================

/// Sum of the elements.
pub fn sum(quantity: &Quantity, axis: Option<usize>) -> UnitResult<Quantity> {
    reduce(quantity, axis, |a| a.sum(), |a, ax| a.sum_axis(ax))
}

/// Arithmetic mean of the elements.
pub fn mean(quantity: &Quantity, axis: Option<usize>) -> UnitResult<Quantity> {
    reduce(
        quantity,
        axis,
        |a| a.sum() / a.len() as f64,
        |a, ax| a.sum_axis(ax) / a.len_of(ax) as f64,
    )
}

/// Population standard deviation of the elements.
pub fn std(quantity: &Quantity, axis: Option<usize>) -> UnitResult<Quantity> {
    reduce(quantity, axis, |a| a.std(0.0), |a, ax| a.std_axis(ax, 0.0))
}

/// Smallest element.
pub fn min(quantity: &Quantity, axis: Option<usize>) -> UnitResult<Quantity> {
    reduce(
        quantity,
        axis,
        |a| a.iter().copied().fold(f64::INFINITY, f64::min),
        |a, ax| a.fold_axis(ax, f64::INFINITY, |acc, &x| acc.min(x)),
    )
}

/// Largest element.
pub fn max(quantity: &Quantity, axis: Option<usize>) -> UnitResult<Quantity> {
    reduce(
        quantity,
        axis,
        |a| a.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        |a, ax| a.fold_axis(ax, f64::NEG_INFINITY, |acc, &x| acc.max(x)),
    )
}

fn reduce(
    quantity: &Quantity,
    axis: Option<usize>,
    whole: impl Fn(&ArrayD<f64>) -> f64,
    along: impl Fn(&ArrayD<f64>, Axis) -> ArrayD<f64>,
) -> UnitResult<Quantity> {
    let array = quantity.magnitude().to_array();
    let magnitude = match axis {
        None => {
            if array.is_empty() {
                return Err(aggregation_shape("cannot reduce an empty array"));
            }
            Magnitude::Scalar(whole(&array))
        }
        Some(k) => {
            if k >= array.ndim() {
                return Err(axis_out_of_bounds(k, array.ndim()));
            }
            if array.len_of(Axis(k)) == 0 {
                return Err(aggregation_shape(format!("cannot reduce along empty axis {k}")));
            }
            Magnitude::from(along(&array, Axis(k)))
        }
    };
    finish(magnitude, quantity.unit().clone())
}

// =============================================================================
// Element-wise
// =============================================================================

/// Square root, halving every exponent of the unit.
#[inline]
pub fn sqrt(quantity: &Quantity) -> UnitResult<Quantity> {
    quantity.sqrt()
}

/// Limits every element to `[lower, upper]`, both given in any unit compatible with `quantity`.
pub fn clip(quantity: &Quantity, lower: &Quantity, upper: &Quantity) -> UnitResult<Quantity> {
    let unit = quantity.unit();
    let lower = lower.to(unit)?;
    let upper = upper.to(unit)?;
    let clipped = quantity
        .magnitude()
        .zip_with(lower.magnitude(), Operation::Comparison, f64::max)?
        .zip_with(upper.magnitude(), Operation::Comparison, f64::min)?;
    Quantity::new(clipped, unit.clone())
}

/// `true` when every element satisfies `|a - b| <= atol + rtol * |b|` after converting `b` to the unit of `a`.
///
/// Incompatible dimensions and shapes that do not broadcast are simply not close.
pub fn isclose(a: &Quantity, b: &Quantity, rtol: f64, atol: f64) -> bool {
    let Ok(b) = b.to(a.unit()) else {
        return false;
    };
    a.magnitude()
        .all_pairs(b.magnitude(), Operation::Comparison, |x, y| {
            (x - y).abs() <= atol + rtol * y.abs()
        })
        .unwrap_or(false)
}

// =============================================================================
// Helpers
// =============================================================================

fn scalar(quantity: &Quantity, what: &str) -> UnitResult<f64> {
    quantity.value().ok_or_else(|| UnitError::Shape {
        operation: Operation::Construction,
        reason: format!("{what} must be a scalar, got shape {:?}", quantity.shape()),
    })
}

fn finish(magnitude: Magnitude, unit: Unit) -> UnitResult<Quantity> {
    Limits::current().check(&magnitude, Operation::Aggregation)?;
    Quantity::new(magnitude, unit)
}

fn aggregation_shape(reason: impl Into<String>) -> UnitError {
    UnitError::Shape {
        operation: Operation::Aggregation,
        reason: reason.into(),
    }
}

fn axis_out_of_bounds(axis: usize, ndim: usize) -> UnitError {
    aggregation_shape(format!("axis {axis} is out of bounds for array of dimension {ndim}"))
}
