//! JSON records for quantities.
//!
//! A record stores the magnitude (a number or a nested list of numbers), the unit by its printed name and a
//! format version:
//!
//! ```json
//! { "type": "Quantity", "value": [[1.0, 2.0], [3.0, 4.0]], "unit": "meter / second", "version": "1.0" }
//! ```
//!
//! Units are resolved again through a [`UnitTable`] when a record is loaded, so custom units survive a round trip
//! as long as the loading registry defines them too. For table-free persistence use the `serde` impls of
//! [`Quantity`] itself, which carry the dimension and scale.

use crate::error::{SerializationError, SerializationResult};
use ndarray::ArrayViewD;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use unifyt_core::{Magnitude, Quantity, Unit, UnitTable};

/// Format version written into every record.
pub const FORMAT_VERSION: &str = "1.0";

/// Type tag written into every record.
pub const RECORD_TYPE: &str = "Quantity";

/// Serialized form of a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityRecord {
    /// Always [`RECORD_TYPE`].
    #[serde(rename = "type")]
    pub kind: String,
    /// A number, or nested lists for arrays.
    pub value: Value,
    /// Printed unit expression.
    pub unit: String,
    /// Format version, `major.minor`.
    pub version: String,
}

/// Converts a quantity into a record.
pub fn to_record(quantity: &Quantity) -> QuantityRecord {
    let value = match quantity.magnitude() {
        Magnitude::Scalar(v) => Value::from(*v),
        Magnitude::Array(a) => nested(a.view()),
    };
    QuantityRecord {
        kind: RECORD_TYPE.to_string(),
        value,
        unit: quantity.unit().to_string(),
        version: FORMAT_VERSION.to_string(),
    }
}

/// Rebuilds a quantity from a record, resolving its unit through `table`.
///
/// Fails when the type tag is not `"Quantity"`, the major version differs from [`FORMAT_VERSION`], the value is
/// not a (rectangular) nested list of numbers, or the unit does not resolve.
pub fn from_record<T: UnitTable + ?Sized>(record: &QuantityRecord, table: &T) -> SerializationResult<Quantity> {
    if record.kind != RECORD_TYPE {
        return Err(SerializationError::Format(format!(
            "expected type '{RECORD_TYPE}', found '{}'",
            record.kind
        )));
    }
    if major(&record.version) != major(FORMAT_VERSION) {
        return Err(SerializationError::Version {
            found: record.version.clone(),
            supported: FORMAT_VERSION,
        });
    }
    let magnitude = magnitude_from_value(&record.value)?;
    let unit = Unit::parse(&record.unit, table)?;
    Ok(Quantity::new(magnitude, unit)?)
}

/// Serializes a quantity to compact JSON.
pub fn to_json(quantity: &Quantity) -> SerializationResult<String> {
    Ok(serde_json::to_string(&to_record(quantity))?)
}

/// Serializes a quantity to indented JSON.
pub fn to_json_pretty(quantity: &Quantity) -> SerializationResult<String> {
    Ok(serde_json::to_string_pretty(&to_record(quantity))?)
}

/// Parses a JSON record.
///
/// ```rust
/// use unifyt::{serialization, UnitRegistry};
///
/// let json = r#"{"type": "Quantity", "value": 100, "unit": "meter", "version": "1.0"}"#;
/// let q = serialization::from_json(json, UnitRegistry::global()).unwrap();
/// assert_eq!(q.value(), Some(100.0));
/// ```
pub fn from_json<T: UnitTable + ?Sized>(json: &str, table: &T) -> SerializationResult<Quantity> {
    let record: QuantityRecord = serde_json::from_str(json)?;
    from_record(&record, table)
}

/// Writes a quantity to a JSON file, replacing any existing content.
pub fn save_quantity(quantity: &Quantity, path: impl AsRef<Path>) -> SerializationResult<()> {
    let path = path.as_ref();
    fs::write(path, to_json_pretty(quantity)?)?;
    log::debug!("saved quantity to {}", path.display());
    Ok(())
}

/// Reads a quantity from a JSON file.
pub fn load_quantity<T: UnitTable + ?Sized>(path: impl AsRef<Path>, table: &T) -> SerializationResult<Quantity> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    log::debug!("loading quantity from {}", path.display());
    from_json(&contents, table)
}

fn major(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

fn nested(array: ArrayViewD<'_, f64>) -> Value {
    if array.ndim() <= 1 {
        Value::Array(array.iter().map(|&v| Value::from(v)).collect())
    } else {
        Value::Array(array.outer_iter().map(nested).collect())
    }
}

fn magnitude_from_value(value: &Value) -> SerializationResult<Magnitude> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(Magnitude::Scalar)
            .ok_or_else(|| SerializationError::Format(format!("value {n} is not representable as f64"))),
        Value::Array(_) => {
            let mut walk = Flatten::default();
            walk.visit(value, 0)?;
            Ok(Magnitude::from_shape_vec(&walk.shape, walk.data)?)
        }
        other => Err(SerializationError::Format(format!(
            "value must be a number or a list of numbers, found {other}"
        ))),
    }
}

/// Row-major flattening of nested JSON lists, checking that they are rectangular.
#[derive(Default)]
struct Flatten {
    shape: Vec<usize>,
    data: Vec<f64>,
    leaf_depth: Option<usize>,
}

impl Flatten {
    fn visit(&mut self, value: &Value, depth: usize) -> SerializationResult<()> {
        match value {
            Value::Array(items) => {
                if self.leaf_depth.is_some_and(|leaf| depth >= leaf) {
                    return Err(ragged());
                }
                match self.shape.get(depth) {
                    Some(&len) if len != items.len() => return Err(ragged()),
                    Some(_) => {}
                    None => self.shape.push(items.len()),
                }
                items.iter().try_for_each(|item| self.visit(item, depth + 1))
            }
            Value::Number(n) => {
                if depth != self.shape.len() || self.leaf_depth.is_some_and(|leaf| leaf != depth) {
                    return Err(ragged());
                }
                self.leaf_depth = Some(depth);
                let v = n
                    .as_f64()
                    .ok_or_else(|| SerializationError::Format(format!("value {n} is not representable as f64")))?;
                self.data.push(v);
                Ok(())
            }
            other => Err(SerializationError::Format(format!(
                "array elements must be numbers, found {other}"
            ))),
        }
    }
}

fn ragged() -> SerializationError {
    SerializationError::Format("nested lists must be rectangular".to_string())
}
