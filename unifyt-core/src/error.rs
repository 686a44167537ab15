//! Error types for unit resolution, conversion and quantity arithmetic.

use crate::dimension::Dimension;
use core::fmt::{Display, Formatter};

/// Result type for unit and quantity operations
pub type UnitResult<T> = Result<T, UnitError>;

/// The operation that was being attempted when an error was raised.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Building a quantity or unit from raw parts.
    Construction,
    /// Converting between units.
    Conversion,
    /// `a + b`.
    Addition,
    /// `a - b`.
    Subtraction,
    /// `a * b`.
    Multiplication,
    /// `a / b`.
    Division,
    /// `a ^ n`.
    Exponentiation,
    /// Ordering comparisons.
    Comparison,
    /// Reductions and other array utilities.
    Aggregation,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Operation::Construction => "construction",
            Operation::Conversion => "conversion",
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Exponentiation => "exponentiation",
            Operation::Comparison => "comparison",
            Operation::Aggregation => "aggregation",
        })
    }
}

/// Error type for unit and quantity operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum UnitError {
    /// A unit name is absent from the table.
    #[error("unit '{name}' not recognized{}", did_you_mean(.suggestions))]
    UnitNotFound {
        /// The unresolved name.
        name: String,
        /// Near-miss names offered by the table, possibly empty.
        suggestions: Vec<String>,
    },

    /// A compound-unit expression is malformed.
    #[error("cannot parse unit expression '{input}' at position {position}: {reason}")]
    Parse {
        /// The full expression.
        input: String,
        /// Byte offset of the offending token.
        position: usize,
        /// What went wrong.
        reason: String,
    },

    /// The operands of an operation have different dimensions.
    #[error(
        "cannot perform {operation} with incompatible dimensions: \
         '{left}' [{left_dimension}] and '{right}' [{right_dimension}]"
    )]
    Dimensionality {
        /// Attempted operation.
        operation: Operation,
        /// Printed left (or source) unit.
        left: String,
        /// Printed right (or target) unit.
        right: String,
        /// Dimension of the left unit.
        left_dimension: Dimension,
        /// Dimension of the right unit.
        right_dimension: Dimension,
    },

    /// A magnitude became NaN or a value violates a declared constraint.
    #[error("invalid value in {operation}: {reason}")]
    InvalidValue {
        /// Attempted operation.
        operation: Operation,
        /// What went wrong.
        reason: String,
    },

    /// A magnitude is infinite or exceeds the configured threshold.
    #[error("overflow in {operation}: magnitude {magnitude} exceeds limit {limit}")]
    Overflow {
        /// Attempted operation.
        operation: Operation,
        /// Largest absolute magnitude found.
        magnitude: f64,
        /// Threshold in force.
        limit: f64,
    },

    /// Array shapes cannot be broadcast together, or an axis is out of range.
    #[error("shape error in {operation}: {reason}")]
    Shape {
        /// Attempted operation.
        operation: Operation,
        /// What went wrong.
        reason: String,
    },
}

impl UnitError {
    /// Operation attached to the error, if the variant records one.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            UnitError::UnitNotFound { .. } | UnitError::Parse { .. } => None,
            UnitError::Dimensionality { operation, .. }
            | UnitError::InvalidValue { operation, .. }
            | UnitError::Overflow { operation, .. }
            | UnitError::Shape { operation, .. } => Some(*operation),
        }
    }

    pub(crate) fn parse(input: &str, position: usize, reason: impl Into<String>) -> Self {
        UnitError::Parse {
            input: input.to_string(),
            position,
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(operation: Operation, reason: impl Into<String>) -> Self {
        UnitError::InvalidValue {
            operation,
            reason: reason.into(),
        }
    }
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_lists_suggestions() {
        let err = UnitError::UnitNotFound {
            name: "metr".into(),
            suggestions: vec!["meter".into(), "meters".into()],
        };
        assert_eq!(
            err.to_string(),
            "unit 'metr' not recognized; did you mean: meter, meters?"
        );
    }

    #[test]
    fn not_found_message_without_suggestions() {
        let err = UnitError::UnitNotFound {
            name: "blob".into(),
            suggestions: vec![],
        };
        assert_eq!(err.to_string(), "unit 'blob' not recognized");
    }

    #[test]
    fn dimensionality_message_names_operation_and_units() {
        let err = UnitError::Dimensionality {
            operation: Operation::Addition,
            left: "meter".into(),
            right: "second".into(),
            left_dimension: Dimension::LENGTH,
            right_dimension: Dimension::TIME,
        };
        let msg = err.to_string();
        assert!(msg.contains("addition"));
        assert!(msg.contains("'meter' [length]"));
        assert!(msg.contains("'second' [time]"));
        assert_eq!(err.operation(), Some(Operation::Addition));
    }

    #[test]
    fn parse_error_carries_position() {
        let err = UnitError::parse("m //", 3, "expected unit name or number");
        assert_eq!(
            err.to_string(),
            "cannot parse unit expression 'm //' at position 3: expected unit name or number"
        );
        assert_eq!(err.operation(), None);
    }
}
