//! Error types for the registry, constants, serialization and configuration layers.
//!
//! Arithmetic and parsing failures are [`UnitError`]s from `unifyt-core`; the types here wrap them where a
//! higher-level operation (defining a unit, loading a record, applying a config file) fails because of one.

use unifyt_core::UnitError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Result type for constant lookups
pub type ConstantResult<T> = Result<T, ConstantError>;

/// Result type for serialization operations
pub type SerializationResult<T> = Result<T, SerializationError>;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error type for registry mutations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    /// The name is already taken by a unit or an alias.
    #[error("unit '{0}' is already defined")]
    AlreadyDefined(String),

    /// The name cannot be used as a unit name.
    #[error("invalid unit name '{name}': {reason}")]
    InvalidName {
        /// Rejected name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The definition does not describe a valid unit.
    #[error("invalid definition for unit '{name}': {source}")]
    InvalidDefinition {
        /// Unit being defined.
        name: String,
        /// Underlying parse or validation failure.
        #[source]
        source: UnitError,
    },

    /// An alias points at a name the registry does not know.
    #[error("cannot define alias '{alias}': unknown unit '{target}'")]
    UnknownAliasTarget {
        /// Alias being defined.
        alias: String,
        /// Missing target.
        target: String,
    },
}

/// Error type for constant lookups
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConstantError {
    /// No constant has this name or symbol.
    #[error("physical constant '{name}' not recognized{}", did_you_mean(.suggestions))]
    NotFound {
        /// The unresolved name.
        name: String,
        /// Constants whose name starts with the query.
        suggestions: Vec<String>,
    },

    /// The constant's unit expression failed to resolve.
    #[error(transparent)]
    Unit(#[from] UnitError),
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Error type for quantity records
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// The record is structurally wrong (bad `type` tag, missing field, …).
    #[error("invalid quantity record: {0}")]
    Format(String),

    /// The record was written by an incompatible format version.
    #[error("unsupported record version '{found}' (supported: {supported})")]
    Version {
        /// Version found in the record.
        found: String,
        /// Version this crate writes.
        supported: &'static str,
    },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored unit or value could not be turned back into a quantity.
    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Io {
        /// File that failed.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A setting has an unacceptable value.
    #[error("invalid setting '{key}': {reason}")]
    Invalid {
        /// Dotted key of the setting.
        key: String,
        /// What is wrong with it.
        reason: String,
    },

    /// No config file was found in the default locations.
    #[error("no unifyt.toml found in standard locations")]
    NotFound,

    /// Applying the registry section failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use unifyt_core::Operation;

    #[test]
    fn registry_messages() {
        assert_eq!(
            RegistryError::AlreadyDefined("meter".into()).to_string(),
            "unit 'meter' is already defined"
        );
        let err = RegistryError::InvalidDefinition {
            name: "smoot".into(),
            source: UnitError::InvalidValue {
                operation: Operation::Construction,
                reason: "unit scale must be positive, got 0".into(),
            },
        };
        assert!(err.to_string().starts_with("invalid definition for unit 'smoot'"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn constant_messages_name_the_constant() {
        let err = ConstantError::NotFound {
            name: "planck_".into(),
            suggestions: vec!["planck_length".into()],
        };
        assert_eq!(
            err.to_string(),
            "physical constant 'planck_' not recognized; did you mean: planck_length?"
        );
        let bare = ConstantError::NotFound {
            name: "zzz".into(),
            suggestions: Vec::new(),
        };
        assert_eq!(bare.to_string(), "physical constant 'zzz' not recognized");
    }

    #[test]
    fn version_message() {
        let err = SerializationError::Version {
            found: "2.0".into(),
            supported: "1.0",
        };
        assert_eq!(
            err.to_string(),
            "unsupported record version '2.0' (supported: 1.0)"
        );
    }
}
