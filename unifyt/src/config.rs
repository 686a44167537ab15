//! TOML configuration.
//!
//! A configuration file sets the overflow threshold and describes the registry an application wants:
//!
//! ```toml
//! [limits]
//! max_magnitude = 1e30
//!
//! [registry]
//! include_builtin = true
//!
//! [[registry.units]]
//! name = "stadion"
//! definition = "600 foot"
//!
//! [[registry.units]]
//! name = "smoot"
//! dimension = [1, 0, 0, 0, 0, 0, 0]
//! scale = 1.7018
//!
//! [registry.aliases]
//! klick = "kilometer"
//! ```
//!
//! Every section and key is optional.

use crate::error::{ConfigError, ConfigResult};
use crate::registry::UnitRegistry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use unifyt_core::{Dimension, Limits, BASE_QUANTITY_COUNT};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "UNIFYT_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnifytConfig {
    #[serde(default)]
    pub limits: LimitSettings,
    #[serde(default)]
    pub registry: RegistrySettings,
}

/// `[limits]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitSettings {
    #[serde(default = "default_max_magnitude")]
    pub max_magnitude: f64,
}

/// `[registry]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySettings {
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
    #[serde(default)]
    pub units: Vec<UnitSettings>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// One `[[registry.units]]` entry: either a `definition` expression or a `dimension` plus `scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSettings {
    pub name: String,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub dimension: Option<[f64; BASE_QUANTITY_COUNT]>,
    #[serde(default)]
    pub scale: Option<f64>,
}

fn default_max_magnitude() -> f64 {
    Limits::DEFAULT.max_magnitude()
}

fn default_include_builtin() -> bool {
    true
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_magnitude: default_max_magnitude(),
        }
    }
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            include_builtin: default_include_builtin(),
            units: Vec::new(),
            aliases: BTreeMap::new(),
        }
    }
}

impl UnifytConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        log::debug!("loading unifyt config from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: UnifytConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Uses the file named by `UNIFYT_CONFIG` when set, otherwise the first of `unifyt.toml` and
    /// `config/unifyt.toml` that exists.
    pub fn from_default_location() -> ConfigResult<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Self::from_file(PathBuf::from(path));
        }

        let search_paths = [
            PathBuf::from("unifyt.toml"),
            PathBuf::from("config/unifyt.toml"),
        ];
        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(ConfigError::NotFound)
    }

    /// Like [`from_default_location`](Self::from_default_location), falling back to the defaults when no file
    /// exists. Files that exist but are invalid are still errors.
    pub fn load_default() -> ConfigResult<Self> {
        match Self::from_default_location() {
            Err(ConfigError::NotFound) => {
                log::warn!("no unifyt.toml found, using default configuration");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Checks values serde cannot check.
    pub fn validate(&self) -> ConfigResult<()> {
        self.limits()?;
        for (index, unit) in self.registry.units.iter().enumerate() {
            let key = format!("registry.units[{index}]");
            match (&unit.definition, unit.dimension, unit.scale) {
                (Some(_), None, None) | (None, Some(_), Some(_)) => {}
                (Some(_), _, _) => {
                    return Err(invalid(key, "'definition' cannot be combined with 'dimension' or 'scale'"))
                }
                (None, _, _) => {
                    return Err(invalid(key, "needs either 'definition' or both 'dimension' and 'scale'"))
                }
            }
        }
        Ok(())
    }

    /// The `[limits]` section as [`Limits`].
    pub fn limits(&self) -> ConfigResult<Limits> {
        Limits::new(self.limits.max_magnitude)
            .map_err(|e| invalid("limits.max_magnitude".to_string(), &e.to_string()))
    }

    /// Installs the configured limits process-wide.
    ///
    /// Returns `false` (and logs a warning) when limits were already installed.
    pub fn install_limits(&self) -> ConfigResult<bool> {
        Ok(self.limits()?.install().is_ok())
    }

    /// Builds the registry described by the `[registry]` section.
    ///
    /// Units are defined in file order, so a definition may refer to units listed before it. Aliases may point at
    /// other aliases in any order.
    pub fn build_registry(&self) -> ConfigResult<UnitRegistry> {
        let settings = &self.registry;
        let mut registry = if settings.include_builtin {
            UnitRegistry::with_builtin()
        } else {
            UnitRegistry::new()
        };

        for unit in &settings.units {
            match (&unit.definition, unit.dimension, unit.scale) {
                (Some(definition), _, _) => {
                    registry.define(&unit.name, definition)?;
                }
                (None, Some(exponents), Some(scale)) => {
                    registry.define_unit(&unit.name, Dimension::new(exponents), scale)?;
                }
                _ => {
                    return Err(invalid(
                        format!("registry.units.{}", unit.name),
                        "needs either 'definition' or both 'dimension' and 'scale'",
                    ))
                }
            }
        }

        let mut pending: Vec<(&String, &String)> = settings.aliases.iter().collect();
        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|(alias, target)| {
                if registry.contains(target.as_str()) {
                    registry.alias(alias, target).is_err()
                } else {
                    true
                }
            });
            if pending.len() == before {
                let (alias, target) = pending[0];
                registry.alias(alias, target)?;
            }
        }

        log::debug!(
            "built registry with {} units, {} custom, {} aliases",
            registry.len(),
            registry.custom_units().len(),
            registry.aliases().len()
        );
        Ok(registry)
    }
}

fn invalid(key: String, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        key,
        reason: reason.to_string(),
    }
}
