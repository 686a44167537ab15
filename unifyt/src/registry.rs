//! Unit registry.
//!
//! A [`UnitRegistry`] owns the name → definition map the engine resolves units through. It starts either empty or
//! pre-loaded with the built-in tables from [`crate::units`], and can be extended at runtime with custom units
//! (by dimension and scale, or by a compound definition such as `"220 yard"`) and aliases.
//!
//! The registry implements [`UnitTable`], so it plugs straight into [`Unit::parse`], [`Quantity::create`] and
//! friends. Lookups are plain hash-map reads; mutation requires `&mut self`, so a registry shared across threads is
//! read-only unless the caller wraps it in a lock.

use crate::error::{RegistryError, RegistryResult};
use crate::units;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap, HashSet};
use unifyt_core::{
    Dimension, Magnitude, Quantity, Unit, UnitDef, UnitEntry, UnitResult, UnitSpec, UnitTable,
};

/// Maximum number of suggestions attached to an unknown-unit error.
const MAX_SUGGESTIONS: usize = 3;

/// Maximum edit distance for a name to be suggested.
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Characters that cannot appear in a user-defined unit name.
const RESERVED: &[char] = &['*', '/', '^', '(', ')', '+', '-'];

static GLOBAL: Lazy<UnitRegistry> = Lazy::new(UnitRegistry::with_builtin);

// =============================================================================
// Registry
// =============================================================================

/// Mutable map from unit names (and aliases) to their definitions.
///
/// ```rust
/// use unifyt::UnitRegistry;
///
/// let mut registry = UnitRegistry::with_builtin();
/// registry.define("stadion", "600 foot").unwrap();
///
/// let race = registry.quantity(8.8, "stadion").unwrap();
/// let miles = race.to_spec("mile", &registry).unwrap();
/// assert!((miles.value().unwrap() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    units: HashMap<String, UnitDef>,
    custom: Vec<String>,
    aliases: BTreeMap<String, String>,
}

impl UnitRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            units: HashMap::new(),
            custom: Vec::new(),
            aliases: BTreeMap::new(),
        }
    }

    /// A registry holding every built-in unit.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for entry in units::entries() {
            for &name in entry.names {
                registry.units.insert(name.to_string(), entry.def());
            }
        }
        log::debug!("loaded {} built-in unit names", registry.units.len());
        registry
    }

    /// The lazily built, read-only registry of built-in units.
    pub fn global() -> &'static UnitRegistry {
        &GLOBAL
    }

    /// Adds every name of every entry.
    ///
    /// Nothing is inserted if any name is already taken or appears twice in `entries`.
    pub fn insert_entries(&mut self, entries: &[UnitEntry]) -> RegistryResult<()> {
        let mut seen = HashSet::new();
        let mut pending = Vec::new();
        for entry in entries {
            for &name in entry.names {
                if self.is_taken(name) || !seen.insert(name) {
                    return Err(RegistryError::AlreadyDefined(name.to_string()));
                }
                pending.push((name, entry.def()));
            }
        }
        for (name, def) in pending {
            self.units.insert(name.to_string(), def);
            self.custom.push(name.to_string());
        }
        log::debug!("inserted {} unit entries", entries.len());
        Ok(())
    }

    /// Defines a unit from its dimension and scale to the base unit of that dimension.
    pub fn define_unit(&mut self, name: &str, dimension: Dimension, scale: f64) -> RegistryResult<Unit> {
        validate_name(name)?;
        self.ensure_free(name)?;
        let unit = Unit::new(name, dimension, scale).map_err(|source| RegistryError::InvalidDefinition {
            name: name.to_string(),
            source,
        })?;
        self.insert_custom(name, &unit);
        Ok(unit)
    }

    /// Defines a unit from a compound expression, optionally scaled by a number.
    ///
    /// ```rust
    /// use unifyt::UnitRegistry;
    ///
    /// let mut registry = UnitRegistry::with_builtin();
    /// let pace = registry.define("verst_per_hour", "1066.8 meter / hour").unwrap();
    /// assert!((pace.scale() - 1066.8 / 3600.0).abs() < 1e-12);
    /// ```
    pub fn define(&mut self, name: &str, definition: &str) -> RegistryResult<Unit> {
        validate_name(name)?;
        self.ensure_free(name)?;
        let parsed = Unit::parse(definition, &*self).map_err(|source| RegistryError::InvalidDefinition {
            name: name.to_string(),
            source,
        })?;
        let unit = parsed.renamed(name);
        self.insert_custom(name, &unit);
        Ok(unit)
    }

    /// Makes `alias` resolve to whatever `target` resolves to.
    ///
    /// Aliases of aliases collapse to the final unit name.
    pub fn alias(&mut self, alias: &str, target: &str) -> RegistryResult<()> {
        validate_name(alias)?;
        self.ensure_free(alias)?;
        let resolved = self.resolve_name(target);
        if !self.units.contains_key(resolved) {
            return Err(RegistryError::UnknownAliasTarget {
                alias: alias.to_string(),
                target: target.to_string(),
            });
        }
        let resolved = resolved.to_string();
        log::debug!("alias '{alias}' -> '{resolved}'");
        self.aliases.insert(alias.to_string(), resolved);
        Ok(())
    }

    /// Resolves a unit expression.
    #[inline]
    pub fn unit(&self, expression: &str) -> UnitResult<Unit> {
        Unit::parse(expression, self)
    }

    /// Creates a quantity from a magnitude and a unit spec resolved through this registry.
    #[inline]
    pub fn quantity<S: UnitSpec>(&self, magnitude: impl Into<Magnitude>, spec: S) -> UnitResult<Quantity> {
        Quantity::create(magnitude, spec, self)
    }

    /// `true` when `name` is a unit or an alias.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of unit names, not counting aliases.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// `true` when no units are registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Every unit name, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.units.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Names added after construction, in definition order.
    #[inline]
    pub fn custom_units(&self) -> &[String] {
        &self.custom
    }

    /// Alias → unit name map.
    #[inline]
    pub fn aliases(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }

    /// Definition of a unit name or alias.
    #[inline]
    pub fn definition(&self, name: &str) -> Option<UnitDef> {
        self.lookup(name)
    }

    fn resolve_name<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    fn is_taken(&self, name: &str) -> bool {
        self.units.contains_key(name) || self.aliases.contains_key(name)
    }

    fn ensure_free(&self, name: &str) -> RegistryResult<()> {
        if self.is_taken(name) {
            return Err(RegistryError::AlreadyDefined(name.to_string()));
        }
        Ok(())
    }

    fn insert_custom(&mut self, name: &str, unit: &Unit) {
        log::debug!(
            "defined unit '{name}' [{}] scale {}",
            unit.dimension(),
            unit.scale()
        );
        self.units
            .insert(name.to_string(), UnitDef::new(unit.dimension(), unit.scale()));
        self.custom.push(name.to_string());
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl UnitTable for UnitRegistry {
    fn lookup(&self, name: &str) -> Option<UnitDef> {
        self.units.get(self.resolve_name(name)).copied()
    }

    fn suggest(&self, name: &str) -> Vec<String> {
        let query = name.to_lowercase();
        let mut scored: Vec<(usize, &str)> = self
            .units
            .keys()
            .chain(self.aliases.keys())
            .filter_map(|candidate| {
                let lowered = candidate.to_lowercase();
                let distance = levenshtein(&query, &lowered);
                let close = distance <= MAX_SUGGESTION_DISTANCE;
                let prefixed = !query.is_empty() && lowered.starts_with(&query);
                (close || prefixed).then_some((distance, candidate.as_str()))
            })
            .collect();
        scored.sort_unstable();
        scored
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn validate_name(name: &str) -> RegistryResult<()> {
    let reject = |reason: &str| {
        Err(RegistryError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    };
    if name.is_empty() {
        return reject("name is empty");
    }
    if name.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return reject("name starts with a number");
    }
    if let Some(c) = name.chars().find(|&c| c.is_whitespace() || RESERVED.contains(&c)) {
        return reject(&format!("'{c}' is not allowed in unit names"));
    }
    Ok(())
}

/// Edit distance over chars, two rows at a time.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use unifyt_core::UnitError;

    #[test]
    fn builtin_registry_resolves_every_alias() {
        let registry = UnitRegistry::with_builtin();
        let total: usize = units::entries().map(|e| e.names.len()).sum();
        assert_eq!(registry.len(), total);
        assert_eq!(registry.definition("km"), registry.definition("kilometer"));
        assert!(registry.contains("Hz"));
        assert!(!registry.contains("celsius"));
    }

    #[test]
    fn empty_registry() {
        let registry = UnitRegistry::new();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.unit("meter"),
            Err(UnitError::UnitNotFound { .. })
        ));
    }

    #[test]
    fn define_by_dimension_and_scale() {
        let mut registry = UnitRegistry::with_builtin();
        let smoot = registry.define_unit("smoot", Dimension::LENGTH, 1.7018).unwrap();
        assert_eq!(smoot.to_string(), "smoot");
        let bridge = registry.quantity(364.4, "smoot").unwrap();
        assert_relative_eq!(
            bridge.to_spec("meter", &registry).unwrap().value().unwrap(),
            620.14,
            max_relative = 1e-4
        );
        assert_eq!(registry.custom_units(), ["smoot".to_string()]);
    }

    #[test]
    fn define_from_expression() {
        let mut registry = UnitRegistry::with_builtin();
        registry.define("stadion", "600 foot").unwrap();
        registry.define("sennight", "7 day").unwrap();
        let speed = registry.unit("stadion / sennight").unwrap();
        let mps = registry.unit("meter / second").unwrap();
        assert_relative_eq!(
            speed.conversion_factor_to(&mps).unwrap(),
            182.88 / 604_800.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn redefinition_is_rejected() {
        let mut registry = UnitRegistry::with_builtin();
        assert_eq!(
            registry.define_unit("meter", Dimension::LENGTH, 2.0),
            Err(RegistryError::AlreadyDefined("meter".into()))
        );
        registry.alias("metro", "meter").unwrap();
        assert_eq!(
            registry.define("metro", "2 meter").unwrap_err(),
            RegistryError::AlreadyDefined("metro".into())
        );
    }

    #[test]
    fn invalid_names() {
        let mut registry = UnitRegistry::with_builtin();
        for name in ["", "2x", "a b", "m/s", "x^2", "(m)", "a*b", "k-m"] {
            assert!(
                matches!(
                    registry.define_unit(name, Dimension::LENGTH, 1.0),
                    Err(RegistryError::InvalidName { .. })
                ),
                "{name:?}"
            );
        }
    }

    #[test]
    fn invalid_definitions() {
        let mut registry = UnitRegistry::with_builtin();
        assert!(matches!(
            registry.define_unit("zero", Dimension::LENGTH, 0.0),
            Err(RegistryError::InvalidDefinition { .. })
        ));
        assert!(matches!(
            registry.define("nothing", "flurb * meter"),
            Err(RegistryError::InvalidDefinition {
                source: UnitError::UnitNotFound { .. },
                ..
            })
        ));
        assert!(!registry.contains("zero"));
        assert!(!registry.contains("nothing"));
    }

    #[test]
    fn aliases_resolve_to_final_target() {
        let mut registry = UnitRegistry::with_builtin();
        registry.alias("klick", "km").unwrap();
        registry.alias("click", "klick").unwrap();
        assert_eq!(registry.aliases()["click"], "km");
        assert_eq!(registry.unit("click").unwrap().scale(), 1_000.0);
        assert!(matches!(
            registry.alias("ghost", "nowhere"),
            Err(RegistryError::UnknownAliasTarget { .. })
        ));
    }

    #[test]
    fn insert_entries_is_atomic() {
        const EXTRA: &[UnitEntry] = crate::unit_table!(Dimension::LENGTH;
            ["parasang", "prs"] => 5_556.0,
            ["cubit", "meter"] => 0.4572,
        );
        let mut registry = UnitRegistry::with_builtin();
        let before = registry.len();
        assert_eq!(
            registry.insert_entries(EXTRA),
            Err(RegistryError::AlreadyDefined("meter".into()))
        );
        assert_eq!(registry.len(), before);
        assert!(!registry.contains("parasang"));

        registry.insert_entries(&EXTRA[..1]).unwrap();
        assert!(registry.contains("prs"));
    }

    #[test]
    fn unknown_names_carry_suggestions() {
        let registry = UnitRegistry::with_builtin();
        match registry.unit("metr") {
            Err(UnitError::UnitNotFound { suggestions, .. }) => {
                assert!(suggestions.len() <= MAX_SUGGESTIONS);
                assert!(suggestions.iter().any(|s| s == "meter"), "{suggestions:?}");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(registry.suggest("zzzzzzzzzz").is_empty());
    }

    #[test]
    fn suggestions_include_prefix_matches() {
        let mut registry = UnitRegistry::new();
        registry.define_unit("kilowatt_hour", Dimension::DIMENSIONLESS, 1.0).unwrap();
        assert_eq!(registry.suggest("kilowatt"), ["kilowatt_hour".to_string()]);
    }

    #[test]
    fn custom_names_in_docs_are_not_builtin() {
        let builtin = UnitRegistry::with_builtin();
        for name in [
            "stadion",
            "sennight",
            "sta",
            "smoot",
            "beard_second",
            "bs",
            "verst_per_hour",
            "parasang",
            "prs",
            "cubit",
            "klick",
            "click",
            "metro",
        ] {
            assert!(!builtin.contains(name), "{name} is already built in");
            assert!(
                crate::units::entries().all(|entry| !entry.names.contains(&name)),
                "{name}"
            );
        }
    }

    #[test]
    fn names_are_sorted() {
        let names = UnitRegistry::global().names();
        assert!(names.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn levenshtein_distances() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("meter", "meter"), 0);
        assert_eq!(levenshtein("metre", "meter"), 2);
    }
}
