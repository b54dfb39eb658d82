//! crates/logging/src/enablement.rs
//! Enabled/disabled membership for categories and levels.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::levels::{Category, Level};

/// Boolean membership store with default-off semantics.
#[derive(Clone, Debug)]
struct Switches<K> {
    states: FxHashMap<K, bool>,
}

impl<K> Default for Switches<K> {
    fn default() -> Self {
        Self {
            states: FxHashMap::default(),
        }
    }
}

impl<K> Switches<K>
where
    K: Clone + Eq + Hash + AsRef<str> + std::borrow::Borrow<str>,
{
    fn enable(&mut self, key: K) {
        self.states.insert(key, true);
    }

    // Unknown keys stay absent.
    fn disable(&mut self, key: &str) {
        if let Some(state) = self.states.get_mut(key) {
            *state = false;
        }
    }

    fn disable_all(&mut self) {
        for state in self.states.values_mut() {
            *state = false;
        }
    }

    fn is_enabled(&self, key: &str) -> bool {
        self.states.get(key).copied().unwrap_or(false)
    }

    fn known(&self) -> Vec<K> {
        let mut keys: Vec<_> = self.states.keys().cloned().collect();
        keys.sort_unstable_by(|a, b| a.as_ref().cmp(b.as_ref()));
        keys
    }

    fn enabled(&self) -> Vec<K> {
        let mut keys: Vec<_> = self
            .states
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(key, _)| key.clone())
            .collect();
        keys.sort_unstable_by(|a, b| a.as_ref().cmp(b.as_ref()));
        keys
    }
}

/// Category and level enable-state for one logger.
///
/// The two mappings are independent. An identifier that was never enabled
/// reads as disabled, and disabling an identifier keeps it known so that
/// [`known_categories`](Self::known_categories) still lists it.
///
/// # Examples
///
/// ```
/// use logging::{EnablementRegistry, Level};
///
/// let mut registry = EnablementRegistry::new();
/// registry.enable_level(Level::INFO);
/// registry.enable_category("db");
///
/// assert!(registry.is_level_enabled(&Level::INFO));
/// assert!(registry.is_category_enabled("db"));
/// assert!(!registry.is_category_enabled("net"));
///
/// registry.disable_all_categories();
/// assert!(!registry.is_category_enabled("db"));
/// assert_eq!(registry.known_categories().len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EnablementRegistry {
    categories: Switches<Category>,
    levels: Switches<Level>,
}

impl EnablementRegistry {
    /// Creates a registry with nothing enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables `category`, inserting it if unknown.
    pub fn enable_category(&mut self, category: impl Into<Category>) {
        self.categories.enable(category.into());
    }

    /// Disables `category`. Unknown categories are left absent.
    pub fn disable_category(&mut self, category: impl AsRef<str>) {
        self.categories.disable(category.as_ref());
    }

    /// Enables `level`, inserting it if unknown.
    pub fn enable_level(&mut self, level: impl Into<Level>) {
        self.levels.enable(level.into());
    }

    /// Disables `level`. Unknown levels are left absent.
    pub fn disable_level(&mut self, level: impl AsRef<str>) {
        self.levels.disable(level.as_ref());
    }

    /// Disables every currently known category without forgetting it.
    pub fn disable_all_categories(&mut self) {
        self.categories.disable_all();
    }

    /// Disables every currently known level without forgetting it.
    pub fn disable_all_levels(&mut self) {
        self.levels.disable_all();
    }

    /// Reports whether `category` is enabled.
    #[must_use]
    pub fn is_category_enabled(&self, category: impl AsRef<str>) -> bool {
        self.categories.is_enabled(category.as_ref())
    }

    /// Reports whether `level` is enabled.
    #[must_use]
    pub fn is_level_enabled(&self, level: impl AsRef<str>) -> bool {
        self.levels.is_enabled(level.as_ref())
    }

    /// Every category ever enabled, sorted.
    #[must_use]
    pub fn known_categories(&self) -> Vec<Category> {
        self.categories.known()
    }

    /// Categories currently enabled, sorted.
    #[must_use]
    pub fn enabled_categories(&self) -> Vec<Category> {
        self.categories.enabled()
    }

    /// Every level ever enabled, sorted.
    #[must_use]
    pub fn known_levels(&self) -> Vec<Level> {
        self.levels.known()
    }

    /// Levels currently enabled, sorted.
    #[must_use]
    pub fn enabled_levels(&self) -> Vec<Level> {
        self.levels.enabled()
    }
}
