//! Named predicate filters.
//!
//! The engine keeps only the *values* of the active filters
//! ([`ActiveFilters`]). The predicates that interpret those values live in a
//! [`PredicateSet`] the caller supplies with every evaluation, so predicate
//! logic can change without invalidating filter state.
//!
//! Active filters combine with AND: an item survives only if every active
//! filter's predicate accepts it.

use std::collections::BTreeMap;
use std::fmt;

/// The value a filter is set to.
///
/// [`FilterValue::Unset`] and an empty [`FilterValue::Text`] are inactive:
/// they stay in the map but do not narrow the collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterValue {
    /// No value selected.
    #[default]
    Unset,
    /// Text value, e.g. a selected status or role.
    Text(String),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Boolean toggle.
    Bool(bool),
}

impl FilterValue {
    /// Returns `true` if this value narrows the collection.
    pub fn is_active(&self) -> bool {
        match self {
            FilterValue::Unset => false,
            FilterValue::Text(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Extracts the text value, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the integer value, if present.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FilterValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts a numeric value, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FilterValue::Int(n) => Some(*n as f64),
            FilterValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FilterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Unset => Ok(()),
            FilterValue::Text(s) => f.write_str(s),
            FilterValue::Int(n) => write!(f, "{n}"),
            FilterValue::Float(n) => write!(f, "{n}"),
            FilterValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Int(n)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        FilterValue::Int(n.into())
    }
}

impl From<u32> for FilterValue {
    fn from(n: u32) -> Self {
        FilterValue::Int(n.into())
    }
}

impl From<f64> for FilterValue {
    fn from(n: f64) -> Self {
        FilterValue::Float(n)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Bool(b)
    }
}

impl<V: Into<FilterValue>> From<Option<V>> for FilterValue {
    fn from(v: Option<V>) -> Self {
        v.map_or(FilterValue::Unset, Into::into)
    }
}

/// The current value of every filter the user has touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveFilters {
    values: BTreeMap<String, FilterValue>,
}

impl ActiveFilters {
    /// Creates an empty filter map.
    pub fn new() -> Self {
        ActiveFilters::default()
    }

    /// Sets a filter's value.
    pub fn update(&mut self, name: impl Into<String>, value: impl Into<FilterValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Removes one filter. Returns its previous value.
    pub fn clear(&mut self, name: &str) -> Option<FilterValue> {
        self.values.remove(name)
    }

    /// Removes every filter.
    pub fn clear_all(&mut self) {
        self.values.clear();
    }

    /// Returns a filter's value, if it has one.
    pub fn get(&self, name: &str) -> Option<&FilterValue> {
        self.values.get(name)
    }

    /// Returns `true` if any filter would narrow the collection.
    pub fn is_active(&self) -> bool {
        self.values.values().any(FilterValue::is_active)
    }

    /// Returns `true` if no filter has been set, active or not.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over filters that narrow the collection.
    pub fn iter_active(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.values
            .iter()
            .filter(|(_, v)| v.is_active())
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Human-readable summary such as `"role=admin, status=active"`.
    ///
    /// Returns `None` when nothing is active.
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<String> = self
            .iter_active()
            .map(|(name, value)| format!("{name}={value}"))
            .collect();

        (!parts.is_empty()).then(|| parts.join(", "))
    }
}

type Predicate<'p, T> = Box<dyn Fn(&T, &FilterValue) -> bool + 'p>;

/// Caller-defined predicates, keyed by filter name.
///
/// # Example
///
/// ```
/// use sift::{ActiveFilters, PredicateSet};
///
/// struct Device {
///     status: &'static str,
///     battery: u8,
/// }
///
/// let devices = vec![
///     Device { status: "online", battery: 80 },
///     Device { status: "offline", battery: 90 },
///     Device { status: "online", battery: 10 },
/// ];
///
/// let predicates = PredicateSet::new()
///     .with("status", |d: &Device, v| v.as_str() == Some(d.status))
///     .with("min_battery", |d: &Device, v| {
///         v.as_int().is_some_and(|min| i64::from(d.battery) >= min)
///     });
///
/// let mut filters = ActiveFilters::new();
/// filters.update("status", "online");
/// filters.update("min_battery", 50);
///
/// let results = predicates.apply(&devices, &filters);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].battery, 80);
/// ```
pub struct PredicateSet<'p, T> {
    predicates: BTreeMap<String, Predicate<'p, T>>,
}

impl<'p, T> Default for PredicateSet<'p, T> {
    fn default() -> Self {
        PredicateSet {
            predicates: BTreeMap::new(),
        }
    }
}

impl<T> fmt::Debug for PredicateSet<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateSet")
            .field("names", &self.predicates.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<'p, T> PredicateSet<'p, T> {
    /// Creates an empty predicate set.
    pub fn new() -> Self {
        PredicateSet::default()
    }

    /// Registers a predicate, replacing any previous one with the same name.
    pub fn with<P>(mut self, name: impl Into<String>, predicate: P) -> Self
    where
        P: Fn(&T, &FilterValue) -> bool + 'p,
    {
        self.insert(name, predicate);
        self
    }

    /// Registers a predicate in place.
    pub fn insert<P>(&mut self, name: impl Into<String>, predicate: P)
    where
        P: Fn(&T, &FilterValue) -> bool + 'p,
    {
        self.predicates.insert(name.into(), Box::new(predicate));
    }

    /// Returns `true` if a predicate is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Returns `true` if `item` passes every active filter.
    ///
    /// Active filters with no registered predicate are ignored.
    pub fn matches(&self, item: &T, filters: &ActiveFilters) -> bool {
        filters
            .iter_active()
            .all(|(name, value)| match self.predicates.get(name) {
                Some(predicate) => predicate(item, value),
                None => true,
            })
    }

    /// Filters a slice, keeping input order.
    pub fn apply<'a>(&self, items: &'a [T], filters: &ActiveFilters) -> Vec<&'a T> {
        self.apply_refs(items.iter().collect(), filters)
    }

    /// Filters an already-narrowed list of references, keeping its order.
    pub fn apply_refs<'a>(&self, mut items: Vec<&'a T>, filters: &ActiveFilters) -> Vec<&'a T> {
        if !filters.is_active() {
            return items;
        }

        for (name, _) in filters.iter_active() {
            if !self.contains(name) {
                tracing::trace!(target: "sift::filter", filter = name, "no predicate registered, skipping");
            }
        }

        items.retain(|item| self.matches(item, filters));
        items
    }
}
