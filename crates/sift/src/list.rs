//! List view state: the full search → filter → sort → page pipeline.
//!
//! [`ListState`] owns the small pieces of UI state a list view mutates
//! (query string, active filters, sort, current page). The collection, the
//! search configuration and the predicates are passed in fresh on every
//! [`ListState::evaluate`] call, which returns a [`ListView`].
//!
//! Changing the query or any filter starts a new collection version, so the
//! next evaluation returns to page 1 on its own. So does a change of
//! collection identity: the caller's explicit version if one was set with
//! [`ListState::set_collection_version`], otherwise the slice's address.
//! A collection that only grows or shrinks keeps its page, clamped into
//! range.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use crate::error::Result;
use crate::filter::{ActiveFilters, FilterValue, PredicateSet};
use crate::ordering::{Dir, SortState};
use crate::pagination::{PageInfo, Pagination};
use crate::search::SearchConfig;
use crate::value::Value;

/// Mutable state behind one list view.
///
/// # Example
///
/// ```
/// use sift::{ListState, Number, PredicateSet, SearchConfig, Value};
///
/// struct Device {
///     name: &'static str,
///     status: &'static str,
///     id: u32,
/// }
///
/// fn accessor<'a>(d: &'a Device, field: &str) -> Value<'a> {
///     match field {
///         "name" => Value::String(d.name),
///         "id" => Value::Number(Number::from(d.id)),
///         _ => Value::None,
///     }
/// }
///
/// let devices = vec![
///     Device { name: "Laptop 14", status: "erased", id: 1 },
///     Device { name: "Laptop 15", status: "pending", id: 2 },
///     Device { name: "Phone X", status: "erased", id: 3 },
/// ];
///
/// let search = SearchConfig::new().field("name");
/// let predicates = PredicateSet::new()
///     .with("status", |d: &Device, v| v.as_str() == Some(d.status));
///
/// let mut state = ListState::new(2)?;
/// state.set_query("laptop");
/// state.update_filter("status", "erased");
///
/// let view = state.evaluate(&devices, &search, &predicates, accessor);
/// assert_eq!(view.total_items(), 1);
/// assert_eq!(view.current_items()[0].name, "Laptop 14");
/// assert!(view.has_active_filters());
/// # Ok::<(), sift::SiftError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ListState {
    query: String,
    filters: ActiveFilters,
    sort: SortState,
    pagination: Pagination,
    generation: u64,
    collection_version: Option<u64>,
}

impl ListState {
    /// Creates an empty state with the given page size.
    pub fn new(items_per_page: usize) -> Result<Self> {
        Ok(ListState {
            pagination: Pagination::new(items_per_page)?,
            ..ListState::default()
        })
    }

    /// Creates an empty state with a page size that is known to be valid.
    pub fn with_page_size(items_per_page: NonZeroUsize) -> Self {
        ListState {
            pagination: Pagination::with_page_size(items_per_page),
            ..ListState::default()
        }
    }

    // ========================================================================
    // Search query
    // ========================================================================

    /// Returns the raw query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query string.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.query {
            self.query = query;
            self.bump();
        }
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Returns the active filter values.
    pub fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    /// Sets a filter's value.
    ///
    /// Re-selecting the current value is a no-op and keeps the page.
    pub fn update_filter(&mut self, name: impl Into<String>, value: impl Into<FilterValue>) {
        let name = name.into();
        let value = value.into();
        if self.filters.get(&name) != Some(&value) {
            self.filters.update(name, value);
            self.bump();
        }
    }

    /// Removes one filter.
    pub fn clear_filter(&mut self, name: &str) {
        if self.filters.clear(name).is_some() {
            self.bump();
        }
    }

    /// Clears the query, every filter and the sort.
    ///
    /// The next evaluation returns the collection as given.
    pub fn clear_all_filters(&mut self) {
        self.query.clear();
        self.filters.clear_all();
        self.sort.clear();
        self.bump();
    }

    /// Returns `true` if the query or any filter narrows the collection.
    pub fn has_active_filters(&self) -> bool {
        !self.query.trim().is_empty() || self.filters.is_active()
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Returns the sort state.
    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    /// Flips direction on the active field, or sorts by a new field
    /// ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
    }

    /// Sets the sort field and direction directly.
    pub fn set_sort(&mut self, field: impl Into<String>, dir: Dir) {
        self.sort.set(field, dir);
    }

    // ========================================================================
    // Pagination
    // ========================================================================

    /// Returns the pagination state as of the last evaluation.
    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns the current page.
    pub fn current_page(&self) -> usize {
        self.pagination.current_page()
    }

    /// Moves to a page, clamped into range.
    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to_page(page);
    }

    /// Moves forward one page, if there is one.
    pub fn next_page(&mut self) {
        self.pagination.next_page();
    }

    /// Moves back one page, if there is one.
    pub fn prev_page(&mut self) {
        self.pagination.prev_page();
    }

    /// Returns to page 1.
    pub fn reset_pagination(&mut self) {
        self.pagination.reset();
    }

    /// Changes the page size and returns to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: NonZeroUsize) {
        self.pagination.set_items_per_page(items_per_page);
    }

    /// Names the collection passed to [`evaluate`](Self::evaluate).
    ///
    /// With a version set, the next evaluation returns to page 1 only when
    /// the version differs from the previous one, so a collection rebuilt
    /// into a fresh allocation keeps its page. With `None`, the slice's
    /// address identifies the collection, and a reallocation counts as a
    /// new collection.
    pub fn set_collection_version(&mut self, version: Option<u64>) {
        self.collection_version = version;
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Runs the pipeline over `items`.
    ///
    /// Searches with `search`, narrows with `predicates`, sorts by the
    /// current sort state, then updates pagination for the result size.
    pub fn evaluate<'a, T, F>(
        &mut self,
        items: &'a [T],
        search: &SearchConfig,
        predicates: &PredicateSet<'_, T>,
        accessor: F,
    ) -> ListView<'a, T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let searched = search.apply(items, &self.query, &accessor);
        let filtered = predicates.apply_refs(searched, &self.filters);
        let results = self.sort.apply(filtered, &accessor);

        let version = self.collection_version(items);
        self.pagination.sync(results.len(), version);

        ListView {
            results,
            page: self.pagination.info(),
            has_active_filters: self.has_active_filters(),
        }
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    // Collection identity plus the query/filter generation. Length is left
    // out so a resized collection is clamped rather than reset.
    fn collection_version<T>(&self, items: &[T]) -> u64 {
        let mut hasher = DefaultHasher::new();
        match self.collection_version {
            Some(version) => version.hash(&mut hasher),
            None => (items.as_ptr() as usize).hash(&mut hasher),
        }
        self.generation.hash(&mut hasher);
        hasher.finish()
    }
}

/// The outcome of one [`ListState::evaluate`] call.
#[derive(Debug, Clone)]
pub struct ListView<'a, T> {
    results: Vec<&'a T>,
    page: PageInfo,
    has_active_filters: bool,
}

impl<'a, T> ListView<'a, T> {
    /// Every item that survived search and filters, in sorted order.
    pub fn results(&self) -> &[&'a T] {
        &self.results
    }

    /// Consumes the view, returning every surviving item.
    pub fn into_results(self) -> Vec<&'a T> {
        self.results
    }

    /// Items on the current page.
    pub fn current_items(&self) -> &[&'a T] {
        &self.results[self.page.start_index..self.page.end_index]
    }

    /// Navigation metadata for the current page.
    pub fn page(&self) -> &PageInfo {
        &self.page
    }

    /// Number of surviving items across all pages.
    pub fn total_items(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if nothing survived.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns `true` if the query or any filter narrowed the collection.
    pub fn has_active_filters(&self) -> bool {
        self.has_active_filters
    }
}
