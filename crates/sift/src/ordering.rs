//! Sort state and value comparison.
//!
//! Provides [`Dir`] for sort direction, [`SortState`] for the single-field
//! sort a list view toggles through, and the comparators behind it.

use std::cmp::Ordering;

use deunicode::deunicode;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Returns the opposite direction.
    pub fn flip(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which field a list is sorted by, and in which direction.
///
/// Toggling the active field flips its direction; toggling a different
/// field switches to it in ascending order.
///
/// ```
/// use sift::{Dir, SortState};
///
/// let mut sort = SortState::new();
/// sort.toggle("name");
/// assert_eq!(sort.dir(), Dir::Asc);
/// sort.toggle("name");
/// assert_eq!(sort.dir(), Dir::Desc);
/// sort.toggle("created");
/// assert_eq!(sort.field(), Some("created"));
/// assert_eq!(sort.dir(), Dir::Asc);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    field: Option<String>,
    dir: Dir,
}

impl SortState {
    /// Creates an unsorted state.
    pub fn new() -> Self {
        SortState::default()
    }

    /// Creates a state sorted by `field` in `dir`.
    pub fn by(field: impl Into<String>, dir: Dir) -> Self {
        SortState {
            field: Some(field.into()),
            dir,
        }
    }

    /// Returns the active sort field.
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns the current direction.
    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// Returns `true` if a sort field is set.
    pub fn is_sorted(&self) -> bool {
        self.field.is_some()
    }

    /// Flips direction on the active field, or switches to a new field
    /// ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field.as_deref() == Some(field) {
            self.dir = self.dir.flip();
        } else {
            self.field = Some(field.to_string());
            self.dir = Dir::Asc;
        }
    }

    /// Sets field and direction directly.
    pub fn set(&mut self, field: impl Into<String>, dir: Dir) {
        self.field = Some(field.into());
        self.dir = dir;
    }

    /// Removes the sort field, keeping input order.
    pub fn clear(&mut self) {
        *self = SortState::default();
    }

    /// Sorts references in place by the active field.
    ///
    /// The sort is stable. Pairs that cannot be compared keep their incoming
    /// order. With no field set, the input is returned untouched.
    pub fn apply<'a, T, F>(&self, mut items: Vec<&'a T>, accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        let Some(field) = self.field.as_deref() else {
            return items;
        };

        stable_sort_by(&mut items, |a, b| {
            let ordering = compare_values(&accessor(a, field), &accessor(b, field));
            self.dir.apply(ordering)
        });
        items
    }
}

/// Stable merge sort over copyable elements.
///
/// `compare_values` is not a total order once incomparable values are
/// involved, and `slice::sort_by` may panic on such comparators.
pub(crate) fn stable_sort_by<T, C>(items: &mut [T], mut cmp: C)
where
    T: Copy,
    C: FnMut(&T, &T) -> Ordering,
{
    let mut scratch = Vec::with_capacity(items.len());
    merge_sort(items, &mut scratch, &mut cmp);
}

fn merge_sort<T, C>(items: &mut [T], scratch: &mut Vec<T>, cmp: &mut C)
where
    T: Copy,
    C: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= 1 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut items[..mid], scratch, cmp);
    merge_sort(&mut items[mid..], scratch, cmp);

    scratch.clear();
    let (mut i, mut j) = (0, mid);
    while i < mid && j < len {
        // take from the right only when strictly smaller
        if cmp(&items[j], &items[i]) == Ordering::Less {
            scratch.push(items[j]);
            j += 1;
        } else {
            scratch.push(items[i]);
            i += 1;
        }
    }
    scratch.extend_from_slice(&items[i..mid]);
    scratch.extend_from_slice(&items[j..len]);
    items.copy_from_slice(scratch);
}

/// Compares two field values for sorting.
///
/// Strings use [`locale_cmp`] and numbers compare numerically. Anything
/// else, including mismatched types and NaN, compares equal, so a stable
/// sort leaves those pairs in their incoming order.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::String(a), Value::String(b)) => locale_cmp(a, b),
        (Value::Number(a), Value::Number(b)) => a.compare(*b).unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Human-oriented string ordering.
///
/// Compares in three passes, each only consulted when the previous one ties:
///
/// 1. transliterated and case-folded (`"Émile"` sorts with `"emile"`),
/// 2. case-folded with accents,
/// 3. case, with lowercase before uppercase.
///
/// This approximates a root-locale collation without locale tables.
///
/// ```
/// use std::cmp::Ordering;
/// use sift::locale_cmp;
///
/// assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_cmp("Émile", "Eric"), Ordering::Less);
/// assert_eq!(locale_cmp("alpha", "Alpha"), Ordering::Less);
/// ```
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| case_cmp(a, b))
}

fn primary_key(s: &str) -> String {
    deunicode(s).to_lowercase()
}

fn case_cmp(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(&y),
        };
    }
    a.len().cmp(&b.len())
}
