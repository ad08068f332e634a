//! Single-column sorting
//!
//! `PublishedYear` compares by leading integer; every other column uses a
//! case-insensitive collation. Sorting is stable in both directions.

use std::cmp::Ordering;

use unicase::UniCase;

use super::model::{Column, Row};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// The active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn ascending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(column: Column) -> Self {
        Self {
            column,
            direction: SortDirection::Descending,
        }
    }

    /// Header-click rule: re-selecting the active column flips its
    /// direction, any other column starts ascending
    pub fn toggle(current: Option<SortKey>, column: Column) -> SortKey {
        match current {
            Some(key) if key.column == column => SortKey {
                column,
                direction: key.direction.flipped(),
            },
            _ => SortKey::ascending(column),
        }
    }

    /// Compare two rows under this key
    pub fn compare(&self, a: &Row, b: &Row) -> Ordering {
        let ordering = compare_values(self.column, a.get(self.column), b.get(self.column));
        self.direction.apply(ordering)
    }
}

/// Return a new sequence ordered by `key`; `None` keeps input order
pub fn sort_rows<'a>(rows: &[&'a Row], key: Option<SortKey>) -> Vec<&'a Row> {
    let mut sorted = rows.to_vec();
    if let Some(key) = key {
        // `sort_by` is stable: ties keep their pre-sort order
        sorted.sort_by(|a, b| key.compare(a, b));
    }
    sorted
}

/// Ascending comparison of two raw cell values in a column
pub fn compare_values(column: Column, a: &str, b: &str) -> Ordering {
    if column.is_numeric() {
        compare_numeric(a, b)
    } else {
        collate(a, b)
    }
}

/// Numbers ascending; values without a leading integer after all numbers
fn compare_numeric(a: &str, b: &str) -> Ordering {
    match (parse_leading_int(a), parse_leading_int(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Case-insensitive ordering; on a caseless tie lowercase sorts first
fn collate(a: &str, b: &str) -> Ordering {
    UniCase::new(a).cmp(&UniCase::new(b)).then_with(|| b.cmp(a))
}

/// Parse the integer prefix of a value
///
/// Leading whitespace and one sign are allowed; parsing stops at the first
/// non-digit. `"1999 (reprint)"` yields 1999, `"n/a"` yields `None`.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
