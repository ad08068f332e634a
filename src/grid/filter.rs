//! Per-column substring filtering

use std::collections::BTreeMap;

use super::model::{Column, Row};

/// Active filter terms, keyed by column
///
/// An empty or absent term places no constraint on its column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    terms: BTreeMap<Column, String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the term for a column; an empty term removes the constraint
    pub fn set(&mut self, column: Column, term: impl Into<String>) {
        let term = term.into();
        if term.is_empty() {
            self.terms.remove(&column);
        } else {
            self.terms.insert(column, term);
        }
    }

    /// Builder form of [`FilterSet::set`]
    pub fn with(mut self, column: Column, term: impl Into<String>) -> Self {
        self.set(column, term);
        self
    }

    /// Term currently set for a column ("" when none)
    pub fn term(&self, column: Column) -> &str {
        self.terms.get(&column).map(String::as_str).unwrap_or("")
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }

    /// Whether any column carries a non-empty term
    pub fn has_active(&self) -> bool {
        self.terms.values().any(|t| !t.is_empty())
    }

    pub fn active_count(&self) -> usize {
        self.terms.values().filter(|t| !t.is_empty()).count()
    }

    /// Merge another set's terms into this one (other wins on overlap)
    pub fn union(mut self, other: &FilterSet) -> Self {
        for (column, term) in &other.terms {
            self.set(*column, term.clone());
        }
        self
    }

    /// Keep the rows matching every active term, in input order
    pub fn apply<'a, I>(&self, rows: I) -> Vec<&'a Row>
    where
        I: IntoIterator<Item = &'a Row>,
    {
        let predicates: Vec<(Column, String)> = self
            .terms
            .iter()
            .filter(|(_, term)| !term.is_empty())
            .map(|(column, term)| (*column, term.to_lowercase()))
            .collect();

        if predicates.is_empty() {
            return rows.into_iter().collect();
        }

        rows.into_iter()
            .filter(|row| {
                predicates
                    .iter()
                    .all(|(column, needle)| row.get(*column).to_lowercase().contains(needle))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::model::shape_rows;

    fn rows() -> Vec<Row> {
        shape_rows(
            [
                ["Dune", "Frank Herbert", "Science Fiction", "1965", "1"],
                ["Emma", "Jane Austen", "Romance", "1815", "2"],
                ["Neuromancer", "W. Gibson", "Science Fiction", "1984", "3"],
                ["Persuasion", "Jane Austen", "Fiction", "1817", "4"],
            ]
            .map(|r| r.map(String::from)),
        )
    }

    fn titles(rows: &[&Row]) -> Vec<String> {
        rows.iter()
            .map(|r| r.get(Column::Title).to_string())
            .collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let data = rows();
        let out = FilterSet::new().apply(&data);

        assert_eq!(out.len(), data.len());
        assert!(!FilterSet::new().has_active());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let data = rows();
        let out = FilterSet::new().with(Column::Author, "AUSTEN").apply(&data);

        assert_eq!(titles(&out), vec!["Emma", "Persuasion"]);
    }

    #[test]
    fn test_and_across_columns() {
        let data = rows();
        let filters = FilterSet::new()
            .with(Column::Genre, "fiction")
            .with(Column::Author, "jane");

        assert_eq!(titles(&filters.apply(&data)), vec!["Persuasion"]);
        assert_eq!(filters.active_count(), 2);
    }

    #[test]
    fn test_empty_term_clears_constraint() {
        let mut filters = FilterSet::new().with(Column::Genre, "Romance");
        filters.set(Column::Genre, "");

        assert!(!filters.has_active());
        assert_eq!(filters.term(Column::Genre), "");
        assert_eq!(filters.apply(&rows()).len(), 4);
    }

    #[test]
    fn test_filters_compose_like_union() {
        let data = rows();
        let p1 = FilterSet::new().with(Column::Genre, "fiction");
        let p2 = FilterSet::new().with(Column::PublishedYear, "19");

        let chained = p2.apply(p1.apply(&data));
        let merged = p1.clone().union(&p2).apply(&data);

        assert_eq!(chained, merged);
        assert_eq!(titles(&merged), vec!["Dune", "Neuromancer"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let data = rows();
        let out = FilterSet::new().with(Column::Title, "zzz").apply(&data);
        assert!(out.is_empty());
    }
}
