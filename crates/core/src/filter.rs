//! Generic filter engine.
//!
//! Every listing applies the same two predicate families: a
//! case-insensitive free-text search over a record-defined set of text
//! fields, and per-dimension categorical equality. A record is kept iff it
//! passes all active predicates. Filtering is pure: the input slice is
//! borrowed, never mutated, and relative order is preserved.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::{DashboardError, DashboardResult};

/// A record type that can be filtered.
pub trait Filterable {
    /// The text fields the free-text search runs over.
    fn search_fields(&self) -> Vec<&str>;

    /// The value of a categorical dimension, or `None` if the record type
    /// does not expose that dimension.
    ///
    /// Optional record fields still expose their dimension; an absent value
    /// is the empty string, so it can never satisfy an equality constraint.
    fn facet(&self, dimension: &str) -> Option<Cow<'_, str>>;
}

/// Constraint on one categorical dimension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FacetSelection {
    /// No constraint; every record matches.
    All,
    /// Keep records whose dimension value equals this wire string.
    Value(String),
}

impl FacetSelection {
    /// Parse a wire value; the `"all"` sentinel means unconstrained.
    pub fn from_wire(s: &str) -> Self {
        if s == "all" {
            FacetSelection::All
        } else {
            FacetSelection::Value(s.to_string())
        }
    }
}

/// Transient filter state for one listing: free-text search plus a set of
/// categorical constraints. Never persisted.
#[derive(Clone, Debug, Default)]
pub struct FilterCriteria {
    search_text: String,
    facets: BTreeMap<String, FacetSelection>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search. An empty string matches everything.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Adds a categorical constraint on `dimension`.
    pub fn with_facet(mut self, dimension: impl Into<String>, selection: FacetSelection) -> Self {
        self.facets.insert(dimension.into(), selection);
        self
    }

    /// True when no predicate is active.
    pub fn is_unconstrained(&self) -> bool {
        self.search_text.trim().is_empty()
            && self
                .facets
                .values()
                .all(|sel| matches!(sel, FacetSelection::All))
    }
}

/// Applies `criteria` to `records`, returning the matching subset in its
/// original relative order.
///
/// Pure function: identical inputs always produce identical output and the
/// input slice is untouched. A criteria dimension the record type does not
/// expose is a caller programming error and returns
/// [`DashboardError::UnknownDimension`].
pub fn filter<'a, R: Filterable>(
    records: &'a [R],
    criteria: &FilterCriteria,
) -> DashboardResult<Vec<&'a R>> {
    let needle = criteria.search_text.trim().to_lowercase();

    let mut kept = Vec::new();
    for record in records {
        if matches(record, &needle, &criteria.facets)? {
            kept.push(record);
        }
    }
    Ok(kept)
}

fn matches<R: Filterable>(
    record: &R,
    needle: &str,
    facets: &BTreeMap<String, FacetSelection>,
) -> DashboardResult<bool> {
    for (dimension, selection) in facets {
        let FacetSelection::Value(expected) = selection else {
            continue;
        };
        let actual = record
            .facet(dimension)
            .ok_or_else(|| DashboardError::UnknownDimension(dimension.clone()))?;
        if actual.as_ref() != expected {
            return Ok(false);
        }
    }

    if needle.is_empty() {
        return Ok(true);
    }
    Ok(record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle)))
}
