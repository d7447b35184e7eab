//! Alias-priority fuzzy matching of address fields to column headers.
//!
//! Similarity is the normalized Indel ratio `2 * LCS / (len(a) + len(b))`
//! computed over characters. A column qualifies for an alias when its ratio
//! is at least the cutoff; among qualifying columns the best score wins and
//! ties go to the column that comes first in the header.

use rapidfuzz::distance::indel;
use serde::Serialize;
use tracing::{debug, warn};

use skiptrace_model::{FieldMap, LogicalField, ResolvedColumn};

use crate::aliases::AliasTable;
use crate::error::{MappingError, Result};

/// Minimum similarity (inclusive) for an alias to match a column.
pub const DEFAULT_CUTOFF: f64 = 0.6;

/// Ratio similarity of two strings, 0.0 to 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    indel::normalized_similarity(a.chars(), b.chars())
}

/// A single alias matched to a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnMatch {
    /// Upper-cased alias that matched.
    pub alias: String,
    /// Upper-cased column header.
    pub column: String,
    /// Position of the column in the header list.
    pub index: usize,
    pub score: f64,
}

impl ColumnMatch {
    fn into_resolved(self, field: LogicalField) -> ResolvedColumn {
        ResolvedColumn::new(field, self.alias, self.column, self.index, self.score)
    }
}

/// Outcome for one field, resolved or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldResolution {
    pub field: LogicalField,
    pub matched: Option<ColumnMatch>,
}

/// Per-field outcomes for a whole header row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolutionReport {
    pub fields: Vec<FieldResolution>,
}

impl ResolutionReport {
    /// Fields that matched no column, in layout order.
    pub fn missing(&self) -> Vec<LogicalField> {
        self.fields
            .iter()
            .filter(|resolution| resolution.matched.is_none())
            .map(|resolution| resolution.field)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.fields.iter().all(|resolution| resolution.matched.is_some())
    }

    /// Converts the report into a [`FieldMap`].
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::IncompleteSchema`] when any field is unresolved.
    pub fn into_field_map(self) -> Result<FieldMap> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(MappingError::IncompleteSchema { missing });
        }
        let columns = self
            .fields
            .into_iter()
            .filter_map(|resolution| {
                resolution
                    .matched
                    .map(|matched| matched.into_resolved(resolution.field))
            })
            .collect();
        Ok(FieldMap::from_columns(columns)?)
    }
}

/// Resolves address fields against column headers.
#[derive(Debug, Clone, Copy)]
pub struct ColumnResolver {
    cutoff: f64,
}

impl Default for ColumnResolver {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

impl ColumnResolver {
    /// Creates a resolver with a custom cutoff, clamped to `0.0..=1.0`.
    ///
    /// A NaN cutoff falls back to [`DEFAULT_CUTOFF`].
    pub fn new(cutoff: f64) -> Self {
        let cutoff = if cutoff.is_nan() {
            DEFAULT_CUTOFF
        } else {
            cutoff.clamp(0.0, 1.0)
        };
        Self { cutoff }
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Best column for a single alias, if any reaches the cutoff.
    pub fn closest(&self, alias: &str, columns: &[String]) -> Option<ColumnMatch> {
        let alias = alias.trim().to_uppercase();
        let mut best: Option<ColumnMatch> = None;
        for (index, column) in columns.iter().enumerate() {
            let column = column.to_uppercase();
            let score = similarity(&alias, &column);
            if score < self.cutoff {
                continue;
            }
            if best.as_ref().is_some_and(|current| score <= current.score) {
                continue;
            }
            best = Some(ColumnMatch {
                alias: alias.clone(),
                column,
                index,
                score,
            });
        }
        best
    }

    /// First alias, in priority order, that matches any column.
    ///
    /// Alias order takes precedence over match quality: a later alias is only
    /// consulted when every earlier alias failed to reach the cutoff.
    pub fn resolve<S: AsRef<str>>(&self, aliases: &[S], columns: &[String]) -> Option<ColumnMatch> {
        aliases
            .iter()
            .find_map(|alias| self.closest(alias.as_ref(), columns))
    }

    /// Resolves every field and reports the outcome for each.
    pub fn report(&self, columns: &[String], aliases: &AliasTable) -> ResolutionReport {
        let fields = aliases
            .iter()
            .map(|(field, list)| {
                let matched = self.resolve(list, columns);
                match &matched {
                    Some(found) => debug!(
                        field = %field,
                        alias = %found.alias,
                        column = %found.column,
                        score = found.score,
                        "resolved address field"
                    ),
                    None => warn!(field = %field, "no column matches address field"),
                }
                FieldResolution { field, matched }
            })
            .collect();
        ResolutionReport { fields }
    }

    /// Resolves every field, failing if any stays unresolved.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::IncompleteSchema`] naming the unresolved fields.
    pub fn resolve_fields(&self, columns: &[String], aliases: &AliasTable) -> Result<FieldMap> {
        self.report(columns, aliases).into_field_map()
    }
}

/// [`ColumnResolver::resolve`] with the default cutoff.
pub fn resolve<S: AsRef<str>>(aliases: &[S], columns: &[String]) -> Option<ColumnMatch> {
    ColumnResolver::default().resolve(aliases, columns)
}
