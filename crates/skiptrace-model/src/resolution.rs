//! Result of matching logical fields to concrete columns.

use serde::Serialize;

use crate::error::{ModelError, Result};
use crate::field::LogicalField;

/// A logical field bound to a concrete column of the source table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedColumn {
    pub field: LogicalField,
    /// Alias that produced the match (upper-cased).
    pub alias: String,
    /// Matched header, upper-cased.
    pub column: String,
    /// Position of the column in the source table.
    pub index: usize,
    /// Similarity between alias and column, 0.0 to 1.0.
    pub score: f64,
}

impl ResolvedColumn {
    pub fn new(
        field: LogicalField,
        alias: impl Into<String>,
        column: impl Into<String>,
        index: usize,
        score: f64,
    ) -> Self {
        Self {
            field,
            alias: alias.into(),
            column: column.into(),
            index,
            score,
        }
    }
}

/// Complete binding of all five fields.
///
/// Can only be built when every [`LogicalField`] has exactly one column, so a
/// value of this type is proof that the schema is usable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMap {
    columns: [ResolvedColumn; 5],
}

impl FieldMap {
    /// Builds the map from one resolved column per field, in any order.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateField`] when a field appears twice and
    /// [`ModelError::MissingFields`] when any field is absent.
    pub fn from_columns(columns: Vec<ResolvedColumn>) -> Result<Self> {
        let mut slots: [Option<ResolvedColumn>; 5] = Default::default();
        for column in columns {
            let slot = &mut slots[column.field.ordinal()];
            if slot.is_some() {
                return Err(ModelError::DuplicateField(column.field));
            }
            *slot = Some(column);
        }
        let missing: Vec<LogicalField> = LogicalField::ALL
            .into_iter()
            .filter(|field| slots[field.ordinal()].is_none())
            .collect();
        let columns: [ResolvedColumn; 5] = slots
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| ModelError::MissingFields(missing))?;
        Ok(Self { columns })
    }

    pub fn get(&self, field: LogicalField) -> &ResolvedColumn {
        &self.columns[field.ordinal()]
    }

    /// Column index for `field` in the source table.
    pub fn index(&self, field: LogicalField) -> usize {
        self.get(field).index
    }

    /// Resolved columns in layout order.
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedColumn> {
        self.columns.iter()
    }
}
