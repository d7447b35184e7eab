use thiserror::Error;

use crate::field::LogicalField;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("no column resolved for {}", join_fields(.0))]
    MissingFields(Vec<LogicalField>),
    #[error("field {0} resolved more than once")]
    DuplicateField(LogicalField),
}

fn join_fields(fields: &[LogicalField]) -> String {
    fields
        .iter()
        .map(LogicalField::code)
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, ModelError>;
