pub mod error;
pub mod field;
pub mod resolution;
pub mod table;

pub use error::{ModelError, Result};
pub use field::LogicalField;
pub use resolution::{FieldMap, ResolvedColumn};
pub use table::SourceTable;
