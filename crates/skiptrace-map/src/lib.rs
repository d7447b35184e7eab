//! Column resolution for address files.
//!
//! Each [`LogicalField`](skiptrace_model::LogicalField) has an ordered list of
//! known header aliases. Aliases are tried in priority order and the first one
//! that lies close enough to an actual header wins, so a weak match on a
//! preferred alias beats a strong match on a fallback alias.

#![deny(unsafe_code)]

pub mod aliases;
pub mod error;
pub mod resolver;

pub use aliases::{AliasTable, load_alias_table};
pub use error::{MappingError, Result};
pub use resolver::{
    ColumnMatch, ColumnResolver, DEFAULT_CUTOFF, FieldResolution, ResolutionReport, resolve,
    similarity,
};
