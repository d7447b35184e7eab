//! Loading uploaded address files into a [`SourceTable`](skiptrace_model::SourceTable).

pub mod csv_table;
pub mod error;

pub use csv_table::{read_csv_from_reader, read_csv_table};
pub use error::{IngestError, Result};
