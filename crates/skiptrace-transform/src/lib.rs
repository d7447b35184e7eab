//! Address formatting.
//!
//! Every row becomes `"<house> <street>; <city>, <state> <zip>"` with runs of
//! whitespace collapsed. Missing cells contribute empty text; formatting
//! never fails on row data.

pub mod address;

pub use address::{
    DEFAULT_PREVIEW_ROWS, collapse_whitespace, format_address, format_addresses, format_row,
    preview,
};
