use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use skiptrace_model::SourceTable;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

fn is_blank(record: &csv::StringRecord) -> bool {
    record.iter().all(|value| value.trim().is_empty())
}

/// Reads a CSV file from disk.
///
/// # Errors
///
/// See [`read_csv_from_reader`]; additionally fails when the file is missing
/// or unreadable.
pub fn read_csv_table(path: &Path) -> Result<SourceTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let table = read_csv_from_reader(file, &path.display().to_string())?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.len(),
        "loaded address table"
    );
    Ok(table)
}

/// Reads CSV data from any reader.
///
/// The first non-blank record is the header row. Blank records are skipped,
/// short rows are padded with empty cells and surplus cells are dropped so
/// every row has exactly one cell per header. Cell text is kept as-is apart
/// from a stray byte-order mark; trimming is left to the formatter.
///
/// # Errors
///
/// Returns [`IngestError::CsvParse`] on malformed input and
/// [`IngestError::EmptyCsv`] when there is no header row.
pub fn read_csv_from_reader<R: Read>(reader: R, source_name: &str) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|err| IngestError::CsvParse {
            source_name: source_name.to_string(),
            line: err.position().map_or(0, csv::Position::line),
            message: err.to_string(),
        })?;
        if is_blank(&record) {
            skipped += 1;
            continue;
        }
        match &headers {
            None => headers = Some(record.iter().map(normalize_header).collect()),
            Some(header) => {
                let row = (0..header.len())
                    .map(|idx| record.get(idx).map(normalize_cell).unwrap_or_default())
                    .collect();
                rows.push(row);
            }
        }
    }

    if skipped > 0 {
        debug!(source = source_name, skipped, "skipped blank records");
    }
    let Some(headers) = headers else {
        return Err(IngestError::EmptyCsv {
            source_name: source_name.to_string(),
        });
    };
    Ok(SourceTable::new(headers, rows))
}
