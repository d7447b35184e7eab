use tracing::debug;

use skiptrace_model::{FieldMap, LogicalField, SourceTable};

/// Number of addresses shown before submission.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Replaces every whitespace run with one space and trims both ends.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Joins the five components into one address line.
pub fn format_address(house: &str, street: &str, city: &str, state: &str, zip: &str) -> String {
    let joined = format!(
        "{} {}; {}, {} {}",
        house.trim(),
        street.trim(),
        city.trim(),
        state.trim(),
        zip.trim()
    );
    collapse_whitespace(&joined)
}

/// Formats row `row` of `table`; absent cells are treated as empty.
pub fn format_row(table: &SourceTable, fields: &FieldMap, row: usize) -> String {
    let value = |field: LogicalField| table.cell(row, fields.index(field)).unwrap_or("");
    format_address(
        value(LogicalField::House),
        value(LogicalField::Street),
        value(LogicalField::City),
        value(LogicalField::State),
        value(LogicalField::Zip),
    )
}

/// Formats every row, preserving row order.
pub fn format_addresses(table: &SourceTable, fields: &FieldMap) -> Vec<String> {
    let addresses: Vec<String> = (0..table.len())
        .map(|row| format_row(table, fields, row))
        .collect();
    debug!(count = addresses.len(), "formatted addresses");
    addresses
}

/// The first `limit` addresses.
pub fn preview(addresses: &[String], limit: usize) -> &[String] {
    &addresses[..addresses.len().min(limit)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_uses_fixed_separators() {
        assert_eq!(
            format_address("123", "Main St", "Springfield", "IL", "62704"),
            "123 Main St; Springfield, IL 62704"
        );
    }

    #[test]
    fn collapses_inner_and_outer_whitespace() {
        assert_eq!(
            format_address("  12 ", "Elm \t  Ave", " Shelbyville", "IL\n", " 62565 "),
            "12 Elm Ave; Shelbyville, IL 62565"
        );
    }

    #[test]
    fn empty_components_keep_separators() {
        assert_eq!(format_address("", "Main St", "", "IL", ""), "Main St; , IL");
        assert_eq!(format_address("", "", "", "", ""), ";,");
    }

    #[test]
    fn preview_is_bounded() {
        let addresses: Vec<String> = (0..3).map(|i| i.to_string()).collect();
        assert_eq!(preview(&addresses, 2), ["0", "1"]);
        assert_eq!(preview(&addresses, 10).len(), 3);
    }
}
