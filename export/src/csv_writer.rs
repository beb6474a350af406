//! FILENAME: export/src/csv_writer.rs
//! Pivot table CSV writer.
//!
//! Layout mirrors the on-screen table: the corner header is the row
//! dimension's label, followed by the sorted column keys, then "Total"
//! when totals are enabled. Body rows fill unpopulated key pairs with 0.
//! An empty result writes the header line only, never a totals band.

use std::io::Write;

use csv::WriterBuilder;
use pivot_engine::{raw_value, PivotConfiguration, PivotResult, TOTAL_LABEL};

use crate::error::ExportError;

/// Serialize `result` as CSV into `writer`.
///
/// Fields containing the delimiter are double-quoted by the writer, so
/// group names like `"Laptops, Inc"` survive a re-parse.
pub fn write_pivot_csv<W: Write>(
    result: &PivotResult,
    config: &PivotConfiguration,
    writer: W,
) -> Result<(), ExportError> {
    let mut wtr = WriterBuilder::new().from_writer(writer);
    let with_totals = config.show_totals && !result.is_empty();

    let mut header: Vec<String> = Vec::with_capacity(result.column_keys.len() + 2);
    header.push(config.row_dimension.label().to_string());
    header.extend(result.column_keys.iter().cloned());
    if with_totals {
        header.push(TOTAL_LABEL.to_string());
    }
    wtr.write_record(&header)?;

    for row_key in &result.row_keys {
        let mut fields: Vec<String> = Vec::with_capacity(header.len());
        fields.push(row_key.clone());
        for column_key in &result.column_keys {
            fields.push(raw_value(result.value_or_zero(row_key, column_key)));
        }
        if with_totals {
            fields.push(raw_value(result.row_total(row_key)));
        }
        wtr.write_record(&fields)?;
    }

    if with_totals {
        let mut fields: Vec<String> = Vec::with_capacity(header.len());
        fields.push(TOTAL_LABEL.to_string());
        for column_key in &result.column_keys {
            fields.push(raw_value(result.column_total(column_key)));
        }
        fields.push(raw_value(result.grand_total()));
        wtr.write_record(&fields)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Serialize `result` into an in-memory string, the shape the download
/// endpoint returns.
pub fn pivot_to_csv_string(
    result: &PivotResult,
    config: &PivotConfiguration,
) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_pivot_csv(result, config, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

// ============================================================================
// TESTS
// ============================================================================
