//! Catalog ingestion.
//!
//! - **table**: data table extraction from the spreadsheet HTML export
//! - **extract**: per-row normalization and variant fan-out
//! - **forest**: persisting records as a directory forest of TOML files

pub mod error;
pub mod extract;
pub mod forest;
pub mod table;

use std::path::Path;

use lmcat_normalize::NormalizerConfig;
use tracing::{info, info_span};

pub use error::{IngestError, Result};
pub use extract::{ColumnMap, ExtractedRecord, Variant, extract_row, extract_table};
pub use forest::{ForestSummary, METADATA_FILE, render_record, unit_dir_name, write_forest};
pub use table::{SourceTable, parse_table, read_table};

/// Read `input`, extract every row and write the forest under `output_dir`.
pub fn extract_catalog(
    input: &Path,
    output_dir: &Path,
    config: &NormalizerConfig,
) -> Result<ForestSummary> {
    let span = info_span!("extract", input = %input.display());
    let _guard = span.enter();

    let table = read_table(input)?;
    info!(
        columns = table.header.len(),
        rows = table.rows.len(),
        "source table loaded"
    );
    let records = extract_table(&table, config)?;
    write_forest(output_dir, &records)
}
