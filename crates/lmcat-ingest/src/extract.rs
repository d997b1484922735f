//! Record extraction: one source row to a base record plus variant records.

use lmcat_model::{FieldId, Record};
use lmcat_normalize::{FieldValue, NormalizerConfig, RawCell, normalize};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::table::SourceTable;

/// Position of every mapped field in the source rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    columns: Vec<(FieldId, usize)>,
}

impl ColumnMap {
    /// Map header labels to fields. Unknown labels are ignored; the `name`
    /// column is mandatory.
    pub fn from_header(header: &[String], config: &NormalizerConfig) -> Result<Self> {
        let mut columns: Vec<(FieldId, usize)> = Vec::new();
        for (index, label) in header.iter().enumerate() {
            let Some(field) = config.field_for_header(label) else {
                debug!(label = %label, "ignoring unmapped column");
                continue;
            };
            if columns.iter().any(|(existing, _)| *existing == field) {
                warn!(label = %label, field = %field, "duplicate column, keeping the first");
                continue;
            }
            columns.push((field, index));
        }
        if !columns.iter().any(|(field, _)| *field == FieldId::Name) {
            return Err(IngestError::MissingColumn {
                field: FieldId::Name.to_string(),
            });
        }
        Ok(Self { columns })
    }

    pub fn index_of(&self, field: FieldId) -> Option<usize> {
        self.columns
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, index)| *index)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.columns.iter().map(|(field, _)| *field)
    }
}

/// A variant of a model, stored one level below its base record.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub model_id: String,
    pub record: Record,
}

/// Base record of one source row and the variants it fans out into.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedRecord {
    pub name: String,
    pub base: Record,
    pub variants: Vec<Variant>,
}

/// Extract records from every data row of `table`.
pub fn extract_table(
    table: &SourceTable,
    config: &NormalizerConfig,
) -> Result<Vec<ExtractedRecord>> {
    let columns = ColumnMap::from_header(&table.header, config)?;
    let mut records: Vec<ExtractedRecord> = Vec::new();
    for (offset, cells) in table.rows.iter().enumerate() {
        // Header is row 1.
        let row_number = offset + 2;
        if cells.is_empty() {
            continue;
        }
        let Some(record) = extract_row(row_number, cells, &columns, config)? else {
            continue;
        };
        if records.iter().any(|existing| existing.name == record.name) {
            warn!(
                row = row_number,
                name = %record.name,
                "duplicate model name, later row overwrites"
            );
        }
        records.push(record);
    }
    Ok(records)
}

/// Extract one source row.
///
/// Returns `None` for rows whose name is empty or a placeholder.
pub fn extract_row(
    row_number: usize,
    cells: &[RawCell],
    columns: &ColumnMap,
    config: &NormalizerConfig,
) -> Result<Option<ExtractedRecord>> {
    let empty = RawCell::default();
    let cell_for = |field: FieldId| {
        columns
            .index_of(field)
            .and_then(|index| cells.get(index))
            .unwrap_or(&empty)
    };

    let name_cell = cell_for(FieldId::Name);
    let name = match normalize(FieldId::Name, name_cell, config) {
        Ok(FieldValue::Text(text)) => text,
        _ => String::new(),
    };
    if name.is_empty() {
        debug!(row = row_number, raw = %name_cell.trimmed(), "skipping row without a name");
        return Ok(None);
    }

    let mut base = Record::new();
    let mut variants = Vec::new();
    for field in columns.fields() {
        let cell = cell_for(field);
        let value = normalize(field, cell, config).map_err(|source| {
            IngestError::Normalization {
                row: row_number,
                name: name.clone(),
                source,
            }
        })?;

        if field == FieldId::Name
            && let Some(url) = cell
                .first_link()
                .and_then(|link| link.href.clone())
                .filter(|href| !href.is_empty())
        {
            base.insert(FieldId::Url.as_str(), url);
        }

        if field == FieldId::ModelId
            && let Some(ids) = value.as_text().and_then(split_model_ids)
        {
            variants.extend(ids.into_iter().map(|model_id| {
                let mut record = Record::new();
                record.insert(FieldId::ModelId.as_str(), model_id.as_str());
                Variant { model_id, record }
            }));
            continue;
        }

        if let Some(attr) = value.to_attr() {
            base.insert(field.as_str(), attr);
        }
    }

    debug!(
        row = row_number,
        name = %name,
        attributes = base.len(),
        variants = variants.len(),
        "extracted row"
    );
    Ok(Some(ExtractedRecord {
        name,
        base,
        variants,
    }))
}

/// Split a comma-joined list of model ids; `None` when the text holds one id.
fn split_model_ids(text: &str) -> Option<Vec<String>> {
    if !text.contains(',') {
        return None;
    }
    Some(
        text.split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_model_ids_only_for_lists() {
        assert_eq!(split_model_ids("gervasio-7b"), None);
        assert_eq!(
            split_model_ids("a, b ,c,"),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn header_without_name_column_is_rejected() {
        let header = vec!["Licença".to_string(), "Tamanho".to_string()];
        let err = ColumnMap::from_header(&header, &NormalizerConfig::default()).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { .. }));
    }
}
