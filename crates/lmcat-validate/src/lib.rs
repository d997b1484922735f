//! Schema validation of merged catalog records.
//!
//! The schema is closed: every attribute must be a catalog field, every
//! non-nullable field must be present, and values must match their field's
//! type and format. [`validate`] reports the first violation of one record;
//! [`validate_all`] validates a whole forest and rejects it if any entity
//! fails.

pub mod check;
pub mod error;
pub mod schema;

use lmcat_model::{Entity, sort_by_name};
use lmcat_tree::MergedRecord;
use tracing::{debug, info};

pub use check::validate;
pub use error::{SchemaViolation, ValidationError, ViolationRule};
pub use schema::{FUTURE_RELEASE, RELEASE_DATE_PATTERN, SIZE_PATTERN, SchemaConfig};

/// Validate every merged record, returning the entities sorted by name.
///
/// Each record is validated independently; the first violation of every
/// failing record is collected.
pub fn validate_all(
    records: &[MergedRecord],
    config: &SchemaConfig,
) -> Result<Vec<Entity>, ValidationError> {
    let mut entities = Vec::with_capacity(records.len());
    let mut violations = Vec::new();

    for record in records {
        match validate(&record.attributes, config) {
            Ok(entity) => entities.push(entity),
            Err(mut violation) => {
                if violation.entity.is_empty() {
                    violation.entity = record.display_path();
                }
                debug!(entity = %violation.entity, field = %violation.field, "schema violation");
                violations.push(violation);
            }
        }
    }

    if !violations.is_empty() {
        return Err(ValidationError {
            total: records.len(),
            violations,
        });
    }

    sort_by_name(&mut entities);
    info!(entities = entities.len(), "catalog validated");
    Ok(entities)
}
