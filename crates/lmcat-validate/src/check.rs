//! Single-record validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//! unknown fields, missing fields, per-field types and formats in canonical
//! field order, then the availability and knowledge cutoff invariants.

use std::collections::BTreeMap;

use lmcat_model::{
    AttrValue, Availability, CutOffDate, CutOffType, Entity, FieldId, LanguageVariety, NameAndUrl,
    Record,
};

use crate::error::{SchemaViolation, ViolationRule};
use crate::schema::{FUTURE_RELEASE, SchemaConfig};

/// Offending attribute path and rule, before the entity is attached.
struct Fault {
    field: String,
    rule: ViolationRule,
}

impl Fault {
    fn new(field: impl Into<String>, rule: ViolationRule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }
}

type Check<T> = std::result::Result<T, Fault>;

/// Validate a merged record into an [`Entity`].
///
/// Violations name the entity by its `name` attribute (empty when absent).
pub fn validate(record: &Record, config: &SchemaConfig) -> Result<Entity, SchemaViolation> {
    check_record(record, config).map_err(|fault| SchemaViolation {
        entity: record.name().unwrap_or_default().to_string(),
        field: fault.field,
        rule: fault.rule,
    })
}

fn check_record(record: &Record, config: &SchemaConfig) -> Check<Entity> {
    if let Some(key) = record.keys().find(|key| key.parse::<FieldId>().is_err()) {
        return Err(Fault::new(key, ViolationRule::UnknownField));
    }
    if let Some(field) = FieldId::ALL
        .into_iter()
        .find(|field| !field.is_nullable() && !record.contains_key(field.as_str()))
    {
        return Err(Fault::new(field.as_str(), ViolationRule::MissingField));
    }

    let fields = Fields { record, config };
    let entity = Entity {
        name: fields.name()?,
        url: fields.optional(FieldId::Url, |path, value| text(path, value).map(str::to_string))?,
        release_date: fields.release_date()?,
        license: fields.text(FieldId::License)?,
        language_varieties: fields.optional(FieldId::LanguageVarieties, |path, value| {
            varieties(path, value, config)
        })?,
        size: fields.size()?,
        base_model: fields.text(FieldId::BaseModel)?,
        weight_availability: fields.required(FieldId::WeightAvailability, availability)?,
        public_api_availability: fields.required(FieldId::PublicApiAvailability, availability)?,
        online_chat_availability: fields.required(FieldId::OnlineChatAvailability, availability)?,
        model_id: fields.text(FieldId::ModelId)?,
        training_data: fields.required(FieldId::TrainingData, links)?,
        origin: fields.required(FieldId::Origin, links)?,
        knowledge_cutoff: fields.optional(FieldId::KnowledgeCutoff, cutoff)?,
    };

    let availabilities = [
        &entity.weight_availability,
        &entity.public_api_availability,
        &entity.online_chat_availability,
    ];
    for (field, value) in FieldId::AVAILABILITY.into_iter().zip(availabilities) {
        check_availability(field.as_str(), value)?;
    }
    if let Some(cutoff) = &entity.knowledge_cutoff {
        check_cutoff(FieldId::KnowledgeCutoff.as_str(), cutoff)?;
    }
    Ok(entity)
}

struct Fields<'a> {
    record: &'a Record,
    config: &'a SchemaConfig,
}

impl Fields<'_> {
    fn required<T>(&self, field: FieldId, parse: impl Fn(&str, &AttrValue) -> Check<T>) -> Check<T> {
        let value = self
            .record
            .get(field.as_str())
            .ok_or_else(|| Fault::new(field.as_str(), ViolationRule::MissingField))?;
        parse(field.as_str(), value)
    }

    fn optional<T>(
        &self,
        field: FieldId,
        parse: impl Fn(&str, &AttrValue) -> Check<T>,
    ) -> Check<Option<T>> {
        self.record
            .get(field.as_str())
            .map(|value| parse(field.as_str(), value))
            .transpose()
    }

    fn text(&self, field: FieldId) -> Check<String> {
        self.required(field, |path, value| text(path, value).map(str::to_string))
    }

    fn name(&self) -> Check<String> {
        let name = self.text(FieldId::Name)?;
        if name.is_empty() {
            return Err(Fault::new(FieldId::Name.as_str(), ViolationRule::Empty));
        }
        Ok(name)
    }

    fn size(&self) -> Check<String> {
        let size = self.text(FieldId::Size)?;
        if !self.config.is_valid_size(&size) {
            return Err(Fault::new(
                FieldId::Size.as_str(),
                ViolationRule::InvalidFormat {
                    value: size,
                    expected: "a size such as 7B or 1.5T, or empty",
                },
            ));
        }
        Ok(size)
    }

    fn release_date(&self) -> Check<String> {
        let date = self.text(FieldId::ReleaseDate)?;
        if !self.config.is_valid_release_date(&date) {
            return Err(Fault::new(
                FieldId::ReleaseDate.as_str(),
                ViolationRule::InvalidFormat {
                    value: date,
                    expected: "YYYY, YYYY-MM, YYYY-MM-DD, 'future', or empty",
                },
            ));
        }
        Ok(date)
    }
}

fn wrong_type(path: &str, expected: &'static str, value: &AttrValue) -> Fault {
    Fault::new(
        path,
        ViolationRule::WrongType {
            expected,
            found: value.type_name(),
        },
    )
}

fn text<'v>(path: &str, value: &'v AttrValue) -> Check<&'v str> {
    value.as_str().ok_or_else(|| wrong_type(path, "a string", value))
}

fn boolean(path: &str, value: &AttrValue) -> Check<bool> {
    value.as_bool().ok_or_else(|| wrong_type(path, "a boolean", value))
}

/// A nested table restricted to `allowed` keys, all of `required` present.
fn table<'v>(
    path: &str,
    value: &'v AttrValue,
    allowed: &[&str],
    required: &[&str],
) -> Check<&'v BTreeMap<String, AttrValue>> {
    let table = value.as_table().ok_or_else(|| wrong_type(path, "a table", value))?;
    if let Some(key) = table.keys().find(|key| !allowed.contains(&key.as_str())) {
        return Err(Fault::new(format!("{path}.{key}"), ViolationRule::UnknownField));
    }
    if let Some(key) = required.iter().find(|key| !table.contains_key(**key)) {
        return Err(Fault::new(format!("{path}.{key}"), ViolationRule::MissingField));
    }
    Ok(table)
}

fn optional_text(path: &str, table: &BTreeMap<String, AttrValue>, key: &str) -> Check<Option<String>> {
    table
        .get(key)
        .map(|value| text(&format!("{path}.{key}"), value).map(str::to_string))
        .transpose()
}

fn varieties(path: &str, value: &AttrValue, config: &SchemaConfig) -> Check<Vec<LanguageVariety>> {
    let items = value.as_array().ok_or_else(|| wrong_type(path, "a list", value))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let item_path = format!("{path}[{index}]");
            let code = text(&item_path, item)?;
            config
                .variety(code)
                .ok_or_else(|| Fault::new(item_path, ViolationRule::UnknownVariety(code.to_string())))
        })
        .collect()
}

fn availability(path: &str, value: &AttrValue) -> Check<Availability> {
    let table = table(path, value, &["available_now", "planned", "url"], &["available_now"])?;
    let available_now = boolean(&format!("{path}.available_now"), &table["available_now"])?;
    let planned = table
        .get("planned")
        .map(|value| boolean(&format!("{path}.planned"), value))
        .transpose()?;
    Ok(Availability {
        available_now,
        planned,
        url: optional_text(path, table, "url")?,
    })
}

fn links(path: &str, value: &AttrValue) -> Check<Vec<NameAndUrl>> {
    let items = value.as_array().ok_or_else(|| wrong_type(path, "a list", value))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let item_path = format!("{path}[{index}]");
            let table = table(&item_path, item, &["name", "url"], &["name"])?;
            Ok(NameAndUrl {
                name: text(&format!("{item_path}.name"), &table["name"])?.to_string(),
                url: optional_text(&item_path, table, "url")?,
            })
        })
        .collect()
}

fn cutoff(path: &str, value: &AttrValue) -> Check<CutOffDate> {
    let table = table(path, value, &["date", "type"], &["date", "type"])?;
    let date = text(&format!("{path}.date"), &table["date"])?;
    let kind_path = format!("{path}.type");
    let kind_text = text(&kind_path, &table["type"])?;
    let kind = kind_text.parse::<CutOffType>().map_err(|_| {
        Fault::new(
            kind_path.as_str(),
            ViolationRule::UnknownCutOffType(kind_text.to_string()),
        )
    })?;
    Ok(CutOffDate::new(date, kind))
}

fn check_availability(path: &str, availability: &Availability) -> Check<()> {
    if !availability.available_now {
        return Ok(());
    }
    if availability.planned.is_some() {
        return Err(Fault::new(
            format!("{path}.planned"),
            ViolationRule::PlannedWhileAvailable,
        ));
    }
    if availability.url.as_deref().is_none_or(str::is_empty) {
        return Err(Fault::new(
            format!("{path}.url"),
            ViolationRule::MissingUrlWhileAvailable,
        ));
    }
    Ok(())
}

fn check_cutoff(path: &str, cutoff: &CutOffDate) -> Check<()> {
    if cutoff.date == FUTURE_RELEASE {
        return Err(Fault::new(format!("{path}.date"), ViolationRule::FutureCutOff));
    }
    if cutoff.date.is_empty() != cutoff.kind.is_unspecified() {
        return Err(Fault::new(path, ViolationRule::CutOffTypeMismatch));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_reports_nested_paths() {
        let mut inner = BTreeMap::new();
        inner.insert("available_now".to_string(), AttrValue::Boolean(true));
        inner.insert("price".to_string(), AttrValue::from("free"));
        let fault = availability("api", &AttrValue::Table(inner)).err().unwrap();
        assert_eq!(fault.field, "api.price");
        assert_eq!(fault.rule, ViolationRule::UnknownField);
    }

    #[test]
    fn link_entries_need_a_name() {
        let mut entry = BTreeMap::new();
        entry.insert("url".to_string(), AttrValue::from("https://x.example"));
        let value = AttrValue::Array(vec![AttrValue::Table(entry)]);
        let fault = links("origin", &value).err().unwrap();
        assert_eq!(fault.field, "origin[0].name");
        assert_eq!(fault.rule, ViolationRule::MissingField);
    }

    #[test]
    fn unavailable_needs_nothing_else() {
        let availability = Availability {
            available_now: false,
            planned: Some(true),
            url: None,
        };
        assert!(check_availability("weight_availability", &availability).is_ok());
    }
}
