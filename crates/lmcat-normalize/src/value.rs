//! Normalized field values.

use std::collections::BTreeMap;

use lmcat_model::{AttrValue, Availability, CutOffDate, LanguageVariety, NameAndUrl};

/// Result of normalizing one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// No value; the attribute is omitted from the stored record.
    Null,
    Text(String),
    Varieties(Vec<LanguageVariety>),
    CutOff(CutOffDate),
    Links(Vec<NameAndUrl>),
    Availability(Availability),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Storage form of the value, or `None` for [`FieldValue::Null`].
    pub fn to_attr(&self) -> Option<AttrValue> {
        match self {
            FieldValue::Null => None,
            FieldValue::Text(text) => Some(AttrValue::String(text.clone())),
            FieldValue::Varieties(varieties) => Some(AttrValue::Array(
                varieties
                    .iter()
                    .map(|variety| AttrValue::from(variety.code()))
                    .collect(),
            )),
            FieldValue::CutOff(cutoff) => Some(cutoff_attr(cutoff)),
            FieldValue::Links(links) => {
                Some(AttrValue::Array(links.iter().map(link_attr).collect()))
            }
            FieldValue::Availability(availability) => Some(availability_attr(availability)),
        }
    }
}

fn cutoff_attr(cutoff: &CutOffDate) -> AttrValue {
    let mut table = BTreeMap::new();
    table.insert("date".to_string(), AttrValue::from(cutoff.date.as_str()));
    table.insert("type".to_string(), AttrValue::from(cutoff.kind.as_str()));
    AttrValue::Table(table)
}

fn link_attr(link: &NameAndUrl) -> AttrValue {
    let mut table = BTreeMap::new();
    table.insert("name".to_string(), AttrValue::from(link.name.as_str()));
    if let Some(url) = &link.url {
        table.insert("url".to_string(), AttrValue::from(url.as_str()));
    }
    AttrValue::Table(table)
}

fn availability_attr(availability: &Availability) -> AttrValue {
    let mut table = BTreeMap::new();
    table.insert(
        "available_now".to_string(),
        AttrValue::Boolean(availability.available_now),
    );
    if let Some(planned) = availability.planned {
        table.insert("planned".to_string(), AttrValue::Boolean(planned));
    }
    if let Some(url) = &availability.url {
        table.insert("url".to_string(), AttrValue::from(url.as_str()));
    }
    AttrValue::Table(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_has_no_storage_form() {
        assert_eq!(FieldValue::Null.to_attr(), None);
    }

    #[test]
    fn availability_omits_unset_members() {
        let value = FieldValue::Availability(Availability {
            available_now: false,
            planned: None,
            url: None,
        });
        let attr = value.to_attr().unwrap();
        let table = attr.as_table().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table["available_now"], AttrValue::Boolean(false));
    }
}
