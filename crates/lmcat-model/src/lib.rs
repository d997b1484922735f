pub mod entity;
pub mod error;
pub mod field;
pub mod node;
pub mod record;
pub mod values;

pub use entity::{Contributor, Entity, sort_by_name};
pub use error::{ModelError, Result};
pub use field::FieldId;
pub use node::MetadataNode;
pub use record::{AttrValue, Record};
pub use values::{Availability, CutOffDate, CutOffType, LanguageVariety, NameAndUrl};

/// Identity key, exempt from ancestor/descendant conflict checks.
pub const IDENTITY_KEY: &str = "name";

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(name: &str) -> Entity {
        Entity {
            name: name.to_string(),
            url: None,
            release_date: "2024".to_string(),
            license: "proprietary".to_string(),
            language_varieties: Some(vec![LanguageVariety::PtPt]),
            size: "7B".to_string(),
            base_model: String::new(),
            weight_availability: Availability::default(),
            public_api_availability: Availability::default(),
            online_chat_availability: Availability::default(),
            model_id: name.to_lowercase(),
            training_data: vec![],
            origin: vec![],
            knowledge_cutoff: None,
        }
    }

    #[test]
    fn sort_is_case_sensitive_ordinal() {
        let mut entities = vec![entity("gervasio"), entity("Sabia"), entity("Albertina")];
        sort_by_name(&mut entities);
        let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Albertina", "Sabia", "gervasio"]);
    }

    #[test]
    fn entity_serializes() {
        let json = serde_json::to_value(entity("Foo")).expect("serialize entity");
        assert_eq!(json["license"], "proprietary");
        assert_eq!(json["language_varieties"][0], "pt-PT");
        assert!(json["knowledge_cutoff"].is_null());
        let round: Entity = serde_json::from_value(json).expect("deserialize entity");
        assert!(round.is_proprietary());
    }

    #[test]
    fn contributor_keeps_extra_fields() {
        let contributor: Contributor =
            serde_json::from_str(r#"{"name":"Ana","url":"https://example.org"}"#).unwrap();
        assert_eq!(contributor.name, "Ana");
        assert_eq!(contributor.extra["url"], "https://example.org");
    }
}
