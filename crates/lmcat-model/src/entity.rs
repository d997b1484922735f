//! Fully merged and validated catalog entities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::values::{Availability, CutOffDate, LanguageVariety, NameAndUrl};

/// One real-world model or model variant, after merge and validation.
///
/// An entity owns all of its data; it never aliases the tree it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub url: Option<String>,
    pub release_date: String,
    pub license: String,
    pub language_varieties: Option<Vec<LanguageVariety>>,
    pub size: String,
    pub base_model: String,
    pub weight_availability: Availability,
    pub public_api_availability: Availability,
    pub online_chat_availability: Availability,
    pub model_id: String,
    pub training_data: Vec<NameAndUrl>,
    pub origin: Vec<NameAndUrl>,
    pub knowledge_cutoff: Option<CutOffDate>,
}

impl Entity {
    pub fn is_proprietary(&self) -> bool {
        self.license == "proprietary"
    }

    pub fn is_future_release(&self) -> bool {
        self.release_date == "future"
    }
}

/// Sort entities by name (case-sensitive ordinal), keeping ties stable.
pub fn sort_by_name(entities: &mut [Entity]) {
    entities.sort_by(|a, b| a.name.cmp(&b.name));
}

/// A catalog contributor. Only `name` is interpreted; other keys are passed
/// through untouched to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
