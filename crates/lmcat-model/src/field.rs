//! Canonical field identifiers.
//!
//! Every attribute stored in a catalog record is keyed by one of these
//! identifiers. The declaration order is the canonical order used when
//! validating and rendering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Canonical identifier of a catalog attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    Url,
    ReleaseDate,
    License,
    LanguageVarieties,
    Size,
    BaseModel,
    WeightAvailability,
    PublicApiAvailability,
    OnlineChatAvailability,
    ModelId,
    TrainingData,
    Origin,
    KnowledgeCutoff,
}

impl FieldId {
    /// All fields in canonical order.
    pub const ALL: [FieldId; 14] = [
        FieldId::Name,
        FieldId::Url,
        FieldId::ReleaseDate,
        FieldId::License,
        FieldId::LanguageVarieties,
        FieldId::Size,
        FieldId::BaseModel,
        FieldId::WeightAvailability,
        FieldId::PublicApiAvailability,
        FieldId::OnlineChatAvailability,
        FieldId::ModelId,
        FieldId::TrainingData,
        FieldId::Origin,
        FieldId::KnowledgeCutoff,
    ];

    /// The three availability fields, in canonical order.
    pub const AVAILABILITY: [FieldId; 3] = [
        FieldId::WeightAvailability,
        FieldId::PublicApiAvailability,
        FieldId::OnlineChatAvailability,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Url => "url",
            FieldId::ReleaseDate => "release_date",
            FieldId::License => "license",
            FieldId::LanguageVarieties => "language_varieties",
            FieldId::Size => "size",
            FieldId::BaseModel => "base_model",
            FieldId::WeightAvailability => "weight_availability",
            FieldId::PublicApiAvailability => "public_api_availability",
            FieldId::OnlineChatAvailability => "online_chat_availability",
            FieldId::ModelId => "model_id",
            FieldId::TrainingData => "training_data",
            FieldId::Origin => "origin",
            FieldId::KnowledgeCutoff => "knowledge_cutoff",
        }
    }

    /// Fields that may be absent from a fully merged record.
    pub fn is_nullable(self) -> bool {
        matches!(
            self,
            FieldId::Url | FieldId::LanguageVarieties | FieldId::KnowledgeCutoff
        )
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ModelError::UnknownField(s.to_string()))
    }
}
