//! Static normalization configuration.
//!
//! All source-language markers, the language variety vocabulary and the
//! header label table live here. A [`NormalizerConfig`] is built once at
//! startup (defaults, optionally overridden from a TOML file) and passed
//! explicitly to every normalization call.

use std::collections::BTreeMap;
use std::path::Path;

use lmcat_model::{FieldId, LanguageVariety};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Markers searched for (case-insensitively) in availability cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvailabilityMarkers {
    pub affirmative: Vec<String>,
    pub paid: Vec<String>,
    pub future: Vec<String>,
    pub maybe: Vec<String>,
}

impl Default for AvailabilityMarkers {
    fn default() -> Self {
        Self {
            affirmative: vec!["sim".to_string()],
            paid: vec!["paga".to_string()],
            future: vec!["futuro".to_string()],
            maybe: vec!["talvez".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Tokens that stand for "no data" in any cell.
    pub placeholders: Vec<String>,
    /// The "unknown" placeholder.
    pub unknown_token: String,
    /// Release date token meaning "announced, not yet released".
    pub future_release_token: String,
    /// Lower-cased license text that means a proprietary license.
    pub proprietary_marker: String,
    /// Joiner between language varieties in one cell.
    pub variety_separator: String,
    pub varieties: BTreeMap<String, LanguageVariety>,
    /// Prefix marking a cutoff that may be later than the given date.
    pub at_least_glyph: String,
    /// Prefix marking a cutoff that may be earlier than the given date.
    pub at_most_glyph: String,
    pub availability: AvailabilityMarkers,
    /// Source column labels mapped to canonical fields.
    pub headers: BTreeMap<String, FieldId>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        let varieties = [
            ("Portugal", LanguageVariety::PtPt),
            ("Brasil", LanguageVariety::PtBr),
            ("Galiza", LanguageVariety::GlEs),
        ]
        .into_iter()
        .map(|(label, variety)| (label.to_string(), variety))
        .collect();

        let headers = [
            ("Nome", FieldId::Name),
            ("Data de lançamento", FieldId::ReleaseDate),
            ("Licença", FieldId::License),
            ("Variante do português", FieldId::LanguageVarieties),
            ("Tamanho", FieldId::Size),
            ("Modelo base", FieldId::BaseModel),
            ("Pesos disponíveis", FieldId::WeightAvailability),
            ("Variações", FieldId::ModelId),
            ("Dados usados no treinamento", FieldId::TrainingData),
            ("Data de corte dos dados", FieldId::KnowledgeCutoff),
            ("API", FieldId::PublicApiAvailability),
            ("Chat online", FieldId::OnlineChatAvailability),
            ("Responsáveis", FieldId::Origin),
        ]
        .into_iter()
        .map(|(label, field)| (label.to_string(), field))
        .collect();

        Self {
            placeholders: vec![
                "(?)".to_string(),
                "(confidencial)".to_string(),
                "-".to_string(),
            ],
            unknown_token: "(?)".to_string(),
            future_release_token: "(futuro)".to_string(),
            proprietary_marker: "proprietária".to_string(),
            variety_separator: " e ".to_string(),
            varieties,
            at_least_glyph: "≥".to_string(),
            at_most_glyph: "≤".to_string(),
            availability: AvailabilityMarkers::default(),
            headers,
        }
    }
}

impl NormalizerConfig {
    /// Parse a configuration document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_placeholder(&self, text: &str) -> bool {
        self.placeholders.iter().any(|token| token == text)
    }

    pub fn variety(&self, label: &str) -> Option<LanguageVariety> {
        self.varieties.get(label).copied()
    }

    pub fn field_for_header(&self, label: &str) -> Option<FieldId> {
        self.headers.get(label.trim()).copied()
    }
}
