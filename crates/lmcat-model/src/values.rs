//! Typed attribute values shared by the normalizer, validator and renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Canonical language variety code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LanguageVariety {
    #[serde(rename = "pt-PT")]
    PtPt,
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "gl-ES")]
    GlEs,
}

impl LanguageVariety {
    pub const ALL: [LanguageVariety; 3] = [
        LanguageVariety::PtPt,
        LanguageVariety::PtBr,
        LanguageVariety::GlEs,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LanguageVariety::PtPt => "pt-PT",
            LanguageVariety::PtBr => "pt-BR",
            LanguageVariety::GlEs => "gl-ES",
        }
    }
}

impl fmt::Display for LanguageVariety {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageVariety {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageVariety::ALL
            .into_iter()
            .find(|variety| variety.code() == s)
            .ok_or_else(|| ModelError::UnknownVariety(s.to_string()))
    }
}

/// Availability of weights, a public API or an online chat for a model.
///
/// Invariant (enforced by the validator): when `available_now` is true,
/// `planned` is unset and `url` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Availability {
    pub available_now: bool,
    pub planned: Option<bool>,
    pub url: Option<String>,
}

/// Qualifier attached to a knowledge cutoff date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CutOffType {
    Strict,
    PossiblyEarlier,
    PossiblyLater,
    /// No qualifier; only valid together with an empty date.
    #[default]
    #[serde(rename = "")]
    Unspecified,
}

impl CutOffType {
    pub fn as_str(self) -> &'static str {
        match self {
            CutOffType::Strict => "strict",
            CutOffType::PossiblyEarlier => "possibly_earlier",
            CutOffType::PossiblyLater => "possibly_later",
            CutOffType::Unspecified => "",
        }
    }

    pub fn is_unspecified(self) -> bool {
        self == CutOffType::Unspecified
    }
}

impl fmt::Display for CutOffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CutOffType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strict" => Ok(CutOffType::Strict),
            "possibly_earlier" => Ok(CutOffType::PossiblyEarlier),
            "possibly_later" => Ok(CutOffType::PossiblyLater),
            "" => Ok(CutOffType::Unspecified),
            other => Err(ModelError::UnknownCutOffType(other.to_string())),
        }
    }
}

/// Knowledge cutoff date with its qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CutOffDate {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: CutOffType,
}

impl CutOffDate {
    pub fn new(date: impl Into<String>, kind: CutOffType) -> Self {
        Self {
            date: date.into(),
            kind,
        }
    }
}

/// A named link, e.g. a training dataset or an organisation behind a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAndUrl {
    pub name: String,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variety_codes_round_trip() {
        for variety in LanguageVariety::ALL {
            assert_eq!(variety.code().parse::<LanguageVariety>(), Ok(variety));
        }
        assert!("pt".parse::<LanguageVariety>().is_err());
    }

    #[test]
    fn cutoff_type_serializes_as_snake_case() {
        let cutoff = CutOffDate::new("2023-01", CutOffType::PossiblyLater);
        let json = serde_json::to_string(&cutoff).unwrap();
        assert_eq!(json, r#"{"date":"2023-01","type":"possibly_later"}"#);

        let empty = serde_json::to_string(&CutOffDate::default()).unwrap();
        assert_eq!(empty, r#"{"date":"","type":""}"#);
    }
}
