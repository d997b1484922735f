//! Per-field normalization rules.
//!
//! Each canonical field maps to exactly one [`FieldRule`]. The mapping is an
//! exhaustive `match`, so adding a field without choosing its rule does not
//! compile.

use lmcat_model::{Availability, CutOffDate, CutOffType, FieldId, NameAndUrl};

use crate::cell::RawCell;
use crate::config::NormalizerConfig;
use crate::error::{NormalizationError, Result};
use crate::value::FieldValue;

/// Shape of the rule applied to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Split on the variety separator and translate through the vocabulary.
    VarietyList,
    /// Recognize the proprietary marker, otherwise pass through.
    License,
    /// Date optionally prefixed by an at-least / at-most glyph.
    PrefixedDate,
    /// Every embedded link as a `{name, url}` pair.
    LinkList,
    /// Recognize the future-release token, otherwise pass through.
    ReleaseDate,
    /// Availability heuristic over the link (or cell) text.
    Availability,
    /// Placeholders become empty text; anything else is trimmed.
    Passthrough,
}

/// Rule applied to `field`.
pub const fn rule_for(field: FieldId) -> FieldRule {
    match field {
        FieldId::LanguageVarieties => FieldRule::VarietyList,
        FieldId::License => FieldRule::License,
        FieldId::KnowledgeCutoff => FieldRule::PrefixedDate,
        FieldId::TrainingData | FieldId::Origin => FieldRule::LinkList,
        FieldId::ReleaseDate => FieldRule::ReleaseDate,
        FieldId::WeightAvailability
        | FieldId::PublicApiAvailability
        | FieldId::OnlineChatAvailability => FieldRule::Availability,
        FieldId::Name
        | FieldId::Url
        | FieldId::Size
        | FieldId::BaseModel
        | FieldId::ModelId => FieldRule::Passthrough,
    }
}

/// Normalize one raw cell for `field`.
pub fn normalize(
    field: FieldId,
    cell: &RawCell,
    config: &NormalizerConfig,
) -> Result<FieldValue> {
    rule_for(field).apply(field, cell, config)
}

impl FieldRule {
    pub fn apply(
        self,
        field: FieldId,
        cell: &RawCell,
        config: &NormalizerConfig,
    ) -> Result<FieldValue> {
        let text = cell.trimmed();
        match self {
            FieldRule::VarietyList => varieties(field, text, config),
            FieldRule::License => {
                if text.to_lowercase() == config.proprietary_marker {
                    Ok(FieldValue::Text("proprietary".to_string()))
                } else {
                    Ok(passthrough(text, config))
                }
            }
            FieldRule::PrefixedDate => Ok(cutoff(text, config)),
            FieldRule::LinkList => Ok(FieldValue::Links(links(cell))),
            FieldRule::ReleaseDate => {
                if text == config.future_release_token {
                    Ok(FieldValue::Text("future".to_string()))
                } else {
                    Ok(passthrough(text, config))
                }
            }
            FieldRule::Availability => Ok(FieldValue::Availability(availability(cell, config))),
            FieldRule::Passthrough => Ok(passthrough(text, config)),
        }
    }
}

fn passthrough(text: &str, config: &NormalizerConfig) -> FieldValue {
    if config.is_placeholder(text) {
        FieldValue::Text(String::new())
    } else {
        FieldValue::Text(text.to_string())
    }
}

fn varieties(field: FieldId, text: &str, config: &NormalizerConfig) -> Result<FieldValue> {
    if text.is_empty() || text == config.unknown_token {
        return Ok(FieldValue::Null);
    }
    text.split(config.variety_separator.as_str())
        .map(|token| {
            let token = token.trim();
            config
                .variety(token)
                .ok_or_else(|| NormalizationError::UnknownVariety {
                    field,
                    token: token.to_string(),
                    text: text.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()
        .map(FieldValue::Varieties)
}

fn cutoff(text: &str, config: &NormalizerConfig) -> FieldValue {
    if text.is_empty() || config.is_placeholder(text) {
        return FieldValue::Null;
    }
    let cutoff = if let Some(rest) = text.strip_prefix(config.at_least_glyph.as_str()) {
        CutOffDate::new(rest.trim(), CutOffType::PossiblyLater)
    } else if let Some(rest) = text.strip_prefix(config.at_most_glyph.as_str()) {
        CutOffDate::new(rest.trim(), CutOffType::PossiblyEarlier)
    } else {
        CutOffDate::new(text, CutOffType::Strict)
    };
    FieldValue::CutOff(cutoff)
}

fn links(cell: &RawCell) -> Vec<NameAndUrl> {
    cell.links
        .iter()
        .filter_map(|link| {
            let name = link.text.trim().to_string();
            let url = link.href.clone().filter(|href| !href.is_empty());
            if name.is_empty() && url.is_none() {
                None
            } else {
                Some(NameAndUrl { name, url })
            }
        })
        .collect()
}

fn availability(cell: &RawCell, config: &NormalizerConfig) -> Availability {
    let (text, url) = match cell.first_link() {
        Some(link) => (link.text.trim().to_lowercase(), link.href.clone()),
        None => (cell.trimmed().to_lowercase(), None),
    };
    let contains_any =
        |markers: &[String]| markers.iter().any(|marker| text.contains(marker.as_str()));
    let markers = &config.availability;

    let available_now = contains_any(&markers.affirmative) || contains_any(&markers.paid);
    let announced = contains_any(&markers.future) || contains_any(&markers.maybe);
    Availability {
        available_now,
        planned: (announced && !available_now).then_some(true),
        url,
    }
}
