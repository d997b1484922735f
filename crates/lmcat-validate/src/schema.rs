//! Validator configuration.

use lmcat_model::LanguageVariety;
use regex::Regex;

/// Magnitude with a million/billion/trillion suffix, e.g. `7B` or `1.5T`.
pub const SIZE_PATTERN: &str = r"^[0-9]+(\.[0-9]+)?[MBT]$";

/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
pub const RELEASE_DATE_PATTERN: &str = r"^\d{4}(-(0[1-9]|1[0-2])(-(0[1-9]|[12]\d|3[01]))?)?$";

/// Literal release date of models announced but not yet released.
pub const FUTURE_RELEASE: &str = "future";

/// Compiled patterns and the accepted language varieties.
///
/// Built once at startup and passed to every [`crate::validate`] call.
#[derive(Debug, Clone)]
pub struct SchemaConfig {
    pub size: Regex,
    pub release_date: Regex,
    pub varieties: Vec<LanguageVariety>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            size: Regex::new(SIZE_PATTERN).expect("Invalid size regex"),
            release_date: Regex::new(RELEASE_DATE_PATTERN).expect("Invalid release date regex"),
            varieties: LanguageVariety::ALL.to_vec(),
        }
    }
}

impl SchemaConfig {
    /// Restrict accepted varieties, typically to the normalizer's vocabulary.
    #[must_use]
    pub fn with_varieties(mut self, varieties: impl IntoIterator<Item = LanguageVariety>) -> Self {
        self.varieties = varieties.into_iter().collect();
        self.varieties.sort();
        self.varieties.dedup();
        self
    }

    /// Empty or a magnitude such as `7B`.
    pub fn is_valid_size(&self, value: &str) -> bool {
        value.is_empty() || self.size.is_match(value)
    }

    /// Empty, `future`, or a (partial) ISO date.
    pub fn is_valid_release_date(&self, value: &str) -> bool {
        value.is_empty() || value == FUTURE_RELEASE || self.release_date.is_match(value)
    }

    pub fn variety(&self, code: &str) -> Option<LanguageVariety> {
        self.varieties
            .iter()
            .copied()
            .find(|variety| variety.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        let config = SchemaConfig::default();
        for ok in ["", "7B", "1.5T", "350M", "13.0B"] {
            assert!(config.is_valid_size(ok), "{ok}");
        }
        for bad in ["7b", "B", "1.B", "7 B", "7BT", "(?)"] {
            assert!(!config.is_valid_size(bad), "{bad}");
        }
    }

    #[test]
    fn release_dates() {
        let config = SchemaConfig::default();
        for ok in ["", "2024", "2024-03", "2024-03-01", "future"] {
            assert!(config.is_valid_release_date(ok), "{ok}");
        }
        for bad in [
            "24",
            "2024/03",
            "2024-3",
            "2024-13",
            "2024-00",
            "2024-99-99",
            "2024-02-32",
            "Future",
            "(futuro)",
        ] {
            assert!(!config.is_valid_release_date(bad), "{bad}");
        }
    }

    #[test]
    fn restricted_vocabulary() {
        let config = SchemaConfig::default().with_varieties([LanguageVariety::PtBr]);
        assert_eq!(config.variety("pt-BR"), Some(LanguageVariety::PtBr));
        assert_eq!(config.variety("pt-PT"), None);
    }
}
