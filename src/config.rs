// Booking form configuration

use crate::field::{BookingDuration, FormError};
use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    // chrono strftime pattern shared by the date picker and the confirmation
    pub date_format: String,
    pub default_duration: BookingDuration,
    pub terms_agreed_by_default: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            date_format: "%d.%m.%Y".to_string(),
            default_duration: BookingDuration::One,
            terms_agreed_by_default: true,
        }
    }
}

impl FormConfig {
    /// Parses a JSON config; missing keys fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        let config: FormConfig =
            serde_json::from_str(json).map_err(|e| FormError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.date_format.trim().is_empty() {
            return Err(FormError::ConfigError(
                "date_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(FormError::ConfigError(format!(
                "date_format '{}' is not a valid strftime pattern",
                self.date_format
            )));
        }
        Ok(())
    }

    // Falls back to ISO 8601 when the pattern cannot be rendered, e.g. a config built without validate()
    pub fn format_date(&self, date: NaiveDate) -> String {
        let mut formatted = String::new();
        match write!(formatted, "{}", date.format(&self.date_format)) {
            Ok(()) => formatted,
            Err(_) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.default_duration, BookingDuration::One);
        assert!(config.terms_agreed_by_default);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_date_uses_locale_pattern() {
        let config = FormConfig::default();
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(config.format_date(date), "07.03.2026");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = FormConfig::from_json(r#"{ "default_duration": "5" }"#).unwrap();
        assert_eq!(config.default_duration, BookingDuration::Five);
        assert_eq!(config.date_format, "%d.%m.%Y");
        assert!(config.terms_agreed_by_default);
    }

    #[test]
    fn test_invalid_json_config() {
        let result = FormConfig::from_json(r#"{ "default_duration": "2" }"#);
        assert!(matches!(result, Err(FormError::ConfigError(_))));

        let result = FormConfig::from_json(r#"{ "date_format": " " }"#);
        assert!(matches!(result, Err(FormError::ConfigError(_))));
    }

    #[test]
    fn test_unrenderable_date_format_is_rejected() {
        let result = FormConfig::from_json(r#"{ "date_format": "%d.%Q" }"#);
        assert!(matches!(result, Err(FormError::ConfigError(_))));

        let config = FormConfig {
            date_format: "%d.%Q".to_string(),
            ..FormConfig::default()
        };
        assert!(config.validate().is_err());
        let date = NaiveDate::from_ymd_opt(2026, 10, 20).unwrap();
        assert_eq!(config.format_date(date), "2026-10-20");
    }
}
