// Field model for the booking form
// Every input control routes into one of these fields, either with a typed value or a raw string

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Errors raised while routing presentation-layer input into the draft
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid date '{value}', expected format {format}")]
    InvalidDate { value: String, format: String },

    #[error("Invalid flag value: {0}")]
    InvalidFlag(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

// The six recognised form fields, ordered as they appear on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Phone,
    BookingDate,
    BookingTime,
    BookingDuration,
    TermsAgreed,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Phone,
        Field::BookingDate,
        Field::BookingTime,
        Field::BookingDuration,
        Field::TermsAgreed,
    ];

    /// Name used by the input controls (`name`/`id` attributes).
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::BookingDate => "bookingDate",
            Field::BookingTime => "bookingTime",
            Field::BookingDuration => "bookingDuration",
            Field::TermsAgreed => "termsAgreed",
        }
    }

    /// Label shown next to the control.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Имя",
            Field::Phone => "Телефон",
            Field::BookingDate => "Дата бронирования",
            Field::BookingTime => "Время бронирования",
            Field::BookingDuration => "Длительность бронирования",
            Field::TermsAgreed => "Я согласен с условиями",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

// Booking length in hours, limited to the options offered by the select control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingDuration {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "5")]
    Five,
}

impl Default for BookingDuration {
    fn default() -> Self {
        BookingDuration::One
    }
}

impl BookingDuration {
    pub const ALL: [BookingDuration; 3] = [
        BookingDuration::One,
        BookingDuration::Three,
        BookingDuration::Five,
    ];

    pub fn hours(&self) -> u32 {
        match self {
            BookingDuration::One => 1,
            BookingDuration::Three => 3,
            BookingDuration::Five => 5,
        }
    }

    /// Option value submitted by the select control.
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingDuration::One => "1",
            BookingDuration::Three => "3",
            BookingDuration::Five => "5",
        }
    }

    /// Option text, with the Russian plural form for the hour count.
    pub fn label(&self) -> &'static str {
        match self {
            BookingDuration::One => "1 час",
            BookingDuration::Three => "3 часа",
            BookingDuration::Five => "5 часов",
        }
    }

    // Unrecognised values map to None so the draft reports the field as missing on submit
    pub fn parse(value: &str) -> Option<Self> {
        BookingDuration::ALL
            .into_iter()
            .find(|duration| duration.as_str() == value.trim())
    }
}

impl fmt::Display for BookingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// A single field assignment, carrying a value of the field's own type
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Phone(String),
    BookingDate(Option<NaiveDate>),
    BookingTime(String),
    BookingDuration(Option<BookingDuration>),
    TermsAgreed(bool),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Name(_) => Field::Name,
            FieldUpdate::Phone(_) => Field::Phone,
            FieldUpdate::BookingDate(_) => Field::BookingDate,
            FieldUpdate::BookingTime(_) => Field::BookingTime,
            FieldUpdate::BookingDuration(_) => Field::BookingDuration,
            FieldUpdate::TermsAgreed(_) => Field::TermsAgreed,
        }
    }

    /// Converts a raw control value into a typed update.
    ///
    /// Dates are parsed with `date_format` (chrono strftime syntax); an empty
    /// string clears the date. Checkbox values accept `true`/`false`/`on`/`off`.
    pub fn from_raw(field: Field, value: &str, date_format: &str) -> Result<Self, FormError> {
        let update = match field {
            Field::Name => FieldUpdate::Name(value.to_string()),
            Field::Phone => FieldUpdate::Phone(value.to_string()),
            Field::BookingTime => FieldUpdate::BookingTime(value.to_string()),
            Field::BookingDuration => FieldUpdate::BookingDuration(BookingDuration::parse(value)),
            Field::BookingDate => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    FieldUpdate::BookingDate(None)
                } else {
                    let date = NaiveDate::parse_from_str(trimmed, date_format).map_err(|_| {
                        FormError::InvalidDate {
                            value: value.to_string(),
                            format: date_format.to_string(),
                        }
                    })?;
                    FieldUpdate::BookingDate(Some(date))
                }
            }
            Field::TermsAgreed => match value.trim().to_lowercase().as_str() {
                "true" | "on" => FieldUpdate::TermsAgreed(true),
                "false" | "off" => FieldUpdate::TermsAgreed(false),
                _ => return Err(FormError::InvalidFlag(value.to_string())),
            },
        };
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("name", Field::Name)]
    #[test_case("phone", Field::Phone)]
    #[test_case("bookingDate", Field::BookingDate)]
    #[test_case("bookingTime", Field::BookingTime)]
    #[test_case("bookingDuration", Field::BookingDuration)]
    #[test_case("termsAgreed", Field::TermsAgreed)]
    fn test_field_from_wire_name(name: &str, expected: Field) {
        assert_eq!(name.parse::<Field>(), Ok(expected));
        assert_eq!(expected.to_string(), name);
    }

    #[test]
    fn test_field_labels_follow_form_order() {
        let labels: Vec<&str> = Field::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Имя",
                "Телефон",
                "Дата бронирования",
                "Время бронирования",
                "Длительность бронирования",
                "Я согласен с условиями",
            ]
        );
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = "time".parse::<Field>();
        assert_eq!(result, Err(FormError::UnknownField("time".to_string())));
    }

    #[test]
    fn test_field_serializes_as_wire_name() {
        let json = serde_json::to_string(&Field::BookingDuration).unwrap();
        assert_eq!(json, "\"bookingDuration\"");
    }

    #[test_case("1", Some(BookingDuration::One))]
    #[test_case("3", Some(BookingDuration::Three))]
    #[test_case("5", Some(BookingDuration::Five))]
    #[test_case("", None)]
    #[test_case("2", None)]
    fn test_duration_parse(value: &str, expected: Option<BookingDuration>) {
        assert_eq!(BookingDuration::parse(value), expected);
    }

    #[test]
    fn test_duration_labels() {
        let labels: Vec<&str> = BookingDuration::ALL.iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["1 час", "3 часа", "5 часов"]);
        assert_eq!(BookingDuration::default(), BookingDuration::One);
    }

    #[test]
    fn test_raw_date_is_parsed_with_format() {
        let update = FieldUpdate::from_raw(Field::BookingDate, "21.10.2026", "%d.%m.%Y").unwrap();
        assert_eq!(
            update,
            FieldUpdate::BookingDate(NaiveDate::from_ymd_opt(2026, 10, 21))
        );

        let cleared = FieldUpdate::from_raw(Field::BookingDate, "", "%d.%m.%Y").unwrap();
        assert_eq!(cleared, FieldUpdate::BookingDate(None));

        let invalid = FieldUpdate::from_raw(Field::BookingDate, "2026-10-21", "%d.%m.%Y");
        assert!(matches!(invalid, Err(FormError::InvalidDate { .. })));
    }

    #[test_case("on", Ok(FieldUpdate::TermsAgreed(true)))]
    #[test_case("TRUE", Ok(FieldUpdate::TermsAgreed(true)))]
    #[test_case("off", Ok(FieldUpdate::TermsAgreed(false)))]
    #[test_case("yes", Err(FormError::InvalidFlag("yes".to_string())))]
    fn test_raw_terms_flag(value: &str, expected: Result<FieldUpdate, FormError>) {
        assert_eq!(
            FieldUpdate::from_raw(Field::TermsAgreed, value, "%d.%m.%Y"),
            expected
        );
    }

    #[test]
    fn test_raw_text_fields_are_stored_verbatim() {
        let update = FieldUpdate::from_raw(Field::Name, " Иван ", "%d.%m.%Y").unwrap();
        assert_eq!(update, FieldUpdate::Name(" Иван ".to_string()));
        assert_eq!(update.field(), Field::Name);
    }
}
