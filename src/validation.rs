// Validation rules for a booking draft
// All six rules run on every call; each field contributes at most one error

use crate::draft::BookingDraft;
use crate::field::{BookingDuration, Field};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;

static CYRILLIC_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[А-Яа-я]+$").unwrap());
static PHONE_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{11}$").unwrap());
static TIME_HH_MM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]$").unwrap());

// Rule failures; the display text is the message shown under the field
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Имя является обязательным полем")]
    NameRequired,

    #[error("Имя должно содержать только кириллицу")]
    NameNotCyrillic,

    #[error("Телефон является обязательным полем")]
    PhoneRequired,

    #[error("Телефон должен содержать 11 цифр")]
    PhoneNotElevenDigits,

    #[error("Дата бронирования является обязательным полем")]
    DateRequired,

    #[error("Дата бронирования должна быть не ранее следующего дня")]
    DateTooEarly,

    #[error("Время бронирования должно быть в формате ЧЧ:ММ")]
    TimeFormat,

    #[error("Длительность бронирования является обязательным полем")]
    DurationRequired,

    #[error("Пожалуйста, подтвердите согласие с условиями")]
    TermsNotAgreed,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::NameRequired | ValidationError::NameNotCyrillic => Field::Name,
            ValidationError::PhoneRequired | ValidationError::PhoneNotElevenDigits => Field::Phone,
            ValidationError::DateRequired | ValidationError::DateTooEarly => Field::BookingDate,
            ValidationError::TimeFormat => Field::BookingTime,
            ValidationError::DurationRequired => Field::BookingDuration,
            ValidationError::TermsNotAgreed => Field::TermsAgreed,
        }
    }
}

/// Field-keyed validation errors. An empty result means the draft can be submitted.
///
/// Serializes as a JSON object from field name to message, e.g.
/// `{"phone": "Телефон должен содержать 11 цифр"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.insert(error.field(), error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|error| error.to_string())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn fields(&self) -> Vec<Field> {
        self.errors.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.as_str(), &error.to_string())?;
        }
        map.end()
    }
}

pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }
    // Checked on the untrimmed value: surrounding spaces are not letters
    if !CYRILLIC_NAME.is_match(name) {
        return Err(ValidationError::NameNotCyrillic);
    }
    Ok(())
}

pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if phone.is_empty() {
        return Err(ValidationError::PhoneRequired);
    }
    if !PHONE_DIGITS.is_match(phone) {
        return Err(ValidationError::PhoneNotElevenDigits);
    }
    Ok(())
}

pub fn validate_date(date: Option<NaiveDate>, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    match date {
        None => Err(ValidationError::DateRequired),
        Some(date) if date <= today => Err(ValidationError::DateTooEarly),
        Some(date) => Ok(date),
    }
}

pub fn validate_time(time: &str) -> Result<(), ValidationError> {
    if TIME_HH_MM.is_match(time) {
        Ok(())
    } else {
        Err(ValidationError::TimeFormat)
    }
}

pub fn validate_duration(
    duration: Option<BookingDuration>,
) -> Result<BookingDuration, ValidationError> {
    duration.ok_or(ValidationError::DurationRequired)
}

pub fn validate_terms(agreed: bool) -> Result<(), ValidationError> {
    if agreed {
        Ok(())
    } else {
        Err(ValidationError::TermsNotAgreed)
    }
}

// Values a confirmed booking needs that the draft only holds as optional
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptedDraft {
    pub booking_date: NaiveDate,
    pub booking_duration: BookingDuration,
}

/// Runs every rule against `draft` without short-circuiting.
///
/// `Ok` is returned exactly when no rule failed; `Err` always carries at least one error.
pub fn check(draft: &BookingDraft, today: NaiveDate) -> Result<AcceptedDraft, ValidationResult> {
    let date = validate_date(draft.booking_date, today);
    let duration = validate_duration(draft.booking_duration);
    let checks = [
        validate_name(&draft.name).err(),
        validate_phone(&draft.phone).err(),
        date.err(),
        validate_time(&draft.booking_time).err(),
        duration.err(),
        validate_terms(draft.terms_agreed).err(),
    ];

    let mut result = ValidationResult::new();
    for error in checks.into_iter().flatten() {
        result.add_error(error);
    }

    match (date, duration) {
        (Ok(booking_date), Ok(booking_duration)) if result.is_empty() => Ok(AcceptedDraft {
            booking_date,
            booking_duration,
        }),
        _ => Err(result),
    }
}

/// Field-keyed errors for `draft`; empty when the draft can be submitted.
pub fn validate(draft: &BookingDraft, today: NaiveDate) -> ValidationResult {
    check(draft, today).err().unwrap_or_default()
}
