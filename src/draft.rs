// In-progress booking form state, one per form session

use crate::field::{BookingDuration, FieldUpdate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    pub booking_date: Option<NaiveDate>,
    pub booking_time: String,
    pub booking_duration: Option<BookingDuration>,
    pub terms_agreed: bool,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            booking_date: None,
            booking_time: String::new(),
            booking_duration: Some(BookingDuration::One),
            terms_agreed: true,
        }
    }
}

impl BookingDraft {
    /// Fresh draft using the given defaults for the select and the checkbox.
    pub fn with_defaults(duration: BookingDuration, terms_agreed: bool) -> Self {
        Self {
            booking_duration: Some(duration),
            terms_agreed,
            ..Self::default()
        }
    }

    // Pure assignment, no validation happens here
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(value) => self.name = value,
            FieldUpdate::Phone(value) => self.phone = value,
            FieldUpdate::BookingDate(value) => self.booking_date = value,
            FieldUpdate::BookingTime(value) => self.booking_time = value,
            FieldUpdate::BookingDuration(value) => self.booking_duration = value,
            FieldUpdate::TermsAgreed(value) => self.terms_agreed = value,
        }
    }
}
