// Confirmed booking produced by a successful submission

use crate::field::BookingDuration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub name: String,
    pub phone: String,
    // Already formatted for display, e.g. "20.10.2026"
    pub booking_date: String,
    pub booking_time: String,
    pub booking_duration: BookingDuration,
}

impl BookingRecord {
    /// Text shown in the success banner after the form is reset.
    pub fn confirmation_message(&self) -> String {
        format!(
            "Бронирование успешно создано!\n\
             Имя: {}\n\
             Телефон: {}\n\
             Дата бронирования: {}\n\
             Время бронирования: {}\n\
             Длительность бронирования: {}",
            self.name,
            self.phone,
            self.booking_date,
            self.booking_time,
            self.booking_duration.label()
        )
    }
}
