// Source of the current calendar day for the booking date rule

use chrono::{Days, Local, NaiveDate};

pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Earliest date the picker offers: tomorrow.
    fn tomorrow(&self) -> NaiveDate {
        let today = self.today();
        today.checked_add_days(Days::new(1)).unwrap_or(today)
    }
}

// Local wall clock, matching what the user sees in the date picker
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

// Pinned day, used in tests and for replaying a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
