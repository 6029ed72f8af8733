// Booking form state machine
// Owns the draft, applies field updates and turns a submit into either errors or a confirmed booking

use crate::clock::{Clock, SystemClock};
use crate::config::FormConfig;
use crate::draft::BookingDraft;
use crate::field::{BookingDuration, Field, FieldUpdate, FormError};
use crate::record::BookingRecord;
use crate::validation::{check, AcceptedDraft, ValidationError, ValidationResult};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

// Result of a single submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Confirmed(BookingRecord),
    Rejected(ValidationResult),
}

impl SubmitOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, SubmitOutcome::Confirmed(_))
    }
}

pub struct BookingValidator<C: Clock = SystemClock> {
    config: FormConfig,
    clock: C,
    draft: BookingDraft,
    errors: ValidationResult,
    confirmation: Option<BookingRecord>,
}

impl BookingValidator<SystemClock> {
    pub fn new() -> Self {
        Self::from_parts(FormConfig::default(), SystemClock)
    }
}

impl Default for BookingValidator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> BookingValidator<C> {
    /// Creates a form session, rejecting a config whose date format cannot be rendered.
    pub fn with_clock(config: FormConfig, clock: C) -> Result<Self, FormError> {
        config.validate()?;
        Ok(Self::from_parts(config, clock))
    }

    fn from_parts(config: FormConfig, clock: C) -> Self {
        let draft =
            BookingDraft::with_defaults(config.default_duration, config.terms_agreed_by_default);
        Self {
            config,
            clock,
            draft,
            errors: ValidationResult::new(),
            confirmation: None,
        }
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Errors from the latest submit attempt.
    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Booking from the latest successful submit, kept until the next one succeeds.
    pub fn confirmation(&self) -> Option<&BookingRecord> {
        self.confirmation.as_ref()
    }

    pub fn field_error(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(field)
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.contains(field)
    }

    pub fn min_selectable_date(&self) -> NaiveDate {
        self.clock.tomorrow()
    }

    pub fn update_field(&mut self, update: FieldUpdate) {
        debug!(field = %update.field(), "Updating booking field");
        self.draft.apply(update);
    }

    /// Routes a raw control value by field name, as emitted by text inputs and the select.
    pub fn update_raw(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field: Field = name.parse()?;
        let update = FieldUpdate::from_raw(field, value, &self.config.date_format)?;
        self.update_field(update);
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.update_field(FieldUpdate::Name(name.into()));
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.update_field(FieldUpdate::Phone(phone.into()));
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.update_field(FieldUpdate::BookingTime(time.into()));
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.update_field(FieldUpdate::BookingDate(date));
    }

    pub fn set_duration(&mut self, duration: Option<BookingDuration>) {
        self.update_field(FieldUpdate::BookingDuration(duration));
    }

    pub fn set_terms_agreed(&mut self, agreed: bool) {
        self.update_field(FieldUpdate::TermsAgreed(agreed));
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        match check(&self.draft, self.clock.today()) {
            Ok(accepted) => {
                let record = self.build_record(accepted);
                info!(
                    date = %record.booking_date,
                    time = %record.booking_time,
                    hours = record.booking_duration.hours(),
                    "Booking confirmed"
                );
                self.errors = ValidationResult::new();
                self.draft = BookingDraft::with_defaults(
                    self.config.default_duration,
                    self.config.terms_agreed_by_default,
                );
                self.confirmation = Some(record.clone());
                SubmitOutcome::Confirmed(record)
            }
            Err(result) => {
                warn!(fields = ?result.fields(), "Booking rejected");
                self.errors = result.clone();
                SubmitOutcome::Rejected(result)
            }
        }
    }

    fn build_record(&self, accepted: AcceptedDraft) -> BookingRecord {
        BookingRecord {
            name: self.draft.name.clone(),
            phone: self.draft.phone.clone(),
            booking_date: self.config.format_date(accepted.booking_date),
            booking_time: self.draft.booking_time.clone(),
            booking_duration: accepted.booking_duration,
        }
    }
}
