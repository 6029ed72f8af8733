// Booking form core: field updates, validation and confirmation of a single booking form

pub mod clock;
pub mod config;
pub mod draft;
pub mod field;
pub mod form;
pub mod record;
pub mod validation;

// Re-export key types for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::FormConfig;
pub use draft::BookingDraft;
pub use field::{BookingDuration, Field, FieldUpdate, FormError};
pub use form::{BookingValidator, SubmitOutcome};
pub use record::BookingRecord;
pub use validation::{check, validate, AcceptedDraft, ValidationError, ValidationResult};
