//! Driving port for booking intake.
//!
//! Inbound adapters hand a [`BookingDraft`] to a [`BookingIntake`] and map the
//! outcome to their own envelope. Nothing is persisted; a storage or payment
//! collaborator would be called from the service once validation passes.

use std::sync::Arc;

use mockable::Clock;
use tracing::{debug, info};

use crate::domain::booking::{
    BookingConfirmation, BookingDraft, BookingId, BookingIdGenerator, BookingSubmission,
    BookingValidationError, validate,
};

/// Validate a booking and issue a confirmation.
pub trait BookingIntake: Send + Sync {
    /// Run the validation pipeline and, on success, generate a booking id.
    ///
    /// Calls are independent: identical drafts produce distinct confirmations.
    ///
    /// # Errors
    ///
    /// Returns the first [`BookingValidationError`] raised by the pipeline.
    fn submit(&self, draft: BookingDraft) -> Result<BookingConfirmation, BookingValidationError>;
}

/// Stateless [`BookingIntake`] backed by the validation pipeline.
#[derive(Debug, Clone)]
pub struct BookingIntakeService {
    ids: BookingIdGenerator,
}

impl BookingIntakeService {
    /// Build the service around `clock`, which stamps booking identifiers.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            ids: BookingIdGenerator::new(clock),
        }
    }
}

impl BookingIntake for BookingIntakeService {
    fn submit(&self, draft: BookingDraft) -> Result<BookingConfirmation, BookingValidationError> {
        let submission = validate(&draft).inspect_err(|error| {
            debug!(%error, ?draft, "booking rejected");
        })?;

        let booking_id = self.ids.next_id();
        log_accepted(&booking_id, &submission);
        Ok(BookingConfirmation::new(booking_id))
    }
}

fn log_accepted(booking_id: &BookingId, submission: &BookingSubmission) {
    info!(
        booking_id = %booking_id,
        property_id = %submission.property_id(),
        guest = %submission.guest_name(),
        guests = submission.guests(),
        check_in = submission.check_in(),
        check_out = submission.check_out(),
        billing_country = submission.billing_address().country.as_str(),
        card_last_four = submission.card_last_four(),
        "booking accepted"
    );
    debug!(
        booking_id = %booking_id,
        email = submission.email(),
        phone = submission.phone(),
        "booking contact details"
    );
}
