//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::BookingIntake;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Booking intake port.
    pub bookings: Arc<dyn BookingIntake>,
}

impl HttpState {
    /// Construct state from the booking intake port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use rentals_backend::domain::ports::BookingIntakeService;
    /// use rentals_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(BookingIntakeService::new(Arc::new(DefaultClock))));
    /// let _bookings = state.bookings.clone();
    /// ```
    pub fn new(bookings: Arc<dyn BookingIntake>) -> Self {
        Self { bookings }
    }
}
