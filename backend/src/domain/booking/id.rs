//! Booking identifier generation.
//!
//! Identifiers look like `BK-<epoch millis>-<token>` where the token is
//! [`BOOKING_TOKEN_LEN`] random base-36 characters. They are unique in
//! practice but carry no cryptographic guarantee.

use std::fmt;
use std::sync::Arc;

use mockable::Clock;
use rand::Rng;
use serde::Serialize;

/// Leading segment of every booking identifier.
pub const BOOKING_ID_PREFIX: &str = "BK";
/// Number of random base-36 characters in the trailing segment.
pub const BOOKING_TOKEN_LEN: usize = 9;

/// Generated booking identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    /// Identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BookingId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<BookingId> for String {
    fn from(value: BookingId) -> Self {
        value.0
    }
}

/// Builds booking identifiers from a clock and a random source.
#[derive(Clone)]
pub struct BookingIdGenerator {
    clock: Arc<dyn Clock>,
}

impl BookingIdGenerator {
    /// Stamp identifiers with the current time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Next identifier using the thread-local RNG.
    pub fn next_id(&self) -> BookingId {
        self.next_id_with(&mut rand::thread_rng())
    }

    /// Next identifier drawing the token from `rng`.
    pub fn next_id_with<R: Rng>(&self, rng: &mut R) -> BookingId {
        let millis = self.clock.utc().timestamp_millis();
        let token: String = std::iter::repeat_with(|| rng.gen_range(0..36_u32))
            .filter_map(|digit| char::from_digit(digit, 36))
            .take(BOOKING_TOKEN_LEN)
            .collect();
        BookingId(format!("{BOOKING_ID_PREFIX}-{millis}-{token}"))
    }
}

impl fmt::Debug for BookingIdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingIdGenerator").finish_non_exhaustive()
    }
}
