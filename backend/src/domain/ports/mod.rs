//! Domain ports used by inbound adapters.

mod booking_intake;

pub use booking_intake::{BookingIntake, BookingIntakeService};
