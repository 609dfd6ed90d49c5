//! Vacation-rental listings and booking intake.
//!
//! The domain layer turns property records into card and detail view models
//! and validates booking submissions. The inbound HTTP adapter exposes
//! `POST /api/bookings` on top of it.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
