//! HTTP inbound adapter exposing REST endpoints.

use actix_web::web;

pub mod bookings;
pub mod error;
pub mod schemas;
pub mod state;

pub use error::ApiResult;

/// Prefix shared by every REST endpoint.
pub const API_SCOPE: &str = "/api";

/// Register the REST endpoints under [`API_SCOPE`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use rentals_backend::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope(API_SCOPE).service(bookings::bookings_resource()));
}
