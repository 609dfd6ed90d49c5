//! Booking intake handler.
//!
//! ```text
//! POST /api/bookings  Validate a booking and return a mock confirmation
//! ```
//!
//! Any other method on the same path is answered with 405 before the body is
//! read.

use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpResponse, Resource, ResponseError, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::booking::{BookingConfirmation, BookingDraft, BookingValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Path of the bookings resource inside the API scope.
pub const BOOKINGS_PATH: &str = "/bookings";
/// Public message for any unexpected failure while creating a booking.
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create booking";
/// Public message for unsupported methods.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Success body for `POST /api/bookings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreatedResponse {
    /// Always `true`.
    pub success: bool,
    /// Generated identifier, `BK-<epoch millis>-<token>`.
    #[schema(example = "BK-1761475200000-k3j9x0q2a")]
    pub booking_id: String,
    /// Fixed acknowledgement text.
    #[schema(example = "Booking created successfully")]
    pub message: String,
}

impl From<BookingConfirmation> for BookingCreatedResponse {
    fn from(value: BookingConfirmation) -> Self {
        Self {
            success: true,
            message: value.message().to_owned(),
            booking_id: value.booking_id().as_str().to_owned(),
        }
    }
}

fn map_booking_validation_error(err: BookingValidationError) -> Error {
    Error::invalid_request(err.to_string())
}

fn decode_draft(body: &[u8]) -> Result<BookingDraft, Error> {
    serde_json::from_slice(body).map_err(|err| {
        error!(error = %err, "booking payload could not be decoded");
        Error::internal(CREATE_FAILED_MESSAGE)
    })
}

/// Validate a booking submission.
///
/// Required fields are checked in a fixed order and the first missing one is
/// reported. The email must look like `local@domain.tld`. Nothing is stored.
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = crate::inbound::http::schemas::BookingRequestSchema,
    responses(
        (status = 201, description = "Booking accepted", body = BookingCreatedResponse),
        (status = 400, description = "Missing required field or invalid email", body = crate::inbound::http::error::ErrorBody),
        (status = 405, description = "Method not allowed; only POST is supported", body = crate::inbound::http::error::ErrorBody),
        (status = 500, description = "Failed to create booking", body = crate::inbound::http::error::ErrorBody)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
pub async fn create_booking(
    state: web::Data<HttpState>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let draft = decode_draft(&body)?;
    let confirmation = state
        .bookings
        .submit(draft)
        .map_err(map_booking_validation_error)?;
    Ok(HttpResponse::Created().json(BookingCreatedResponse::from(confirmation)))
}

/// Answer any non-POST request with 405 and an `Allow` header.
pub async fn reject_method() -> HttpResponse {
    let mut response = Error::method_not_allowed(METHOD_NOT_ALLOWED_MESSAGE).error_response();
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("POST"));
    response
}

/// The bookings resource with its method guard.
pub fn bookings_resource() -> Resource {
    web::resource(BOOKINGS_PATH)
        .route(web::post().to(create_booking))
        .default_service(web::to(reject_method))
}

#[cfg(test)]
mod tests;
