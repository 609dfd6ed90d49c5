//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the booking intake endpoint together with the
//! request, success, and error envelope schemas. The document is served by
//! Swagger UI in debug builds and exported with `cargo run --bin
//! openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::bookings::BookingCreatedResponse;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::schemas::{BillingAddressSchema, BookingRequestSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rentals backend API",
        description = "Booking intake for vacation-rental listings."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(crate::inbound::http::bookings::create_booking),
    components(schemas(
        BookingRequestSchema,
        BillingAddressSchema,
        BookingCreatedResponse,
        ErrorBody
    )),
    tags(
        (name = "bookings", description = "Booking submission and validation")
    )
)]
pub struct ApiDoc;
