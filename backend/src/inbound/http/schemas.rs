//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their wire
//! shape so the adapter layer owns the documentation concern.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::booking::BillingAddress`].
#[derive(ToSchema)]
#[schema(as = crate::domain::booking::BillingAddress)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BillingAddressSchema {
    #[schema(example = "1 Analytical Way")]
    street: String,
    #[schema(example = "London")]
    city: String,
    state: String,
    #[schema(example = "N1 9GU")]
    zip_code: String,
    country: String,
}

/// OpenAPI schema for [`crate::domain::booking::BookingDraft`].
///
/// Every field is required by the endpoint; absent, `null`, `false`, empty, or
/// zero values are rejected with a 400 naming the first such field. Values of
/// other types are accepted as present.
#[derive(ToSchema)]
#[schema(as = crate::domain::booking::BookingDraft)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BookingRequestSchema {
    /// Property identifier; string or number.
    #[schema(value_type = String, example = "1")]
    property_id: String,
    first_name: String,
    last_name: String,
    #[schema(example = "guest@example.com")]
    email: String,
    phone: String,
    #[schema(example = "2026-11-01")]
    check_in: String,
    #[schema(example = "2026-11-05")]
    check_out: String,
    /// Guest count; form posts may send it as text.
    #[schema(minimum = 1, example = 2)]
    guests: u32,
    card_number: String,
    #[schema(example = "12/28")]
    expiration_date: String,
    cvv: String,
    billing_address: BillingAddressSchema,
}
