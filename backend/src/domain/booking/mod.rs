//! Booking intake domain types.
//!
//! A [`BookingDraft`] is the booking form exactly as submitted: a JSON object
//! whose values may have any type. The validation pipeline in [`validation`]
//! checks it field by field and only then converts it into a typed
//! [`BookingSubmission`], so a value of an unexpected type never hides an
//! earlier missing field.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::PropertyId;

mod email;
mod id;
#[cfg(test)]
mod tests;
pub mod validation;

pub use email::is_valid_email;
pub use id::{BOOKING_ID_PREFIX, BOOKING_TOKEN_LEN, BookingId, BookingIdGenerator};
pub use validation::{BookingRule, RULES, is_truthy, validate};

/// Message returned alongside a fresh booking identifier.
pub const BOOKING_CREATED_MESSAGE: &str = "Booking created successfully";

/// Required booking fields in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingField {
    /// Listing being booked; string or number.
    PropertyId,
    /// Guest given name.
    FirstName,
    /// Guest family name.
    LastName,
    /// Contact email, also checked for shape.
    Email,
    /// Contact phone number.
    Phone,
    /// Arrival date as entered.
    CheckIn,
    /// Departure date as entered.
    CheckOut,
    /// Number of guests.
    Guests,
    /// Payment card number.
    CardNumber,
    /// Payment card expiry.
    ExpirationDate,
    /// Payment card security code.
    Cvv,
    /// Billing address object.
    BillingAddress,
}

impl BookingField {
    /// Canonical check order.
    pub const ALL: [Self; 12] = [
        Self::PropertyId,
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::CheckIn,
        Self::CheckOut,
        Self::Guests,
        Self::CardNumber,
        Self::ExpirationDate,
        Self::Cvv,
        Self::BillingAddress,
    ];

    /// Wire name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PropertyId => "propertyId",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::CheckIn => "checkIn",
            Self::CheckOut => "checkOut",
            Self::Guests => "guests",
            Self::CardNumber => "cardNumber",
            Self::ExpirationDate => "expirationDate",
            Self::Cvv => "cvv",
            Self::BillingAddress => "billingAddress",
        }
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a booking draft is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BookingValidationError {
    /// Required field is absent, `null`, `false`, empty, or zero.
    #[error("Missing required field: {0}")]
    MissingField(BookingField),
    /// Email is present but not shaped like `local@domain.tld`.
    #[error("Invalid email format")]
    InvalidEmail,
}

/// Billing address block. Inner fields are not individually required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    /// Street line.
    pub street: String,
    /// City or town.
    pub city: String,
    /// State, county, or region.
    pub state: String,
    /// Postal code.
    pub zip_code: String,
    /// Country name.
    pub country: String,
}

impl BillingAddress {
    /// Read an address from a submitted value.
    ///
    /// Missing or `null` members become empty strings; a value that is not an
    /// object yields an empty address.
    pub fn from_value(value: &Value) -> Self {
        let member = |name: &str| value.get(name).map(coerce_text).unwrap_or_default();
        Self {
            street: member("street"),
            city: member("city"),
            state: member("state"),
            zip_code: member("zipCode"),
            country: member("country"),
        }
    }
}

/// Render a submitted scalar as text: strings verbatim, `null` as empty,
/// anything else in its JSON form.
fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Booking form payload as received.
///
/// Deserialises from any JSON object; anything else fails to decode.
///
/// # Examples
/// ```
/// use rentals_backend::domain::booking::{BookingDraft, BookingField};
/// use serde_json::json;
///
/// let draft: BookingDraft = serde_json::from_value(json!({ "guests": "2" })).expect("object");
/// assert_eq!(draft.get(BookingField::Guests), Some(&json!("2")));
/// assert!(serde_json::from_value::<BookingDraft>(json!(null)).is_err());
/// ```
#[derive(Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct BookingDraft(Map<String, Value>);

impl BookingDraft {
    /// Wrap an already decoded JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Submitted value for `field`, if the key is present.
    pub fn get(&self, field: BookingField) -> Option<&Value> {
        self.0.get(field.as_str())
    }

    /// Set `field` to `value`, replacing any previous value.
    pub fn set(&mut self, field: BookingField, value: impl Into<Value>) {
        self.0.insert(field.as_str().to_owned(), value.into());
    }

    /// Builder form of [`BookingDraft::set`].
    #[must_use]
    pub fn with(mut self, field: BookingField, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Drop `field` from the draft, returning its value.
    pub fn remove(&mut self, field: BookingField) -> Option<Value> {
        self.0.remove(field.as_str())
    }

    fn text(&self, field: BookingField) -> String {
        self.get(field).map(coerce_text).unwrap_or_default()
    }
}

impl fmt::Debug for BookingDraft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingDraft")
            .field("fields", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// A booking that passed every validation rule.
///
/// Only the last four card digits are retained; the full number, expiry, and
/// security code are checked for presence and then dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct BookingSubmission {
    property_id: PropertyId,
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    check_in: String,
    check_out: String,
    guests: String,
    card_last_four: String,
    billing_address: BillingAddress,
}

impl BookingSubmission {
    fn from_draft(draft: &BookingDraft) -> Self {
        let property_id = match draft.get(BookingField::PropertyId) {
            Some(Value::Number(number)) => number
                .as_i64()
                .map_or_else(|| PropertyId::Text(number.to_string()), PropertyId::Number),
            Some(other) => PropertyId::Text(coerce_text(other)),
            None => PropertyId::Text(String::new()),
        };
        let card_number = draft.text(BookingField::CardNumber);
        let digits: Vec<char> = card_number.chars().filter(char::is_ascii_digit).collect();
        let card_last_four = digits
            .iter()
            .skip(digits.len().saturating_sub(4))
            .collect();
        let billing_address = draft
            .get(BookingField::BillingAddress)
            .map(BillingAddress::from_value)
            .unwrap_or_default();

        Self {
            property_id,
            first_name: draft.text(BookingField::FirstName),
            last_name: draft.text(BookingField::LastName),
            email: draft.text(BookingField::Email),
            phone: draft.text(BookingField::Phone),
            check_in: draft.text(BookingField::CheckIn),
            check_out: draft.text(BookingField::CheckOut),
            guests: draft.text(BookingField::Guests),
            card_last_four,
            billing_address,
        }
    }

    /// Listing being booked.
    pub fn property_id(&self) -> &PropertyId {
        &self.property_id
    }

    /// `"first last"`.
    pub fn guest_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Contact email; already shape-checked.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Contact phone number as entered.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Arrival date as entered.
    pub fn check_in(&self) -> &str {
        &self.check_in
    }

    /// Departure date as entered.
    pub fn check_out(&self) -> &str {
        &self.check_out
    }

    /// Guest count as entered; forms may send it as text.
    pub fn guests(&self) -> &str {
        &self.guests
    }

    /// Last four digits of the card, for receipts and logs.
    pub fn card_last_four(&self) -> &str {
        &self.card_last_four
    }

    /// Billing address with blank members where none were sent.
    pub fn billing_address(&self) -> &BillingAddress {
        &self.billing_address
    }
}

impl fmt::Debug for BookingSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BookingSubmission")
            .field("property_id", &self.property_id)
            .field("check_in", &self.check_in)
            .field("check_out", &self.check_out)
            .field("guests", &self.guests)
            .field("card_last_four", &self.card_last_four)
            .finish_non_exhaustive()
    }
}

/// Result of an accepted booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    booking_id: BookingId,
}

impl BookingConfirmation {
    /// Confirm a booking under `booking_id`.
    pub fn new(booking_id: BookingId) -> Self {
        Self { booking_id }
    }

    /// Identifier issued for the booking.
    pub fn booking_id(&self) -> &BookingId {
        &self.booking_id
    }

    /// Human-readable acknowledgement.
    pub fn message(&self) -> &'static str {
        BOOKING_CREATED_MESSAGE
    }
}
