//! Ordered booking validation pipeline.
//!
//! [`RULES`] lists independent checks that run left to right; the first
//! failure is reported and later rules are skipped. Required fields come first
//! in canonical order, then the email format check.
//!
//! Presence is judged on the raw submitted value, whatever its type: a field
//! is missing when it is absent, `null`, `false`, an empty string, or a zero
//! number. A present `billingAddress` object is accepted even if its inner
//! fields are blank.

use serde_json::Value;

use super::{BookingDraft, BookingField, BookingSubmission, BookingValidationError, is_valid_email};

/// One step of the booking validation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingRule {
    /// The field must carry a truthy value.
    Required(BookingField),
    /// The email must be a string shaped like `local@domain.tld`.
    EmailFormat,
}

/// Booking rules in evaluation order.
pub const RULES: [BookingRule; 13] = [
    BookingRule::Required(BookingField::PropertyId),
    BookingRule::Required(BookingField::FirstName),
    BookingRule::Required(BookingField::LastName),
    BookingRule::Required(BookingField::Email),
    BookingRule::Required(BookingField::Phone),
    BookingRule::Required(BookingField::CheckIn),
    BookingRule::Required(BookingField::CheckOut),
    BookingRule::Required(BookingField::Guests),
    BookingRule::Required(BookingField::CardNumber),
    BookingRule::Required(BookingField::ExpirationDate),
    BookingRule::Required(BookingField::Cvv),
    BookingRule::Required(BookingField::BillingAddress),
    BookingRule::EmailFormat,
];

impl BookingRule {
    /// Apply this rule to `draft`.
    ///
    /// # Errors
    ///
    /// Returns the [`BookingValidationError`] this rule stands for when the
    /// draft does not satisfy it.
    pub fn check(self, draft: &BookingDraft) -> Result<(), BookingValidationError> {
        match self {
            Self::Required(field) => {
                if draft.get(field).is_some_and(is_truthy) {
                    Ok(())
                } else {
                    Err(BookingValidationError::MissingField(field))
                }
            }
            Self::EmailFormat => match draft.get(BookingField::Email) {
                Some(Value::String(email)) if is_valid_email(email) => Ok(()),
                _ => Err(BookingValidationError::InvalidEmail),
            },
        }
    }
}

/// Whether a submitted value counts as provided.
///
/// `null`, `false`, `""`, and numeric zero do not; every other value,
/// including empty arrays and objects, does.
///
/// # Examples
/// ```
/// use rentals_backend::domain::booking::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!("2")));
/// assert!(is_truthy(&json!({})));
/// assert!(!is_truthy(&json!(false)));
/// assert!(!is_truthy(&json!(0.0)));
/// ```
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Run every rule in order and build the validated submission.
///
/// # Errors
///
/// Returns the first failing rule's [`BookingValidationError`].
///
/// # Examples
/// ```
/// use rentals_backend::domain::booking::{
///     BookingDraft, BookingField, BookingValidationError, validate,
/// };
///
/// let err = validate(&BookingDraft::default()).expect_err("empty draft");
/// assert_eq!(err, BookingValidationError::MissingField(BookingField::PropertyId));
/// ```
pub fn validate(draft: &BookingDraft) -> Result<BookingSubmission, BookingValidationError> {
    RULES.iter().try_for_each(|rule| rule.check(draft))?;
    Ok(BookingSubmission::from_draft(draft))
}
