//! Tests for the booking validation pipeline.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn valid_draft() -> BookingDraft {
    serde_json::from_value(json!({
        "propertyId": 1,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "phone": "+44 20 7946 0000",
        "checkIn": "2026-11-01",
        "checkOut": "2026-11-05",
        "guests": 2,
        "cardNumber": "4242 4242 4242 4242",
        "expirationDate": "12/28",
        "cvv": "123",
        "billingAddress": {
            "street": "1 Analytical Way",
            "city": "London",
            "state": "Greater London",
            "zipCode": "N1 9GU",
            "country": "UK"
        }
    }))
    .expect("draft object")
}

#[rstest]
fn valid_draft_passes(valid_draft: BookingDraft) {
    let submission = validate(&valid_draft).expect("valid booking");
    assert_eq!(submission.property_id(), &PropertyId::Number(1));
    assert_eq!(submission.guest_name(), "Ada Lovelace");
    assert_eq!(submission.email(), "ada@example.com");
    assert_eq!(submission.phone(), "+44 20 7946 0000");
    assert_eq!(submission.guests(), "2");
    assert_eq!(submission.card_last_four(), "4242");
    assert_eq!(submission.billing_address().zip_code, "N1 9GU");
}

#[rstest]
fn each_missing_field_is_reported_by_name(valid_draft: BookingDraft) {
    for field in BookingField::ALL {
        let mut draft = valid_draft.clone();
        draft.remove(field);
        assert_eq!(
            validate(&draft),
            Err(BookingValidationError::MissingField(field)),
            "removing {field}"
        );
    }
}

#[rstest]
fn first_missing_field_in_canonical_order_wins(mut valid_draft: BookingDraft) {
    valid_draft.remove(BookingField::Cvv);
    valid_draft.remove(BookingField::Phone);
    valid_draft.remove(BookingField::BillingAddress);
    assert_eq!(
        validate(&valid_draft),
        Err(BookingValidationError::MissingField(BookingField::Phone))
    );
}

#[rstest]
fn missing_fields_are_reported_before_bad_email(valid_draft: BookingDraft) {
    let draft = valid_draft
        .with(BookingField::Email, "not-an-email")
        .with(BookingField::Cvv, json!(null));
    assert_eq!(
        validate(&draft),
        Err(BookingValidationError::MissingField(BookingField::Cvv))
    );
}

#[rstest]
#[case(BookingField::PropertyId, json!(0))]
#[case(BookingField::PropertyId, json!(""))]
#[case(BookingField::FirstName, json!(""))]
#[case(BookingField::FirstName, json!(false))]
#[case(BookingField::Guests, json!(0))]
#[case(BookingField::Guests, json!(0.0))]
#[case(BookingField::Cvv, json!(null))]
#[case(BookingField::BillingAddress, json!(false))]
fn falsy_values_count_as_missing(
    valid_draft: BookingDraft,
    #[case] field: BookingField,
    #[case] value: serde_json::Value,
) {
    let draft = valid_draft.with(field, value);
    assert_eq!(
        validate(&draft),
        Err(BookingValidationError::MissingField(field))
    );
}

#[rstest]
fn unexpected_types_do_not_hide_an_earlier_missing_field(mut valid_draft: BookingDraft) {
    valid_draft.remove(BookingField::PropertyId);
    for guests in [json!("2"), json!(2.5), json!([2]), json!(true)] {
        let draft = valid_draft.clone().with(BookingField::Guests, guests);
        assert_eq!(
            validate(&draft),
            Err(BookingValidationError::MissingField(BookingField::PropertyId))
        );
    }
}

#[rstest]
#[case(json!("2"), "2")]
#[case(json!(2.0), "2.0")]
#[case(json!(true), "true")]
fn truthy_values_of_any_type_are_present(
    valid_draft: BookingDraft,
    #[case] guests: serde_json::Value,
    #[case] recorded: &str,
) {
    let draft = valid_draft.with(BookingField::Guests, guests);
    let submission = validate(&draft).expect("truthy guests accepted");
    assert_eq!(submission.guests(), recorded);
}

#[rstest]
fn text_property_ids_are_kept(valid_draft: BookingDraft) {
    let draft = valid_draft.with(BookingField::PropertyId, "villa-7");
    let submission = validate(&draft).expect("valid booking");
    assert_eq!(
        submission.property_id(),
        &PropertyId::Text("villa-7".to_owned())
    );
}

#[rstest]
#[case(json!({}))]
#[case(json!({ "city": null }))]
#[case(json!("1 Analytical Way"))]
fn any_present_billing_address_is_accepted(
    valid_draft: BookingDraft,
    #[case] address: serde_json::Value,
) {
    let draft = valid_draft.with(BookingField::BillingAddress, address);
    let submission = validate(&draft).expect("billing address accepted");
    assert_eq!(submission.billing_address().city, "");
}

#[rstest]
#[case(json!("a@b"))]
#[case(json!("a.com"))]
#[case(json!("@b.com"))]
#[case(json!(42))]
#[case(json!(true))]
fn malformed_email_is_rejected(valid_draft: BookingDraft, #[case] email: serde_json::Value) {
    let draft = valid_draft.with(BookingField::Email, email);
    assert_eq!(validate(&draft), Err(BookingValidationError::InvalidEmail));
}

#[rstest]
fn empty_email_is_missing_not_malformed(valid_draft: BookingDraft) {
    let draft = valid_draft.with(BookingField::Email, "");
    assert_eq!(
        validate(&draft),
        Err(BookingValidationError::MissingField(BookingField::Email))
    );
}

#[test]
fn rules_check_required_fields_in_canonical_order_then_email() {
    let required: Vec<BookingField> = RULES
        .iter()
        .filter_map(|rule| match rule {
            BookingRule::Required(field) => Some(*field),
            BookingRule::EmailFormat => None,
        })
        .collect();
    assert_eq!(required, BookingField::ALL);
    assert_eq!(RULES.last(), Some(&BookingRule::EmailFormat));
}

#[test]
fn error_messages_match_wire_format() {
    assert_eq!(
        BookingValidationError::MissingField(BookingField::CheckIn).to_string(),
        "Missing required field: checkIn"
    );
    assert_eq!(
        BookingValidationError::InvalidEmail.to_string(),
        "Invalid email format"
    );
}

#[rstest]
fn debug_output_omits_card_details(valid_draft: BookingDraft) {
    let rendered = format!("{valid_draft:?}");
    assert!(!rendered.contains("4242"));
    assert!(!rendered.contains("123"));

    let submission = validate(&valid_draft).expect("valid booking");
    let rendered = format!("{submission:?}");
    assert!(!rendered.contains("4242 4242"));
    assert!(!rendered.contains("12/28"));
}

#[test]
fn non_object_payloads_do_not_decode() {
    for payload in [json!(null), json!([]), json!("booking"), json!(7)] {
        assert!(serde_json::from_value::<BookingDraft>(payload).is_err());
    }
}
