//! Tests for the booking intake handler.

use std::sync::Arc;

use actix_web::http::{Method, StatusCode};
use actix_web::{App, test as actix_test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use regex::Regex;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use super::*;
use crate::Trace;
use crate::domain::ports::BookingIntakeService;
use crate::inbound::http::configure;
use crate::middleware::TRACE_ID_HEADER;

const BOOKINGS_URI: &str = "/api/bookings";
const FIXED_MILLIS: i64 = 1_761_475_200_000;

struct FixtureClock(DateTime<Utc>);

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

fn test_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let now = Utc
        .timestamp_millis_opt(FIXED_MILLIS)
        .single()
        .expect("valid fixture timestamp");
    let state = HttpState::new(Arc::new(BookingIntakeService::new(Arc::new(FixtureClock(
        now,
    )))));
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
}

#[fixture]
fn valid_payload() -> Value {
    json!({
        "propertyId": 1,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "phone": "+44 20 7946 0000",
        "checkIn": "2026-11-01",
        "checkOut": "2026-11-05",
        "guests": 2,
        "cardNumber": "4242424242424242",
        "expirationDate": "12/28",
        "cvv": "123",
        "billingAddress": {
            "street": "1 Analytical Way",
            "city": "London",
            "state": "Greater London",
            "zipCode": "N1 9GU",
            "country": "UK"
        }
    })
}

async fn post_json(payload: &Value) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::post()
        .uri(BOOKINGS_URI)
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    let status = response.status();
    let body: Value = actix_test::read_body_json(response).await;
    (status, body)
}

#[rstest]
#[actix_web::test]
async fn valid_booking_is_created(valid_payload: Value) {
    let (status, body) = post_json(&valid_payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.get("success"), Some(&Value::Bool(true)));
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some("Booking created successfully")
    );
    let booking_id = body
        .get("bookingId")
        .and_then(Value::as_str)
        .expect("booking id");
    let pattern = Regex::new(&format!(r"^BK-{FIXED_MILLIS}-[0-9a-z]{{9}}$")).expect("regex");
    assert!(pattern.is_match(booking_id), "unexpected id {booking_id}");
}

#[rstest]
#[actix_web::test]
async fn repeated_submissions_get_distinct_ids(valid_payload: Value) {
    let app = actix_test::init_service(test_app()).await;
    let mut ids = Vec::new();
    for _ in 0..2 {
        let request = actix_test::TestRequest::post()
            .uri(BOOKINGS_URI)
            .set_json(&valid_payload)
            .to_request();
        let body: BookingCreatedResponse = actix_test::call_and_read_body_json(&app, request).await;
        ids.push(body.booking_id);
    }
    assert_ne!(ids.first(), ids.get(1));
}

#[rstest]
#[case("propertyId")]
#[case("firstName")]
#[case("lastName")]
#[case("email")]
#[case("phone")]
#[case("checkIn")]
#[case("checkOut")]
#[case("guests")]
#[case("cardNumber")]
#[case("expirationDate")]
#[case("cvv")]
#[case("billingAddress")]
#[actix_web::test]
async fn missing_field_is_named(mut valid_payload: Value, #[case] field: &str) {
    valid_payload
        .as_object_mut()
        .expect("payload object")
        .remove(field);

    let (status, body) = post_json(&valid_payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": format!("Missing required field: {field}") })
    );
}

#[rstest]
#[case("guests", json!(0))]
#[case("firstName", json!(""))]
#[case("firstName", json!(false))]
#[case("cvv", Value::Null)]
#[actix_web::test]
async fn falsy_values_count_as_missing(
    mut valid_payload: Value,
    #[case] field: &str,
    #[case] value: Value,
) {
    valid_payload
        .as_object_mut()
        .expect("payload object")
        .insert(field.to_owned(), value);

    let (status, body) = post_json(&valid_payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "error": format!("Missing required field: {field}") })
    );
}

#[rstest]
#[actix_web::test]
async fn first_missing_field_wins(mut valid_payload: Value) {
    let object = valid_payload.as_object_mut().expect("payload object");
    object.remove("cvv");
    object.remove("checkIn");
    object.remove("lastName");

    let (status, body) = post_json(&valid_payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required field: lastName" }));
}

#[rstest]
#[case(json!("2"))]
#[case(json!(2.0))]
#[case(json!(false))]
#[actix_web::test]
async fn mistyped_value_does_not_mask_earlier_missing_field(
    mut valid_payload: Value,
    #[case] guests: Value,
) {
    let object = valid_payload.as_object_mut().expect("payload object");
    object.remove("propertyId");
    object.insert("guests".to_owned(), guests);

    let (status, body) = post_json(&valid_payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Missing required field: propertyId" }));
}

#[rstest]
#[actix_web::test]
async fn string_guest_count_from_forms_is_accepted(mut valid_payload: Value) {
    valid_payload
        .as_object_mut()
        .expect("payload object")
        .insert("guests".to_owned(), json!("2"));

    let (status, body) = post_json(&valid_payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.get("success"), Some(&Value::Bool(true)));
}

#[rstest]
#[case("a@b")]
#[case("a.com")]
#[case("@b.com")]
#[actix_web::test]
async fn malformed_email_is_rejected(mut valid_payload: Value, #[case] email: &str) {
    valid_payload
        .as_object_mut()
        .expect("payload object")
        .insert("email".to_owned(), json!(email));

    let (status, body) = post_json(&valid_payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Invalid email format" }));
}

#[rstest]
#[case(Method::GET)]
#[case(Method::PUT)]
#[case(Method::DELETE)]
#[case(Method::PATCH)]
#[actix_web::test]
async fn other_methods_are_not_allowed(valid_payload: Value, #[case] method: Method) {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::default()
        .method(method)
        .uri(BOOKINGS_URI)
        .set_json(&valid_payload)
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response
            .headers()
            .get(actix_web::http::header::ALLOW)
            .and_then(|value| value.to_str().ok()),
        Some("POST")
    );
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "Method not allowed" }));
}

#[rstest]
#[case(&b"{not json"[..])]
#[case(&b"null"[..])]
#[case(&b"[1, 2]"[..])]
#[actix_web::test]
async fn undecodable_body_is_a_server_error(#[case] payload: &'static [u8]) {
    let app = actix_test::init_service(test_app()).await;
    let request = actix_test::TestRequest::post()
        .uri(BOOKINGS_URI)
        .insert_header(("content-type", "application/json"))
        .set_payload(payload)
        .to_request();

    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let trace_header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert!(trace_header.is_some());
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body, json!({ "error": "Failed to create booking" }));
}
