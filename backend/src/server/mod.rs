//! Server construction and middleware wiring.

mod config;

pub use config::ServerSettings;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use rentals_backend::Trace;
#[cfg(debug_assertions)]
use rentals_backend::doc::ApiDoc;
use rentals_backend::domain::ports::BookingIntakeService;
use rentals_backend::inbound::http::configure;
use rentals_backend::inbound::http::state::HttpState;

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the listener settings.
///
/// # Errors
/// Propagates [`std::io::Error`] when the host is not an IP address or the
/// socket cannot be bound.
pub fn create_server(settings: &ServerSettings) -> std::io::Result<Server> {
    let bind_addr = settings.bind_addr()?;
    let bookings = Arc::new(BookingIntakeService::new(Arc::new(DefaultClock)));
    let http_state = web::Data::new(HttpState::new(bookings));

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "listening");
    Ok(server)
}

#[cfg(test)]
mod tests {
    //! Tests for application wiring.

    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;

    fn test_state() -> web::Data<HttpState> {
        web::Data::new(HttpState::new(Arc::new(BookingIntakeService::new(
            Arc::new(DefaultClock),
        ))))
    }

    #[actix_web::test]
    async fn bookings_route_is_mounted() {
        let app = actix_test::init_service(build_app(test_state())).await;
        let request = actix_test::TestRequest::get()
            .uri("/api/bookings")
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert!(response.headers().contains_key("trace-id"));
    }

    #[actix_web::test]
    async fn unknown_paths_are_not_found() {
        let app = actix_test::init_service(build_app(test_state())).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/unknown")
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[cfg(debug_assertions)]
    #[actix_web::test]
    async fn openapi_document_is_served_in_debug_builds() {
        let app = actix_test::init_service(build_app(test_state())).await;
        let request = actix_test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();

        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
    }
}
