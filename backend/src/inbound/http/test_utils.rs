//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::HandlingService;
use crate::inbound::http::routes::configure;
use crate::inbound::http::state::HttpState;

/// Application with the handling routes backed by `service`.
pub fn test_app(
    service: impl HandlingService + 'static,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::new(Arc::new(service))))
        .configure(configure)
}
