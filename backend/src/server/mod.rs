//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use bookshop::Trace;
#[cfg(debug_assertions)]
use bookshop::doc::ApiDoc;
use bookshop::inbound::http::sellers;
use bookshop::inbound::http::state::HttpState;
use bookshop::outbound::memory::InMemoryStore;
use bookshop::outbound::persistence::DieselSellerRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Select the seller store: Diesel when a pool is configured, otherwise the
/// in-memory fallback.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL seller store");
            HttpState::from_repository(Arc::new(DieselSellerRepository::new(pool.clone())))
        }
        None => {
            warn!("no database configured; sellers are kept in memory and lost on restart");
            HttpState::from_repository(Arc::new(InMemoryStore::new()))
        }
    }
}

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
    let api = web::scope("/api/v1")
        .wrap(NormalizePath::trim())
        .configure(sellers::configure);

    let app = App::new().app_data(http_state).wrap(Trace).service(api);

    #[cfg(debug_assertions)]
    let app = app.service(
        SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server from `config`.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let ServerConfig { bind_addr, .. } = config;

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "HTTP server listening");
    Ok(server)
}
