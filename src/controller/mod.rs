use std::net::SocketAddr;
use anyhow::Context;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method};
use axum::Router;
use bb8_postgres::bb8::Pool;
use bb8_postgres::tokio_postgres::NoTls;
use bb8_postgres::PostgresConnectionManager;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use crate::config::Config;
use crate::helpers::current_user::USER_ID_HEADER;
use crate::helpers::handler_404::page_not_found_handler;

pub mod health_check;
pub mod wishlist_controller;

#[derive(Clone)]
pub struct AppState {
    pub postgres_connection: Pool<PostgresConnectionManager<NoTls>>,
}

pub async fn serve(
    postgres_connection: Pool<PostgresConnectionManager<NoTls>>,
    config: &Config,
) -> anyhow::Result<()> {
    let app_state = AppState {
        postgres_connection,
    };

    let application = router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::POST,
                            Method::PUT,
                            Method::DELETE,
                            Method::OPTIONS
                        ])
                        .allow_origin(Any)
                        .allow_headers([
                            AUTHORIZATION,
                            CONTENT_TYPE,
                            HeaderName::from_static(USER_ID_HEADER),
                        ])
                )
        )
        .fallback(page_not_found_handler);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("API server listening on: {}", addr);
    axum::Server::bind(&addr)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the API server")
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .nest("/api/wishlist", wishlist_controller::router(app_state))
}
