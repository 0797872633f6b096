//! Server host: renders the page shell, serves the site files and forwards
//! `/api/*` to the league backend.

pub mod config;
pub mod proxy;

use axum::extract::FromRef;
use axum::routing::get;
use axum::Router;
use leptos::config::LeptosOptions;
use leptos_axum::{generate_route_list, LeptosRoutes};
use tower_http::trace::TraceLayer;

use crate::app::{shell, App};
use crate::calendar_link::QUERY_ENDPOINT;
use crate::catalog::CATALOG_ENDPOINT;
use config::ServerConfig;
use proxy::{forward, ApiProxy};

#[derive(Clone, Debug, FromRef)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub api: ApiProxy,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            leptos_options: config.leptos,
            api: ApiProxy::new(config.api_origin),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let routes = generate_route_list(App);
    let options = state.leptos_options.clone();

    Router::new()
        .route(CATALOG_ENDPOINT, get(forward))
        .route(QUERY_ENDPOINT, get(forward))
        .leptos_routes(&state, routes, move || shell(options.clone()))
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
