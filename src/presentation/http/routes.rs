// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::{
    controllers::participants,
    middleware::{action_filter::action_filter, rate_limit::rate_limit_layer},
    openapi::{self, StatusResponse},
    state::HttpState,
};
use axum::{
    Extension, Router,
    handler::Handler,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::OPTIONS,
];

/// Router with permissive CORS and no rate limiting.
pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    api_router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// Router configured from [`AppConfig`]: CORS restricted to the configured
/// origins and an optional per-IP rate limit.
pub fn build_router_with_config(state: HttpState, config: &AppConfig) -> Router {
    let origins: Vec<HeaderValue> = config
        .allowed_origins()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let mut router = api_router();

    let rate_limit = config.rate_limit();
    if rate_limit.enabled {
        match rate_limit_layer(rate_limit) {
            Some(layer) => router = router.layer(layer),
            None => tracing::warn!("rate limiter configuration rejected; continuing without it"),
        }
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

fn api_router() -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            participants::PARTICIPANTS_PATH,
            get(participants::list_participants.layer(middleware::from_fn(action_filter)))
                .post(participants::create_participant),
        )
        .route(
            "/api/participantes/{id}",
            get(participants::get_participant)
                .put(participants::update_participant)
                .patch(participants::patch_participant)
                .delete(participants::delete_participant),
        )
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
