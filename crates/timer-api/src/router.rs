//! Route table and HTTP middleware

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use timer_shared::constants::{EXTEND_ROUTE, VALIDATE_ROUTE};

use crate::handlers::{extend, health, validate};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        // Session routes
        .route(EXTEND_ROUTE, post(extend::extend_session))
        .route(VALIDATE_ROUTE, get(validate::validate_session))
        // Add State
        .with_state(state)
        // Request id + tracing
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}
