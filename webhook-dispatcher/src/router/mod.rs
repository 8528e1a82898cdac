pub mod webhook;

use crate::server::AppState;
use axum::{
    routing::{any, get},
    Router,
};
use axum_prometheus::PrometheusMetricLayer;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn get_router(state: &Arc<AppState>) -> Router {
    let router = Router::new()
        .route(&state.config.webhook_path, any(webhook::receive))
        .layer(TraceLayer::new_for_http())
        .route("/healthz", get(get_health))
        .with_state(state.clone());

    // The prometheus recorder is process-global, so it can only be installed once.
    if state.config.metrics_enabled {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router
            .route("/metrics", get(|| async move { metric_handle.render() }))
            .layer(prometheus_layer)
    } else {
        router
    }
}

async fn get_health() {}
