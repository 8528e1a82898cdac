use crate::{domain::WebhookError, server::AppState};
use axum::{
    body::to_bytes,
    extract::{Request, State},
    response::{IntoResponse, Response},
};
use http::Method;
use http_body_util::LengthLimitError;
use std::sync::Arc;
use tracing::warn;

#[tracing::instrument(skip(state, request), fields(method = %request.method()))]
pub async fn receive(State(state): State<Arc<AppState>>, request: Request) -> Response {
    if request.method() != Method::POST {
        warn!("Rejected webhook with invalid request type");
        return WebhookError::InvalidMethod.into_response();
    }

    let body = match to_bytes(request.into_body(), state.config.body_limit_bytes).await {
        Ok(body) => body,
        Err(e) => {
            let e = e.into_inner();
            if e.is::<LengthLimitError>() {
                warn!("Webhook body exceeds {} bytes", state.config.body_limit_bytes);
                return WebhookError::PayloadTooLarge.into_response();
            }

            warn!("Failed to read webhook body: {e}");
            return WebhookError::UnreadableBody.into_response();
        }
    };

    match state.dispatcher.dispatch(&body) {
        Ok(acknowledgement) => acknowledgement.into_response(),
        Err(e) => e.into_response_with(state.config.malformed_payload_status()),
    }
}
