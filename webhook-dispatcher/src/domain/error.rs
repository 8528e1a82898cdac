use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde_json::Value;
use std::fmt::{Display, Formatter, Result as FmtResult};
use thiserror::Error as ThisError;

/// Where a missing field was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLocation {
    Envelope,
    Record(usize),
}

impl Display for FieldLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            FieldLocation::Envelope => write!(f, "event body"),
            FieldLocation::Record(index) => write!(f, "payload record {index}"),
        }
    }
}

/// Every way a webhook delivery can fail. The `Display` output is the exact
/// plain-text body sent back to the gateway.
#[derive(Debug, ThisError)]
pub enum WebhookError {
    #[error("Invalid request type.")]
    InvalidMethod,
    #[error("Payload too large.")]
    PayloadTooLarge,
    #[error("Unable to read request body.")]
    UnreadableBody,
    #[error("Format Exception - unable to parse JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),
    #[error("Unknown event. Raw data: {raw}")]
    UnrecognizedEvent { raw: Value },
    #[error("Missing field - unable to read {field} from {location}")]
    MissingField {
        location: FieldLocation,
        field: &'static str,
    },
}

impl WebhookError {
    pub fn missing_field(location: FieldLocation, field: &'static str) -> Self {
        Self::MissingField { location, field }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            WebhookError::InvalidMethod | WebhookError::MalformedPayload(_) => StatusCode::OK,
            WebhookError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            WebhookError::UnreadableBody => StatusCode::BAD_REQUEST,
            WebhookError::UnrecognizedEvent { .. } | WebhookError::MissingField { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Like `into_response`, but with an operator-chosen status for bodies
    /// that are not JSON.
    pub fn into_response_with(self, malformed_payload_status: StatusCode) -> Response {
        let status = match &self {
            WebhookError::MalformedPayload(_) => malformed_payload_status,
            _ => self.status(),
        };

        (status, self.to_string()).into_response()
    }
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
