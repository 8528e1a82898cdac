use super::handler::{
    CardHandler, CardState, ChargeOutcome, EventHandler, PendingHandler, PurchaseHandler,
};
use crate::domain::{EventKind, InboundEvent, WebhookError};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use std::{collections::HashMap, sync::Arc};
use tracing::{info, warn};

const LINE_SEPARATOR: &str = "\r\n";

/// The outcome of a recognized event: one line per payload record, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub kind: EventKind,
    pub lines: Vec<String>,
}

impl Acknowledgement {
    pub fn body(&self) -> String {
        self.lines.join(LINE_SEPARATOR)
    }
}

impl IntoResponse for Acknowledgement {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.body()).into_response()
    }
}

/// Routes a webhook body to the handler registered for its `event` name.
/// Names without a handler are rejected as unrecognized.
#[derive(Clone)]
pub struct Dispatcher {
    handlers: HashMap<EventKind, Arc<dyn EventHandler>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::empty()
            .register(EventKind::ChargePending, PendingHandler)
            .register(
                EventKind::ChargeRetry,
                PurchaseHandler::new(ChargeOutcome::Retry),
            )
            .register(
                EventKind::ChargeSuccessful,
                PurchaseHandler::new(ChargeOutcome::Successful),
            )
            .register(
                EventKind::ChargeFailed,
                PurchaseHandler::new(ChargeOutcome::Failed),
            )
            .register(
                EventKind::CardExpiring,
                CardHandler::new(CardState::Expiring),
            )
            .register(EventKind::CardExpired, CardHandler::new(CardState::Expired))
    }
}

impl Dispatcher {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(mut self, kind: EventKind, handler: impl EventHandler + 'static) -> Self {
        self.handlers.insert(kind, Arc::new(handler));
        self
    }

    pub fn dispatch(&self, body: &[u8]) -> Result<Acknowledgement, WebhookError> {
        let event = InboundEvent::parse(body)?;

        let Some((kind, handler)) = event
            .kind()
            .and_then(|kind| self.handlers.get(&kind).map(|handler| (kind, handler)))
        else {
            warn!(event = event.name(), "Unrecognized event");
            return Err(WebhookError::UnrecognizedEvent {
                raw: event.into_raw(),
            });
        };

        let lines = event
            .payload()?
            .iter()
            .enumerate()
            .map(|(index, record)| handler.acknowledge(index, record))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| warn!(event = %kind, "Rejected event: {e}"))?;

        info!(event = %kind, records = lines.len(), "Dispatched event");

        Ok(Acknowledgement { kind, lines })
    }
}
