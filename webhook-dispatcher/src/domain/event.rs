use super::error::{FieldLocation, WebhookError};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

/// Event names the payment gateway sends in the `event` field. Matching is
/// exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr, Display)]
pub enum EventKind {
    #[strum(serialize = "charge:pending")]
    ChargePending,
    #[strum(serialize = "charge:retry")]
    ChargeRetry,
    #[strum(serialize = "charge:successful")]
    ChargeSuccessful,
    #[strum(serialize = "charge:failed")]
    ChargeFailed,
    #[strum(serialize = "card:expiring")]
    CardExpiring,
    #[strum(serialize = "card:expired")]
    CardExpired,
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A parsed webhook body. Lives for one request only.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundEvent {
    name: String,
    raw: Value,
}

impl InboundEvent {
    /// Parses a raw body. A leading UTF-8 byte order mark is skipped.
    pub fn parse(body: &[u8]) -> Result<Self, WebhookError> {
        let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
        let raw: Value = serde_json::from_slice(body)?;
        Ok(Self::from_value(raw))
    }

    pub fn from_value(raw: Value) -> Self {
        let name = match raw.get("event") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => other.to_string(),
        };

        Self { name, raw }
    }

    /// The discriminator, empty when `event` is absent or null.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Option<EventKind> {
        self.name.parse().ok()
    }

    pub fn payload(&self) -> Result<&[Value], WebhookError> {
        match self.raw.get("payload") {
            Some(Value::Array(records)) => Ok(records.as_slice()),
            _ => Err(WebhookError::missing_field(
                FieldLocation::Envelope,
                "payload",
            )),
        }
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }
}
