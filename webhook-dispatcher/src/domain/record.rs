//! Typed views over the elements of the `payload` array.
//!
//! The gateway sends ids either as strings or as bare numbers, so both are
//! accepted. Anything else at an id position (absent, null, object, array,
//! boolean) is reported as a missing field for that record.

use super::error::{FieldLocation, WebhookError};
use serde_json::Value;

fn lookup<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(record, |node, key| node.get(key))
}

fn identifier(record: &Value, index: usize, path: &'static str) -> Result<String, WebhookError> {
    match lookup(record, path) {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(WebhookError::missing_field(
            FieldLocation::Record(index),
            path,
        )),
    }
}

/// A `charge:pending` record: the subscription about to be charged and the
/// customer to notify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCharge {
    pub subscription_id: String,
    pub customer_id: String,
}

impl PendingCharge {
    pub fn from_record(index: usize, record: &Value) -> Result<Self, WebhookError> {
        Ok(Self {
            subscription_id: identifier(record, index, "id")?,
            customer_id: identifier(record, index, "customer.id")?,
        })
    }
}

/// A `charge:retry`, `charge:successful` or `charge:failed` record. The
/// purchase `response` is carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOutcome<'a> {
    pub subscription_id: String,
    pub response: &'a Value,
}

impl<'a> PurchaseOutcome<'a> {
    pub fn from_record(index: usize, record: &'a Value) -> Result<Self, WebhookError> {
        let subscription_id = identifier(record, index, "subscription.id")?;
        let response = record.get("response").ok_or_else(|| {
            WebhookError::missing_field(FieldLocation::Record(index), "response")
        })?;

        Ok(Self {
            subscription_id,
            response,
        })
    }
}

/// A `card:expiring` or `card:expired` record, keyed by customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardNotice {
    pub customer_id: String,
}

impl CardNotice {
    pub fn from_record(index: usize, record: &Value) -> Result<Self, WebhookError> {
        Ok(Self {
            customer_id: identifier(record, index, "id")?,
        })
    }
}
