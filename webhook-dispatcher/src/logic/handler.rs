use crate::domain::{
    record::{CardNotice, PendingCharge, PurchaseOutcome},
    WebhookError,
};
use serde_json::Value;
use tracing::debug;

/// Turns one `payload` record into one acknowledgement line.
pub trait EventHandler: Send + Sync {
    fn acknowledge(&self, index: usize, record: &Value) -> Result<String, WebhookError>;
}

/// `charge:pending`: the charge is queued and can no longer be cancelled, the
/// customer only gets a heads-up.
pub struct PendingHandler;

impl EventHandler for PendingHandler {
    fn acknowledge(&self, index: usize, record: &Value) -> Result<String, WebhookError> {
        let charge = PendingCharge::from_record(index, record)?;
        debug!(
            index,
            subscription_id = %charge.subscription_id,
            customer_id = %charge.customer_id,
            "Pending charge"
        );

        Ok(format!("Notified Customer {}", charge.customer_id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeOutcome {
    Retry,
    Successful,
    Failed,
}

/// `charge:retry`, `charge:successful` and `charge:failed` share a record
/// shape and differ only in what they report.
pub struct PurchaseHandler {
    outcome: ChargeOutcome,
}

impl PurchaseHandler {
    pub fn new(outcome: ChargeOutcome) -> Self {
        Self { outcome }
    }
}

impl EventHandler for PurchaseHandler {
    fn acknowledge(&self, index: usize, record: &Value) -> Result<String, WebhookError> {
        let purchase = PurchaseOutcome::from_record(index, record)?;
        debug!(
            index,
            subscription_id = %purchase.subscription_id,
            outcome = ?self.outcome,
            response = %purchase.response,
            "Purchase outcome"
        );

        let subscription_id = purchase.subscription_id;
        Ok(match self.outcome {
            ChargeOutcome::Retry => format!("Purchase for {subscription_id} queued for retry."),
            ChargeOutcome::Successful => {
                format!("Purchase for {subscription_id} successful, queued for next cycle.")
            }
            ChargeOutcome::Failed => format!("Purchase for {subscription_id} failed, abandoned."),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Expiring,
    Expired,
}

pub struct CardHandler {
    state: CardState,
}

impl CardHandler {
    pub fn new(state: CardState) -> Self {
        Self { state }
    }
}

impl EventHandler for CardHandler {
    fn acknowledge(&self, index: usize, record: &Value) -> Result<String, WebhookError> {
        let notice = CardNotice::from_record(index, record)?;
        debug!(index, customer_id = %notice.customer_id, state = ?self.state, "Card notice");

        let customer_id = notice.customer_id;
        Ok(match self.state {
            CardState::Expiring => {
                format!("Card for customer #{customer_id} expiring within 30 days.")
            }
            CardState::Expired => format!("Card for customer #{customer_id} expired."),
        })
    }
}
