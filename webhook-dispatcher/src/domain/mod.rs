pub mod error;
pub mod event;
pub mod record;

pub use error::{FieldLocation, WebhookError};
pub use event::{EventKind, InboundEvent};
