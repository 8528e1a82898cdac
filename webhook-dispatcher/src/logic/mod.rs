pub mod dispatcher;
pub mod handler;

pub use dispatcher::{Acknowledgement, Dispatcher};
pub use handler::{
    CardHandler, CardState, ChargeOutcome, EventHandler, PendingHandler, PurchaseHandler,
};
