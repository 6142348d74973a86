//! Asynchronous long-running operations
//!
//! Tracks server-side jobs returned by `202 Accepted` responses, including
//! the pseudo-operations synthesized when the server completes an action
//! synchronously.

pub mod operation;
pub mod wait;

pub use operation::{
    Operation, OperationField, OperationPoller, OperationStatus, OperationType, PSEUDO_ID,
};
pub use wait::WaitOptions;
