use thiserror::Error;

use crate::queue::QueueError;

/// Errors raised while wiring a controller up. Never raised by the reducer loop.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ControllerError {
    #[error("controller already started")]
    AlreadyStarted,

    #[error("controller has been shut down")]
    ShutDown,

    #[error("cannot subscribe to event queue: {0}")]
    Queue(#[from] QueueError),
}
