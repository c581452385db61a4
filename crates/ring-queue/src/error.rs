use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// A constructor was handed a capacity below 1 or an absent source sequence.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
    #[error("queue is empty")]
    EmptyContainer,
}
