use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    #[error("Widget has not signaled readiness to the host")]
    NotStarted,
    #[error("Widget already signaled readiness to the host")]
    AlreadyStarted,
    #[error("Malformed render args: {0}")]
    MalformedArgs(String),
}

pub type Result<T> = core::result::Result<T, WidgetError>;
