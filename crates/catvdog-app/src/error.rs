//! Front end error types.

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Client(#[from] catvdog_client::ClientError),

    #[error(transparent)]
    Transition(#[from] catvdog_models::TransitionError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for {0}")]
    MissingArgument(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn unknown_command(cmd: impl Into<String>) -> Self {
        Self::UnknownCommand(cmd.into())
    }
}
