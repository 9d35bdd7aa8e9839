//! Error types.
//!
//! Library code returns [`StockerError`]; the binary converts it into an
//! [`AppError`] carrying the process exit code.

use thiserror::Error;

/// Errors produced while fetching and parsing a stocking schedule.
#[derive(Debug, Error)]
pub enum StockerError {
    #[error("unknown program {0:?}")]
    UnknownProgram(String),

    #[error("expected 2 rows but got {0}")]
    HeaderRowCount(usize),

    #[error("month index out of range: {index} (header has {months} months)")]
    MonthOverrun { index: usize, months: usize },

    #[error("dates and stock rows don't match: {dates} != {cells}")]
    RowLengthMismatch { dates: usize, cells: usize },

    #[error("{0}")]
    Http(String),

    #[error("error initializing calendar: {0}")]
    Calendar(#[source] Box<StockerError>),

    #[error("error finding water rows: {0}")]
    Schedule(#[source] Box<StockerError>),

    #[error("{0}")]
    Config(String),
}

impl StockerError {
    /// Exit code used when this error reaches the binary.
    pub fn exit_code(&self) -> u8 {
        match self {
            StockerError::UnknownProgram(_) | StockerError::Config(_) => 2,
            _ => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<StockerError> for AppError {
    fn from(err: StockerError) -> Self {
        AppError::new(err.exit_code(), format!("error getting stocking data: {err}"))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_context() {
        let err = StockerError::Calendar(Box::new(StockerError::HeaderRowCount(1)));
        assert_eq!(err.to_string(), "error initializing calendar: expected 2 rows but got 1");
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn config_errors_map_to_usage_exit_code() {
        let app: AppError = StockerError::Config("missing key".to_string()).into();
        assert_eq!(app.exit_code(), 2);
        assert!(app.to_string().contains("missing key"));
    }
}
