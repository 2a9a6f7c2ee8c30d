//! Error taxonomy for a single calculation submission.
//!
//! ERROR HANDLING
//! ==============
//! Every variant terminates at the display controller. The `Display` text of
//! each variant is exactly what the user sees; transport detail is carried in
//! the payload for the developer console only.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const INVALID_NUMBERS_MESSAGE: &str = "Please enter valid numbers";
pub const INVALID_OPERATOR_MESSAGE: &str = "Please select a valid operation";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Could not connect to server";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalcError {
    /// One of the numeric fields did not parse to a finite number.
    #[error("Please enter valid numbers")]
    InvalidNumbers,
    /// The operator selection is not one the backend understands.
    #[error("Please select a valid operation")]
    InvalidOperator(String),
    /// Non-2xx reply carrying an `error` message.
    #[error("{0}")]
    Backend(String),
    /// Non-2xx reply without a usable `error` message.
    #[error("An unknown error occurred")]
    BackendUnspecified { status: u16 },
    /// The request never produced a reply.
    #[error("Network error: Could not connect to server")]
    Transport(String),
    /// A reply arrived but its body could not be interpreted.
    #[error("Network error: Could not connect to server")]
    MalformedResponse(String),
}

impl CalcError {
    /// Whether the error was raised before any network call.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::InvalidNumbers | Self::InvalidOperator(_))
    }

    /// Developer-facing detail for console logging.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidOperator(raw) => format!("invalid operator {raw:?}"),
            Self::BackendUnspecified { status } => format!("status {status} without error message"),
            Self::Transport(detail) | Self::MalformedResponse(detail) => detail.clone(),
            other => other.to_string(),
        }
    }
}
