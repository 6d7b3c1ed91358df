use dioxus::prelude::ServerFnError;
use thiserror::Error;

/// Why a travel plan could not be created.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0}")]
    Invalid(String),
    #[error("{0}")]
    Network(String),
}

/// Carried to the client as the server error's plain `message`.
impl From<SubmitError> for ServerFnError {
    fn from(err: SubmitError) -> Self {
        ServerFnError::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_keeps_plain_message() {
        let err = ServerFnError::from(SubmitError::Network("Network error. Please try again.".into()));
        match err {
            ServerFnError::ServerError { message, code, .. } => {
                assert_eq!(message, "Network error. Please try again.");
                assert_eq!(code, 500);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
