//! Lifecycle of a single travel-plan submission: `idle → submitting → success/error`.

use api::SubmitResponse;
use dioxus::prelude::ServerFnError;

pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// The submit control is disabled exactly while a call is in flight.
    pub fn is_submitting(self) -> bool {
        self == SubmissionState::Submitting
    }

    /// Move to `Submitting`. Returns `false` (and stays put) if a call is already
    /// in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self = SubmissionState::Submitting;
        true
    }

    pub fn finish(&mut self, succeeded: bool) {
        *self = if succeeded {
            SubmissionState::Succeeded
        } else {
            SubmissionState::Failed
        };
    }
}

/// Message a server function failed with, without the transport framing.
pub fn server_error_message(error: ServerFnError) -> String {
    match error {
        ServerFnError::ServerError { message, .. } => message,
        other => other.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// What the toast says once the call settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn from_result(result: Result<SubmitResponse, String>) -> Self {
        match result {
            Ok(response) if response.success => Notice {
                kind: NoticeKind::Success,
                message: response.message,
            },
            Ok(response) => Notice::error(response.message),
            Err(message) => Notice::error(message),
        }
    }

    fn error(message: String) -> Self {
        let message = message.trim();
        Notice {
            kind: NoticeKind::Error,
            message: if message.is_empty() {
                FALLBACK_ERROR_MESSAGE.to_string()
            } else {
                message.to_string()
            },
        }
    }

    /// Notice for a settled `submit_travel_plan` call.
    pub fn from_server(result: Result<SubmitResponse, ServerFnError>) -> Self {
        Notice::from_result(result.map_err(server_error_message))
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_lifecycle() {
        let mut state = SubmissionState::default();
        assert!(!state.is_submitting());

        assert!(state.begin());
        assert!(state.is_submitting());

        // A second click while in flight is ignored.
        assert!(!state.begin());
        assert!(state.is_submitting());

        state.finish(true);
        assert_eq!(state, SubmissionState::Succeeded);
        assert!(!state.is_submitting());

        // Re-submitting after a result is allowed.
        assert!(state.begin());
        state.finish(false);
        assert_eq!(state, SubmissionState::Failed);
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_success_notice_uses_response_message() {
        let notice = Notice::from_result(Ok(SubmitResponse {
            success: true,
            message: "Your travel plan has been created successfully!".to_string(),
        }));
        assert!(notice.is_success());
        assert_eq!(notice.message, "Your travel plan has been created successfully!");
    }

    #[test]
    fn test_error_notice_keeps_message() {
        let notice = Notice::from_result(Err("Network error. Please try again.".to_string()));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Network error. Please try again.");
    }

    #[test]
    fn test_error_notice_falls_back_when_message_missing() {
        let notice = Notice::from_result(Err("  ".to_string()));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_server_error_message_is_unwrapped() {
        let err = ServerFnError::new(api::service::NETWORK_ERROR_MESSAGE);
        assert_eq!(server_error_message(err), "Network error. Please try again.");
    }

    #[test]
    fn test_transport_errors_keep_their_description() {
        let err = ServerFnError::Deserialization("bad body".to_string());
        assert!(server_error_message(err).contains("bad body"));
    }

    #[test]
    fn test_failed_submission_shows_mock_message() {
        let failure = api::SubmitError::Network(api::service::NETWORK_ERROR_MESSAGE.to_string());
        let notice = Notice::from_server(Err(ServerFnError::from(failure)));
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, api::service::NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_blank_server_message_falls_back() {
        let notice = Notice::from_server(Err(ServerFnError::new("")));
        assert_eq!(notice.message, FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn test_successful_submission_notice() {
        let notice = Notice::from_server(Ok(SubmitResponse {
            success: true,
            message: api::service::SUCCESS_MESSAGE.to_string(),
        }));
        assert!(notice.is_success());
        assert_eq!(notice.message, api::service::SUCCESS_MESSAGE);
    }

    #[test]
    fn test_unsuccessful_response_is_an_error() {
        let notice = Notice::from_result(Ok(SubmitResponse {
            success: false,
            message: String::new(),
        }));
        assert!(!notice.is_success());
        assert_eq!(notice.message, FALLBACK_ERROR_MESSAGE);
    }
}
