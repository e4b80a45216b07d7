use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("could not reach the form relay: {0}")]
    Transport(String),
    #[error("form relay rejected the submission with status {status}")]
    Rejected { status: u16, detail: Option<String> },
}

/// Shown instead of sending when name or email is blank.
pub const INCOMPLETE_HINT: &str = "Please tell us your name and email.";

impl SubmitError {
    /// Both failure kinds read the same to the visitor.
    pub fn user_message(&self) -> &'static str {
        "Something went wrong. Please try again."
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(SubmitError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitAction {
    Start,
    Resolve(Result<(), SubmitError>),
}

impl SubmissionStatus {
    /// Idle and Failed accept a submit, Sending and Sent do not.
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Failed(_))
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmissionStatus::Sending)
    }

    pub fn error(&self) -> Option<&SubmitError> {
        match self {
            SubmissionStatus::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Inline text under the form. A fresh hint about missing fields outranks an
    /// earlier failure, which stays on `Failed` because the incomplete form is never sent.
    pub fn notice(&self, hint: Option<&'static str>) -> Option<&'static str> {
        hint.or_else(|| self.error().map(SubmitError::user_message))
    }

    pub fn apply(&self, action: SubmitAction) -> Self {
        match (self, action) {
            (status, SubmitAction::Start) if status.can_submit() => SubmissionStatus::Sending,
            (SubmissionStatus::Sending, SubmitAction::Resolve(Ok(()))) => SubmissionStatus::Sent,
            (SubmissionStatus::Sending, SubmitAction::Resolve(Err(err))) => {
                match &err {
                    SubmitError::Transport(reason) => warn!("Contact form transport failure: {}", reason),
                    SubmitError::Rejected { status, detail } => {
                        warn!("Contact form rejected ({}): {}", status, detail.as_deref().unwrap_or("no detail"))
                    }
                }
                SubmissionStatus::Failed(err)
            }
            (status, action) => {
                debug!("Ignoring {:?} while {:?}", action, status);
                status.clone()
            }
        }
    }
}

impl Reducible for SubmissionStatus {
    type Action = SubmitAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected(status: u16) -> SubmitError {
        SubmitError::Rejected { status, detail: None }
    }

    #[test]
    fn success_path_ends_in_sent() {
        let status = SubmissionStatus::Idle.apply(SubmitAction::Start);
        assert_eq!(status, SubmissionStatus::Sending);
        let status = status.apply(SubmitAction::Resolve(Ok(())));
        assert_eq!(status, SubmissionStatus::Sent);
    }

    #[test]
    fn sent_is_terminal() {
        let status = SubmissionStatus::Sent.apply(SubmitAction::Start);
        assert_eq!(status, SubmissionStatus::Sent);
        assert!(!status.can_submit());
    }

    #[test]
    fn server_error_fails_and_allows_retry() {
        let status = SubmissionStatus::Idle
            .apply(SubmitAction::Start)
            .apply(SubmitAction::Resolve(Err(rejected(500))));
        assert_eq!(status.error(), Some(&rejected(500)));
        assert!(status.can_submit());
        assert_eq!(status.apply(SubmitAction::Start), SubmissionStatus::Sending);
    }

    #[test]
    fn transport_error_fails() {
        let err = SubmitError::Transport("TypeError: Failed to fetch".to_string());
        let status = SubmissionStatus::Idle
            .apply(SubmitAction::Start)
            .apply(SubmitAction::Resolve(Err(err.clone())));
        assert_eq!(status, SubmissionStatus::Failed(err));
    }

    #[test]
    fn second_start_while_sending_is_ignored() {
        let status = SubmissionStatus::Idle.apply(SubmitAction::Start);
        assert_eq!(status.apply(SubmitAction::Start), SubmissionStatus::Sending);
    }

    #[test]
    fn stray_result_without_request_is_ignored() {
        let status = SubmissionStatus::Idle.apply(SubmitAction::Resolve(Ok(())));
        assert_eq!(status, SubmissionStatus::Idle);
    }

    #[test]
    fn failures_share_user_copy() {
        let transport = SubmitError::Transport("offline".to_string());
        assert_eq!(transport.user_message(), rejected(422).user_message());
    }

    #[test]
    fn missing_fields_hint_replaces_earlier_failure() {
        let failed = SubmissionStatus::Idle
            .apply(SubmitAction::Start)
            .apply(SubmitAction::Resolve(Err(rejected(500))));
        assert_eq!(failed.notice(None), Some("Something went wrong. Please try again."));
        assert_eq!(failed.notice(Some(INCOMPLETE_HINT)), Some(INCOMPLETE_HINT));
    }

    #[test]
    fn idle_form_has_no_notice() {
        assert_eq!(SubmissionStatus::Idle.notice(None), None);
        assert_eq!(SubmissionStatus::Idle.notice(Some(INCOMPLETE_HINT)), Some(INCOMPLETE_HINT));
    }
}
