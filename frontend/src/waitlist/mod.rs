//! Waitlist capture. Every submission ends in [`SubmissionState::Submitted`]:
//! a failed request is logged and the visitor still sees their place reserved.

pub mod transport;

pub use transport::{HttpWaitlist, WaitlistError, WaitlistSignup, WaitlistTransport};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl SubmissionState {
    pub fn is_loading(self) -> bool {
        self == SubmissionState::Submitting
    }

    pub fn is_submitted(self) -> bool {
        self == SubmissionState::Submitted
    }

    /// The signup to send, or `None` when this submit should do nothing.
    pub fn accept(self, email: &str) -> Option<WaitlistSignup> {
        let email = email.trim();
        if self != SubmissionState::Idle || email.is_empty() {
            return None;
        }
        Some(WaitlistSignup {
            email: email.to_string(),
        })
    }
}

/// Runs one submission from `current`, reporting each transition through
/// `on_transition`. Returns the final state.
pub async fn submit<T>(
    current: SubmissionState,
    email: &str,
    transport: &T,
    on_transition: impl Fn(SubmissionState),
) -> SubmissionState
where
    T: WaitlistTransport + ?Sized,
{
    let Some(signup) = current.accept(email) else {
        return current;
    };

    on_transition(SubmissionState::Submitting);
    log::info!("joining waitlist");

    match transport.join(signup).await {
        Ok(()) => log::info!("waitlist signup recorded"),
        Err(err) => log::warn!("waitlist signup failed, showing success anyway: {err}"),
    }

    on_transition(SubmissionState::Submitted);
    SubmissionState::Submitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::LocalBoxFuture;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingTransport {
        fail_with: Option<u16>,
        sent: RefCell<Vec<WaitlistSignup>>,
    }

    impl WaitlistTransport for RecordingTransport {
        fn join(&self, signup: WaitlistSignup) -> LocalBoxFuture<'_, Result<(), WaitlistError>> {
            self.sent.borrow_mut().push(signup);
            let outcome = match self.fail_with {
                Some(status) => Err(WaitlistError::Status(status)),
                None => Ok(()),
            };
            Box::pin(async move { outcome })
        }
    }

    fn run(current: SubmissionState, email: &str, transport: &RecordingTransport) -> (SubmissionState, Vec<SubmissionState>) {
        let transitions = RefCell::new(Vec::new());
        let last = block_on(submit(current, email, transport, |state| {
            transitions.borrow_mut().push(state)
        }));
        (last, transitions.into_inner())
    }

    #[test]
    fn successful_signup_is_submitted() {
        let transport = RecordingTransport::default();
        let (last, transitions) = run(SubmissionState::Idle, "trader@example.com", &transport);

        assert_eq!(last, SubmissionState::Submitted);
        assert_eq!(
            transitions,
            vec![SubmissionState::Submitting, SubmissionState::Submitted]
        );
        assert_eq!(
            transport.sent.borrow().as_slice(),
            [WaitlistSignup {
                email: "trader@example.com".to_string()
            }]
        );
    }

    #[test]
    fn failed_request_still_ends_submitted() {
        let transport = RecordingTransport {
            fail_with: Some(503),
            ..Default::default()
        };
        let (last, transitions) = run(SubmissionState::Idle, "trader@example.com", &transport);

        assert_eq!(last, SubmissionState::Submitted);
        assert!(!last.is_loading());
        assert_eq!(transitions.last(), Some(&SubmissionState::Submitted));
        assert_eq!(transport.sent.borrow().len(), 1);
    }

    #[test]
    fn empty_email_does_nothing() {
        let transport = RecordingTransport::default();
        for email in ["", "   "] {
            let (last, transitions) = run(SubmissionState::Idle, email, &transport);
            assert_eq!(last, SubmissionState::Idle);
            assert!(transitions.is_empty());
        }
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn only_idle_forms_submit() {
        let transport = RecordingTransport::default();
        for state in [SubmissionState::Submitting, SubmissionState::Submitted] {
            let (last, transitions) = run(state, "trader@example.com", &transport);
            assert_eq!(last, state);
            assert!(transitions.is_empty());
        }
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn email_is_trimmed_before_sending() {
        let signup = SubmissionState::Idle.accept("  trader@example.com \n");
        assert_eq!(signup.map(|signup| signup.email).as_deref(), Some("trader@example.com"));
    }

    #[test]
    fn signup_serializes_as_email_object() {
        let body = serde_json::to_value(WaitlistSignup {
            email: "trader@example.com".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "email": "trader@example.com" }));
    }

    #[test]
    fn loading_only_while_submitting() {
        assert!(!SubmissionState::Idle.is_loading());
        assert!(SubmissionState::Submitting.is_loading());
        assert!(!SubmissionState::Submitted.is_loading());
        assert!(SubmissionState::Submitted.is_submitted());
    }
}
