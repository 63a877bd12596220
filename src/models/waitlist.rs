use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

use crate::utils::analytics::{EventSink, TrackingEvent};
use crate::utils::api::Registrar;
use crate::utils::storage::WaitlistStore;
use crate::utils::validation::Email;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const SUCCESS_MESSAGE: &str =
    "🎉 Success! You're on the waitlist. Check your email for confirmation.";
pub const FAILURE_MESSAGE: &str = "Oops! Something went wrong. Please try again later.";
pub const SUBMITTING_LABEL: &str = "Joining...";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitlistError {
    #[error("invalid email address")]
    InvalidEmail,
    #[error("a submission is already in flight")]
    SubmissionInProgress,
    #[error("registration failed: {0}")]
    RemoteCallFailure(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub id: u32,
    pub text: String,
    pub kind: MessageKind,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: String,
    original_label: String,
}

impl SubmitControl {
    fn new(label: String) -> Self {
        Self {
            disabled: false,
            label: label.clone(),
            original_label: label,
        }
    }

    fn busy(&mut self) {
        self.disabled = true;
        self.label = SUBMITTING_LABEL.to_string();
    }

    fn restore(&mut self) {
        self.disabled = false;
        self.label = self.original_label.clone();
    }
}

/// UI state of the signup form: Idle → Submitting → Success | Error, and back
/// to Submitting on the next attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistForm {
    status: SubmissionStatus,
    input: String,
    control: SubmitControl,
    message: Option<FormMessage>,
    next_message_id: u32,
}

impl WaitlistForm {
    pub fn new(submit_label: impl Into<String>) -> Self {
        Self {
            status: SubmissionStatus::Idle,
            input: String::new(),
            control: SubmitControl::new(submit_label.into()),
            message: None,
            next_message_id: 0,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Starts an attempt. On success the caller must eventually call
    /// [`WaitlistForm::finish`] exactly once.
    pub fn begin(&mut self) -> Result<Email, WaitlistError> {
        if self.status == SubmissionStatus::Submitting {
            return Err(WaitlistError::SubmissionInProgress);
        }
        self.status = SubmissionStatus::Idle;
        match Email::parse(&self.input) {
            Ok(email) => {
                self.status = SubmissionStatus::Submitting;
                self.control.busy();
                Ok(email)
            }
            Err(e) => {
                self.show(INVALID_EMAIL_MESSAGE, MessageKind::Error);
                Err(e)
            }
        }
    }

    /// Applies the remote outcome. Returns the id of a success message that
    /// should be dismissed later.
    pub fn finish(&mut self, outcome: &Result<(), WaitlistError>) -> Option<u32> {
        let dismiss = match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.input.clear();
                Some(self.show(SUCCESS_MESSAGE, MessageKind::Success))
            }
            Err(_) => {
                self.status = SubmissionStatus::Error;
                self.show(FAILURE_MESSAGE, MessageKind::Error);
                None
            }
        };
        self.control.restore();
        dismiss
    }

    /// Hides message `id` if it is still the one on screen.
    pub fn dismiss(&mut self, id: u32) {
        if let Some(message) = self.message.as_mut().filter(|m| m.id == id) {
            message.visible = false;
        }
    }

    fn show(&mut self, text: &str, kind: MessageKind) -> u32 {
        let id = self.next_message_id;
        self.next_message_id = self.next_message_id.wrapping_add(1);
        self.message = Some(FormMessage {
            id,
            text: text.to_string(),
            kind,
            visible: true,
        });
        id
    }
}

/// Registration pipeline behind the form: remote call, local snapshot, tracking.
#[derive(Clone)]
pub struct Waitlist {
    registrar: Rc<dyn Registrar>,
    store: Rc<dyn WaitlistStore>,
    sink: Rc<dyn EventSink>,
}

impl Waitlist {
    pub fn new(
        registrar: Rc<dyn Registrar>,
        store: Rc<dyn WaitlistStore>,
        sink: Rc<dyn EventSink>,
    ) -> Self {
        Self {
            registrar,
            store,
            sink,
        }
    }

    /// Calls the registrar once. A failed local write is logged and does not
    /// fail the registration.
    pub async fn register(&self, email: &Email) -> Result<(), WaitlistError> {
        match self.registrar.register(email).await {
            Ok(()) => {
                match self.store.add(email) {
                    Ok(true) => log::debug!("Added {} to the waitlist snapshot", email),
                    Ok(false) => log::debug!("{} is already on the waitlist", email),
                    Err(e) => log::warn!("Registered {} but could not persist it: {}", email, e),
                }
                self.sink.emit(TrackingEvent::signup(true));
                Ok(())
            }
            Err(e) => {
                log::error!("Waitlist registration failed: {}", e);
                self.sink.emit(TrackingEvent::signup(false));
                Err(WaitlistError::RemoteCallFailure(e.to_string()))
            }
        }
    }

    /// Runs one full attempt against `form`.
    pub async fn submit(&self, form: &RefCell<WaitlistForm>) -> Result<Option<u32>, WaitlistError> {
        let email = form.borrow_mut().begin()?;
        self.complete(form, &email).await
    }

    /// Finishes an attempt opened with [`WaitlistForm::begin`]. `form` is not
    /// borrowed while the registrar call is pending. Returns the id of the
    /// success message to dismiss later.
    pub async fn complete(
        &self,
        form: &RefCell<WaitlistForm>,
        email: &Email,
    ) -> Result<Option<u32>, WaitlistError> {
        let outcome = self.register(email).await;
        let dismiss = form.borrow_mut().finish(&outcome);
        outcome.map(|()| dismiss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(input: &str) -> WaitlistForm {
        let mut form = WaitlistForm::new("Join Waitlist");
        form.set_input(input);
        form
    }

    #[test]
    fn invalid_input_stays_idle_and_keeps_control_enabled() {
        let mut form = form_with("not-an-email");
        assert_eq!(form.begin(), Err(WaitlistError::InvalidEmail));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(!form.control().disabled);
        let message = form.message().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, INVALID_EMAIL_MESSAGE);
    }

    #[test]
    fn begin_disables_control_with_busy_label() {
        let mut form = form_with(" new@example.com ");
        let email = form.begin().unwrap();
        assert_eq!(email.as_str(), "new@example.com");
        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert!(form.control().disabled);
        assert_eq!(form.control().label, SUBMITTING_LABEL);
        assert_eq!(form.begin(), Err(WaitlistError::SubmissionInProgress));
    }

    #[test]
    fn success_clears_input_and_restores_control() {
        let mut form = form_with("new@example.com");
        form.begin().unwrap();
        let dismiss = form.finish(&Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.input(), "");
        assert!(!form.control().disabled);
        assert_eq!(form.control().label, "Join Waitlist");
        assert_eq!(dismiss, form.message().map(|m| m.id));
    }

    #[test]
    fn failure_keeps_input_and_message_persists() {
        let mut form = form_with("new@example.com");
        form.begin().unwrap();
        let dismiss = form.finish(&Err(WaitlistError::RemoteCallFailure("API Error".into())));
        assert_eq!(dismiss, None);
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.input(), "new@example.com");
        assert!(!form.control().disabled);
        assert_eq!(form.message().unwrap().text, FAILURE_MESSAGE);
    }

    #[test]
    fn stale_dismiss_leaves_newer_message_visible() {
        let mut form = form_with("new@example.com");
        form.begin().unwrap();
        let first = form.finish(&Ok(())).unwrap();

        form.set_input("bad");
        form.begin().unwrap_err();
        form.dismiss(first);
        assert!(form.message().unwrap().visible);

        form.set_input("again@example.com");
        form.begin().unwrap();
        let second = form.finish(&Ok(())).unwrap();
        form.dismiss(second);
        assert!(!form.message().unwrap().visible);
    }

    #[test]
    fn retry_after_error_reenters_submitting() {
        let mut form = form_with("new@example.com");
        form.begin().unwrap();
        form.finish(&Err(WaitlistError::RemoteCallFailure("API Error".into())));
        form.begin().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Submitting);
    }
}
