use std::future::Future;

use crate::admission::inquiry::AdmissionInquiry;
use crate::admission::submission::{failure_notice, submit_inquiry, Endpoints, SubmissionOutcome, Transport};

pub const CAPTCHA_REQUIRED: &str = "Please complete the CAPTCHA verification.";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUBMIT_LABEL: &str = "Book My Free Demo";

/// Delay between `display: block` and the `show` class, so the fade-in runs.
pub const SHOW_DELAY_MS: u32 = 10;
/// Matches the CSS fade-out before the modal is taken out of layout.
pub const HIDE_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    /// Displayed, `show` class not applied yet.
    Opening,
    Shown,
    /// `show` removed, still displayed while fading out.
    Closing,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalState {
    visibility: Visibility,
}

impl Default for ModalState {
    fn default() -> Self {
        Self { visibility: Visibility::Hidden }
    }
}

impl ModalState {
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_displayed(&self) -> bool {
        self.visibility != Visibility::Hidden
    }

    pub fn is_shown(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    /// Returns true when the caller should schedule the `show` step.
    pub fn open(&mut self) -> bool {
        match self.visibility {
            Visibility::Hidden | Visibility::Closing => {
                self.visibility = Visibility::Opening;
                true
            }
            Visibility::Opening | Visibility::Shown => false,
        }
    }

    pub fn auto_open(&mut self) -> bool {
        if self.is_shown() {
            return false;
        }
        self.open()
    }

    pub fn reveal(&mut self) -> bool {
        if self.visibility == Visibility::Opening {
            self.visibility = Visibility::Shown;
            return true;
        }
        false
    }

    /// Returns true when the caller should schedule the hide step.
    pub fn close(&mut self) -> bool {
        match self.visibility {
            Visibility::Opening | Visibility::Shown => {
                self.visibility = Visibility::Closing;
                true
            }
            Visibility::Hidden | Visibility::Closing => false,
        }
    }

    pub fn finish_close(&mut self) -> bool {
        if self.visibility == Visibility::Closing {
            self.visibility = Visibility::Hidden;
            return true;
        }
        false
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    MissingCaptcha,
    /// A request is already in flight or the inquiry went through.
    NotEditable,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormState {
    Editing { notice: Option<String> },
    Submitting,
    /// Terminal for the life of the modal.
    Submitted,
}

impl Default for FormState {
    fn default() -> Self {
        FormState::Editing { notice: None }
    }
}

impl FormState {
    /// Validating step: clears the previous notice and checks the CAPTCHA.
    pub fn begin_submit(&mut self, captcha_token: &str) -> Result<(), FormError> {
        if !matches!(self, FormState::Editing { .. }) {
            return Err(FormError::NotEditable);
        }
        if captcha_token.is_empty() {
            *self = FormState::Editing { notice: Some(CAPTCHA_REQUIRED.to_string()) };
            return Err(FormError::MissingCaptcha);
        }
        *self = FormState::Submitting;
        Ok(())
    }

    /// Validates, then hands back the pending submission. Nothing reaches the
    /// transport unless the CAPTCHA check passed.
    pub fn submit_with<'t, T>(
        &mut self,
        captcha_token: &str,
        transport: &'t T,
        endpoints: Endpoints,
        inquiry: AdmissionInquiry,
    ) -> Result<impl Future<Output = SubmissionOutcome> + 't, FormError>
    where
        T: Transport + ?Sized,
    {
        self.begin_submit(captcha_token)?;
        Ok(async move { submit_inquiry(transport, &endpoints, &inquiry).await })
    }

    pub fn settle(&mut self, outcome: &SubmissionOutcome, hostname: &str) {
        *self = match failure_notice(outcome, hostname) {
            None => FormState::Submitted,
            Some(notice) => FormState::Editing { notice: Some(notice) },
        };
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            FormState::Editing { notice } => notice.as_deref(),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormState::Submitting)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self, FormState::Submitted)
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admission::submission::test_support::{endpoints, inquiry, respond, ScriptedTransport, RELAY};
    use crate::admission::submission::{LOCALHOST_CORS_WARNING, TEMPORARY_ISSUE};
    use futures::executor::block_on;

    #[test]
    fn open_then_close_walks_the_fade_states() {
        let mut modal = ModalState::default();
        assert!(!modal.is_displayed());

        assert!(modal.open());
        assert_eq!(modal.visibility(), Visibility::Opening);
        assert!(modal.is_displayed());
        assert!(!modal.open(), "second trigger is a no-op");

        assert!(modal.reveal());
        assert!(modal.is_shown());

        assert!(modal.close());
        assert_eq!(modal.visibility(), Visibility::Closing);
        assert!(modal.is_displayed());
        assert!(modal.finish_close());
        assert_eq!(modal.visibility(), Visibility::Hidden);
    }

    #[test]
    fn auto_open_skips_an_open_modal() {
        let mut modal = ModalState::default();
        modal.open();
        modal.reveal();
        assert!(!modal.auto_open());
        assert!(modal.is_shown());

        let mut closed = ModalState::default();
        assert!(closed.auto_open());
    }

    #[test]
    fn reopening_during_fade_out_cancels_the_hide() {
        let mut modal = ModalState::default();
        modal.open();
        modal.reveal();
        modal.close();
        assert!(modal.open());
        assert!(!modal.finish_close(), "stale hide must not hide a reopened modal");
        assert!(modal.is_displayed());
    }

    #[test]
    fn closing_a_hidden_modal_does_nothing() {
        let mut modal = ModalState::default();
        assert!(!modal.close());
        assert!(!modal.finish_close());
        assert!(!modal.reveal());
    }

    #[test]
    fn empty_captcha_blocks_submission() {
        let mut form = FormState::default();
        assert_eq!(form.begin_submit(""), Err(FormError::MissingCaptcha));
        assert_eq!(form.notice(), Some(CAPTCHA_REQUIRED));
        assert!(!form.is_submitting());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn missing_captcha_never_reaches_the_transport() {
        let transport = ScriptedTransport::new(Vec::new());
        let mut form = FormState::default();

        let attempt = form.submit_with("", &transport, endpoints(), inquiry());
        assert!(matches!(attempt, Err(FormError::MissingCaptcha)));
        drop(attempt);

        assert!(transport.calls.borrow().is_empty());
        assert_eq!(form.notice(), Some(CAPTCHA_REQUIRED));
    }

    #[test]
    fn verified_submission_goes_to_the_relay() {
        let transport = ScriptedTransport::new(vec![respond(200, "{}")]);
        let mut form = FormState::default();

        let pending = form
            .submit_with("03AGdBq2", &transport, endpoints(), inquiry())
            .expect("token present");
        assert!(form.is_submitting());

        let outcome = block_on(pending);
        assert_eq!(outcome, SubmissionOutcome::Accepted);
        assert_eq!(transport.urls(), vec![RELAY.to_string()]);

        form.settle(&outcome, "hashfuture.school");
        assert!(form.is_submitted());
    }

    #[test]
    fn busy_form_sends_nothing() {
        let transport = ScriptedTransport::new(Vec::new());
        let mut form = FormState::Submitting;

        let attempt = form.submit_with("03AGdBq2", &transport, endpoints(), inquiry());
        assert!(matches!(attempt, Err(FormError::NotEditable)));
        drop(attempt);

        assert!(transport.calls.borrow().is_empty());
        assert!(form.is_submitting());
    }

    #[test]
    fn token_moves_form_to_submitting() {
        let mut form = FormState::Editing { notice: Some("old".to_string()) };
        assert_eq!(form.begin_submit("03AGdBq2"), Ok(()));
        assert!(form.is_submitting());
        assert_eq!(form.notice(), None);
        assert_eq!(form.submit_label(), SUBMITTING_LABEL);
        assert_eq!(form.begin_submit("03AGdBq2"), Err(FormError::NotEditable));
    }

    #[test]
    fn acceptance_is_terminal() {
        let mut form = FormState::Submitting;
        form.settle(&SubmissionOutcome::Accepted, "hashfuture.school");
        assert!(form.is_submitted());
        assert_eq!(form.begin_submit("token"), Err(FormError::NotEditable));
    }

    #[test]
    fn failures_reopen_the_form_with_a_notice() {
        let mut form = FormState::Submitting;
        form.settle(
            &SubmissionOutcome::Rejected { status: 422, message: "Invalid phone".to_string() },
            "hashfuture.school",
        );
        assert_eq!(form.notice(), Some("Invalid phone"));
        assert_eq!(form.submit_label(), SUBMIT_LABEL);

        let unreachable = SubmissionOutcome::Unreachable { reason: "offline".to_string() };
        let mut form = FormState::Submitting;
        form.settle(&unreachable, "hashfuture.school");
        assert_eq!(form.notice(), Some(TEMPORARY_ISSUE));

        let mut form = FormState::Submitting;
        form.settle(&unreachable, "localhost");
        assert_eq!(form.notice(), Some(LOCALHOST_CORS_WARNING));
    }
}
