use std::ops::{Deref, DerefMut};

use user_api::errors::ApiError;

use crate::{
    avatar::{initials, AvatarPreview},
    draft::{Draft, DraftError},
    field::{Field, ValidationErrors},
    messages,
};

/// Where a dialog is in its lifecycle. A failed request goes back to
/// `Editing` with [`Form::form_error`] set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
    Editing,
    Invalid,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    /// The dialog is not open.
    Closed,
    /// A request from this dialog is still in flight.
    Busy,
    /// Field errors were recorded; nothing was sent.
    Invalid,
    /// The attempt ended with a form-level error.
    Failed,
    Saved(T),
}

impl<T> SubmitOutcome<T> {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved(_))
    }
}

/// Draft, errors and lifecycle state shared by the create and edit dialogs.
#[derive(Debug, Clone, Default)]
pub struct Form<D> {
    pub(crate) state: DialogState,
    pub(crate) draft: D,
    pub(crate) errors: ValidationErrors,
    pub(crate) form_error: Option<String>,
    pub(crate) avatar: Option<AvatarPreview>,
    pub(crate) submitting: bool,
}

impl<D: Draft> Form<D> {
    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != DialogState::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn draft(&self) -> &D {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn avatar(&self) -> Option<&AvatarPreview> {
        self.avatar.as_ref()
    }

    /// Text for the avatar slot when no preview is loaded.
    pub fn initials(&self) -> String {
        self.draft
            .value(Field::Name)
            .map(|name| initials(&name))
            .unwrap_or_default()
    }

    pub(crate) fn open_with(&mut self, draft: D, avatar: Option<AvatarPreview>) {
        self.draft = draft;
        self.avatar = avatar;
        self.errors.clear();
        self.form_error = None;
        self.submitting = false;
        self.state = DialogState::Open;
    }

    pub(crate) fn reset(&mut self) {
        self.draft = D::default();
        self.avatar = None;
        self.errors.clear();
        self.form_error = None;
        self.submitting = false;
    }

    pub(crate) fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    pub(crate) fn set_field(&mut self, field: Field, value: &str) -> Result<(), DraftError> {
        self.draft.set(field, value)?;
        self.errors.clear_field(field);

        if self.is_open() && !self.submitting {
            self.state = DialogState::Editing;
        }

        Ok(())
    }

    pub(crate) fn set_avatar(&mut self, avatar: AvatarPreview) {
        self.avatar = Some(avatar);
    }

    /// Replaces the error map. Returns `false` when any field failed.
    pub(crate) fn apply_validation(&mut self, errors: ValidationErrors) -> bool {
        self.errors = errors;
        self.form_error = None;

        if self.errors.is_empty() {
            return true;
        }

        self.state = DialogState::Invalid;
        false
    }

    /// Gate shared by both dialogs: closed and in-flight dialogs never send,
    /// invalid drafts stop here. The returned guard ends the submit when
    /// dropped, including when the submit future itself is dropped.
    pub(crate) fn begin_submit<T>(
        &mut self,
        errors: ValidationErrors,
    ) -> Result<InFlight<'_, D>, SubmitOutcome<T>> {
        if !self.is_open() {
            return Err(SubmitOutcome::Closed);
        }

        if self.submitting {
            return Err(SubmitOutcome::Busy);
        }

        if !self.apply_validation(errors) {
            return Err(SubmitOutcome::Invalid);
        }

        self.submitting = true;
        self.state = DialogState::Submitting;

        Ok(InFlight(self))
    }

    pub(crate) fn fail(&mut self, message: String) {
        tracing::warn!(%message, "submit failed");

        self.form_error = Some(message);
        self.state = DialogState::Editing;
    }

    pub(crate) fn end_submit(&mut self) {
        self.submitting = false;

        if self.state == DialogState::Submitting {
            self.state = DialogState::Editing;
        }
    }
}

/// Borrow of a form with a request in flight.
pub(crate) struct InFlight<'a, D: Draft>(&'a mut Form<D>);

impl<D: Draft> Deref for InFlight<'_, D> {
    type Target = Form<D>;

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<D: Draft> DerefMut for InFlight<'_, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0
    }
}

impl<D: Draft> Drop for InFlight<'_, D> {
    fn drop(&mut self) {
        self.0.end_submit();
    }
}

/// Message shown in the form-level slot for a failed request.
pub(crate) fn form_error_message(err: &ApiError, rejected: &str, failed: &str) -> String {
    match err {
        ApiError::Rejected { message, .. } => message.clone().unwrap_or_else(|| rejected.to_string()),
        ApiError::Unauthenticated => messages::UNAUTHENTICATED.to_string(),
        other => {
            let message = other.to_string();

            if message.trim().is_empty() {
                failed.to_string()
            } else {
                message
            }
        }
    }
}

#[cfg(test)]
mod test {
    use user_api::errors::ApiError;

    use super::*;
    use crate::draft::CreateDraft;

    #[test]
    fn error_messages() {
        let rejected = |message: Option<&str>| ApiError::Rejected {
            status: 400,
            message: message.map(String::from),
        };

        assert_eq!(form_error_message(&rejected(Some("x")), "r", "f"), "x");
        assert_eq!(form_error_message(&rejected(None), "r", "f"), "r");
        assert_eq!(
            form_error_message(&ApiError::Unauthenticated, "r", "f"),
            messages::UNAUTHENTICATED
        );
        assert_eq!(
            form_error_message(&ApiError::Transport("connection refused".into()), "r", "f"),
            "connection refused"
        );
        assert_eq!(form_error_message(&ApiError::Transport(" ".into()), "r", "f"), "f");
    }

    #[test]
    fn editing_clears_only_that_field() {
        let mut form = Form::<CreateDraft>::default();
        form.open_with(CreateDraft::default(), None);

        let mut errors = ValidationErrors::new();
        errors.insert(Field::Name, "a");
        errors.insert(Field::Email, "b");
        assert!(!form.apply_validation(errors));
        assert_eq!(form.state(), DialogState::Invalid);

        form.set_field(Field::Name, "Ana").unwrap();

        assert!(!form.errors().contains(Field::Name));
        assert!(form.errors().contains(Field::Email));
        assert_eq!(form.state(), DialogState::Editing);
        assert_eq!(form.initials(), "A");
    }

    #[test]
    fn closed_form_does_not_submit() {
        let mut form = Form::<CreateDraft>::default();

        assert!(matches!(
            form.begin_submit::<()>(ValidationErrors::new()),
            Err(SubmitOutcome::Closed)
        ));
        assert!(!form.is_submitting());
    }

    #[test]
    fn dropping_the_guard_ends_the_submit() {
        let mut form = Form::<CreateDraft>::default();
        form.open_with(CreateDraft::default(), None);

        let guard = form.begin_submit::<()>(ValidationErrors::new());
        assert!(guard.as_ref().is_ok_and(|form| form.is_submitting()));
        drop(guard);

        assert!(!form.is_submitting());
        assert_eq!(form.state(), DialogState::Editing);
    }

    #[test]
    fn reopening_clears_a_stuck_submit() {
        let mut form = Form::<CreateDraft>::default();
        form.open_with(CreateDraft::default(), None);
        form.submitting = true;
        form.state = DialogState::Submitting;

        form.reset();
        assert!(!form.is_submitting());

        form.submitting = true;
        form.open_with(CreateDraft::default(), None);
        assert!(!form.is_submitting());
        assert_eq!(form.state(), DialogState::Open);
    }
}
