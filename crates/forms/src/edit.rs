use std::{path::Path, sync::Arc};

use user_api::{models::user::User, require_token, TokenProvider, UserApi};

use crate::{
    avatar::{read_avatar, AvatarPreview},
    dialog::{form_error_message, Form, SubmitOutcome},
    draft::{DraftError, EditDraft},
    field::Field,
    messages,
    validation::validate_edit,
};

type OnUpdated = Box<dyn FnMut(User) + Send>;

/// "Editar usuário" dialog, bound to one stored record at a time.
pub struct EditUserDialog {
    api: Arc<dyn UserApi>,
    tokens: Arc<dyn TokenProvider>,
    form: Form<EditDraft>,
    user: Option<User>,
    on_updated: Option<OnUpdated>,
}

impl std::fmt::Debug for EditUserDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditUserDialog")
            .field("form", &self.form)
            .field("user", &self.user.as_ref().map(|u| u.id))
            .field("on_updated", &self.on_updated.is_some())
            .finish()
    }
}

impl EditUserDialog {
    pub fn new(api: Arc<dyn UserApi>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            api,
            tokens,
            form: Form::default(),
            user: None,
            on_updated: None,
        }
    }

    /// Receives the merged record after every successful update.
    pub fn with_on_updated(mut self, callback: impl FnMut(User) + Send + 'static) -> Self {
        self.on_updated = Some(Box::new(callback));
        self
    }

    pub fn form(&self) -> &Form<EditDraft> {
        &self.form
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn open(&mut self, user: User) {
        self.seed(user);
    }

    /// Re-seeds the draft when a different record is handed in; the same
    /// record leaves pending edits alone.
    pub fn set_user(&mut self, user: User) {
        if self.user.as_ref() == Some(&user) {
            return;
        }

        let was_open = self.form.is_open();
        self.seed(user);

        if !was_open {
            self.form.close();
        }
    }

    fn seed(&mut self, user: User) {
        let draft = EditDraft::from(&user);
        let avatar = user.avatar.clone().map(AvatarPreview::from);

        self.form.open_with(draft, avatar);
        self.user = Some(user);
    }

    /// Closes without saving and forgets the bound record.
    pub fn cancel(&mut self) {
        self.form.reset();
        self.form.close();
        self.user = None;
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), DraftError> {
        self.form.set_field(field, value)
    }

    pub async fn select_avatar(&mut self, path: &Path) -> color_eyre::Result<()> {
        let preview = read_avatar(path).await?;
        self.form.set_avatar(preview);

        Ok(())
    }

    pub fn set_avatar(&mut self, preview: AvatarPreview) {
        self.form.set_avatar(preview);
    }

    pub fn validate(&mut self) -> bool {
        let errors = validate_edit(&self.form.draft);
        self.form.apply_validation(errors)
    }

    #[tracing::instrument(skip(self), fields(id = ?self.user.as_ref().map(|u| u.id)))]
    pub async fn submit(&mut self) -> SubmitOutcome<User> {
        let errors = validate_edit(&self.form.draft);

        let mut form = match self.form.begin_submit(errors) {
            Ok(form) => form,
            Err(outcome) => return outcome,
        };

        send(
            self.api.as_ref(),
            self.tokens.as_ref(),
            &mut form,
            &mut self.user,
            &mut self.on_updated,
        )
        .await
    }
}

async fn send(
    api: &dyn UserApi,
    tokens: &dyn TokenProvider,
    form: &mut Form<EditDraft>,
    user: &mut Option<User>,
    on_updated: &mut Option<OnUpdated>,
) -> SubmitOutcome<User> {
    let (Some(original), Some(payload)) = (user.clone(), form.draft.to_payload()) else {
        return SubmitOutcome::Invalid;
    };

    let token = match require_token(tokens) {
        Ok(token) => token,
        Err(err) => {
            form.fail(form_error_message(
                &err,
                messages::UPDATE_REJECTED,
                messages::UPDATE_FAILED,
            ));
            return SubmitOutcome::Failed;
        }
    };

    match api.update_user(&token, original.id, &payload).await {
        Ok(response) => {
            tracing::info!(id = response.id, "user updated");

            // the response does not know about a freshly picked avatar yet
            let avatar = form
                .avatar
                .clone()
                .map(AvatarPreview::into_inner)
                .or(original.avatar);
            let merged = response.avatar(avatar);

            if let Some(callback) = on_updated.as_mut() {
                callback(merged.clone());
            }

            *user = Some(merged.clone());
            form.close();

            SubmitOutcome::Saved(merged)
        }
        Err(err) => {
            form.fail(form_error_message(
                &err,
                messages::UPDATE_REJECTED,
                messages::UPDATE_FAILED,
            ));
            SubmitOutcome::Failed
        }
    }
}
