use std::{path::Path, sync::Arc};

use user_api::{require_token, TokenProvider, UserApi};

use crate::{
    avatar::{read_avatar, AvatarPreview},
    dialog::{form_error_message, Form, SubmitOutcome},
    draft::{CreateDraft, DraftError},
    field::Field,
    messages,
    validation::validate_create,
};

type OnCreated = Box<dyn FnMut() + Send>;

/// "Novo usuário" dialog.
pub struct CreateUserDialog {
    api: Arc<dyn UserApi>,
    tokens: Arc<dyn TokenProvider>,
    form: Form<CreateDraft>,
    on_created: Option<OnCreated>,
}

impl std::fmt::Debug for CreateUserDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserDialog")
            .field("form", &self.form)
            .field("on_created", &self.on_created.is_some())
            .finish()
    }
}

impl CreateUserDialog {
    pub fn new(api: Arc<dyn UserApi>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            api,
            tokens,
            form: Form::default(),
            on_created: None,
        }
    }

    /// Called once after every successful create.
    pub fn with_on_created(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_created = Some(Box::new(callback));
        self
    }

    pub fn form(&self) -> &Form<CreateDraft> {
        &self.form
    }

    pub fn open(&mut self) {
        self.form.open_with(CreateDraft::default(), None);
    }

    /// Closes without saving and discards the draft.
    pub fn cancel(&mut self) {
        self.form.reset();
        self.form.close();
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

    /// Recomputes the field errors without sending anything.
    pub fn validate(&mut self) -> bool {
        let errors = validate_create(&self.form.draft);
        self.form.apply_validation(errors)
    }

    #[tracing::instrument(skip(self), fields(login = %self.form.draft.email))]
    pub async fn submit(&mut self) -> SubmitOutcome<()> {
        let errors = validate_create(&self.form.draft);

        let mut form = match self.form.begin_submit(errors) {
            Ok(form) => form,
            Err(outcome) => return outcome,
        };

        send(
            self.api.as_ref(),
            self.tokens.as_ref(),
            &mut form,
            &mut self.on_created,
        )
        .await
    }
}

async fn send(
    api: &dyn UserApi,
    tokens: &dyn TokenProvider,
    form: &mut Form<CreateDraft>,
    on_created: &mut Option<OnCreated>,
) -> SubmitOutcome<()> {
    let Some(payload) = form.draft.to_payload() else {
        return SubmitOutcome::Invalid;
    };

    let token = match require_token(tokens) {
        Ok(token) => token,
        Err(err) => {
            form.fail(form_error_message(
                &err,
                messages::CREATE_REJECTED,
                messages::CREATE_FAILED,
            ));
            return SubmitOutcome::Failed;
        }
    };

    match api.create_user(&token, &payload).await {
        Ok(()) => {
            tracing::info!("user created");

            form.close();
            form.reset();

            if let Some(callback) = on_created.as_mut() {
                callback();
            }

            SubmitOutcome::Saved(())
        }
        Err(err) => {
            form.fail(form_error_message(
                &err,
                messages::CREATE_REJECTED,
                messages::CREATE_FAILED,
            ));
            SubmitOutcome::Failed
        }
    }
}
