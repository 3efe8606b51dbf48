use std::path::PathBuf;

use color_eyre::Result;
use colored::*;
use forms::{Draft, EditDraft, Field, SubmitOutcome, UsersPage};
use inquire::Confirm;
use spinners::{Spinner, Spinners};
use user_api::{require_token, UserApi};

use crate::{context::GlobalContext, prompts, utils};

pub async fn edit(ctx: &GlobalContext, id: u64, avatar: Option<PathBuf>) -> Result<()> {
    let token = require_token(ctx.tokens().as_ref())?;
    let user = ctx.client.get_user(&token, id).await?;

    let mut page = UsersPage::new();
    page.set_users(vec![user.clone()]);

    let mut dialog = page
        .edit_dialog(ctx.api(), ctx.tokens())
        .with_on_updated(|user| tracing::debug!(id = user.id, "row updated"));
    dialog.open(user);

    if let Some(path) = avatar {
        dialog.select_avatar(&path).await?;
    }

    let mut pending: Vec<Field> = EditDraft::FIELDS.to_vec();

    loop {
        let Some(answers) = prompts::prompt_fields(dialog.form(), &pending)? else {
            dialog.cancel();
            println!("Operation aborted.");
            return Ok(());
        };

        for (field, value) in answers {
            dialog.set_field(field, &value)?;
        }

        if ctx.dry_run {
            if !dialog.validate() {
                utils::print_form(dialog.form());
                pending = utils::failing_fields(dialog.form());
                continue;
            }

            if let Some(payload) = dialog.form().draft().to_payload() {
                println!("PUT {}api/usuarios/{id}", ctx.client.base_url());
                println!("{}", serde_json::to_string_pretty(&payload)?);
            }

            dialog.cancel();
            return Ok(());
        }

        utils::print_form(dialog.form());

        if !Confirm::new("Salvar alterações?").with_default(true).prompt()? {
            dialog.cancel();
            println!("Operation aborted.");
            return Ok(());
        }

        let mut spinner = Spinner::new(Spinners::Dots, "Salvando...".into());

        match dialog.submit().await {
            SubmitOutcome::Saved(updated) => {
                spinner.stop_and_persist("✅", "Usuário atualizado".into());
                println!();

                page.on_user_updated(updated.clone());
                utils::print_user(&updated);
                break;
            }
            SubmitOutcome::Invalid => {
                spinner.stop_with_newline();
                utils::print_form(dialog.form());
                pending = utils::failing_fields(dialog.form());
            }
            SubmitOutcome::Failed => {
                let message = dialog.form().form_error().unwrap_or_default().to_string();
                spinner.stop_and_persist("❌", message.red().to_string());

                if !Confirm::new("Revisar e tentar novamente?")
                    .with_default(true)
                    .prompt()?
                {
                    dialog.cancel();
                    return Ok(());
                }

                pending = EditDraft::FIELDS.to_vec();
            }
            SubmitOutcome::Busy | SubmitOutcome::Closed => {
                spinner.stop();
                break;
            }
        }
    }

    Ok(())
}
