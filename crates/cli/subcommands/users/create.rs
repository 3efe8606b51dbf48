use std::path::PathBuf;

use color_eyre::Result;
use colored::*;
use forms::{CreateDraft, Draft, Field, SubmitOutcome, UsersPage};
use inquire::Confirm;
use serde_json::json;
use spinners::{Spinner, Spinners};

use crate::{context::GlobalContext, prompts, utils};

use super::list;

pub async fn create(ctx: &GlobalContext, avatar: Option<PathBuf>) -> Result<()> {
    let mut page = UsersPage::new();
    let seen = page.refresh_key();
    let refresh = page.subscribe();

    let mut dialog = page.create_dialog(ctx.api(), ctx.tokens());
    dialog.open();

    if let Some(path) = avatar {
        dialog.select_avatar(&path).await?;
    }

    let mut pending: Vec<Field> = CreateDraft::FIELDS.to_vec();

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
                let mut body = serde_json::to_value(&payload)?;
                body["senha"] = json!("*".repeat(payload.senha.chars().count()));

                println!("POST {}api/usuarios", ctx.client.base_url());
                println!("{}", serde_json::to_string_pretty(&body)?);
            }

            dialog.cancel();
            return Ok(());
        }

        utils::print_form(dialog.form());

        if !Confirm::new("Criar usuário?").with_default(true).prompt()? {
            dialog.cancel();
            println!("Operation aborted.");
            return Ok(());
        }

        let mut spinner = Spinner::new(Spinners::Dots, "Criando...".into());
        let outcome = dialog.submit().await;

        match outcome {
            SubmitOutcome::Saved(()) => {
                spinner.stop_and_persist("✅", "Usuário criado".into());
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

                pending = CreateDraft::FIELDS.to_vec();
            }
            SubmitOutcome::Busy | SubmitOutcome::Closed => {
                spinner.stop();
                break;
            }
        }
    }

    if *refresh.borrow() != seen {
        println!();
        list::refresh(ctx, &mut page).await?;
        utils::print_users(page.users());
    }

    Ok(())
}
