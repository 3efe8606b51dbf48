use color_eyre::Result;
use forms::UsersPage;
use spinners::{Spinner, Spinners};
use user_api::{require_token, UserApi};

use crate::{context::GlobalContext, utils};

/// Fetches the rows of `page` again.
pub(crate) async fn refresh(ctx: &GlobalContext, page: &mut UsersPage) -> Result<()> {
    let token = require_token(ctx.tokens().as_ref())?;
    let users = ctx.client.list_users(&token).await?;

    tracing::debug!(count = users.len(), key = page.refresh_key(), "user list fetched");
    page.set_users(users);

    Ok(())
}

pub async fn list(ctx: &GlobalContext, json: bool) -> Result<()> {
    let mut page = UsersPage::new();

    let mut spinner = Spinner::new(Spinners::Dots, "Carregando usuários...".into());
    let fetched = refresh(ctx, &mut page).await;
    spinner.stop_with_newline();
    fetched?;

    if json {
        println!("{}", serde_json::to_string_pretty(page.users())?);
        return Ok(());
    }

    utils::print_users(page.users());

    Ok(())
}
