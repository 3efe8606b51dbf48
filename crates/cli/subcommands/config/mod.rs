use color_eyre::Result;
use colored::*;
use config::{util::redact, Config, TOKEN_ENV};
use inquire::{Password, PasswordDisplayMode, Text};

pub async fn reset() -> Result<()> {
    let current = Config::read().await?;

    let base_url = Text::new("URL da API:")
        .with_help_message("e.g http://localhost:8081")
        .with_default(&current.base_url)
        .prompt()?;

    let token = Password::new("Token de acesso:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .with_help_message(&format!("leave empty to read it from `{TOKEN_ENV}`"))
        .prompt_skippable()?
        .and_then(|token| config::util::non_blank(Some(token)))
        .or(current.token);

    let config = Config {
        base_url: base_url.trim().to_string(),
        token,
    };

    config.write()?;
    println!("Configuration saved to {}", Config::path()?.display().to_string().yellow());

    Ok(())
}

pub async fn show() -> Result<()> {
    let config = Config::read().await?;

    println!("Path: {}", Config::path()?.display().to_string().yellow());
    println!("API: {}", config.base_url().yellow());
    println!(
        "Token: {}",
        config
            .token()
            .map(|token| redact(&token))
            .unwrap_or_else(|| "-".into())
            .yellow()
    );

    Ok(())
}
