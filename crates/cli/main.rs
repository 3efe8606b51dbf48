use clap::CommandFactory;
use clap::Parser;
use color_eyre::Result;
use config::Config;
use human_panic::setup_panic;

use crate::{cli::Args, context::GlobalContext};

mod cli;
mod context;
mod prompts;
mod subcommands;
mod telemetry;
mod utils;

fn print_help() -> Result<()> {
    let mut cmd = Args::command();
    cmd.print_help()?;

    Ok(())
}

async fn load_context(dry_run: bool) -> Result<GlobalContext> {
    if Config::is_first_run()? {
        println!("Please configure the CLI before continue");
        println!();

        subcommands::config::reset().await?;
    }

    let config = Config::read().await?;
    global_utils::print_dbg!(config.base_url());

    let ctx = GlobalContext::new(config, dry_run)?;
    tracing::debug!(base_url = %ctx.client.base_url(), "context ready");

    Ok(ctx)
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic!();

    #[cfg(debug_assertions)]
    color_eyre::install()?;

    let args = cli::Args::parse();

    if args.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    if args.debug {
        std::env::set_var(global_utils::DEBUG_ENV, args.debug.to_string());
    }

    telemetry::init(args.debug)?;

    let Some(command) = args.command else {
        return print_help();
    };

    match command {
        cli::Commands::Config { subcommands } => match subcommands {
            cli::ConfigCommands::Reset => subcommands::config::reset().await?,
            cli::ConfigCommands::Show => subcommands::config::show().await?,
        },
        cli::Commands::List { json } => {
            let ctx = load_context(args.dry_run).await?;
            subcommands::users::list(&ctx, json).await?
        }
        cli::Commands::Create { avatar } => {
            let ctx = load_context(args.dry_run).await?;
            subcommands::users::create(&ctx, avatar).await?
        }
        cli::Commands::Edit { id, avatar } => {
            let ctx = load_context(args.dry_run).await?;
            subcommands::users::edit(&ctx, id, avatar).await?
        }
    }

    Ok(())
}
