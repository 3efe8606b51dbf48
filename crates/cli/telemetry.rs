use color_eyre::Result;
use tracing_subscriber::{layer::Layered, EnvFilter, Registry};
use tracing_subscriber::{prelude::*, util::SubscriberInitExt};

pub type CompactRegistry = Layered<
    EnvFilter,
    Layered<
        tracing_subscriber::fmt::Layer<
            Registry,
            tracing_subscriber::fmt::format::DefaultFields,
            tracing_subscriber::fmt::format::Format<tracing_subscriber::fmt::format::Compact>,
            fn() -> std::io::Stderr,
        >,
        Registry,
    >,
>;

fn registry() -> CompactRegistry {
    Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr as fn() -> std::io::Stderr),
        )
        .with(EnvFilter::from_default_env())
}

/// Logs go to stderr so they never mix with prompts and `--json` output.
/// Filtering follows `RUST_LOG`; `--debug` turns on `debug` for our crates.
pub fn init(debug: bool) -> Result<()> {
    if debug && std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "usuarios=debug,forms=debug,user_api=debug,config=debug");
    }

    registry().try_init()?;

    Ok(())
}
