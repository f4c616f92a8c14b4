use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. `RUST_LOG` wins over `log_level` when set.
/// Logs go to stderr so stdout only carries the rendered chains.
pub fn init(log_level: &str, json: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .with_context(|| format!("invalid log filter {log_level:?}"))?;

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        let layer = fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_ansi(false);
        registry.with(layer).try_init()?;
    } else {
        let layer = fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .with_ansi(enable_ansi());
        registry.with(layer).try_init()?;
    }

    Ok(())
}

fn enable_ansi() -> bool {
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
