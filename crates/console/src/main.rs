use anyhow::Context;

use stockcard_console::{Console, ConsoleConfig};

fn main() -> anyhow::Result<()> {
    let config = ConsoleConfig::from_env()?;
    stockcard_observability::init(config.log_format);
    tracing::debug!(?config, "starting console");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config);
    console.run().context("terminal I/O failed")?;

    tracing::info!(cards = console.ledger().len(), "console closed");
    Ok(())
}
