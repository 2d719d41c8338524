use anyhow::{Context, Result};
use log::debug;
use std::io::Write;

use basic_utils::{
    add,
    config::{DEFAULT_LOG_FILTER, ENTRY_LHS, ENTRY_RHS},
};

fn main() -> Result<()> {
    // Initialize logging.
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER),
    )
    .init();

    debug!("Computing add({}, {})", ENTRY_LHS, ENTRY_RHS);
    let result = add(ENTRY_LHS, ENTRY_RHS);

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", result).context("Failed to write result to stdout")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}
