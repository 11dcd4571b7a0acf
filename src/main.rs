//! CLI entry point for `mailpeek`.

use std::io::Write;

use mailpeek::command;
use mailpeek::session::imaps::ImapConnector;

fn main() -> anyhow::Result<()> {
    let config = mailpeek::config::load_config();
    setup_logging(&config.general.log_level);

    let invocation = match command::parse_args(std::env::args_os().skip(1)) {
        Ok(invocation) => invocation,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };
    tracing::debug!(?invocation, "Parsed command line");

    let connector = ImapConnector::new(&config.imap);
    let mut out = std::io::stdout().lock();

    // Failures are reported as a single line of text, not as an exit status.
    if let Err(e) = command::run(&connector, &invocation, &mut out) {
        tracing::debug!(error = ?e, "Run failed");
        writeln!(out, "{e}")?;
    }

    out.flush()?;
    Ok(())
}

/// Set up tracing with stderr output, keeping stdout for the user-facing lines.
fn setup_logging(level: &str) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
