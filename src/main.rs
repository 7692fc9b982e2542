//! agentk CLI entry point.

use agentk::config::{LaunchContext, LauncherConfig};
use agentk::launcher::Launcher;
use agentk::ui::TerminalUI;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `AGENTK_LOG` environment variable (if set)
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they never mix with the script's stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("AGENTK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("agentk=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();

    // Everything after the launcher's own name belongs to the script.
    let args = std::env::args_os().skip(1).collect();
    let ctx = LaunchContext::from_process(args);

    tracing::debug!("agentk launcher starting with args: {:?}", ctx.args);

    let mut ui = TerminalUI::new();
    let outcome = Launcher::new(LauncherConfig::default(), ctx).run(&mut ui);

    std::process::exit(outcome.code());
}
