use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use defcon::{Cli, Stderr};

/// Route `tracing` events to stderr. `DEFCON_LOG` takes an `EnvFilter`
/// directive; without it only warnings and errors are shown.
fn init_logging() {
    let filter = EnvFilter::try_from_env("DEFCON_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let program = std::env::args().next().unwrap_or_else(|| "defcon".into());

    let cli = match Cli::try_parse_ordered(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            err.print().ok();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match cli.into_builder().run(&mut Stderr) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{program}: fatal: {err}");
            ExitCode::FAILURE
        }
    }
}
