use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use ticket_office::driver;
use ticket_office::office::{OfficeConfig, TicketOffice};

/// Environment variable naming an optional JSON config file.
const CONFIG_ENV: &str = "TICKET_OFFICE_CONFIG";

fn main() -> ExitCode {
    // Logging is off unless RUST_LOG asks for it: stderr carries diagnostics
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => match OfficeConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {CONFIG_ENV}: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => OfficeConfig::default(),
    };

    let mut office = TicketOffice::new(config);
    tracing::debug!(config = ?office.config(), "Starting ticket office");

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    match driver::run(&mut office, stdin, &mut stdout, &mut stderr) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("I/O error: {e}");
            ExitCode::FAILURE
        }
    }
}
