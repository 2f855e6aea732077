use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use cyclara::analysis::ovulation::ThermalShiftParams;
use cyclara::{analysis, config, source, vocab::Vocabulary};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let Some(path) = env::args().nth(1).map(PathBuf::from) else {
        eprintln!("usage: cyclara <notes-file>");
        return ExitCode::FAILURE;
    };

    let vocab = Vocabulary::default();
    let import = source::import_notes(&path, &vocab);
    if let Some(condition) = &import.source_error {
        eprintln!("{condition}");
    }

    let report = analysis::analyze(&import.series, &ThermalShiftParams::default(), &vocab);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize report");
            ExitCode::FAILURE
        }
    }
}
