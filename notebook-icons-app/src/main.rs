use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info};

use notebook_icons_render::{export_all, manifest_icons};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Generating notebook icons");

    let exported = match export_all(Path::new(".")) {
        Ok(exported) => exported,
        Err(e) => {
            error!("Icon export failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    for icon in &exported {
        info!(
            "Created {} ({}x{}px, {} bytes)",
            icon.target.file_name, icon.target.size, icon.target.size, icon.bytes
        );
    }

    // Snippet for the web app manifest, on stdout so it can be piped.
    let snippet = serde_json::json!({ "icons": manifest_icons(&exported) });
    match serde_json::to_string_pretty(&snippet) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            error!("Failed to serialize manifest snippet: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
