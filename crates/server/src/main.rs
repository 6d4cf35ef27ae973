use desk_server::{DeskConfig, DeskServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"Desk Server - order-routing classifier, NOP and session tools

USAGE:
    desk-server [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (default: 0.0.0.0)
    PORT                Server port (default: 8080)
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with defaults
    desk-server

    # Run with config file
    desk-server --config desk.json

    # Run with custom port
    PORT=9000 desk-server
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "desk_server=info,desk_classifier=info,desk_exposure=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            DeskConfig::from_file(&path)?
        }
        None => {
            tracing::info!("Using default configuration");
            DeskConfig::from_env()
        }
    };

    tracing::info!("High NOP threshold: {}", config.exposure.high_nop_threshold);
    tracing::info!("London close: {:?}", config.sessions.london_close);
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /api/v1/ping");
    tracing::info!("  POST /api/v1/classify");
    tracing::info!("  GET  /api/v1/labels");
    tracing::info!("  POST /api/v1/exposure");
    tracing::info!("  GET  /api/v1/sessions?date=YYYY-MM-DD&viewer=Asia/Singapore");
    tracing::info!("  POST /api/v1/time/convert");

    DeskServer::new(config)?.run().await
}
