use std::net::TcpListener;
use std::time::Instant;

use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use vcd_web_host::api::{self, AppState};
use vcd_web_host::config::Config;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_banner() {
    eprintln!();
    eprintln!("  \x1b[1;36m╔════════════════════════════════════════════╗\x1b[0m");
    eprintln!("  \x1b[1;36m║\x1b[0m  \x1b[1;96mvcd-web\x1b[0m - waveform viewer in the browser  \x1b[1;36m║\x1b[0m");
    eprintln!("  \x1b[1;36m║\x1b[0m  \x1b[2;37mversion {VERSION:<34}\x1b[0m\x1b[1;36m║\x1b[0m");
    eprintln!("  \x1b[1;36m╚════════════════════════════════════════════╝\x1b[0m");
    eprintln!();
}

fn print_connection_info(http_port: u16, bind: &str) {
    eprintln!("  \x1b[1;32m[http]\x1b[0m   Serving viewer at port \x1b[1;96m{http_port}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[1;37m>\x1b[0m Open: \x1b[4;96mhttp://{bind}:{http_port}\x1b[0m");
    eprintln!();
    eprintln!("  \x1b[2mPress Ctrl+C to stop\x1b[0m");
    eprintln!();
}

fn print_help() {
    println!("vcd-web - VCD Waveform Viewer in the Browser");
    println!();
    println!("USAGE:");
    println!("    vcd-web [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print help information");
    println!("    -v, --version    Print version");
    println!();
    println!("CONFIG:");
    println!("    ~/.config/vcd-web/config.toml");
}

/// Graceful start: Check if port is available
fn check_port_available(bind: &str, port: u16) -> bool {
    TcpListener::bind(format!("{bind}:{port}")).is_ok()
}

/// Graceful start: Find available port starting from default
fn find_available_port(bind: &str, start: u16) -> Option<u16> {
    (start..start + 10).find(|&port| check_port_available(bind, port))
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    eprintln!();
    eprintln!("  \x1b[1;33m[bye]\x1b[0m    Graceful shutdown initiated...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging (tracing)
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Handle --version and --help
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("vcd-web {VERSION}");
                return Ok(());
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {}
        }
    }

    print_banner();

    // === LOAD CONFIGURATION ===
    Config::create_default_if_missing();
    let config = Config::load();
    eprintln!(
        "  \x1b[1;32m[config]\x1b[0m Loaded from {}",
        Config::default_config_path().display()
    );

    // === GRACEFUL START ===
    let http_port = if check_port_available(&config.server.bind, config.server.http_port) {
        config.server.http_port
    } else {
        eprintln!(
            "  \x1b[1;33m[warn]\x1b[0m   Port {} in use, finding alternative...",
            config.server.http_port
        );
        match find_available_port(&config.server.bind, config.server.http_port + 1) {
            Some(p) => {
                eprintln!("  \x1b[1;32m[check]\x1b[0m  Using HTTP port {p}");
                p
            }
            None => anyhow::bail!(
                "no available HTTP ports in range {}-{}",
                config.server.http_port,
                config.server.http_port + 10
            ),
        }
    };

    print_connection_info(http_port, &config.server.bind);

    // === START EMBEDDED HTTP SERVER (axum) ===
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        title: config.viewer.title.clone(),
        started: Instant::now(),
    };

    let app = api::app_router(state).layer(cors);

    let http_addr = format!("{}:{http_port}", config.server.bind);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!(addr = %http_addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    eprintln!("  \x1b[1;32m[done]\x1b[0m   Goodbye.");
    eprintln!();

    Ok(())
}
