use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// Logs go to:
/// - stdout (with colors)
/// - target/logs/backend.log (without colors)
///
/// The filter comes from RUST_LOG and defaults to `info,tower_http=debug`.
pub fn initialize() -> anyhow::Result<()> {
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    let log_level =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}
