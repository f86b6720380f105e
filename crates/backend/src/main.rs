pub mod errors;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    tracing::info!("SoroScope starting...");

    let config = shared::config::load_config()?;
    let app = routes::configure_routes(&config);

    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr: SocketAddr = (host, config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server listening on http://{}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            // Propagate the error to stop the application
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
