pub mod handlers;
pub mod router;

use crate::core::directory::EmployeeDirectory;
use std::net::SocketAddr;
use std::sync::Arc;

pub type SharedDirectory = Arc<EmployeeDirectory>;

/// Serve the lookup endpoint until the process is stopped.
pub async fn start_server(directory: EmployeeDirectory, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router::create_router(Arc::new(directory));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting local server at http://{} ...", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await?;

    tracing::info!("Lookup server stopped");
    Ok(())
}
