pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    system::tracing::initialize()?;

    let config = shared::config::initialize()?;
    if config.products.server_error {
        tracing::warn!("products.server_error = true: every create request will fail with 500");
    }

    let app = routes::configure_routes(config);

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Product API listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
