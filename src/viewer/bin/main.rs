use std::net::SocketAddr;
use bookshelf::core::domain::Configuration;
use bookshelf::utils::logging::setup_tracing;
use bookshelf::viewer::controller::router;
use bookshelf::viewer::factory::create_app_state;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Configuration::from_env();
    setup_tracing(config.json_logs);

    let state = create_app_state(&config)?;
    let viewer = state.viewer.clone();
    tokio::spawn(async move { viewer.load().await });

    let addr: SocketAddr = config.listen_addr.parse()?;
    tracing::info!(%addr, search_mode = %config.search_mode, "starting bookshelf viewer");
    axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .await?;
    Ok(())
}
