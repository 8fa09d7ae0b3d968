use std::net::SocketAddr;
use bookshelf::catalog::controller::router;
use bookshelf::core::controller::AppState;
use bookshelf::core::domain::Configuration;
use bookshelf::utils::logs::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Configuration::from_env()?;
    setup_tracing(config.tracing_level()?);

    let addr: SocketAddr = config.bind_addr.parse()?;
    tracing::info!(%addr, store = %config.store, books_file = %config.books_file.display(),
        lookup_url = config.lookup_url.as_str(), "starting catalog service");

    let state = AppState::new(config)?;
    let app = router(state);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
