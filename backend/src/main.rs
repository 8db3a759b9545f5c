use listings_backend::catalog::Catalog;
use listings_backend::config::AppConfig;
use listings_backend::{serve, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!("Loaded config: {:?}", config);

    let catalog = Catalog::open(&config.listings_path, config.cache_listings);
    match catalog.list_all().await {
        Ok(listings) => log::info!(
            "Listing store check: {} listings in {}",
            listings.len(),
            catalog.path().display()
        ),
        Err(e) => log::warn!("Listing store not readable at startup: {}", e),
    }

    let addr = config.bind_addr();
    log::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve(listener, AppState::new(catalog)).await?;

    Ok(())
}
