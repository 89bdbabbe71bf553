use shopping_server::{store, AppState, Config};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    shopping_server::init_tracing();

    let config = Config::load().inspect_err(|e| {
        error!("invalid configuration: {e}");
    })?;
    let store = store::connect(&config).await.inspect_err(|e| {
        error!("could not connect to the item store: {e}");
    })?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    shopping_server::run(listener, AppState::new(store)).await?;
    Ok(())
}
