use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing::info;

use balance_server::adapter::handler::{self, AppState};
use balance_server::domain::repository::BalanceRepository;
use balance_server::infrastructure::config::Config;
use balance_server::infrastructure::persistence::StaticBalanceRepository;
use balance_server::usecase::GetBalanceUseCase;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .init();

    let cfg = Config::load()?;

    info!(
        app_name = %cfg.app.name,
        version = %cfg.app.version,
        port = cfg.server.port,
        "starting balance server"
    );

    let balance_repo: Arc<dyn BalanceRepository> =
        Arc::new(StaticBalanceRepository::new(&cfg.balance));
    let get_balance_uc = Arc::new(GetBalanceUseCase::new(balance_repo));

    let state = AppState { get_balance_uc };
    let app = handler::router(state).layer(TraceLayer::new_for_http());

    let rest_addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(rest_addr).await?;
    info!("REST server listening on {}", rest_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
