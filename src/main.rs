use hoopstats::{app::construct_app, http, logs::init_logger, persistence::open_pool};
use log::info;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    init_logger();

    let db_path = std::env::var("HOOPS_DB").expect("HOOPS_DB env var not set");
    let pool = open_pool(&db_path);
    let app_state = construct_app(pool);

    info!("Starting application");

    http::run(app_state, shutdown_signal()).await;
}
