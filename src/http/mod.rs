use axum::{
    Router,
    routing::{delete, get, post, put},
};
use log::info;

use crate::app::AppState;

mod auth;
mod players;
mod schedule;
mod standings;
mod teams;

pub async fn run(
    app_state: AppState,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) {
    let router: Router<AppState> = Router::new().nest(
        "/v1",
        Router::new()
            .route("/teams", get(teams::get_all))
            .route("/teams/{name}", delete(teams::delete_team))
            .route("/teams/{name}/roster", get(teams::get_roster))
            .route("/standings", get(standings::get_standings))
            .route("/standings/top", get(standings::get_top_teams))
            .route("/players", get(players::get_all))
            .route("/players/leaders", get(players::get_leaders))
            .route("/schedule", get(schedule::get_schedule))
            .route("/scoring", get(schedule::get_scoring))
            .route("/auth/register", post(auth::register))
            .route("/auth/login", post(auth::login))
            .route("/profile", get(auth::get_profile))
            .route("/profile/favorite-team", put(auth::set_favorite_team)),
    );

    let port = std::env::var("HOOPS_HTTP_PORT")
        .expect("HOOPS_HTTP_PORT must be set")
        .parse::<u16>()
        .expect("HOOPS_HTTP_PORT must be a valid u16");

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .unwrap();

    info!("API server listening on port {}", port);
    axum::serve(listener, router.with_state(app_state))
        .with_graceful_shutdown(shutdown_signal)
        .await
        .unwrap();

    info!("HTTP API shut down gracefully");
}
