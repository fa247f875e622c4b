use std::sync::Arc;

use axum::response::IntoResponse;
use thiserror::Error;

use crate::{
    game::{GameService, GameServiceImpl},
    persistence::{
        DbPool,
        games::{GameRepository, GameRepositoryImpl},
        players::{PlayerRepository, PlayerRepositoryImpl},
        teams::{TeamRepository, TeamRepositoryImpl},
        users::{UserRepository, UserRepositoryImpl},
    },
    player::{PlayerService, PlayerServiceImpl},
    team::{TeamService, TeamServiceImpl},
    user::{UserService, UserServiceImpl},
};

pub type ArcTeamService = Arc<Box<dyn TeamService + Send + Sync + 'static>>;
pub type ArcPlayerService = Arc<Box<dyn PlayerService + Send + Sync + 'static>>;
pub type ArcGameService = Arc<Box<dyn GameService + Send + Sync + 'static>>;
pub type ArcUserService = Arc<Box<dyn UserService + Send + Sync + 'static>>;

pub type ArcTeamRepository = Arc<Box<dyn TeamRepository + Send + Sync + 'static>>;
pub type ArcPlayerRepository = Arc<Box<dyn PlayerRepository + Send + Sync + 'static>>;
pub type ArcGameRepository = Arc<Box<dyn GameRepository + Send + Sync + 'static>>;
pub type ArcUserRepository = Arc<Box<dyn UserRepository + Send + Sync + 'static>>;

#[derive(Clone)]
pub struct AppState {
    pub team_service: ArcTeamService,
    pub player_service: ArcPlayerService,
    pub game_service: ArcGameService,
    pub user_service: ArcUserService,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    #[error("operation not possible: {0}")]
    NotPossible(String),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("connection error: {0}")]
    ConnectionError(r2d2::Error),
    #[error("query error: {0}")]
    QueryError(rusqlite::Error),
}

impl ServiceError {
    pub fn bad_request<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::BadRequest(msg.into()))
    }

    pub fn unauthorized<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::Unauthorized(msg.into()))
    }

    pub fn not_found<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::NotFound(msg.into()))
    }

    pub fn not_possible<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::NotPossible(msg.into()))
    }

    pub fn internal<T, R>(msg: T) -> ServiceResult<R>
    where
        T: Into<String>,
    {
        Err(ServiceError::Internal(msg.into()))
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::http::Response<axum::body::Body> {
        let (status, msg) = match self {
            ServiceError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            ServiceError::Unauthorized(msg) => (axum::http::StatusCode::UNAUTHORIZED, msg),
            ServiceError::BadRequest(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            ServiceError::Database(_) => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
            ServiceError::NotPossible(msg) => (axum::http::StatusCode::CONFLICT, msg),
            ServiceError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = serde_json::json!({ "error": msg });
        (status, axum::Json(body)).into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

pub fn construct_app(pool: DbPool) -> AppState {
    let team_repository: ArcTeamRepository =
        Arc::new(Box::new(TeamRepositoryImpl::new(pool.clone())));
    let player_repository: ArcPlayerRepository =
        Arc::new(Box::new(PlayerRepositoryImpl::new(pool.clone())));
    let game_repository: ArcGameRepository =
        Arc::new(Box::new(GameRepositoryImpl::new(pool.clone())));
    let user_repository: ArcUserRepository = Arc::new(Box::new(UserRepositoryImpl::new(pool)));

    let team_service: ArcTeamService = Arc::new(Box::new(TeamServiceImpl::new(
        team_repository,
        player_repository.clone(),
        game_repository.clone(),
    )));

    let player_service: ArcPlayerService =
        Arc::new(Box::new(PlayerServiceImpl::new(player_repository)));

    let game_service: ArcGameService = Arc::new(Box::new(GameServiceImpl::new(game_repository)));

    let user_service: ArcUserService = Arc::new(Box::new(UserServiceImpl::new(user_repository)));

    AppState {
        team_service,
        player_service,
        game_service,
        user_service,
    }
}
