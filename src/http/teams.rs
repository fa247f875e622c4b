use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    app::{AppState, ServiceError},
    http::players::JsonPlayer,
    team::Team,
};

#[derive(serde::Serialize)]
pub struct JsonTeam {
    id: i64,
    name: String,
    wins: u32,
    losses: u32,
    win_pct: f64,
}

impl JsonTeam {
    fn from_team(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            wins: team.wins,
            losses: team.losses,
            win_pct: team.win_pct(),
        }
    }
}

pub async fn get_all(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<JsonTeam>>, ServiceError> {
    let teams = app_state.team_service.get_teams()?;
    Ok(Json(teams.iter().map(JsonTeam::from_team).collect()))
}

pub async fn get_roster(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<JsonPlayer>>, ServiceError> {
    let roster = app_state.team_service.get_roster(&name)?;
    Ok(Json(roster.iter().map(JsonPlayer::from_player).collect()))
}

pub async fn delete_team(
    Path(name): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode, ServiceError> {
    app_state.team_service.delete_team(&name)?;
    Ok(StatusCode::NO_CONTENT)
}
