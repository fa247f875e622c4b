use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    app::{AppState, ServiceError},
    player::{Player, StatCategory},
};

#[derive(serde::Serialize)]
pub struct JsonPlayer {
    id: i64,
    name: String,
    team_id: i64,
    position: String,
    points_per_game: f64,
    rebounds_per_game: f64,
    assists_per_game: f64,
    steals_per_game: f64,
    blocks_per_game: f64,
    field_goal_pct: f64,
    three_point_pct: f64,
}

impl JsonPlayer {
    pub fn from_player(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            team_id: player.team_id,
            position: player.position.clone(),
            points_per_game: player.points_per_game,
            rebounds_per_game: player.rebounds_per_game,
            assists_per_game: player.assists_per_game,
            steals_per_game: player.steals_per_game,
            blocks_per_game: player.blocks_per_game,
            field_goal_pct: player.field_goal_pct,
            three_point_pct: player.three_point_pct,
        }
    }
}

pub async fn get_all(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<JsonPlayer>>, ServiceError> {
    let players = app_state.player_service.get_players()?;
    Ok(Json(players.iter().map(JsonPlayer::from_player).collect()))
}

#[derive(serde::Deserialize)]
pub struct LeadersFilter {
    stat: Option<String>,
    limit: Option<usize>,
}

pub async fn get_leaders(
    State(app_state): State<AppState>,
    Query(filter): Query<LeadersFilter>,
) -> Result<Json<Vec<JsonPlayer>>, ServiceError> {
    let stat_name = filter.stat.unwrap_or_else(|| "points".to_string());
    let stat = StatCategory::parse(&stat_name)
        .ok_or_else(|| ServiceError::BadRequest(format!("Unknown stat '{}'", stat_name)))?;
    let limit = filter.limit.filter(|&l| l > 0).unwrap_or(5);
    let leaders = app_state.player_service.get_leaders(stat, limit)?;
    Ok(Json(leaders.iter().map(JsonPlayer::from_player).collect()))
}
