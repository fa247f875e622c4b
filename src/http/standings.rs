use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    app::{AppState, ServiceError},
    stats::StandingsRow,
};

#[derive(serde::Serialize)]
pub struct JsonStandingsRow {
    rank: u32,
    name: String,
    wins: u32,
    losses: u32,
    win_pct: f64,
}

impl JsonStandingsRow {
    fn from_row(row: &StandingsRow) -> Self {
        Self {
            rank: row.rank,
            name: row.name.clone(),
            wins: row.wins,
            losses: row.losses,
            win_pct: row.win_pct,
        }
    }
}

pub async fn get_standings(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<JsonStandingsRow>>, ServiceError> {
    let rows = app_state.team_service.get_standings()?;
    Ok(Json(rows.iter().map(JsonStandingsRow::from_row).collect()))
}

#[derive(serde::Deserialize)]
pub struct TopTeamsFilter {
    limit: Option<usize>,
}

#[derive(serde::Serialize)]
pub struct JsonTopTeam {
    name: String,
    win_pct: f64,
}

pub async fn get_top_teams(
    State(app_state): State<AppState>,
    Query(filter): Query<TopTeamsFilter>,
) -> Result<Json<Vec<JsonTopTeam>>, ServiceError> {
    let limit = filter.limit.filter(|&l| l > 0).unwrap_or(5);
    let top = app_state.team_service.get_top_teams(limit)?;
    Ok(Json(
        top.into_iter()
            .map(|(name, win_pct)| JsonTopTeam { name, win_pct })
            .collect(),
    ))
}
