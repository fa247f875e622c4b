use axum::{Json, extract::State};
use chrono::Utc;

use crate::{
    app::{AppState, ServiceError},
    game::Game,
};

#[derive(serde::Serialize)]
pub struct JsonGame {
    id: i64,
    home_team: String,
    away_team: String,
    date: i64,
    home_score: Option<u32>,
    away_score: Option<u32>,
}

impl JsonGame {
    fn from_game(game: &Game) -> Self {
        Self {
            id: game.id,
            home_team: game.home_team.clone(),
            away_team: game.away_team.clone(),
            date: game.date.timestamp(),
            home_score: game.home_score,
            away_score: game.away_score,
        }
    }
}

#[derive(serde::Serialize)]
pub struct JsonSchedule {
    recent: Vec<JsonGame>,
    upcoming: Vec<JsonGame>,
}

pub async fn get_schedule(
    State(app_state): State<AppState>,
) -> Result<Json<JsonSchedule>, ServiceError> {
    let partition = app_state.game_service.get_schedule(Utc::now())?;
    Ok(Json(JsonSchedule {
        recent: partition.recent.iter().map(JsonGame::from_game).collect(),
        upcoming: partition.upcoming.iter().map(JsonGame::from_game).collect(),
    }))
}

#[derive(serde::Serialize)]
pub struct JsonTeamScoring {
    name: String,
    average_home_score: f64,
}

#[derive(serde::Serialize)]
pub struct JsonScoringReport {
    home_average: Option<f64>,
    away_average: Option<f64>,
    top_home_teams: Vec<JsonTeamScoring>,
}

pub async fn get_scoring(
    State(app_state): State<AppState>,
) -> Result<Json<JsonScoringReport>, ServiceError> {
    let report = app_state.game_service.get_scoring_report(Utc::now())?;
    Ok(Json(JsonScoringReport {
        home_average: report.averages.map(|averages| averages.home),
        away_average: report.averages.map(|averages| averages.away),
        top_home_teams: report
            .top_home_teams
            .into_iter()
            .map(|(name, average_home_score)| JsonTeamScoring {
                name,
                average_home_score,
            })
            .collect(),
    }))
}
