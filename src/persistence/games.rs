use chrono::DateTime;

use crate::{
    DatabaseError,
    game::{Game, NewGame},
    persistence::{DatabaseResult, DbPool, get_connection},
};

pub trait GameRepository {
    fn get_games(&self) -> DatabaseResult<Vec<Game>>;
    fn create_game(&self, game: &NewGame) -> DatabaseResult<i64>;
    fn count_games_for_team(&self, team_id: i64) -> DatabaseResult<u32>;
}

pub struct GameRepositoryImpl {
    pool: DbPool,
}

// Team names are resolved by join so the read-side record carries them
// alongside the ids; renaming a team flows through automatically.
const SELECT_GAMES: &str = "SELECT g.id, g.home_team_id, g.away_team_id, h.name AS home_team, a.name AS away_team, g.date, g.home_score, g.away_score FROM games g JOIN teams h ON h.id = g.home_team_id JOIN teams a ON a.id = g.away_team_id ORDER BY g.id";

impl GameRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn game_from_row(row: &rusqlite::Row) -> rusqlite::Result<Game> {
        let secs: i64 = row.get("date")?;
        let date = DateTime::from_timestamp(secs, 0)
            .ok_or(rusqlite::Error::IntegralValueOutOfRange(5, secs))?;
        Ok(Game {
            id: row.get("id")?,
            home_team_id: row.get("home_team_id")?,
            away_team_id: row.get("away_team_id")?,
            home_team: row.get("home_team")?,
            away_team: row.get("away_team")?,
            date,
            home_score: row.get("home_score")?,
            away_score: row.get("away_score")?,
        })
    }
}

impl GameRepository for GameRepositoryImpl {
    fn get_games(&self) -> DatabaseResult<Vec<Game>> {
        let conn = get_connection(&self.pool)?;
        let mut stmt = conn
            .prepare(SELECT_GAMES)
            .map_err(|e| DatabaseError::QueryError(e))?;
        let game_iter = stmt
            .query_map([], Self::game_from_row)
            .map_err(|e| DatabaseError::QueryError(e))?;

        let mut games = Vec::new();
        for game in game_iter {
            games.push(game.map_err(|e| DatabaseError::QueryError(e))?);
        }
        Ok(games)
    }

    fn create_game(&self, game: &NewGame) -> DatabaseResult<i64> {
        let conn = get_connection(&self.pool)?;
        conn.execute(
            "INSERT INTO games (home_team_id, away_team_id, date, home_score, away_score) VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                game.home_team_id,
                game.away_team_id,
                game.date.timestamp(),
                game.home_score,
                game.away_score,
            ],
        )
        .map_err(|e| DatabaseError::QueryError(e))?;
        Ok(conn.last_insert_rowid())
    }

    fn count_games_for_team(&self, team_id: i64) -> DatabaseResult<u32> {
        let conn = get_connection(&self.pool)?;
        conn.query_row(
            "SELECT COUNT(*) FROM games WHERE home_team_id = ?1 OR away_team_id = ?1",
            [team_id],
            |row| row.get(0),
        )
        .map_err(|e| DatabaseError::QueryError(e))
    }
}

#[derive(Default)]
pub struct MockGameRepository {
    games: std::sync::Mutex<Vec<Game>>,
}

impl MockGameRepository {
    pub fn with_games(games: Vec<Game>) -> Self {
        Self {
            games: std::sync::Mutex::new(games),
        }
    }
}

impl GameRepository for MockGameRepository {
    fn get_games(&self) -> DatabaseResult<Vec<Game>> {
        Ok(self.games.lock().unwrap().clone())
    }

    fn create_game(&self, game: &NewGame) -> DatabaseResult<i64> {
        let mut games = self.games.lock().unwrap();
        let id = games.len() as i64 + 1;
        // the mock has no team table to resolve names from
        games.push(Game {
            id,
            home_team_id: game.home_team_id,
            away_team_id: game.away_team_id,
            home_team: String::new(),
            away_team: String::new(),
            date: game.date,
            home_score: game.home_score,
            away_score: game.away_score,
        });
        Ok(id)
    }

    fn count_games_for_team(&self, team_id: i64) -> DatabaseResult<u32> {
        Ok(self
            .games
            .lock()
            .unwrap()
            .iter()
            .filter(|game| game.home_team_id == team_id || game.away_team_id == team_id)
            .count() as u32)
    }
}
