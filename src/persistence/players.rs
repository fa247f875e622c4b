use crate::{
    DatabaseError,
    persistence::{DatabaseResult, DbPool, get_connection},
    player::Player,
};

pub trait PlayerRepository {
    fn get_players(&self) -> DatabaseResult<Vec<Player>>;
    fn get_players_by_team(&self, team_id: i64) -> DatabaseResult<Vec<Player>>;
    fn create_player(&self, player: &Player) -> DatabaseResult<i64>;
    fn count_players_by_team(&self, team_id: i64) -> DatabaseResult<u32>;
}

pub struct PlayerRepositoryImpl {
    pool: DbPool,
}

impl PlayerRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn player_from_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
        Ok(Player {
            id: row.get("id")?,
            name: row.get("name")?,
            team_id: row.get("team_id")?,
            position: row.get("position")?,
            points_per_game: row.get("points_per_game")?,
            rebounds_per_game: row.get("rebounds_per_game")?,
            assists_per_game: row.get("assists_per_game")?,
            steals_per_game: row.get("steals_per_game")?,
            blocks_per_game: row.get("blocks_per_game")?,
            field_goal_pct: row.get("field_goal_pct")?,
            three_point_pct: row.get("three_point_pct")?,
        })
    }

    fn query_players(&self, query: &str, params: &[&dyn rusqlite::ToSql]) -> DatabaseResult<Vec<Player>> {
        let conn = get_connection(&self.pool)?;
        let mut stmt = conn
            .prepare(query)
            .map_err(|e| DatabaseError::QueryError(e))?;
        let player_iter = stmt
            .query_map(params, Self::player_from_row)
            .map_err(|e| DatabaseError::QueryError(e))?;

        let mut players = Vec::new();
        for player in player_iter {
            players.push(player.map_err(|e| DatabaseError::QueryError(e))?);
        }
        Ok(players)
    }
}

impl PlayerRepository for PlayerRepositoryImpl {
    fn get_players(&self) -> DatabaseResult<Vec<Player>> {
        self.query_players("SELECT * FROM players ORDER BY id", &[])
    }

    fn get_players_by_team(&self, team_id: i64) -> DatabaseResult<Vec<Player>> {
        self.query_players(
            "SELECT * FROM players WHERE team_id = ?1 ORDER BY id",
            &[&team_id],
        )
    }

    fn create_player(&self, player: &Player) -> DatabaseResult<i64> {
        let conn = get_connection(&self.pool)?;
        conn.execute(
            "INSERT INTO players (name, team_id, position, points_per_game, rebounds_per_game, assists_per_game, steals_per_game, blocks_per_game, field_goal_pct, three_point_pct) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            rusqlite::params![
                player.name,
                player.team_id,
                player.position,
                player.points_per_game,
                player.rebounds_per_game,
                player.assists_per_game,
                player.steals_per_game,
                player.blocks_per_game,
                player.field_goal_pct,
                player.three_point_pct,
            ],
        )
        .map_err(|e| DatabaseError::QueryError(e))?;
        Ok(conn.last_insert_rowid())
    }

    fn count_players_by_team(&self, team_id: i64) -> DatabaseResult<u32> {
        let conn = get_connection(&self.pool)?;
        conn.query_row(
            "SELECT COUNT(*) FROM players WHERE team_id = ?1",
            [team_id],
            |row| row.get(0),
        )
        .map_err(|e| DatabaseError::QueryError(e))
    }
}

#[derive(Default)]
pub struct MockPlayerRepository {
    players: std::sync::Mutex<Vec<Player>>,
}

impl MockPlayerRepository {
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players: std::sync::Mutex::new(players),
        }
    }
}

impl PlayerRepository for MockPlayerRepository {
    fn get_players(&self) -> DatabaseResult<Vec<Player>> {
        Ok(self.players.lock().unwrap().clone())
    }

    fn get_players_by_team(&self, team_id: i64) -> DatabaseResult<Vec<Player>> {
        Ok(self
            .players
            .lock()
            .unwrap()
            .iter()
            .filter(|player| player.team_id == team_id)
            .cloned()
            .collect())
    }

    fn create_player(&self, player: &Player) -> DatabaseResult<i64> {
        let mut players = self.players.lock().unwrap();
        let id = players.len() as i64 + 1;
        let mut player = player.clone();
        player.id = id;
        players.push(player);
        Ok(id)
    }

    fn count_players_by_team(&self, team_id: i64) -> DatabaseResult<u32> {
        Ok(self.get_players_by_team(team_id)?.len() as u32)
    }
}
