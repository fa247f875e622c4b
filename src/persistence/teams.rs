use crate::{
    DatabaseError,
    persistence::{DatabaseResult, DbPool, get_connection},
    team::Team,
};

pub trait TeamRepository {
    fn get_teams(&self) -> DatabaseResult<Vec<Team>>;
    fn get_team_by_name(&self, name: &str) -> DatabaseResult<Option<Team>>;
    fn create_team(&self, team: &Team) -> DatabaseResult<i64>;
    fn delete_team(&self, id: i64) -> DatabaseResult<()>;
}

pub struct TeamRepositoryImpl {
    pool: DbPool,
}

impl TeamRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn team_from_row(row: &rusqlite::Row) -> rusqlite::Result<Team> {
        Ok(Team {
            id: row.get("id")?,
            name: row.get("name")?,
            wins: row.get("wins")?,
            losses: row.get("losses")?,
        })
    }
}

impl TeamRepository for TeamRepositoryImpl {
    fn get_teams(&self) -> DatabaseResult<Vec<Team>> {
        let conn = get_connection(&self.pool)?;
        let mut stmt = conn
            .prepare("SELECT id, name, wins, losses FROM teams ORDER BY id")
            .map_err(|e| DatabaseError::QueryError(e))?;
        let team_iter = stmt
            .query_map([], Self::team_from_row)
            .map_err(|e| DatabaseError::QueryError(e))?;

        let mut teams = Vec::new();
        for team in team_iter {
            teams.push(team.map_err(|e| DatabaseError::QueryError(e))?);
        }
        Ok(teams)
    }

    fn get_team_by_name(&self, name: &str) -> DatabaseResult<Option<Team>> {
        let conn = get_connection(&self.pool)?;
        let team = conn.query_row(
            "SELECT id, name, wins, losses FROM teams WHERE name = ?1",
            [name],
            Self::team_from_row,
        );
        match team {
            Ok(team) => Ok(Some(team)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::QueryError(e)),
        }
    }

    fn create_team(&self, team: &Team) -> DatabaseResult<i64> {
        let conn = get_connection(&self.pool)?;
        // id is assigned by the database
        conn.execute(
            "INSERT INTO teams (name, wins, losses) VALUES (?1, ?2, ?3)",
            rusqlite::params![team.name, team.wins, team.losses],
        )
        .map_err(|e| DatabaseError::QueryError(e))?;
        Ok(conn.last_insert_rowid())
    }

    fn delete_team(&self, id: i64) -> DatabaseResult<()> {
        let conn = get_connection(&self.pool)?;
        conn.execute("DELETE FROM teams WHERE id = ?1", [id])
            .map_err(|e| DatabaseError::QueryError(e))?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MockTeamRepository {
    teams: std::sync::Mutex<Vec<Team>>,
}

impl MockTeamRepository {
    pub fn with_teams(teams: Vec<Team>) -> Self {
        Self {
            teams: std::sync::Mutex::new(teams),
        }
    }
}

impl TeamRepository for MockTeamRepository {
    fn get_teams(&self) -> DatabaseResult<Vec<Team>> {
        Ok(self.teams.lock().unwrap().clone())
    }

    fn get_team_by_name(&self, name: &str) -> DatabaseResult<Option<Team>> {
        Ok(self
            .teams
            .lock()
            .unwrap()
            .iter()
            .find(|team| team.name == name)
            .cloned())
    }

    fn create_team(&self, team: &Team) -> DatabaseResult<i64> {
        let mut teams = self.teams.lock().unwrap();
        let id = teams.len() as i64 + 1;
        let mut team = team.clone();
        team.id = id;
        teams.push(team);
        Ok(id)
    }

    fn delete_team(&self, id: i64) -> DatabaseResult<()> {
        self.teams.lock().unwrap().retain(|team| team.id != id);
        Ok(())
    }
}
