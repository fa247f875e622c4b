use rusqlite::ToSql;

use crate::{
    DatabaseError,
    persistence::{DatabaseResult, DbPool, get_connection, to_sql_option, update_entry},
    user::User,
};

#[derive(Clone, Default)]
pub struct UserUpdate {
    pub password_hash: Option<String>,
    pub favorite_team: Option<String>,
}

pub trait UserRepository {
    fn get_user_by_name(&self, username: &str) -> DatabaseResult<Option<User>>;
    fn create_user(&self, user: &User) -> DatabaseResult<i64>;
    fn update_user(&self, id: i64, update: &UserUpdate) -> DatabaseResult<()>;
}

pub struct UserRepositoryImpl {
    pool: DbPool,
}

impl UserRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn user_from_row(row: &rusqlite::Row) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get("id")?,
            username: row.get("username")?,
            password_hash: row.get("password_hash")?,
            favorite_team: row.get("favorite_team")?,
        })
    }
}

impl UserRepository for UserRepositoryImpl {
    fn get_user_by_name(&self, username: &str) -> DatabaseResult<Option<User>> {
        let conn = get_connection(&self.pool)?;
        let user = conn.query_row(
            "SELECT id, username, password_hash, favorite_team FROM users WHERE username = ?1",
            [username],
            Self::user_from_row,
        );
        match user {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(DatabaseError::QueryError(e)),
        }
    }

    fn create_user(&self, user: &User) -> DatabaseResult<i64> {
        let conn = get_connection(&self.pool)?;
        conn.execute(
            "INSERT INTO users (username, password_hash, favorite_team) VALUES (?1, ?2, ?3)",
            rusqlite::params![user.username, user.password_hash, user.favorite_team],
        )
        .map_err(|e| DatabaseError::QueryError(e))?;
        Ok(conn.last_insert_rowid())
    }

    fn update_user(&self, id: i64, update: &UserUpdate) -> DatabaseResult<()> {
        let value_pairs: Vec<(&'static str, Option<&dyn ToSql>)> = vec![
            ("password_hash", to_sql_option(&update.password_hash)),
            ("favorite_team", to_sql_option(&update.favorite_team)),
        ];
        update_entry(&self.pool, "users", ("id", &id), value_pairs)
    }
}

#[derive(Default)]
pub struct MockUserRepository {
    users: std::sync::Mutex<Vec<User>>,
}

impl UserRepository for MockUserRepository {
    fn get_user_by_name(&self, username: &str) -> DatabaseResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    fn create_user(&self, user: &User) -> DatabaseResult<i64> {
        let mut users = self.users.lock().unwrap();
        let id = users.len() as i64 + 1;
        let mut user = user.clone();
        user.id = id;
        users.push(user);
        Ok(id)
    }

    fn update_user(&self, id: i64, update: &UserUpdate) -> DatabaseResult<()> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|user| user.id == id) {
            if let Some(password_hash) = &update.password_hash {
                user.password_hash = password_hash.clone();
            }
            if let Some(favorite_team) = &update.favorite_team {
                user.favorite_team = Some(favorite_team.clone());
            }
        }
        Ok(())
    }
}
