fn main() {
    dotenvy::dotenv().ok();

    let schema_sql = "
        CREATE TABLE teams (id INTEGER PRIMARY KEY, name TEXT NOT NULL UNIQUE, wins INTEGER NOT NULL DEFAULT 0, losses INTEGER NOT NULL DEFAULT 0);
        CREATE TABLE players (id INTEGER PRIMARY KEY, name TEXT NOT NULL, team_id INTEGER NOT NULL REFERENCES teams(id), position TEXT NOT NULL DEFAULT '', points_per_game REAL NOT NULL DEFAULT 0, rebounds_per_game REAL NOT NULL DEFAULT 0, assists_per_game REAL NOT NULL DEFAULT 0, steals_per_game REAL NOT NULL DEFAULT 0, blocks_per_game REAL NOT NULL DEFAULT 0, field_goal_pct REAL NOT NULL DEFAULT 0, three_point_pct REAL NOT NULL DEFAULT 0);
        CREATE TABLE games (id INTEGER PRIMARY KEY, home_team_id INTEGER NOT NULL REFERENCES teams(id), away_team_id INTEGER NOT NULL REFERENCES teams(id), date INTEGER NOT NULL, home_score INTEGER, away_score INTEGER);
        CREATE TABLE users (id INTEGER PRIMARY KEY, username TEXT NOT NULL UNIQUE, password_hash TEXT NOT NULL, favorite_team TEXT);
    ";

    let db_path = std::env::var("HOOPS_DB").expect("HOOPS_DB env var not set");
    let parent = std::path::Path::new(&db_path)
        .parent()
        .expect("Failed to get parent directory of DB path");
    if !parent.as_os_str().is_empty() && !parent.exists() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory for DB");
        println!("Created parent directory for DB at {}", parent.display());
    }

    if std::path::Path::new(&db_path).exists() {
        std::fs::remove_file(&db_path).expect("Failed to remove existing DB");
        println!("Removed existing DB at {}", db_path);
    }

    let conn = rusqlite::Connection::open(&db_path).expect("Failed to open database");
    conn.execute_batch(schema_sql)
        .expect("Failed to create schema");

    println!("Created new DB at {}", db_path);
}
