use std::collections::HashMap;

use chrono::{Duration, Utc};
use hoopstats::{
    game::NewGame,
    persistence::{
        games::{GameRepository, GameRepositoryImpl},
        open_pool,
        players::{PlayerRepository, PlayerRepositoryImpl},
        teams::{TeamRepository, TeamRepositoryImpl},
        users::{UserRepository, UserRepositoryImpl},
    },
    player::Player,
    team::Team,
    user::User,
};

const TEAMS: [(&str, u32, u32); 16] = [
    ("Boston Celtics", 64, 18),
    ("Milwaukee Bucks", 49, 33),
    ("New York Knicks", 50, 32),
    ("Cleveland Cavaliers", 48, 34),
    ("Orlando Magic", 47, 35),
    ("Miami Heat", 46, 36),
    ("Philadelphia 76ers", 47, 35),
    ("Indiana Pacers", 47, 35),
    ("Denver Nuggets", 57, 25),
    ("Minnesota Timberwolves", 56, 26),
    ("Oklahoma City Thunder", 57, 25),
    ("Los Angeles Clippers", 51, 31),
    ("Phoenix Suns", 49, 33),
    ("New Orleans Pelicans", 49, 33),
    ("Los Angeles Lakers", 47, 35),
    ("Golden State Warriors", 46, 36),
];

#[rustfmt::skip]
const PLAYERS: [(&str, &str, &str, f64, f64, f64, f64, f64, f64, f64); 18] = [
    ("Jayson Tatum", "Boston Celtics", "SF", 27.6, 8.6, 4.8, 1.0, 0.7, 47.1, 35.3),
    ("Jaylen Brown", "Boston Celtics", "SG", 23.1, 5.6, 3.7, 1.2, 0.3, 49.2, 35.7),
    ("Giannis Antetokounmpo", "Milwaukee Bucks", "PF", 30.4, 11.5, 6.5, 1.2, 1.0, 61.1, 27.5),
    ("Damian Lillard", "Milwaukee Bucks", "PG", 24.7, 4.4, 7.0, 1.0, 0.2, 42.1, 35.4),
    ("Jalen Brunson", "New York Knicks", "PG", 28.7, 3.6, 6.7, 0.9, 0.2, 47.9, 40.1),
    ("OG Anunoby", "New York Knicks", "SF", 14.6, 4.4, 2.3, 1.3, 0.7, 49.8, 37.9),
    ("LeBron James", "Los Angeles Lakers", "SF", 25.4, 7.2, 8.1, 1.2, 0.5, 54.0, 38.7),
    ("Anthony Davis", "Los Angeles Lakers", "PF", 24.7, 12.6, 3.5, 1.2, 2.3, 55.6, 27.3),
    ("Stephen Curry", "Golden State Warriors", "PG", 26.8, 4.2, 4.9, 0.8, 0.2, 45.3, 40.1),
    ("Klay Thompson", "Golden State Warriors", "SG", 17.9, 3.3, 2.4, 0.7, 0.2, 43.2, 38.7),
    ("Nikola Jokic", "Denver Nuggets", "C", 26.1, 12.3, 9.0, 1.3, 0.9, 58.3, 35.9),
    ("Jamal Murray", "Denver Nuggets", "PG", 21.2, 4.0, 6.5, 1.0, 0.3, 48.1, 42.5),
    ("Devin Booker", "Phoenix Suns", "SG", 27.1, 4.5, 6.9, 1.0, 0.3, 49.8, 36.4),
    ("Kevin Durant", "Phoenix Suns", "SF", 28.3, 6.7, 5.1, 0.7, 1.2, 52.7, 41.2),
    ("Shai Gilgeous-Alexander", "Oklahoma City Thunder", "PG", 30.1, 5.5, 6.2, 2.0, 0.8, 54.0, 32.1),
    ("Chet Holmgren", "Oklahoma City Thunder", "C", 16.6, 7.9, 2.5, 0.8, 2.3, 53.4, 37.2),
    ("Anthony Edwards", "Minnesota Timberwolves", "SG", 26.0, 5.6, 5.1, 1.3, 0.6, 46.2, 35.3),
    ("Karl-Anthony Towns", "Minnesota Timberwolves", "C", 22.1, 8.4, 3.0, 0.8, 0.6, 50.7, 42.3),
];

fn main() {
    dotenvy::dotenv().ok();

    let db_path = std::env::var("HOOPS_DB").expect("HOOPS_DB env var not set");
    let pool = open_pool(&db_path);
    let team_repo = TeamRepositoryImpl::new(pool.clone());
    let player_repo = PlayerRepositoryImpl::new(pool.clone());
    let game_repo = GameRepositoryImpl::new(pool.clone());
    let user_repo = UserRepositoryImpl::new(pool);

    let mut team_ids: HashMap<&str, i64> = HashMap::new();
    for &(name, wins, losses) in TEAMS.iter() {
        let id = team_repo
            .create_team(&Team {
                id: 0,
                name: name.to_string(),
                wins,
                losses,
            })
            .expect("Failed to insert team");
        team_ids.insert(name, id);
    }
    println!("Seeded {} teams", team_ids.len());

    for &(name, team_name, position, ppg, rpg, apg, spg, bpg, fgp, tpp) in PLAYERS.iter() {
        player_repo
            .create_player(&Player {
                id: 0,
                name: name.to_string(),
                team_id: team_ids[team_name],
                position: position.to_string(),
                points_per_game: ppg,
                rebounds_per_game: rpg,
                assists_per_game: apg,
                steals_per_game: spg,
                blocks_per_game: bpg,
                field_goal_pct: fgp,
                three_point_pct: tpp,
            })
            .expect("Failed to insert player");
    }
    println!("Seeded {} players", PLAYERS.len());

    let start = Utc::now();

    // ten played games leading up to today
    for i in 0..10usize {
        let home = TEAMS[i % TEAMS.len()].0;
        let away = TEAMS[(i + 1) % TEAMS.len()].0;
        game_repo
            .create_game(&NewGame {
                home_team_id: team_ids[home],
                away_team_id: team_ids[away],
                date: start - Duration::days(i as i64 + 1),
                home_score: Some(100 + (i as u32 % 20)),
                away_score: Some(95 + ((i as u32 + 5) % 25)),
            })
            .expect("Failed to insert game");
    }

    // ten upcoming games without scores
    for i in 0..10usize {
        let home = TEAMS[(i + 5) % TEAMS.len()].0;
        let away = TEAMS[(i + 6) % TEAMS.len()].0;
        game_repo
            .create_game(&NewGame {
                home_team_id: team_ids[home],
                away_team_id: team_ids[away],
                date: start + Duration::days(i as i64 + 1),
                home_score: None,
                away_score: None,
            })
            .expect("Failed to insert game");
    }
    println!("Seeded 20 games");

    let password_hash = bcrypt::hash("letmein", bcrypt::DEFAULT_COST).expect("Failed to hash password");
    user_repo
        .create_user(&User {
            id: 0,
            username: "demo".to_string(),
            password_hash,
            favorite_team: Some("Boston Celtics".to_string()),
        })
        .expect("Failed to create user");
    println!("Created user [demo] with password [letmein]");

    println!("Database seeded with teams, players, and games data");
}
