use chrono::Utc;
use hoopstats::{
    persistence::{
        games::{GameRepository, GameRepositoryImpl},
        open_pool,
        teams::{TeamRepository, TeamRepositoryImpl},
    },
    stats::{self, SchedulePartition, ScoringAverages},
    team::Team,
};
use plotters::prelude::*;
use plotters::style::FontTransform;

const CHART_WIDTH: u32 = 1280;
const CHART_HEIGHT: u32 = 720;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let db_path = std::env::var("HOOPS_DB").expect("HOOPS_DB env var not set");
    let out_dir =
        std::env::var("HOOPS_DASHBOARD_DIR").unwrap_or_else(|_| "dashboard".to_string());
    std::fs::create_dir_all(&out_dir)?;

    let pool = open_pool(&db_path);
    let teams = TeamRepositoryImpl::new(pool.clone()).get_teams()?;
    let games = GameRepositoryImpl::new(pool).get_games()?;

    print_standings(&teams);
    draw_win_loss_chart(&teams, &format!("{}/win_loss.png", out_dir))?;
    draw_top_teams_chart(&teams, &format!("{}/top_teams.png", out_dir))?;

    let top_home = stats::home_scoring_by_team(&games, 5);
    let partition = stats::partition_games(games, Utc::now());
    print_schedule(&partition);

    match stats::home_away_averages(&partition.recent) {
        Some(averages) => {
            draw_home_away_chart(averages, &format!("{}/home_away.png", out_dir))?;
        }
        None => println!("No games played yet, skipping home/away chart"),
    }

    print_top_home_scoring(&top_home);

    println!("Charts written to {}", out_dir);
    Ok(())
}

fn print_standings(teams: &[Team]) {
    println!("Current Standings");
    for row in stats::standings(teams) {
        println!(
            "{:>2}. {:<24} {:>3}-{:<3} {:.3}",
            row.rank, row.name, row.wins, row.losses, row.win_pct
        );
    }
    println!();
}

fn print_schedule(partition: &SchedulePartition) {
    println!("Recent Games");
    for game in partition.recent.iter().take(5) {
        let home_score = game
            .home_score
            .map_or("--".to_string(), |score| score.to_string());
        let away_score = game
            .away_score
            .map_or("--".to_string(), |score| score.to_string());
        println!(
            "{}: {} {} - {} {}",
            game.date.format("%Y-%m-%d"),
            game.home_team,
            home_score,
            away_score,
            game.away_team
        );
    }
    println!();
    println!("Upcoming Games");
    for game in partition.upcoming.iter().take(5) {
        println!(
            "{}: {} vs {}",
            game.date.format("%Y-%m-%d"),
            game.home_team,
            game.away_team
        );
    }
    println!();
}

fn print_top_home_scoring(top_home: &[(String, f64)]) {
    println!("Highest Scoring Teams (Home Games)");
    for (name, average) in top_home {
        println!("{:<24} {:.1}", name, average);
    }
}

fn draw_win_loss_chart(teams: &[Team], path: &str) -> Result<(), Box<dyn std::error::Error>> {
    if teams.is_empty() {
        println!("No teams to chart, skipping win-loss chart");
        return Ok(());
    }

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_games = teams
        .iter()
        .map(|team| team.wins.max(team.losses))
        .max()
        .unwrap_or(0);
    let y_max = (max_games as f64 * 1.15).ceil().max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Team Win-Loss Records", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(160)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..teams.len() as f64, 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(teams.len())
        .x_label_formatter(&|x| {
            teams
                .get(x.floor() as usize)
                .map(|team| team.name.clone())
                .unwrap_or_default()
        })
        .x_label_style(
            ("sans-serif", 13)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_desc("Games")
        .draw()?;

    chart
        .draw_series(teams.iter().enumerate().map(|(i, team)| {
            let x = i as f64;
            Rectangle::new([(x + 0.1, 0.0), (x + 0.45, team.wins as f64)], BLUE.filled())
        }))?
        .label("Wins")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BLUE.filled()));

    chart
        .draw_series(teams.iter().enumerate().map(|(i, team)| {
            let x = i as f64;
            Rectangle::new(
                [(x + 0.55, 0.0), (x + 0.9, team.losses as f64)],
                RED.filled(),
            )
        }))?
        .label("Losses")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], RED.filled()));

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()?;
    root.present()?;
    Ok(())
}

fn draw_top_teams_chart(teams: &[Team], path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let top = stats::leaders_by(teams, Team::win_pct, 5);
    if top.is_empty() {
        println!("No teams to chart, skipping top teams chart");
        return Ok(());
    }

    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Top 5 Teams - Win Percentage", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..top.len() as f64, 0f64..1f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(top.len())
        .x_label_formatter(&|x| {
            top.get(x.floor() as usize)
                .map(|team| team.name.clone())
                .unwrap_or_default()
        })
        .y_desc("Win Percentage")
        .draw()?;

    chart.draw_series(top.iter().enumerate().map(|(i, team)| {
        let x = i as f64;
        Rectangle::new([(x + 0.2, 0.0), (x + 0.8, team.win_pct())], BLUE.filled())
    }))?;

    root.present()?;
    Ok(())
}

fn draw_home_away_chart(
    averages: ScoringAverages,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = (averages.home.max(averages.away) * 1.15).ceil().max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption("Average Scoring by Home/Away Teams", ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..2f64, 0f64..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(2)
        .x_label_formatter(&|x| {
            if *x < 1.0 {
                "Home".to_string()
            } else {
                "Away".to_string()
            }
        })
        .y_desc("Average Score")
        .draw()?;

    chart.draw_series([
        Rectangle::new([(0.25, 0.0), (0.75, averages.home)], BLUE.filled()),
        Rectangle::new([(1.25, 0.0), (1.75, averages.away)], GREEN.filled()),
    ])?;

    root.present()?;
    Ok(())
}
