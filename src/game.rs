use chrono::{DateTime, Utc};

use crate::{
    ArcGameRepository, ServiceResult,
    stats::{self, SchedulePartition, ScoringAverages},
    team::TeamName,
};

pub type GameId = i64;

#[derive(Clone, Debug)]
pub struct Game {
    pub id: GameId,
    pub home_team_id: i64,
    pub away_team_id: i64,
    /// Team names resolved from the referenced rows at read time, so the
    /// aggregation and presentation layers never chase ids themselves.
    pub home_team: TeamName,
    pub away_team: TeamName,
    pub date: DateTime<Utc>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
}

impl Game {
    /// A game counts as played once both scores are recorded.
    pub fn is_played(&self) -> bool {
        self.home_score.is_some() && self.away_score.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct NewGame {
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub date: DateTime<Utc>,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ScoringReport {
    /// Mean home/away scores over the recent partition, absent when no
    /// recent game has a score line yet.
    pub averages: Option<ScoringAverages>,
    pub top_home_teams: Vec<(TeamName, f64)>,
}

pub trait GameService {
    fn get_schedule(&self, reference: DateTime<Utc>) -> ServiceResult<SchedulePartition>;
    fn get_scoring_report(&self, reference: DateTime<Utc>) -> ServiceResult<ScoringReport>;
}

const TOP_SCORING_TEAMS: usize = 5;

pub struct GameServiceImpl {
    game_repository: ArcGameRepository,
}

impl GameServiceImpl {
    pub fn new(game_repository: ArcGameRepository) -> Self {
        Self { game_repository }
    }
}

impl GameService for GameServiceImpl {
    fn get_schedule(&self, reference: DateTime<Utc>) -> ServiceResult<SchedulePartition> {
        let games = self.game_repository.get_games()?;
        Ok(stats::partition_games(games, reference))
    }

    fn get_scoring_report(&self, reference: DateTime<Utc>) -> ServiceResult<ScoringReport> {
        let games = self.game_repository.get_games()?;
        let top_home_teams = stats::home_scoring_by_team(&games, TOP_SCORING_TEAMS);
        let partition = stats::partition_games(games, reference);
        Ok(ScoringReport {
            averages: stats::home_away_averages(&partition.recent),
            top_home_teams,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Duration;

    use super::*;
    use crate::persistence::games::MockGameRepository;

    fn game(home: &str, date: DateTime<Utc>, scores: Option<(u32, u32)>) -> Game {
        Game {
            id: 0,
            home_team_id: 0,
            away_team_id: 0,
            home_team: home.to_string(),
            away_team: "Visitors".to_string(),
            date,
            home_score: scores.map(|(home_score, _)| home_score),
            away_score: scores.map(|(_, away_score)| away_score),
        }
    }

    fn service(games: Vec<Game>) -> GameServiceImpl {
        GameServiceImpl::new(Arc::new(Box::new(MockGameRepository::with_games(games))))
    }

    #[test]
    fn test_schedule_partition_through_service() {
        let reference = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let service = service(vec![
            game("Hosts", reference - Duration::days(1), Some((101, 99))),
            game("Hosts", reference + Duration::days(1), None),
        ]);
        let partition = service.get_schedule(reference).unwrap();
        assert_eq!(partition.recent.len(), 1);
        assert_eq!(partition.upcoming.len(), 1);
        assert!(partition.recent[0].is_played());
        assert!(!partition.upcoming[0].is_played());
    }

    #[test]
    fn test_scoring_report() {
        let reference = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let service = service(vec![
            game("Hosts", reference - Duration::days(2), Some((100, 90))),
            game("Hosts", reference - Duration::days(1), Some((110, 100))),
            game("Hosts", reference + Duration::days(1), None),
        ]);
        let report = service.get_scoring_report(reference).unwrap();
        let averages = report.averages.unwrap();
        assert_eq!(averages.home, 105.0);
        assert_eq!(averages.away, 95.0);
        assert_eq!(report.top_home_teams, vec![("Hosts".to_string(), 105.0)]);
    }

    #[test]
    fn test_scoring_report_without_games() {
        let service = service(vec![]);
        let reference = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let report = service.get_scoring_report(reference).unwrap();
        assert!(report.averages.is_none());
        assert!(report.top_home_teams.is_empty());
    }
}
