use crate::{
    ArcGameRepository, ArcPlayerRepository, ArcTeamRepository, ServiceError, ServiceResult,
    player::Player,
    stats::{self, StandingsRow},
};

pub type TeamName = String;

#[derive(Clone, Debug)]
pub struct Team {
    pub id: i64,
    pub name: TeamName,
    pub wins: u32,
    pub losses: u32,
}

impl Team {
    pub fn win_pct(&self) -> f64 {
        stats::win_pct(self.wins, self.losses)
    }
}

pub trait TeamService {
    fn get_teams(&self) -> ServiceResult<Vec<Team>>;
    fn get_standings(&self) -> ServiceResult<Vec<StandingsRow>>;
    fn get_top_teams(&self, limit: usize) -> ServiceResult<Vec<(TeamName, f64)>>;
    fn get_roster(&self, team_name: &str) -> ServiceResult<Vec<Player>>;
    fn delete_team(&self, team_name: &str) -> ServiceResult<()>;
}

pub struct TeamServiceImpl {
    team_repository: ArcTeamRepository,
    player_repository: ArcPlayerRepository,
    game_repository: ArcGameRepository,
}

impl TeamServiceImpl {
    pub fn new(
        team_repository: ArcTeamRepository,
        player_repository: ArcPlayerRepository,
        game_repository: ArcGameRepository,
    ) -> Self {
        Self {
            team_repository,
            player_repository,
            game_repository,
        }
    }

    fn fetch_team(&self, team_name: &str) -> ServiceResult<Team> {
        match self.team_repository.get_team_by_name(team_name)? {
            Some(team) => Ok(team),
            None => ServiceError::not_found(format!("Team '{}' not found", team_name)),
        }
    }
}

impl TeamService for TeamServiceImpl {
    fn get_teams(&self) -> ServiceResult<Vec<Team>> {
        Ok(self.team_repository.get_teams()?)
    }

    fn get_standings(&self) -> ServiceResult<Vec<StandingsRow>> {
        let teams = self.team_repository.get_teams()?;
        Ok(stats::standings(&teams))
    }

    fn get_top_teams(&self, limit: usize) -> ServiceResult<Vec<(TeamName, f64)>> {
        let teams = self.team_repository.get_teams()?;
        Ok(stats::leaders_by(&teams, Team::win_pct, limit)
            .into_iter()
            .map(|team| (team.name.clone(), team.win_pct()))
            .collect())
    }

    fn get_roster(&self, team_name: &str) -> ServiceResult<Vec<Player>> {
        let team = self.fetch_team(team_name)?;
        Ok(self.player_repository.get_players_by_team(team.id)?)
    }

    // Roster rows belong to their team, so a delete is refused while any
    // players or games still reference it.
    fn delete_team(&self, team_name: &str) -> ServiceResult<()> {
        let team = self.fetch_team(team_name)?;
        let roster_size = self.player_repository.count_players_by_team(team.id)?;
        if roster_size > 0 {
            return ServiceError::not_possible(format!(
                "Team '{}' still has {} rostered players",
                team_name, roster_size
            ));
        }
        let game_count = self.game_repository.count_games_for_team(team.id)?;
        if game_count > 0 {
            return ServiceError::not_possible(format!(
                "Team '{}' is referenced by {} scheduled or played games",
                team_name, game_count
            ));
        }
        self.team_repository.delete_team(team.id)?;
        log::info!("Deleted team {}", team_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::persistence::{
        games::MockGameRepository, players::MockPlayerRepository, teams::MockTeamRepository,
    };

    fn team(name: &str, wins: u32, losses: u32) -> Team {
        Team {
            id: 0,
            name: name.to_string(),
            wins,
            losses,
        }
    }

    fn player(name: &str, team_id: i64) -> Player {
        Player {
            id: 0,
            name: name.to_string(),
            team_id,
            position: "PG".to_string(),
            points_per_game: 0.0,
            rebounds_per_game: 0.0,
            assists_per_game: 0.0,
            steals_per_game: 0.0,
            blocks_per_game: 0.0,
            field_goal_pct: 0.0,
            three_point_pct: 0.0,
        }
    }

    fn service(teams: Vec<Team>, players: Vec<Player>) -> TeamServiceImpl {
        TeamServiceImpl::new(
            Arc::new(Box::new(MockTeamRepository::with_teams(teams))),
            Arc::new(Box::new(MockPlayerRepository::with_players(players))),
            Arc::new(Box::new(MockGameRepository::default())),
        )
    }

    #[test]
    fn test_standings_through_service() {
        let service = service(vec![team("B", 5, 5), team("A", 10, 0)], vec![]);
        let rows = service.get_standings().unwrap();
        assert_eq!(rows[0].name, "A");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].name, "B");
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn test_top_teams_limit() {
        let service = service(
            vec![team("A", 1, 9), team("B", 9, 1), team("C", 5, 5)],
            vec![],
        );
        let top = service.get_top_teams(2).unwrap();
        assert_eq!(
            top,
            vec![("B".to_string(), 0.9), ("C".to_string(), 0.5)]
        );
    }

    #[test]
    fn test_roster_of_unknown_team() {
        let service = service(vec![], vec![]);
        let result = service.get_roster("Nowhere");
        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }

    #[test]
    fn test_delete_team_rejected_while_roster_nonempty() {
        let mut roster_team = team("Boston Celtics", 64, 18);
        roster_team.id = 1;
        let service = service(vec![roster_team], vec![player("Jayson Tatum", 1)]);
        let result = service.delete_team("Boston Celtics");
        assert!(matches!(result, Err(ServiceError::NotPossible(_))));
    }

    #[test]
    fn test_delete_team_with_empty_roster() {
        let mut empty_team = team("Seattle", 0, 0);
        empty_team.id = 1;
        let service = service(vec![empty_team], vec![]);
        assert!(service.delete_team("Seattle").is_ok());
        assert!(service.get_teams().unwrap().is_empty());
    }
}
