use crate::{ArcPlayerRepository, ServiceResult, stats};

#[derive(Clone, Debug)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub team_id: i64,
    /// Short position code (PG, SG, SF, PF, C). Advisory only, the store
    /// does not validate it against a fixed set.
    pub position: String,
    pub points_per_game: f64,
    pub rebounds_per_game: f64,
    pub assists_per_game: f64,
    pub steals_per_game: f64,
    pub blocks_per_game: f64,
    pub field_goal_pct: f64,
    pub three_point_pct: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatCategory {
    Points,
    Rebounds,
    Assists,
    Steals,
    Blocks,
    FieldGoalPct,
    ThreePointPct,
}

impl StatCategory {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "points" => Some(Self::Points),
            "rebounds" => Some(Self::Rebounds),
            "assists" => Some(Self::Assists),
            "steals" => Some(Self::Steals),
            "blocks" => Some(Self::Blocks),
            "field_goal_pct" => Some(Self::FieldGoalPct),
            "three_point_pct" => Some(Self::ThreePointPct),
            _ => None,
        }
    }

    pub fn value_of(&self, player: &Player) -> f64 {
        match self {
            Self::Points => player.points_per_game,
            Self::Rebounds => player.rebounds_per_game,
            Self::Assists => player.assists_per_game,
            Self::Steals => player.steals_per_game,
            Self::Blocks => player.blocks_per_game,
            Self::FieldGoalPct => player.field_goal_pct,
            Self::ThreePointPct => player.three_point_pct,
        }
    }
}

pub trait PlayerService {
    /// All players, highest points per game first.
    fn get_players(&self) -> ServiceResult<Vec<Player>>;
    fn get_leaders(&self, stat: StatCategory, limit: usize) -> ServiceResult<Vec<Player>>;
}

pub struct PlayerServiceImpl {
    player_repository: ArcPlayerRepository,
}

impl PlayerServiceImpl {
    pub fn new(player_repository: ArcPlayerRepository) -> Self {
        Self { player_repository }
    }
}

impl PlayerService for PlayerServiceImpl {
    fn get_players(&self) -> ServiceResult<Vec<Player>> {
        let players = self.player_repository.get_players()?;
        let count = players.len();
        Ok(
            stats::leaders_by(&players, |player| player.points_per_game, count)
                .into_iter()
                .cloned()
                .collect(),
        )
    }

    fn get_leaders(&self, stat: StatCategory, limit: usize) -> ServiceResult<Vec<Player>> {
        let players = self.player_repository.get_players()?;
        Ok(
            stats::leaders_by(&players, |player| stat.value_of(player), limit)
                .into_iter()
                .cloned()
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::persistence::players::MockPlayerRepository;

    fn player(name: &str, points: f64, rebounds: f64) -> Player {
        Player {
            id: 0,
            name: name.to_string(),
            team_id: 1,
            position: "C".to_string(),
            points_per_game: points,
            rebounds_per_game: rebounds,
            assists_per_game: 0.0,
            steals_per_game: 0.0,
            blocks_per_game: 0.0,
            field_goal_pct: 0.0,
            three_point_pct: 0.0,
        }
    }

    fn service(players: Vec<Player>) -> PlayerServiceImpl {
        PlayerServiceImpl::new(Arc::new(Box::new(MockPlayerRepository::with_players(
            players,
        ))))
    }

    #[test]
    fn test_parse_stat_category() {
        assert_eq!(StatCategory::parse("points"), Some(StatCategory::Points));
        assert_eq!(
            StatCategory::parse("three_point_pct"),
            Some(StatCategory::ThreePointPct)
        );
        assert_eq!(StatCategory::parse("dunks"), None);
    }

    #[test]
    fn test_players_ordered_by_points() {
        let service = service(vec![
            player("Role Player", 10.0, 5.0),
            player("Star", 30.0, 5.0),
            player("Starter", 20.0, 5.0),
        ]);
        let players = service.get_players().unwrap();
        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Star", "Starter", "Role Player"]);
    }

    #[test]
    fn test_leaders_by_rebounds() {
        let service = service(vec![
            player("Guard", 25.0, 3.0),
            player("Center", 15.0, 12.0),
            player("Forward", 20.0, 8.0),
        ]);
        let leaders = service.get_leaders(StatCategory::Rebounds, 2).unwrap();
        let names: Vec<&str> = leaders.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Center", "Forward"]);
    }
}
