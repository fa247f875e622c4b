//! Pure aggregation over team/player/game snapshots. Nothing in here
//! touches the database or the clock; callers pass in the records and,
//! where relevant, the reference instant.

use chrono::{DateTime, Utc};
use std::cmp::Reverse;

use crate::{game::Game, team::Team};

/// Win percentage as used for ranking: wins / (wins + losses), rounded to
/// three decimal places. Defined as 0.0 for a team with no games played.
pub fn win_pct(wins: u32, losses: u32) -> f64 {
    let played = wins + losses;
    if played == 0 {
        return 0.0;
    }
    (wins as f64 / played as f64 * 1000.0).round() / 1000.0
}

#[derive(Clone, Debug, PartialEq)]
pub struct StandingsRow {
    pub rank: u32,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub win_pct: f64,
}

/// Rank teams by descending win percentage, rank numbers starting at 1.
/// The sort is stable, so teams with equal percentages keep their input
/// order.
pub fn standings(teams: &[Team]) -> Vec<StandingsRow> {
    let mut ranked: Vec<&Team> = teams.iter().collect();
    ranked.sort_by(|a, b| b.win_pct().total_cmp(&a.win_pct()));
    ranked
        .into_iter()
        .enumerate()
        .map(|(i, team)| StandingsRow {
            rank: i as u32 + 1,
            name: team.name.clone(),
            wins: team.wins,
            losses: team.losses,
            win_pct: team.win_pct(),
        })
        .collect()
}

/// Top `n` records by the given numeric key, descending, stable on ties.
/// Returns everything when `n` exceeds the population.
pub fn leaders_by<'a, T, F>(items: &'a [T], key: F, n: usize) -> Vec<&'a T>
where
    F: Fn(&T) -> f64,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| key(b).total_cmp(&key(a)));
    ranked.truncate(n);
    ranked
}

#[derive(Clone, Debug, Default)]
pub struct SchedulePartition {
    /// Games scheduled strictly before the reference instant, most recent
    /// first.
    pub recent: Vec<Game>,
    /// Games scheduled at or after the reference instant, soonest first.
    pub upcoming: Vec<Game>,
}

/// Split games into recent and upcoming relative to `reference`. The split
/// looks at the scheduled date only, never at the scores: a past game with
/// absent scores still lands in `recent`.
pub fn partition_games(games: Vec<Game>, reference: DateTime<Utc>) -> SchedulePartition {
    let mut partition = SchedulePartition::default();
    for game in games {
        if game.date < reference {
            partition.recent.push(game);
        } else {
            partition.upcoming.push(game);
        }
    }
    partition.recent.sort_by_key(|game| Reverse(game.date));
    partition.upcoming.sort_by_key(|game| game.date);
    partition
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoringAverages {
    pub home: f64,
    pub away: f64,
}

/// Mean home and away score over the played games in the given collection
/// (normally a recent partition). Games without a full score line are
/// skipped; `None` when nothing is left to average.
pub fn home_away_averages(games: &[Game]) -> Option<ScoringAverages> {
    let played: Vec<(u32, u32)> = games
        .iter()
        .filter_map(|game| game.home_score.zip(game.away_score))
        .collect();
    if played.is_empty() {
        return None;
    }
    let count = played.len() as f64;
    Some(ScoringAverages {
        home: played.iter().map(|(home, _)| *home as f64).sum::<f64>() / count,
        away: played.iter().map(|(_, away)| *away as f64).sum::<f64>() / count,
    })
}

/// Mean home score per home team over all scored games, highest first,
/// truncated to `n`. Teams that never recorded a home score are omitted.
pub fn home_scoring_by_team(games: &[Game], n: usize) -> Vec<(String, f64)> {
    // first-seen order keeps ties deterministic under the stable sort
    let mut totals: Vec<(String, u64, u32)> = Vec::new();
    for game in games {
        let Some(score) = game.home_score else {
            continue;
        };
        match totals.iter_mut().find(|(name, _, _)| name == &game.home_team) {
            Some(entry) => {
                entry.1 += score as u64;
                entry.2 += 1;
            }
            None => totals.push((game.home_team.clone(), score as u64, 1)),
        }
    }
    let mut means: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(name, sum, count)| (name, sum as f64 / count as f64))
        .collect();
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means.truncate(n);
    means
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn team(name: &str, wins: u32, losses: u32) -> Team {
        Team {
            id: 0,
            name: name.to_string(),
            wins,
            losses,
        }
    }

    fn game(
        home: &str,
        away: &str,
        date: DateTime<Utc>,
        scores: Option<(u32, u32)>,
    ) -> Game {
        Game {
            id: 0,
            home_team_id: 0,
            away_team_id: 0,
            home_team: home.to_string(),
            away_team: away.to_string(),
            date,
            home_score: scores.map(|(home_score, _)| home_score),
            away_score: scores.map(|(_, away_score)| away_score),
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_win_pct_rounding() {
        assert_eq!(win_pct(10, 0), 1.0);
        assert_eq!(win_pct(5, 5), 0.5);
        assert_eq!(win_pct(1, 2), 0.333);
        assert_eq!(win_pct(2, 1), 0.667);
    }

    #[test]
    fn test_win_pct_zero_games() {
        assert_eq!(win_pct(0, 0), 0.0);
    }

    #[test]
    fn test_standings_ranked() {
        let teams = vec![team("B", 5, 5), team("A", 10, 0)];
        let rows = standings(&teams);
        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            StandingsRow {
                rank: 1,
                name: "A".to_string(),
                wins: 10,
                losses: 0,
                win_pct: 1.0,
            }
        );
        assert_eq!(
            rows[1],
            StandingsRow {
                rank: 2,
                name: "B".to_string(),
                wins: 5,
                losses: 5,
                win_pct: 0.5,
            }
        );
    }

    #[test]
    fn test_standings_stable_on_ties() {
        let teams = vec![
            team("First", 4, 4),
            team("Second", 5, 5),
            team("Ahead", 6, 2),
        ];
        let rows = standings(&teams);
        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Ahead", "First", "Second"]);
    }

    #[test]
    fn test_standings_zero_game_team_sorts_last() {
        let teams = vec![team("Expansion", 0, 0), team("Contender", 1, 1)];
        let rows = standings(&teams);
        assert_eq!(rows[0].name, "Contender");
        assert_eq!(rows[1].name, "Expansion");
        assert_eq!(rows[1].win_pct, 0.0);
    }

    #[test]
    fn test_leaders_basic() {
        let values = vec![10.0, 30.0, 20.0];
        let top = leaders_by(&values, |value| *value, 2);
        assert_eq!(top, vec![&30.0, &20.0]);
    }

    #[test]
    fn test_leaders_n_exceeds_population() {
        let values = vec![10.0, 30.0, 20.0];
        let top = leaders_by(&values, |value| *value, 10);
        assert_eq!(top, vec![&30.0, &20.0, &10.0]);
    }

    #[test]
    fn test_leaders_stable_on_ties() {
        let values = vec![(1, 5.0), (2, 5.0), (3, 7.0)];
        let top = leaders_by(&values, |(_, value)| *value, 3);
        let ids: Vec<i32> = top.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_leaders_does_not_mutate_input() {
        let values = vec![10.0, 30.0, 20.0];
        let _ = leaders_by(&values, |value| *value, 1);
        assert_eq!(values, vec![10.0, 30.0, 20.0]);
    }

    #[test]
    fn test_partition_orders_and_splits() {
        let reference = now();
        let games = vec![
            game("A", "B", reference - Duration::days(2), Some((100, 95))),
            game("C", "D", reference - Duration::days(1), Some((110, 99))),
            game("E", "F", reference + Duration::days(1), None),
            game("G", "H", reference + Duration::days(3), None),
        ];
        let partition = partition_games(games, reference);
        assert_eq!(partition.recent.len(), 2);
        assert_eq!(partition.upcoming.len(), 2);
        // recent: most recent first
        assert_eq!(partition.recent[0].home_team, "C");
        assert_eq!(partition.recent[1].home_team, "A");
        // upcoming: soonest first
        assert_eq!(partition.upcoming[0].home_team, "E");
        assert_eq!(partition.upcoming[1].home_team, "G");
    }

    #[test]
    fn test_partition_boundary_is_upcoming() {
        let reference = now();
        let games = vec![game("A", "B", reference, None)];
        let partition = partition_games(games, reference);
        assert!(partition.recent.is_empty());
        assert_eq!(partition.upcoming.len(), 1);
    }

    #[test]
    fn test_partition_keeps_unscored_past_games() {
        let reference = now();
        let games = vec![game("A", "B", reference - Duration::days(1), None)];
        let partition = partition_games(games, reference);
        assert_eq!(partition.recent.len(), 1);
        assert!(partition.recent[0].home_score.is_none());
    }

    #[test]
    fn test_home_away_averages() {
        let reference = now();
        let games = vec![
            game("A", "B", reference, Some((100, 90))),
            game("C", "D", reference, Some((110, 100))),
        ];
        let averages = home_away_averages(&games).unwrap();
        assert_eq!(averages.home, 105.0);
        assert_eq!(averages.away, 95.0);
    }

    #[test]
    fn test_home_away_averages_skips_unscored() {
        let reference = now();
        let games = vec![
            game("A", "B", reference, Some((100, 90))),
            game("C", "D", reference, None),
        ];
        let averages = home_away_averages(&games).unwrap();
        assert_eq!(averages.home, 100.0);
        assert_eq!(averages.away, 90.0);
    }

    #[test]
    fn test_home_away_averages_empty_is_none() {
        assert!(home_away_averages(&[]).is_none());
        let unscored = vec![game("A", "B", now(), None)];
        assert!(home_away_averages(&unscored).is_none());
    }

    #[test]
    fn test_home_scoring_by_team() {
        let reference = now();
        let games = vec![
            game("A", "B", reference, Some((100, 90))),
            game("A", "C", reference, Some((110, 90))),
            game("B", "A", reference, Some((120, 90))),
            game("C", "A", reference, None),
        ];
        let top = home_scoring_by_team(&games, 5);
        assert_eq!(
            top,
            vec![("B".to_string(), 120.0), ("A".to_string(), 105.0)]
        );
    }

    #[test]
    fn test_home_scoring_by_team_truncates() {
        let reference = now();
        let games = vec![
            game("A", "X", reference, Some((90, 80))),
            game("B", "X", reference, Some((100, 80))),
            game("C", "X", reference, Some((110, 80))),
        ];
        let top = home_scoring_by_team(&games, 2);
        assert_eq!(
            top,
            vec![("C".to_string(), 110.0), ("B".to_string(), 100.0)]
        );
    }
}
