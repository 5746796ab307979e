use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::json;

use crate::model::structures::fixture::Fixture;

/// Builds a fixture carrying `actual` in the default target column.
pub fn generate_fixture(home_team: &str, away_team: &str, round_number: i64, is_interstate: bool, actual: f64) -> Fixture {
    let mut extra = IndexMap::new();
    extra.insert("home_win_draw_loss".to_string(), json!(actual));

    Fixture {
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        round_number,
        is_interstate,
        extra
    }
}

/// Builds `rounds` rounds of a season in which every team hosts the next one
/// in the list once per round. Results are seeded so runs are reproducible.
pub fn generate_season(teams: &[&str], rounds: i64, seed: u64) -> Vec<Fixture> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut fixtures = Vec::new();

    for round_number in 1..=rounds {
        for pair in teams.chunks(2) {
            if let [home_team, away_team] = pair {
                let actual = match rng.random_range(0..10) {
                    0 => 0.5,
                    n if n < 6 => 1.0,
                    _ => 0.0
                };

                fixtures.push(generate_fixture(home_team, away_team, round_number, false, actual));
            }
        }
    }

    fixtures
}

/// Concatenates several seasons of the same fixture list, re-starting the
/// round count at 1 each season so crunching kicks in at every boundary.
pub fn generate_seasons(teams: &[&str], rounds: i64, seasons: u64) -> Vec<Fixture> {
    let mut fixtures = Vec::new();

    for season in 0..seasons {
        fixtures.extend(generate_season(teams, rounds, season));
    }

    fixtures
}
