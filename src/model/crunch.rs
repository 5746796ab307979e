use crate::model::{config::EloConfig, constants::SEASON_OPENING_ROUND};

/// # How this works
/// - Ratings carry over between seasons, but only partially: at the start of
///     a new season every team is pulled `1 - carryover` of the way back to
///     the population mean.
/// - This stops a multi-season dynasty from permanently inflating its
///     baseline, and lifts perennial strugglers back toward the pack.
///
/// # Rules
/// - The trigger is `round_number == 1`, nothing else. Any fixture in the
///     opening round crunches both participants, and the crunched value is
///     persisted as their live rating by the processor.
/// - That means the very first round of a run is crunched too, even though
///     there is no prior season to regress from (a no-op while everyone still
///     sits at the mean, but visible for teams seeded via `initial_ratings`).
///     TODO: skip the crunch on the opening round of a run
pub fn crunch(rating: f64, round_number: i64, config: &EloConfig) -> f64 {
    if !is_season_opener(round_number) {
        return rating;
    }

    config.carryover * rating + (1.0 - config.carryover) * config.mean_rating
}

pub fn is_season_opener(round_number: i64) -> bool {
    round_number == SEASON_OPENING_ROUND
}
