use crate::model::config::EloConfig;

/// Forecast probability of a home win from the two pre-match ratings.
///
/// The rating differential is shifted by the home-ground advantage, plus the
/// interstate term when the away side travelled, then mapped through a
/// logistic with scale `width`. Strictly inside (0, 1) for finite inputs; a
/// zero differential maps to exactly 0.5.
pub fn expected_result(home_rating: f64, away_rating: f64, is_interstate: bool, config: &EloConfig) -> f64 {
    let interstate_advantage = if is_interstate { config.interstate_advantage } else { 0.0 };
    let ratings_diff = home_rating - away_rating + config.home_advantage + interstate_advantage;

    1.0 / (1.0 + (-ratings_diff / config.width).exp())
}

/// Zero-sum rating transfer for one match: the home side gains this amount,
/// the away side loses it.
///
/// The step size is `k` decayed by `k_decay ^ round_number`, so with
/// `k_decay < 1` early-season results move ratings more than late-season
/// ones. `actual` is whatever the configured target column holds; any value
/// on the home-win scale works, not just {0, 0.5, 1}.
pub fn rating_delta(actual: f64, expected: f64, round_number: i64, config: &EloConfig) -> f64 {
    config.k * config.k_decay.powf(round_number as f64) * (actual - expected)
}
