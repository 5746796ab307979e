// Default engine parameters. Runs override these through `EloConfig`;
// an external optimizer fits them by treating the engine as a black-box scorer.
pub const DEFAULT_K: f64 = 30.0;
pub const DEFAULT_HOME_ADVANTAGE: f64 = 20.0;
pub const DEFAULT_INTERSTATE_ADVANTAGE: f64 = 5.0;
// Logistic scale chosen so a 400-point gap maps to 10:1 odds, as in classic Elo
pub const DEFAULT_WIDTH: f64 = 400.0 / std::f64::consts::LN_10;
pub const DEFAULT_CARRYOVER: f64 = 0.75;
pub const DEFAULT_K_DECAY: f64 = 0.95;
pub const DEFAULT_MEAN_RATING: f64 = 1500.0;
// The season-local round that triggers the between-season crunch
pub const SEASON_OPENING_ROUND: i64 = 1;
