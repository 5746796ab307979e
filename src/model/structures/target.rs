use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// The result column the engine reads as a match's actual outcome.
///
/// All three live on the same scale: 1.0 is a maximal home result, 0.0 a
/// maximal away result. The update rule is agnostic to which one is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// 1.0 home win, 0.5 draw, 0.0 home loss
    #[default]
    HomeWinDrawLoss,
    /// Home share of the total points scored
    HomePointsRatio,
    /// Points margin squashed onto (0, 1)
    HomeSquashedMargin
}

impl Target {
    /// Name of the fixture field carrying this target's value.
    pub fn column(&self) -> &'static str {
        match self {
            Target::HomeWinDrawLoss => "home_win_draw_loss",
            Target::HomePointsRatio => "home_points_ratio",
            Target::HomeSquashedMargin => "home_squashed_margin"
        }
    }
}
