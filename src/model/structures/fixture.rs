use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::structures::target::Target;

/// One match in the ordered input stream.
///
/// The engine reads only the four typed fields plus the configured target
/// column; everything else in `extra` is passed through to the output
/// untouched, in insertion order. `round_number` is season-local and carried
/// as `i64` so non-positive values can be rejected at processing time with a
/// schema error rather than silently truncated at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fixture {
    pub home_team: String,
    pub away_team: String,
    pub round_number: i64,
    pub is_interstate: bool,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>
}

impl Fixture {
    /// Raw value of the configured target column, if present.
    pub fn target_value(&self, target: Target) -> Option<&Value> {
        self.extra.get(target.column())
    }
}
