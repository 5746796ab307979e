use std::collections::HashMap;

use indexmap::IndexMap;
use itertools::Itertools;

/// Current rating per team, owned by exactly one `EloModel` run.
///
/// Teams are created lazily: the first `get` for an unseen name inserts the
/// configured override for that team, or the population mean. Iteration
/// order is first-sight order, so snapshots are deterministic for a given
/// fixture stream. Not safe for concurrent mutation.
pub struct RatingTracker {
    ratings: IndexMap<String, f64>,
    initial_ratings: HashMap<String, f64>,
    mean_rating: f64
}

impl RatingTracker {
    pub fn new(mean_rating: f64, initial_ratings: HashMap<String, f64>) -> RatingTracker {
        RatingTracker {
            ratings: IndexMap::new(),
            initial_ratings,
            mean_rating
        }
    }

    /// Returns the team's current rating, inserting the first-sight value if
    /// the team is unseen.
    pub fn get(&mut self, team: &str) -> f64 {
        if let Some(rating) = self.ratings.get(team) {
            return *rating;
        }

        let seed = self.initial_ratings.get(team).copied().unwrap_or(self.mean_rating);
        self.ratings.insert(team.to_string(), seed);

        seed
    }

    /// Overwrites the team's rating unconditionally.
    pub fn set(&mut self, team: &str, rating: f64) {
        match self.ratings.get_mut(team) {
            Some(current) => *current = rating,
            None => {
                self.ratings.insert(team.to_string(), rating);
            }
        }
    }

    /// All current ratings, in first-sight order.
    pub fn snapshot(&self) -> &IndexMap<String, f64> {
        &self.ratings
    }

    /// All current ratings, best first.
    pub fn ladder(&self) -> Vec<(String, f64)> {
        self.ratings
            .iter()
            .map(|(team, rating)| (team.clone(), *rating))
            .sorted_by(|(_, a), (_, b)| b.partial_cmp(a).unwrap())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use approx::assert_abs_diff_eq;

    use crate::model::rating_tracker::RatingTracker;

    #[test]
    fn test_unseen_team_starts_at_the_mean() {
        let mut tracker = RatingTracker::new(1500.0, HashMap::new());

        assert_abs_diff_eq!(tracker.get("Fitzroy"), 1500.0);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_initial_rating_override_wins_over_mean() {
        let overrides = HashMap::from([("Collingwood".to_string(), 1580.0)]);
        let mut tracker = RatingTracker::new(1500.0, overrides);

        assert_abs_diff_eq!(tracker.get("Collingwood"), 1580.0);
        assert_abs_diff_eq!(tracker.get("Fitzroy"), 1500.0);
    }

    #[test]
    fn test_set_overwrites_unconditionally() {
        let mut tracker = RatingTracker::new(1500.0, HashMap::new());

        tracker.get("Fitzroy");
        tracker.set("Fitzroy", 1512.76);
        assert_abs_diff_eq!(tracker.get("Fitzroy"), 1512.76);

        // Also inserts for a team never fetched
        tracker.set("Carlton", 1487.24);
        assert_abs_diff_eq!(tracker.get("Carlton"), 1487.24);
    }

    #[test]
    fn test_snapshot_contains_only_seen_teams() {
        let overrides = HashMap::from([("Collingwood".to_string(), 1580.0)]);
        let mut tracker = RatingTracker::new(1500.0, overrides);

        tracker.get("Fitzroy");

        assert_eq!(tracker.snapshot().len(), 1);
        assert!(tracker.snapshot().contains_key("Fitzroy"));
    }

    #[test]
    fn test_ladder_sorts_best_first() {
        let mut tracker = RatingTracker::new(1500.0, HashMap::new());
        tracker.set("Fitzroy", 1512.0);
        tracker.set("Carlton", 1488.0);
        tracker.set("Essendon", 1530.0);

        let ladder = tracker.ladder();

        let names: Vec<&str> = ladder.iter().map(|(team, _)| team.as_str()).collect();
        assert_eq!(names, vec!["Essendon", "Fitzroy", "Carlton"]);
    }
}
