use crate::{
    model::{
        config::EloConfig,
        crunch::{crunch, is_season_opener},
        error::ProcessorError,
        rating_tracker::RatingTracker,
        rating_utils::{expected_result, rating_delta},
        structures::{
            fixture::Fixture,
            processing::{ProcessedFixture, ProcessingResult}
        }
    },
    utils::progress_utils::progress_bar
};

/// The fixture processor: drives the rating components match-by-match over
/// the ordered input stream.
///
/// Each run owns its `RatingTracker`; correctness depends entirely on the
/// caller supplying fixtures in chronological order, which the engine cannot
/// verify (see `ProcessorError`). Processing is strictly sequential because
/// a team may reappear in the very next fixture.
pub struct EloModel {
    pub config: EloConfig,
    pub rating_tracker: RatingTracker
}

impl EloModel {
    /// Validates the configuration and prepares an empty rating store.
    pub fn new(config: EloConfig) -> Result<EloModel, ProcessorError> {
        config.validate()?;

        let rating_tracker = RatingTracker::new(config.mean_rating, config.initial_ratings.clone());

        Ok(EloModel { config, rating_tracker })
    }

    /// # Fixture Processing
    ///
    /// Processes the ordered stream, one fixture at a time. The first schema
    /// violation aborts the run with the offending fixture's position and
    /// field; nothing already processed is returned.
    ///
    /// Steps, per fixture:
    /// 1. Validate the round number and the configured target value.
    /// 2. Fetch both ratings, creating unseen teams at their first-sight value.
    /// 3. Crunch both ratings if this is an opening-round fixture, and
    ///     persist the crunched values immediately so later fixtures see them.
    /// 4. Forecast the result from the (possibly crunched) ratings.
    /// 5. Transfer `rating_delta` from the away side to the home side.
    /// 6. Emit the fixture augmented with both pre-match ratings and the
    ///     forecast.
    pub fn process(&mut self, fixtures: &[Fixture]) -> Result<ProcessingResult, ProcessorError> {
        let bar = progress_bar(fixtures.len() as u64, "Processing fixtures".to_string());
        let mut records = Vec::with_capacity(fixtures.len());

        for (index, fixture) in fixtures.iter().enumerate() {
            records.push(self.process_fixture(index, fixture)?);
            bar.inc(1);
        }

        bar.finish_and_clear();

        Ok(ProcessingResult::new(records, self.rating_tracker.snapshot().clone()))
    }

    fn process_fixture(&mut self, index: usize, fixture: &Fixture) -> Result<ProcessedFixture, ProcessorError> {
        let actual = self.validate_fixture(index, fixture)?;
        let round_number = fixture.round_number;

        let mut home_pre = self.rating_tracker.get(&fixture.home_team);
        let mut away_pre = self.rating_tracker.get(&fixture.away_team);

        if is_season_opener(round_number) {
            // The crunched values become the live ratings, not just this
            // match's inputs
            home_pre = crunch(home_pre, round_number, &self.config);
            away_pre = crunch(away_pre, round_number, &self.config);
            self.rating_tracker.set(&fixture.home_team, home_pre);
            self.rating_tracker.set(&fixture.away_team, away_pre);
        }

        let expected = expected_result(home_pre, away_pre, fixture.is_interstate, &self.config);
        let delta = rating_delta(actual, expected, round_number, &self.config);

        self.rating_tracker.set(&fixture.home_team, home_pre + delta);
        self.rating_tracker.set(&fixture.away_team, away_pre - delta);

        Ok(ProcessedFixture {
            fixture: fixture.clone(),
            home_rating_pre: home_pre,
            away_rating_pre: away_pre,
            expected_result: expected
        })
    }

    /// Checks the per-fixture schema and returns the actual result value.
    fn validate_fixture(&self, index: usize, fixture: &Fixture) -> Result<f64, ProcessorError> {
        if fixture.home_team.is_empty() {
            return Err(ProcessorError::schema(index, "home_team", "must not be empty"));
        }

        if fixture.away_team.is_empty() {
            return Err(ProcessorError::schema(index, "away_team", "must not be empty"));
        }

        if fixture.round_number < 1 {
            return Err(ProcessorError::schema(
                index,
                "round_number",
                format!("must be a positive integer, got {}", fixture.round_number)
            ));
        }

        let column = self.config.target.column();
        let value = fixture
            .target_value(self.config.target)
            .ok_or_else(|| ProcessorError::schema(index, column, "is missing"))?;

        value
            .as_f64()
            .ok_or_else(|| ProcessorError::schema(index, column, format!("must be numeric, got {value}")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use approx::assert_abs_diff_eq;
    use serde_json::json;

    use crate::{
        model::{config::EloConfig, elo_model::EloModel, error::ProcessorError, structures::target::Target},
        utils::test_utils::generate_fixture
    };

    fn model() -> EloModel {
        EloModel::new(EloConfig::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = EloConfig {
            carryover: 1.5,
            ..Default::default()
        };

        assert!(matches!(EloModel::new(config), Err(ProcessorError::Configuration(_))));
    }

    #[test]
    fn test_round_two_home_win_between_equal_teams() {
        // A (1500) hosts B (1500) in round 2 and wins
        let mut model = model();
        let fixtures = vec![generate_fixture("A", "B", 2, false, 1.0)];

        let result = model.process(&fixtures).unwrap();
        let record = &result.records()[0];

        assert_abs_diff_eq!(record.home_rating_pre, 1500.0);
        assert_abs_diff_eq!(record.away_rating_pre, 1500.0);
        assert_abs_diff_eq!(record.expected_result, 0.5287, epsilon = 0.0001);
        assert_abs_diff_eq!(result.final_ratings()["A"], 1512.76, epsilon = 0.01);
        assert_abs_diff_eq!(result.final_ratings()["B"], 1487.24, epsilon = 0.01);
    }

    #[test]
    fn test_zero_sum_transfer_per_fixture() {
        let mut model = model();
        let fixtures = vec![
            generate_fixture("A", "B", 2, false, 1.0),
            generate_fixture("C", "A", 3, true, 0.5),
            generate_fixture("B", "C", 4, false, 0.0),
        ];

        let result = model.process(&fixtures).unwrap();

        let total: f64 = result.final_ratings().values().sum();
        assert_abs_diff_eq!(total, 3.0 * 1500.0, epsilon = 1e-9);
    }

    #[test]
    fn test_opening_round_crunch_is_noop_at_the_mean() {
        let mut model = model();
        let fixtures = vec![generate_fixture("A", "B", 1, false, 1.0)];

        let result = model.process(&fixtures).unwrap();
        let record = &result.records()[0];

        assert_abs_diff_eq!(record.home_rating_pre, 1500.0);
        assert_abs_diff_eq!(record.away_rating_pre, 1500.0);
    }

    #[test]
    fn test_opening_round_crunch_applies_before_forecast_and_persists() {
        let config = EloConfig {
            initial_ratings: HashMap::from([("A".to_string(), 1700.0), ("B".to_string(), 1300.0)]),
            ..Default::default()
        };
        let mut model = EloModel::new(config).unwrap();

        // A draw between crunched teams: 1650 v 1350 after regression
        let fixtures = vec![generate_fixture("A", "B", 1, false, 0.5)];
        let result = model.process(&fixtures).unwrap();
        let record = &result.records()[0];

        assert_abs_diff_eq!(record.home_rating_pre, 1650.0);
        assert_abs_diff_eq!(record.away_rating_pre, 1350.0);

        // The crunched values are the base the update applies to
        let delta = result.final_ratings()["A"] - 1650.0;
        assert_abs_diff_eq!(result.final_ratings()["B"], 1350.0 - delta, epsilon = 1e-9);
    }

    #[test]
    fn test_crunched_rating_visible_to_later_fixtures() {
        let config = EloConfig {
            initial_ratings: HashMap::from([("A".to_string(), 1700.0)]),
            ..Default::default()
        };
        let mut model = EloModel::new(config).unwrap();

        // A plays an opening-round match, then hosts again in round 2
        let fixtures = vec![
            generate_fixture("A", "B", 1, false, 0.5),
            generate_fixture("A", "C", 2, false, 0.5),
        ];

        let result = model.process(&fixtures).unwrap();
        let round_one = &result.records()[0];
        let round_two = &result.records()[1];

        // Round 2 sees the crunched-then-updated rating, not 1700
        let expected_round_two_pre = 1650.0
            + crate::model::rating_utils::rating_delta(0.5, round_one.expected_result, 1, &model.config);
        assert_abs_diff_eq!(round_two.home_rating_pre, expected_round_two_pre, epsilon = 1e-9);
    }

    #[test]
    fn test_unseen_teams_default_to_the_mean() {
        let mut model = model();
        let fixtures = vec![generate_fixture("Never Seen", "Also New", 5, false, 0.5)];

        let result = model.process(&fixtures).unwrap();
        let record = &result.records()[0];

        assert_abs_diff_eq!(record.home_rating_pre, 1500.0);
        assert_abs_diff_eq!(record.away_rating_pre, 1500.0);
    }

    #[test]
    fn test_non_positive_round_number_fails_fast() {
        let mut model = model();
        let fixtures = vec![
            generate_fixture("A", "B", 2, false, 1.0),
            generate_fixture("B", "C", 0, false, 1.0),
        ];

        let err = model.process(&fixtures).unwrap_err();

        assert_eq!(
            err,
            ProcessorError::Schema {
                index: 1,
                field: "round_number",
                reason: "must be a positive integer, got 0".to_string()
            }
        );
    }

    #[test]
    fn test_missing_target_fails_fast() {
        let config = EloConfig {
            target: Target::HomePointsRatio,
            ..Default::default()
        };
        let mut model = EloModel::new(config).unwrap();

        // Generated fixtures carry home_win_draw_loss, not home_points_ratio
        let fixtures = vec![generate_fixture("A", "B", 2, false, 1.0)];
        let err = model.process(&fixtures).unwrap_err();

        assert_eq!(
            err,
            ProcessorError::Schema {
                index: 0,
                field: "home_points_ratio",
                reason: "is missing".to_string()
            }
        );
    }

    #[test]
    fn test_non_numeric_target_fails_fast() {
        let mut model = model();

        let mut fixture = generate_fixture("A", "B", 2, false, 1.0);
        fixture.extra.insert("home_win_draw_loss".to_string(), json!("home"));

        let err = model.process(&[fixture]).unwrap_err();

        assert!(matches!(
            err,
            ProcessorError::Schema {
                index: 0,
                field: "home_win_draw_loss",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_team_name_fails_fast() {
        let mut model = model();
        let fixtures = vec![generate_fixture("", "B", 2, false, 1.0)];

        let err = model.process(&fixtures).unwrap_err();

        assert!(matches!(
            err,
            ProcessorError::Schema {
                index: 0,
                field: "home_team",
                ..
            }
        ));
    }

    #[test]
    fn test_failed_run_returns_no_partial_results() {
        let mut model = model();
        let fixtures = vec![
            generate_fixture("A", "B", 2, false, 1.0),
            generate_fixture("B", "C", -3, false, 1.0),
        ];

        assert!(model.process(&fixtures).is_err());

        // The tracker still reflects fixtures processed before the failure;
        // the caller received no records and should discard the model
        assert_eq!(model.rating_tracker.len(), 2);
    }

    #[test]
    fn test_fractional_target_moves_ratings() {
        let config = EloConfig {
            target: Target::HomePointsRatio,
            ..Default::default()
        };
        let mut model = EloModel::new(config).unwrap();

        let mut fixture = generate_fixture("A", "B", 2, false, 1.0);
        fixture.extra.insert("home_points_ratio".to_string(), json!(0.58));

        let result = model.process(&[fixture]).unwrap();

        // 0.58 beats the 0.5287 forecast, so the home side gains
        assert!(result.final_ratings()["A"] > 1500.0);
        assert!(result.final_ratings()["B"] < 1500.0);
    }

    #[test]
    fn test_final_ratings_seed_a_subsequent_run() {
        let mut first = model();
        let fixtures = vec![generate_fixture("A", "B", 2, false, 1.0)];
        let result = first.process(&fixtures).unwrap();

        let config = EloConfig {
            initial_ratings: result
                .final_ratings()
                .iter()
                .map(|(team, rating)| (team.clone(), *rating))
                .collect(),
            ..Default::default()
        };
        let mut second = EloModel::new(config).unwrap();

        let next = second.process(&[generate_fixture("A", "B", 3, false, 1.0)]).unwrap();

        assert_abs_diff_eq!(next.records()[0].home_rating_pre, 1512.76, epsilon = 0.01);
    }
}
