use indexmap::IndexMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::structures::fixture::Fixture;

/// An input fixture augmented with the engine's per-match output fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessedFixture {
    #[serde(flatten)]
    pub fixture: Fixture,
    /// Home rating used for this match's forecast (post-crunch)
    pub home_rating_pre: f64,
    /// Away rating used for this match's forecast (post-crunch)
    pub away_rating_pre: f64,
    /// Forecast probability of a home win, in the open interval (0, 1)
    pub expected_result: f64
}

impl ProcessedFixture {
    /// Binary home-win call derived from the forecast probability.
    pub fn predicted_home_win(&self) -> bool {
        self.expected_result > 0.5
    }
}

/// The outcome of one full run: the ordered augmented records plus the
/// final per-team rating snapshot.
///
/// Two views exist over the one internal record list: [`records`] is the raw
/// sequence, [`table`] a structured columnar view. Neither mutates the other.
///
/// [`records`]: ProcessingResult::records
/// [`table`]: ProcessingResult::table
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingResult {
    records: Vec<ProcessedFixture>,
    final_ratings: IndexMap<String, f64>
}

impl ProcessingResult {
    pub fn new(records: Vec<ProcessedFixture>, final_ratings: IndexMap<String, f64>) -> ProcessingResult {
        ProcessingResult { records, final_ratings }
    }

    /// Raw sequence view, in input order.
    pub fn records(&self) -> &[ProcessedFixture] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ProcessedFixture> {
        self.records
    }

    /// Per-team ratings after the last fixture, suitable for seeding a
    /// subsequent run through `EloConfig::initial_ratings`.
    pub fn final_ratings(&self) -> &IndexMap<String, f64> {
        &self.final_ratings
    }

    /// Structured columnar view over the records.
    pub fn table(&self) -> FixtureTable {
        let mut table = FixtureTable::with_capacity(self.records.len());

        // Union of extra columns, ordered by first appearance across records
        let extra_columns: Vec<String> = self
            .records
            .iter()
            .flat_map(|r| r.fixture.extra.keys())
            .unique()
            .cloned()
            .collect();
        for column in &extra_columns {
            table.extra.insert(column.clone(), Vec::with_capacity(self.records.len()));
        }

        for record in &self.records {
            table.home_team.push(record.fixture.home_team.clone());
            table.away_team.push(record.fixture.away_team.clone());
            table.round_number.push(record.fixture.round_number);
            table.is_interstate.push(record.fixture.is_interstate);
            table.home_rating_pre.push(record.home_rating_pre);
            table.away_rating_pre.push(record.away_rating_pre);
            table.expected_result.push(record.expected_result);

            for column in &extra_columns {
                let value = record.fixture.extra.get(column).cloned().unwrap_or(Value::Null);
                table.extra.get_mut(column).unwrap().push(value);
            }
        }

        table
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Column-major view of a run's output. Every column has one entry per
/// processed fixture; extra columns absent from a given fixture hold `Null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureTable {
    pub home_team: Vec<String>,
    pub away_team: Vec<String>,
    pub round_number: Vec<i64>,
    pub is_interstate: Vec<bool>,
    pub home_rating_pre: Vec<f64>,
    pub away_rating_pre: Vec<f64>,
    pub expected_result: Vec<f64>,
    pub extra: IndexMap<String, Vec<Value>>
}

impl FixtureTable {
    fn with_capacity(capacity: usize) -> FixtureTable {
        FixtureTable {
            home_team: Vec::with_capacity(capacity),
            away_team: Vec::with_capacity(capacity),
            round_number: Vec::with_capacity(capacity),
            is_interstate: Vec::with_capacity(capacity),
            home_rating_pre: Vec::with_capacity(capacity),
            away_rating_pre: Vec::with_capacity(capacity),
            expected_result: Vec::with_capacity(capacity),
            extra: IndexMap::new()
        }
    }

    pub fn len(&self) -> usize {
        self.home_team.len()
    }

    pub fn is_empty(&self) -> bool {
        self.home_team.is_empty()
    }
}
