use std::path::Path;

use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::{
    data::{teams, DataError},
    model::structures::fixture::Fixture
};

/// The afltables big list of every VFL/AFL match, one row per match.
pub const DEFAULT_FIXTURES_URL: &str = "https://afltables.com/afl/stats/biglists/bg3.txt";

// Logistic scale for squashing a points margin onto (0, 1)
const SQUASHED_MARGIN_WIDTH: f64 = 30.0;

/// Downloads the fixture list and parses it into engine input, preserving
/// the source's chronological row order.
pub async fn fetch_fixtures(url: &str) -> Result<Vec<Fixture>, DataError> {
    info!("fetching fixture list from {url}");

    let body = reqwest::get(url).await?.error_for_status()?.text().await?;

    parse_fixtures(&body)
}

/// Reads a previously downloaded copy of the fixture list.
pub fn load_fixtures(path: &Path) -> Result<Vec<Fixture>, DataError> {
    info!("reading fixture list from {}", path.display());

    parse_fixtures(&std::fs::read_to_string(path)?)
}

/// Parses the big-list text format. The first line is a title and is
/// skipped; every other non-blank line is one match.
pub fn parse_fixtures(text: &str) -> Result<Vec<Fixture>, DataError> {
    let mut fixtures = Vec::new();

    for (index, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        fixtures.push(parse_row(index + 1, line)?);
    }

    debug!("parsed {} fixtures", fixtures.len());

    Ok(fixtures)
}

/// Columns: matchid, date, round, home_team, home_score, away_team,
/// away_score, venue. Team names are normalized to canonical club names
/// before the interstate flag is derived.
fn parse_row(line_number: usize, line: &str) -> Result<Fixture, DataError> {
    let fields = split_row(line);
    if fields.len() < 7 {
        return Err(DataError::MalformedRow {
            line: line_number,
            reason: format!("expected at least 7 columns, found {}", fields.len())
        });
    }

    let matchid: i64 = fields[0].parse().map_err(|_| DataError::MalformedRow {
        line: line_number,
        reason: format!("unparseable matchid `{}`", fields[0])
    })?;

    let date = NaiveDate::parse_from_str(&fields[1], "%d-%b-%Y").map_err(|_| DataError::MalformedRow {
        line: line_number,
        reason: format!("unparseable date `{}`", fields[1])
    })?;

    let round_label = fields[2].as_str();
    let round_number = round_number_from_label(round_label).ok_or_else(|| DataError::UnknownRound {
        line: line_number,
        label: round_label.to_string()
    })?;
    let round_type = if round_label.starts_with('R') { "regular" } else { "finals" };

    let home_team = teams::canonical_name(&fields[3]).to_string();
    let away_team = teams::canonical_name(&fields[5]).to_string();

    let home_points = total_points(&fields[4]).ok_or_else(|| DataError::MalformedRow {
        line: line_number,
        reason: format!("unparseable score `{}`", fields[4])
    })?;
    let away_points = total_points(&fields[6]).ok_or_else(|| DataError::MalformedRow {
        line: line_number,
        reason: format!("unparseable score `{}`", fields[6])
    })?;

    let home_state = teams::state_of(&home_team).ok_or_else(|| DataError::UnknownTeam {
        line: line_number,
        team: home_team.clone()
    })?;
    let away_state = teams::state_of(&away_team).ok_or_else(|| DataError::UnknownTeam {
        line: line_number,
        team: away_team.clone()
    })?;

    let home_margin = home_points - away_points;
    // A scoreless draw splits the ratio evenly rather than dividing by zero
    let home_points_ratio = if home_points + away_points > 0 {
        home_points as f64 / (home_points + away_points) as f64
    } else {
        0.5
    };
    let (winner, home_win_draw_loss) = match home_margin {
        m if m > 0 => ("home", 1.0),
        0 => ("draw", 0.5),
        _ => ("away", 0.0)
    };
    let home_squashed_margin = 1.0 / (1.0 + (-(home_margin as f64) / SQUASHED_MARGIN_WIDTH).exp());

    let mut extra = IndexMap::new();
    extra.insert("matchid".to_string(), json!(matchid));
    extra.insert("date".to_string(), Value::String(date.to_string()));
    extra.insert("season".to_string(), json!(date.year()));
    extra.insert("round".to_string(), Value::String(round_label.to_string()));
    extra.insert("round_type".to_string(), Value::String(round_type.to_string()));
    extra.insert(
        "venue".to_string(),
        fields.get(7).map(|v| Value::String(v.clone())).unwrap_or(Value::Null)
    );
    extra.insert("home_state".to_string(), Value::String(home_state.to_string()));
    extra.insert("away_state".to_string(), Value::String(away_state.to_string()));
    extra.insert("home_points".to_string(), json!(home_points));
    extra.insert("away_points".to_string(), json!(away_points));
    extra.insert("home_margin".to_string(), json!(home_margin));
    extra.insert("home_points_ratio".to_string(), json!(home_points_ratio));
    extra.insert("home_win_draw_loss".to_string(), json!(home_win_draw_loss));
    extra.insert("home_squashed_margin".to_string(), json!(home_squashed_margin));
    extra.insert("winner".to_string(), Value::String(winner.to_string()));

    Ok(Fixture {
        home_team,
        away_team,
        round_number,
        is_interstate: home_state != away_state,
        extra
    })
}

/// Splits a row on the source's irregular delimiters: two or more spaces, or
/// a `.` followed by one or more spaces. A single interior space belongs to
/// the field, so `South Melbourne` survives intact.
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut chars = line.trim().chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '.' if matches!(chars.peek(), Some(' ')) => {
                while matches!(chars.peek(), Some(' ')) {
                    chars.next();
                }
                fields.push(std::mem::take(&mut current));
            }
            ' ' if matches!(chars.peek(), Some(' ')) => {
                while matches!(chars.peek(), Some(' ')) {
                    chars.next();
                }
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c)
        }
    }

    if !current.is_empty() {
        fields.push(current);
    }

    fields
}

/// Season-local round number for a round label. Home-and-away rounds map
/// directly; the finals series continues the count, with qualifying and
/// elimination finals sharing a slot since they are played in the same week.
fn round_number_from_label(label: &str) -> Option<i64> {
    match label {
        "QF" | "EF" => Some(25),
        "SF" => Some(26),
        "PF" => Some(27),
        "GF" => Some(28),
        _ => {
            let n: i64 = label.strip_prefix('R')?.parse().ok()?;

            (1..=24).contains(&n).then_some(n)
        }
    }
}

/// Total points from a `goals.behinds.points` score string.
fn total_points(score: &str) -> Option<i64> {
    score.rsplit('.').next()?.parse().ok()
}
