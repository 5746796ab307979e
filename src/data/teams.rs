use std::collections::HashMap;

use lazy_static::lazy_static;
use strum_macros::{Display, EnumIter};

/// Home state of a club, for deriving the interstate-travel flag.
///
/// Geelong is kept as its own region: trips between Geelong and the
/// Melbourne clubs are long enough that the travel effect behaves more like
/// an interstate game than a local one.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum State {
    Vic,
    Nsw,
    Wa,
    Sa,
    Qld,
    Gee
}

lazy_static! {
    // Clubs renamed or relocated across eras, plus the abbreviations the
    // source tables use in finals listings
    static ref TEAM_ALIASES: HashMap<&'static str, &'static str> = HashMap::from([
        ("Kangaroos", "North Melbourne"),
        ("NM", "North Melbourne"),
        ("Western Bulldog", "Footscray"),
        ("Western Bulldogs", "Footscray"),
        ("WB", "Footscray"),
        ("South Melbourne", "Sydney"),
        ("Brisbane Bears", "Brisbane Lions"),
        ("Lions", "Brisbane Lions"),
        ("Brisbane", "Brisbane Lions"),
        ("GW Sydney", "GWS"),
        ("Greater Western Sydney", "GWS"),
        ("GC", "Gold Coast"),
        ("StK", "St Kilda"),
        ("PA", "Port Adelaide"),
        ("WCE", "West Coast"),
    ]);

    static ref TEAM_STATES: HashMap<&'static str, State> = {
        let mut states: HashMap<&'static str, State> = HashMap::new();

        for team in [
            "Fitzroy",
            "Collingwood",
            "Essendon",
            "St Kilda",
            "Melbourne",
            "Carlton",
            "Richmond",
            "University",
            "Hawthorn",
            "North Melbourne",
            "Footscray",
        ] {
            states.insert(team, State::Vic);
        }

        states.insert("Geelong", State::Gee);
        states.insert("Sydney", State::Nsw);
        states.insert("GWS", State::Nsw);
        states.insert("West Coast", State::Wa);
        states.insert("Fremantle", State::Wa);
        states.insert("Port Adelaide", State::Sa);
        states.insert("Adelaide", State::Sa);
        states.insert("Gold Coast", State::Qld);
        states.insert("Brisbane Lions", State::Qld);

        states
    };
}

/// Resolves a historical or abbreviated club label to its canonical name.
/// Unknown labels pass through unchanged.
pub fn canonical_name(name: &str) -> &str {
    TEAM_ALIASES.get(name).copied().unwrap_or(name)
}

/// Home state of a canonical club name.
pub fn state_of(team: &str) -> Option<State> {
    TEAM_STATES.get(team).copied()
}

/// Whether a match between these canonical clubs involves interstate travel.
/// `None` when either club has no state mapping.
pub fn is_interstate(home_team: &str, away_team: &str) -> Option<bool> {
    Some(state_of(home_team)? != state_of(away_team)?)
}
