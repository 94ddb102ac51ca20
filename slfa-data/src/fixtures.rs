use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::builtin;

pub const FIXTURE_FILE_NAME: &str = "SLFA_Full_Season_Fixture.txt";

pub const TICKETING_URL: &str = "https://www.slfa-tickets.com/buy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Venue {
    Home,
    Away,
}

impl Display for Venue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => f.write_str("Home"),
            Self::Away => f.write_str("Away"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub date: String,
    pub opponent: String,
    /// League, cup round, friendly...
    pub competition: String,
    pub venue: Venue,
    /// `None` until the match has been played
    pub result: Option<String>,
}

impl Fixture {
    pub fn result_label(&self) -> &str {
        self.result.as_deref().unwrap_or("TBD")
    }

    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }
}

/// Full season fixture list
pub fn season_fixtures() -> Vec<Fixture> {
    builtin::fixtures()
}

/// Plain-text fixture sheet offered as a download
pub fn fixture_sheet(fixtures: &[Fixture]) -> String {
    let mut sheet = String::from("SLFA Full Season Match Fixture (2024/2025)\n");
    sheet.push_str("=================================================\n\n");
    sheet.push_str("DATE         | OPPONENT          | TYPE                | VENUE | RESULT\n");
    sheet.push_str("-------------|-------------------|---------------------|-------|---------\n");

    for fixture in fixtures {
        sheet.push_str(&format!(
            "{:<12}| {:<17} | {:<19} | {:<5} | {}\n",
            fixture.date,
            fixture.opponent,
            fixture.competition,
            fixture.venue.to_string(),
            fixture.result_label()
        ));
    }

    sheet
}

pub fn ticket_information() -> String {
    format!(
        "To purchase tickets for upcoming matches:\n\n\
         1. Visit our official ticketing partner online.\n   \
         Link: {TICKETING_URL}\n\n\
         2. Tickets are also available in-person at the\n   \
         Sierra Leone National Stadium box office\n   \
         three days prior to match day.\n\n\
         Please ensure you buy from official sources!"
    )
}
