use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Stable slug identifying a player (e.g. `musa-tombo`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for PlayerId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PlayerId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Age bucket used for exact-match filtering (never compared numerically)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum AgeRange {
    #[serde(rename = "18–20")]
    EighteenToTwenty,
    #[serde(rename = "21–25")]
    TwentyOneToTwentyFive,
    #[serde(rename = "26–30")]
    TwentySixToThirty,
    #[serde(rename = "31+")]
    ThirtyOnePlus,
}

impl AgeRange {
    pub const ALL: [AgeRange; 4] = [
        AgeRange::EighteenToTwenty,
        AgeRange::TwentyOneToTwentyFive,
        AgeRange::TwentySixToThirty,
        AgeRange::ThirtyOnePlus,
    ];

    /// Bucket label as shown on cards and in `data-age-range`
    pub fn label(&self) -> &'static str {
        match self {
            Self::EighteenToTwenty => "18–20",
            Self::TwentyOneToTwentyFive => "21–25",
            Self::TwentySixToThirty => "26–30",
            Self::ThirtyOnePlus => "31+",
        }
    }
}

impl Display for AgeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeRange {
    type Err = String;

    /// Accepts the en-dash labels as well as their ASCII hyphen spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "–");
        AgeRange::ALL
            .into_iter()
            .find(|range| range.label() == normalized)
            .ok_or_else(|| format!("Unknown age range: {s}"))
    }
}

impl TryFrom<String> for AgeRange {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
    #[serde(alias = "yellow")]
    pub yellow_cards: u32,
    #[serde(alias = "red")]
    pub red_cards: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// A squad member. Read-only for the lifetime of the roster that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub nickname: String,
    pub position: String,
    pub club: String,
    /// Free-text date label, never parsed
    pub dob: String,
    #[serde(alias = "jerseyNumber")]
    pub jersey_number: u32,
    #[serde(alias = "ageRange")]
    pub age_range: AgeRange,
    pub image: String,
    pub bio: String,
    pub stats: PlayerStats,
    #[serde(default)]
    pub agent: Option<Agent>,
}

impl PlayerRecord {
    /// `Name (Nickname)` heading used by the detail panel and the CV
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.nickname)
    }

    /// Bio with the source indentation collapsed to single spaces
    pub fn bio_text(&self) -> String {
        self.bio.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_range_parses_hyphen_and_dash() {
        assert_eq!("21-25".parse::<AgeRange>(), Ok(AgeRange::TwentyOneToTwentyFive));
        assert_eq!("21–25".parse::<AgeRange>(), Ok(AgeRange::TwentyOneToTwentyFive));
        assert_eq!(" 31+ ".parse::<AgeRange>(), Ok(AgeRange::ThirtyOnePlus));
        assert!("40+".parse::<AgeRange>().is_err());
    }

    #[test]
    fn test_age_range_serde_uses_labels() {
        let json = serde_json::to_string(&AgeRange::EighteenToTwenty).unwrap();
        assert_eq!(json, "\"18–20\"");
        let parsed: AgeRange = serde_json::from_str("\"26–30\"").unwrap();
        assert_eq!(parsed, AgeRange::TwentySixToThirty);
    }

    #[test]
    fn test_age_range_json_accepts_hyphen_labels() {
        let parsed: AgeRange = serde_json::from_str("\"18-20\"").unwrap();
        assert_eq!(parsed, AgeRange::EighteenToTwenty);
        assert!(serde_json::from_str::<AgeRange>("\"17-19\"").is_err());
    }

    #[test]
    fn test_player_id_compares_with_str() {
        let id = PlayerId::from("musa-tombo");
        assert_eq!(id, "musa-tombo");
        assert_eq!(id.to_string(), "musa-tombo");
    }

    #[test]
    fn test_bio_text_collapses_whitespace() {
        let record: PlayerRecord = serde_json::from_str(
            r#"{
                "id": "x", "name": "X", "nickname": "Y", "position": "Defender",
                "club": "Bo Rangers", "dob": "1 Jan 2000", "jerseyNumber": 4,
                "ageRange": "21–25", "image": "x.jpg",
                "bio": "line one\n        line two",
                "stats": { "appearances": 1, "goals": 0, "assists": 0, "yellow": 0, "red": 0 }
            }"#,
        )
        .unwrap();
        assert_eq!(record.bio_text(), "line one line two");
        assert_eq!(record.display_name(), "X (Y)");
        assert!(record.agent.is_none());
    }
}
