use std::collections::HashSet;

use crate::builtin;
use crate::error::{LookupError, RosterError};
use crate::players::{Agent, PlayerRecord};

/// Ordered, immutable collection of player records.
///
/// Ids are checked for uniqueness on construction and the sequence is never
/// modified afterwards, so every lookup and filter pass sees the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: Vec<PlayerRecord>,
}

impl Roster {
    pub fn new(players: Vec<PlayerRecord>) -> Result<Self, RosterError> {
        let mut seen = HashSet::with_capacity(players.len());
        for player in &players {
            if !seen.insert(player.id.as_str()) {
                return Err(RosterError::DuplicateId(player.id.clone()));
            }
            if player.jersey_number == 0 {
                return Err(RosterError::InvalidJerseyNumber(player.id.clone()));
            }
        }

        Ok(Self { players })
    }

    /// The national squad shipped with the application
    pub fn builtin() -> Self {
        Self {
            players: builtin::players(),
        }
    }

    /// Parse a JSON array of player records
    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let players: Vec<PlayerRecord> = serde_json::from_str(json)?;
        Self::new(players)
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Lookup used by the CV download
    pub fn player(&self, id: &str) -> Result<&PlayerRecord, LookupError> {
        self.find(id)
            .ok_or_else(|| LookupError::PlayerNotFound(id.to_string()))
    }

    /// Lookup used by the contact-agent action, restricted to the agent record
    pub fn agent(&self, id: &str) -> Result<(&PlayerRecord, &Agent), LookupError> {
        let player = self.player(id)?;
        player
            .agent
            .as_ref()
            .map(|agent| (player, agent))
            .ok_or_else(|| LookupError::AgentUnavailable(id.to_string()))
    }

    /// Distinct club names in roster order
    pub fn clubs(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.players
            .iter()
            .map(|p| p.club.as_str())
            .filter(|club| seen.insert(club.to_lowercase()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_roster_is_valid() {
        let roster = Roster::builtin();
        let rebuilt = Roster::new(roster.players().to_vec()).unwrap();
        assert_eq!(rebuilt, roster);

        let names: Vec<_> = roster.players().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            ["Musa Tombo", "Mohamed Kamara", "Alhaji Kamara", "Umaru Bangura"]
        );
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let mut players = builtin::players();
        players.push(players[0].clone());

        let err = Roster::new(players).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId(id) if id == "musa-tombo"));
    }

    #[test]
    fn test_zero_jersey_number_is_rejected() {
        let mut players = builtin::players();
        players[1].jersey_number = 0;

        let err = Roster::new(players).unwrap_err();
        assert!(matches!(err, RosterError::InvalidJerseyNumber(id) if id == "mohamed-kamara"));
    }

    #[test]
    fn test_lookup_unknown_id_is_not_found() {
        let roster = Roster::builtin();

        assert_eq!(
            roster.player("steven-caulker"),
            Err(LookupError::PlayerNotFound("steven-caulker".to_string()))
        );
        assert_eq!(
            roster.agent("steven-caulker").unwrap_err(),
            LookupError::PlayerNotFound("steven-caulker".to_string())
        );
    }

    #[test]
    fn test_agent_lookup() {
        let mut players = builtin::players();
        players[3].agent = None;
        let roster = Roster::new(players).unwrap();

        let (player, agent) = roster.agent("musa-tombo").unwrap();
        assert_eq!(player.name, "Musa Tombo");
        assert_eq!(agent.name, "Alpha Saidu");

        assert_eq!(
            roster.agent("umaru-bangura").unwrap_err(),
            LookupError::AgentUnavailable("umaru-bangura".to_string())
        );
    }

    #[test]
    fn test_clubs_are_distinct_and_ordered() {
        let mut players = builtin::players();
        let mut extra = players[0].clone();
        extra.id = "abu-conteh".into();
        extra.club = "EAST END LIONS".to_string();
        players.push(extra);
        let roster = Roster::new(players).unwrap();

        assert_eq!(
            roster.clubs(),
            ["East End Lions", "Mighty Blackpool", "Kamboi Eagles", "Bo Rangers"]
        );
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {
                "id": "abu-conteh", "name": "Abu Conteh", "nickname": "The Engine",
                "position": "Midfielder", "club": "Bo Rangers", "dob": "2 May 2001",
                "jersey_number": 8, "age_range": "21–25", "image": "./images/abu.jpg",
                "bio": "Box-to-box midfielder.",
                "stats": { "appearances": 12, "goals": 2, "assists": 5, "yellow_cards": 1, "red_cards": 0 },
                "agent": { "name": "Sia Koroma", "phone": "+232 70 000 000", "email": "sia@slfa.com" }
            }
        ]"#;

        let roster = Roster::from_json(json).unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.find("abu-conteh").unwrap().stats.assists, 5);

        assert!(matches!(
            Roster::from_json("{ not json"),
            Err(RosterError::Json(_))
        ));
    }
}
