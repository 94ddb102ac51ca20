//! Text documents generated from player records.

use crate::players::{Agent, PlayerRecord};

/// Player curriculum vitae offered as a plain-text download
pub fn curriculum_vitae(player: &PlayerRecord) -> String {
    let stats = &player.stats;
    format!(
        "Player Curriculum Vitae (CV) - SLFA\n\
         ========================================\n\
         Name: {name}\n\
         Position: {position}\n\
         D.O.B: {dob}\n\
         Current Club: {club}\n\
         Jersey Number: {number}\n\
         \n\
         Biography:\n\
         {bio}\n\
         \n\
         Career Statistics (Current Season):\n\
         - Appearances: {appearances}\n\
         - Goals: {goals}\n\
         - Assists: {assists}\n\
         - Yellow Cards: {yellow}\n\
         - Red Cards: {red}\n\
         \n\
         ---\n\
         For official verification, contact SLFA management.\n",
        name = player.display_name(),
        position = player.position,
        dob = player.dob,
        club = player.club,
        number = player.jersey_number,
        bio = player.bio_text(),
        appearances = stats.appearances,
        goals = stats.goals,
        assists = stats.assists,
        yellow = stats.yellow_cards,
        red = stats.red_cards,
    )
}

/// `Musa Tombo` -> `Musa_Tombo_CV.txt`
pub fn cv_file_name(player: &PlayerRecord) -> String {
    let stem: String = player
        .name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{stem}_CV.txt")
}

pub fn agent_contact(player: &PlayerRecord, agent: &Agent) -> String {
    format!(
        "Agent Contact Information for {}:\n\
         ------------------------------------------\n\
         Agent Name: {}\n\
         Phone: {}\n\
         Email: {}",
        player.name, agent.name, agent.phone, agent.email
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Roster;

    #[test]
    fn test_curriculum_vitae_contents() {
        let roster = Roster::builtin();
        let player = roster.player("umaru-bangura").unwrap();
        let cv = curriculum_vitae(player);

        assert!(cv.starts_with("Player Curriculum Vitae (CV) - SLFA\n"));
        assert!(cv.contains("Name: Umaru Bangura (The Rock)\n"));
        assert!(cv.contains("Current Club: Bo Rangers\n"));
        assert!(cv.contains("Jersey Number: 5\n"));
        assert!(cv.contains("- Yellow Cards: 8\n"));
        assert!(cv.contains("- Red Cards: 0\n"));
        assert!(cv.contains("Biography:\nUmaru Bangura is a strong, composed central defender."));
    }

    #[test]
    fn test_cv_file_name_replaces_whitespace() {
        let roster = Roster::builtin();
        let player = roster.player("mohamed-kamara").unwrap();
        assert_eq!(cv_file_name(player), "Mohamed_Kamara_CV.txt");
    }

    #[test]
    fn test_agent_contact() {
        let roster = Roster::builtin();
        let (player, agent) = roster.agent("alhaji-kamara").unwrap();
        let text = agent_contact(player, agent);

        assert!(text.starts_with("Agent Contact Information for Alhaji Kamara:"));
        assert!(text.contains("Agent Name: Amadu Mansaray"));
        assert!(text.contains("Phone: +232 77 112 233"));
        assert!(text.contains("Email: amadu.m@slfa.com"));
    }
}
