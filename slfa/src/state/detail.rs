use slfa_data::players::{PlayerId, PlayerRecord};

/// Slots of the player detail panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPanel {
    pub image_src: String,
    pub image_alt: String,
    /// `Name (Nickname)`
    pub heading: String,
    pub position: String,
    pub dob: String,
    pub club: String,
    pub jersey_number: String,
    pub bio: String,
    pub stats: StatSlots,
    /// Targets of the "Download CV" and "Contact agent" actions
    pub download_cv_target: Option<PlayerId>,
    pub contact_agent_target: Option<PlayerId>,
    /// Vertical scroll offset of the bio
    pub scroll: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatSlots {
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

impl DetailPanel {
    /// Write every slot from `player`. The panel is rebuilt as a whole so no
    /// value from a previously shown player can survive.
    pub fn populate(&mut self, player: &PlayerRecord) {
        *self = Self {
            image_src: player.image.clone(),
            image_alt: format!("Detailed profile image of {}", player.name),
            heading: player.display_name(),
            position: player.position.clone(),
            dob: player.dob.clone(),
            club: player.club.clone(),
            jersey_number: player.jersey_number.to_string(),
            bio: player.bio_text(),
            stats: StatSlots {
                appearances: player.stats.appearances,
                goals: player.stats.goals,
                assists: player.stats.assists,
                yellow_cards: player.stats.yellow_cards,
                red_cards: player.stats.red_cards,
            },
            download_cv_target: Some(player.id.clone()),
            contact_agent_target: Some(player.id.clone()),
            scroll: 0,
        };
    }

    pub fn scroll_into_view(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(3);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slfa_data::Roster;

    #[test]
    fn test_populate_writes_every_slot() {
        let roster = Roster::builtin();
        let mut panel = DetailPanel::default();
        panel.populate(roster.find("musa-tombo").unwrap());

        assert_eq!(panel.heading, "Musa Tombo (The Wizard)");
        assert_eq!(panel.position, "Midfielder");
        assert_eq!(panel.dob, "15 March 2000");
        assert_eq!(panel.club, "East End Lions");
        assert_eq!(panel.jersey_number, "10");
        assert_eq!(panel.image_src, "./images/musa tombo.jpg");
        assert_eq!(panel.image_alt, "Detailed profile image of Musa Tombo");
        assert!(panel.bio.starts_with("Musa Tombo is one of Sierra Leone's"));
        assert_eq!(
            panel.stats,
            StatSlots {
                appearances: 32,
                goals: 14,
                assists: 9,
                yellow_cards: 5,
                red_cards: 1,
            }
        );
        assert_eq!(panel.download_cv_target, Some("musa-tombo".into()));
        assert_eq!(panel.contact_agent_target, Some("musa-tombo".into()));
    }

    #[test]
    fn test_populate_leaves_nothing_from_previous_player() {
        let roster = Roster::builtin();
        let mut reused = DetailPanel::default();
        reused.populate(roster.find("musa-tombo").unwrap());
        reused.scroll_down();
        reused.populate(roster.find("alhaji-kamara").unwrap());

        let mut fresh = DetailPanel::default();
        fresh.populate(roster.find("alhaji-kamara").unwrap());

        assert_eq!(reused, fresh);
        assert_eq!(reused.stats.goals, 0);
        assert_eq!(reused.scroll, 0);
    }

    #[test]
    fn test_scrolling() {
        let mut panel = DetailPanel::default();
        panel.scroll_up();
        assert_eq!(panel.scroll, 0);
        panel.scroll_down();
        panel.scroll_down();
        assert_eq!(panel.scroll, 6);
        panel.scroll_into_view();
        assert_eq!(panel.scroll, 0);
    }
}
