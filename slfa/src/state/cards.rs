//! Rendered player cards.
//!
//! `CardList` is the stable list container. Rendering swaps its children
//! wholesale; the profile key binding resolves the highlighted card from the
//! current children on every press, so no per-render binding exists to leak.

use itertools::Itertools;
use ratatui::widgets::TableState;
use slfa_data::players::{AgeRange, PlayerId, PlayerRecord};
use std::cell::RefCell;

pub const ATTR_PLAYER_ID: &str = "data-player-id";
pub const ATTR_CLUB: &str = "data-club";
pub const ATTR_AGE_RANGE: &str = "data-age-range";
pub const ATTR_EXPANDED: &str = "aria-expanded";
pub const ATTR_CONTROLS: &str = "aria-controls";

/// Element id of the detail panel referenced by every profile control
pub const DETAIL_PANEL_ID: &str = "player-profile-detail";

/// The "View profile" control of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileControl {
    pub player_id: PlayerId,
    pub expanded: bool,
}

impl ProfileControl {
    pub fn attributes(&self) -> [(&'static str, String); 3] {
        [
            (ATTR_PLAYER_ID, self.player_id.to_string()),
            (ATTR_EXPANDED, self.expanded.to_string()),
            (ATTR_CONTROLS, DETAIL_PANEL_ID.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
    pub player_id: PlayerId,
    /// Lower-cased club name
    pub club: String,
    pub age_range: AgeRange,
    pub image: String,
    pub name: String,
    pub position: String,
    pub profile: ProfileControl,
}

impl PlayerCard {
    pub fn from_record(player: &PlayerRecord) -> Self {
        Self {
            player_id: player.id.clone(),
            club: player.club.to_lowercase(),
            age_range: player.age_range,
            image: player.image.clone(),
            name: player.name.clone(),
            position: player.position.clone(),
            profile: ProfileControl {
                player_id: player.id.clone(),
                expanded: false,
            },
        }
    }

    pub fn attributes(&self) -> [(&'static str, String); 3] {
        [
            (ATTR_PLAYER_ID, self.player_id.to_string()),
            (ATTR_CLUB, self.club.clone()),
            (ATTR_AGE_RANGE, self.age_range.label().to_string()),
        ]
    }

    /// HTML form of the card, keeping the attribute conventions verbatim
    pub fn markup(&self) -> String {
        let card_attrs = render_attributes(&self.attributes());
        let control_attrs = render_attributes(&self.profile.attributes());
        let name = escape(&self.name);

        format!(
            "<div class=\"player-card\" {card_attrs} role=\"region\" \
             aria-label=\"Player profile for {name}\">\
             <div class=\"player-img\"><img src=\"{image}\" alt=\"{name}\" /></div>\
             <h3>{name}</h3>\
             <p class=\"position\">{position}</p>\
             <button class=\"profile-btn\" {control_attrs}>View profile</button>\
             </div>",
            image = escape(&self.image),
            position = escape(&self.position),
        )
    }
}

fn render_attributes(attributes: &[(&str, String)]) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!("{name}=\"{}\"", escape(value)))
        .join(" ")
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[derive(Debug, Clone, Default)]
pub struct CardList {
    cards: Vec<PlayerCard>,
    pub table_state: RefCell<TableState>,
}

impl CardList {
    /// Replace every card with one per record, in the given order.
    /// The highlight moves to the first card (or nowhere when empty).
    pub fn render(&mut self, players: &[&PlayerRecord]) {
        self.cards = players.iter().map(|p| PlayerCard::from_record(p)).collect();

        let selected = if self.cards.is_empty() { None } else { Some(0) };
        self.table_state = RefCell::new(TableState::default().with_selected(selected));

        tracing::debug!("Rendered {} player cards", self.cards.len());
        tracing::trace!("Card markup: {}", self.markup());
    }

    pub fn cards(&self) -> &[PlayerCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.player_id.as_str()).collect()
    }

    pub fn get(&self, player_id: &str) -> Option<&PlayerCard> {
        self.cards.iter().find(|c| c.player_id == player_id)
    }

    /// Card under the highlight, i.e. the target of the profile key binding
    pub fn highlighted(&self) -> Option<&PlayerCard> {
        let index = self.table_state.borrow().selected()?;
        self.cards.get(index)
    }

    /// Clear every expanded marker, then mark `player_id` if it is rendered
    pub fn mark_expanded(&mut self, player_id: Option<&str>) {
        for card in &mut self.cards {
            card.profile.expanded = player_id.is_some_and(|id| card.player_id == id);
        }
    }

    pub fn expanded_ids(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|c| c.profile.expanded)
            .map(|c| c.player_id.as_str())
            .collect()
    }

    pub fn markup(&self) -> String {
        self.cards.iter().map(PlayerCard::markup).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slfa_data::Roster;

    #[test]
    fn test_render_preserves_order_and_resets_highlight() {
        let roster = Roster::builtin();
        let players: Vec<_> = roster.players().iter().rev().collect();
        let mut cards = CardList::default();

        cards.render(&players);
        assert_eq!(
            cards.ids(),
            ["umaru-bangura", "alhaji-kamara", "mohamed-kamara", "musa-tombo"]
        );
        assert_eq!(cards.table_state.borrow().selected(), Some(0));

        cards.render(&[]);
        assert!(cards.is_empty());
        assert_eq!(cards.table_state.borrow().selected(), None);
        assert!(cards.highlighted().is_none());
    }

    #[test]
    fn test_render_twice_is_idempotent() {
        let roster = Roster::builtin();
        let players: Vec<_> = roster.players().iter().collect();
        let mut cards = CardList::default();

        cards.render(&players);
        let first: Vec<PlayerCard> = cards.cards().to_vec();
        cards.render(&players);

        assert_eq!(cards.cards(), first.as_slice());
    }

    #[test]
    fn test_render_discards_expanded_markers() {
        let roster = Roster::builtin();
        let players: Vec<_> = roster.players().iter().collect();
        let mut cards = CardList::default();
        cards.render(&players);

        cards.mark_expanded(Some("alhaji-kamara"));
        assert_eq!(cards.expanded_ids(), ["alhaji-kamara"]);

        cards.render(&players);
        assert!(cards.expanded_ids().is_empty());
    }

    #[test]
    fn test_mark_expanded_keeps_a_single_marker() {
        let roster = Roster::builtin();
        let players: Vec<_> = roster.players().iter().collect();
        let mut cards = CardList::default();
        cards.render(&players);

        cards.mark_expanded(Some("musa-tombo"));
        cards.mark_expanded(Some("umaru-bangura"));
        assert_eq!(cards.expanded_ids(), ["umaru-bangura"]);

        cards.mark_expanded(Some("not-rendered"));
        assert!(cards.expanded_ids().is_empty());

        cards.mark_expanded(None);
        assert!(cards.expanded_ids().is_empty());
    }

    #[test]
    fn test_card_attributes() {
        let roster = Roster::builtin();
        let card = PlayerCard::from_record(roster.find("mohamed-kamara").unwrap());

        assert_eq!(
            card.attributes(),
            [
                ("data-player-id", "mohamed-kamara".to_string()),
                ("data-club", "mighty blackpool".to_string()),
                ("data-age-range", "18–20".to_string()),
            ]
        );
        assert_eq!(
            card.profile.attributes(),
            [
                ("data-player-id", "mohamed-kamara".to_string()),
                ("aria-expanded", "false".to_string()),
                ("aria-controls", "player-profile-detail".to_string()),
            ]
        );
    }

    #[test]
    fn test_card_markup() {
        let roster = Roster::builtin();
        let mut cards = CardList::default();
        cards.render(&[roster.find("musa-tombo").unwrap()]);
        cards.mark_expanded(Some("musa-tombo"));

        let markup = cards.markup();
        assert!(markup.starts_with("<div class=\"player-card\" data-player-id=\"musa-tombo\""));
        assert!(markup.contains("data-club=\"east end lions\""));
        assert!(markup.contains("data-age-range=\"21–25\""));
        assert!(markup.contains("<img src=\"./images/musa tombo.jpg\" alt=\"Musa Tombo\" />"));
        assert!(markup.contains(
            "<button class=\"profile-btn\" data-player-id=\"musa-tombo\" \
             aria-expanded=\"true\" aria-controls=\"player-profile-detail\">View profile</button>"
        ));
    }

    #[test]
    fn test_markup_escapes_values() {
        let mut player = Roster::builtin().players()[0].clone();
        player.name = "A \"Quoted\" <Name>".to_string();
        let card = PlayerCard::from_record(&player);

        assert!(card
            .markup()
            .contains("<h3>A &quot;Quoted&quot; &lt;Name&gt;</h3>"));
    }

    #[test]
    fn test_render_traces_card_markup() {
        use crate::log_buffer::LogBuffer;
        use crate::logging::LogBufferLayer;
        use tracing_subscriber::layer::SubscriberExt;

        let buffer = LogBuffer::new(10);
        let subscriber = tracing_subscriber::registry().with(LogBufferLayer::new(buffer.clone()));
        let roster = Roster::builtin();
        let players: Vec<_> = roster.players().iter().take(1).collect();
        let mut cards = CardList::default();

        tracing::subscriber::with_default(subscriber, || cards.render(&players));

        let entries = buffer.get_entries();
        let traced = entries
            .iter()
            .find(|entry| entry.level == tracing::Level::TRACE)
            .unwrap();
        assert_eq!(traced.message, format!("Card markup: {}", cards.markup()));
        assert!(traced.message.contains("data-player-id=\"musa-tombo\""));
    }
}
