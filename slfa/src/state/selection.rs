use super::cards::CardList;
use super::detail::DetailPanel;
use slfa_data::players::PlayerId;
use slfa_data::Roster;

/// The single active selection of the player directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Collapsed,
    Expanded(PlayerId),
}

/// Outcome of one "view profile" activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Expanded(PlayerId),
    Switched { from: PlayerId, to: PlayerId },
    Collapsed(PlayerId),
    Ignored,
}

/// Owns the selection and the detail panel it drives.
///
/// Only the selected player id is stored, never a card index, so a card list
/// that has been re-rendered underneath can't leave it pointing at a stale
/// control.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
    pub detail: DetailPanel,
}

impl SelectionController {
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected_id(&self) -> Option<&PlayerId> {
        match &self.state {
            SelectionState::Collapsed => None,
            SelectionState::Expanded(id) => Some(id),
        }
    }

    /// The detail panel is shown exactly when a player is selected
    pub fn is_panel_visible(&self) -> bool {
        self.selected_id().is_some()
    }

    /// Handle a "view profile" activation for `player_id`
    pub fn activate(&mut self, player_id: &str, roster: &Roster, cards: &mut CardList) -> Transition {
        if cards.get(player_id).is_none() {
            tracing::warn!("Ignoring profile activation for unrendered player {}", player_id);
            return Transition::Ignored;
        }
        let Some(player) = roster.find(player_id) else {
            tracing::warn!("Ignoring profile activation for unknown player {}", player_id);
            return Transition::Ignored;
        };

        let transition = match std::mem::take(&mut self.state) {
            SelectionState::Expanded(current) if current == player.id => {
                cards.mark_expanded(None);
                Transition::Collapsed(current)
            }
            previous => {
                self.detail.populate(player);
                self.detail.scroll_into_view();
                cards.mark_expanded(Some(player.id.as_str()));
                self.state = SelectionState::Expanded(player.id.clone());

                match previous {
                    SelectionState::Collapsed => Transition::Expanded(player.id.clone()),
                    SelectionState::Expanded(from) => Transition::Switched {
                        from,
                        to: player.id.clone(),
                    },
                }
            }
        };

        tracing::debug!("Profile activation: {:?}", transition);
        transition
    }

    /// Return to `Collapsed`; called whenever the card list is re-rendered
    pub fn reset(&mut self) {
        if let SelectionState::Expanded(id) = &self.state {
            tracing::debug!("Collapsing profile of {} after re-render", id);
        }
        self.state = SelectionState::Collapsed;
    }
}
