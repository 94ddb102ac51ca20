use ratatui::{
    prelude::*,
    widgets::{List, ListItem},
    Frame,
};

use super::popup::PopupSize;
use crate::state::InputMode;
use crate::ui::{layouts, screens::Screen, theme};

pub fn render_help_popup(f: &mut Frame, screen: &Screen) {
    let help_items = get_help_items(screen);
    let (width, height) = layouts::popup_sizes::LARGE;

    let inner = super::popup::render_popup_frame(
        f,
        f.area(),
        PopupSize::Percent(width, height),
        " Help (press ? or Esc to close) ",
        theme::accent_border_style(),
    );

    let items: Vec<ListItem> = help_items
        .iter()
        .map(|(key, description)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:15}", key), theme::header_style()),
                Span::raw(*description),
            ]))
        })
        .collect();

    let list = List::new(items).style(Style::default().fg(Color::White));

    f.render_widget(list, inner);
}

fn get_help_items(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut items = vec![];

    match screen {
        Screen::Home(..) => {
            items.push(("↑/k", "Previous article"));
            items.push(("↓/j", "Next article"));
            items.push(("Enter/→/l", "Read the selected article"));
        }
        Screen::Players(state) => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("Enter/→/l", "View or close the player's profile"));
            items.push(("d", "Download the player's CV"));
            items.push(("m", "Contact the player's agent"));
            items.push(("PgUp/PgDn", "Scroll the profile"));
            items.push(("/", "Search players by name"));
            if state.input_mode == InputMode::Filter {
                items.push(("Type", "Search by name or nickname"));
                items.push(("Enter", "Exit search (keep it active)"));
                items.push(("Esc", "Clear search and exit"));
                items.push(("Backspace", "Delete last character"));
            }
            items.push(("p", "Cycle position filter"));
            items.push(("c", "Cycle club filter"));
            items.push(("y", "Cycle age range filter"));
            items.push(("x", "Reset all filters"));
            items.push(("r", "Reload roster"));
        }
        Screen::Matches(..) => {
            items.push(("↑/k", "Move selection up"));
            items.push(("↓/j", "Move selection down"));
            items.push(("d", "Download the full season fixture list"));
            items.push(("t", "Ticket information"));
        }
        Screen::Contact(state) => {
            if state.input_mode == InputMode::ContactForm {
                items.push(("Tab/↓", "Next field"));
                items.push(("Shift-Tab/↑", "Previous field"));
                items.push(("Type", "Edit the field"));
                items.push(("Enter", "Submit the form"));
                items.push(("Esc", "Stop editing"));
            } else {
                items.push(("↑/k", "Previous field"));
                items.push(("↓/j", "Next field"));
                items.push(("Enter/i", "Start editing the form"));
            }
        }
        Screen::Logs(..) => {
            items.push(("↑/k", "Scroll up (older logs)"));
            items.push(("↓/j", "Scroll down (newer logs)"));
            items.push(("Page Up", "Scroll up one page"));
            items.push(("Page Down", "Scroll down one page"));
            items.push(("g then g", "Scroll to oldest logs"));
            items.push(("G", "Scroll to newest logs"));
        }
    }

    items.push(("", ""));
    items.push(("--- Global ---", ""));
    items.push(("1-4", "Home, Players, Matches, Contact"));
    items.push(("g then h/p/m/c", "Go to home/players/matches/contact"));
    items.push(("g then l", "Go to logs"));
    items.push(("g then g", "Navigate to top of list"));
    items.push(("G", "Navigate to bottom of list"));
    items.push(("h/←", "Navigate back"));
    items.push(("?", "Toggle this help"));
    items.push(("q", "Quit application"));

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Page;

    #[test]
    fn test_search_keys_listed_only_while_searching() {
        let mut screen = Page::Players.screen();
        let has_type_hint =
            |screen: &Screen| get_help_items(screen).iter().any(|(key, _)| *key == "Type");

        assert!(!has_type_hint(&screen));

        if let Screen::Players(state) = &mut screen {
            state.input_mode = InputMode::Filter;
        }
        assert!(has_type_hint(&screen));
    }
}
