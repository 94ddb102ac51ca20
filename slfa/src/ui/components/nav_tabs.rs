//! Navigation bar and copyright footer framing every screen.

use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Tabs},
    Frame,
};

use crate::state::Page;
use crate::ui::{theme, utils};

/// Tab bar over the four pages, highlighting `active`. Screens outside the
/// page set (logs) leave every tab plain.
pub fn render_nav_tabs(f: &mut Frame, area: Rect, active: Option<Page>) {
    let titles = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!(" {} {} ", i + 1, page.title())));

    let tabs = Tabs::new(titles)
        .select(active.and_then(|page| Page::ALL.iter().position(|p| *p == page)))
        .style(theme::help_text_style())
        .highlight_style(theme::active_tab_style())
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn render_footer(f: &mut Frame, area: Rect, year: i32) {
    let footer = Paragraph::new(utils::copyright_notice(year))
        .style(theme::muted_style())
        .alignment(Alignment::Center);

    f.render_widget(footer, area);
}
