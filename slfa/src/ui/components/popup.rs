//! Shared popup/modal base component.

use ratatui::prelude::Rect;
use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::ui::layouts;

/// How much of the parent a popup covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupSize {
    /// Width and height as percentages of the parent
    Percent(u16, u16),
    /// Width as a percentage, height fitted to this many content lines
    FitLines(u16, u16),
}

/// Render a popup frame and return the inner area for content.
///
/// Clears the area under the popup, then draws the border with a centered
/// title.
pub fn render_popup_frame(
    f: &mut Frame,
    parent_area: Rect,
    size: PopupSize,
    title: &str,
    border_style: Style,
) -> Rect {
    let area = match size {
        PopupSize::Percent(x, y) => layouts::centered_popup(x, y, parent_area),
        PopupSize::FitLines(x, lines) => layouts::centered_fit(x, lines, parent_area),
    };

    f.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    f.render_widget(block, area);

    inner
}
