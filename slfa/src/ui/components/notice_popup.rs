use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::popup::{self, PopupSize};
use crate::state::{Notice, NoticeKind};
use crate::ui::{layouts, theme};

const DISMISS_HINT: &str = "[Enter/Esc] Close";

/// Render a notice (download progress, agent details, news article,
/// validation result) centered over the current screen
pub fn render_notice_popup(f: &mut Frame, notice: &Notice) {
    let width_percent = layouts::popup_sizes::NOTICE_WIDTH;
    let inner_width = (f.area().width.saturating_mul(width_percent) / 100).saturating_sub(2);
    // Body, a blank line, the hint
    let lines = wrapped_height(&notice.body, inner_width).saturating_add(2);

    let border_style = match notice.kind {
        NoticeKind::Info => theme::info_border_style(),
        NoticeKind::Error => theme::danger_border_style(),
    };

    let inner = popup::render_popup_frame(
        f,
        f.area(),
        PopupSize::FitLines(width_percent, lines),
        &format!(" {} ", notice.title),
        border_style,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let body = Paragraph::new(notice.body.as_str())
        .style(theme::form_field_style())
        .wrap(Wrap { trim: false });
    f.render_widget(body, chunks[0]);

    let hint = Paragraph::new(Line::from(Span::styled(
        DISMISS_HINT,
        theme::help_text_style(),
    )))
    .alignment(Alignment::Center);
    f.render_widget(hint, chunks[1]);
}

/// Rows `text` takes when wrapped at `width` columns
fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = text
        .lines()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("Saved", 20), 1);
        assert_eq!(wrapped_height("line one\n\nline three", 20), 3);
        assert_eq!(wrapped_height(&"x".repeat(45), 20), 3);
    }
}
