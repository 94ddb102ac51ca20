use ratatui::{
    layout::{Alignment, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::state::LoadingState;
use crate::ui::theme;

/// Render a one-cell loading indicator: spinner while loading, then a
/// check mark or a cross
pub fn render_loading_indicator(f: &mut Frame, area: Rect, loading_state: &LoadingState) {
    let (text, style) = match loading_state {
        LoadingState::NotStarted => return,
        LoadingState::Loading(throbber_state) => {
            let simple = throbber_widgets_tui::Throbber::default()
                .throbber_set(throbber_widgets_tui::BRAILLE_EIGHT);
            f.render_stateful_widget(simple, area, &mut throbber_state.clone());
            return;
        }
        LoadingState::Loaded => ("✓", theme::title_style()),
        LoadingState::Error(_) => ("x", theme::error_style()),
    };

    let indicator = Paragraph::new(Span::styled(text, style)).alignment(Alignment::Right);

    f.render_widget(indicator, area);
}
