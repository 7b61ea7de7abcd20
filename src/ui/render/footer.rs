use super::Frame;
use crate::state::{State, Tab};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Render footer hotkey hints according to state.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &mut State) {
    let text = if state.is_log_visible() {
        " l/Esc: close log, q: quit".to_string()
    } else if state.is_search_mode() {
        " Type to search, Enter: done, Esc: clear, Tab: switch tab".to_string()
    } else {
        let claim = match state.current_tab() {
            Tab::Unassigned => ", c: claim",
            Tab::Mine => "",
        };
        format!(
            " /: search, Tab: switch tab, j/k: navigate{}, ]: more, r: refresh, l: log, q: quit",
            claim
        )
    };

    let theme = state.get_theme();
    let widget = Paragraph::new(text).style(styling::muted_text_style(theme));
    frame.render_widget(widget, size);
}
