use super::Frame;
use crate::state::{State, Tab};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Tabs},
};

/// Render the tab header with per-tab task counts.
///
pub fn tabs(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let titles = vec![
        Line::from(format!("My tasks ({})", state.get_my_tasks_count())),
        Line::from(format!(
            "Unassigned tasks ({})",
            state.get_unassigned_tasks_count()
        )),
    ];
    let selected = match state.current_tab() {
        Tab::Mine => 0,
        Tab::Unassigned => 1,
    };

    let widget = Tabs::new(titles)
        .select(selected)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::active_tab_style(theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Open tasks")
                .border_style(styling::normal_block_border_style(theme)),
        );

    frame.render_widget(widget, size);
}
