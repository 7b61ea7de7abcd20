use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};
use tui_logger::TuiLoggerWidget;

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let widget = TuiLoggerWidget::default()
        .style(styling::normal_text_style(theme))
        .style_error(ratatui::style::Style::default().fg(ratatui::style::Color::Red))
        .style_warn(ratatui::style::Style::default().fg(theme.warning.to_color()))
        .block(
            Block::default()
                .title("Log (l/Esc: close)")
                .borders(Borders::ALL)
                .border_style(styling::active_block_border_style(theme)),
        );

    frame.render_widget(widget, size);
}
