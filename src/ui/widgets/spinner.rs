use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{layout::Alignment, text::Line, widgets::Paragraph};

/// Braille spinner frames, advanced once per terminal tick.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return a centered spinner paragraph for a block of the given height.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..height.saturating_sub(2) / 2 {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(FRAMES[state.get_spinner_index() % FRAMES.len()]));

    let theme = state.get_theme();
    Paragraph::new(lines)
        .style(styling::normal_text_style(theme))
        .alignment(Alignment::Center)
}
