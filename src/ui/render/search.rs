use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Paragraph},
};

/// Render the search input field according to state.
///
pub fn search(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme();
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));

    if state.is_search_mode() {
        block = block
            .border_style(styling::active_block_border_style(theme))
            .title(Span::styled(
                "Search (Enter: done, Esc: clear)",
                styling::active_block_title_style(),
            ));
    } else {
        block = block.title("Search (/)");
    }

    // The field shows the raw query; a cursor mark appears while focused
    let text = if state.is_search_mode() {
        format!("{}▏", state.get_query())
    } else {
        state.get_query().to_string()
    };

    let field = Paragraph::new(text)
        .style(styling::normal_text_style(theme))
        .block(block);

    frame.render_widget(field, size);
}
