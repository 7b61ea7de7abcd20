use super::footer::footer;
use super::log::log;
use super::search::search;
use super::table::table;
use super::tabs::tabs;
use super::Frame;
use crate::state::State;
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the whole surface according to state.
///
pub fn all(frame: &mut Frame, state: &mut State) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    tabs(frame, chunks[0], state);
    search(frame, chunks[1], state);
    if state.is_log_visible() {
        log(frame, chunks[2], state);
    } else {
        table(frame, chunks[2], state);
    }
    footer(frame, chunks[3], state);
}
