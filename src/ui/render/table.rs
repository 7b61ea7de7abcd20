use super::widgets::spinner;
use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::utils::due_status::due_status_label;

/// Render the task table according to state.
///
pub fn table(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();

    let title = if state.is_last_page() {
        "Tasks".to_string()
    } else {
        format!("Tasks (page {}, ]: load more)", state.get_page())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::normal_block_border_style(&theme));

    // Initial load: nothing to show yet
    if state.get_tasks().is_empty() && state.is_syncing() {
        frame.render_widget(spinner::widget(state, size.height).block(block), size);
        return;
    }

    // Empty committed search results show a message instead of a bare table
    if state.get_tasks().is_empty() && !state.get_search_query().is_empty() {
        let message = Paragraph::new("No results found")
            .style(styling::muted_text_style(&theme))
            .block(block);
        frame.render_widget(message, size);
        return;
    }

    let today = Utc::now().date_naive();
    let rows: Vec<Row> = state
        .get_tasks()
        .iter()
        .map(|task| {
            Row::new(vec![
                task.priority.clone(),
                task.title.clone(),
                task.assignee_name.clone(),
                task.description.clone().unwrap_or_else(|| "—".to_string()),
                due_status_label(task.due_on.as_deref(), today),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Percentage(25),
        Constraint::Percentage(15),
        Constraint::Percentage(25),
        Constraint::Percentage(20),
    ];
    let widget = Table::new(rows, widths)
        .header(
            Row::new(vec!["Priority", "Title", "Assignee", "Description", "Due"])
                .style(styling::active_block_title_style()),
        )
        .style(styling::normal_text_style(&theme))
        .highlight_style(styling::selected_row_style(&theme))
        .block(block);

    frame.render_stateful_widget(widget, size, state.get_tasks_table_state());
}
