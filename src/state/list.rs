use crate::api::{TabCounts, Task, TaskListRequest};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::ui::SPINNER_FRAME_COUNT;
use log::*;
use ratatui::widgets::TableState;
use std::time::{Duration, Instant};

use super::action::{Action, Refetch, StatePatch};
use super::error::StateError;
use super::navigation::Tab;

/// Quiet period a search keystroke must survive before the re-fetch fires.
///
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(350);

/// Minimum trimmed length before a query is committed to the server.
///
const MIN_QUERY_LEN: usize = 3;

/// Houses data representative of application state.
///
/// The list fields mirror what the server needs to re-derive the visible
/// rows: current tab, page, and committed search query. Rows themselves are
/// opaque server-ordered data; the only interpretation applied here is
/// counting them for the last-page heuristic.
pub struct State {
    net_sender: Option<NetworkEventSender>,
    tasks: Vec<Task>,
    query: String,
    search_query: String,
    page: usize,
    last_page: bool,
    tab: Tab,
    my_tasks_count: usize,
    unassigned_tasks_count: usize,
    syncing: bool,
    page_size: usize,
    search_mode: bool,
    search_deadline: Option<Instant>,
    tasks_table_state: TableState,
    show_log: bool,
    spinner_index: usize,
    theme: crate::ui::Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            tasks: vec![],
            query: String::new(),
            search_query: String::new(),
            page: 1,
            last_page: false,
            tab: Tab::Mine,
            my_tasks_count: 0,
            unassigned_tasks_count: 0,
            syncing: true,
            page_size: 25,
            search_mode: false,
            search_deadline: None,
            tasks_table_state: TableState::default(),
            show_log: false,
            spinner_index: 0,
            theme: crate::ui::Theme::default(),
        }
    }
}

impl State {
    pub fn new(net_sender: NetworkEventSender, page_size: usize) -> Self {
        State {
            net_sender: Some(net_sender),
            page_size,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &crate::ui::Theme {
        &self.theme
    }

    /// Returns the visible task rows in server order.
    ///
    pub fn get_tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the raw (trimmed) search field text.
    ///
    pub fn get_query(&self) -> &str {
        &self.query
    }

    /// Returns the committed search query, the term actually sent to the
    /// server. Empty unless the trimmed field text exceeds 2 characters.
    ///
    pub fn get_search_query(&self) -> &str {
        &self.search_query
    }

    pub fn get_page(&self) -> usize {
        self.page
    }

    pub fn is_last_page(&self) -> bool {
        self.last_page
    }

    pub fn current_tab(&self) -> Tab {
        self.tab
    }

    pub fn get_my_tasks_count(&self) -> usize {
        self.my_tasks_count
    }

    pub fn get_unassigned_tasks_count(&self) -> usize {
        self.unassigned_tasks_count
    }

    pub fn is_syncing(&self) -> bool {
        self.syncing
    }

    pub fn is_search_mode(&self) -> bool {
        self.search_mode
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn get_tasks_table_state(&mut self) -> &mut TableState {
        &mut self.tasks_table_state
    }

    /// Apply one action to the list state and classify the re-fetch it
    /// requires. This is the single transition step every mutation goes
    /// through; the dispatch side effects live in [`State::dispatch`].
    ///
    pub fn apply(&mut self, action: Action) -> Refetch {
        match action {
            Action::SearchInput(text) => {
                let trimmed = text.trim();
                self.query = trimmed.to_string();
                self.search_query = if trimmed.chars().count() >= MIN_QUERY_LEN {
                    trimmed.to_string()
                } else {
                    String::new()
                };
                Refetch::Debounced
            }
            Action::AddPage => {
                self.page += 1;
                Refetch::Immediate
            }
            Action::SwitchTab(tab) => {
                if tab == self.tab {
                    return Refetch::No;
                }
                self.reset_list_fields();
                self.tab = tab;
                self.search_mode = false;
                Refetch::Immediate
            }
            Action::Reset => {
                self.reset_list_fields();
                Refetch::Immediate
            }
            Action::Update(patch) => {
                if let Some(tasks) = patch.tasks {
                    self.tasks = tasks;
                }
                if let Some(query) = patch.query {
                    self.query = query;
                }
                if let Some(search_query) = patch.search_query {
                    self.search_query = search_query;
                }
                if let Some(page) = patch.page {
                    self.page = page;
                }
                if let Some(last_page) = patch.last_page {
                    self.last_page = last_page;
                }
                if let Some(tab) = patch.tab {
                    self.tab = tab;
                }
                Refetch::Immediate
            }
        }
    }

    /// Apply an action and perform the re-fetch it calls for: immediate
    /// re-fetches fire now and cancel any armed search timer, debounced ones
    /// (re)arm the timer.
    ///
    pub fn dispatch(&mut self, action: Action) -> &mut Self {
        match self.apply(action) {
            Refetch::No => {}
            Refetch::Immediate => {
                self.search_deadline = None;
                self.request_refetch();
            }
            Refetch::Debounced => {
                self.search_deadline = Some(Instant::now() + SEARCH_DEBOUNCE);
            }
        }
        self
    }

    /// Update the search field from raw input text.
    ///
    pub fn on_search_input(&mut self, text: &str) -> &mut Self {
        self.dispatch(Action::SearchInput(text.to_string()))
    }

    /// Add a character to the search field.
    ///
    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        let mut text = self.query.clone();
        text.push(c);
        self.on_search_input(&text)
    }

    /// Remove the last character from the search field.
    ///
    pub fn remove_search_char(&mut self) -> &mut Self {
        let mut text = self.query.clone();
        text.pop();
        self.on_search_input(&text)
    }

    /// Clear the search field entirely (the "cross click" control).
    ///
    pub fn clear_search(&mut self) -> &mut Self {
        self.on_search_input("")
    }

    /// Advance to the next page and re-fetch right away.
    ///
    pub fn add_page(&mut self) -> &mut Self {
        self.dispatch(Action::AddPage)
    }

    /// Activate the given tab. No-op if it is already active; otherwise list
    /// state resets to defaults and a re-fetch fires right away.
    ///
    pub fn switch_tab_to(&mut self, tab: Tab) -> &mut Self {
        self.dispatch(Action::SwitchTab(tab))
    }

    /// Reset list state to defaults for the current tab and re-fetch.
    ///
    pub fn reset(&mut self) -> &mut Self {
        self.dispatch(Action::Reset)
    }

    /// Merge a partial-state patch and re-fetch.
    ///
    #[allow(dead_code)]
    pub fn update(&mut self, patch: StatePatch) -> &mut Self {
        self.dispatch(Action::Update(patch))
    }

    pub fn enter_search_mode(&mut self) -> &mut Self {
        self.search_mode = true;
        self
    }

    pub fn exit_search_mode(&mut self) -> &mut Self {
        self.search_mode = false;
        self
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    /// Move the row cursor down one row.
    ///
    pub fn select_next_task(&mut self) -> &mut Self {
        if !self.tasks.is_empty() {
            let next = match self.tasks_table_state.selected() {
                Some(selected) => (selected + 1).min(self.tasks.len() - 1),
                None => 0,
            };
            self.tasks_table_state.select(Some(next));
        }
        self
    }

    /// Move the row cursor up one row.
    ///
    pub fn select_previous_task(&mut self) -> &mut Self {
        if !self.tasks.is_empty() {
            let previous = match self.tasks_table_state.selected() {
                Some(selected) => selected.saturating_sub(1),
                None => 0,
            };
            self.tasks_table_state.select(Some(previous));
        }
        self
    }

    /// Returns the task under the row cursor, if any.
    ///
    pub fn get_selected_task(&self) -> Option<&Task> {
        self.tasks_table_state
            .selected()
            .and_then(|index| self.tasks.get(index))
    }

    /// Claim the selected task. Only meaningful on the unassigned tab.
    ///
    pub fn claim_selected(&mut self) -> &mut Self {
        if self.tab != Tab::Unassigned {
            debug!("Ignoring claim request outside the unassigned tab.");
            return self;
        }
        let task_id = match self.get_selected_task() {
            Some(task) => task.id.clone(),
            None => return self,
        };
        self.syncing = true;
        if let Err(e) = self.send_network_event(NetworkEvent::Claim { id: task_id }) {
            warn!("Failed to request task claim: {}", e);
        }
        self
    }

    /// Invoked when the subscription delivers a row batch: replace the rows
    /// and derive the last-page flag. The payload is the accumulated set for
    /// pages 1..=page, so fewer rows than a full page-multiple means there
    /// are no further pages.
    ///
    pub fn on_tasks_loaded(&mut self, tasks: Vec<Task>) -> &mut Self {
        self.last_page = tasks.len() < self.page * self.page_size;
        self.tasks = tasks;
        self.syncing = false;
        if self.tasks.is_empty() {
            self.tasks_table_state.select(None);
        } else {
            let selected = self.tasks_table_state.selected().unwrap_or(0);
            self.tasks_table_state
                .select(Some(selected.min(self.tasks.len() - 1)));
        }
        self
    }

    pub fn set_tab_counts(&mut self, counts: TabCounts) -> &mut Self {
        self.my_tasks_count = counts.my;
        self.unassigned_tasks_count = counts.unassigned;
        self
    }

    pub fn set_syncing(&mut self, syncing: bool) -> &mut Self {
        self.syncing = syncing;
        self
    }

    /// Build the server-fetch request from current state. Always derived at
    /// the moment of use so the latest state update wins.
    ///
    pub fn task_list_request(&self) -> TaskListRequest {
        TaskListRequest {
            assigned: self.tab.assigned(),
            page: self.page,
            per_page: self.page_size,
            search_query: self.search_query.clone(),
        }
    }

    /// Advance the spinner and fire the search re-fetch once the quiet
    /// period has elapsed uninterrupted. Driven by the terminal tick.
    ///
    pub fn on_tick(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        if let Some(deadline) = self.search_deadline {
            if Instant::now() >= deadline {
                self.search_deadline = None;
                debug!("Search quiet period elapsed, firing re-fetch...");
                self.request_refetch();
            }
        }
        self
    }

    /// Request a re-fetch of the task list from the derived request.
    ///
    pub fn request_refetch(&mut self) -> &mut Self {
        self.syncing = true;
        if let Err(e) = self.send_network_event(NetworkEvent::FetchTasks) {
            warn!("Failed to request task re-fetch: {}", e);
        }
        self
    }

    fn reset_list_fields(&mut self) {
        self.tasks.clear();
        self.query.clear();
        self.search_query.clear();
        self.page = 1;
        self.last_page = false;
        self.tasks_table_state.select(None);
    }

    fn send_network_event(&self, event: NetworkEvent) -> Result<(), StateError> {
        let sender = self.net_sender.as_ref().ok_or(StateError::SenderNotSet)?;
        sender
            .send(event)
            .map_err(|_| StateError::ChannelDisconnected)
    }
}
