use crate::state::State;
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            if event::poll(tick_rate).unwrap() {
                if let CrosstermEvent::Key(key) = event::read().unwrap() {
                    tx_clone.send(Event::Input(key)).unwrap();
                }
            }
            tx_clone.send(Event::Tick).unwrap();
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(Self::apply_key(state, key)),
            Event::Tick => {
                state.on_tick();
                Ok(true)
            }
        }
    }

    /// Apply one key event to state. Returns false if exit was requested.
    ///
    pub(crate) fn apply_key(state: &mut State, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return true;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }

        // The log view swallows everything except its own toggle and exit.
        if state.is_log_visible() {
            match key.code {
                KeyCode::Char('l') | KeyCode::Esc => {
                    state.toggle_log();
                }
                KeyCode::Char('q') => return false,
                _ => {}
            }
            return true;
        }

        // While the search field has focus, printable keys are query text.
        // Esc acts as the clear control; Tab still switches tabs.
        if state.is_search_mode() {
            match key.code {
                KeyCode::Esc => {
                    state.clear_search().exit_search_mode();
                }
                KeyCode::Enter => {
                    state.exit_search_mode();
                }
                KeyCode::Backspace => {
                    state.remove_search_char();
                }
                KeyCode::Tab => {
                    let next = state.current_tab().toggled();
                    state.switch_tab_to(next);
                }
                KeyCode::Char(c) => {
                    state.add_search_char(c);
                }
                _ => {}
            }
            return true;
        }

        match key.code {
            KeyCode::Char('q') => {
                debug!("Processing exit terminal event '{:?}'...", key);
                return false;
            }
            KeyCode::Char('/') => {
                state.enter_search_mode();
            }
            KeyCode::Esc => {
                if !state.get_query().is_empty() {
                    state.clear_search();
                }
            }
            KeyCode::Tab => {
                let next = state.current_tab().toggled();
                state.switch_tab_to(next);
            }
            KeyCode::Char('j') | KeyCode::Down => {
                state.select_next_task();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.select_previous_task();
            }
            KeyCode::Char(']') | KeyCode::PageDown => {
                if !state.is_last_page() {
                    state.add_page();
                }
            }
            KeyCode::Char('c') => {
                state.claim_selected();
            }
            KeyCode::Char('r') => {
                state.reset();
            }
            KeyCode::Char('l') => {
                state.toggle_log();
            }
            _ => {}
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::network::Event as NetworkEvent;
    use crate::state::Tab;
    use std::sync::mpsc::{channel, Receiver};

    fn new_state() -> (State, Receiver<NetworkEvent>) {
        let (tx, rx) = channel();
        (State::new(tx, 25), rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let (mut state, _rx) = new_state();
        assert!(!Handler::apply_key(&mut state, press(KeyCode::Char('q'))));
        assert!(!Handler::apply_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        ));
    }

    #[test]
    fn test_search_mode_captures_text() {
        let (mut state, _rx) = new_state();

        assert!(Handler::apply_key(&mut state, press(KeyCode::Char('/'))));
        assert!(state.is_search_mode());

        for c in "test".chars() {
            Handler::apply_key(&mut state, press(KeyCode::Char(c)));
        }
        assert_eq!(state.get_query(), "test");

        // 'q' is query text while searching, not an exit request
        assert!(Handler::apply_key(&mut state, press(KeyCode::Char('q'))));
        assert_eq!(state.get_query(), "testq");

        Handler::apply_key(&mut state, press(KeyCode::Backspace));
        assert_eq!(state.get_query(), "test");
    }

    #[test]
    fn test_escape_clears_search_field() {
        let (mut state, _rx) = new_state();
        Handler::apply_key(&mut state, press(KeyCode::Char('/')));
        for c in "test".chars() {
            Handler::apply_key(&mut state, press(KeyCode::Char(c)));
        }

        Handler::apply_key(&mut state, press(KeyCode::Esc));
        assert_eq!(state.get_query(), "");
        assert_eq!(state.get_search_query(), "");
        assert!(!state.is_search_mode());
    }

    #[test]
    fn test_tab_key_switches_tab_even_while_searching() {
        let (mut state, _rx) = new_state();
        Handler::apply_key(&mut state, press(KeyCode::Char('/')));
        for c in "test".chars() {
            Handler::apply_key(&mut state, press(KeyCode::Char(c)));
        }

        Handler::apply_key(&mut state, press(KeyCode::Tab));
        assert_eq!(state.current_tab(), Tab::Unassigned);
        assert_eq!(state.get_query(), "");
        assert!(!state.is_search_mode());
    }

    #[test]
    fn test_page_advance_guarded_by_last_page() {
        let (mut state, rx) = new_state();
        state.on_tasks_loaded(vec![]);
        assert!(state.is_last_page());

        Handler::apply_key(&mut state, press(KeyCode::Char(']')));
        assert_eq!(state.get_page(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_log_view_swallows_keys() {
        let (mut state, _rx) = new_state();
        Handler::apply_key(&mut state, press(KeyCode::Char('l')));
        assert!(state.is_log_visible());

        Handler::apply_key(&mut state, press(KeyCode::Char('/')));
        assert!(!state.is_search_mode());

        Handler::apply_key(&mut state, press(KeyCode::Char('l')));
        assert!(!state.is_log_visible());
    }
}
