use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::domain::constants::{MSG_INCOMPLETE, PREDICT_URL};
use crate::domain::models::Field;
use crate::services::form::FormState;
use crate::services::predict;
use crate::tui::view;

/// Poll interval for the event loop; between key events the loop wakes up
/// this often to collect finished submissions and redraw.
const TICK: Duration = Duration::from_millis(100);

/// All screen state. Mutated only on the UI thread; submissions run on
/// worker threads and report back through the outcome channel.
pub struct App {
    pub form: FormState,
    /// Latest submission outcome; replaced wholesale on every attempt.
    pub result: Option<String>,
    pub focus: Field,
    /// True while a request is in flight. Submit is a no-op until the
    /// outcome lands, so at most one request exists at a time.
    pub pending: bool,
    pub should_quit: bool,
    endpoint: String,
    outcome_tx: Sender<String>,
    outcome_rx: Receiver<String>,
}

impl App {
    pub fn new() -> App {
        let (outcome_tx, outcome_rx) = mpsc::channel();
        App {
            form: FormState::default(),
            result: None,
            focus: Field::ALL[0],
            pending: false,
            should_quit: false,
            endpoint: PREDICT_URL.to_string(),
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => self.form.delete_last(self.focus),
            KeyCode::Char(c) => self.form.push_char(self.focus, c),
            _ => {}
        }
    }

    /// Explicit submit action. Validation failures never reach the network.
    pub fn submit(&mut self) {
        if self.pending {
            return;
        }
        if !self.form.is_complete() {
            self.result = Some(MSG_INCOMPLETE.to_string());
            return;
        }
        self.result = None;
        self.pending = true;
        predict::spawn_submit(
            self.endpoint.clone(),
            self.form.to_measurements(),
            self.outcome_tx.clone(),
        );
    }

    /// Applies any finished submission to the screen state.
    pub fn drain_outcomes(&mut self) {
        while let Ok(message) = self.outcome_rx.try_recv() {
            self.result = Some(message);
            self.pending = false;
        }
    }
}

impl Default for App {
    fn default() -> App {
        App::new()
    }
}

pub fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit {
        app.drain_outcomes();
        terminal.draw(|f| view::draw(f, app))?;
        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
                _ => {}
            }
        }
    }
    Ok(())
}
