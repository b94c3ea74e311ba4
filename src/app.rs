//! Application state and key handling

use crate::controller::FormController;
use crate::error::SubmitError;
use crate::state::{FieldName, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

type SubmitResult = Result<(), SubmitError>;

/// Main application struct
pub struct App {
    /// Form state and submission logic
    pub controller: FormController,
    /// Control receiving key input
    pub focus: Focus,
    /// Whether the app should quit
    quit: bool,
    /// Outcomes of spawned inserts, delivered back to the event loop
    results_tx: mpsc::UnboundedSender<SubmitResult>,
    results_rx: mpsc::UnboundedReceiver<SubmitResult>,
}

impl App {
    /// Create a new App instance
    pub fn new(controller: FormController) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            controller,
            focus: Focus::default(),
            quit: false,
            results_tx,
            results_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether an insert is in flight
    pub fn is_submitting(&self) -> bool {
        self.controller.state().is_submitting()
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => self.submit(),
            KeyCode::Char(' ') if self.focus == Focus::SubmitButton => self.submit(),
            KeyCode::Char(c) if !ctrl => self.input_char(c),
            KeyCode::Backspace => self.backspace(),
            _ => {}
        }
    }

    fn input_char(&mut self, c: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if !field.accepts(c) {
            return;
        }
        let mut value = self.value(field).to_string();
        value.push(c);
        self.controller.on_field_change(field, value);
    }

    fn backspace(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.value(field).to_string();
        if value.pop().is_some() {
            self.controller.on_field_change(field, value);
        }
    }

    /// Start a submission; the insert runs on a separate task
    fn submit(&mut self) {
        if self.is_submitting() {
            return;
        }
        match self.controller.begin_submit() {
            Ok(pending) => {
                let tx = self.results_tx.clone();
                tokio::spawn(async move {
                    // Receiver only goes away when the app is shutting down
                    let _ = tx.send(pending.send().await);
                });
            }
            Err(SubmitError::Invalid(errors)) => {
                if let Some((field, _)) = errors.iter().next() {
                    self.focus = Focus::on(field);
                }
            }
            Err(_) => {}
        }
    }

    /// Apply the outcomes of finished inserts
    pub fn poll_submissions(&mut self) {
        while let Ok(result) = self.results_rx.try_recv() {
            let _ = self.controller.finish_submit(result);
        }
    }

    /// Wait for the next insert outcome and apply it
    #[cfg(test)]
    pub async fn wait_for_submission(&mut self) {
        if let Some(result) = self.results_rx.recv().await {
            let _ = self.controller.finish_submit(result);
        }
    }

    /// Current raw value of a field
    pub fn value(&self, field: FieldName) -> &str {
        self.controller.state().values.get(field)
    }
}
