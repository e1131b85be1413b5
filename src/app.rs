//! Application state and core logic

use crate::config::AppConfig;
use crate::dispatch::{DispatchError, EmailDispatcher};
use crate::platform;
use crate::state::{ContactContent, ContactField, FormController, SubmitStart};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Events posted back to the main loop by timers and background tasks
#[derive(Debug)]
pub enum AppEvent {
    /// A field's keystroke burst settled
    Revalidate(ContactField),
    /// The email dispatch task finished
    DispatchSettled(Result<(), DispatchError>),
}

/// Which control has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(ContactField),
    Submit,
}

impl Focus {
    /// Three fields plus the submit button
    const COUNT: usize = ContactField::ALL.len() + 1;

    fn at(position: usize) -> Self {
        ContactField::from_index(position)
            .map(Focus::Field)
            .unwrap_or(Focus::Submit)
    }

    fn position(&self) -> usize {
        match self {
            Focus::Field(field) => field.index(),
            Focus::Submit => ContactField::ALL.len(),
        }
    }

    pub fn next(&self) -> Self {
        Self::at((self.position() + 1) % Self::COUNT)
    }

    pub fn prev(&self) -> Self {
        Self::at((self.position() + Self::COUNT - 1) % Self::COUNT)
    }

    pub fn field(&self) -> Option<ContactField> {
        match self {
            Focus::Field(field) => Some(*field),
            Focus::Submit => None,
        }
    }
}

/// Main application struct
pub struct App {
    /// Contact form state
    pub form: FormController,
    /// Display strings
    pub content: ContactContent,
    /// Currently focused control
    pub focus: Focus,
    dispatcher: Arc<dyn EmailDispatcher>,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: AppConfig, dispatcher: Arc<dyn EmailDispatcher>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        let debounce_tx = events_tx.clone();
        let form = FormController::new(&config.content, config.debounce_delay(), move |field, _| {
            // Receiver only disappears on shutdown
            let _ = debounce_tx.send(AppEvent::Revalidate(field));
        });

        tracing::info!(session = %form.session_id(), "contact form ready");

        Self {
            form,
            content: config.content,
            focus: Focus::Field(ContactField::Name),
            dispatcher,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply every event that arrived since the last frame
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Revalidate(field) => self.form.apply_debounced(field),
            AppEvent::DispatchSettled(result) => self.form.finish_submit(result),
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if platform::is_submit_shortcut(&key) {
            self.submit();
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.move_focus(self.focus.next()),
            KeyCode::BackTab => self.move_focus(self.focus.prev()),
            KeyCode::Enter => match self.focus {
                Focus::Submit => self.submit(),
                Focus::Field(field) if field.is_multiline() => self.edit(field, |v| v.push('\n')),
                Focus::Field(_) => self.move_focus(self.focus.next()),
            },
            KeyCode::Backspace => {
                if let Some(field) = self.focus.field() {
                    self.edit(field, |v| {
                        v.pop();
                    });
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.focus.field() {
                    self.edit(field, |v| v.push(c));
                }
            }
            _ => {}
        }
    }

    /// Move focus, treating the field being left as blurred
    fn move_focus(&mut self, target: Focus) {
        if let Some(field) = self.focus.field() {
            self.form.on_blur(field);
        }
        self.focus = target;
    }

    fn edit(&mut self, field: ContactField, apply: impl FnOnce(&mut String)) {
        let mut value = self.form.value(field).to_string();
        apply(&mut value);
        self.form.on_change(field, value);
    }

    /// Start a submission and hand the dispatch to a background task
    fn submit(&mut self) {
        let submission = match self.form.begin_submit() {
            SubmitStart::Dispatch(submission) => submission,
            SubmitStart::Invalid | SubmitStart::AlreadySubmitting => return,
        };

        let dispatcher = Arc::clone(&self.dispatcher);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = dispatcher.send(&submission).await;
            let _ = tx.send(AppEvent::DispatchSettled(result));
        });
    }
}
