//! UI module for rendering the TUI

mod components;
mod contact_info;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header, app);
    contact_info::draw(frame, areas.info, app);
    forms::draw_contact_form(frame, areas.form, app);
    layout::draw_status_bar(frame, areas.status_bar, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::dispatch::{DispatchError, MockEmailDispatcher};
    use crate::state::ContactField;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        App::new(AppConfig::default(), Arc::new(MockEmailDispatcher::new()))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 45)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_initial_screen_shows_content() {
        let screen = render(&app());
        assert!(screen.contains("Contact Me"));
        assert!(screen.contains("GET IN TOUCH"));
        assert!(screen.contains("Your Name"));
        assert!(screen.contains("Your Email"));
        assert!(screen.contains("Your Message"));
        assert!(screen.contains("Send Message"));
        assert!(screen.contains("hello@orvith.com"));
        assert!(screen.contains("GitHub"));
        assert!(!screen.contains("Please complete all required fields correctly"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_submit_shows_errors_and_banner() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        let screen = render(&app);
        assert!(screen.contains("Please complete all required fields correctly"));
        assert!(screen.contains("Name is required"));
        assert!(screen.contains("Email is required"));
        assert!(screen.contains("Message is required"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_blurred_field_shows_its_error() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));

        let screen = render(&app);
        assert!(screen.contains("Name must be at least 2 characters"));
        assert!(!screen.contains("Email is required"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_status_shows_message_and_retry_hint() {
        let mut app = app();
        app.form.on_change(ContactField::Name, "Jane Doe");
        app.form.on_change(ContactField::Email, "jane@example.com");
        app.form.on_change(ContactField::Message, "Hello, I would like to collaborate.");
        app.form.begin_submit();
        app.form.finish_submit(Err(DispatchError::Rejected {
            status: 400,
            text: "The template ID is invalid".to_string(),
        }));

        let screen = render(&app);
        assert!(screen.contains("The template ID is invalid"));
        assert!(screen.contains("Please try again or contact directly via email."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submitting_swaps_button_label() {
        let mut app = app();
        app.form.on_change(ContactField::Name, "Jane Doe");
        app.form.on_change(ContactField::Email, "jane@example.com");
        app.form.on_change(ContactField::Message, "Hello, I would like to collaborate.");
        app.form.begin_submit();

        let screen = render(&app);
        assert!(screen.contains("Sending..."));
        assert!(screen.contains("submitting"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_shows_confirmation() {
        let mut app = app();
        app.form.on_change(ContactField::Name, "Jane Doe");
        app.form.on_change(ContactField::Email, "jane@example.com");
        app.form.on_change(ContactField::Message, "Hello, I would like to collaborate.");
        app.form.begin_submit();
        app.form.finish_submit(Ok(()));

        let screen = render(&app);
        assert!(screen.contains("Your message has been sent successfully!"));
        assert!(screen.contains("Sent at"));
    }
}
