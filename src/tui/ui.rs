use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{LandingPage, MessageList, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

/// Composes the frame: title bar, log view (or landing pane), input box.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(3)]);
    let [title_area, main_area, input_area] = layout.areas(frame.area());

    TitleBar {
        status: &app.status_message,
        offline: app.connection_error.is_some(),
        loading: app.is_loading,
        spinner_frame,
    }
    .render(frame, title_area);

    if app.log.is_empty() {
        LandingPage {
            pulse_value: tui.pulse_value,
        }
        .render(frame, main_area);
    } else {
        MessageList {
            log: &app.log,
            pulse_intensity: tui.pulse_value,
            is_loading: app.is_loading,
        }
        .render(frame, main_area, &mut tui.message_list);
    }

    tui.input_box.render(frame, input_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::qa::ServiceError;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_draw_empty_session_shows_landing() {
        let app = test_app();
        let mut tui = TuiState::new();
        let screen = draw(&app, &mut tui);
        assert!(screen.contains("Ready to help you explore!"));
    }

    #[test]
    fn test_draw_conversation() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::Submit("What is Rust?".to_string()));
        update(&mut app, Action::AnswerReceived("A systems language.".to_string()));

        let screen = draw(&app, &mut tui);
        assert!(screen.contains("What is Rust?"));
        assert!(screen.contains("A systems language."));
        assert!(!screen.contains("Ready to help you explore!"));
    }

    #[test]
    fn test_draw_latched_session_shows_offline() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        update(&mut app, Action::Submit("q".to_string()));
        update(
            &mut app,
            Action::RequestFailed(ServiceError::Network("refused".to_string())),
        );

        let screen = draw(&app, &mut tui);
        assert!(screen.contains("offline"));
        assert!(screen.contains("Cannot connect to server."));
    }
}
