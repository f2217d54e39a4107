use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Braille spinner shown while an answer is pending.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Top status bar: app name, request spinner, and session status.
///
/// Stateless; all data arrives as props each frame. The offline indicator
/// wins over the status text because the latch is the one state the user
/// cannot act their way out of.
pub struct TitleBar<'a> {
    pub status: &'a str,
    pub offline: bool,
    pub loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "QnA Agent Assistant",
            Style::default().add_modifier(Modifier::BOLD),
        )];

        if self.loading {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()],
                Style::default().fg(Color::Green),
            ));
        }

        if self.offline {
            spans.push(Span::styled(
                " | offline — restart to reconnect",
                Style::default().fg(Color::Red),
            ));
        } else if !self.status.is_empty() {
            spans.push(Span::styled(
                format!(" | {}", self.status),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(bar: TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_shows_app_name_and_status() {
        let text = draw(TitleBar {
            status: "Welcome to QnA!",
            offline: false,
            loading: false,
            spinner_frame: 0,
        });
        assert!(text.contains("QnA Agent Assistant"));
        assert!(text.contains("Welcome to QnA!"));
    }

    #[test]
    fn test_offline_indicator_replaces_status() {
        let text = draw(TitleBar {
            status: "should not appear",
            offline: true,
            loading: false,
            spinner_frame: 0,
        });
        assert!(text.contains("offline"));
        assert!(!text.contains("should not appear"));
    }

    #[test]
    fn test_spinner_visible_while_loading() {
        let text = draw(TitleBar {
            status: "",
            offline: false,
            loading: true,
            spinner_frame: 3,
        });
        assert!(text.contains(SPINNER_FRAMES[3]));
    }
}
