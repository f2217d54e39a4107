use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

/// Empty-state pane shown before the first message.
///
/// Breathes with the shared pulse value so the screen doesn't look frozen
/// while idle.
pub struct LandingPage {
    pub pulse_value: f32,
}

impl LandingPage {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [_, center, _] = Layout::vertical([Min(0), Length(3), Min(0)]).areas(area);

        let heading_style = if self.pulse_value > 0.5 {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let lines = vec![
            Line::styled("Ready to help you explore!", heading_style),
            Line::default(),
            Line::styled(
                "Your intelligent companion for movies, programming, books, and more!",
                Style::default().fg(Color::DarkGray),
            ),
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, center);
    }
}
