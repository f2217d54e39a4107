use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget, Wrap};

use crate::qa::{Message as LogEntry, Role};
use crate::tui::component::Component;
use crate::tui::format;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders a single log entry with role-based
/// styling.
///
/// `Message` is a transient component: it's created fresh each frame with
/// the data it needs to render and holds no mutable state.
///
/// Each role gets distinct visual treatment:
/// - **User** (cyan): questions from the human
/// - **Assistant** (green): answers from the service
/// - **Error** (red): failed requests, rendered inline in the log
///
/// Content goes through [`format::render`], so answers that embed a JSON
/// payload get a pretty-printed block between their surrounding prose.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    pub entry: &'a LogEntry,
    /// Whether this is the newest entry while a request is in flight.
    pub pulse_intensity: f32,
}

/// Pulse intensity threshold above which the border drops its DIM modifier.
const PULSE_NORMAL_THRESHOLD: f32 = 0.5;

impl<'a> Message<'a> {
    pub fn new(entry: &'a LogEntry, pulse_intensity: f32) -> Self {
        Self {
            entry,
            pulse_intensity,
        }
    }

    /// Calculate the height required for this entry at the given width.
    ///
    /// Uses `Paragraph::line_count` on the same wrapped text the `Widget`
    /// impl draws, so the parent list can lay out scroll positions without
    /// rendering first.
    pub fn calculate_height(entry: &LogEntry, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal too narrow for borders + padding; still occupy a row.
            return 1;
        }

        let text = format::render(entry.content.trim(), Color::Reset);
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        (paragraph.line_count(content_width) as u16).max(1) + VERTICAL_OVERHEAD
    }

    fn role_label(role: Role) -> &'static str {
        match role {
            Role::User => "user",
            Role::Assistant => "qna",
            Role::Error => "error",
        }
    }

    fn role_color(role: Role) -> Color {
        match role {
            Role::User => Color::Cyan,
            Role::Assistant => Color::Green,
            Role::Error => Color::Red,
        }
    }
}

impl<'a> Widget for Message<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let color = Self::role_color(self.entry.role);
        let style = Style::default().fg(color);

        // Borders sit dim; the newest entry breathes while an answer is
        // being generated.
        let mut border_style = style.add_modifier(Modifier::DIM);
        if self.pulse_intensity > PULSE_NORMAL_THRESHOLD {
            border_style = border_style.remove_modifier(Modifier::DIM);
        }

        let block = Block::bordered()
            .title(Self::role_label(self.entry.role))
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .title_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let text = format::render(self.entry.content.trim(), color);
        let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
        paragraph.render(inner_area, buf);
    }
}

impl<'a> Component for Message<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
