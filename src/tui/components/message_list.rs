//! Scrollable conversation view.
//!
//! Renders the whole log into a `ScrollView` sized to the summed entry
//! heights, so scroll positions stay accurate without rendering off-screen
//! entries to measure them. The view follows the newest entry: any log
//! mutation snaps the scroll position to the bottom, and the End key does
//! the same manually.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::qa::ChatLog;
use crate::tui::components::message::Message;
use crate::tui::event::TuiEvent;

/// Persistent scroll state, kept across frames.
pub struct MessageListState {
    pub scroll_state: ScrollViewState,
    /// Log length at the last render; a change triggers the snap-to-newest.
    last_len: usize,
}

impl Default for MessageListState {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            last_len: 0,
        }
    }

    /// Routes scroll events into the scroll state. Returns true when the
    /// event was consumed (a redraw is needed).
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollToBottom => self.scroll_state.scroll_to_bottom(),
            _ => return false,
        }
        true
    }
}

/// Per-frame props for the list. Created fresh each draw.
pub struct MessageList<'a> {
    pub log: &'a ChatLog,
    /// Breathing intensity for the newest entry while an answer is pending.
    pub pulse_intensity: f32,
    pub is_loading: bool,
}

impl<'a> MessageList<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &mut MessageListState) {
        // Reserve one column for the scrollbar.
        let content_width = area.width.saturating_sub(1);

        let heights: Vec<u16> = self
            .log
            .messages
            .iter()
            .map(|entry| Message::calculate_height(entry, content_width))
            .collect();
        let total_height: u16 = heights.iter().sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let newest = self.log.len().saturating_sub(1);
        let mut y_offset: u16 = 0;
        for (index, entry) in self.log.messages.iter().enumerate() {
            let pulse = if self.is_loading && index == newest {
                self.pulse_intensity
            } else {
                0.0
            };
            let rect = Rect::new(0, y_offset, content_width, heights[index]);
            scroll_view.render_widget(Message::new(entry, pulse), rect);
            y_offset += heights[index];
        }

        // Auto-scroll to the newest entry on every log mutation.
        if state.last_len != self.log.len() {
            state.last_len = self.log.len();
            state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut state.scroll_state);
    }
}
