//! Message content → ratatui `Text` renderer.
//!
//! Answers sometimes embed a JSON payload in prose. This module detects a
//! candidate region (first `{` through the last `}`), tries to parse it, and
//! renders prose / pretty-printed block / prose when it succeeds. Anything
//! else falls back to plain line-based rendering.
//!
//! The detection is a best-effort heuristic, not a structured-data contract:
//! the greedy first-to-last capture can mis-segment text containing several
//! unrelated brace pairs, in which case parsing fails and the fallback wins.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// The displayable form of a message body. Produced by [`format_content`],
/// which is pure and deterministic given the same input text.
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedContent {
    /// Line-based rendering, line breaks preserved.
    Plain(Vec<String>),
    /// Prose around a detected JSON payload.
    Json {
        before: String,
        /// The payload re-serialized with standard indentation.
        pretty: String,
        after: String,
    },
}

/// Splits message text into its displayable structure.
pub fn format_content(content: &str) -> FormattedContent {
    match try_extract_json(content) {
        Some(formatted) => formatted,
        None => FormattedContent::Plain(content.split('\n').map(str::to_string).collect()),
    }
}

/// Attempts the brace-delimited JSON extraction. Returns None when no
/// candidate region exists or the region does not parse.
fn try_extract_json(content: &str) -> Option<FormattedContent> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }

    let value: serde_json::Value = serde_json::from_str(&content[start..=end]).ok()?;
    let pretty = serde_json::to_string_pretty(&value).ok()?;

    Some(FormattedContent::Json {
        before: content[..start].to_string(),
        pretty,
        after: content[end + 1..].to_string(),
    })
}

/// Renders message content as styled `Text` in the given base color.
///
/// Returns owned text (`'static`) so callers aren't constrained by input
/// lifetime. Detected JSON blocks are set off in green, the way a terminal
/// pretty-printer would show them.
pub fn render(content: &str, base_fg: Color) -> Text<'static> {
    let base = Style::default().fg(base_fg);
    let json_style = Style::default().fg(Color::Green).add_modifier(Modifier::DIM);

    let mut lines: Vec<Line<'static>> = Vec::new();
    match format_content(content) {
        FormattedContent::Plain(plain) => {
            for line in plain {
                lines.push(Line::from(Span::styled(line, base)));
            }
        }
        FormattedContent::Json { before, pretty, after } => {
            let before = before.trim_end();
            if !before.is_empty() {
                for line in before.split('\n') {
                    lines.push(Line::from(Span::styled(line.to_string(), base)));
                }
            }
            for line in pretty.split('\n') {
                lines.push(Line::from(Span::styled(line.to_string(), json_style)));
            }
            let after = after.trim_start();
            if !after.is_empty() {
                for line in after.split('\n') {
                    lines.push(Line::from(Span::styled(line.to_string(), base)));
                }
            }
        }
    }

    Text::from(lines)
}
