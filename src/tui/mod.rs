//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (landing page, request in flight): draws every ~80ms for
//!   a smooth spinner and pulse.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call, making blinking cursors appear erratic during continuous
//! redraws.

pub mod component;
pub mod components;
pub mod event;
pub mod format;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::qa::{AnsweringService, HttpAnsweringService};
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub message_list: MessageListState,
    pub input_box: InputBox,
    // Animation state
    pub pulse_value: f32,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
            pulse_value: 0.0,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement flags let us tell modified Enter apart from a
        // plain Enter; terminals without the protocol ignore them harmlessly.
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Build the answering-service client from resolved config.
pub fn build_service(config: &ResolvedConfig) -> Arc<dyn AnsweringService> {
    Arc::new(HttpAnsweringService::new(
        config.base_url.clone(),
        config.request_timeout,
        config.max_answer_length,
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service = build_service(&config);
    let mut app = App::new(service);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from the background request task
    let (tx, rx) = mpsc::channel();

    // Abort handle for the in-flight request (used by Escape-to-cancel)
    let mut active_abort_handle: Option<tokio::task::AbortHandle> = None;

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Sync InputBox props with App state
        tui.input_box.loading = app.is_loading;
        tui.input_box.offline = app.connection_error.is_some();

        // Animations run on the landing page and while waiting for an answer
        let animating = app.is_loading || app.log.is_empty();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            tui.pulse_value = (elapsed * 5.0).sin() * 0.5 + 0.5;
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Esc while loading cancels the request; otherwise it quits
            if matches!(event, TuiEvent::Escape) {
                if app.is_loading {
                    if let Some(handle) = active_abort_handle.take() {
                        handle.abort();
                    }
                    update(&mut app, Action::CancelRequest);
                } else if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Scroll events go to the message list
            if tui.message_list.handle_event(&event) {
                continue;
            }

            // Everything else is input editing
            if let Some(InputEvent::Submit(text)) = tui.input_box.handle_event(&event)
                && let Effect::SpawnRequest(question) = update(&mut app, Action::Submit(text))
            {
                active_abort_handle =
                    Some(spawn_request(app.service.clone(), question, tx.clone()));
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (request completions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::Quit => should_quit = true,
                Effect::SpawnRequest(question) => {
                    active_abort_handle =
                        Some(spawn_request(app.service.clone(), question, tx.clone()));
                }
                Effect::None => {}
            }
            if !app.is_loading {
                active_abort_handle = None;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Spawns the outbound call for one question. The task resolves the whole
/// request lifecycle into a single terminal `Action`; aborting it (Esc)
/// means no action is ever sent, so a cancelled request appends nothing.
fn spawn_request(
    service: Arc<dyn AnsweringService>,
    question: String,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning ask request");

    let handle = tokio::spawn(async move {
        let action = match service.ask(&question).await {
            Ok(answer) => Action::AnswerReceived(answer),
            Err(e) => Action::RequestFailed(e),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send request outcome: receiver dropped");
        }
    });

    handle.abort_handle()
}
