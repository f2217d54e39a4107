//! # TUI Components
//!
//! Components follow two patterns:
//!
//! - **Stateless (props-based)**: created fresh each frame with everything
//!   they need — `TitleBar`, `Message`, `LandingPage`.
//! - **Stateful (event-driven)**: hold local state across frames and emit
//!   high-level events — `InputBox`, `MessageListState`.
//!
//! Each component file co-locates its state types, event types, rendering,
//! and tests, so one file tells the whole story of one component.

pub mod input_box;
pub mod landing;
pub mod message;
pub mod message_list;
pub mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use landing::LandingPage;
pub use message_list::{MessageList, MessageListState};
pub use title_bar::TitleBar;
