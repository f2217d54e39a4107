pub mod http;
pub mod service;
pub mod types;

pub use http::HttpAnsweringService;
pub use service::{AnsweringService, ServiceError};
pub use types::{AskRequest, AskResponse, ChatLog, Message, Role};
