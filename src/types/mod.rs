//! Core types: conversation turns and chat request/response bodies.

pub mod chat;
pub mod message;

pub use chat::{ChatRequest, ChatResponse, ErrorBody};
pub use message::{ChatTurn, Role};
