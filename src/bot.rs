pub mod commands;
pub mod handler;
pub mod lifecycle;
pub mod responder;

pub use handler::{BotState, Handler};
pub use responder::DiscordResponder;
