pub mod scripted;

pub use scripted::{replies, ScriptedResponder, FALLBACK_REPLY, WELCOME_MESSAGE};

/// Produces the assistant's reply for one user message.
pub trait ResponderEngine: Send + Sync {
    fn respond(&self, input: &str) -> String;
}
