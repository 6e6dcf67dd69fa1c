pub mod intent;
pub mod message;
pub mod session;

pub use intent::Intent;
pub use message::ChatMessage;
pub use session::{ChatEvent, ChatSession, SessionSummary};
