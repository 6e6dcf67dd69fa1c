pub mod chat;
pub mod responder;
