// Candidate intake: field validation, the dialogue state machine, sessions
// and their in-memory store, and the HTTP handlers that host them.
// The engine is synchronous; only the handlers and the store are async.

pub mod dialogue;
pub mod handlers;
pub mod prompts;
pub mod session;
pub mod store;
pub mod validation;
