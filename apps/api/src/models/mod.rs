pub mod candidate;
pub mod message;
pub mod progress;
pub mod stage;
