//! Advisor chat
//!
//! Transcript storage, the responder seam and the queued chat session.

pub mod responder;
pub mod session;
pub mod transcript;

pub use responder::{Answer, KeywordResponder, Responder};
pub use session::{AdvisorReply, ChatSession, PendingReply, GREETING, SUGGESTED_QUESTIONS};
pub use transcript::Transcript;
