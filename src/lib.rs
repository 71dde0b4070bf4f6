//! CogniWealth dashboard core
//!
//! Decision logic behind the consumer finance dashboard:
//! - Rule-based advisor chat (first-match keyword classifier, queued replies)
//! - Notification store with read state and unread-count broadcast
//! - News feed filtering and portfolio overview metrics over demo data
//!
//! CHAT FLOW:
//! SUBMIT → APPEND USER MESSAGE → QUEUE → DELAY → CLASSIFY → APPEND REPLY

pub mod analysis;
pub mod chat;
pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod news;
pub mod notifications;
pub mod portfolio;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use chat::{AdvisorReply, ChatSession, KeywordResponder, Responder};
pub use classifier::{ResponseClassifier, Topic};
pub use config::{DashboardConfig, ReplyDelay};
pub use notifications::{NotificationStore, UnreadSubscriber};
