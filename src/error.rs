//! Error types for the CogniWealth dashboard core

use thiserror::Error;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Error, Debug)]
pub enum DashboardError {

    // =============================
    // Configuration
    // =============================

    #[error("Configuration error: {0}")]
    Config(String),

    // =============================
    // Chat
    // =============================

    #[error("Empty query: nothing to send to the advisor")]
    EmptyQuery,

    #[error("Chat session closed: {0}")]
    SessionClosed(String),

    // =============================
    // Parsing
    // =============================

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}
