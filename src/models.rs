//! Core data models for the dashboard

use crate::error::DashboardError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

//
// ================= Enums =================
//

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Alert,
    Achievement,
    Market,
    Portfolio,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stock,
    Etf,
    Bond,
    Crypto,
}

//
// ================= Chat =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// Sequence number inside the session transcript
    pub id: u64,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

//
// ================= Notifications =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub priority: Priority,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    /// Short label such as "2 min ago" relative to `now`
    pub fn relative_time(&self, now: DateTime<Utc>) -> String {
        relative_label(now.signed_duration_since(self.created_at))
    }
}

fn relative_label(elapsed: Duration) -> String {
    let minutes = elapsed.num_minutes();
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{} min ago", minutes);
    }

    let hours = elapsed.num_hours();
    if hours < 24 {
        return if hours == 1 {
            "1 hour ago".to_string()
        } else {
            format!("{} hours ago", hours)
        };
    }

    let days = elapsed.num_days();
    if days == 1 {
        "1 day ago".to_string()
    } else {
        format!("{} days ago", days)
    }
}

//
// ================= News =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub sentiment: Sentiment,
    pub impact: Impact,
    pub category: String,
    pub related_stocks: Vec<String>,
}

//
// ================= Portfolio =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub shares: f64,
    pub avg_price: f64,
    pub current_price: f64,
    pub asset_type: AssetType,
}

impl Holding {
    pub fn value(&self) -> f64 {
        self.shares * self.current_price
    }

    pub fn cost_basis(&self) -> f64 {
        self.shares * self.avg_price
    }

    pub fn gain_loss(&self) -> f64 {
        (self.current_price - self.avg_price) * self.shares
    }

    pub fn gain_loss_percent(&self) -> f64 {
        if self.avg_price == 0.0 {
            return 0.0;
        }
        (self.current_price - self.avg_price) / self.avg_price * 100.0
    }
}

//
// ================= Display / FromStr =================
//

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MessageRole::User => "User",
            MessageRole::Assistant => "Advisor",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NotificationCategory::Alert => "alert",
            NotificationCategory::Achievement => "achievement",
            NotificationCategory::Market => "market",
            NotificationCategory::Portfolio => "portfolio",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for NotificationCategory {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alert" => Ok(NotificationCategory::Alert),
            "achievement" => Ok(NotificationCategory::Achievement),
            "market" => Ok(NotificationCategory::Market),
            "portfolio" => Ok(NotificationCategory::Portfolio),
            other => Err(DashboardError::InvalidSelection(format!(
                "unknown notification category '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Priority {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(DashboardError::InvalidSelection(format!(
                "unknown priority '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Sentiment {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(DashboardError::InvalidSelection(format!(
                "unknown sentiment '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssetType::Stock => "Stock",
            AssetType::Etf => "ETF",
            AssetType::Bond => "Bond",
            AssetType::Crypto => "Crypto",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_labels() {
        assert_eq!(relative_label(Duration::seconds(20)), "just now");
        assert_eq!(relative_label(Duration::minutes(2)), "2 min ago");
        assert_eq!(relative_label(Duration::minutes(61)), "1 hour ago");
        assert_eq!(relative_label(Duration::hours(3)), "3 hours ago");
        assert_eq!(relative_label(Duration::hours(30)), "1 day ago");
    }

    #[test]
    fn test_enum_wire_names() {
        let json = serde_json::to_string(&NotificationCategory::Achievement).unwrap();
        assert_eq!(json, "\"achievement\"");

        let role: MessageRole = serde_json::from_str("\"assistant\"").unwrap();
        assert_eq!(role, MessageRole::Assistant);
    }

    #[test]
    fn test_parse_selections() {
        assert_eq!("Market".parse::<NotificationCategory>().unwrap(), NotificationCategory::Market);
        assert_eq!(" HIGH ".parse::<Priority>().unwrap(), Priority::High);
        assert!("bullish".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_holding_math() {
        let holding = Holding {
            symbol: "TSLA".to_string(),
            name: "Tesla Inc.".to_string(),
            shares: 20.0,
            avg_price: 250.0,
            current_price: 225.0,
            asset_type: AssetType::Stock,
        };
        assert_eq!(holding.value(), 4500.0);
        assert_eq!(holding.gain_loss(), -500.0);
        assert_eq!(holding.gain_loss_percent(), -10.0);
    }
}
