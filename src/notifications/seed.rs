//! Demo notifications used to bootstrap a session

use crate::models::{Notification, NotificationCategory, Priority};
use chrono::{Duration, Utc};

pub fn mock_notifications() -> Vec<Notification> {
    let now = Utc::now();

    vec![
        Notification {
            id: "1".to_string(),
            title: "Portfolio Alert".to_string(),
            message: "AAPL is down 5% from your average price".to_string(),
            category: NotificationCategory::Alert,
            priority: Priority::High,
            created_at: now - Duration::minutes(2),
            read: false,
        },
        Notification {
            id: "2".to_string(),
            title: "Market Update".to_string(),
            message: "S&P 500 reached new all-time high".to_string(),
            category: NotificationCategory::Market,
            priority: Priority::Medium,
            created_at: now - Duration::minutes(15),
            read: false,
        },
        Notification {
            id: "3".to_string(),
            title: "Achievement Unlocked".to_string(),
            message: "You have reached 90% of your investment goal".to_string(),
            category: NotificationCategory::Achievement,
            priority: Priority::Low,
            created_at: now - Duration::hours(1),
            read: true,
        },
        Notification {
            id: "4".to_string(),
            title: "Price Target Hit".to_string(),
            message: "TSLA has reached your target price of $250".to_string(),
            category: NotificationCategory::Portfolio,
            priority: Priority::Medium,
            created_at: now - Duration::hours(2),
            read: true,
        },
        Notification {
            id: "5".to_string(),
            title: "Market Alert".to_string(),
            message: "High volatility detected in tech sector".to_string(),
            category: NotificationCategory::Market,
            priority: Priority::High,
            created_at: now - Duration::hours(3),
            read: false,
        },
    ]
}
