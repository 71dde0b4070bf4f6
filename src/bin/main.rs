use cogniwealth::{
    chat::{ChatSession, KeywordResponder, SUGGESTED_QUESTIONS},
    config::DashboardConfig,
    news::{self, NewsFilter},
    notifications::{seed::mock_notifications, NotificationStore},
    portfolio::{self, PortfolioSummary},
};
use chrono::Utc;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DashboardConfig::from_env()?;
    info!(
        min_ms = config.reply_delay.min_ms,
        max_ms = config.reply_delay.max_ms,
        "CogniWealth dashboard starting"
    );

    // Portfolio
    let summary = PortfolioSummary::from_holdings(&portfolio::mock_holdings());
    println!("\n=== PORTFOLIO ===");
    println!("{}", serde_json::to_string_pretty(&summary)?);

    // News
    let feed = news::mock_news();
    let everything = NewsFilter::default().apply(&feed);
    println!("\n=== NEWS ({:?}) ===", news::overall_sentiment(everything.iter().copied()));
    for item in everything {
        println!("  [{}] {} ({})", item.category, item.title, item.sentiment);
    }

    // Notifications
    let mut store = NotificationStore::new(mock_notifications());
    store.subscribe(|unread: usize| {
        info!(unread, "Notification badge updated");
    });

    let now = Utc::now();
    println!("\n=== NOTIFICATIONS ({} unread) ===", store.unread_count());
    for n in store.list_all() {
        let marker = if n.read { " " } else { "*" };
        println!(
            "{} {} [{}/{}] {} - {}",
            marker,
            n.relative_time(now),
            n.category,
            n.priority,
            n.title,
            n.message
        );
    }

    // Chat
    let mut session = ChatSession::new(Arc::new(KeywordResponder), config.reply_delay);
    if let Some(greeting) = session.transcript().await.first() {
        println!("\n=== ADVISOR ===\n{}: {}", greeting.role, greeting.content);
    }
    println!("Try: {}", SUGGESTED_QUESTIONS.join(" | "));
    println!("Commands: /read <id>, /readall, /quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == "/quit" {
            break;
        }
        if line == "/readall" {
            store.mark_all_read();
            println!("{} unread", store.unread_count());
            continue;
        }
        if let Some(id) = line.strip_prefix("/read ") {
            store.mark_read(id.trim());
            println!("{} unread", store.unread_count());
            continue;
        }

        match session.ask(line).await {
            Ok(reply) => {
                println!("{}: {}", reply.message.role, reply.message.content);
                if !reply.related_symbols.is_empty() {
                    println!("  related: {}", reply.related_symbols.join(", "));
                }
                if !reply.suggestions.is_empty() {
                    println!("  next steps: {}", reply.suggestions.join("; "));
                }
            }
            Err(e) => warn!("Advisor could not answer: {}", e),
        }
    }

    session.shutdown().await?;
    Ok(())
}
