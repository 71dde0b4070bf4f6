//! Advisor chat session
//!
//! User messages are appended as soon as they are submitted. Replies are
//! produced by a single background worker that drains a FIFO queue, so
//! answers always land in submission order no matter how the simulated
//! typing delay is sampled.

use crate::analysis;
use crate::chat::responder::Responder;
use crate::chat::transcript::Transcript;
use crate::classifier::Topic;
use crate::config::ReplyDelay;
use crate::error::DashboardError;
use crate::models::{ChatMessage, MessageRole};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

pub const GREETING: &str = "Hello! I'm your AI Financial Advisor. I can help you with investment decisions, portfolio analysis, risk assessment, and market insights. What would you like to know?";

/// Starter prompts offered next to an empty input box
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "Should I invest in Apple stock?",
    "What's a good low-risk ETF?",
    "Analyze my portfolio risk",
    "Market outlook for tech stocks",
];

/// Assistant reply plus the metadata derived from it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorReply {
    pub request_id: Uuid,
    pub message: ChatMessage,
    pub topic: Topic,
    pub related_symbols: Vec<String>,
    pub suggestions: Vec<String>,
    pub confidence: f32,
}

/// Handle to a reply that the worker has not produced yet
#[derive(Debug)]
pub struct PendingReply {
    request_id: Uuid,
    rx: oneshot::Receiver<AdvisorReply>,
}

impl PendingReply {
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Wait for the worker to append and return the reply
    pub async fn wait(self) -> Result<AdvisorReply> {
        self.rx.await.map_err(|_| {
            DashboardError::SessionClosed(format!(
                "worker stopped before answering request {}",
                self.request_id
            ))
        })
    }
}

struct Submission {
    request_id: Uuid,
    query: String,
    reply_tx: oneshot::Sender<AdvisorReply>,
}

/// One advisor conversation. Must be created inside a Tokio runtime.
pub struct ChatSession {
    transcript: Arc<RwLock<Transcript>>,
    pending: Arc<AtomicUsize>,
    queue: Option<mpsc::UnboundedSender<Submission>>,
    worker: Option<JoinHandle<()>>,
}

impl ChatSession {
    pub fn new(responder: Arc<dyn Responder>, delay: ReplyDelay) -> Self {
        let mut transcript = Transcript::new();
        transcript.append(MessageRole::Assistant, GREETING);

        let transcript = Arc::new(RwLock::new(transcript));
        let pending = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = mpsc::unbounded_channel();

        let worker = tokio::spawn(run_worker(
            rx,
            responder,
            Arc::clone(&transcript),
            Arc::clone(&pending),
            delay,
        ));

        Self {
            transcript,
            pending,
            queue: Some(tx),
            worker: Some(worker),
        }
    }

    /// Record the user's message and queue it for an answer.
    ///
    /// Blank input is rejected and never reaches the responder.
    pub async fn submit(&self, text: &str) -> Result<PendingReply> {
        if text.trim().is_empty() {
            return Err(DashboardError::EmptyQuery);
        }

        let queue = self
            .queue
            .as_ref()
            .ok_or_else(|| DashboardError::SessionClosed("session was shut down".to_string()))?;

        let request_id = Uuid::new_v4();
        let (reply_tx, rx) = oneshot::channel();

        // Append and enqueue under one lock so transcript order matches queue order
        let mut transcript = self.transcript.write().await;
        self.pending.fetch_add(1, Ordering::SeqCst);
        queue
            .send(Submission {
                request_id,
                query: text.to_string(),
                reply_tx,
            })
            .map_err(|_| {
                self.pending.fetch_sub(1, Ordering::SeqCst);
                DashboardError::SessionClosed("reply worker is not running".to_string())
            })?;
        let message = transcript.append(MessageRole::User, text);

        info!(
            request_id = %request_id,
            message_id = message.id,
            "User message queued"
        );

        Ok(PendingReply { request_id, rx })
    }

    /// Submit and wait for the answer
    pub async fn ask(&self, text: &str) -> Result<AdvisorReply> {
        self.submit(text).await?.wait().await
    }

    /// Snapshot of every message so far, oldest first
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.messages().cloned().collect()
    }

    /// True while at least one reply is still being "typed"
    pub fn is_typing(&self) -> bool {
        self.pending_replies() > 0
    }

    pub fn pending_replies(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Stop accepting submissions, answer everything already queued, then join the worker
    pub async fn shutdown(&mut self) -> Result<()> {
        self.queue.take();

        if let Some(worker) = self.worker.take() {
            worker
                .await
                .map_err(|e| DashboardError::SessionClosed(format!("reply worker failed: {}", e)))?;
        }

        info!("Chat session closed");
        Ok(())
    }
}

async fn run_worker(
    mut rx: mpsc::UnboundedReceiver<Submission>,
    responder: Arc<dyn Responder>,
    transcript: Arc<RwLock<Transcript>>,
    pending: Arc<AtomicUsize>,
    delay: ReplyDelay,
) {
    while let Some(submission) = rx.recv().await {
        let wait = delay.sample();
        debug!(
            request_id = %submission.request_id,
            delay_ms = wait.as_millis() as u64,
            "Simulating advisor typing"
        );
        tokio::time::sleep(wait).await;

        let answer = responder.respond(&submission.query).await;

        let message = {
            let mut transcript = transcript.write().await;
            transcript
                .append(MessageRole::Assistant, answer.text.clone())
                .clone()
        };
        pending.fetch_sub(1, Ordering::SeqCst);

        let related = format!("{} {}", submission.query, answer.text);
        let reply = AdvisorReply {
            request_id: submission.request_id,
            topic: answer.topic,
            related_symbols: analysis::extract_symbols(&related)
                .into_iter()
                .map(String::from)
                .collect(),
            suggestions: analysis::extract_suggestions(&answer.text)
                .into_iter()
                .map(String::from)
                .collect(),
            confidence: analysis::confidence(&answer.text),
            message,
        };

        info!(
            request_id = %reply.request_id,
            message_id = reply.message.id,
            topic = ?reply.topic,
            "Advisor reply appended"
        );

        if submission.reply_tx.send(reply).is_err() {
            debug!(request_id = %submission.request_id, "Reply handle dropped before delivery");
        }
    }

    debug!("Reply worker queue closed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::responder::{Answer, KeywordResponder};
    use crate::classifier::ResponseClassifier;
    use async_trait::async_trait;

    fn keyword_session(delay: ReplyDelay) -> ChatSession {
        ChatSession::new(Arc::new(KeywordResponder), delay)
    }

    #[tokio::test]
    async fn test_new_session_starts_with_greeting() {
        let session = keyword_session(ReplyDelay::none());
        let transcript = session.transcript().await;

        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript[0].role, MessageRole::Assistant);
        assert_eq!(transcript[0].content, GREETING);
        assert!(!session.is_typing());
    }

    #[tokio::test]
    async fn test_ask_appends_user_and_assistant_messages() {
        let session = keyword_session(ReplyDelay::none());

        let reply = session.ask("Should I invest in Apple stock?").await.unwrap();
        assert_eq!(reply.topic, Topic::Apple);
        assert_eq!(
            reply.message.content,
            ResponseClassifier::respond("Should I invest in Apple stock?")
        );
        assert_eq!(reply.related_symbols, vec!["AAPL".to_string()]);
        assert!(reply.suggestions.contains(&"Assess your risk tolerance".to_string()));

        let transcript = session.transcript().await;
        let roles: Vec<MessageRole> = transcript.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![MessageRole::Assistant, MessageRole::User, MessageRole::Assistant]
        );
        assert_eq!(transcript[1].content, "Should I invest in Apple stock?");
        assert_eq!(transcript[2].id, reply.message.id);
    }

    #[tokio::test]
    async fn test_blank_submission_rejected() {
        let session = keyword_session(ReplyDelay::none());

        let result = session.submit("   \t").await;
        assert!(matches!(result, Err(DashboardError::EmptyQuery)));
        assert_eq!(session.transcript().await.len(), 1);
        assert_eq!(session.pending_replies(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replies_follow_submission_order() {
        let session = keyword_session(ReplyDelay::new(1_000, 2_000).unwrap());

        let first = session.submit("tesla?").await.unwrap();
        let second = session.submit("bitcoin?").await.unwrap();
        let third = session.submit("asdkjasd").await.unwrap();
        assert!(session.is_typing());
        assert_eq!(session.pending_replies(), 3);

        let third = third.wait().await.unwrap();
        let first = first.wait().await.unwrap();
        let second = second.wait().await.unwrap();
        assert!(!session.is_typing());

        assert!(first.message.id < second.message.id);
        assert!(second.message.id < third.message.id);
        assert_eq!(first.topic, Topic::Tesla);
        assert_eq!(second.topic, Topic::Crypto);
        assert_eq!(third.topic, Topic::General);
        assert!(third.message.content.contains("asdkjasd"));

        let contents: Vec<String> = session
            .transcript()
            .await
            .into_iter()
            .skip(1)
            .map(|m| m.content)
            .collect();
        assert_eq!(&contents[..3], &["tesla?", "bitcoin?", "asdkjasd"]);
        assert_eq!(contents[3], first.message.content);
        assert_eq!(contents[5], third.message.content);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_typing_delay() {
        let session = keyword_session(ReplyDelay::new(1_500, 1_500).unwrap());
        let started = tokio::time::Instant::now();

        session.ask("crypto").await.unwrap();

        assert!(started.elapsed() >= std::time::Duration::from_millis(1_500));
    }

    #[tokio::test]
    async fn test_shutdown_drains_queue_then_rejects() {
        let mut session = keyword_session(ReplyDelay::none());

        let pending = session.submit("market trend").await.unwrap();
        session.shutdown().await.unwrap();

        let reply = pending.wait().await.unwrap();
        assert_eq!(reply.topic, Topic::MarketOutlook);

        let result = session.submit("anything").await;
        assert!(matches!(result, Err(DashboardError::SessionClosed(_))));
    }

    struct EchoResponder;

    #[async_trait]
    impl Responder for EchoResponder {
        async fn respond(&self, query: &str) -> Answer {
            Answer {
                topic: Topic::General,
                text: format!("echo: {}", query),
            }
        }
    }

    #[tokio::test]
    async fn test_custom_responder() {
        let session = ChatSession::new(Arc::new(EchoResponder), ReplyDelay::none());

        let reply = session.ask("ping").await.unwrap();
        assert_eq!(reply.message.content, "echo: ping");
        assert_eq!(reply.message.role, MessageRole::Assistant);
    }
}
