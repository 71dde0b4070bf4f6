//! Responder trait and the keyword implementation

use crate::classifier::{ResponseClassifier, Topic};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Answer produced for one user query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub topic: Topic,
    pub text: String,
}

/// Trait for advisor answer generation
#[async_trait]
pub trait Responder: Send + Sync {
    async fn respond(&self, query: &str) -> Answer;
}

/// Rule-based responder backed by [`ResponseClassifier`]
pub struct KeywordResponder;

#[async_trait]
impl Responder for KeywordResponder {
    async fn respond(&self, query: &str) -> Answer {
        let topic = ResponseClassifier::classify(query);
        Answer {
            topic,
            text: ResponseClassifier::answer_for(topic, query),
        }
    }
}
