//! Response Classifier
//!
//! Maps a free-text question to one canned advisory answer.
//! Rules are checked top to bottom and the first match wins, so a query that
//! mentions both "aapl" and "portfolio risk" gets the Apple answer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Apple,
    Tesla,
    LowRiskEtf,
    PortfolioRisk,
    MarketOutlook,
    Crypto,
    General,
}

/// A rule matches when every group has at least one keyword present
struct Rule {
    topic: Topic,
    all_of: &'static [&'static [&'static str]],
}

/// Evaluation order is part of the contract
const RULES: &[Rule] = &[
    Rule { topic: Topic::Apple, all_of: &[&["apple", "aapl"]] },
    Rule { topic: Topic::Tesla, all_of: &[&["tesla", "tsla"]] },
    Rule { topic: Topic::LowRiskEtf, all_of: &[&["etf"], &["low risk"]] },
    Rule { topic: Topic::PortfolioRisk, all_of: &[&["portfolio"], &["risk"]] },
    Rule { topic: Topic::MarketOutlook, all_of: &[&["market"], &["outlook", "trend"]] },
    Rule { topic: Topic::Crypto, all_of: &[&["crypto", "bitcoin"]] },
];

const APPLE_RESPONSE: &str = "Apple (AAPL) is currently trading well with strong fundamentals. The company shows solid revenue growth, strong cash position, and continued innovation in services. Consider your risk tolerance and portfolio diversification before investing. Current technical indicators suggest moderate bullish sentiment.";

const TESLA_RESPONSE: &str = "Tesla (TSLA) remains volatile but has strong long-term potential in the EV market. The stock shows high volatility and should be considered a growth investment with higher risk. Monitor production numbers and market expansion for key indicators.";

const LOW_RISK_ETF_RESPONSE: &str = "For low-risk ETF options, consider: VTI (Total Stock Market), SPY (S&P 500), or BND (Total Bond Market). These provide broad diversification with lower volatility. Bond ETFs like BND offer stability, while VTI/SPY provide market exposure with historical steady growth.";

const PORTFOLIO_RISK_RESPONSE: &str = "Portfolio risk analysis suggests diversifying across asset classes. For conservative investors: 60% stocks, 40% bonds. Moderate: 70% stocks, 30% bonds. Aggressive: 80-90% stocks, 10-20% bonds. Consider your age, goals, and timeline for retirement.";

const MARKET_OUTLOOK_RESPONSE: &str = "Current market outlook shows mixed signals. Tech stocks face headwinds from interest rates, while value stocks show resilience. Inflation concerns persist but are moderating. Consider dollar-cost averaging for long-term positions and maintain diversification across sectors.";

const CRYPTO_RESPONSE: &str = "Cryptocurrency remains highly volatile and speculative. Only invest what you can afford to lose (typically 5-10% of portfolio maximum). Bitcoin and Ethereum are the most established, but regulatory uncertainty persists. Consider it a high-risk, high-reward asset class.";

impl Topic {
    /// Fixed answer for the topic; `General` has none and echoes the query instead
    pub fn canned_response(self) -> Option<&'static str> {
        match self {
            Topic::Apple => Some(APPLE_RESPONSE),
            Topic::Tesla => Some(TESLA_RESPONSE),
            Topic::LowRiskEtf => Some(LOW_RISK_ETF_RESPONSE),
            Topic::PortfolioRisk => Some(PORTFOLIO_RISK_RESPONSE),
            Topic::MarketOutlook => Some(MARKET_OUTLOOK_RESPONSE),
            Topic::Crypto => Some(CRYPTO_RESPONSE),
            Topic::General => None,
        }
    }
}

/// Keyword-rule classifier
pub struct ResponseClassifier;

impl ResponseClassifier {
    /// Topic of the first rule satisfied by `query`
    pub fn classify(query: &str) -> Topic {
        let folded = fold(query);

        RULES
            .iter()
            .find(|rule| {
                rule.all_of
                    .iter()
                    .all(|any_of| any_of.iter().any(|kw| folded.contains(kw)))
            })
            .map(|rule| rule.topic)
            .unwrap_or(Topic::General)
    }

    /// Advisory answer for `query`. Total over all strings.
    pub fn respond(query: &str) -> String {
        Self::answer_for(Self::classify(query), query)
    }

    pub(crate) fn answer_for(topic: Topic, query: &str) -> String {
        match topic.canned_response() {
            Some(answer) => answer.to_string(),
            None => fallback_response(query),
        }
    }
}

/// Lowercase and treat hyphens as spaces so "low-risk" reads as "low risk"
fn fold(query: &str) -> String {
    query.to_lowercase().replace('-', " ")
}

fn fallback_response(query: &str) -> String {
    format!(
        "Thank you for your question about \"{}\". Based on current market conditions and financial principles, I recommend: conducting thorough research, considering your risk tolerance, and maintaining a diversified portfolio. This is educational information only - please consult with a qualified financial advisor for personalized advice.",
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggested_questions() {
        assert_eq!(
            ResponseClassifier::respond("Should I invest in Apple stock?"),
            APPLE_RESPONSE
        );
        assert_eq!(
            ResponseClassifier::respond("What's a good low-risk ETF?"),
            LOW_RISK_ETF_RESPONSE
        );
        assert_eq!(
            ResponseClassifier::classify("Analyze my portfolio risk"),
            Topic::PortfolioRisk
        );
        assert_eq!(
            ResponseClassifier::classify("Market outlook for tech stocks"),
            Topic::MarketOutlook
        );
    }

    #[test]
    fn test_apple_wins_regardless_of_other_keywords() {
        let cases = vec![
            "what about aapl and its risk",
            "AAPL portfolio risk",
            "aApL vs tesla",
            "is bitcoin better than AaPl?",
            "market trend for aapl etf with low risk",
        ];

        for c in cases {
            assert_eq!(ResponseClassifier::classify(c), Topic::Apple, "query: {}", c);
        }
    }

    #[test]
    fn test_rule_order() {
        assert_eq!(ResponseClassifier::classify("TSLA and bitcoin"), Topic::Tesla);
        assert_eq!(
            ResponseClassifier::classify("low risk etf for my portfolio"),
            Topic::LowRiskEtf
        );
        assert_eq!(
            ResponseClassifier::classify("portfolio risk in a crypto market trend"),
            Topic::PortfolioRisk
        );
        assert_eq!(
            ResponseClassifier::classify("crypto market outlook"),
            Topic::MarketOutlook
        );
        assert_eq!(ResponseClassifier::classify("Bitcoin?"), Topic::Crypto);
    }

    #[test]
    fn test_partial_conjunctions_fall_through() {
        // "etf" without "low risk", "market" without outlook/trend
        assert_eq!(ResponseClassifier::classify("best etf"), Topic::General);
        assert_eq!(ResponseClassifier::classify("market hours"), Topic::General);
        assert_eq!(ResponseClassifier::classify("how risky is risk"), Topic::General);
    }

    #[test]
    fn test_fallback_echoes_query() {
        let answer = ResponseClassifier::respond("asdkjasd");
        assert!(answer.contains("\"asdkjasd\""));

        let query = "Is High RISK worth it?";
        let answer = ResponseClassifier::respond(query);
        assert!(answer.contains(query));
        assert!(answer.contains("educational information only"));
    }

    #[test]
    fn test_deterministic() {
        let query = "Tell me about the market trend";
        assert_eq!(
            ResponseClassifier::respond(query),
            ResponseClassifier::respond(query)
        );
    }

    #[test]
    fn test_every_topic_but_general_has_an_answer() {
        for rule in RULES {
            assert!(rule.topic.canned_response().is_some());
        }
        assert!(Topic::General.canned_response().is_none());
    }
}
