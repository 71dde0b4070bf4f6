//! Portfolio overview metrics
//!
//! Totals plus two heuristic scores: a 0-10 risk score driven by position
//! count and asset-type spread, and a 0-100 diversification score derived
//! from the Herfindahl concentration index.

use crate::models::{AssetType, Holding};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const NEUTRAL_RISK_SCORE: f64 = 5.0;
/// Moderate volatility until real price history is available
const ASSUMED_VOLATILITY: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub positions: usize,
    pub total_value: f64,
    pub total_cost: f64,
    pub total_gain_loss: f64,
    pub total_gain_loss_percent: f64,
    pub risk_score: f64,
    pub diversification_score: f64,
}

impl PortfolioSummary {
    pub fn from_holdings(holdings: &[Holding]) -> Self {
        let total_value: f64 = holdings.iter().map(Holding::value).sum();
        let total_cost: f64 = holdings.iter().map(Holding::cost_basis).sum();
        let total_gain_loss: f64 = holdings.iter().map(Holding::gain_loss).sum();

        let total_gain_loss_percent = if total_cost > 0.0 {
            total_gain_loss / total_cost * 100.0
        } else {
            0.0
        };

        Self {
            positions: holdings.len(),
            total_value,
            total_cost,
            total_gain_loss,
            total_gain_loss_percent,
            risk_score: risk_score(holdings),
            diversification_score: diversification_score(holdings),
        }
    }
}

/// Lower is safer. More positions and more asset types reduce the score.
pub fn risk_score(holdings: &[Holding]) -> f64 {
    if holdings.is_empty() {
        return NEUTRAL_RISK_SCORE;
    }

    let diversification_factor = (holdings.len() as f64 / 10.0).min(1.0);

    let asset_types: HashSet<AssetType> = holdings.iter().map(|h| h.asset_type).collect();
    let spread_factor = (asset_types.len() as f64 / 5.0).min(1.0);

    let score = 10.0
        - (diversification_factor * 3.0
            + spread_factor * 3.0
            + (1.0 - ASSUMED_VOLATILITY) * 4.0);

    score.clamp(0.0, 10.0)
}

/// 100 means equal weights, 0 means everything in one position
pub fn diversification_score(holdings: &[Holding]) -> f64 {
    let total_value: f64 = holdings.iter().map(Holding::value).sum();
    if holdings.len() < 2 || total_value <= 0.0 {
        return 0.0;
    }

    let herfindahl: f64 = holdings
        .iter()
        .map(|h| {
            let weight = h.value() / total_value;
            weight * weight
        })
        .sum();

    let floor = 1.0 / holdings.len() as f64;
    let score = (1.0 - (herfindahl - floor) / (1.0 - floor)) * 100.0;

    score.clamp(0.0, 100.0)
}

/// Demo holdings for the portfolio page
pub fn mock_holdings() -> Vec<Holding> {
    let holding = |symbol: &str, name: &str, shares: f64, avg: f64, current: f64, asset_type| Holding {
        symbol: symbol.to_string(),
        name: name.to_string(),
        shares,
        avg_price: avg,
        current_price: current,
        asset_type,
    };

    vec![
        holding("AAPL", "Apple Inc.", 50.0, 145.30, 175.43, AssetType::Stock),
        holding("MSFT", "Microsoft Corp.", 25.0, 320.50, 345.67, AssetType::Stock),
        holding("GOOGL", "Alphabet Inc.", 15.0, 118.75, 128.92, AssetType::Stock),
        holding("TSLA", "Tesla Inc.", 20.0, 245.80, 238.45, AssetType::Stock),
        holding("VOO", "Vanguard S&P 500 ETF", 100.0, 380.25, 428.73, AssetType::Etf),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    fn equal_holding(symbol: &str, asset_type: AssetType) -> Holding {
        Holding {
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            shares: 10.0,
            avg_price: 100.0,
            current_price: 100.0,
            asset_type,
        }
    }

    #[test]
    fn test_mock_portfolio_totals() {
        let summary = PortfolioSummary::from_holdings(&mock_holdings());

        assert_eq!(summary.positions, 5);
        assert!(approx(summary.total_value, 66_989.05));
        assert!(summary.total_gain_loss > 0.0);
        assert!(approx(
            summary.total_gain_loss,
            summary.total_value - summary.total_cost
        ));
    }

    #[test]
    fn test_risk_score() {
        assert_eq!(risk_score(&[]), NEUTRAL_RISK_SCORE);

        // 5 positions, 2 asset types: 10 - (1.5 + 1.2 + 2.0)
        assert!(approx(risk_score(&mock_holdings()), 5.3));

        let spread: Vec<Holding> = (0..10)
            .map(|i| {
                let kind = [AssetType::Stock, AssetType::Etf, AssetType::Bond, AssetType::Crypto][i % 4];
                equal_holding(&format!("H{}", i), kind)
            })
            .collect();
        // 10 - (3.0 + 2.4 + 2.0)
        assert!(approx(risk_score(&spread), 2.6));
    }

    #[test]
    fn test_diversification_score() {
        assert_eq!(diversification_score(&[]), 0.0);
        assert_eq!(diversification_score(&[equal_holding("A", AssetType::Stock)]), 0.0);

        let equal = vec![
            equal_holding("A", AssetType::Stock),
            equal_holding("B", AssetType::Stock),
            equal_holding("C", AssetType::Etf),
        ];
        assert!(approx(diversification_score(&equal), 100.0));

        let mock = diversification_score(&mock_holdings());
        assert!(mock > 0.0 && mock < 100.0);
    }
}
