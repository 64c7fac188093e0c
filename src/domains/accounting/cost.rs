//! Cost and savings arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Flat input-token price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    /// Price in USD per one million input tokens.
    pub per_million: Decimal,
    /// Model the price belongs to, shown in reports.
    pub label: String,
}

impl Default for Pricing {
    /// GPT-4o input pricing: $2.50 per 1M tokens.
    fn default() -> Self {
        Self {
            per_million: Decimal::new(250, 2),
            label: "GPT-4o".to_string(),
        }
    }
}

impl Pricing {
    pub fn per_million(per_million: Decimal, label: impl Into<String>) -> Self {
        Self {
            per_million,
            label: label.into(),
        }
    }

    /// Exact cost of `tokens` input tokens.
    pub fn cost(&self, tokens: i64) -> Decimal {
        (Decimal::from(tokens) * self.per_million / Decimal::from(1_000_000)).normalize()
    }
}

/// Integer share of `full` avoided by using `selected`, rounded half up.
///
/// Returns 0 when `full` is 0 rather than dividing by zero.
pub fn saved_percent(full: usize, selected: usize) -> i64 {
    if full == 0 {
        return 0;
    }
    let full = full as i64;
    let saved = full - selected as i64;
    (200 * saved + full).div_euclid(2 * full)
}

/// Difference between a full-catalog total and a selected-set total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    pub tokens: i64,
    pub percent: i64,
    pub cost: Decimal,
}

impl Savings {
    pub fn between(full: usize, selected: usize, pricing: &Pricing) -> Self {
        let tokens = full as i64 - selected as i64;
        Self {
            tokens,
            percent: saved_percent(full, selected),
            cost: pricing.cost(tokens),
        }
    }
}

/// Round a dollar amount for display, half away from zero.
pub fn display_cost(cost: Decimal, places: u32) -> Decimal {
    cost.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_pricing() {
        let pricing = Pricing::default();
        assert_eq!(pricing.per_million, Decimal::from_str("2.50").unwrap());
        assert_eq!(pricing.cost(2074), Decimal::from_str("0.005185").unwrap());
        assert_eq!(pricing.cost(0), Decimal::ZERO);
    }

    #[test]
    fn test_saved_percent_rounds_half_up() {
        assert_eq!(saved_percent(2074, 603), 71);
        assert_eq!(saved_percent(2074, 614), 70);
        assert_eq!(saved_percent(200, 101), 50);
        assert_eq!(saved_percent(200, 99), 51);
        assert_eq!(saved_percent(8, 7), 13);
    }

    #[test]
    fn test_saved_percent_boundaries() {
        assert_eq!(saved_percent(2074, 2074), 0);
        assert_eq!(saved_percent(2074, 0), 100);
        assert_eq!(saved_percent(0, 0), 0);
        assert_eq!(saved_percent(0, 12), 0);
    }

    #[test]
    fn test_saved_percent_negative_savings() {
        assert_eq!(saved_percent(100, 150), -50);
        assert_eq!(saved_percent(200, 201), 0);
    }

    #[test]
    fn test_savings_between() {
        let savings = Savings::between(2074, 603, &Pricing::default());
        assert_eq!(savings.tokens, 1471);
        assert_eq!(savings.percent, 71);
        assert_eq!(savings.cost, Decimal::from_str("0.0036775").unwrap());
    }

    #[test]
    fn test_display_cost() {
        let cost = Decimal::from_str("0.005185").unwrap();
        assert_eq!(display_cost(cost, 5).to_string(), "0.00519");
    }

    #[test]
    fn test_pricing_serializes_price_as_string() {
        let json = serde_json::to_value(Pricing::default()).unwrap();
        assert_eq!(json["perMillion"], "2.50");
        assert_eq!(json["label"], "GPT-4o");
    }
}
