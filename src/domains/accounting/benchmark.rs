//! Full-catalog versus selection comparison.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, instrument};

use super::cost::{Pricing, Savings};
use super::tokens::{EndpointTokens, TokenSource, tally};
use crate::domains::catalog::Catalog;
use crate::domains::selection::SelectionSet;

/// Outcome of one comparison. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkResult {
    pub full_tool_count: usize,
    pub selected_tool_count: usize,
    pub full_tokens: usize,
    pub selected_tokens: usize,
    pub saved_tokens: i64,
    pub saved_percent: i64,
    pub full_cost: Decimal,
    pub selected_cost: Decimal,
    pub saved_cost: Decimal,
    pub price_label: String,
    /// Per-endpoint counts for the selection only.
    pub details: Vec<EndpointTokens>,
}

impl BenchmarkResult {
    pub fn savings(&self) -> Savings {
        Savings {
            tokens: self.saved_tokens,
            percent: self.saved_percent,
            cost: self.saved_cost,
        }
    }
}

/// Compares selections against the full catalog using one token source.
pub struct Benchmarker<'c, S> {
    catalog: &'c Catalog,
    source: S,
    pricing: Pricing,
}

impl<'c, S: TokenSource> Benchmarker<'c, S> {
    pub fn new(catalog: &'c Catalog, source: S, pricing: Pricing) -> Self {
        Self {
            catalog,
            source,
            pricing,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn pricing(&self) -> &Pricing {
        &self.pricing
    }

    /// Token total of the entire catalog.
    pub fn full_tokens(&self) -> usize {
        tally(&self.source, self.catalog.endpoints()).total
    }

    /// Compare an already resolved and closed selection with the catalog.
    #[instrument(skip_all, fields(tools = selection.len()))]
    pub fn compare(&self, selection: &SelectionSet) -> BenchmarkResult {
        let full_tokens = self.full_tokens();
        let selected = tally(&self.source, selection.iter());
        let savings = Savings::between(full_tokens, selected.total, &self.pricing);

        debug!(
            source = %self.source.source_name(),
            full_tokens,
            selected_tokens = selected.total,
            saved_percent = savings.percent,
            "Benchmark complete"
        );

        BenchmarkResult {
            full_tool_count: self.catalog.len(),
            selected_tool_count: selection.len(),
            full_tokens,
            selected_tokens: selected.total,
            saved_tokens: savings.tokens,
            saved_percent: savings.percent,
            full_cost: self.pricing.cost(full_tokens as i64),
            selected_cost: self.pricing.cost(selected.total as i64),
            saved_cost: savings.cost,
            price_label: self.pricing.label.clone(),
            details: selected.per_endpoint,
        }
    }
}
