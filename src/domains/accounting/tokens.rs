//! Per-endpoint token accounting.
//!
//! Each tool definition is tokenized on its own and the counts are summed.
//! A shared context could encode common boilerplate more cheaply, so totals
//! are a conservative overestimate, but they stay additive: removing one
//! endpoint lowers the total by exactly that endpoint's count.

use serde::Serialize;

use super::render::render_tool_definition;
use super::tokenizer::{Cl100kTokenizer, Tokenizer};
use crate::domains::catalog::Endpoint;

/// Anything that can state how many tokens an endpoint's definition costs.
pub trait TokenSource {
    /// Short description of where counts come from, for logs and reports.
    fn source_name(&self) -> String;

    fn endpoint_tokens(&self, endpoint: &Endpoint) -> usize;
}

impl<S: TokenSource + ?Sized> TokenSource for &S {
    fn source_name(&self) -> String {
        (**self).source_name()
    }

    fn endpoint_tokens(&self, endpoint: &Endpoint) -> usize {
        (**self).endpoint_tokens(endpoint)
    }
}

/// Counts tokens by rendering and tokenizing each endpoint on demand.
#[derive(Debug, Clone, Default)]
pub struct LiveTokens<T = Cl100kTokenizer> {
    tokenizer: T,
}

impl LiveTokens<Cl100kTokenizer> {
    pub fn cl100k() -> Self {
        Self::new(Cl100kTokenizer::new())
    }
}

impl<T: Tokenizer> LiveTokens<T> {
    pub fn new(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }
}

impl<T: Tokenizer> TokenSource for LiveTokens<T> {
    fn source_name(&self) -> String {
        format!("live ({})", self.tokenizer.encoding())
    }

    fn endpoint_tokens(&self, endpoint: &Endpoint) -> usize {
        self.tokenizer.count(&render_tool_definition(endpoint))
    }
}

/// Token cost of one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointTokens {
    pub endpoint_id: &'static str,
    pub tokens: usize,
}

/// Summed token cost of a sequence of endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTally {
    pub total: usize,
    pub per_endpoint: Vec<EndpointTokens>,
}

/// Count every endpoint in isolation and sum the results.
pub fn tally<S, I>(source: &S, endpoints: I) -> TokenTally
where
    S: TokenSource + ?Sized,
    I: IntoIterator<Item = &'static Endpoint>,
{
    let per_endpoint: Vec<EndpointTokens> = endpoints
        .into_iter()
        .map(|endpoint| EndpointTokens {
            endpoint_id: endpoint.id,
            tokens: source.endpoint_tokens(endpoint),
        })
        .collect();
    let total = per_endpoint.iter().map(|e| e.tokens).sum();

    TokenTally {
        total,
        per_endpoint,
    }
}
