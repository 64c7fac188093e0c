//! Shared state handed to tools that measure token cost.

use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::domains::accounting::{AccountingError, Benchmarker, TokenSnapshot};
use crate::domains::catalog::Catalog;

/// Configuration plus the frozen token table the interactive tools report
/// from. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ToolContext {
    config: Arc<Config>,
    tokens: Arc<TokenSnapshot>,
}

impl ToolContext {
    /// Load the configured token table, or the bundled one.
    pub fn from_config(config: Arc<Config>) -> Result<Self, AccountingError> {
        let tokens = match &config.accounting.snapshot_path {
            Some(path) => TokenSnapshot::load(path)?,
            None => TokenSnapshot::bundled()?,
        };
        info!(
            encoding = %tokens.encoding,
            ids = tokens.counts.len(),
            "Token table ready"
        );
        Ok(Self::new(config, tokens))
    }

    pub fn new(config: Arc<Config>, tokens: TokenSnapshot) -> Self {
        Self {
            config,
            tokens: Arc::new(tokens),
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn tokens(&self) -> &TokenSnapshot {
        &self.tokens
    }

    /// Benchmarker over the built-in catalog using the frozen table.
    pub fn benchmarker(&self) -> Benchmarker<'static, &TokenSnapshot> {
        Benchmarker::new(
            Catalog::builtin(),
            self.tokens(),
            self.config.pricing.clone(),
        )
    }
}
