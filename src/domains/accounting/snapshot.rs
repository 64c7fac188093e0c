//! Frozen per-endpoint token table.
//!
//! The live render and tokenize pipeline is the source of truth. It exports a
//! snapshot (`rc-mcp-gen snapshot`) that is checked in at
//! `snapshots/token_counts.json` and embedded at build time, so consumers
//! that cannot run the tokenizer still report identical numbers. Any edit to
//! an endpoint's description, parameters, method or path invalidates the
//! table; the tests below fail until it is regenerated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, warn};

use super::error::{AccountingError, SnapshotMismatch};
use super::tokenizer::Tokenizer;
use super::tokens::{LiveTokens, TokenSource};
use crate::domains::catalog::{Catalog, Endpoint};

/// Count assumed for an id the frozen table does not know.
pub const SNAPSHOT_FALLBACK_TOKENS: usize = 40;

const BUNDLED: &str = include_str!("../../../snapshots/token_counts.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    /// Tokenizer encoding the counts were taken with.
    pub encoding: String,
    pub counts: BTreeMap<String, usize>,
}

impl TokenSnapshot {
    /// Measure every catalog endpoint with the live pipeline.
    pub fn capture<T: Tokenizer>(catalog: &Catalog, live: &LiveTokens<T>) -> Self {
        let counts = catalog
            .endpoints()
            .iter()
            .map(|e| (e.id.to_string(), live.endpoint_tokens(e)))
            .collect();
        Self {
            encoding: live.tokenizer().encoding().to_string(),
            counts,
        }
    }

    /// The table embedded in this build.
    pub fn bundled() -> Result<Self, AccountingError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(json: &str) -> Result<Self, AccountingError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Pretty JSON with a trailing newline, byte-stable for a given table.
    pub fn to_json(&self) -> Result<String, AccountingError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn load(path: &Path) -> Result<Self, AccountingError> {
        let json = std::fs::read_to_string(path).map_err(|source| AccountingError::SnapshotIo {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json(&json)?;
        info!(path = %path.display(), ids = snapshot.counts.len(), "Loaded token snapshot");
        Ok(snapshot)
    }

    pub fn save(&self, path: &Path) -> Result<(), AccountingError> {
        std::fs::write(path, self.to_json()?).map_err(|source| AccountingError::SnapshotIo {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), ids = self.counts.len(), "Wrote token snapshot");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<usize> {
        self.counts.get(id).copied()
    }

    /// Frozen count for `id`, or `SNAPSHOT_FALLBACK_TOKENS` when absent.
    pub fn estimate(&self, id: &str) -> usize {
        self.get(id).unwrap_or_else(|| {
            warn!(
                endpoint = id,
                fallback = SNAPSHOT_FALLBACK_TOKENS,
                "Endpoint missing from token snapshot; using fallback count"
            );
            SNAPSHOT_FALLBACK_TOKENS
        })
    }

    /// Ids present in both tables whose counts differ.
    pub fn mismatches(&self, live: &TokenSnapshot) -> Vec<SnapshotMismatch> {
        self.counts
            .iter()
            .filter_map(|(id, &frozen)| {
                let live = live.get(id)?;
                (live != frozen).then(|| SnapshotMismatch {
                    id: id.clone(),
                    frozen,
                    live,
                })
            })
            .collect()
    }

    /// Catalog ids the table has no count for.
    pub fn missing_ids(&self, catalog: &Catalog) -> Vec<&'static str> {
        catalog
            .ids()
            .filter(|id| !self.counts.contains_key(*id))
            .collect()
    }

    /// Fail unless this table agrees with `live` and covers the whole catalog.
    pub fn verify(&self, live: &TokenSnapshot, catalog: &Catalog) -> Result<(), AccountingError> {
        let mismatches = self.mismatches(live);
        let missing: Vec<String> = self
            .missing_ids(catalog)
            .into_iter()
            .map(str::to_string)
            .collect();
        if mismatches.is_empty() && missing.is_empty() {
            return Ok(());
        }
        Err(AccountingError::SnapshotStale {
            mismatches,
            missing,
        })
    }
}

impl TokenSource for TokenSnapshot {
    fn source_name(&self) -> String {
        format!("snapshot ({})", self.encoding)
    }

    fn endpoint_tokens(&self, endpoint: &Endpoint) -> usize {
        self.estimate(endpoint.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::accounting::tokens::tally;

    #[test]
    fn test_bundled_snapshot_matches_live_counts() {
        let catalog = Catalog::builtin();
        let frozen = TokenSnapshot::bundled().unwrap();
        let live = TokenSnapshot::capture(catalog, &LiveTokens::cl100k());

        assert_eq!(frozen.encoding, live.encoding);
        assert!(frozen.mismatches(&live).is_empty());
        assert!(frozen.missing_ids(catalog).is_empty());
        frozen.verify(&live, catalog).unwrap();
    }

    #[test]
    fn test_bundled_file_is_what_capture_writes() {
        let live = TokenSnapshot::capture(Catalog::builtin(), &LiveTokens::cl100k());
        assert_eq!(live.to_json().unwrap(), BUNDLED);
    }

    #[test]
    fn test_frozen_and_live_totals_agree() {
        let catalog = Catalog::builtin();
        let frozen = TokenSnapshot::bundled().unwrap();
        let frozen_total = tally(&frozen, catalog.endpoints()).total;
        let live_total = tally(&LiveTokens::cl100k(), catalog.endpoints()).total;
        assert_eq!(frozen_total, 2074);
        assert_eq!(frozen_total, live_total);
    }

    #[test]
    fn test_estimate_falls_back() {
        let snapshot = TokenSnapshot::bundled().unwrap();
        assert_eq!(snapshot.estimate("login"), 62);
        assert_eq!(snapshot.get("rooms.upload"), None);
        assert_eq!(snapshot.estimate("rooms.upload"), SNAPSHOT_FALLBACK_TOKENS);
    }

    #[test]
    fn test_detects_drift() {
        let catalog = Catalog::builtin();
        let live = TokenSnapshot::bundled().unwrap();
        let mut frozen = live.clone();
        frozen.counts.insert("login".to_string(), 61);
        frozen.counts.remove("me");

        assert_eq!(
            frozen.mismatches(&live),
            vec![SnapshotMismatch {
                id: "login".to_string(),
                frozen: 61,
                live: 62,
            }]
        );
        assert_eq!(frozen.missing_ids(catalog), vec!["me"]);
        match frozen.verify(&live, catalog) {
            Err(AccountingError::SnapshotStale { mismatches, missing }) => {
                assert_eq!(mismatches.len(), 1);
                assert_eq!(missing, vec!["me"]);
            }
            other => panic!("expected stale snapshot, got {other:?}"),
        }
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token_counts.json");
        let snapshot = TokenSnapshot::bundled().unwrap();

        snapshot.save(&path).unwrap();
        assert_eq!(TokenSnapshot::load(&path).unwrap(), snapshot);
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = TokenSnapshot::load(&path).unwrap_err();
        assert!(matches!(err, AccountingError::SnapshotIo { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = TokenSnapshot::from_json(r#"{"encoding": "cl100k_base"}"#).unwrap_err();
        assert!(matches!(err, AccountingError::SnapshotFormat(_)));
    }
}
