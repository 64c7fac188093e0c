//! `rc-mcp-gen snapshot`

use anyhow::Result;
use std::path::Path;
use tracing::info;

use rc_mcp_gen::core::Config;
use rc_mcp_gen::domains::accounting::{AccountingError, LiveTokens, TokenSnapshot};
use rc_mcp_gen::domains::catalog::Catalog;

pub fn run(config: &Config, output: Option<&Path>, check: bool) -> Result<()> {
    let catalog = Catalog::builtin();
    let live = TokenSnapshot::capture(catalog, &LiveTokens::cl100k());

    if check {
        return check_frozen(config, &live, catalog);
    }

    match output {
        Some(path) => {
            live.save(path)?;
            eprintln!(
                "Wrote {} endpoint counts ({}) to {}",
                live.counts.len(),
                live.encoding,
                path.display()
            );
        }
        None => print!("{}", live.to_json()?),
    }
    Ok(())
}

fn check_frozen(config: &Config, live: &TokenSnapshot, catalog: &Catalog) -> Result<()> {
    let frozen = match &config.accounting.snapshot_path {
        Some(path) => TokenSnapshot::load(path)?,
        None => TokenSnapshot::bundled()?,
    };

    match frozen.verify(live, catalog) {
        Ok(()) => {
            info!(ids = frozen.counts.len(), "Frozen token table is current");
            println!(
                "Token table matches the live pipeline ({} endpoints, {})",
                frozen.counts.len(),
                frozen.encoding
            );
            Ok(())
        }
        Err(AccountingError::SnapshotStale {
            mismatches,
            missing,
        }) => {
            for m in &mismatches {
                eprintln!("  {}: frozen {} live {}", m.id, m.frozen, m.live);
            }
            for id in &missing {
                eprintln!("  {id}: missing");
            }
            Err(AccountingError::SnapshotStale {
                mismatches,
                missing,
            }
            .into())
        }
        Err(e) => Err(e.into()),
    }
}
