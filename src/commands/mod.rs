//! Subcommand implementations.

pub mod benchmark;
pub mod list;
pub mod render;
pub mod serve;
pub mod snapshot;

use clap::Args;
use rc_mcp_gen::domains::selection::{Resolution, Resolver, SelectionError, SelectionRequest};

/// Endpoint ids or a preset profile.
#[derive(Args, Debug)]
pub struct SelectionArgs {
    /// Preset profile id (messaging, channels, admin, readonly, full)
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Endpoint ids, space or comma separated; takes precedence over --profile
    #[arg(short, long, num_args = 1..)]
    pub apis: Option<Vec<String>>,
}

impl SelectionArgs {
    /// Resolve and close the selection, announcing auto-included endpoints
    /// on stderr.
    pub fn resolve(&self, default_profile: Option<&str>) -> Result<Resolution, SelectionError> {
        let profile = self.profile.as_deref().or(default_profile);
        let request = SelectionRequest::from_parts(self.apis.as_deref(), profile)?;
        let resolution = Resolver::builtin().resolve_closed(&request)?;
        for id in &resolution.auto_included {
            eprintln!("Auto-included '{id}' (required for authenticated endpoints)");
        }
        Ok(resolution)
    }
}
