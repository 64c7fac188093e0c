//! `rc-mcp-gen render`

use anyhow::Result;
use rc_mcp_gen::domains::accounting::render_manifest;

use super::SelectionArgs;

pub fn run(selection: &SelectionArgs) -> Result<()> {
    let resolution = selection.resolve(None)?;
    println!("{}", render_manifest(&resolution.selection));
    Ok(())
}
