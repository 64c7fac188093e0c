//! `rc-mcp-gen list`

use anyhow::Result;
use rc_mcp_gen::domains::catalog::{Catalog, PROFILES};

const DESCRIPTION_WIDTH: usize = 55;

pub fn run() -> Result<()> {
    let catalog = Catalog::builtin();
    let categories = catalog.categories();

    println!("\nAvailable Rocket.Chat API Endpoints\n");
    println!(
        "Total: {} endpoints across {} categories\n",
        catalog.len(),
        categories.len()
    );

    for category in categories {
        let endpoints: Vec<_> = catalog.by_category(category).collect();
        println!(
            "  {} - {} ({})",
            category.as_str().to_uppercase(),
            category.label(),
            endpoints.len()
        );
        for endpoint in endpoints {
            let description: String = endpoint.description.chars().take(DESCRIPTION_WIDTH).collect();
            println!(
                "     {:<6} {:<24} {}",
                endpoint.method, endpoint.id, description
            );
        }
        println!();
    }

    println!("Preset Profiles\n");
    for profile in PROFILES {
        println!(
            "  {:<12} ({} tools)  {}",
            profile.id,
            profile.tool_count(catalog),
            profile.description
        );
    }
    println!();

    Ok(())
}
