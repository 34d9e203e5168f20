//! Issuers command - show the registry in identification order.

use clap::Args;
use console::style;
use serde::Serialize;

use cardstmt_core::statement::IssuerRegistry;

use super::load_config;

/// Arguments for the issuers command.
#[derive(Args)]
pub struct IssuersArgs {
    /// Print the registry as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct IssuerListing<'a> {
    priority: usize,
    issuer: &'a str,
    signature: &'a str,
}

pub async fn run(args: IssuersArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let registry = IssuerRegistry::from_config(&config.issuers)?;

    let listing: Vec<IssuerListing<'_>> = registry
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| IssuerListing {
            priority: i + 1,
            issuer: entry.issuer(),
            signature: entry.signature(),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if listing.is_empty() {
        println!("{} No issuers registered.", style("ℹ").blue());
        return Ok(());
    }

    println!("{}", style("Registered issuers (first match wins):").bold());
    for item in &listing {
        println!(
            "  {:>2}. {} signature: {}",
            item.priority,
            style(format!("{:<20}", item.issuer)).cyan(),
            style(format!("\"{}\"", item.signature)).dim()
        );
    }

    Ok(())
}
