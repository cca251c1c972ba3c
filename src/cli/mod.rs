// cli/mod.rs — client subcommands (`taskd health`, `taskd stats`, …).
//
// Each `cmd_*` function issues one or two HTTP calls against a running
// server and prints human-readable output. Errors propagate as anyhow
// results; main turns them into stderr output and a non-zero exit.

pub mod tasks;
pub mod users;

use anyhow::Result;

use crate::client::ApiClient;

/// `taskd health`
pub async fn cmd_health(api_url: &str) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let health = client.health().await?;
    println!(
        "API status: {}",
        health["status"].as_str().unwrap_or("unknown")
    );
    println!(
        "Version:    {}",
        health["version"].as_str().unwrap_or("unknown")
    );
    Ok(())
}

/// `taskd stats`
pub async fn cmd_stats(api_url: &str) -> Result<()> {
    let client = ApiClient::new(api_url)?;
    let stats = client.stats().await?;
    println!("Users:           {}", stats.users);
    println!("Tasks:           {}", stats.tasks);
    println!("Completed tasks: {}", stats.completed_tasks);
    Ok(())
}
