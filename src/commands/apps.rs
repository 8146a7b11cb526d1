//! `skiff apps` - list, delete, and update deployed applications.

use anyhow::{bail, Result};
use chrono::Local;

use skiff::api::deploy::env_pairs_to_map;
use skiff::api::types::UpdateDeploymentRequest;
use skiff::ui::{Icon, UiContext};
use skiff::{ApiClient, Config};

use super::{require_token, spin, unspin};

pub fn list() -> Result<()> {
    let ui = UiContext::detect(false);

    println!("{} Retrieving Skiff applications...", ui.icon(Icon::Database));
    println!();

    let cfg = Config::load();
    require_token(&cfg, &ui);

    let client = ApiClient::new(&cfg.api_url, &cfg.api_token)?;
    let apps = match client.list_apps() {
        Ok(apps) => apps,
        Err(err) => bail!("failed to list applications: {err}"),
    };

    if apps.deployments.is_empty() {
        println!("No applications deployed yet.");
        return Ok(());
    }

    println!("Found {} applications:", apps.total);
    println!();
    println!(
        "{:<20} {:<40} {:<15} {}",
        "ALIAS", "URL", "STATUS", "LAST DEPLOYED"
    );
    println!(
        "{:<20} {:<40} {:<15} {}",
        "-----", "---", "------", "-------------"
    );

    for deployment in &apps.deployments {
        let deployed_at = deployment
            .deployed_at
            .map(|at| {
                at.with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
            })
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{:<20} {:<40} {:<15} {}",
            deployment.alias,
            deployment.url,
            deployment.status.to_string(),
            deployed_at
        );
    }

    Ok(())
}

pub fn delete(alias: &str, yes: bool) -> Result<()> {
    let ui = UiContext::detect(false);

    println!(
        "{} Attempting to delete application '{alias}'...",
        ui.icon(Icon::Trash)
    );
    println!();

    let cfg = Config::load();
    require_token(&cfg, &ui);

    if !yes {
        let confirmed = skiff::prompt::ask_confirm(&format!(
            "Are you sure you want to delete '{alias}'? This action cannot be undone."
        ))?;
        if !confirmed {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let client = ApiClient::new(&cfg.api_url, &cfg.api_token)?;
    let spinner = spin(&ui, "Deleting...");
    let result = client.delete_app(alias);
    unspin(spinner);

    match result {
        Ok(response) => {
            println!("{} {}", ui.icon(Icon::Success), response.message);
            Ok(())
        }
        Err(err) => bail!("failed to delete application '{alias}': {err}"),
    }
}

pub fn update(
    alias: &str,
    env: Vec<String>,
    replicas: Option<u32>,
    cpu: Option<String>,
    memory: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    let ui = UiContext::detect(false);

    let cfg = Config::load();
    require_token(&cfg, &ui);

    if port == Some(0) {
        bail!("--port must be between 1 and 65535");
    }

    let update = UpdateDeploymentRequest {
        environment_variables: env_pairs_to_map(&env),
        replicas,
        cpu,
        memory,
        port,
    };

    if update.is_empty() {
        bail!(
            "specify at least one of --env (-e), --replicas, --cpu, --memory, or --port\n\n\
             Examples:\n  \
             skiff apps update myapp -e NODE_ENV=production\n  \
             skiff apps update myapp --replicas 3\n  \
             skiff apps update myapp --cpu 500m --memory 512Mi --port 3000"
        );
    }

    println!("{} Updating deployment '{alias}'...", ui.icon(Icon::Edit));
    println!();

    let client = ApiClient::new(&cfg.api_url, &cfg.api_token)?;
    let deployment = match client.update_app(alias, &update) {
        Ok(deployment) => deployment,
        Err(err) => bail!("update failed: {err}"),
    };

    println!("{} Deployment updated successfully.", ui.icon(Icon::Success));
    println!();
    println!("   Alias:  {}", deployment.alias);
    println!("   URL:    {}", deployment.url);
    println!("   Status: {}", deployment.status);
    if let Some(health) = &deployment.health_check {
        println!("   Health: {} ({}ms)", health.status, health.response_time_ms);
    }

    Ok(())
}
