//! `skiff deploy` - package the project and upload it to the platform.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};

use skiff::deploy::{self, DeployOptions};
use skiff::ui::{Icon, UiContext};
use skiff::Config;

use super::{require_token, spin, unspin};

pub fn run(
    path: Option<PathBuf>,
    force: bool,
    env: Vec<String>,
    cpu: Option<String>,
    memory: Option<String>,
    port: Option<String>,
) -> Result<()> {
    let ui = UiContext::detect(false);

    println!("{} Skiff Deploy", ui.icon(Icon::Deploy));
    println!();

    let cfg = Config::load();
    require_token(&cfg, &ui);

    let path = path.unwrap_or_else(|| PathBuf::from("."));
    let Ok(abs_path) = fs::canonicalize(&path) else {
        bail!("directory not found: {}", path.display());
    };

    println!("{} Deploying: {}", ui.icon(Icon::Folder), abs_path.display());
    println!("{} API: {}", ui.icon(Icon::Globe), cfg.api_url);
    if force {
        println!(
            "{} Force mode: will overwrite existing deployment",
            ui.icon(Icon::Warning)
        );
    }
    println!();

    println!("{} Creating archive...", ui.icon(Icon::Package));

    let opts = DeployOptions {
        api_url: cfg.api_url,
        api_token: cfg.api_token,
        path,
        force,
        env,
        cpu,
        memory,
        port,
    };

    println!("{} Uploading and deploying...", ui.icon(Icon::Cloud));
    println!();

    let spinner = spin(&ui, "Deploying...");
    let result = deploy::run(&opts);
    unspin(spinner);

    let response = match result {
        Ok(response) => response,
        Err(err) => bail!("deployment failed: {err}"),
    };

    let deployment = &response.deployment;
    println!("{} Deployment successful!", ui.icon(Icon::Success));
    println!();
    println!("   URL:    {}", deployment.url);
    println!("   Alias:  {}", deployment.alias);
    println!("   Status: {}", deployment.status);
    println!("   ID:     {}", deployment.id);

    if let Some(health) = &deployment.health_check {
        println!("   Health: {} ({}ms)", health.status, health.response_time_ms);
    }

    Ok(())
}
