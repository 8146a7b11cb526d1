//! `skiff secrets` - secrets management, global or per-deployment.

use std::io::Read;

use anyhow::{bail, Result};

use skiff::ui::{Icon, UiContext};
use skiff::{ApiClient, Config};

use super::require_token;

fn scope_label(deployment: &str) -> String {
    if deployment.is_empty() {
        "global".to_string()
    } else {
        format!("deployment {deployment}")
    }
}

pub fn list(deployment: Option<String>) -> Result<()> {
    let ui = UiContext::detect(false);
    let deployment = deployment.unwrap_or_default();

    println!("{} Retrieving secrets...", ui.icon(Icon::Database));
    println!();

    let cfg = Config::load();
    require_token(&cfg, &ui);

    let client = ApiClient::new(&cfg.api_url, &cfg.api_token)?;
    let list = match client.list_secrets(&deployment) {
        Ok(list) => list,
        Err(err) => bail!("failed to list secrets: {err}"),
    };

    if list.total == 0 {
        println!("No secrets found ({}).", scope_label(&deployment));
        return Ok(());
    }

    let scope = if deployment.is_empty() {
        "Global".to_string()
    } else {
        format!("Deployment: {deployment}")
    };
    println!("Found {} secret(s) ({scope}):", list.total);
    println!();
    println!("{:<25} {:<20} {}", "NAME", "DEPLOYMENT", "UPDATED");
    println!("{:<25} {:<20} {}", "----", "----------", "-------");
    for secret in &list.secrets {
        let scope = if secret.deployment_alias.is_empty() {
            "(global)"
        } else {
            secret.deployment_alias.as_str()
        };
        println!("{:<25} {:<20} {}", secret.name, scope, secret.updated_at);
    }

    Ok(())
}

pub fn set(name: &str, value: Option<String>, deployment: Option<String>) -> Result<()> {
    let ui = UiContext::detect(false);
    let deployment = deployment.unwrap_or_default();

    let value = match value {
        Some(value) => value,
        None => {
            // No value argument: consume stdin (e.g. `echo "s3cret" | skiff
            // secrets set API_KEY`).
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            input.trim().to_string()
        }
    };

    if value.is_empty() {
        bail!("secret value is required (provide as second argument or via stdin)");
    }

    println!("{} Setting secret '{name}'...", ui.icon(Icon::Database));
    println!();

    let cfg = Config::load();
    require_token(&cfg, &ui);

    let client = ApiClient::new(&cfg.api_url, &cfg.api_token)?;
    let response = match client.create_secret(name, &value, &deployment) {
        Ok(response) => response,
        Err(err) => bail!("failed to set secret: {err}"),
    };

    println!("{} {}", ui.icon(Icon::Success), response.message);
    println!("  Secret: {}", response.secret.name);
    if !response.secret.deployment_alias.is_empty() {
        println!("  Deployment: {}", response.secret.deployment_alias);
    }

    Ok(())
}

pub fn get(name: &str, deployment: Option<String>) -> Result<()> {
    let ui = UiContext::detect(true);
    let deployment = deployment.unwrap_or_default();

    let cfg = Config::load();
    require_token(&cfg, &ui);

    let client = ApiClient::new(&cfg.api_url, &cfg.api_token)?;
    let secret = match client.get_secret(name, &deployment) {
        Ok(secret) => secret,
        Err(err) => bail!("failed to get secret: {err}"),
    };

    // Raw value on stdout for piping; exactly one trailing newline.
    if secret.value.ends_with('\n') {
        print!("{}", secret.value);
    } else {
        println!("{}", secret.value);
    }

    Ok(())
}

pub fn delete(name: &str, deployment: Option<String>, yes: bool) -> Result<()> {
    let ui = UiContext::detect(false);
    let deployment = deployment.unwrap_or_default();

    println!(
        "{} Attempting to delete secret '{name}' ({})...",
        ui.icon(Icon::Trash),
        scope_label(&deployment)
    );
    println!();

    let cfg = Config::load();
    require_token(&cfg, &ui);

    if !yes {
        let confirmed = skiff::prompt::ask_confirm(&format!(
            "Are you sure you want to delete secret '{name}'?"
        ))?;
        if !confirmed {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let client = ApiClient::new(&cfg.api_url, &cfg.api_token)?;
    let response = match client.delete_secret(name, &deployment) {
        Ok(response) => response,
        Err(err) => bail!("failed to delete secret: {err}"),
    };

    println!("{} {}", ui.icon(Icon::Success), response.message);

    Ok(())
}
