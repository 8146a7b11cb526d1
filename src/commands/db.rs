//! `skiff db` - managed database operations, including dump/restore.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use skiff::ui::{Icon, UiContext};
use skiff::{ApiClient, Config};

use super::{require_token, spin, unspin};

pub fn list(quiet: bool) -> Result<()> {
    let ui = UiContext::detect(quiet);

    if !quiet {
        println!("{} Retrieving databases...", ui.icon(Icon::Database));
        println!();
    }

    let cfg = Config::load();
    require_token(&cfg, &ui);

    let client = ApiClient::new(&cfg.api_url, &cfg.api_token)?;
    let list = match client.list_databases() {
        Ok(list) => list,
        Err(err) => bail!("failed to list databases: {err}"),
    };

    if list.total == 0 {
        if !quiet {
            println!("No databases found.");
        }
        return Ok(());
    }

    if quiet {
        for name in &list.databases {
            println!("{name}");
        }
        return Ok(());
    }

    println!("Found {} database(s):", list.total);
    println!();
    for name in &list.databases {
        println!("   {name}");
    }

    Ok(())
}

pub fn create(name: Option<String>) -> Result<()> {
    let ui = UiContext::detect(false);

    let Some(name) = name else {
        bail!("database name is required");
    };

    println!("{} Creating database '{name}'...", ui.icon(Icon::Database));
    println!();

    let cfg = Config::load();
    require_token(&cfg, &ui);

    let client = ApiClient::new(&cfg.api_url, &cfg.api_token)?;
    let created = match client.create_database(&name) {
        Ok(created) => created,
        Err(err) => bail!("failed to create database: {err}"),
    };

    println!("{} {}", ui.icon(Icon::Success), created.message);
    println!("  Database: {}", created.database);

    Ok(())
}

pub fn delete(name: &str, yes: bool, quiet: bool) -> Result<()> {
    let ui = UiContext::detect(quiet);

    if !quiet {
        println!(
            "{} Attempting to delete database '{name}'...",
            ui.icon(Icon::Trash)
        );
        println!();
    }

    let cfg = Config::load();
    require_token(&cfg, &ui);

    if !yes {
        let confirmed = skiff::prompt::ask_confirm(&format!(
            "Are you sure you want to delete database '{name}'? This action cannot be undone."
        ))?;
        if !confirmed {
            if !quiet {
                println!("Deletion cancelled.");
            }
            return Ok(());
        }
    }

    let client = ApiClient::new(&cfg.api_url, &cfg.api_token)?;
    let spinner = spin(&ui, "Deleting...");
    let result = client.delete_database(name);
    unspin(spinner);

    match result {
        Ok(response) => {
            if !quiet {
                println!("{} {}", ui.icon(Icon::Success), response.message);
            }
            Ok(())
        }
        Err(err) => bail!("failed to delete database '{name}': {err}"),
    }
}

pub fn dump(name: &str, output: Option<PathBuf>) -> Result<()> {
    let ui = UiContext::detect(false);
    let out_path = output.unwrap_or_else(|| PathBuf::from(format!("{name}.dump")));

    println!(
        "{} Dumping database '{name}' to {}...",
        ui.icon(Icon::Database),
        out_path.display()
    );
    println!();

    let cfg = Config::load();
    require_token(&cfg, &ui);

    let mut out = match File::create(&out_path) {
        Ok(file) => file,
        Err(err) => bail!("failed to create output file: {err}"),
    };

    let client = ApiClient::new(&cfg.api_url, &cfg.api_token)?;
    let spinner = spin(&ui, "Dumping...");
    let result = client.dump_database(name, &mut out);
    unspin(spinner);

    if let Err(err) = result {
        // Never leave a partial dump behind.
        drop(out);
        let _ = fs::remove_file(&out_path);
        bail!("failed to dump database: {err}");
    }

    let abs = fs::canonicalize(&out_path).unwrap_or(out_path);
    println!("{} Dump saved to {}", ui.icon(Icon::Success), abs.display());

    Ok(())
}

pub fn restore(name: &str, file: &Path) -> Result<()> {
    let ui = UiContext::detect(false);

    println!(
        "{} Restoring database '{name}' from {}...",
        ui.icon(Icon::Database),
        file.display()
    );
    println!();

    let cfg = Config::load();
    require_token(&cfg, &ui);

    let client = ApiClient::new(&cfg.api_url, &cfg.api_token)?;
    let spinner = spin(&ui, "Restoring...");
    let result = client.restore_database(name, file);
    unspin(spinner);

    match result {
        Ok(response) => {
            println!("{} {}", ui.icon(Icon::Success), response.message);
            Ok(())
        }
        Err(err) => bail!("failed to restore database: {err}"),
    }
}
