//! `skiff create worker` - scaffold a new worker project.

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};

use skiff::scaffold::{create_worker, ProjectConfig};
use skiff::ui::{Icon, UiContext};
use skiff::{preflight, prompt};

pub fn worker(name: Option<String>) -> Result<()> {
    let ui = UiContext::detect(false);

    println!("{} Skiff Worker Generator", ui.icon(Icon::Deploy));
    println!();

    println!("Checking prerequisites...");
    if !preflight::has_git() {
        bail!("git is required to clone the starter template (install from https://git-scm.com)");
    }
    match preflight::go_version() {
        Some(version) => println!("  {} Go: {version}", ui.icon(Icon::Success)),
        None => println!(
            "  {} Go: not found (install from https://go.dev/dl/)",
            ui.icon(Icon::Warning)
        ),
    }
    println!();

    let name = match name {
        Some(name) => name,
        None => prompt::ask_project_name()?,
    };
    if name.is_empty() {
        bail!("project name is required");
    }

    if preflight::directory_exists(&name) {
        bail!("directory '{name}' already exists");
    }

    let full_path = std::env::current_dir()
        .map(|cwd| cwd.join(&name))
        .unwrap_or_else(|_| Path::new(&name).to_path_buf());
    println!("{} Project will be created at:", ui.icon(Icon::Folder));
    println!("   {}", full_path.display());
    println!();

    if !prompt::ask_confirm("Continue?")? {
        println!("Cancelled.");
        return Ok(());
    }

    let token = prompt::ask_api_token()?;
    let include_frontend = prompt::ask_include_frontend()?;

    if include_frontend && !preflight::has_npm() {
        println!(
            "  {} npm not found; frontend dependencies will not be installed",
            ui.icon(Icon::Warning)
        );
    }

    println!();
    println!("Creating project...");

    let config = ProjectConfig {
        name: name.clone(),
        token: token.clone(),
        include_frontend,
    };

    if let Err(err) = create_worker(&config) {
        // A half-created project directory is worse than none.
        let _ = fs::remove_dir_all(&name);
        bail!("failed to create project: {err:#}");
    }

    println!();
    println!("{} Ready! Run your worker:", ui.icon(Icon::Success));
    println!("   cd {name}");
    if token.is_empty() {
        println!("   # Don't forget to add your API token to .env first!");
    }
    println!("   go run ./cmd/worker");

    if include_frontend {
        println!();
        println!("   Frontend (in a separate terminal):");
        println!("   cd {name}/frontend && npm run dev");
    }

    Ok(())
}
