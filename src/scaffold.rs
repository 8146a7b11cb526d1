//! Project scaffolding from the worker starter template.
//!
//! Clones the template with the system `git`, detaches it from template
//! history, rewrites the module path to the new project name, and seeds a
//! `.env` with the user's token.

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{bail, Context, Result};

const TEMPLATE_REPO: &str = "https://github.com/skiff-sh/worker-starter-template.git";
const TEMPLATE_MODULE: &str = "github.com/skiff-sh/worker-starter-template";

/// Configuration for a new worker project.
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub name: String,
    pub token: String,
    pub include_frontend: bool,
}

/// Creates a new worker project in `./<name>` from the starter template.
pub fn create_worker(config: &ProjectConfig) -> Result<()> {
    println!("  Cloning template...");
    clone_template(&config.name)?;

    let project_dir = Path::new(&config.name);

    fs::remove_dir_all(project_dir.join(".git")).context("failed to remove template history")?;

    println!("  Configuring module path...");
    replace_module_path(project_dir, &config.name)?;

    println!("  Creating .env...");
    write_env_file(project_dir, &config.token)?;

    if config.include_frontend {
        println!("  Installing frontend dependencies...");
        if let Err(err) = install_frontend_deps(project_dir) {
            println!("  ⚠ npm install failed: {err:#}");
            println!("    Run 'cd frontend && npm install' manually.");
        }
    } else {
        println!("  Removing frontend (not selected)...");
        remove_frontend(project_dir)?;
    }

    println!("  Cleaning up...");
    if let Err(err) = cleanup_template_files(project_dir) {
        println!("  ⚠ cleanup had issues: {err:#}");
    }

    println!("  Running go mod tidy...");
    run_go_mod_tidy(project_dir)?;

    Ok(())
}

fn clone_template(dest: &str) -> Result<()> {
    let status = Command::new("git")
        .args(["clone", "--depth", "1", TEMPLATE_REPO, dest])
        .status()
        .context("failed to run git")?;
    if !status.success() {
        bail!("git clone exited with {status}");
    }
    Ok(())
}

/// Rewrites the template module path to the project name in `go.mod` and
/// every `.go` file, skipping `.git` and `node_modules`.
fn replace_module_path(dir: &Path, project_name: &str) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name();

        if path.is_dir() {
            if name == ".git" || name == "node_modules" {
                continue;
            }
            replace_module_path(&path, project_name)?;
            continue;
        }

        let is_target = name == "go.mod"
            || path.extension().map(|e| e == "go").unwrap_or(false);
        if !is_target {
            continue;
        }

        let content =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        if content.contains(TEMPLATE_MODULE) {
            fs::write(&path, content.replace(TEMPLATE_MODULE, project_name))
                .with_context(|| format!("writing {}", path.display()))?;
        }
    }
    Ok(())
}

fn write_env_file(dir: &Path, token: &str) -> Result<()> {
    let content = format!(
        "# Get your API token at https://app.skiff.app/settings/api-tokens\nSKIFF_API_TOKEN={token}\n"
    );
    fs::write(dir.join(".env"), content).context("failed to write .env")
}

fn remove_frontend(dir: &Path) -> Result<()> {
    let frontend = dir.join("frontend");
    if frontend.is_dir() {
        fs::remove_dir_all(frontend).context("failed to remove frontend")?;
    }
    Ok(())
}

fn install_frontend_deps(dir: &Path) -> Result<()> {
    let status = Command::new("npm")
        .arg("install")
        .current_dir(dir.join("frontend"))
        .status()
        .context("failed to run npm")?;
    if !status.success() {
        bail!("npm install exited with {status}");
    }
    Ok(())
}

/// Removes template-only files that have no place in a fresh project.
fn cleanup_template_files(dir: &Path) -> Result<()> {
    for name in [".github", "docs"] {
        let path = dir.join(name);
        if path.is_dir() {
            fs::remove_dir_all(&path)
                .with_context(|| format!("removing {}", path.display()))?;
        }
    }
    Ok(())
}

fn run_go_mod_tidy(dir: &Path) -> Result<()> {
    let status = Command::new("go")
        .args(["mod", "tidy"])
        .current_dir(dir)
        .status()
        .context("failed to run go")?;
    if !status.success() {
        bail!("go mod tidy exited with {status}");
    }
    Ok(())
}
