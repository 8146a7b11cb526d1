//! Interactive prompts for scaffolding and destructive-action gating.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Password};

use crate::preflight;

/// Asks for a project name (required, trimmed).
pub fn ask_project_name() -> Result<String> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Project name")
        .interact_text()?;
    Ok(name.trim().to_string())
}

/// Asks for an API token; empty input skips (the user can fill `.env`
/// later). Warns on an unexpected token format but uses it as-is.
pub fn ask_api_token() -> Result<String> {
    let token: String = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("API token (from app.skiff.app/settings/api-tokens)")
        .allow_empty_password(true)
        .interact()?;
    let token = token.trim().to_string();

    if token.is_empty() {
        println!("  ⚠ No token provided. Add SKIFF_API_TOKEN to .env before deploying.");
        return Ok(String::new());
    }

    if !preflight::validate_token(&token) {
        println!("  ⚠ Token should start with 'ak_'. Using as-is.");
    }

    Ok(token)
}

/// Asks whether to include the frontend in a scaffolded project.
pub fn ask_include_frontend() -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Include frontend?")
        .default(false)
        .interact()?)
}

/// Yes/no question with default yes; used to gate destructive operations.
pub fn ask_confirm(message: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .default(true)
        .interact()?)
}
