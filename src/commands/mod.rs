//! Command implementations. Each `run` owns its console output; errors
//! bubble up as `anyhow` and are printed once by `main`.

pub mod apps;
pub mod create;
pub mod db;
pub mod deploy;
pub mod secrets;

use skiff::ui::{Icon, SpinnerHandle, UiContext};
use skiff::Config;

/// Exits with guidance when no API token is configured. Every networked
/// command calls this before touching the client.
pub(crate) fn require_token(cfg: &Config, ui: &UiContext) {
    if cfg.has_token() {
        return;
    }

    eprintln!("{} Error: SKIFF_API_TOKEN is required", ui.icon(Icon::Error));
    eprintln!();
    eprintln!("Set your API token in one of these ways:");
    eprintln!("  1. Create a .env file with: SKIFF_API_TOKEN=your_token");
    eprintln!("  2. Export environment variable: export SKIFF_API_TOKEN=your_token");
    eprintln!();
    eprintln!("Get your API token at: https://app.skiff.app/settings/api-tokens");
    std::process::exit(1);
}

/// Starts a spinner when animation is enabled for this context.
pub(crate) fn spin(ui: &UiContext, message: &str) -> Option<SpinnerHandle> {
    ui.animation
        .then(|| skiff::ui::spinner::start(message, ui.unicode))
}

/// Stops a spinner, if one was started, before any further output.
pub(crate) fn unspin(handle: Option<SpinnerHandle>) {
    if let Some(handle) = handle {
        handle.finish();
    }
}
