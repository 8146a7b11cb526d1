//! Terminal output: capability detection, design tokens, and the spinner.

pub mod spinner;
pub mod terminal;
pub mod theme;

pub use spinner::{Spinner, SpinnerHandle};
pub use terminal::{detect_capabilities, TerminalCapabilities};
pub use theme::Icon;

/// Per-invocation output context, detected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub quiet: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub animation: bool,
}

impl UiContext {
    pub fn detect(quiet: bool) -> Self {
        Self::from_caps(quiet, detect_capabilities())
    }

    pub(crate) fn from_caps(quiet: bool, caps: TerminalCapabilities) -> Self {
        Self {
            quiet,
            caps,
            color: caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
            animation: !quiet && caps.is_tty && !caps.is_ci,
        }
    }

    /// Renders an icon under this context's capabilities.
    pub fn icon(&self, icon: Icon) -> String {
        icon.colored(self.color, self.unicode)
    }
}
