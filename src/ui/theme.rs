use crossterm::style::{Color, Stylize};

/// Design tokens for the Skiff CLI.
///
/// All icons and colors used anywhere in the output come from this module,
/// with an ASCII fallback for terminals that cannot render Unicode.
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const DEPLOY: &str = "🚀";
    pub const PACKAGE: &str = "📦";
    pub const CLOUD: &str = "☁";
    pub const FOLDER: &str = "📁";
    pub const GLOBE: &str = "🌐";
    pub const DATABASE: &str = "🌱";
    pub const TRASH: &str = "🗑";
    pub const EDIT: &str = "✏";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";

    pub const DEPLOY: &str = "[>>]";
    pub const PACKAGE: &str = "[PKG]";
    pub const CLOUD: &str = "[CLOUD]";
    pub const FOLDER: &str = "[DIR]";
    pub const GLOBE: &str = "[NET]";
    pub const DATABASE: &str = "[DB]";
    pub const TRASH: &str = "[DEL]";
    pub const EDIT: &str = "[EDIT]";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Deploy,
    Package,
    Cloud,
    Folder,
    Globe,
    Database,
    Trash,
    Edit,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => icons::SUCCESS,
            (true, Icon::Error) => icons::ERROR,
            (true, Icon::Warning) => icons::WARNING,
            (true, Icon::Arrow) => icons::ARROW,
            (true, Icon::Deploy) => icons::DEPLOY,
            (true, Icon::Package) => icons::PACKAGE,
            (true, Icon::Cloud) => icons::CLOUD,
            (true, Icon::Folder) => icons::FOLDER,
            (true, Icon::Globe) => icons::GLOBE,
            (true, Icon::Database) => icons::DATABASE,
            (true, Icon::Trash) => icons::TRASH,
            (true, Icon::Edit) => icons::EDIT,
            (false, Icon::Success) => icons_ascii::SUCCESS,
            (false, Icon::Error) => icons_ascii::ERROR,
            (false, Icon::Warning) => icons_ascii::WARNING,
            (false, Icon::Arrow) => icons_ascii::ARROW,
            (false, Icon::Deploy) => icons_ascii::DEPLOY,
            (false, Icon::Package) => icons_ascii::PACKAGE,
            (false, Icon::Cloud) => icons_ascii::CLOUD,
            (false, Icon::Folder) => icons_ascii::FOLDER,
            (false, Icon::Globe) => icons_ascii::GLOBE,
            (false, Icon::Database) => icons_ascii::DATABASE,
            (false, Icon::Trash) => icons_ascii::TRASH,
            (false, Icon::Edit) => icons_ascii::EDIT,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Warning | Icon::Trash => colors::WARNING,
            Icon::Arrow => colors::DIM,
            Icon::Deploy | Icon::Package | Icon::Cloud | Icon::Folder | Icon::Globe
            | Icon::Database | Icon::Edit => colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
