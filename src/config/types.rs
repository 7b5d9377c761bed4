use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which page the site opens on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    /// Page identifier shown at startup (default: "home").
    /// Unknown identifiers are allowed and render the not-found page.
    #[serde(default = "default_start_page")]
    pub start_page: String,
}

/// Terminal presentation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Tick interval driving page transitions, in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Terminal width, in columns, below which the compact layout is used
    /// (default: 80). Narrower terminals than the full navbar needs are
    /// compact regardless.
    #[serde(default = "default_narrow_breakpoint")]
    pub narrow_breakpoint: u16,
    /// Lines scrolled before the navbar draws its bottom rule (default: 1).
    #[serde(default = "default_scrolled_threshold")]
    pub scrolled_threshold: u16,
    /// Capture the mouse so the wheel scrolls the page (default: true).
    #[serde(default = "default_mouse_capture")]
    pub mouse_capture: bool,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn, error or off (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file. Without one nothing is written, the terminal belongs to the UI.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl DisplayConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn default_start_page() -> String {
    "home".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_narrow_breakpoint() -> u16 {
    80
}

fn default_scrolled_threshold() -> u16 {
    1
}

fn default_mouse_capture() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            start_page: default_start_page(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            narrow_breakpoint: default_narrow_breakpoint(),
            scrolled_threshold: default_scrolled_threshold(),
            mouse_capture: default_mouse_capture(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
