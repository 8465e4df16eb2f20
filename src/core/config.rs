//! # Configuration
//!
//! Everything the widget needs to know is compiled in. There is no config
//! file, no environment lookup and no CLI override: `WidgetConfig::default()`
//! is the whole story.
//!
//! Values are still gathered into one struct so tests (and the storage/quote
//! layers) can swap a path or endpoint without touching globals.

use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_STORAGE_FILE: &str = "todos.csv";
pub const DEFAULT_LOG_FILE: &str = "pinlist.log";

/// Content given to items created through the "new item" action.
pub const NEW_ITEM_PLACEHOLDER: &str = "New item";

pub const DEFAULT_QUOTE_ENDPOINT: &str = "https://www.wniui.com/api/yiyan/index.php";
pub const DEFAULT_QUOTE_TIMEOUT: Duration = Duration::from_secs(3);
pub const FALLBACK_QUOTE: &str = "Focus on the present, build the future.";

pub const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Panel anchor, measured in cells from the top-left of the terminal.
pub const DEFAULT_ANCHOR_X: u16 = 2;
pub const DEFAULT_ANCHOR_Y: u16 = 1;
pub const DEFAULT_PANEL_WIDTH: u16 = 44;
/// Upper bound on panel height as a share of the screen.
pub const DEFAULT_MAX_HEIGHT_PERCENT: u16 = 80;

// ============================================================================
// Config Structs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub anchor_x: u16,
    pub anchor_y: u16,
    pub width: u16,
    pub max_height_percent: u16,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            anchor_x: DEFAULT_ANCHOR_X,
            anchor_y: DEFAULT_ANCHOR_Y,
            width: DEFAULT_PANEL_WIDTH,
            max_height_percent: DEFAULT_MAX_HEIGHT_PERCENT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WidgetConfig {
    pub storage_path: PathBuf,
    pub quote_endpoint: String,
    pub quote_timeout: Duration,
    pub fallback_quote: String,
    pub panel: PanelConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_FILE),
            quote_endpoint: DEFAULT_QUOTE_ENDPOINT.to_string(),
            quote_timeout: DEFAULT_QUOTE_TIMEOUT,
            fallback_quote: FALLBACK_QUOTE.to_string(),
            panel: PanelConfig::default(),
        }
    }
}
