// Application Constants
// Layout geometry and timing shared across modules

/// Rows occupied by one carousel detail item (image placeholder + text block)
pub const POINT_ITEM_ROWS: usize = 10;

/// Blank rows between consecutive detail items
pub const POINT_ITEM_GAP: usize = 2;

/// Visibility thresholds handed to the observer (fractions of item area)
pub const OBSERVE_THRESHOLDS: [f32; 2] = [0.25, 0.75];

/// Ratio at or above which a detail item counts as the active one
pub const ACTIVE_RATIO: f32 = 0.75;

/// Default event poll / animation tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 50;

/// Ticks a status message stays on screen
pub const STATUS_TICKS: u32 = 60;

/// Log file written by the telemetry layer (stdout belongs to the TUI)
pub const LOG_FILE: &str = "estate-showcase.log";
