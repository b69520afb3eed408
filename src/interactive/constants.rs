//! Constants for the interactive picker
//!
//! Timing and layout values shared by the run loop and the components.

// Timing constants
/// Delay between the last keystroke and the search it triggers
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Page size for PageUp/PageDown navigation
pub const PAGE_SIZE: usize = 10;

/// The next page is requested once the cursor is this close to the last row
pub const LOAD_MORE_THRESHOLD: usize = 5;

// Dialog dimensions
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;
pub const OVERLAY_MAX_WIDTH: u16 = 90;
pub const DIALOG_MARGIN: u16 = 4;

/// Queries offered on the welcome screen, cycled with Tab
pub const SUGGESTIONS: [&str; 3] = ["Moon", "Rover", "Rocket"];

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

// Shown when the host request is incompatible
pub const HANDOFF_UNAVAILABLE: &str = "The program that opened this picker cannot accept images from it";
