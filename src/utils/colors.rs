/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const BOLD: &str = "\x1b[1m";

pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Colour for a call count in tables:
/// 0 → grey (never called), below average → green, otherwise reset.
pub fn color_for_count(count: u32, average: f64) -> &'static str {
    if count == 0 {
        GREY
    } else if f64::from(count) < average {
        GREEN
    } else {
        RESET
    }
}

