// config.rs

/// Console attribute restored by `Console::reset_color`: light grey on black.
pub const DEFAULT_COLOR: u16 = 7;

/// Terminal size lookup
pub mod terminal {
    pub const COLUMNS_VAR: &str = "COLUMNS";
    pub const LINES_VAR: &str = "LINES";
    /// Used when the environment does not report a usable size.
    pub const FALLBACK_WIDTH: i32 = 80;
    pub const FALLBACK_HEIGHT: i32 = 24;
}

/// Colours used by the demo binary
pub mod palette {
    pub const HEADING: u16 = 0x0b; // bright cyan
    pub const VALUE: u16 = 0x0e; // bright yellow
    pub const WARNING: u16 = 0x0c; // bright red
}
