use embassy_time::Duration;

/// Number of segment lines per digit: seven bars plus the decimal point.
pub const SEGMENT_COUNT: usize = 8;

/// Largest display the glyph tables and digit decomposition support.
pub const MAX_CELL_COUNT: usize = 4;

/// How long each digit position stays selected during a multiplexed pass.
pub const MULTIPLEX_SLEEP: Duration = Duration::from_millis(5);

/// Largest value a four-digit display can show.
pub const MAX_NUMBER: u16 = 9999;
