//! Runtime configuration of a [`SevenSegment`](crate::SevenSegment) display.

use embassy_time::Duration;
use embedded_hal::digital::PinState;

use crate::shared_constants::MULTIPLEX_SLEEP;

/// How the display is wired, which decides the pin level meaning "on".
///
/// | | select a digit | light a segment |
/// |---|---|---|
/// | [`CommonAnode`](Polarity::CommonAnode) | high | low |
/// | [`CommonCathode`](Polarity::CommonCathode) | low | high |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    #[default]
    CommonAnode,
    CommonCathode,
}

impl Polarity {
    /// The level that selects a digit position.
    #[must_use]
    pub const fn cell_on(self) -> PinState {
        match self {
            Self::CommonAnode => PinState::High,
            Self::CommonCathode => PinState::Low,
        }
    }

    /// The level that lights a segment.
    #[must_use]
    pub const fn segment_on(self) -> PinState {
        match self {
            Self::CommonAnode => PinState::Low,
            Self::CommonCathode => PinState::High,
        }
    }

    #[must_use]
    pub const fn cell_off(self) -> PinState {
        invert(self.cell_on())
    }

    #[must_use]
    pub const fn segment_off(self) -> PinState {
        invert(self.segment_on())
    }
}

const fn invert(state: PinState) -> PinState {
    match state {
        PinState::High => PinState::Low,
        PinState::Low => PinState::High,
    }
}

/// Display settings that are not pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub polarity: Polarity,
    /// How long each position stays selected in a pass.
    pub dwell: Duration,
    /// Whether the status-word codes render on a four-digit display. When off, they are
    /// ignored like any other out-of-range value.
    pub status_words: bool,
}

impl Config {
    /// Common anode, [`MULTIPLEX_SLEEP`] dwell, status words on.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            polarity: Polarity::CommonAnode,
            dwell: MULTIPLEX_SLEEP,
            status_words: true,
        }
    }

    #[must_use]
    pub const fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    #[must_use]
    pub const fn with_dwell(mut self, dwell: Duration) -> Self {
        self.dwell = dwell;
        self
    }

    #[must_use]
    pub const fn with_status_words(mut self, status_words: bool) -> Self {
        self.status_words = status_words;
        self
    }

    /// The dwell in whole microseconds, saturating.
    pub(crate) fn dwell_us(&self) -> u32 {
        u32::try_from(self.dwell.as_micros()).unwrap_or(u32::MAX)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
