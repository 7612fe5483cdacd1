//! Classification of the integers accepted by
//! [`SevenSegment::update_display`](crate::SevenSegment::update_display).

use crate::shared_constants::MAX_NUMBER;

/// Integer code that renders [`StatusWord::Stop`].
pub const STOP_CODE: i32 = -1;

/// Integer code that renders [`StatusWord::Error`].
pub const ERROR_CODE: i32 = -2;

/// The two fixed words a four-digit display can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusWord {
    /// "StoP": the emergency stop is engaged.
    Stop,
    /// "FEIL" (Norwegian for error): something has been wrong for too long.
    Error,
}

impl StatusWord {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Stop => "StoP",
            Self::Error => "FEIL",
        }
    }

    /// The word spelled exactly by `text`, if any.
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        [Self::Stop, Self::Error]
            .into_iter()
            .find(|word| word.text() == text)
    }
}

/// What an integer passed to the display means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayValue {
    Number(u16),
    Status(StatusWord),
}

impl DisplayValue {
    /// Decodes `code`: 0-9999 is a number, [`STOP_CODE`] and [`ERROR_CODE`] are status
    /// words, everything else is `None`.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            STOP_CODE => Some(Self::Status(StatusWord::Stop)),
            ERROR_CODE => Some(Self::Status(StatusWord::Error)),
            _ => u16::try_from(code)
                .ok()
                .filter(|&number| number <= MAX_NUMBER)
                .map(Self::Number),
        }
    }
}
