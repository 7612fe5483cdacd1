//! A display that several contexts can drive, one operation at a time.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::seven_segment::SevenSegment;
use crate::{Error, Result};

/// A [`SevenSegment`] behind a blocking mutex.
///
/// Every operation holds the lock for its whole pass, so two callers can never interleave
/// pin writes (and so never select two positions at once). With
/// `CriticalSectionRawMutex` this can live in a `static`.
pub struct SharedSevenSegment<M, S, C, D, const CELL_COUNT: usize>(
    Mutex<M, RefCell<SevenSegment<S, C, D, CELL_COUNT>>>,
);

impl<M, S, C, D, const CELL_COUNT: usize> SharedSevenSegment<M, S, C, D, CELL_COUNT>
where
    M: RawMutex,
    S: OutputPin,
    C: OutputPin,
    D: DelayNs,
{
    #[must_use]
    pub const fn new(raw_mutex: M, display: SevenSegment<S, C, D, CELL_COUNT>) -> Self {
        Self(Mutex::const_new(raw_mutex, RefCell::new(display)))
    }

    /// Runs `operation` with exclusive access to the display.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DisplayBusy`] when called from inside another operation on the same
    /// display, or whatever `operation` returns.
    pub fn with<R>(
        &self,
        operation: impl FnOnce(&mut SevenSegment<S, C, D, CELL_COUNT>) -> Result<R>,
    ) -> Result<R> {
        self.0.lock(|cell| {
            let mut display = cell.try_borrow_mut().map_err(|_| Error::DisplayBusy)?;
            operation(&mut display)
        })
    }

    /// See [`SevenSegment::begin`].
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be driven or the display is busy.
    pub fn begin(&self) -> Result<()> {
        self.with(SevenSegment::begin)
    }

    /// See [`SevenSegment::update_display`].
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be driven or the display is busy.
    pub fn update_display(&self, value: i32) -> Result<()> {
        self.with(|display| display.update_display(value))
    }

    /// See [`SevenSegment::clear_display`].
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be driven or the display is busy.
    pub fn clear_display(&self) -> Result<()> {
        self.with(SevenSegment::clear_display)
    }

    /// See [`SevenSegment::write_text`].
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be driven or the display is busy.
    pub fn write_text(&self, text: &str) -> Result<()> {
        self.with(|display| display.write_text(text))
    }
}
