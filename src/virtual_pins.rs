//! Recording GPIO outputs and delays for testing displays on the host.
//!
//! A [`VirtualBoard`] remembers the level of each of its pins and, every time a
//! [`VirtualDelay`] blocks, takes a [`Snapshot`] of all levels. A snapshot is what a human
//! would see during that dwell.
//!
//! [`VirtualBoard::led4`] and [`VirtualBoard::single`] wire a display to the board with the
//! standard layout: select lines on [`CELL_PINS`], segment lines on [`SEGMENT_PINS`].

use core::cell::RefCell;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, PinState};
use heapless::Vec;

use crate::config::{Config, Polarity};
use crate::pins::{AlwaysSelected, DigitPins, SegmentPins};
use crate::segments::{Segment, Segments};
use crate::seven_segment::SevenSegment;
use crate::shared_constants::{MAX_CELL_COUNT, SEGMENT_COUNT};

/// Number of pins on a board.
pub const PIN_COUNT: usize = 16;

/// Number of snapshots a board keeps before it stops recording.
pub const SNAPSHOT_CAPACITY: usize = 32;

/// Select lines of the standard layout, left to right.
pub const CELL_PINS: [u8; MAX_CELL_COUNT] = [0, 1, 2, 3];

/// Segment lines of the standard layout, in [`Segment`] order.
pub const SEGMENT_PINS: [u8; SEGMENT_COUNT] = [4, 5, 6, 7, 8, 9, 10, 11];

/// The levels of every pin during one delay. `None` is a pin never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub levels: [Option<PinState>; PIN_COUNT],
    /// Length of the delay, in microseconds. Zero for [`VirtualBoard::current`].
    pub delay_us: u32,
}

impl Snapshot {
    #[must_use]
    pub fn level(&self, pin: u8) -> Option<PinState> {
        self.levels.get(usize::from(pin)).copied().flatten()
    }

    /// Standard-layout positions whose select line is at the "on" level.
    #[must_use]
    pub fn selected_cells(&self, polarity: Polarity) -> Vec<usize, MAX_CELL_COUNT> {
        CELL_PINS
            .into_iter()
            .enumerate()
            .filter(|&(_, pin)| self.level(pin) == Some(polarity.cell_on()))
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Standard-layout segments at the "lit" level.
    #[must_use]
    pub fn lit_segments(&self, polarity: Polarity) -> Segments {
        Segment::ALL
            .into_iter()
            .zip(SEGMENT_PINS)
            .filter(|&(_, pin)| self.level(pin) == Some(polarity.segment_on()))
            .fold(Segments::EMPTY, |lit, (segment, _)| lit | segment)
    }
}

#[derive(Debug)]
struct BoardState {
    levels: [Option<PinState>; PIN_COUNT],
    write_count: usize,
    snapshots: Vec<Snapshot, SNAPSHOT_CAPACITY>,
    failing_pin: Option<u8>,
}

/// A set of virtual output pins plus a log of what they showed during each delay.
#[derive(Debug)]
pub struct VirtualBoard(RefCell<BoardState>);

impl VirtualBoard {
    #[must_use]
    pub const fn new() -> Self {
        Self(RefCell::new(BoardState {
            levels: [None; PIN_COUNT],
            write_count: 0,
            snapshots: Vec::new(),
            failing_pin: None,
        }))
    }

    /// An output driving board pin `id`.
    #[must_use]
    pub const fn pin(&self, id: u8) -> VirtualPin<'_> {
        VirtualPin { board: self, id }
    }

    /// A delay that snapshots the board each time it blocks.
    #[must_use]
    pub const fn delay(&self) -> VirtualDelay<'_> {
        VirtualDelay { board: self }
    }

    /// A four-digit display wired with the standard layout.
    #[must_use]
    pub fn led4(
        &self,
        config: Config,
    ) -> SevenSegment<VirtualPin<'_>, VirtualPin<'_>, VirtualDelay<'_>, MAX_CELL_COUNT> {
        let [thousands, hundreds, tens, ones] = CELL_PINS.map(|id| self.pin(id));
        let digit_pins = DigitPins {
            ones,
            tens,
            hundreds,
            thousands,
        };
        SevenSegment::new_led4(digit_pins, self.segment_pins(), self.delay(), config)
    }

    /// A single-digit display wired with the standard layout (no select line).
    #[must_use]
    pub fn single(
        &self,
        config: Config,
    ) -> SevenSegment<VirtualPin<'_>, AlwaysSelected, VirtualDelay<'_>, 1> {
        SevenSegment::new_single(self.segment_pins(), self.delay(), config)
    }

    fn segment_pins(&self) -> SegmentPins<VirtualPin<'_>> {
        let [
            top,
            upper_right,
            lower_right,
            decimal_point,
            bottom,
            lower_left,
            upper_left,
            center,
        ] = SEGMENT_PINS.map(|id| self.pin(id));
        SegmentPins {
            top,
            upper_right,
            lower_right,
            decimal_point,
            bottom,
            lower_left,
            upper_left,
            center,
        }
    }

    /// The levels right now.
    #[must_use]
    pub fn current(&self) -> Snapshot {
        Snapshot {
            levels: self.0.borrow().levels,
            delay_us: 0,
        }
    }

    #[must_use]
    pub fn level(&self, pin: u8) -> Option<PinState> {
        self.current().level(pin)
    }

    /// Pin writes since the board was made or last [`reset_log`](Self::reset_log).
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.0.borrow().write_count
    }

    /// Snapshots since the board was made or last [`reset_log`](Self::reset_log).
    #[must_use]
    pub fn snapshots(&self) -> Vec<Snapshot, SNAPSHOT_CAPACITY> {
        self.0.borrow().snapshots.clone()
    }

    /// Forgets writes and snapshots; pin levels are kept.
    pub fn reset_log(&self) {
        let mut state = self.0.borrow_mut();
        state.write_count = 0;
        state.snapshots.clear();
    }

    /// Makes every later write to `pin` fail.
    pub fn fail_pin(&self, pin: u8) {
        self.0.borrow_mut().failing_pin = Some(pin);
    }

    fn write(&self, pin: u8, state: PinState) -> Result<(), VirtualPinError> {
        let mut board = self.0.borrow_mut();
        if board.failing_pin == Some(pin) {
            return Err(VirtualPinError);
        }
        let level = board
            .levels
            .get_mut(usize::from(pin))
            .ok_or(VirtualPinError)?;
        *level = Some(state);
        board.write_count = board.write_count.saturating_add(1);
        Ok(())
    }

    fn record_delay(&self, delay_us: u32) {
        let mut board = self.0.borrow_mut();
        let snapshot = Snapshot {
            levels: board.levels,
            delay_us,
        };
        // A full log drops later snapshots; tests reset between passes.
        let _ = board.snapshots.push(snapshot);
    }
}

impl Default for VirtualBoard {
    fn default() -> Self {
        Self::new()
    }
}

/// Returned by a [`VirtualPin`] told to fail, or outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualPinError;

impl embedded_hal::digital::Error for VirtualPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// One output of a [`VirtualBoard`].
#[derive(Debug, Clone, Copy)]
pub struct VirtualPin<'a> {
    board: &'a VirtualBoard,
    id: u8,
}

impl ErrorType for VirtualPin<'_> {
    type Error = VirtualPinError;
}

impl OutputPin for VirtualPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.board.write(self.id, PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.board.write(self.id, PinState::High)
    }
}

/// A delay that returns at once after recording a [`Snapshot`].
#[derive(Debug, Clone, Copy)]
pub struct VirtualDelay<'a> {
    board: &'a VirtualBoard,
}

impl DelayNs for VirtualDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.board.record_delay(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.board.record_delay(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.board.record_delay(ms.saturating_mul(1_000));
    }
}
