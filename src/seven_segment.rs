//! A blocking driver for a multiplexed seven-segment LED display.
//!
//! See [`SevenSegment`] for usage.

#[cfg(feature = "display-trace")]
use defmt::info;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::Result;
use crate::config::Config;
use crate::display_value::DisplayValue;
use crate::frame::Frame;
use crate::output_array::OutputArray;
use crate::pins::{AlwaysSelected, DigitPins, SegmentPins};
use crate::segments::Segments;
use crate::shared_constants::{MAX_CELL_COUNT, SEGMENT_COUNT};

/// A four-digit display.
pub type Led4<S, C, D> = SevenSegment<S, C, D, MAX_CELL_COUNT>;

/// A single digit with no select line.
pub type Led1<S, D> = SevenSegment<S, AlwaysSelected, D, 1>;

/// A multiplexed seven-segment LED display of `CELL_COUNT` digits (1 to 4).
///
/// All digit positions share the segment lines, so only one position is selected at a time.
/// Each call to [`update_display`](Self::update_display) makes exactly one pass over the
/// active positions, holding each for [`Config::dwell`]. Call it continuously (every few
/// milliseconds) to keep the whole value visible.
///
/// * `S`: segment line outputs
/// * `C`: digit select outputs
/// * `D`: a blocking delay
///
/// # Example
///
/// ```
/// use segment_kit::{Config, DigitPins, SegmentPins, SevenSegment};
/// # use segment_kit::virtual_pins::VirtualBoard;
/// # let board = VirtualBoard::new();
/// # let pin = |id| board.pin(id);
/// # let delay = board.delay();
///
/// let digit_pins = DigitPins { ones: pin(3), tens: pin(2), hundreds: pin(1), thousands: pin(0) };
/// let segment_pins = SegmentPins {
///     top: pin(4),
///     upper_right: pin(5),
///     lower_right: pin(6),
///     decimal_point: pin(7),
///     bottom: pin(8),
///     lower_left: pin(9),
///     upper_left: pin(10),
///     center: pin(11),
/// };
/// let mut display = SevenSegment::new_led4(digit_pins, segment_pins, delay, Config::default());
///
/// display.begin()?;
/// display.update_display(42)?; // "  42"
/// display.update_display(-1)?; // "StoP"
/// display.update_display(-7)?; // ignored
/// display.clear_display()?;
/// # Ok::<(), segment_kit::Error>(())
/// ```
pub struct SevenSegment<S, C, D, const CELL_COUNT: usize> {
    cell_pins: OutputArray<C, CELL_COUNT>,
    segment_pins: OutputArray<S, SEGMENT_COUNT>,
    delay: D,
    config: Config,
}

impl<S, C, D, const CELL_COUNT: usize> SevenSegment<S, C, D, CELL_COUNT>
where
    S: OutputPin,
    C: OutputPin,
    D: DelayNs,
{
    const CELL_COUNT_IS_SUPPORTED: () = assert!(
        CELL_COUNT >= 1 && CELL_COUNT <= MAX_CELL_COUNT,
        "a display has 1 to 4 digit positions"
    );

    /// Largest number this many positions can show.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "CELL_COUNT is at most 4, so the power of ten fits in u16"
    )]
    pub const MAX_VALUE: u16 = {
        let mut limit: u16 = 1;
        let mut index = 0;
        while index < CELL_COUNT {
            limit *= 10;
            index += 1;
        }
        limit - 1
    };

    /// Takes ownership of the pins. Writes nothing until [`begin`](Self::begin).
    ///
    /// `cell_pins` run left to right (most significant position first); `segment_pins` are in
    /// [`Segment`](crate::Segment) order.
    #[must_use]
    pub const fn new(
        cell_pins: OutputArray<C, CELL_COUNT>,
        segment_pins: OutputArray<S, SEGMENT_COUNT>,
        delay: D,
        config: Config,
    ) -> Self {
        let () = Self::CELL_COUNT_IS_SUPPORTED;
        Self {
            cell_pins,
            segment_pins,
            delay,
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Puts every owned pin at its inactive level: the display starts blank.
    ///
    /// The HAL's output type already configures the pins as outputs, so this only
    /// establishes known levels. Call once before the first update.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be driven.
    pub fn begin(&mut self) -> Result<()> {
        #[cfg(feature = "display-trace")]
        info!("begin: {} positions, {:?}", CELL_COUNT, self.config);
        self.clear_display()
    }

    /// Deselects every position and darkens every segment, whatever was shown before.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be driven.
    pub fn clear_display(&mut self) -> Result<()> {
        let polarity = self.config.polarity;
        self.cell_pins.set_all(polarity.cell_off())?;
        self.segment_pins.set_all(polarity.segment_off())
    }

    /// Makes one multiplexed pass showing `value`.
    ///
    /// * `0..=MAX_VALUE`: the number, right-aligned, leading zeros blank.
    /// * `-1` / `-2` on a four-digit display with [`Config::status_words`]: "StoP" / "FEIL".
    /// * Anything else: nothing happens; no pin is written.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be driven. Unsupported values are not errors.
    pub fn update_display(&mut self, value: i32) -> Result<()> {
        match self.frame_for(value) {
            Some(frame) => self.refresh(&frame),
            None => {
                #[cfg(feature = "display-trace")]
                info!("update_display: ignoring {}", value);
                Ok(())
            }
        }
    }

    /// Makes one pass showing `text` if it is a status word as wide as the display, else
    /// a dash in every position.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be driven.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        self.refresh(&Frame::from_text(text))
    }

    /// Makes one pass over the active positions of `frame`, left to right.
    ///
    /// Every select line is released first. For each active position the segments are
    /// darkened, the glyph's segments lit, the position selected and held for the dwell,
    /// then released before the next position. The last position stays selected after the
    /// pass. A frame with no active position writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin cannot be driven.
    pub fn refresh(&mut self, frame: &Frame<CELL_COUNT>) -> Result<()> {
        #[cfg(feature = "display-trace")]
        info!("refresh: {:?}", frame);
        if frame.active_cells().next().is_none() {
            return Ok(());
        }

        let polarity = self.config.polarity;
        self.cell_pins.set_all(polarity.cell_off())?;
        let mut previous = None;
        for (index, segments) in frame.active_cells() {
            if let Some(previous_index) = previous {
                self.cell_pins.set_state_at_index(previous_index, polarity.cell_off())?;
            }
            self.show_glyph(segments)?;
            self.cell_pins.set_state_at_index(index, polarity.cell_on())?;
            // A lone digit keeps its glyph without multiplexing.
            if CELL_COUNT > 1 {
                self.delay.delay_us(self.config.dwell_us());
            }
            previous = Some(index);
        }
        Ok(())
    }

    fn frame_for(&self, value: i32) -> Option<Frame<CELL_COUNT>> {
        match DisplayValue::from_code(value)? {
            DisplayValue::Number(number) if number <= Self::MAX_VALUE => {
                Some(Frame::from_number(number))
            }
            DisplayValue::Status(word)
                if self.config.status_words && CELL_COUNT == MAX_CELL_COUNT =>
            {
                Some(Frame::from_status_word(word))
            }
            DisplayValue::Number(_) | DisplayValue::Status(_) => None,
        }
    }

    /// All segments dark, then exactly `segments` lit.
    fn show_glyph(&mut self, segments: Segments) -> Result<()> {
        let polarity = self.config.polarity;
        self.segment_pins.set_all(polarity.segment_off())?;
        for segment in segments.iter() {
            self.segment_pins
                .set_state_at_index(segment as usize, polarity.segment_on())?;
        }
        Ok(())
    }
}

impl<S, C, D> Led4<S, C, D>
where
    S: OutputPin,
    C: OutputPin,
    D: DelayNs,
{
    /// A four-digit display from named pins.
    #[must_use]
    pub fn new_led4(
        digit_pins: DigitPins<C>,
        segment_pins: SegmentPins<S>,
        delay: D,
        config: Config,
    ) -> Self {
        Self::new(
            digit_pins.into_output_array(),
            segment_pins.into_output_array(),
            delay,
            config,
        )
    }
}

impl<S, D> Led1<S, D>
where
    S: OutputPin,
    D: DelayNs,
{
    /// A single digit whose common line is wired permanently on. Shows 0-9 only.
    #[must_use]
    pub fn new_single(segment_pins: SegmentPins<S>, delay: D, config: Config) -> Self {
        Self::new(
            OutputArray::new([AlwaysSelected]),
            segment_pins.into_output_array(),
            delay,
            config,
        )
    }
}
