//! Named pin assignments, the construction parameters of a display.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};

use crate::output_array::OutputArray;
use crate::shared_constants::{MAX_CELL_COUNT, SEGMENT_COUNT};

/// One output per segment line. Pins are not checked for uniqueness.
pub struct SegmentPins<P> {
    pub top: P,
    pub upper_right: P,
    pub lower_right: P,
    pub decimal_point: P,
    pub bottom: P,
    pub lower_left: P,
    pub upper_left: P,
    pub center: P,
}

impl<P: OutputPin> SegmentPins<P> {
    /// The pins in [`Segment`](crate::Segment) order.
    pub fn into_output_array(self) -> OutputArray<P, SEGMENT_COUNT> {
        OutputArray::new([
            self.top,
            self.upper_right,
            self.lower_right,
            self.decimal_point,
            self.bottom,
            self.lower_left,
            self.upper_left,
            self.center,
        ])
    }
}

/// One select line per digit position of a four-digit display.
pub struct DigitPins<P> {
    pub ones: P,
    pub tens: P,
    pub hundreds: P,
    pub thousands: P,
}

impl<P: OutputPin> DigitPins<P> {
    /// The pins left to right: thousands first, ones last.
    pub fn into_output_array(self) -> OutputArray<P, MAX_CELL_COUNT> {
        OutputArray::new([self.thousands, self.hundreds, self.tens, self.ones])
    }
}

/// Stand-in select line for a single digit whose common pin is wired straight to the supply.
///
/// Writes to it do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysSelected;

impl ErrorType for AlwaysSelected {
    type Error = Infallible;
}

impl OutputPin for AlwaysSelected {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
