use embedded_hal::digital::{OutputPin, PinState};

use crate::Result;
use crate::error::Error::{self, IndexOutOfBounds};

/// Array of GPIO output pins for LED displays.
///
/// Works with any [`embedded_hal`] output, e.g. `embassy_rp::gpio::Output` on hardware or
/// [`VirtualPin`](crate::virtual_pins::VirtualPin) on the host.
pub struct OutputArray<P, const N: usize>([P; N]);

impl<P: OutputPin, const N: usize> OutputArray<P, N> {
    pub const fn new(outputs: [P; N]) -> Self {
        Self(outputs)
    }

    #[inline]
    pub(crate) fn set_state_at_index(&mut self, index: usize, state: PinState) -> Result<()> {
        self.0
            .get_mut(index)
            .ok_or(IndexOutOfBounds)?
            .set_state(state)
            .map_err(|err| Error::pin(&err))
    }

    #[inline]
    pub(crate) fn set_all(&mut self, state: PinState) -> Result<()> {
        for output in &mut self.0 {
            output.set_state(state).map_err(|err| Error::pin(&err))?;
        }
        Ok(())
    }
}
