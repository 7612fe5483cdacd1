use core::convert::Infallible;

use derive_more::derive::{Display, Error};
use embedded_hal::digital::ErrorKind;

/// A specialized `Result` where the error is this crate's `Error` type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Define a unified error type for this crate.
///
/// Invalid display values are not errors: they are ignored. Only the hardware can fail.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // `#[error(not(source))]` tells `derive_more` that `ErrorKind` does not implement
    // `core::error::Error`.
    /// A GPIO output could not be driven to the requested level.
    #[display("Error setting output state: {_0:?}")]
    Pin(#[error(not(source))] ErrorKind),

    /// An output index past the end of an [`OutputArray`](crate::OutputArray).
    #[display("Index out of bounds")]
    IndexOutOfBounds,

    /// A shared display was used again from inside one of its own operations.
    #[display("Display is already in use")]
    DisplayBusy,
}

impl From<Infallible> for Error {
    fn from(infallible: Infallible) -> Self {
        match infallible {}
    }
}

impl Error {
    /// Maps any HAL pin error into [`Error::Pin`].
    pub(crate) fn pin<E: embedded_hal::digital::Error>(err: &E) -> Self {
        Self::Pin(err.kind())
    }
}
