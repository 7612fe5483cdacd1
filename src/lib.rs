//! Drivers for multiplexed seven-segment LED displays.
//!
//! One [`SevenSegment`] type covers a lone digit and a four-digit panel, wired common anode
//! or common cathode. It shows numbers (leading zeros blank) and the status words "StoP"
//! and "FEIL"; every other value is ignored.
#![cfg_attr(not(test), no_std)]

mod config;
mod display_value;
mod error;
mod frame;
mod output_array;
mod pins;
mod segments;
mod seven_segment;
mod shared;
mod shared_constants;
#[cfg(feature = "host")]
pub mod virtual_pins;

// Re-export commonly used items
pub use config::{Config, Polarity};
pub use display_value::{DisplayValue, ERROR_CODE, STOP_CODE, StatusWord};
pub use error::{Error, Result};
pub use frame::Frame;
pub use output_array::OutputArray;
pub use pins::{AlwaysSelected, DigitPins, SegmentPins};
pub use segments::{Segment, Segments};
pub use seven_segment::{Led1, Led4, SevenSegment};
pub use shared::SharedSevenSegment;
pub use shared_constants::*;
