//! Garage door monitor on a four-digit common-anode display.
//!
//! Shows how many seconds the door has been open, "StoP" while the emergency stop is held,
//! and "FEIL" once the door has been open longer than [`OPEN_LIMIT`]. The main loop calls
//! `update_display` continuously; each call is one multiplexed pass.
//!
//! Wiring: digit select lines on GPIO 0-3 (thousands to ones), segments on GPIO 4-11 in
//! top, upper-right, lower-right, decimal point, bottom, lower-left, upper-left, center
//! order. Door switch on GPIO 14 and emergency stop on GPIO 15, both to ground.
#![no_std]
#![no_main]

use core::convert::Infallible;

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::{Delay, Duration, Instant};
use panic_probe as _;
use segment_kit::{Config, DigitPins, ERROR_CODE, Led4, STOP_CODE, SegmentPins, SevenSegment};

/// After this long open, the display switches from the count to "FEIL".
const OPEN_LIMIT: Duration = Duration::from_secs(600);

#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
enum DoorState {
    Closed,
    Open(Instant),
    Stopped,
    TooLong,
}

impl DoorState {
    /// The value to hand to the display.
    fn code(self, now: Instant) -> i32 {
        match self {
            Self::Closed => 0,
            Self::Open(since) => {
                i32::try_from(now.duration_since(since).as_secs()).unwrap_or(ERROR_CODE)
            }
            Self::Stopped => STOP_CODE,
            Self::TooLong => ERROR_CODE,
        }
    }
}

#[embassy_executor::main]
pub async fn main(_spawner: Spawner) -> ! {
    let err = run().unwrap_err();
    core::panic!("{err}");
}

fn run() -> segment_kit::Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let digit_pins = DigitPins {
        thousands: Output::new(p.PIN_0, Level::Low),
        hundreds: Output::new(p.PIN_1, Level::Low),
        tens: Output::new(p.PIN_2, Level::Low),
        ones: Output::new(p.PIN_3, Level::Low),
    };
    let segment_pins = SegmentPins {
        top: Output::new(p.PIN_4, Level::High),
        upper_right: Output::new(p.PIN_5, Level::High),
        lower_right: Output::new(p.PIN_6, Level::High),
        decimal_point: Output::new(p.PIN_7, Level::High),
        bottom: Output::new(p.PIN_8, Level::High),
        lower_left: Output::new(p.PIN_9, Level::High),
        upper_left: Output::new(p.PIN_10, Level::High),
        center: Output::new(p.PIN_11, Level::High),
    };
    // Low while the door holds the switch closed.
    let door_switch = Input::new(p.PIN_14, Pull::Up);
    let emergency_stop = Input::new(p.PIN_15, Pull::Up);

    let mut display: Led4<_, _, _> =
        SevenSegment::new_led4(digit_pins, segment_pins, Delay, Config::default());
    display.begin()?;

    let mut state = DoorState::Closed;
    loop {
        let now = Instant::now();
        let next = match state {
            _ if emergency_stop.is_low() => DoorState::Stopped,
            _ if door_switch.is_low() => DoorState::Closed,
            DoorState::Open(since) if now.duration_since(since) > OPEN_LIMIT => {
                DoorState::TooLong
            }
            DoorState::Open(_) | DoorState::TooLong => state,
            DoorState::Closed | DoorState::Stopped => DoorState::Open(now),
        };
        if next != state {
            info!("door: {:?} -> {:?}", state, next);
            state = next;
        }
        display.update_display(state.code(now))?;
    }
}
