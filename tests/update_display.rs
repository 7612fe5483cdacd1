//! Host-level tests for one multiplexed pass of `update_display`.

use embassy_time::Duration;
use embedded_hal::digital::PinState;
use segment_kit::virtual_pins::{CELL_PINS, SEGMENT_PINS, VirtualBoard};
use segment_kit::{Config, ERROR_CODE, Error, Polarity, STOP_CODE, Segments};

/// The (position, glyph) seen during each dwell of the last pass.
fn shown(board: &VirtualBoard, polarity: Polarity) -> Vec<(usize, Segments)> {
    board
        .snapshots()
        .iter()
        .map(|snapshot| {
            let selected = snapshot.selected_cells(polarity);
            assert_eq!(selected.len(), 1, "exactly one position selected per dwell");
            (selected[0], snapshot.lit_segments(polarity))
        })
        .collect()
}

fn digit(value: u8) -> Segments {
    Segments::from_digit(value).expect("value is a digit")
}

#[test]
fn forty_two_blanks_leading_zeros() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let mut display = board.led4(Config::default());
    display.begin()?;
    board.reset_log();

    display.update_display(42)?;

    assert_eq!(shown(&board, Polarity::CommonAnode), [(2, digit(4)), (3, digit(2))]);
    Ok(())
}

#[test]
fn interior_zeros_are_shown() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let mut display = board.led4(Config::default());

    display.update_display(1005)?;

    assert_eq!(
        shown(&board, Polarity::CommonAnode),
        [(0, digit(1)), (1, digit(0)), (2, digit(0)), (3, digit(5))]
    );
    Ok(())
}

#[test]
fn zero_lights_only_the_ones_position() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let mut display = board.led4(Config::default());

    display.update_display(0)?;

    assert_eq!(shown(&board, Polarity::CommonAnode), [(3, digit(0))]);
    Ok(())
}

#[test]
fn every_supported_number_renders_its_digits() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let mut display = board.led4(Config::default());

    for number in 0..=9999_u16 {
        board.reset_log();
        display.update_display(i32::from(number))?;

        let digits = [number / 1000, number / 100 % 10, number / 10 % 10, number % 10];
        let first_shown = digits.iter().position(|&value| value > 0).unwrap_or(3);
        let expected: Vec<(usize, Segments)> = digits
            .iter()
            .enumerate()
            .skip(first_shown)
            .map(|(position, &value)| {
                (position, digit(u8::try_from(value).expect("digit fits in u8")))
            })
            .collect();
        assert_eq!(shown(&board, Polarity::CommonAnode), expected, "number {number}");
    }
    Ok(())
}

#[test]
fn stop_code_spells_stop() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let mut display = board.led4(Config::default());

    display.update_display(STOP_CODE)?;

    let expected: Vec<(usize, Segments)> = "StoP"
        .chars()
        .map(Segments::from_letter)
        .enumerate()
        .collect();
    assert_eq!(shown(&board, Polarity::CommonAnode), expected);
    Ok(())
}

#[test]
fn error_code_spells_feil() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let mut display = board.led4(Config::default());

    display.update_display(ERROR_CODE)?;

    let expected: Vec<(usize, Segments)> = "FEIL"
        .chars()
        .map(Segments::from_letter)
        .enumerate()
        .collect();
    assert_eq!(shown(&board, Polarity::CommonAnode), expected);
    Ok(())
}

#[test]
fn unsupported_values_write_nothing() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let mut display = board.led4(Config::default());
    display.update_display(1234)?;
    let before = board.current();

    for value in [-3, -100, 10_000, i32::MIN, i32::MAX] {
        board.reset_log();
        display.update_display(value)?;
        assert_eq!(board.write_count(), 0, "value {value}");
        assert!(board.snapshots().is_empty(), "value {value}");
    }
    assert_eq!(board.current(), before);
    Ok(())
}

#[test]
fn numeric_only_display_ignores_status_codes() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let mut display = board.led4(Config::new().with_status_words(false));

    display.update_display(STOP_CODE)?;
    display.update_display(ERROR_CODE)?;

    assert_eq!(board.write_count(), 0);
    display.update_display(7)?;
    assert_eq!(shown(&board, Polarity::CommonAnode), [(3, digit(7))]);
    Ok(())
}

#[test]
fn last_position_stays_selected_after_the_pass() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let mut display = board.led4(Config::default());

    display.update_display(98)?;

    let after = board.current();
    assert_eq!(after.selected_cells(Polarity::CommonAnode).as_slice(), [3]);
    assert_eq!(after.lit_segments(Polarity::CommonAnode), digit(8));
    Ok(())
}

#[test]
fn each_position_dwells_for_the_configured_time() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let config = Config::new().with_dwell(Duration::from_micros(2_500));
    let mut display = board.led4(config);

    display.update_display(321)?;

    let snapshots = board.snapshots();
    assert_eq!(snapshots.len(), 3);
    assert!(snapshots.iter().all(|snapshot| snapshot.delay_us == 2_500));
    Ok(())
}

#[test]
fn default_dwell_is_five_milliseconds() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let mut display = board.led4(Config::default());

    display.update_display(5)?;

    assert_eq!(board.snapshots()[0].delay_us, 5_000);
    Ok(())
}

#[test]
fn common_cathode_inverts_every_level() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let polarity = Polarity::CommonCathode;
    let mut display = board.led4(Config::new().with_polarity(polarity));

    display.update_display(7)?;

    assert_eq!(shown(&board, polarity), [(3, digit(7))]);
    let after = board.current();
    assert_eq!(after.level(CELL_PINS[3]), Some(PinState::Low));
    assert_eq!(after.level(CELL_PINS[0]), Some(PinState::High));
    // Top is lit in a 7, the decimal point never is.
    assert_eq!(after.level(SEGMENT_PINS[0]), Some(PinState::High));
    assert_eq!(after.level(SEGMENT_PINS[3]), Some(PinState::Low));
    Ok(())
}

#[test]
fn common_anode_drives_the_reference_levels() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let mut display = board.led4(Config::default());

    display.update_display(7)?;

    let after = board.current();
    assert_eq!(after.level(CELL_PINS[3]), Some(PinState::High));
    assert_eq!(after.level(CELL_PINS[0]), Some(PinState::Low));
    assert_eq!(after.level(SEGMENT_PINS[0]), Some(PinState::Low));
    assert_eq!(after.level(SEGMENT_PINS[3]), Some(PinState::High));
    Ok(())
}

#[test]
fn single_digit_shows_zero_through_nine_without_dwell() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let mut display = board.single(Config::default());

    for value in 0..=9_u8 {
        board.reset_log();
        display.update_display(i32::from(value))?;
        assert!(board.snapshots().is_empty());
        assert_eq!(
            board.current().lit_segments(Polarity::CommonAnode),
            digit(value)
        );
    }
    Ok(())
}

#[test]
fn single_digit_ignores_larger_values_and_status_codes() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let mut display = board.single(Config::default());

    for value in [10, 42, 9999, STOP_CODE, ERROR_CODE, -3] {
        display.update_display(value)?;
    }

    assert_eq!(board.write_count(), 0);
    Ok(())
}

#[test]
fn failing_pin_is_reported() {
    let board = VirtualBoard::new();
    let mut display = board.led4(Config::default());
    board.fail_pin(SEGMENT_PINS[1]);

    let result = display.update_display(12);

    assert!(matches!(result, Err(Error::Pin(_))));
}
