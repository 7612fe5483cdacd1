//! Host-level tests for a display shared behind a blocking mutex.

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use segment_kit::virtual_pins::VirtualBoard;
use segment_kit::{Config, Error, Polarity, SharedSevenSegment};

#[test]
fn shared_display_forwards_operations() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let shared = SharedSevenSegment::new(NoopRawMutex::new(), board.led4(Config::default()));

    shared.begin()?;
    shared.update_display(7)?;
    assert_eq!(board.snapshots().len(), 1);

    shared.write_text("StoP")?;
    assert_eq!(board.snapshots().len(), 5);

    shared.clear_display()?;
    assert!(
        board
            .current()
            .selected_cells(Polarity::CommonAnode)
            .is_empty()
    );
    Ok(())
}

#[test]
fn nested_use_is_refused() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let shared = SharedSevenSegment::new(NoopRawMutex::new(), board.led4(Config::default()));

    let nested = shared.with(|display| {
        display.update_display(1)?;
        Ok(shared.update_display(2))
    })?;

    assert_eq!(nested, Err(Error::DisplayBusy));
    assert_eq!(board.snapshots().len(), 1, "only the outer pass ran");
    Ok(())
}

#[test]
fn with_returns_the_operation_result() -> Result<(), Error> {
    let board = VirtualBoard::new();
    let shared = SharedSevenSegment::new(NoopRawMutex::new(), board.led4(Config::default()));

    let status_words = shared.with(|display| Ok(display.config().status_words))?;

    assert!(status_words);
    Ok(())
}
