//! The glyph plan for one multiplexed pass.

use core::ops::Index;

use crate::display_value::StatusWord;
use crate::segments::Segments;

/// What each digit position shows during one pass, leftmost position first.
///
/// `None` marks a position that is not selected at all (a suppressed leading zero). That
/// differs from `Some(Segments::EMPTY)`, which selects the position with every segment dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame<const CELL_COUNT: usize>([Option<Segments>; CELL_COUNT]);

impl<const CELL_COUNT: usize> Frame<CELL_COUNT> {
    #[must_use]
    pub const fn new(cells: [Option<Segments>; CELL_COUNT]) -> Self {
        Self(cells)
    }

    /// A frame with no active position. Refreshing it writes nothing.
    #[must_use]
    pub const fn blank() -> Self {
        Self([None; CELL_COUNT])
    }

    /// A dash in every position, shown for text the display cannot spell.
    #[must_use]
    pub const fn dashes() -> Self {
        Self([Some(Segments::DASH); CELL_COUNT])
    }

    /// Lays out `number` right-aligned with leading zeros suppressed.
    ///
    /// A position is active when its own digit or any digit to its left is nonzero; the
    /// rightmost position is always active, so zero shows as a single `0`. Digits that do
    /// not fit are dropped from the left.
    #[must_use]
    pub fn from_number(number: u16) -> Self {
        let mut frame = Self::blank();
        let mut higher_nonzero = false;
        // Cells run from the most significant place, so suppression can look left.
        for (place, cell) in (0..CELL_COUNT).rev().zip(frame.0.iter_mut()) {
            let digit = digit_at(number, place);
            higher_nonzero |= digit > 0;
            if higher_nonzero || place == 0 {
                *cell = Segments::from_digit(digit);
            }
        }
        frame
    }

    /// One letter per position, left to right.
    #[must_use]
    pub fn from_status_word(word: StatusWord) -> Self {
        Self::from_text(word.text())
    }

    /// Spells `text` if it is a status word of exactly `CELL_COUNT` letters; anything else
    /// becomes [`Frame::dashes`].
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        if StatusWord::from_text(text).is_none() || text.chars().count() != CELL_COUNT {
            return Self::dashes();
        }
        let mut frame = Self::blank();
        for (cell, letter) in frame.0.iter_mut().zip(text.chars()) {
            *cell = Some(Segments::from_letter(letter));
        }
        frame
    }

    /// Active positions with their glyphs, left to right.
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, Segments)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.map(|segments| (index, segments)))
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Option<Segments>> {
        self.0.iter()
    }
}

impl<const CELL_COUNT: usize> Default for Frame<CELL_COUNT> {
    fn default() -> Self {
        Self::blank()
    }
}

impl<const CELL_COUNT: usize> Index<usize> for Frame<CELL_COUNT> {
    type Output = Option<Segments>;

    #[expect(clippy::indexing_slicing, reason = "Caller's responsibility")]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// The decimal digit of `number` at `place` (0 = ones).
#[expect(
    clippy::integer_division_remainder_used,
    clippy::arithmetic_side_effects,
    reason = "Divisor is a nonzero power of ten and the result is below 10"
)]
fn digit_at(number: u16, place: usize) -> u8 {
    let Some(divisor) = u32::try_from(place)
        .ok()
        .and_then(|exponent| 10_u32.checked_pow(exponent))
    else {
        return 0;
    };
    u8::try_from(u32::from(number) / divisor % 10).unwrap_or(0)
}
