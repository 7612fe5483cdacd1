//! Segment identifiers and the glyph tables for digits and status letters.
//!
//! Segment layout:
//! ```text
//!     top
//!   ┌─────┐
//!   │     │ upper-right
//!   │     │
//!   ├─────┤ center
//!   │     │
//!   │     │ lower-right
//!   └─────┘ . decimal point
//!    bottom
//! ```
//! (upper-left and lower-left mirror the right-hand bars.)

use core::ops::{BitOr, BitOrAssign};

/// One physical segment line of a seven-segment digit.
///
/// The discriminant is the segment's index in a segment [`OutputArray`](crate::OutputArray)
/// and its bit in [`Segments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Segment {
    Top = 0,
    UpperRight = 1,
    LowerRight = 2,
    DecimalPoint = 3,
    Bottom = 4,
    LowerLeft = 5,
    UpperLeft = 6,
    Center = 7,
}

impl Segment {
    /// Every segment, in pin order.
    pub const ALL: [Self; 8] = [
        Self::Top,
        Self::UpperRight,
        Self::LowerRight,
        Self::DecimalPoint,
        Self::Bottom,
        Self::LowerLeft,
        Self::UpperLeft,
        Self::Center,
    ];

    /// The bit of this segment inside a [`Segments`] set.
    #[must_use]
    pub const fn bit(self) -> u8 {
        1_u8.wrapping_shl(self as u32)
    }
}

/// A set of lit segments for one digit position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments(u8);

/// Shorthand used to keep the glyph tables readable.
const fn set(segments: &[Segment]) -> Segments {
    let mut bits = 0;
    let mut index = 0;
    while index < segments.len() {
        bits |= segments[index].bit();
        index += 1;
    }
    Segments(bits)
}

use Segment::{Bottom, Center, LowerLeft, LowerRight, Top, UpperLeft, UpperRight};

impl Segments {
    /// No segment lit.
    pub const EMPTY: Self = Self(0);

    /// The fallback glyph: a single center bar.
    pub const DASH: Self = set(&[Center]);

    /// Glyphs for the decimal digits 0-9. The decimal point is never part of a digit.
    pub const DIGITS: [Self; 10] = [
        set(&[Top, UpperRight, LowerRight, Bottom, LowerLeft, UpperLeft]), // 0
        set(&[UpperRight, LowerRight]),                                    // 1
        set(&[Top, UpperRight, Center, LowerLeft, Bottom]),                // 2
        set(&[Top, UpperRight, Center, LowerRight, Bottom]),               // 3
        set(&[UpperLeft, Center, UpperRight, LowerRight]),                 // 4
        set(&[Top, UpperLeft, Center, LowerRight, Bottom]),                // 5
        set(&[UpperLeft, LowerLeft, Bottom, LowerRight, Center]),          // 6
        set(&[Top, UpperRight, LowerRight]),                               // 7
        set(&[Top, UpperRight, LowerRight, Bottom, LowerLeft, UpperLeft, Center]), // 8
        set(&[Top, UpperRight, Center, UpperLeft, LowerRight]),            // 9
    ];

    /// Glyphs for the letters the status words need.
    pub const LETTERS: [(char, Self); 8] = [
        ('S', set(&[Top, UpperLeft, Center, LowerRight, Bottom])),
        ('t', set(&[UpperLeft, Center, LowerLeft, Bottom])),
        ('o', set(&[LowerLeft, Center, LowerRight, Bottom])),
        ('P', set(&[Top, UpperLeft, Center, LowerLeft, UpperRight])),
        ('F', set(&[Top, UpperLeft, Center, LowerLeft])),
        ('E', set(&[Top, UpperLeft, Center, LowerLeft, Bottom])),
        ('I', set(&[UpperLeft, LowerLeft])),
        ('L', set(&[UpperLeft, LowerLeft, Bottom])),
    ];

    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The glyph of a decimal digit, or `None` above 9.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        if digit < 10 {
            Some(Self::DIGITS[digit as usize])
        } else {
            None
        }
    }

    /// The glyph of a status letter. Letters without a glyph render as [`Segments::DASH`].
    ///
    /// Matching is exact: `'s'` is not `'S'`.
    #[must_use]
    pub fn from_letter(letter: char) -> Self {
        Self::LETTERS
            .iter()
            .find(|(candidate, _)| *candidate == letter)
            .map_or(Self::DASH, |&(_, segments)| segments)
    }

    #[must_use]
    pub const fn contains(self, segment: Segment) -> bool {
        self.0 & segment.bit() != 0
    }

    #[must_use]
    pub const fn with(self, segment: Segment) -> Self {
        Self(self.0 | segment.bit())
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The lit segments, in pin order.
    pub fn iter(self) -> impl Iterator<Item = Segment> {
        Segment::ALL
            .into_iter()
            .filter(move |&segment| self.contains(segment))
    }
}

impl From<Segment> for Segments {
    fn from(segment: Segment) -> Self {
        Self(segment.bit())
    }
}

impl BitOr for Segments {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Segment> for Segments {
    type Output = Self;

    fn bitor(self, rhs: Segment) -> Self::Output {
        self.with(rhs)
    }
}

impl BitOrAssign<Segment> for Segments {
    fn bitor_assign(&mut self, rhs: Segment) {
        *self = self.with(rhs);
    }
}

#[cfg(all(test, not(target_os = "none")))]
mod tests {
    use super::*;

    #[test]
    fn six_uses_the_five_lower_and_left_segments() {
        let six = Segments::from_digit(6).expect("6 is a digit");
        let expected = Segments::EMPTY | UpperLeft | LowerLeft | Bottom | LowerRight | Center;
        assert_eq!(six, expected);
        assert!(!six.contains(Top));
        assert!(!six.contains(UpperRight));
    }

    #[test]
    fn one_is_the_right_hand_bars() {
        let one = Segments::from_digit(1).expect("1 is a digit");
        assert_eq!(one.iter().collect::<heapless::Vec<_, 8>>(), [UpperRight, LowerRight]);
    }

    #[test]
    fn eight_lights_every_bar_but_not_the_decimal_point() {
        let eight = Segments::from_digit(8).expect("8 is a digit");
        assert_eq!(eight.iter().count(), 7);
        assert!(!eight.contains(Segment::DecimalPoint));
    }

    #[test]
    fn no_digit_uses_the_decimal_point() {
        for digit in Segments::DIGITS {
            assert!(!digit.contains(Segment::DecimalPoint));
        }
    }

    #[test]
    fn digits_above_nine_have_no_glyph() {
        assert_eq!(Segments::from_digit(10), None);
        assert_eq!(Segments::from_digit(u8::MAX), None);
    }

    #[test]
    fn unknown_letters_fall_back_to_dash() {
        assert_eq!(Segments::from_letter('x'), Segments::DASH);
        assert_eq!(Segments::from_letter('s'), Segments::DASH);
        assert_eq!(Segments::DASH.iter().count(), 1);
        assert!(Segments::DASH.contains(Center));
    }

    #[test]
    fn segment_bits_follow_pin_order() {
        for (index, segment) in Segment::ALL.into_iter().enumerate() {
            assert_eq!(segment as usize, index);
            assert_eq!(Segments::from(segment).bits(), 1 << index);
        }
    }
}
