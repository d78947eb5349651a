//! Glyph metrics for the standard PDF fonts.
//!
//! Widths come from the Adobe AFM files of the base-14 fonts, in 1/1000 em,
//! indexed by WinAnsiEncoding byte: one table for printable ASCII
//! (0x20..=0x7E) and one for 0x80..=0xFF. Helvetica-Oblique shares the
//! upright Helvetica widths. Codes WinAnsi leaves undefined are 0.

use crate::model::StandardFont;
use crate::writer::win_ansi_byte;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    278, 278, 584, 584, 584, 556, 1015,
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    278, 278, 278, 469, 556, 333,
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

#[rustfmt::skip]
const TIMES_ROMAN: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
    278, 278, 564, 564, 564, 444, 921,
    722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
    722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
    333, 278, 333, 469, 500, 333,
    444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
    500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
    480, 200, 480, 541,
];

#[rustfmt::skip]
const HELVETICA_HIGH: [u16; 128] = [
    556,   0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000,   0, 611,   0,
      0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944,   0, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_HIGH: [u16; 128] = [
    556,   0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000,   0, 611,   0,
      0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944,   0, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

#[rustfmt::skip]
const TIMES_ROMAN_HIGH: [u16; 128] = [
    500,   0, 333, 500, 444, 1000, 500, 500, 333, 1000, 556, 333, 889,   0, 611,   0,
      0, 333, 333, 444, 444, 350, 500, 1000, 333, 980, 389, 333, 722,   0, 444, 722,
    250, 333, 500, 500, 500, 500, 200, 500, 333, 760, 276, 500, 564, 333, 760, 333,
    400, 564, 300, 300, 333, 500, 453, 250, 333, 300, 310, 500, 750, 750, 750, 444,
    722, 722, 722, 722, 722, 722, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
    722, 722, 722, 722, 722, 722, 722, 564, 722, 722, 722, 722, 722, 722, 556, 500,
    444, 444, 444, 444, 444, 444, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
    500, 500, 500, 500, 500, 500, 500, 564, 500, 500, 500, 500, 500, 500, 500, 500,
];

impl StandardFont {
    fn widths(self) -> (&'static [u16; 95], &'static [u16; 128]) {
        match self {
            StandardFont::HelveticaBold => (&HELVETICA_BOLD, &HELVETICA_BOLD_HIGH),
            StandardFont::HelveticaOblique => (&HELVETICA, &HELVETICA_HIGH),
            StandardFont::TimesRoman => (&TIMES_ROMAN, &TIMES_ROMAN_HIGH),
        }
    }

    /// Advance width of a WinAnsi byte in 1/1000 em.
    pub fn byte_width(self, byte: u8) -> u16 {
        let (ascii, high) = self.widths();
        match byte {
            0x20..=0x7E => ascii[usize::from(byte - 0x20)],
            0x80..=0xFF => high[usize::from(byte - 0x80)],
            _ => 0,
        }
    }

    /// Advance width of a character in 1/1000 em, as drawn.
    ///
    /// Characters outside WinAnsiEncoding are drawn as `?` and measured as
    /// such. Text should be folded with
    /// [`fold_win_ansi`](crate::writer::fold_win_ansi) first so that
    /// compatibility characters are measured by their expansion.
    pub fn char_width(self, c: char) -> u16 {
        self.byte_width(win_ansi_byte(c).unwrap_or(b'?'))
    }

    /// Width of a string in points at the given size.
    pub fn measure(self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| u32::from(self.char_width(c))).sum();
        units as f32 * size / 1000.0
    }
}
