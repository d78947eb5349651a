//! WinAnsiEncoding for text drawn with the standard fonts.

use unicode_normalization::UnicodeNormalization;

/// Character drawn in place of anything that cannot be encoded.
const REPLACEMENT: char = '?';

/// Fold text onto the characters WinAnsiEncoding can draw.
///
/// Text is NFC-composed first so decomposed accents map onto Latin-1.
/// Characters still outside the encoding are NFKC-normalized, which folds
/// ligatures, full-width forms and similar compatibility characters. Anything
/// still unencodable becomes `?`. Tabs become spaces; line breaks are kept.
///
/// Every character of the result maps to exactly one glyph, so measuring the
/// folded text gives the width that is actually drawn.
pub fn fold_win_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.nfc() {
        if c == '\n' || c == '\r' {
            out.push(c);
            continue;
        }
        if win_ansi_byte(c).is_some() {
            out.push(if c == '\t' { ' ' } else { c });
            continue;
        }

        let mut emitted = false;
        for n in std::iter::once(c).nfkc() {
            if win_ansi_byte(n).is_some() {
                out.push(if n == '\t' { ' ' } else { n });
                emitted = true;
            } else if !is_combining_mark(n) {
                out.push(REPLACEMENT);
                emitted = true;
            }
        }
        // Stray combining marks with no base character are dropped.
        if !emitted && !is_combining_mark(c) {
            out.push(REPLACEMENT);
        }
    }

    out
}

/// Encode text as WinAnsi (Windows-1252) bytes, folding it first with
/// [`fold_win_ansi`]. Line breaks are dropped.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    fold_win_ansi(text).chars().filter_map(win_ansi_byte).collect()
}

/// Windows-1252 byte of a character, if the encoding has one.
pub(crate) fn win_ansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7E => Some(code as u8),
        0x09 => Some(b' '),
        0xA0..=0xFF => Some(code as u8),
        _ => WIN_ANSI_HIGH
            .iter()
            .find(|(ch, _)| *ch == c)
            .map(|(_, byte)| *byte),
    }
}

fn is_combining_mark(c: char) -> bool {
    matches!(c as u32, 0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x20D0..=0x20FF)
}

/// Characters mapped into the 0x80..=0x9F block of Windows-1252.
const WIN_ANSI_HIGH: [(char, u8); 27] = [
    ('\u{20AC}', 0x80),
    ('\u{201A}', 0x82),
    ('\u{0192}', 0x83),
    ('\u{201E}', 0x84),
    ('\u{2026}', 0x85),
    ('\u{2020}', 0x86),
    ('\u{2021}', 0x87),
    ('\u{02C6}', 0x88),
    ('\u{2030}', 0x89),
    ('\u{0160}', 0x8A),
    ('\u{2039}', 0x8B),
    ('\u{0152}', 0x8C),
    ('\u{017D}', 0x8E),
    ('\u{2018}', 0x91),
    ('\u{2019}', 0x92),
    ('\u{201C}', 0x93),
    ('\u{201D}', 0x94),
    ('\u{2022}', 0x95),
    ('\u{2013}', 0x96),
    ('\u{2014}', 0x97),
    ('\u{02DC}', 0x98),
    ('\u{2122}', 0x99),
    ('\u{0161}', 0x9A),
    ('\u{203A}', 0x9B),
    ('\u{0153}', 0x9C),
    ('\u{017E}', 0x9E),
    ('\u{0178}', 0x9F),
];
