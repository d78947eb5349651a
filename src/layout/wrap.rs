//! Greedy word wrapping against font metrics.

use crate::model::StandardFont;
use crate::writer::fold_win_ansi;

/// Split text into lines no wider than `max_width` points.
///
/// Text is folded onto WinAnsi first, so the returned lines are exactly what
/// gets drawn and their measured widths match the rendered glyphs.
/// Every `\n` is a hard break and blank lines are kept as empty strings.
/// Leading indentation of a source line is kept on its first wrapped line;
/// runs of whitespace inside a line collapse to a single space. A word wider
/// than `max_width` on its own is broken between characters.
pub fn wrap_text(text: &str, font: StandardFont, size: f32, max_width: f32) -> Vec<String> {
    let text = fold_win_ansi(text);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim_end_matches('\r');
        if paragraph.trim().is_empty() {
            lines.push(String::new());
            continue;
        }
        wrap_paragraph(paragraph, font, size, max_width, &mut lines);
    }

    lines
}

fn wrap_paragraph(
    paragraph: &str,
    font: StandardFont,
    size: f32,
    max_width: f32,
    lines: &mut Vec<String>,
) {
    let indent: String = paragraph
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(|_| ' ')
        .collect();

    let space = font.measure(" ", size);
    let mut current = indent.clone();
    let mut current_width = font.measure(&indent, size);
    let mut has_word = false;

    for word in paragraph.split_whitespace() {
        let word_width = font.measure(word, size);

        if has_word && current_width + space + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space + word_width;
            continue;
        }

        if !has_word && current_width + word_width <= max_width {
            current.push_str(word);
            current_width += word_width;
            has_word = true;
            continue;
        }

        if has_word {
            lines.push(std::mem::take(&mut current));
        } else {
            // Indentation that does not fit next to the first word is dropped.
            current.clear();
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            let (full, rest, rest_width) = break_word(word, font, size, max_width);
            lines.extend(full);
            current = rest;
            current_width = rest_width;
        }
        has_word = true;
    }

    lines.push(current);
}

/// Break a word into chunks that each fit. Returns the full lines and the
/// trailing partial chunk with its width.
fn break_word(
    word: &str,
    font: StandardFont,
    size: f32,
    max_width: f32,
) -> (Vec<String>, String, f32) {
    let mut full = Vec::new();
    let mut chunk = String::new();
    let mut width = 0.0;

    for c in word.chars() {
        let w = font.char_width(c) as f32 * size / 1000.0;
        if !chunk.is_empty() && width + w > max_width {
            full.push(std::mem::take(&mut chunk));
            width = 0.0;
        }
        chunk.push(c);
        width += w;
    }

    (full, chunk, width)
}
