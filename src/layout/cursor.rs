//! Vertical layout cursor with page breaking.

use crate::model::{Element, Page};

/// Tracks the write position while content is appended top to bottom.
///
/// The cursor always has a current page. A fresh page resets the position
/// to the top margin.
#[derive(Debug)]
pub struct LayoutCursor {
    finished: Vec<Page>,
    current: Page,
    y: f32,
    margin: f32,
}

impl LayoutCursor {
    /// Start a layout on page 1 at the top margin.
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            finished: Vec::new(),
            current: Page::new(1, width, height),
            y: margin,
            margin,
        }
    }

    /// Current baseline position.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Move the cursor down.
    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Number of the page being written (1-indexed).
    pub fn page_number(&self) -> u32 {
        self.current.number
    }

    /// Close the current page and continue at the top of a new one.
    pub fn new_page(&mut self) {
        let number = self.current.number + 1;
        let next = Page::new(number, self.current.width, self.current.height);
        self.finished.push(std::mem::replace(&mut self.current, next));
        self.y = self.margin;
        log::debug!("Page break, continuing on page {}", number);
    }

    /// Start a new page if the cursor has moved past `limit`.
    ///
    /// Returns true when a break happened.
    pub fn break_if_past(&mut self, limit: f32) -> bool {
        if self.y > limit {
            self.new_page();
            true
        } else {
            false
        }
    }

    /// Append an element to the current page.
    pub fn push(&mut self, element: Element) {
        self.current.push(element);
    }

    /// Finish the layout and return all pages in order.
    pub fn into_pages(mut self) -> Vec<Page> {
        self.finished.push(self.current);
        self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Rgb;

    fn line(y: f32) -> Element {
        Element::Line {
            x1: 0.0,
            y1: y,
            x2: 10.0,
            y2: y,
            width: 1.0,
            color: Rgb::gray(0),
        }
    }

    #[test]
    fn test_starts_at_margin() {
        let cursor = LayoutCursor::new(612.0, 792.0, 40.0);
        assert_eq!(cursor.y(), 40.0);
        assert_eq!(cursor.page_number(), 1);
        assert_eq!(cursor.into_pages().len(), 1);
    }

    #[test]
    fn test_break_resets_to_margin() {
        let mut cursor = LayoutCursor::new(612.0, 792.0, 40.0);
        cursor.advance(720.0);
        assert!(!cursor.break_if_past(760.0));
        cursor.advance(16.0);
        assert!(cursor.break_if_past(752.0));
        assert_eq!(cursor.y(), 40.0);
        assert_eq!(cursor.page_number(), 2);
    }

    #[test]
    fn test_break_at_exact_limit_does_not_break() {
        let mut cursor = LayoutCursor::new(612.0, 792.0, 40.0);
        cursor.advance(712.0);
        assert!(!cursor.break_if_past(752.0));
    }

    #[test]
    fn test_elements_stay_on_their_page() {
        let mut cursor = LayoutCursor::new(612.0, 792.0, 40.0);
        cursor.push(line(50.0));
        cursor.new_page();
        cursor.push(line(60.0));
        cursor.push(line(70.0));

        let pages = cursor.into_pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[0].elements.len(), 1);
        assert_eq!(pages[1].number, 2);
        assert_eq!(pages[1].elements.len(), 2);
    }
}
