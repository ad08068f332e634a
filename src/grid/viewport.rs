//! Viewport windowing
//!
//! Works out which slice of a long item sequence has to be materialized for
//! the current scroll position. Items have a fixed estimated size, so the
//! range is plain index arithmetic on the scroll offset and never scans the
//! sequence.

use std::ops::Range;

/// Estimated height of one row in the table layout (pixels)
pub const ROW_HEIGHT: f64 = 50.0;
/// Estimated height of one card in the compact layout (pixels)
pub const CARD_HEIGHT: f64 = 240.0;
/// Height of the scroll container (pixels)
pub const VIEWPORT_HEIGHT: f64 = 600.0;
/// Items materialized beyond each visible edge
pub const DEFAULT_OVERSCAN: usize = 1;

/// Scroll state plus sizing for one virtualized list
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualWindow {
    /// Estimated size of every item
    item_size: f64,
    /// Height of the visible container
    viewport_height: f64,
    /// Extra items rendered above and below the visible range
    overscan: usize,
    /// Current scroll offset from the top of the list
    scroll_offset: f64,
}

/// One materialized item and where to place it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VirtualItem {
    pub index: usize,
    pub start: f64,
    pub size: f64,
}

/// Range of items to materialize
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRange {
    /// First materialized index (overscan included)
    pub start: usize,
    /// One past the last materialized index (overscan included)
    pub end: usize,
    /// Items that intersect the visible pixel window
    pub visible: Range<usize>,
    /// Scrollable extent of the whole sequence
    pub total_size: f64,
    item_size: f64,
}

impl WindowRange {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Materialized items with their offsets
    pub fn items(&self) -> impl Iterator<Item = VirtualItem> + '_ {
        self.range().map(move |index| VirtualItem {
            index,
            start: index as f64 * self.item_size,
            size: self.item_size,
        })
    }
}

/// Result of windowing a sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Window {
    /// Nothing to show; the host renders its empty state
    NoData,
    Items(WindowRange),
}

impl Window {
    pub fn range(&self) -> Range<usize> {
        match self {
            Window::NoData => 0..0,
            Window::Items(w) => w.range(),
        }
    }

    pub fn total_size(&self) -> f64 {
        match self {
            Window::NoData => 0.0,
            Window::Items(w) => w.total_size,
        }
    }

    pub fn has_data(&self) -> bool {
        matches!(self, Window::Items(_))
    }

    pub fn as_items(&self) -> Option<&WindowRange> {
        match self {
            Window::NoData => None,
            Window::Items(w) => Some(w),
        }
    }
}

impl VirtualWindow {
    /// Create a window; non-positive item sizes are raised to one pixel
    pub fn new(item_size: f64, viewport_height: f64, overscan: usize) -> Self {
        Self {
            item_size: sanitize(item_size).max(1.0),
            viewport_height: sanitize(viewport_height),
            overscan,
            scroll_offset: 0.0,
        }
    }

    /// Window for the table layout
    pub fn rows() -> Self {
        Self::new(ROW_HEIGHT, VIEWPORT_HEIGHT, DEFAULT_OVERSCAN)
    }

    /// Window for the compact card layout
    pub fn cards() -> Self {
        Self::new(CARD_HEIGHT, VIEWPORT_HEIGHT, DEFAULT_OVERSCAN)
    }

    pub fn item_size(&self) -> f64 {
        self.item_size
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.viewport_height = sanitize(height);
    }

    /// Record a scroll position reported by the host
    ///
    /// Stored as given (negative and non-finite values become 0); clamping to
    /// the content happens when the window is computed, since the item count
    /// can change between scroll events.
    pub fn set_scroll_offset(&mut self, offset: f64) {
        self.scroll_offset = sanitize(offset);
    }

    /// Scroll by a delta, clamped to the content of `count` items
    pub fn scroll_by(&mut self, delta: f64, count: usize) {
        let target = self.scroll_offset + if delta.is_finite() { delta } else { 0.0 };
        self.scroll_offset = target.clamp(0.0, self.max_scroll_offset(count));
    }

    pub fn reset_scroll(&mut self) {
        self.scroll_offset = 0.0;
    }

    /// Total scrollable extent for `count` items
    pub fn total_size(&self, count: usize) -> f64 {
        count as f64 * self.item_size
    }

    /// Largest offset at which the container is still filled
    pub fn max_scroll_offset(&self, count: usize) -> f64 {
        (self.total_size(count) - self.viewport_height).max(0.0)
    }

    /// Compute the range to materialize for `count` items
    pub fn window(&self, count: usize) -> Window {
        if count == 0 {
            return Window::NoData;
        }

        let offset = self.scroll_offset.min(self.max_scroll_offset(count));
        let first = ((offset / self.item_size).floor() as usize).min(count);
        let last = (((offset + self.viewport_height) / self.item_size).ceil() as usize).min(count);
        let visible = first..last.max(first);

        Window::Items(WindowRange {
            start: visible.start.saturating_sub(self.overscan),
            end: visible.end.saturating_add(self.overscan).min(count),
            visible,
            total_size: self.total_size(count),
            item_size: self.item_size,
        })
    }
}

impl Default for VirtualWindow {
    fn default() -> Self {
        Self::rows()
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(window: &Window) -> &WindowRange {
        window.as_items().expect("window should have items")
    }

    #[test]
    fn test_window_at_offset() {
        let mut vw = VirtualWindow::new(50.0, 600.0, 1);
        vw.set_scroll_offset(2000.0);

        let window = vw.window(10_000);
        let range = items(&window);

        assert_eq!(range.visible, 40..52);
        assert_eq!(range.range(), 39..53);
        assert_eq!(range.total_size, 500_000.0);
    }

    #[test]
    fn test_window_at_top_clamps_low_edge() {
        let vw = VirtualWindow::new(50.0, 600.0, 3);
        let window = vw.window(100);

        assert_eq!(items(&window).visible, 0..12);
        assert_eq!(window.range(), 0..15);
    }

    #[test]
    fn test_window_clamps_past_end() {
        let mut vw = VirtualWindow::new(50.0, 600.0, 1);
        vw.set_scroll_offset(1_000_000.0);

        let window = vw.window(100);
        let range = items(&window);

        assert_eq!(range.visible, 88..100);
        assert_eq!(range.range(), 87..100);
    }

    #[test]
    fn test_short_list_fits_entirely() {
        let mut vw = VirtualWindow::rows();
        vw.set_scroll_offset(300.0);

        let window = vw.window(3);
        assert_eq!(window.range(), 0..3);
        assert_eq!(window.total_size(), 150.0);
    }

    #[test]
    fn test_empty_sequence_is_no_data() {
        let vw = VirtualWindow::rows();
        let window = vw.window(0);

        assert_eq!(window, Window::NoData);
        assert!(!window.has_data());
        assert_eq!(window.range(), 0..0);
    }

    #[test]
    fn test_card_window_uses_card_height() {
        let mut vw = VirtualWindow::cards();
        vw.set_scroll_offset(480.0);

        let window = vw.window(1000);
        let range = items(&window);

        assert_eq!(range.visible, 2..5);
        assert_eq!(range.total_size, 240_000.0);
    }

    #[test]
    fn test_items_carry_offsets() {
        let mut vw = VirtualWindow::new(50.0, 100.0, 0);
        vw.set_scroll_offset(100.0);

        let window = vw.window(10);
        let placed: Vec<VirtualItem> = items(&window).items().collect();

        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].index, 2);
        assert_eq!(placed[0].start, 100.0);
        assert_eq!(placed[1].start, 150.0);
        assert_eq!(placed[1].size, 50.0);
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut vw = VirtualWindow::new(50.0, 600.0, 1);
        vw.scroll_by(-100.0, 100);
        assert_eq!(vw.scroll_offset(), 0.0);

        vw.scroll_by(10_000.0, 100);
        assert_eq!(vw.scroll_offset(), 4400.0);
    }

    #[test]
    fn test_invalid_inputs_are_sanitized() {
        let mut vw = VirtualWindow::new(0.0, f64::NAN, 1);
        assert_eq!(vw.item_size(), 1.0);
        assert_eq!(vw.viewport_height(), 0.0);

        vw.set_scroll_offset(-5.0);
        assert_eq!(vw.scroll_offset(), 0.0);
        vw.set_scroll_offset(f64::INFINITY);
        assert_eq!(vw.scroll_offset(), 0.0);
    }

    #[test]
    fn test_bounds_hold_for_many_offsets() {
        let mut vw = VirtualWindow::new(37.0, 555.0, 2);
        for count in [1usize, 2, 15, 999] {
            for step in 0..50 {
                vw.set_scroll_offset(step as f64 * 123.0);
                let range = vw.window(count).range();
                assert!(range.start <= range.end);
                assert!(range.end <= count);
                assert!(!range.is_empty());
            }
        }
    }
}
