//! Carousel state machine.
//!
//! Tracks the start of the visible slide window and how many slides fit in
//! the viewport. Navigation moves the window one group at a time, wrapping
//! at the ends; layout is recomputed only on explicit triggers, never
//! continuously.

use crate::breakpoints;
use serde::{Deserialize, Serialize};

/// Page measurements taken by the host at event time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Viewport width in CSS pixels.
    pub width: u32,
    /// Rendered width of a single slide in CSS pixels.
    pub slide_width: u32,
}

impl Viewport {
    /// Create a new viewport measurement.
    pub fn new(width: u32, slide_width: u32) -> Self {
        Self { width, slide_width }
    }
}

/// Computed carousel layout for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselLayout {
    /// Slides visible at once at the measured viewport width.
    pub items_per_view: usize,
    /// Horizontal track offset in pixels (zero or negative).
    pub offset_px: i64,
    /// Number of indicator dots, one per slide group.
    pub group_count: usize,
    /// Indicator dot marked active.
    pub active_group: usize,
}

/// State machine for the auto-advancing highlights carousel.
///
/// The slide list is fixed at construction; only the window position and
/// the per-view count change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Carousel {
    /// Total number of slides.
    pub slide_count: usize,
    /// Start of the visible window.
    pub current_index: usize,
    /// Slides visible at once; refreshed from the viewport on explicit
    /// triggers only.
    pub items_per_view: usize,
}

impl Carousel {
    /// Create a carousel over `slide_count` slides, deriving the initial
    /// per-view count from the viewport width.
    pub fn new(slide_count: usize, viewport_width: u32) -> Self {
        Self {
            slide_count,
            current_index: 0,
            items_per_view: breakpoints::items_per_view(viewport_width),
        }
    }

    /// Check if the carousel has any slides.
    pub fn has_slides(&self) -> bool {
        self.slide_count > 0
    }

    /// Number of slide groups at the current per-view count.
    pub fn group_count(&self) -> usize {
        self.slide_count.div_ceil(self.items_per_view)
    }

    /// Group containing the current window start.
    pub fn active_group(&self) -> usize {
        self.current_index / self.items_per_view
    }

    /// Advance one group forward, wrapping to the first slide when the
    /// next window would run past the end.
    ///
    /// The per-view count is refreshed from the viewport width before the
    /// index moves.
    pub fn next(&mut self, viewport_width: u32) {
        self.items_per_view = breakpoints::items_per_view(viewport_width);
        if self.current_index + self.items_per_view < self.slide_count {
            self.current_index += self.items_per_view;
        } else {
            self.current_index = 0;
        }
    }

    /// Step one group back, jumping to the start of the last group when
    /// already at the front.
    ///
    /// The last-group start is clamped so the final window never runs past
    /// the end of the slide list.
    pub fn prev(&mut self, viewport_width: u32) {
        self.items_per_view = breakpoints::items_per_view(viewport_width);
        if self.current_index >= self.items_per_view {
            self.current_index -= self.items_per_view;
        } else {
            let last_group_start =
                self.group_count().saturating_sub(1) * self.items_per_view;
            self.current_index =
                last_group_start.min(self.slide_count.saturating_sub(self.items_per_view));
        }
    }

    /// Jump directly to the start of a slide group.
    ///
    /// The target is multiplied by the per-view count as of the last
    /// layout, mirroring indicator dots created at that layout. Groups
    /// outside the current bounds are ignored; returns whether the jump
    /// happened.
    pub fn jump_to_group(&mut self, group: usize) -> bool {
        if group >= self.group_count() {
            return false;
        }
        self.current_index = group * self.items_per_view;
        true
    }

    /// Recompute the layout from fresh viewport measurements.
    ///
    /// Re-derives the per-view count, the track offset, and the indicator
    /// set. Returns `None` when there are no slides.
    pub fn recompute_layout(&mut self, viewport: Viewport) -> Option<CarouselLayout> {
        if !self.has_slides() {
            return None;
        }
        self.items_per_view = breakpoints::items_per_view(viewport.width);
        Some(CarouselLayout {
            items_per_view: self.items_per_view,
            offset_px: -(self.current_index as i64 * viewport.slide_width as i64),
            group_count: self.group_count(),
            active_group: self.active_group(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP: u32 = 1280;
    const TABLET: u32 = 900;
    const MOBILE: u32 = 400;

    // === Navigation Tests ===

    #[test]
    fn test_carousel_creation() {
        let carousel = Carousel::new(10, DESKTOP);
        assert_eq!(carousel.current_index, 0);
        assert_eq!(carousel.items_per_view, 3);
        assert!(carousel.has_slides());
    }

    #[test]
    fn test_next_advances_by_items_per_view() {
        let mut carousel = Carousel::new(10, DESKTOP);
        carousel.next(DESKTOP);
        assert_eq!(carousel.current_index, 3);
        carousel.next(DESKTOP);
        assert_eq!(carousel.current_index, 6);
    }

    #[test]
    fn test_next_wraps_to_start() {
        let mut carousel = Carousel::new(10, DESKTOP);
        carousel.current_index = 9;
        carousel.next(DESKTOP);
        assert_eq!(carousel.current_index, 0);
    }

    #[test]
    fn test_next_wraps_when_window_reaches_end() {
        let mut carousel = Carousel::new(10, DESKTOP);
        carousel.current_index = 7;
        // 7 + 3 = 10 is not short of the end, so the window wraps
        carousel.next(DESKTOP);
        assert_eq!(carousel.current_index, 0);
    }

    #[test]
    fn test_prev_steps_back() {
        let mut carousel = Carousel::new(10, DESKTOP);
        carousel.current_index = 6;
        carousel.prev(DESKTOP);
        assert_eq!(carousel.current_index, 3);
    }

    #[test]
    fn test_prev_from_start_lands_on_clamped_last_group() {
        let mut carousel = Carousel::new(10, DESKTOP);
        // 4 groups of 3: raw last-group start is 9, clamped to 10 - 3 = 7
        carousel.prev(DESKTOP);
        assert_eq!(carousel.current_index, 7);
    }

    #[test]
    fn test_prev_from_start_with_exact_division() {
        let mut carousel = Carousel::new(9, DESKTOP);
        carousel.prev(DESKTOP);
        assert_eq!(carousel.current_index, 6);
    }

    #[test]
    fn test_jump_to_group() {
        let mut carousel = Carousel::new(10, DESKTOP);
        assert!(carousel.jump_to_group(2));
        assert_eq!(carousel.current_index, 6);
    }

    #[test]
    fn test_jump_to_group_out_of_range_is_noop() {
        let mut carousel = Carousel::new(10, DESKTOP);
        carousel.current_index = 3;
        assert!(!carousel.jump_to_group(4));
        assert_eq!(carousel.current_index, 3);
    }

    #[test]
    fn test_navigation_refreshes_items_per_view() {
        let mut carousel = Carousel::new(10, DESKTOP);
        carousel.next(MOBILE);
        assert_eq!(carousel.items_per_view, 1);
        assert_eq!(carousel.current_index, 1);
    }

    // === Grouping Tests ===

    #[test]
    fn test_group_count() {
        let mut carousel = Carousel::new(10, DESKTOP);
        assert_eq!(carousel.group_count(), 4);

        carousel.items_per_view = 2;
        assert_eq!(carousel.group_count(), 5);

        carousel.items_per_view = 1;
        assert_eq!(carousel.group_count(), 10);
    }

    #[test]
    fn test_active_group() {
        let mut carousel = Carousel::new(10, DESKTOP);
        carousel.current_index = 7;
        assert_eq!(carousel.active_group(), 2);

        carousel.current_index = 9;
        assert_eq!(carousel.active_group(), 3);
    }

    #[test]
    fn test_fewer_slides_than_window_pins_to_start() {
        let mut carousel = Carousel::new(2, DESKTOP);
        assert_eq!(carousel.group_count(), 1);

        carousel.next(DESKTOP);
        assert_eq!(carousel.current_index, 0);

        carousel.prev(DESKTOP);
        assert_eq!(carousel.current_index, 0);
    }

    // === Layout Tests ===

    #[test]
    fn test_recompute_layout() {
        let mut carousel = Carousel::new(10, DESKTOP);
        carousel.current_index = 6;

        let layout = carousel.recompute_layout(Viewport::new(DESKTOP, 300)).unwrap();
        assert_eq!(layout.items_per_view, 3);
        assert_eq!(layout.offset_px, -1800);
        assert_eq!(layout.group_count, 4);
        assert_eq!(layout.active_group, 2);
    }

    #[test]
    fn test_recompute_layout_refreshes_items_per_view() {
        let mut carousel = Carousel::new(10, DESKTOP);
        carousel.current_index = 3;

        let layout = carousel.recompute_layout(Viewport::new(TABLET, 450)).unwrap();
        assert_eq!(layout.items_per_view, 2);
        assert_eq!(layout.group_count, 5);
        // The window start is untouched; only the grouping shifts
        assert_eq!(carousel.current_index, 3);
        assert_eq!(layout.active_group, 1);
    }

    #[test]
    fn test_zero_slides_has_no_layout() {
        let mut carousel = Carousel::new(0, DESKTOP);
        assert!(!carousel.has_slides());
        assert_eq!(carousel.group_count(), 0);
        assert!(carousel.recompute_layout(Viewport::new(DESKTOP, 300)).is_none());
    }

    #[test]
    fn test_stale_group_jump_uses_dispatch_time_items_per_view() {
        let mut carousel = Carousel::new(10, TABLET);
        assert_eq!(carousel.items_per_view, 2);

        // Dots were built for 5 groups of 2; a jump multiplies by the
        // per-view count as of that layout even if the window has since
        // narrowed on screen.
        assert!(carousel.jump_to_group(3));
        assert_eq!(carousel.current_index, 6);
    }
}
