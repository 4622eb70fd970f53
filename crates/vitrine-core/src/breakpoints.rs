//! Responsive breakpoints for the highlights carousel.
//!
//! Tuning should happen here so every carousel consumer maps viewport
//! widths to visible slide counts consistently.

/// Viewport width (CSS px) at or below which one slide is visible.
pub const MOBILE_MAX_WIDTH: u32 = 768;
/// Viewport width (CSS px) at or below which two slides are visible.
pub const TABLET_MAX_WIDTH: u32 = 1024;

/// Slides visible on a mobile viewport.
pub const MOBILE_ITEMS_PER_VIEW: usize = 1;
/// Slides visible on a tablet viewport.
pub const TABLET_ITEMS_PER_VIEW: usize = 2;
/// Slides visible on a desktop viewport.
pub const DESKTOP_ITEMS_PER_VIEW: usize = 3;

/// Derive how many slides are visible at the given viewport width.
pub fn items_per_view(viewport_width: u32) -> usize {
    if viewport_width <= MOBILE_MAX_WIDTH {
        MOBILE_ITEMS_PER_VIEW
    } else if viewport_width <= TABLET_MAX_WIDTH {
        TABLET_ITEMS_PER_VIEW
    } else {
        DESKTOP_ITEMS_PER_VIEW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_per_view_boundaries() {
        assert_eq!(items_per_view(320), 1);
        assert_eq!(items_per_view(768), 1);
        assert_eq!(items_per_view(769), 2);
        assert_eq!(items_per_view(1024), 2);
        assert_eq!(items_per_view(1025), 3);
        assert_eq!(items_per_view(1920), 3);
    }
}
