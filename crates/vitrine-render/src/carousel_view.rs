//! Carousel widget renderers.

use vitrine_core::carousel::CarouselLayout;
use vitrine_core::catalog::Slide;

use crate::escape::html_escape;

/// Render the carousel slides in track order.
pub fn render_slides(slides: &[Slide]) -> String {
    slides
        .iter()
        .enumerate()
        .map(|(index, slide)| render_slide(index, slide))
        .collect()
}

fn render_slide(index: usize, slide: &Slide) -> String {
    let alt = slide
        .caption
        .as_deref()
        .map(html_escape)
        .unwrap_or_else(|| format!("Slide {}", index + 1));

    let caption = slide
        .caption
        .as_ref()
        .map(|text| format!(r#"<p class="carousel-caption">{}</p>"#, html_escape(text)))
        .unwrap_or_default();

    format!(
        r#"<div class="carousel-item">
            <img src="{src}" alt="{alt}">
            {caption}
        </div>"#,
        src = html_escape(&slide.image_url),
        alt = alt,
        caption = caption
    )
}

/// Render the inline style that positions the track for a layout.
pub fn render_track_style(layout: &CarouselLayout) -> String {
    format!("transform: translateX({}px);", layout.offset_px)
}

/// Render the indicator dots: one per slide group, the active group
/// marked, each dot addressable by its group index.
pub fn render_indicators(layout: &CarouselLayout) -> String {
    (0..layout.group_count)
        .map(|group| {
            let class = if group == layout.active_group {
                "carousel-indicator-dot active"
            } else {
                "carousel-indicator-dot"
            };
            format!(
                r#"<button class="{class}" data-group="{group}"></button>"#,
                class = class,
                group = group
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::carousel::{Carousel, Viewport};

    fn layout_for(slide_count: usize, width: u32, slide_width: u32) -> CarouselLayout {
        let mut carousel = Carousel::new(slide_count, width);
        carousel
            .recompute_layout(Viewport::new(width, slide_width))
            .unwrap()
    }

    #[test]
    fn test_slides_render_images_and_captions() {
        let slides = vec![
            Slide::new("/img/one.jpg").with_caption("Summer & Sun"),
            Slide::new("/img/two.jpg"),
        ];

        let html = render_slides(&slides);
        assert_eq!(html.matches("carousel-item").count(), 2);
        assert!(html.contains("Summer &amp; Sun"));
        assert!(html.contains(r#"alt="Slide 2""#));
    }

    #[test]
    fn test_track_style_positions_by_offset() {
        let mut carousel = Carousel::new(10, 1280);
        carousel.next(1280);
        let layout = carousel
            .recompute_layout(Viewport::new(1280, 300))
            .unwrap();

        assert_eq!(render_track_style(&layout), "transform: translateX(-900px);");
    }

    #[test]
    fn test_one_indicator_per_group_with_active_marked() {
        let html = render_indicators(&layout_for(10, 1280, 300));

        assert_eq!(html.matches("carousel-indicator-dot").count(), 4);
        assert_eq!(html.matches("active").count(), 1);
        assert!(html.contains(r#"data-group="3""#));
    }

    #[test]
    fn test_single_group_gets_single_dot() {
        let html = render_indicators(&layout_for(2, 1280, 300));
        assert_eq!(html.matches("data-group").count(), 1);
        assert!(html.contains("active"));
    }
}
