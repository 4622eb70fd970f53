//! Storefront page section assembly.

use vitrine_core::carousel::CarouselLayout;
use vitrine_core::cart::Cart;
use vitrine_core::catalog::{Catalog, CatalogEntry, Slide};

use crate::cart_panel::{render_cart_panel, render_item_count};
use crate::carousel_view::{render_indicators, render_slides, render_track_style};
use crate::escape::html_escape;
use crate::summary::render_order_summary;

/// Render the product catalog grid with add-to-cart controls.
pub fn render_catalog_section(catalog: &Catalog) -> String {
    if catalog.is_empty() {
        return r#"<section class="product-catalog product-catalog--empty" data-section="catalog">
    <h2>Products</h2>
    <p class="catalog-empty">No products available.</p>
</section>"#
            .to_string();
    }

    let cards: String = catalog.entries.iter().map(render_product_card).collect();

    format!(
        r#"<section class="product-catalog" data-section="catalog">
    <h2>Products</h2>
    <div class="product-grid">
        {cards}
    </div>
</section>"#,
        cards = cards
    )
}

fn render_product_card(entry: &CatalogEntry) -> String {
    let image = entry
        .image_url
        .as_ref()
        .map(|url| {
            format!(
                r#"<img src="{src}" alt="{alt}" class="product-image">"#,
                src = html_escape(url),
                alt = html_escape(&entry.name)
            )
        })
        .unwrap_or_default();

    let description = entry
        .description
        .as_ref()
        .map(|text| format!(r#"<p class="product-description">{}</p>"#, html_escape(text)))
        .unwrap_or_default();

    format!(
        r#"<article class="product-card">
        {image}
        <h3 class="product-name">{name}</h3>
        {description}
        <p class="price">{price}</p>
        <button class="add-to-cart" data-name="{name}" data-price="{price}">Add to Cart</button>
    </article>"#,
        image = image,
        name = html_escape(&entry.name),
        description = description,
        price = html_escape(&entry.price_text)
    )
}

/// Render the highlights carousel: controls, positioned track, and
/// indicator dots. Without a layout (no slides) an empty state is
/// rendered instead.
pub fn render_carousel_section(slides: &[Slide], layout: Option<&CarouselLayout>) -> String {
    let layout = match layout {
        Some(layout) => layout,
        None => {
            return r#"<section class="carousel-section carousel-section--empty" data-section="highlights">
    <h2>Highlights</h2>
    <p class="carousel-empty">No highlights to show.</p>
</section>"#
                .to_string();
        }
    };

    format!(
        r#"<section class="carousel-section" data-section="highlights">
    <h2>Highlights</h2>
    <div class="carousel">
        <button class="carousel-control prev">&#10094;</button>
        <div class="carousel-track" style="{track_style}">
            {slides}
        </div>
        <button class="carousel-control next">&#10095;</button>
    </div>
    <div class="carousel-indicators">
        {indicators}
    </div>
</section>"#,
        track_style = render_track_style(layout),
        slides = render_slides(slides),
        indicators = render_indicators(layout)
    )
}

/// Render the cart panel section.
pub fn render_cart_section(cart: &Cart) -> String {
    format!(
        r#"<section class="cart-panel" data-section="cart">
    <h2>Shopping Cart {count}</h2>
    <div id="cart-items">
        {panel}
    </div>
</section>"#,
        count = render_item_count(cart),
        panel = render_cart_panel(cart)
    )
}

/// Render the order summary section with the checkout control.
pub fn render_summary_section(cart: &Cart) -> String {
    format!(
        r#"<section class="order-summary" data-section="summary">
    <h2>Order Summary</h2>
    <div id="order-summary-content">
        {summary}
    </div>
    <button id="checkout-button" class="checkout-button">Checkout</button>
</section>"#,
        summary = render_order_summary(cart)
    )
}
