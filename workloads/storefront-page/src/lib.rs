//! Vitrine storefront page - streaming storefront with interactive widgets.
//!
//! This workload demonstrates:
//! - Shell-first streaming of the storefront sections
//! - Catalog, highlights carousel, cart panel, and order summary widgets
//! - Widget settings and content from an embedded TOML file
//! - Client-side widget behavior matching the engine semantics

use anyhow::Context;
use serde::Deserialize;
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;

use vitrine_sdk::vitrine_core::carousel::{Carousel, Viewport};
use vitrine_sdk::vitrine_core::cart::Cart;
use vitrine_sdk::vitrine_core::catalog::{Catalog, CatalogEntry, Slide};
use vitrine_sdk::vitrine_core::config::WidgetConfig;
use vitrine_sdk::vitrine_render::{
    render_carousel_section, render_cart_section, render_catalog_section, render_summary_section,
    HeadContent, PageShell, PageStream,
};
use vitrine_sdk::vitrine_runtime::{LogFormat, SessionId, WidgetLogger};

/// Embedded storefront content and widget settings.
const STOREFRONT_TOML: &str = include_str!("../storefront.toml");

/// The server renders the carousel for a desktop viewport; the page
/// script remeasures on load and on resize.
const INITIAL_VIEWPORT: Viewport = Viewport {
    width: 1280,
    slide_width: 300,
};

/// Storefront content: widget settings plus catalog entries and slides.
#[derive(Debug, Deserialize)]
struct StorefrontContent {
    #[serde(default)]
    widget: WidgetConfig,
    #[serde(default)]
    products: Vec<CatalogEntry>,
    #[serde(default)]
    slides: Vec<Slide>,
}

fn load_content() -> anyhow::Result<StorefrontContent> {
    toml::from_str(STOREFRONT_TOML).context("invalid storefront.toml")
}

/// Storefront page handler.
#[http_component]
async fn handle_storefront(req: IncomingRequest, response_out: ResponseOutparam) {
    // Only handle GET requests
    if req.method() != Method::Get {
        let headers = Fields::from_list(&[]).unwrap();
        let response = OutgoingResponse::new(headers);
        response.set_status_code(405).unwrap();
        response_out.set(response);
        return;
    }

    let session = SessionId::generate();
    let logger = WidgetLogger::new(session.clone())
        .with_widget("storefront-page")
        .with_format(LogFormat::Human);

    let content = match load_content() {
        Ok(content) => content,
        Err(e) => {
            logger
                .error_builder("Failed to load storefront content")
                .field("error", e.to_string())
                .emit();
            let headers = Fields::from_list(&[]).unwrap();
            let response = OutgoingResponse::new(headers);
            response.set_status_code(500).unwrap();
            response_out.set(response);
            return;
        }
    };

    logger
        .info_builder("Storefront request started")
        .field_u64("products", content.products.len() as u64)
        .field_u64("slides", content.slides.len() as u64)
        .emit();

    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("x-session-id".to_owned(), session.to_string().into()),
        ("cache-control".to_owned(), "no-store".into()),
    ];
    let headers = Fields::from_list(&header_list).unwrap();
    let response = OutgoingResponse::new(headers);
    response.set_status_code(200).unwrap();

    let body = response.take_body();
    response_out.set(response);
    let mut stream = PageStream::new(body);

    let shell = create_shell(&content.widget);

    // Send shell first (streaming SSR)
    if let Err(e) = stream.send_shell(&shell.render_opening()).await {
        logger
            .error_builder("Failed to send shell")
            .field("error", e.to_string())
            .emit();
        return;
    }

    // Catalog grid
    let catalog = Catalog::from_entries(content.products.clone());
    let _ = stream
        .send_section("catalog", &render_catalog_section(&catalog))
        .await;

    // Highlights carousel with the initial desktop layout
    let mut carousel = Carousel::new(content.slides.len(), INITIAL_VIEWPORT.width);
    let layout = carousel.recompute_layout(INITIAL_VIEWPORT);
    let _ = stream
        .send_section(
            "highlights",
            &render_carousel_section(&content.slides, layout.as_ref()),
        )
        .await;

    // Cart panel and order summary start empty
    let cart = Cart::new().with_base_amount(content.widget.base_amount());
    let _ = stream
        .send_section("cart", &render_cart_section(&cart))
        .await;
    let _ = stream
        .send_section("summary", &render_summary_section(&cart))
        .await;

    // Send closing shell with the widget script
    let closing = format!("{}\n<script>{}</script>", shell.render_closing(), WIDGET_SCRIPT);
    let _ = stream.send_raw(closing.into_bytes()).await;
    stream.complete();

    logger.info("Storefront request complete");
}

/// Create the storefront shell. Widget settings ride along as data
/// attributes so the page script stays a plain constant.
fn create_shell(config: &WidgetConfig) -> PageShell {
    let head = HeadContent::new("Vitrine Storefront")
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", "Vitrine storefront demo with live widgets.")
        .with_style(STOREFRONT_STYLES);

    PageShell::new(head)
        .with_body_start(format!(
            r#"<body>
<header class="site-header">
    <nav class="nav-container">
        <a href="/" class="logo">Vitrine</a>
        <div class="nav-links">
            <a href="/">Products</a>
            <a href="/">Highlights</a>
            <a href="/">Cart</a>
        </div>
    </nav>
</header>
<main id="storefront" data-auto-advance-ms="{auto}" data-resize-debounce-ms="{debounce}" data-base-amount-cents="{base}">
"#,
            auto = config.auto_advance_ms,
            debounce = config.resize_debounce_ms,
            base = config.base_amount_cents
        ))
        .with_body_end(
            r#"
</main>
<footer class="site-footer">
    <p>Vitrine - streaming storefront widgets</p>
</footer>
</body>
</html>"#
                .to_string(),
        )
}

/// Client-side widget behavior. Mirrors the engine semantics: strict
/// price parsing, full panel rebuilds, grouped carousel navigation with
/// the clamped prev landing, auto-advance reset on manual interaction,
/// and trailing-edge resize debounce.
const WIDGET_SCRIPT: &str = r#"
(function () {
    'use strict';

    const root = document.getElementById('storefront');
    if (!root) return;

    const AUTO_ADVANCE_MS = Number(root.dataset.autoAdvanceMs) || 3000;
    const RESIZE_DEBOUNCE_MS = Number(root.dataset.resizeDebounceMs) || 250;
    const BASE_AMOUNT_CENTS = Number(root.dataset.baseAmountCents) || 0;

    // --- Cart ---

    const cart = [];

    function formatAmount(value) {
        return value.toLocaleString('en-US', {
            minimumFractionDigits: 2,
            maximumFractionDigits: 2
        });
    }

    function parsePrice(text) {
        const cleaned = String(text).trim().replace(/^\$/, '').replace(/,/g, '');
        if (!cleaned) return null;
        const value = Number(cleaned);
        return Number.isFinite(value) && value >= 0 ? value : null;
    }

    function escapeHtml(text) {
        const div = document.createElement('div');
        div.textContent = text;
        return div.innerHTML;
    }

    function renderCart() {
        const items = document.getElementById('cart-items');
        const summary = document.getElementById('order-summary-content');
        const count = document.querySelector('.cart-count');
        if (!items || !summary) return;
        if (count) count.textContent = cart.length;

        if (cart.length === 0) {
            items.innerHTML = '<p class="cart-empty">Your cart is empty.</p>';
            summary.innerHTML = '<p class="summary-empty">No items in the cart yet.</p>';
            return;
        }

        items.innerHTML = '<ul class="cart-items">' + cart.map(function (item, index) {
            return '<li class="cart-item">'
                + '<span class="cart-item-name">' + escapeHtml(item.name) + '</span>'
                + '<span class="cart-item-price">$' + formatAmount(item.price) + '</span>'
                + '<button class="remove-from-cart" data-index="' + index + '">Remove</button>'
                + '</li>';
        }).join('') + '</ul>';

        const subtotal = cart.reduce(function (sum, item) { return sum + item.price; }, 0);
        const base = BASE_AMOUNT_CENTS / 100;
        const total = subtotal + base;

        summary.innerHTML = '<ul class="order-summary-list">' + cart.map(function (item) {
            return '<li class="order-summary-item">'
                + '<span class="order-summary-name">' + escapeHtml(item.name) + '</span>'
                + '<span class="order-summary-price">$' + formatAmount(item.price) + '</span>'
                + '</li>';
        }).join('') + '</ul>'
            + '<div class="order-summary-totals">'
            + '<p class="order-subtotal">Items Subtotal: <span>$' + formatAmount(subtotal) + '</span></p>'
            + '<p class="order-base">Base Amount: <span>$' + formatAmount(base) + '</span></p>'
            + '<p class="order-total">Order Total: <strong>$' + formatAmount(total) + '</strong></p>'
            + '</div>';
    }

    document.querySelectorAll('.add-to-cart').forEach(function (button) {
        button.addEventListener('click', function () {
            const name = button.dataset.name;
            const price = parsePrice(button.dataset.price);
            if (!name || price === null) {
                console.error('Failed to parse product price:', name, button.dataset.price);
                alert('There was a problem adding the product. Please try again.');
                return;
            }
            cart.push({ name: name, price: price });
            renderCart();
            alert('"' + name + '" has been added to the cart.');
        });
    });

    const cartItems = document.getElementById('cart-items');
    if (cartItems) {
        cartItems.addEventListener('click', function (event) {
            const button = event.target.closest('.remove-from-cart');
            if (!button) return;
            cart.splice(Number(button.dataset.index), 1);
            renderCart();
        });
    }

    const checkout = document.getElementById('checkout-button');
    if (checkout) {
        checkout.addEventListener('click', function () {
            if (cart.length === 0) {
                alert('Your cart is empty. Please add some products before continuing.');
                return;
            }
            alert('Redirecting to checkout...');
            checkout.scrollIntoView({ behavior: 'smooth' });
        });
    }

    // --- Carousel ---

    const track = document.querySelector('.carousel-track');
    const indicators = document.querySelector('.carousel-indicators');
    if (!track || track.children.length === 0) return;

    const slideCount = track.children.length;
    let currentIndex = 0;
    let autoTimer = null;
    let resizeTimer = null;

    function itemsPerView() {
        const width = window.innerWidth;
        if (width <= 768) return 1;
        if (width <= 1024) return 2;
        return 3;
    }

    // Per-view count as of the last layout. Dot jumps multiply by this
    // value, matching the grouping the dots were rendered with.
    let perView = itemsPerView();

    function groupCount() {
        return Math.ceil(slideCount / perView);
    }

    function update() {
        perView = itemsPerView();
        const itemWidth = track.children[0].getBoundingClientRect().width;
        track.style.transform = 'translateX(' + (-currentIndex * itemWidth) + 'px)';
        renderDots();
    }

    function renderDots() {
        if (!indicators) return;
        const groups = groupCount();
        const active = Math.floor(currentIndex / perView);
        let html = '';
        for (let group = 0; group < groups; group++) {
            html += '<button class="carousel-indicator-dot'
                + (group === active ? ' active' : '')
                + '" data-group="' + group + '"></button>';
        }
        indicators.innerHTML = html;
    }

    function next() {
        perView = itemsPerView();
        currentIndex = currentIndex + perView < slideCount ? currentIndex + perView : 0;
        update();
    }

    function prev() {
        perView = itemsPerView();
        if (currentIndex >= perView) {
            currentIndex -= perView;
        } else {
            const lastGroupStart = (groupCount() - 1) * perView;
            currentIndex = Math.min(lastGroupStart, Math.max(slideCount - perView, 0));
        }
        update();
    }

    function restartAuto() {
        if (autoTimer !== null) clearInterval(autoTimer);
        autoTimer = setInterval(next, AUTO_ADVANCE_MS);
    }

    const prevControl = document.querySelector('.carousel-control.prev');
    const nextControl = document.querySelector('.carousel-control.next');
    if (prevControl) prevControl.addEventListener('click', function () { prev(); restartAuto(); });
    if (nextControl) nextControl.addEventListener('click', function () { next(); restartAuto(); });

    if (indicators) {
        indicators.addEventListener('click', function (event) {
            const dot = event.target.closest('.carousel-indicator-dot');
            if (!dot) return;
            const group = Number(dot.dataset.group);
            if (group >= groupCount()) return;
            currentIndex = group * perView;
            update();
            restartAuto();
        });
    }

    window.addEventListener('resize', function () {
        if (resizeTimer !== null) clearTimeout(resizeTimer);
        resizeTimer = setTimeout(function () {
            update();
            restartAuto();
        }, RESIZE_DEBOUNCE_MS);
    });

    update();
    restartAuto();
})();
"#;

const STOREFRONT_STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: #f8fafc;
    color: #1e293b;
    line-height: 1.6;
}

/* Header */
.site-header {
    background: #ffffff;
    border-bottom: 1px solid #e2e8f0;
}

.nav-container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: #6366f1;
    text-decoration: none;
}

.nav-links { display: flex; gap: 1.5rem; }
.nav-links a { color: #1e293b; text-decoration: none; font-weight: 500; }

main { max-width: 1100px; margin: 0 auto; padding: 2rem; }

section { margin-bottom: 3rem; }
section h2 { margin-bottom: 1rem; }

/* Catalog */
.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 1.5rem;
}

.product-card {
    background: #ffffff;
    border: 1px solid #e2e8f0;
    border-radius: 8px;
    padding: 1rem;
}

.product-image { width: 100%; border-radius: 6px; margin-bottom: 0.75rem; }
.product-name { font-size: 1.05rem; margin-bottom: 0.25rem; }
.product-description { color: #64748b; font-size: 0.85rem; margin-bottom: 0.5rem; }
.price { font-weight: 700; color: #b12704; margin-bottom: 0.75rem; }

.add-to-cart {
    background: #6366f1;
    color: white;
    border: none;
    padding: 0.6rem 1.2rem;
    border-radius: 6px;
    cursor: pointer;
}

/* Carousel */
.carousel {
    position: relative;
    overflow: hidden;
    border-radius: 8px;
}

.carousel-track {
    display: flex;
    transition: transform 0.4s ease;
}

.carousel-item {
    flex: 0 0 calc(100% / 3);
    padding: 0 0.5rem;
}

.carousel-item img { width: 100%; border-radius: 6px; display: block; }
.carousel-caption { text-align: center; color: #64748b; margin-top: 0.5rem; }

.carousel-control {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    background: rgba(30, 41, 59, 0.6);
    color: white;
    border: none;
    font-size: 1.25rem;
    padding: 0.5rem 0.75rem;
    cursor: pointer;
    z-index: 10;
}

.carousel-control.prev { left: 0.5rem; }
.carousel-control.next { right: 0.5rem; }

.carousel-indicators {
    display: flex;
    justify-content: center;
    gap: 0.5rem;
    margin-top: 0.75rem;
}

.carousel-indicator-dot {
    width: 12px;
    height: 12px;
    border-radius: 50%;
    border: none;
    background: #cbd5e1;
    cursor: pointer;
}

.carousel-indicator-dot.active { background: #6366f1; }

/* Cart */
.cart-count {
    display: inline-block;
    min-width: 1.5rem;
    text-align: center;
    background: #6366f1;
    color: white;
    border-radius: 999px;
    font-size: 0.9rem;
    padding: 0 0.4rem;
}

.cart-items { list-style: none; }

.cart-item {
    display: flex;
    align-items: center;
    gap: 1rem;
    background: #ffffff;
    border: 1px solid #e2e8f0;
    border-radius: 6px;
    padding: 0.75rem 1rem;
    margin-bottom: 0.5rem;
}

.cart-item-name { flex: 1; }
.cart-item-price { font-weight: 600; }

.remove-from-cart {
    background: #dc2626;
    color: white;
    border: none;
    padding: 0.4rem 0.8rem;
    border-radius: 6px;
    cursor: pointer;
}

.cart-empty, .summary-empty, .catalog-empty, .carousel-empty { color: #64748b; }

/* Order summary */
.order-summary-list { list-style: none; margin-bottom: 1rem; }

.order-summary-item {
    display: flex;
    justify-content: space-between;
    padding: 0.4rem 0;
    border-bottom: 1px solid #e2e8f0;
}

.order-summary-totals p {
    display: flex;
    justify-content: space-between;
    padding: 0.3rem 0;
}

.order-total { font-size: 1.1rem; border-top: 2px solid #1e293b; margin-top: 0.5rem; }

.checkout-button {
    margin-top: 1rem;
    background: #16a34a;
    color: white;
    border: none;
    padding: 0.75rem 2rem;
    border-radius: 6px;
    font-size: 1rem;
    cursor: pointer;
}

/* Footer */
.site-footer {
    background: #1e293b;
    color: #e2e8f0;
    text-align: center;
    padding: 2rem;
    margin-top: 3rem;
}

/* Responsive carousel windows */
@media (max-width: 1024px) {
    .carousel-item { flex-basis: calc(100% / 2); }
}

@media (max-width: 768px) {
    .carousel-item { flex-basis: 100%; }
}
"#;
