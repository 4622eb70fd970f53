//! Application components and engine wiring.

use std::time::Duration;

use js_sys::Date;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_meta::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use vitrine_core::{Catalog, CatalogEntry, Slide, Viewport, WidgetConfig};
use vitrine_runtime::{Effect as WidgetEffect, Interaction, Notice, StorefrontEngine};

// ============================================================================
// Engine Wiring
// ============================================================================

/// Cadence for driving the engine timers. Fine-grained enough for the
/// 250 ms resize debounce and the 3 s auto-advance period.
const TICK_INTERVAL_MS: u64 = 100;

/// Slide width used until the track is mounted and measurable.
const FALLBACK_SLIDE_WIDTH: u32 = 300;

fn now_ms() -> u64 {
    Date::now() as u64
}

fn window_width() -> u32 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(1024.0) as u32
}

/// Measure the viewport from the window and the first rendered slide.
fn measure_viewport(track: NodeRef<html::Div>) -> Viewport {
    let slide_width = track
        .get_untracked()
        .and_then(|el| el.first_element_child())
        .map(|item| item.get_bounding_client_rect().width() as u32)
        .unwrap_or(FALLBACK_SLIDE_WIDTH);
    Viewport::new(window_width(), slide_width)
}

/// Dispatch an interaction and apply the resulting effects.
fn send(engine: RwSignal<StorefrontEngine>, interaction: Interaction) {
    let effects = engine
        .try_update(|e| e.dispatch(interaction, now_ms()))
        .unwrap_or_default();
    apply_effects(&effects);
}

fn apply_effects(effects: &[WidgetEffect]) {
    for effect in effects {
        match effect {
            // Views read the engine signal, so state changes re-render
            // without further work here.
            WidgetEffect::CartChanged | WidgetEffect::CarouselChanged(_) => {}
            WidgetEffect::Notice(notice) => {
                if let Notice::AddFailed { name, raw_price } = notice {
                    leptos::logging::error!("Failed to parse product price: {name} {raw_price}");
                }
                let _ = window().alert_with_message(&notice.message());
            }
            WidgetEffect::ScrollToCheckout => scroll_to_checkout(),
        }
    }
}

fn scroll_to_checkout() {
    if let Some(button) = document().get_element_by_id("checkout-button") {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        button.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

// ============================================================================
// Demo Data
// ============================================================================

fn demo_catalog() -> Catalog {
    Catalog::from_entries(vec![
        CatalogEntry::new("Wireless Headphones", "$89.99")
            .with_image_url("https://picsum.photos/seed/vitrine-headphones/400/300")
            .with_description("Over-ear headphones with a 30-hour battery."),
        CatalogEntry::new("Smart Watch", "$199.00")
            .with_image_url("https://picsum.photos/seed/vitrine-watch/400/300")
            .with_description("Fitness tracking with a week of standby."),
        CatalogEntry::new("Portable Speaker", "$49.50")
            .with_image_url("https://picsum.photos/seed/vitrine-speaker/400/300")
            .with_description("Pocket-sized speaker with surprising bass."),
        CatalogEntry::new("Mechanical Keyboard", "$129.00")
            .with_image_url("https://picsum.photos/seed/vitrine-keyboard/400/300")
            .with_description("Hot-swappable switches in a compact layout."),
        CatalogEntry::new("4K Monitor", "$1,299.00")
            .with_image_url("https://picsum.photos/seed/vitrine-monitor/400/300")
            .with_description("27-inch panel with factory calibration."),
        CatalogEntry::new("USB-C Hub", "$39.99")
            .with_image_url("https://picsum.photos/seed/vitrine-hub/400/300")
            .with_description("Seven ports in an aluminum shell."),
    ])
}

fn demo_slides() -> Vec<Slide> {
    vec![
        Slide::new("https://picsum.photos/seed/vitrine-spring/900/400")
            .with_caption("Spring Collection"),
        Slide::new("https://picsum.photos/seed/vitrine-audio/900/400")
            .with_caption("Audio Essentials"),
        Slide::new("https://picsum.photos/seed/vitrine-desk/900/400").with_caption("Desk Setups"),
        Slide::new("https://picsum.photos/seed/vitrine-travel/900/400")
            .with_caption("Travel Ready"),
        Slide::new("https://picsum.photos/seed/vitrine-deals/900/400").with_caption("Weekly Deals"),
    ]
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let catalog = demo_catalog();
    let slides = demo_slides();
    let track_ref: NodeRef<html::Div> = NodeRef::new();

    let engine = RwSignal::new(StorefrontEngine::new(
        WidgetConfig::default(),
        slides.len(),
        Viewport::new(window_width(), FALLBACK_SLIDE_WIDTH),
        now_ms(),
    ));

    // One platform interval drives both engine timers.
    let _ = set_interval_with_handle(
        move || {
            let effects = engine.try_update(|e| e.tick(now_ms())).unwrap_or_default();
            apply_effects(&effects);
        },
        Duration::from_millis(TICK_INTERVAL_MS),
    );

    let _ = window_event_listener(ev::resize, move |_| {
        send(
            engine,
            Interaction::Resize {
                viewport: measure_viewport(track_ref),
            },
        );
    });

    // Re-measure once the track is mounted; real slide widths replace
    // the fallback through the normal resize path.
    Effect::new(move |_| {
        if track_ref.get().is_some() {
            send(
                engine,
                Interaction::Resize {
                    viewport: measure_viewport(track_ref),
                },
            );
        }
    });

    view! {
        <Title text="Vitrine Storefront"/>
        <Header/>
        <main>
            <CarouselSection engine=engine slides=slides track_ref=track_ref/>
            <CatalogSection engine=engine catalog=catalog/>
            <CartSection engine=engine/>
            <SummarySection engine=engine/>
        </main>
        <Footer/>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    view! {
        <header>
            <h1>"Vitrine"</h1>
            <nav>
                <a href="#catalog">"Products"</a>
                <a href="#cart">"Cart"</a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>"Vitrine demo storefront"</p>
        </footer>
    }
}

// ============================================================================
// Carousel Components
// ============================================================================

#[component]
fn CarouselSection(
    engine: RwSignal<StorefrontEngine>,
    slides: Vec<Slide>,
    track_ref: NodeRef<html::Div>,
) -> impl IntoView {
    if slides.is_empty() {
        return view! {
            <section class="carousel-section">
                <h2>"Highlights"</h2>
                <p class="carousel-empty">"No highlights to show."</p>
            </section>
        }
        .into_any();
    }

    let track_style = move || {
        engine.with(|e| {
            let offset = e.carousel().current_index as i64 * e.viewport().slide_width as i64;
            format!("transform: translateX({}px);", -offset)
        })
    };

    let dots = move || {
        engine.with(|e| {
            let active = e.carousel().active_group();
            (0..e.carousel().group_count())
                .map(|group| {
                    let class = if group == active {
                        "carousel-indicator-dot active"
                    } else {
                        "carousel-indicator-dot"
                    };
                    view! {
                        <button
                            class=class
                            on:click=move |_| send(
                                engine,
                                Interaction::CarouselJump {
                                    group,
                                    viewport: measure_viewport(track_ref),
                                },
                            )
                        ></button>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="carousel-section">
            <h2>"Highlights"</h2>
            <div class="carousel">
                <button
                    class="carousel-control prev"
                    on:click=move |_| send(
                        engine,
                        Interaction::CarouselPrev {
                            viewport: measure_viewport(track_ref),
                        },
                    )
                >
                    "❮"
                </button>
                <div class="carousel-track" node_ref=track_ref style=track_style>
                    {slides
                        .into_iter()
                        .enumerate()
                        .map(|(index, slide)| view! { <CarouselItem slide=slide index=index/> })
                        .collect::<Vec<_>>()}
                </div>
                <button
                    class="carousel-control next"
                    on:click=move |_| send(
                        engine,
                        Interaction::CarouselNext {
                            viewport: measure_viewport(track_ref),
                        },
                    )
                >
                    "❯"
                </button>
            </div>
            <div class="carousel-indicators">{dots}</div>
        </section>
    }
    .into_any()
}

#[component]
fn CarouselItem(slide: Slide, index: usize) -> impl IntoView {
    let alt = slide
        .caption
        .clone()
        .unwrap_or_else(|| format!("Slide {}", index + 1));

    view! {
        <div class="carousel-item">
            <img src=slide.image_url alt=alt/>
            {slide
                .caption
                .map(|caption| view! { <p class="carousel-caption">{caption}</p> })}
        </div>
    }
}

// ============================================================================
// Catalog Components
// ============================================================================

#[component]
fn CatalogSection(engine: RwSignal<StorefrontEngine>, catalog: Catalog) -> impl IntoView {
    view! {
        <section class="product-catalog" id="catalog">
            <h2>"Products"</h2>
            <div class="product-grid">
                {catalog
                    .entries
                    .into_iter()
                    .map(|entry| view! { <ProductCard engine=engine entry=entry/> })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn ProductCard(engine: RwSignal<StorefrontEngine>, entry: CatalogEntry) -> impl IntoView {
    let CatalogEntry {
        name,
        price_text,
        image_url,
        description,
    } = entry;

    let add = {
        let name = name.clone();
        let price_text = price_text.clone();
        move |_| {
            send(
                engine,
                Interaction::AddToCart {
                    name: name.clone(),
                    price_text: price_text.clone(),
                },
            );
        }
    };

    let image =
        image_url.map(|url| view! { <img src=url alt=name.clone() class="product-image"/> });

    view! {
        <article class="product-card">
            {image}
            <h3 class="product-name">{name}</h3>
            {description.map(|text| view! { <p class="product-description">{text}</p> })}
            <p class="price">{price_text}</p>
            <button class="add-to-cart" on:click=add>"Add to Cart"</button>
        </article>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

#[component]
fn CartSection(engine: RwSignal<StorefrontEngine>) -> impl IntoView {
    view! {
        <section class="cart-panel" id="cart">
            <h2>
                "Shopping Cart "
                <span class="cart-count">{move || engine.with(|e| e.cart().len())}</span>
            </h2>
            {move || {
                let items = engine.with(|e| e.cart().items.clone());
                if items.is_empty() {
                    view! { <p class="cart-empty">"Your cart is empty."</p> }.into_any()
                } else {
                    view! {
                        <ul class="cart-items">
                            {items
                                .into_iter()
                                .enumerate()
                                .map(|(position, item)| {
                                    view! {
                                        <li class="cart-item">
                                            <span class="cart-item-name">{item.name}</span>
                                            <span class="cart-item-price">{item.price.display()}</span>
                                            <button
                                                class="remove-from-cart"
                                                on:click=move |_| send(
                                                    engine,
                                                    Interaction::RemoveFromCart { position },
                                                )
                                            >
                                                "Remove"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

// ============================================================================
// Summary Components
// ============================================================================

#[component]
fn SummarySection(engine: RwSignal<StorefrontEngine>) -> impl IntoView {
    view! {
        <section class="order-summary">
            <h2>"Order Summary"</h2>
            {move || {
                engine.with(|e| {
                    let cart = e.cart();
                    if cart.is_empty() {
                        view! { <p class="summary-empty">"No items in the cart yet."</p> }
                            .into_any()
                    } else {
                        view! {
                            <ul class="order-summary-list">
                                {cart
                                    .items
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <li class="order-summary-item">
                                                <span>{item.name.clone()}</span>
                                                <span>{item.price.display()}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                            <div class="order-summary-totals">
                                <p class="order-subtotal">
                                    "Items Subtotal: " <span>{cart.items_subtotal().display()}</span>
                                </p>
                                <p class="order-base">
                                    "Base Amount: " <span>{cart.base_amount.display()}</span>
                                </p>
                                <p class="order-total">
                                    "Order Total: " <strong>{cart.total().display()}</strong>
                                </p>
                            </div>
                        }
                        .into_any()
                    }
                })
            }}
            <button
                id="checkout-button"
                class="checkout-button"
                on:click=move |_| send(engine, Interaction::Checkout)
            >
                "Checkout"
            </button>
        </section>
    }
}
