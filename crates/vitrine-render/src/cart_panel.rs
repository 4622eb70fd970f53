//! Cart panel renderer.

use vitrine_core::cart::{Cart, CartItem};

use crate::escape::html_escape;

/// Render the cart panel contents: one row per item in insertion order,
/// or the empty placeholder. Always a full rebuild.
pub fn render_cart_panel(cart: &Cart) -> String {
    if cart.is_empty() {
        return r#"<p class="cart-empty">Your cart is empty.</p>"#.to_string();
    }

    let rows: String = cart
        .items
        .iter()
        .enumerate()
        .map(|(position, item)| render_cart_row(position, item))
        .collect();

    format!(
        r#"<ul class="cart-items">
        {rows}
    </ul>"#,
        rows = rows
    )
}

fn render_cart_row(position: usize, item: &CartItem) -> String {
    format!(
        r#"<li class="cart-item">
            <span class="cart-item-name">{name}</span>
            <span class="cart-item-price">{price}</span>
            <button class="remove-from-cart" data-index="{position}">Remove</button>
        </li>"#,
        name = html_escape(&item.name),
        price = item.price.display(),
        position = position
    )
}

/// Render the cart count badge.
pub fn render_item_count(cart: &Cart) -> String {
    format!(r#"<span class="cart-count">{}</span>"#, cart.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cart_renders_placeholder() {
        let html = render_cart_panel(&Cart::new());
        assert!(html.contains("Your cart is empty."));
        assert!(!html.contains("cart-item"));
    }

    #[test]
    fn test_rows_carry_position_and_formatted_price() {
        let mut cart = Cart::new();
        cart.add_item("Smartphone", "$1,299.00").unwrap();
        cart.add_item("Charger", "$19.99").unwrap();

        let html = render_cart_panel(&cart);
        assert!(html.contains(r#"data-index="0""#));
        assert!(html.contains(r#"data-index="1""#));
        assert!(html.contains("$1,299.00"));
        assert!(html.contains("$19.99"));
    }

    #[test]
    fn test_item_names_are_escaped() {
        let mut cart = Cart::new();
        cart.add_item("<script>alert(1)</script>", "$1.00").unwrap();

        let html = render_cart_panel(&cart);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_item_count_badge() {
        let mut cart = Cart::new();
        assert!(render_item_count(&cart).contains(">0<"));

        cart.add_item("Notebook", "$4.50").unwrap();
        assert!(render_item_count(&cart).contains(">1<"));
    }
}
