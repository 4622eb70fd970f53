//! Order summary renderer.

use vitrine_core::cart::Cart;

use crate::escape::html_escape;

/// Render the order summary: per-item lines, then the items subtotal,
/// the fixed base amount, and the final total. Empty carts get a
/// placeholder instead.
pub fn render_order_summary(cart: &Cart) -> String {
    if cart.is_empty() {
        return r#"<p class="summary-empty">No items in the cart yet.</p>"#.to_string();
    }

    let lines: String = cart
        .items
        .iter()
        .map(|item| {
            format!(
                r#"<li class="order-summary-item">
            <span class="order-summary-name">{name}</span>
            <span class="order-summary-price">{price}</span>
        </li>"#,
                name = html_escape(&item.name),
                price = item.price.display()
            )
        })
        .collect();

    format!(
        r#"<ul class="order-summary-list">
        {lines}
    </ul>
    <div class="order-summary-totals">
        <p class="order-subtotal">Items Subtotal: <span>{subtotal}</span></p>
        <p class="order-base">Base Amount: <span>{base}</span></p>
        <p class="order-total">Order Total: <strong>{total}</strong></p>
    </div>"#,
        lines = lines,
        subtotal = cart.items_subtotal().display(),
        base = cart.base_amount.display(),
        total = cart.total().display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_core::price::Price;

    #[test]
    fn test_empty_cart_renders_placeholder() {
        let html = render_order_summary(&Cart::new());
        assert!(html.contains("No items in the cart yet."));
        assert!(!html.contains("order-total"));
    }

    #[test]
    fn test_totals_lines_use_grouped_formatting() {
        let mut cart = Cart::new().with_base_amount(Price::new(500));
        cart.add_item("Smartphone", "$1,299.00").unwrap();
        cart.add_item("Case", "$25.50").unwrap();

        let html = render_order_summary(&cart);
        assert!(html.contains("Items Subtotal: <span>$1,324.50</span>"));
        assert!(html.contains("Base Amount: <span>$5.00</span>"));
        assert!(html.contains("Order Total: <strong>$1,329.50</strong>"));
    }

    #[test]
    fn test_every_item_gets_a_line() {
        let mut cart = Cart::new();
        cart.add_item("First", "$1.00").unwrap();
        cart.add_item("Second", "$2.00").unwrap();

        let html = render_order_summary(&cart);
        assert_eq!(html.matches("order-summary-item").count(), 2);
    }
}
