//! Static page content: product catalog entries and carousel slides.
//!
//! Both are read once at startup from page configuration. Price text stays
//! unparsed until an entry is added to the cart.

use serde::{Deserialize, Serialize};

/// A product entry on the storefront page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Display name.
    pub name: String,
    /// Price as displayed (e.g., "$1,299.00"). Parsed only at add time.
    pub price_text: String,
    /// Image URL for the product card.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Short description for the product card.
    #[serde(default)]
    pub description: Option<String>,
}

impl CatalogEntry {
    /// Create a new catalog entry.
    pub fn new(name: impl Into<String>, price_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price_text: price_text.into(),
            image_url: None,
            description: None,
        }
    }

    /// Set the card image URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the card description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A slide in the highlights carousel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slide {
    /// Slide image URL.
    pub image_url: String,
    /// Caption shown over the slide.
    #[serde(default)]
    pub caption: Option<String>,
}

impl Slide {
    /// Create a new slide.
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            caption: None,
        }
    }

    /// Set the slide caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }
}

/// The product catalog shown on the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Catalog {
    /// Entries in display order.
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from entries.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Get the entry at `index`.
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_entry_builder() {
        let entry = CatalogEntry::new("Gaming Laptop", "$1,299.00")
            .with_image_url("/img/laptop.jpg")
            .with_description("High-performance laptop");

        assert_eq!(entry.name, "Gaming Laptop");
        assert_eq!(entry.price_text, "$1,299.00");
        assert_eq!(entry.image_url.as_deref(), Some("/img/laptop.jpg"));
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new("A", "$1.00"),
            CatalogEntry::new("B", "$2.00"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).map(|e| e.name.as_str()), Some("B"));
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn test_entry_deserializes_without_optional_fields() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{"name":"Mouse","price_text":"$24.99"}"#).unwrap();
        assert_eq!(entry.name, "Mouse");
        assert!(entry.image_url.is_none());
        assert!(entry.description.is_none());
    }
}
