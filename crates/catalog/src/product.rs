//! Product read model.

use serde::{Deserialize, Serialize};

use storefront_core::ProductId;

/// A sellable item as published by the external store.
///
/// This is a read model with public fields (matching the store's response
/// shape); the view holds clones and never mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub photos: Vec<String>,
    pub category: String,
}

impl Product {
    /// Price formatted for display, e.g. `$24.99`.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// First photo URL, if the store supplied any.
    pub fn primary_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mug() -> Product {
        Product {
            id: ProductId::from("p-2"),
            name: "Blue Mug".to_string(),
            price: 12.5,
            description: "A mug, in blue.".to_string(),
            photos: vec!["https://cdn.example/mug.jpg".to_string()],
            category: "home".to_string(),
        }
    }

    #[test]
    fn display_price_keeps_two_decimals() {
        assert_eq!(mug().display_price(), "$12.50");
    }

    #[test]
    fn primary_photo_is_first_of_sequence() {
        assert_eq!(mug().primary_photo(), Some("https://cdn.example/mug.jpg"));

        let mut bare = mug();
        bare.photos.clear();
        assert_eq!(bare.primary_photo(), None);
    }

    #[test]
    fn deserializes_store_response_shape() {
        let json = serde_json::json!({
            "id": "p-2",
            "name": "Blue Mug",
            "price": 12.5,
            "description": "A mug, in blue.",
            "photos": ["https://cdn.example/mug.jpg"],
            "category": "home"
        });
        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product, mug());
    }
}
