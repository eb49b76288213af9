use serde::{Deserialize, Serialize};

/// Highest rating a product can carry.
pub const MAX_RATING: u8 = 5;

/// Domain representation of a product shown on the storefront.
///
/// Field names follow the JSON shape stored under the `wishlist` key, so
/// records written by earlier sessions rehydrate unchanged. Category fields
/// were optional in that shape and default to empty strings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name of the product.
    pub name: String,
    /// Longer description shown on the product card.
    pub description: String,
    /// Non-negative price in the storefront currency.
    pub price: f64,
    /// Star rating between 0 and [`MAX_RATING`].
    pub rating: u8,
    /// Number of reviews backing the rating.
    pub reviews: u32,
    /// URI of the product image.
    pub image: String,
    /// Color category.
    #[serde(default)]
    pub color: String,
    /// Product type category (`T-Shirt`, `Jeans`, ...).
    #[serde(rename = "type", default)]
    pub product_type: String,
    /// Seller category.
    #[serde(default)]
    pub seller: String,
}

/// Payload used to assemble a [`Product`] outside of deserialization.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub rating: u8,
    pub reviews: u32,
    pub image: String,
    pub color: String,
    pub product_type: String,
    pub seller: String,
}

impl NewProduct {
    /// Build a new product payload with the required identity and price.
    pub fn new(id: i32, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            rating: 0,
            reviews: 0,
            image: String::new(),
            color: String::new(),
            product_type: String::new(),
            seller: String::new(),
        }
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a rating and the number of reviews behind it.
    pub fn with_rating(mut self, rating: u8, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// Attach the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Attach the color, type and seller categories.
    pub fn with_categories(
        mut self,
        color: impl Into<String>,
        product_type: impl Into<String>,
        seller: impl Into<String>,
    ) -> Self {
        self.color = color.into();
        self.product_type = product_type.into();
        self.seller = seller.into();
        self
    }

    /// Finish the payload, clamping the rating and price into their valid ranges.
    pub fn build(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: if self.price.is_finite() {
                self.price.max(0.0)
            } else {
                0.0
            },
            rating: self.rating.min(MAX_RATING),
            reviews: self.reviews,
            image: self.image,
            color: self.color,
            product_type: self.product_type,
            seller: self.seller,
        }
    }
}

impl From<NewProduct> for Product {
    fn from(value: NewProduct) -> Self {
        value.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_records_without_categories() {
        let json = r#"{"id":3,"name":"Product 3","description":"d","price":42,
            "rating":4,"reviews":10,"image":"https://picsum.photos/seed/3/400/300"}"#;

        let product: Product = serde_json::from_str(json).expect("should parse");

        assert_eq!(product.id, 3);
        assert_eq!(product.price, 42.0);
        assert!(product.color.is_empty());
        assert!(product.product_type.is_empty());
    }

    #[test]
    fn serializes_type_under_original_key() {
        let product = NewProduct::new(1, "Coat", 99.0)
            .with_categories("Black", "Jacket", "Seller B")
            .build();

        let value = serde_json::to_value(&product).expect("should serialize");

        assert_eq!(value.get("type").and_then(|v| v.as_str()), Some("Jacket"));
        assert!(value.get("product_type").is_none());
    }

    #[test]
    fn build_clamps_rating_and_negative_price() {
        let product = NewProduct::new(1, "Odd", -5.0).with_rating(9, 1).build();

        assert_eq!(product.rating, MAX_RATING);
        assert_eq!(product.price, 0.0);
    }
}
