//! Wishlist and cart entry shapes.

use serde::{Deserialize, Serialize};

use super::{CartItemId, Price, ProductId, ProductName};

/// One product a user wants to track.
///
/// Entries are immutable once in a wishlist. Replacing one means removing it
/// by name and adding the new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    /// Catalog identifier of the product.
    pub product_id: ProductId,
    /// Display name; the wishlist's identity key.
    pub name: ProductName,
    /// Unit price.
    pub price: Price,
    /// Image reference (URL or storage path).
    #[serde(default)]
    pub image: String,
}

impl WishlistEntry {
    /// Create a wishlist entry.
    #[must_use]
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<ProductName>,
        price: Price,
        image: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            price,
            image: image.into(),
        }
    }

    /// Whether this entry occupies the same wishlist slot as `other`.
    #[must_use]
    pub fn same_name(&self, other: &Self) -> bool {
        self.name == other.name
    }

    /// Derive the cart line for this entry: quantity 1, no cart ID yet.
    #[must_use]
    pub fn to_cart_entry(&self) -> CartEntry {
        CartEntry::from(self)
    }
}

/// A cart line derived from a wishlist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    /// Assigned by the cart; blank until then.
    #[serde(default)]
    pub id: CartItemId,
    /// Display name carried over from the wishlist.
    pub name: ProductName,
    /// Unit price carried over from the wishlist.
    pub price: Price,
    /// Image reference carried over from the wishlist.
    #[serde(default)]
    pub image: String,
    /// Number of units.
    pub quantity: u32,
}

impl CartEntry {
    /// Whether the cart has assigned this line an ID.
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        !self.id.is_blank()
    }
}

impl From<&WishlistEntry> for CartEntry {
    fn from(entry: &WishlistEntry) -> Self {
        Self {
            id: CartItemId::blank(),
            name: entry.name.clone(),
            price: entry.price,
            image: entry.image.clone(),
            quantity: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn chiron() -> WishlistEntry {
        WishlistEntry::new(
            "p-chiron",
            "Chiron",
            Price::from_amount(5_500_000),
            "chiron.png",
        )
    }

    #[test]
    fn test_to_cart_entry() {
        let cart = chiron().to_cart_entry();
        assert_eq!(cart.name.as_str(), "Chiron");
        assert_eq!(cart.price, Price::from_amount(5_500_000));
        assert_eq!(cart.image, "chiron.png");
        assert_eq!(cart.quantity, 1);
        assert!(!cart.is_assigned());
    }

    #[test]
    fn test_same_name_ignores_other_fields() {
        let a = chiron();
        let b = WishlistEntry::new("p-other", "Chiron", Price::from_amount(1), "");
        let c = WishlistEntry::new("p-chiron", "Chiron Sport", a.price, "");
        assert!(a.same_name(&b));
        assert!(!a.same_name(&c));
    }

    #[test]
    fn test_entry_json_shape() {
        let json = serde_json::to_value(chiron()).unwrap();
        assert_eq!(json["product_id"], "p-chiron");
        assert_eq!(json["name"], "Chiron");
        assert_eq!(json["price"]["amount"], "5500000");
        assert_eq!(json["price"]["currency_code"], "NPR");
    }

    #[test]
    fn test_entry_image_defaults_to_empty() {
        let entry: WishlistEntry = serde_json::from_str(
            r#"{"product_id":"p-1","name":"Jesko","price":{"amount":"3000000"}}"#,
        )
        .unwrap();
        assert_eq!(entry.image, "");
        assert_eq!(entry.name.as_str(), "Jesko");
    }
}
