//! Response types for the Blinkit listing-widgets endpoint.
//!
//! ## Observed shape
//!
//! The body is a layout document, not a product list:
//!
//! ```text
//! { "response": { "snippets": [ <snippet>, ... ] } }
//! ```
//!
//! Each snippet is one UI widget tagged by `widget_type`. Only
//! `product_card_snippet_type_2` snippets describe products; banners, headers
//! and carousels share the same list and are skipped.
//!
//! ### Cart item
//! A product card's purchasable data lives at
//! `data.atc_action.add_to_cart.cart_item`. Field types are not stable across
//! responses (ids arrive as numbers or strings, prices as numbers), so every
//! field is kept as a raw [`serde_json::Value`] and rendered as text without
//! reformatting.
//!
//! ### Sponsored listings
//! Ads carry `tracking.common_attributes.badge == "AD"`. Organic listings
//! either omit the badge or use another value.
//!
//! Snippets are decoded one at a time so a single malformed widget cannot
//! discard the rest of the page.

use serde::Deserialize;
use serde_json::Value;

/// `widget_type` of snippets that describe a purchasable product.
pub const PRODUCT_CARD_WIDGET: &str = "product_card_snippet_type_2";

/// Tracking badge value that marks a sponsored listing.
pub const SPONSORED_BADGE: &str = "AD";

/// One typed UI widget from `response.snippets`.
#[derive(Debug, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub widget_type: Option<String>,

    #[serde(default)]
    pub data: Option<SnippetData>,

    #[serde(default)]
    pub tracking: Option<Tracking>,
}

#[derive(Debug, Deserialize)]
pub struct SnippetData {
    #[serde(default)]
    pub atc_action: Option<AtcAction>,
}

/// The "add to cart" action attached to a product card.
#[derive(Debug, Deserialize)]
pub struct AtcAction {
    #[serde(default)]
    pub add_to_cart: Option<AddToCart>,
}

#[derive(Debug, Deserialize)]
pub struct AddToCart {
    /// Kept raw so an empty object can be told apart from a populated one.
    #[serde(default)]
    pub cart_item: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct Tracking {
    #[serde(default)]
    pub common_attributes: Option<CommonAttributes>,
}

#[derive(Debug, Deserialize)]
pub struct CommonAttributes {
    #[serde(default)]
    pub badge: Option<Value>,
}

/// Purchasable product fields from a product card.
#[derive(Debug, Default, Deserialize)]
pub struct CartItem {
    /// Dark-store id serving this location.
    #[serde(default)]
    pub merchant_id: Option<Value>,
    #[serde(default)]
    pub product_id: Option<Value>,
    #[serde(default)]
    pub product_name: Option<Value>,
    #[serde(default)]
    pub group_id: Option<Value>,
    /// Selling price.
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub mrp: Option<Value>,
    /// Units available, written to the output as given; absent means none.
    #[serde(default)]
    pub inventory: Option<Value>,
    #[serde(default)]
    pub image_url: Option<Value>,
    #[serde(default)]
    pub brand: Option<Value>,
}

impl Snippet {
    /// Returns `true` when this widget is a product card.
    #[must_use]
    pub fn is_product_card(&self) -> bool {
        self.widget_type.as_deref() == Some(PRODUCT_CARD_WIDGET)
    }

    /// Returns the cart item when present and non-empty.
    #[must_use]
    pub fn cart_item(&self) -> Option<&serde_json::Map<String, Value>> {
        self.data
            .as_ref()?
            .atc_action
            .as_ref()?
            .add_to_cart
            .as_ref()?
            .cart_item
            .as_ref()?
            .as_object()
            .filter(|item| !item.is_empty())
    }

    /// Returns `true` when the tracking badge marks a sponsored listing.
    #[must_use]
    pub fn is_sponsored(&self) -> bool {
        self.tracking
            .as_ref()
            .and_then(|t| t.common_attributes.as_ref())
            .and_then(|a| a.badge.as_ref())
            .and_then(Value::as_str)
            == Some(SPONSORED_BADGE)
    }
}
