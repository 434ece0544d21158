//! Extraction of [`ProductRecord`]s from raw listing responses.
//!
//! Shape problems never fail extraction: a payload without
//! `response.snippets` yields no records, and individual snippets that do not
//! decode, are not product cards, or lack a cart item are skipped.

use blinkit_core::{Category, ProductRecord};
use chrono::NaiveDate;
use serde_json::Value;

use crate::types::{CartItem, Snippet};

/// Extracts every product card in `payload` as a [`ProductRecord`].
///
/// Category columns come from `category`; product columns are copied from
/// each cart item as-is. `date` is stamped on every record.
#[must_use]
pub fn extract_records(
    payload: &Value,
    category: &Category,
    date: NaiveDate,
) -> Vec<ProductRecord> {
    let Some(snippets) = payload
        .get("response")
        .and_then(|r| r.get("snippets"))
        .and_then(Value::as_array)
    else {
        tracing::debug!(
            l2_category = %category.l2_category,
            "response has no snippets list; nothing to extract"
        );
        return Vec::new();
    };

    snippets
        .iter()
        .filter_map(|raw| serde_json::from_value::<Snippet>(raw.clone()).ok())
        .filter(Snippet::is_product_card)
        .filter_map(|snippet| {
            let cart_item = snippet.cart_item()?;
            let item: CartItem = serde_json::from_value(Value::Object(cart_item.clone())).ok()?;
            Some(build_record(item, snippet.is_sponsored(), category, date))
        })
        .collect()
}

fn build_record(
    item: CartItem,
    is_sponsored: bool,
    category: &Category,
    date: NaiveDate,
) -> ProductRecord {
    let in_stock = item.inventory.as_ref().is_some_and(has_stock);
    let inventory = item
        .inventory
        .as_ref()
        .map_or_else(|| "0".to_owned(), |v| text(Some(v)));

    ProductRecord {
        date,
        l1_category: category.l1_category.clone(),
        l1_category_id: category.l1_category_id.clone(),
        l2_category: category.l2_category.clone(),
        l2_category_id: category.l2_category_id.clone(),
        store_id: text(item.merchant_id.as_ref()),
        variant_id: text(item.product_id.as_ref()),
        variant_name: text(item.product_name.as_ref()),
        group_id: text(item.group_id.as_ref()),
        selling_price: text(item.price.as_ref()),
        mrp: text(item.mrp.as_ref()),
        in_stock: u8::from(in_stock),
        inventory,
        is_sponsored: u8::from(is_sponsored),
        image_url: text(item.image_url.as_ref()),
        // Both brand columns carry the cart item's `brand`.
        brand_id: text(item.brand.as_ref()),
        brand: text(item.brand.as_ref()),
    }
}

/// Renders a JSON value as an output cell: strings unquoted, `null` or
/// absent as empty, anything else in its JSON form.
fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Whether an inventory value counts as in stock (a number above zero).
fn has_stock(value: &Value) -> bool {
    let count = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    count.is_some_and(|n| n > 0.0)
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
