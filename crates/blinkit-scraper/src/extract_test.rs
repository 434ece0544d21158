use serde_json::json;

use super::*;

fn category() -> Category {
    Category {
        l1_category: "Dairy & Breakfast".to_owned(),
        l1_category_id: "14".to_owned(),
        l2_category: "Milk".to_owned(),
        l2_category_id: "922".to_owned(),
    }
}

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
}

fn product_snippet(product_id: i64, inventory: Option<i64>, badge: Option<&str>) -> Value {
    let mut cart_item = json!({
        "merchant_id": 30481,
        "product_id": product_id,
        "product_name": "Amul Taaza Toned Milk",
        "group_id": 4213,
        "price": 27,
        "mrp": 28,
        "image_url": "https://cdn.grofers.com/app/images/products/19512.jpg",
        "brand": "Amul"
    });
    if let Some(inv) = inventory {
        cart_item["inventory"] = json!(inv);
    }

    let mut snippet = json!({
        "widget_type": "product_card_snippet_type_2",
        "data": { "atc_action": { "add_to_cart": { "cart_item": cart_item } } }
    });
    if let Some(b) = badge {
        snippet["tracking"] = json!({ "common_attributes": { "badge": b } });
    }
    snippet
}

fn payload(snippets: Vec<Value>) -> Value {
    json!({ "response": { "snippets": snippets } })
}

// -----------------------------------------------------------------------
// payload shape
// -----------------------------------------------------------------------

#[test]
fn payload_without_response_yields_nothing() {
    assert!(extract_records(&json!({"error": "nope"}), &category(), run_date()).is_empty());
}

#[test]
fn payload_without_snippets_yields_nothing() {
    assert!(extract_records(&json!({"response": {}}), &category(), run_date()).is_empty());
}

#[test]
fn snippets_that_are_not_a_list_yield_nothing() {
    let body = json!({"response": {"snippets": {"widget_type": "x"}}});
    assert!(extract_records(&body, &category(), run_date()).is_empty());
}

#[test]
fn empty_snippet_list_yields_nothing() {
    assert!(extract_records(&payload(vec![]), &category(), run_date()).is_empty());
}

// -----------------------------------------------------------------------
// validity gates
// -----------------------------------------------------------------------

#[test]
fn wrong_widget_type_is_excluded() {
    let mut banner = product_snippet(1, Some(5), None);
    banner["widget_type"] = json!("image_banner_snippet");

    let records = extract_records(
        &payload(vec![banner, product_snippet(2, Some(5), None)]),
        &category(),
        run_date(),
    );

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].variant_id, "2");
}

#[test]
fn missing_widget_type_is_excluded() {
    let mut snippet = product_snippet(1, Some(5), None);
    snippet.as_object_mut().unwrap().remove("widget_type");

    assert!(extract_records(&payload(vec![snippet]), &category(), run_date()).is_empty());
}

#[test]
fn missing_cart_item_is_excluded() {
    let snippet = json!({
        "widget_type": "product_card_snippet_type_2",
        "data": { "atc_action": { "add_to_cart": {} } }
    });

    assert!(extract_records(&payload(vec![snippet]), &category(), run_date()).is_empty());
}

#[test]
fn empty_cart_item_is_excluded() {
    let snippet = json!({
        "widget_type": "product_card_snippet_type_2",
        "data": { "atc_action": { "add_to_cart": { "cart_item": {} } } }
    });

    assert!(extract_records(&payload(vec![snippet]), &category(), run_date()).is_empty());
}

#[test]
fn malformed_snippet_does_not_discard_the_page() {
    let malformed = json!({
        "widget_type": "product_card_snippet_type_2",
        "data": "not-an-object"
    });

    let records = extract_records(
        &payload(vec![malformed, json!(42), product_snippet(7, Some(1), None)]),
        &category(),
        run_date(),
    );

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].variant_id, "7");
}

// -----------------------------------------------------------------------
// derived fields
// -----------------------------------------------------------------------

#[test]
fn zero_inventory_is_out_of_stock() {
    let records = extract_records(
        &payload(vec![product_snippet(1, Some(0), None)]),
        &category(),
        run_date(),
    );
    assert_eq!(records[0].inventory, "0");
    assert_eq!(records[0].in_stock, 0);
}

#[test]
fn positive_inventory_is_in_stock() {
    let records = extract_records(
        &payload(vec![product_snippet(1, Some(12), None)]),
        &category(),
        run_date(),
    );
    assert_eq!(records[0].inventory, "12");
    assert_eq!(records[0].in_stock, 1);
}

#[test]
fn absent_inventory_defaults_to_zero() {
    let records = extract_records(
        &payload(vec![product_snippet(1, None, None)]),
        &category(),
        run_date(),
    );
    assert_eq!(records[0].inventory, "0");
    assert_eq!(records[0].in_stock, 0);
}

#[test]
fn string_inventory_is_parsed() {
    let mut snippet = product_snippet(1, None, None);
    snippet["data"]["atc_action"]["add_to_cart"]["cart_item"]["inventory"] = json!("3");

    let records = extract_records(&payload(vec![snippet]), &category(), run_date());

    assert_eq!(records[0].inventory, "3");
    assert_eq!(records[0].in_stock, 1);
}

#[test]
fn ad_badge_is_sponsored() {
    let records = extract_records(
        &payload(vec![product_snippet(1, Some(1), Some("AD"))]),
        &category(),
        run_date(),
    );
    assert_eq!(records[0].is_sponsored, 1);
}

#[test]
fn other_badge_is_not_sponsored() {
    let records = extract_records(
        &payload(vec![
            product_snippet(1, Some(1), Some("BESTSELLER")),
            product_snippet(2, Some(1), None),
        ]),
        &category(),
        run_date(),
    );
    assert_eq!(records[0].is_sponsored, 0);
    assert_eq!(records[1].is_sponsored, 0);
}

// -----------------------------------------------------------------------
// copied fields
// -----------------------------------------------------------------------

#[test]
fn category_and_date_come_from_context() {
    let records = extract_records(
        &payload(vec![product_snippet(1, Some(1), None)]),
        &category(),
        run_date(),
    );
    let record = &records[0];
    assert_eq!(record.date, run_date());
    assert_eq!(record.l1_category, "Dairy & Breakfast");
    assert_eq!(record.l1_category_id, "14");
    assert_eq!(record.l2_category, "Milk");
    assert_eq!(record.l2_category_id, "922");
}

#[test]
fn product_fields_are_copied_verbatim() {
    let records = extract_records(
        &payload(vec![product_snippet(19512, Some(4), None)]),
        &category(),
        run_date(),
    );
    let record = &records[0];
    assert_eq!(record.store_id, "30481");
    assert_eq!(record.variant_id, "19512");
    assert_eq!(record.variant_name, "Amul Taaza Toned Milk");
    assert_eq!(record.group_id, "4213");
    assert_eq!(record.selling_price, "27");
    assert_eq!(record.mrp, "28");
    assert_eq!(
        record.image_url,
        "https://cdn.grofers.com/app/images/products/19512.jpg"
    );
    assert_eq!(record.brand, "Amul");
}

#[test]
fn fractional_prices_are_not_reformatted() {
    let mut snippet = product_snippet(1, Some(1), None);
    snippet["data"]["atc_action"]["add_to_cart"]["cart_item"]["price"] = json!(26.5);

    let records = extract_records(&payload(vec![snippet]), &category(), run_date());

    assert_eq!(records[0].selling_price, "26.5");
}

#[test]
fn fractional_inventory_is_written_as_given() {
    let mut snippet = product_snippet(1, None, None);
    snippet["data"]["atc_action"]["add_to_cart"]["cart_item"]["inventory"] = json!(2.5);

    let records = extract_records(&payload(vec![snippet]), &category(), run_date());

    assert_eq!(records[0].inventory, "2.5");
    assert_eq!(records[0].in_stock, 1);
}

#[test]
fn huge_inventory_is_not_clamped() {
    let mut snippet = product_snippet(1, None, None);
    snippet["data"]["atc_action"]["add_to_cart"]["cart_item"]["inventory"] = json!(u64::MAX);

    let records = extract_records(&payload(vec![snippet]), &category(), run_date());

    assert_eq!(records[0].inventory, u64::MAX.to_string());
    assert_eq!(records[0].in_stock, 1);
}

#[test]
fn non_numeric_inventory_is_out_of_stock() {
    let mut snippet = product_snippet(1, None, None);
    snippet["data"]["atc_action"]["add_to_cart"]["cart_item"]["inventory"] = json!("many");

    let records = extract_records(&payload(vec![snippet]), &category(), run_date());

    assert_eq!(records[0].inventory, "many");
    assert_eq!(records[0].in_stock, 0);
}

#[test]
fn brand_id_is_copied_from_brand() {
    let records = extract_records(
        &payload(vec![product_snippet(1, Some(1), None)]),
        &category(),
        run_date(),
    );
    assert_eq!(records[0].brand_id, "Amul");
}

#[test]
fn brand_id_ignores_cart_item_brand_id_key() {
    let mut snippet = product_snippet(1, Some(1), None);
    snippet["data"]["atc_action"]["add_to_cart"]["cart_item"]["brand_id"] = json!(42);

    let records = extract_records(&payload(vec![snippet]), &category(), run_date());

    assert_eq!(records[0].brand_id, "Amul");
    assert_eq!(records[0].brand, "Amul");
}

#[test]
fn missing_and_null_fields_render_empty() {
    let snippet = json!({
        "widget_type": "product_card_snippet_type_2",
        "data": { "atc_action": { "add_to_cart": { "cart_item": {
            "product_id": 5,
            "mrp": null
        } } } }
    });

    let records = extract_records(&payload(vec![snippet]), &category(), run_date());

    assert_eq!(records[0].variant_id, "5");
    assert_eq!(records[0].mrp, "");
    assert_eq!(records[0].store_id, "");
    assert_eq!(records[0].brand_id, "");
}

#[test]
fn records_keep_snippet_order() {
    let records = extract_records(
        &payload(vec![
            product_snippet(3, Some(1), None),
            product_snippet(1, Some(1), None),
            product_snippet(2, Some(1), None),
        ]),
        &category(),
        run_date(),
    );
    let ids: Vec<&str> = records.iter().map(|r| r.variant_id.as_str()).collect();
    assert_eq!(ids, vec!["3", "1", "2"]);
}
