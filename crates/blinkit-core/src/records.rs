use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used for the `date` column and the output file name.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A delivery location, passed to the listing API as `lat`/`lon` headers.
///
/// Coordinates are kept as the exact strings read from the input file so the
/// request carries them unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: String,
    pub longitude: String,
}

/// A two-level category pair from the categories input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub l1_category: String,
    pub l1_category_id: String,
    pub l2_category: String,
    pub l2_category_id: String,
}

/// One unit of scraping work: a single category listing at a single location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub location: Location,
    pub category: Category,
}

/// A product listing flattened into one output row.
///
/// Product fields are copied verbatim from the API cart item and rendered as
/// text; numbers are not reformatted and prices carry no currency handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Run date, not a value from the API payload.
    pub date: NaiveDate,
    pub l1_category: String,
    pub l1_category_id: String,
    pub l2_category: String,
    pub l2_category_id: String,
    pub store_id: String,
    pub variant_id: String,
    pub variant_name: String,
    pub group_id: String,
    pub selling_price: String,
    pub mrp: String,
    /// `1` when `inventory` is a number above zero, otherwise `0`.
    pub in_stock: u8,
    /// Inventory as the API reported it, `0` when the field was absent.
    pub inventory: String,
    /// `1` when the listing carries the `"AD"` tracking badge.
    pub is_sponsored: u8,
    pub image_url: String,
    pub brand_id: String,
    pub brand: String,
}

impl ProductRecord {
    /// Column names in declaration order; the output header row.
    pub const FIELDS: [&'static str; 17] = [
        "date",
        "l1_category",
        "l1_category_id",
        "l2_category",
        "l2_category_id",
        "store_id",
        "variant_id",
        "variant_name",
        "group_id",
        "selling_price",
        "mrp",
        "in_stock",
        "inventory",
        "is_sponsored",
        "image_url",
        "brand_id",
        "brand",
    ];

    /// Renders the record as output cells, ordered like [`Self::FIELDS`].
    #[must_use]
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.date.format(DATE_FORMAT).to_string(),
            self.l1_category.clone(),
            self.l1_category_id.clone(),
            self.l2_category.clone(),
            self.l2_category_id.clone(),
            self.store_id.clone(),
            self.variant_id.clone(),
            self.variant_name.clone(),
            self.group_id.clone(),
            self.selling_price.clone(),
            self.mrp.clone(),
            self.in_stock.to_string(),
            self.inventory.clone(),
            self.is_sponsored.to_string(),
            self.image_url.clone(),
            self.brand_id.clone(),
            self.brand.clone(),
        ]
    }

    /// Rebuilds a record from cells produced by [`Self::to_row`].
    ///
    /// Returns `None` when the cell count is wrong or a typed column
    /// (`date`, `in_stock`, `is_sponsored`) does not parse.
    #[must_use]
    pub fn from_row(cells: &[String]) -> Option<Self> {
        let [
            date,
            l1_category,
            l1_category_id,
            l2_category,
            l2_category_id,
            store_id,
            variant_id,
            variant_name,
            group_id,
            selling_price,
            mrp,
            in_stock,
            inventory,
            is_sponsored,
            image_url,
            brand_id,
            brand,
        ] = cells
        else {
            return None;
        };

        Some(Self {
            date: NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?,
            l1_category: l1_category.clone(),
            l1_category_id: l1_category_id.clone(),
            l2_category: l2_category.clone(),
            l2_category_id: l2_category_id.clone(),
            store_id: store_id.clone(),
            variant_id: variant_id.clone(),
            variant_name: variant_name.clone(),
            group_id: group_id.clone(),
            selling_price: selling_price.clone(),
            mrp: mrp.clone(),
            in_stock: in_stock.parse().ok()?,
            inventory: inventory.clone(),
            is_sponsored: is_sponsored.parse().ok()?,
            image_url: image_url.clone(),
            brand_id: brand_id.clone(),
            brand: brand.clone(),
        })
    }
}
