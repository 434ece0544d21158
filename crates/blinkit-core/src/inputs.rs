use std::collections::HashMap;
use std::path::Path;

use crate::delimited::parse_rows;
use crate::records::{Category, Location};
use crate::ConfigError;

/// Load the locations input file (`latitude`, `longitude` columns).
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, has no header, lacks a
/// required column, or contains a row whose width differs from the header.
pub fn load_locations(path: &Path) -> Result<Vec<Location>, ConfigError> {
    let rows = load_table(path, &["latitude", "longitude"])?;
    let locations: Vec<Location> = rows
        .into_iter()
        .map(|mut row| Location {
            latitude: take(&mut row, "latitude"),
            longitude: take(&mut row, "longitude"),
        })
        .collect();

    tracing::info!(path = %path.display(), rows = locations.len(), "read locations file");
    Ok(locations)
}

/// Load the categories input file (`l1_category`, `l1_category_id`,
/// `l2_category`, `l2_category_id` columns).
///
/// # Errors
///
/// Returns `ConfigError` under the same conditions as [`load_locations`].
pub fn load_categories(path: &Path) -> Result<Vec<Category>, ConfigError> {
    let rows = load_table(
        path,
        &["l1_category", "l1_category_id", "l2_category", "l2_category_id"],
    )?;
    let categories: Vec<Category> = rows
        .into_iter()
        .map(|mut row| Category {
            l1_category: take(&mut row, "l1_category"),
            l1_category_id: take(&mut row, "l1_category_id"),
            l2_category: take(&mut row, "l2_category"),
            l2_category_id: take(&mut row, "l2_category_id"),
        })
        .collect();

    tracing::info!(path = %path.display(), rows = categories.len(), "read categories file");
    Ok(categories)
}

fn take(row: &mut HashMap<String, String>, column: &str) -> String {
    row.remove(column).unwrap_or_default()
}

/// Reads a headed delimited file into one column-name → value map per row.
///
/// Extra columns are allowed and ignored by callers; every name in `required`
/// must appear in the header.
fn load_table(
    path: &Path,
    required: &[&str],
) -> Result<Vec<HashMap<String, String>>, ConfigError> {
    let display = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::InputFileIo {
        path: display.clone(),
        source: e,
    })?;
    // Tolerate a UTF-8 byte order mark from spreadsheet exports.
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    let mut rows = parse_rows(content);
    let (_, header) = rows.next().ok_or_else(|| ConfigError::InputFileParse {
        path: display.clone(),
        line: 1,
        reason: "file is empty; expected a header row".to_string(),
    })?;
    let header: Vec<String> = header.into_iter().map(|h| h.trim().to_string()).collect();

    for column in required {
        if !header.iter().any(|h| h == column) {
            return Err(ConfigError::InputFileParse {
                path: display,
                line: 1,
                reason: format!("missing required column '{column}'"),
            });
        }
    }

    rows.map(|(line, fields)| {
        if fields.len() != header.len() {
            return Err(ConfigError::InputFileParse {
                path: display.clone(),
                line,
                reason: format!(
                    "expected {} fields, found {}",
                    header.len(),
                    fields.len()
                ),
            });
        }
        Ok(header.iter().cloned().zip(fields).collect())
    })
    .collect()
}

#[cfg(test)]
#[path = "inputs_test.rs"]
mod tests;
