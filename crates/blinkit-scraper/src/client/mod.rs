//! HTTP client for Blinkit's category listing endpoint.

use std::time::Duration;

use blinkit_core::{Category, Task};
use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::ScraperError;

/// HTTP client for Blinkit's `listing_widgets` endpoint.
///
/// Each call is a single attempt: non-2xx statuses, transport failures,
/// undecodable bodies and empty bodies all surface as [`ScraperError`].
/// Retrying is the caller's concern (see [`crate::retry`]).
pub struct BlinkitClient {
    client: Client,
    base_url: Url,
}

impl BlinkitClient {
    /// Creates a `BlinkitClient` for `base_url` with the given `User-Agent`.
    ///
    /// With `timeout_secs = None` no request timeout is configured and a
    /// stalled response waits indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if `base_url` does not parse,
    /// or [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        base_url: &str,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ScraperError> {
        let parsed = Url::parse(base_url).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: parsed,
        })
    }

    /// Fetches the raw listing document for one task.
    ///
    /// Sends `POST <base_url>?l0_cat=..&l1_cat=..` with the task's coordinates
    /// in the `lat`/`lon` headers and an empty JSON object as the body.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on network or TLS failure.
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx status.
    /// - [`ScraperError::Deserialize`] if the body is not JSON.
    /// - [`ScraperError::EmptyResponse`] if the body is `null` or `{}`.
    pub async fn fetch_listing(&self, task: &Task) -> Result<Value, ScraperError> {
        let url = self.listing_url(&task.category);

        let response = self
            .client
            .post(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .header("lat", &task.location.latitude)
            .header("lon", &task.location.longitude)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let payload =
            serde_json::from_str::<Value>(&body).map_err(|e| ScraperError::Deserialize {
                context: format!("listing for {}", task.category.l2_category),
                source: e,
            })?;

        if is_empty_payload(&payload) {
            return Err(ScraperError::EmptyResponse {
                url: url.to_string(),
            });
        }

        Ok(payload)
    }

    /// Builds the listing URL for `category`.
    ///
    /// `l1_category_id` is sent as `l0_cat` and `l2_category_id` as `l1_cat`;
    /// the endpoint numbers its levels from zero.
    #[must_use]
    pub fn listing_url(&self, category: &Category) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("l0_cat", &category.l1_category_id)
            .append_pair("l1_cat", &category.l2_category_id);
        url
    }
}

fn is_empty_payload(payload: &Value) -> bool {
    match payload {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
