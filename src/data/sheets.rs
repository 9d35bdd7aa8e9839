//! Google Sheets v4 "values" endpoint.

use std::time::{Duration, Instant};

use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::data::fetch::RangeFetcher;
use crate::error::StockerError;
use crate::sheet::Cell;

const BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Environment variable (or `.env` entry) holding the API key.
pub const API_KEY_ENV: &str = "SHEETS_API_KEY";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub struct SheetsClient {
    client: Client,
    api_key: String,
}

impl SheetsClient {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, StockerError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| StockerError::Http(format!("error creating HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    /// Build a client using `api_key` if given, else `SHEETS_API_KEY` from the
    /// environment or `.env`.
    pub fn from_env(api_key: Option<String>, timeout: Duration) -> Result<Self, StockerError> {
        dotenvy::dotenv().ok();
        let api_key = match api_key {
            Some(key) => key,
            None => std::env::var(API_KEY_ENV).map_err(|_| {
                StockerError::Config(format!("Missing {API_KEY_ENV} in environment (.env)."))
            })?,
        };
        Self::new(api_key, timeout)
    }

    fn values_url(spreadsheet_id: &str, read_range: &str) -> Result<Url, StockerError> {
        let mut url = Url::parse(BASE_URL)
            .map_err(|e| StockerError::Http(format!("invalid Sheets URL: {e}")))?;
        // Sheet names contain spaces and '/', so push them as encoded segments.
        url.path_segments_mut()
            .map_err(|()| StockerError::Http("invalid Sheets URL".to_string()))?
            .extend([spreadsheet_id, "values", read_range]);
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Cell>>,
}

impl RangeFetcher for SheetsClient {
    fn fetch_range(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
        a1_range: &str,
    ) -> Result<Vec<Vec<Cell>>, StockerError> {
        let read_range = format!("{sheet_name}!{a1_range}");
        let url = Self::values_url(spreadsheet_id, &read_range)?;

        let start = Instant::now();
        debug!(range = %read_range, "starting request");

        let resp = self
            .client
            .get(url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .map_err(|e| {
                warn!(range = %read_range, elapsed_ms = start.elapsed().as_millis() as u64, "request failed");
                StockerError::Http(format!("error getting data from sheet: {}", e.without_url()))
            })?;

        let status = resp.status();
        debug!(
            range = %read_range,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "finished request"
        );

        if !status.is_success() {
            return Err(StockerError::Http(format!(
                "error getting data from sheet: request for {read_range} failed with status {status}"
            )));
        }

        let body: ValueRange = resp
            .json()
            .map_err(|e| StockerError::Http(format!("error getting data from sheet: invalid response: {}", e.without_url())))?;

        Ok(body.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_a_single_encoded_segment() {
        let url = SheetsClient::values_url("abc123", "2025 Spring/Summer!A9:AD").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/abc123/values/2025%20Spring%2FSummer!A9:AD"
        );
    }

    #[test]
    fn missing_values_means_no_rows() {
        let body: ValueRange = serde_json::from_str(r#"{"range": "x!A1:B2", "majorDimension": "ROWS"}"#).unwrap();
        assert!(body.values.is_empty());

        let body: ValueRange =
            serde_json::from_str(r#"{"values": [["OCTOBER", "", 3], ["1"]]}"#).unwrap();
        assert_eq!(body.values.len(), 2);
        assert_eq!(body.values[0].len(), 3);
    }
}
