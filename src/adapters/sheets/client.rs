//! Spreadsheet values API HTTP transport.
//!
//! Wraps the four `values` endpoints the meal store needs: read a range,
//! append rows, clear a range and overwrite a range. Authentication is an
//! API key passed as the `key` query parameter, so request URLs are
//! scrubbed before they reach a log line and stripped from transport
//! errors.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use tracing::debug;

use crate::domain::errors::GridFailure;
use crate::domain::models::GridRow;
use crate::domain::ports::{GridTransport, SheetTarget};
use crate::infrastructure::logging::SecretScrubber;

use super::models::{ValueRange, ValuesRequest};

/// Rows are written verbatim, never parsed as formulas or dates.
const VALUE_INPUT_OPTION: &str = "RAW";

/// HTTP transport for the spreadsheet values API.
#[derive(Debug, Clone)]
pub struct SheetsHttpTransport {
    /// The underlying HTTP client.
    http: Client,
    /// Endpoint the sheet id and `values/...` segments are appended to.
    base_url: Url,
    scrubber: SecretScrubber,
}

impl SheetsHttpTransport {
    /// Create a transport with a pooled client for `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("mealsheet/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .context("Failed to build HTTP client")?;
        Self::with_client(http, base_url)
    }

    /// Create a transport around an existing client.
    pub fn with_client(http: Client, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid values API base URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            bail!("Values API base URL cannot carry a path: {base_url}");
        }
        Ok(Self {
            http,
            base_url,
            scrubber: SecretScrubber::new(),
        })
    }

    /// Build `{base}/{sheet_id}/values/{range}{suffix}` with the given query.
    fn values_url(
        &self,
        target: SheetTarget<'_>,
        range: &str,
        suffix: &str,
        query: &[(&str, &str)],
    ) -> Result<Url, GridFailure> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GridFailure::Malformed("base URL cannot carry a path".to_string()))?
            .pop_if_empty()
            .push(target.sheet_id)
            .push("values")
            .push(&format!("{range}{suffix}"));
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
            pairs.append_pair("key", target.api_key);
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, url = %self.scrubber.scrub(url.as_str()), "sending values request");
        self.http.request(method, url)
    }

    /// Send a request, turning network errors and non-success statuses
    /// into [`GridFailure`]s.
    async fn send(&self, request: RequestBuilder) -> Result<Response, GridFailure> {
        let response = request
            .send()
            .await
            .map_err(|e| GridFailure::Transport(Box::new(e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(
                status = status.as_u16(),
                body = %self.scrubber.scrub(&body),
                "values request rejected"
            );
            return Err(GridFailure::status(
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        Ok(response)
    }

    async fn write(
        &self,
        method: Method,
        url: Url,
        rows: &[GridRow],
    ) -> Result<(), GridFailure> {
        let request = self
            .request(method, url)
            .json(&ValuesRequest { values: rows });
        self.send(request).await.map(drop)
    }
}

#[async_trait]
impl GridTransport for SheetsHttpTransport {
    async fn get_values(
        &self,
        target: SheetTarget<'_>,
        range: &str,
    ) -> Result<Vec<GridRow>, GridFailure> {
        let url = self.values_url(target, range, "", &[])?;
        let response = self.send(self.request(Method::GET, url)).await?;

        let value_range = response
            .json::<ValueRange>()
            .await
            .map_err(|e| GridFailure::Malformed(e.without_url().to_string()))?;
        Ok(value_range.into_rows())
    }

    async fn append_values(
        &self,
        target: SheetTarget<'_>,
        range: &str,
        rows: &[GridRow],
    ) -> Result<(), GridFailure> {
        let url = self.values_url(
            target,
            range,
            ":append",
            &[("valueInputOption", VALUE_INPUT_OPTION)],
        )?;
        self.write(Method::POST, url, rows).await
    }

    async fn clear_values(
        &self,
        target: SheetTarget<'_>,
        range: &str,
    ) -> Result<(), GridFailure> {
        let url = self.values_url(target, range, ":clear", &[])?;
        let request = self
            .request(Method::POST, url)
            .json(&serde_json::json!({}));
        self.send(request).await.map(drop)
    }

    async fn update_values(
        &self,
        target: SheetTarget<'_>,
        range: &str,
        rows: &[GridRow],
    ) -> Result<(), GridFailure> {
        let url = self.values_url(
            target,
            range,
            "",
            &[("valueInputOption", VALUE_INPUT_OPTION)],
        )?;
        self.write(Method::PUT, url, rows).await
    }
}
