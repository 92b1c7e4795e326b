//! Catalog fetcher: one GET returning every character record.

use reqwest::Method;
use tracing::{info, warn};
use url::Url;

use wfstats_core::CharacterRecord;

use crate::auth::TokenProvider;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpBackend;

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: HttpBackend,
    url: Url,
}

impl CatalogClient {
    pub fn new(url: &str, timeout_secs: u64) -> ClientResult<Self> {
        let url = Url::parse(url).map_err(|e| ClientError::Config {
            message: format!("invalid API URL '{}': {}", url, e),
        })?;
        Ok(Self {
            http: HttpBackend::new(timeout_secs, TokenProvider::None)?,
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetch the catalog. Any non-success status aborts.
    pub async fn fetch(&self) -> ClientResult<Vec<CharacterRecord>> {
        info!(url = %self.url, "fetching catalog");
        let records: Vec<CharacterRecord> =
            self.http.request_json(Method::GET, &self.url, None).await?;

        if records.is_empty() {
            warn!(url = %self.url, "catalog is empty");
        } else {
            info!(records = records.len(), "catalog fetched");
        }
        Ok(records)
    }
}
