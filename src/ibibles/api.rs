use async_trait::async_trait;
use reqwest::Client;

use crate::bible::ParsedReference;
use crate::config::Config;
use crate::constants::endpoint::TRANSLATION_PREFIX;
use crate::error::{Error, Result};
use crate::services::scripture::VerseSource;

/// Client for the ibibles.net quote endpoint
///
/// One GET per lookup, no retries. The endpoint takes the reference as a
/// bare query string: `quote.php?kor-john/3:16-18`.
#[derive(Clone)]
pub struct IbiblesClient {
    endpoint: String,
    client: Client,
}

impl IbiblesClient {
    /// Create a new client from config
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            client: Client::builder()
                .timeout(config.timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Full request URL for a lookup key such as `john/3:16`
    pub fn quote_url(&self, lookup_key: &str) -> String {
        format!("{}?{}-{}", self.endpoint, TRANSLATION_PREFIX, lookup_key)
    }

    /// GET a lookup key and return the body as text
    pub async fn get_quote(&self, lookup_key: &str) -> Result<String> {
        let url = self.quote_url(lookup_key);
        tracing::debug!("Fetching {url}");

        let resp = self.client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Request for {lookup_key} failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::remote_status(
                format!("Request for {lookup_key} returned {status}"),
                status.as_u16(),
            ));
        }

        resp.text().await
            .map_err(|e| Error::Network(format!("Reading body for {lookup_key} failed: {e}")))
    }
}

#[async_trait]
impl VerseSource for IbiblesClient {
    async fn fetch(&self, reference: &ParsedReference) -> Result<String> {
        let key = reference
            .lookup_key()
            .ok_or_else(|| Error::UnresolvedBook(reference.book_alias.clone()))?;
        self.get_quote(&key).await
    }
}
