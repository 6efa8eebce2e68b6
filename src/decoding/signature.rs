//! Method signature directories
//!
//! The decoder only knows a call's 4-byte selector; a directory maps it back
//! to a human-readable signature such as `transfer(address,uint256)`.

use std::collections::HashMap;
use std::future::Future;

use alloy::hex;
use alloy::primitives::{keccak256, Selector};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// Public 4byte.directory signature endpoint
pub const FOUR_BYTE_API_URL: &str = "https://www.4byte.directory/api/v1/signatures/";

/// Resolves 4-byte selectors to text signatures.
///
/// Lookups are fallible and may be slow; `Ok(None)` means the directory has
/// no entry for the selector.
pub trait SignatureLookup {
    fn lookup(&self, selector: Selector) -> impl Future<Output = Result<Option<String>>> + Send;
}

#[derive(Debug, Deserialize)]
struct SignatureResponse {
    #[serde(default)]
    results: Vec<SignatureEntry>,
}

#[derive(Debug, Deserialize)]
struct SignatureEntry {
    text_signature: String,
}

/// Client for the 4byte.directory HTTP API
#[derive(Debug, Clone)]
pub struct FourByteDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl Default for FourByteDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl FourByteDirectory {
    /// Creates a client for the public directory
    pub fn new() -> Self {
        Self::with_base_url(FOUR_BYTE_API_URL)
    }

    /// Creates a client for a self-hosted or mocked directory
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Replaces the HTTP client, e.g. to set timeouts or a proxy
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }
}

impl SignatureLookup for FourByteDirectory {
    async fn lookup(&self, selector: Selector) -> Result<Option<String>> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::SignatureLookupFailed(format!("invalid directory URL: {e}")))?;
        url.query_pairs_mut()
            .append_pair("hex_signature", &hex::encode_prefixed(selector));
        debug!(%url, "querying signature directory");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body: SignatureResponse = response
            .json()
            .await
            .map_err(|e| Error::SignatureLookupFailed(format!("invalid response body: {e}")))?;

        // The directory may list colliding signatures; the first one is used
        Ok(body.results.into_iter().next().map(|entry| entry.text_signature))
    }
}

/// Fixed in-memory directory, for offline use and tests
#[derive(Debug, Clone, Default)]
pub struct StaticSignatures {
    signatures: HashMap<Selector, String>,
}

impl StaticSignatures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a text signature under its computed selector
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        let signature = signature.into();
        self.signatures.insert(selector_of(&signature), signature);
        self
    }

    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }
}

impl SignatureLookup for StaticSignatures {
    async fn lookup(&self, selector: Selector) -> Result<Option<String>> {
        Ok(self.signatures.get(&selector).cloned())
    }
}

/// Computes the 4-byte selector of a text signature
pub fn selector_of(signature: &str) -> Selector {
    let normalized = signature.replace(' ', "");
    Selector::from_slice(&keccak256(normalized.as_bytes())[..4])
}
