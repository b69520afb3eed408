use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use super::error::HttpError;
use super::models::{PhotoDetail, SearchPage, parse_photo_detail, parse_search_page};
use super::urls::{detail_url, search_url};

/// Where search results, photo details and image bytes come from.
///
/// The picker only ever talks to this trait, so the session and selection
/// logic can be driven by an in-memory source in tests.
pub trait PhotoSource: Send + Sync {
    fn search(&self, query: &str, page: u64) -> Result<SearchPage, HttpError>;
    fn fetch_detail(&self, id: &str, secret: &str) -> Result<PhotoDetail, HttpError>;
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError>;
}

/// Blocking client for the Flickr Commons proxy.
pub struct CommonsClient {
    http: reqwest::blocking::Client,
    base: Url,
    page_size: u32,
}

impl CommonsClient {
    pub fn new(base: Url, page_size: u32, timeout: Duration) -> Result<Self, HttpError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("commons-picker/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http_client(http, base, page_size))
    }

    /// Use a preconfigured `reqwest` client (proxies, TLS roots, headers).
    pub fn with_http_client(http: reqwest::blocking::Client, base: Url, page_size: u32) -> Self {
        Self {
            http,
            base,
            page_size,
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, HttpError> {
        debug!("GET {url}");
        let response = self.http.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            warn!("GET {url} returned {status}");
            return Err(HttpError::Status(status.as_u16()));
        }
        Ok(response)
    }

    fn get_text(&self, url: &Url) -> Result<String, HttpError> {
        Ok(self.get(url.as_str())?.text()?)
    }
}

impl PhotoSource for CommonsClient {
    fn search(&self, query: &str, page: u64) -> Result<SearchPage, HttpError> {
        let url = search_url(&self.base, self.page_size, page, query);
        let body = self.get_text(&url)?;
        parse_search_page(&body)
    }

    fn fetch_detail(&self, id: &str, secret: &str) -> Result<PhotoDetail, HttpError> {
        let url = detail_url(&self.base, id, secret);
        let body = self.get_text(&url)?;
        parse_photo_detail(&body)
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        let bytes = self.get(url)?.bytes()?;
        Ok(bytes.to_vec())
    }
}
