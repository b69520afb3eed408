//! Test helpers: a scripted [`PhotoSource`] and builders for photo records.
//!
//! Only available when compiled with `cfg(test)`.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::api::{HttpError, PhotoDetail, PhotoOwner, PhotoSource, PhotoSummary, SearchPage};

/// A [`PhotoSource`] that answers from queues filled in by the test.
///
/// Search responses are handed out in the order they were pushed, regardless
/// of query or page. Every call is recorded.
#[derive(Default)]
pub struct FakeSource {
    pages: Mutex<VecDeque<Result<SearchPage, HttpError>>>,
    details: Mutex<HashMap<String, Result<PhotoDetail, HttpError>>>,
    bytes: Mutex<HashMap<String, Vec<u8>>>,
    search_calls: Mutex<Vec<(String, u64)>>,
    detail_calls: Mutex<Vec<(String, String)>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_page(&self, page: Result<SearchPage, HttpError>) -> &Self {
        self.pages.lock().unwrap().push_back(page);
        self
    }

    pub fn set_detail(&self, id: &str, detail: Result<PhotoDetail, HttpError>) -> &Self {
        self.details.lock().unwrap().insert(id.to_string(), detail);
        self
    }

    pub fn set_bytes(&self, url: &str, bytes: &[u8]) -> &Self {
        self.bytes
            .lock()
            .unwrap()
            .insert(url.to_string(), bytes.to_vec());
        self
    }

    pub fn search_calls(&self) -> Vec<(String, u64)> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn detail_calls(&self) -> Vec<(String, String)> {
        self.detail_calls.lock().unwrap().clone()
    }
}

impl PhotoSource for FakeSource {
    fn search(&self, query: &str, page: u64) -> Result<SearchPage, HttpError> {
        self.search_calls
            .lock()
            .unwrap()
            .push((query.to_string(), page));
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::Transport("no scripted page".to_string())))
    }

    fn fetch_detail(&self, id: &str, secret: &str) -> Result<PhotoDetail, HttpError> {
        self.detail_calls
            .lock()
            .unwrap()
            .push((id.to_string(), secret.to_string()));
        self.details
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .unwrap_or(Err(HttpError::Status(404)))
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, HttpError> {
        self.bytes
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or(HttpError::Status(404))
    }
}

pub fn summary(id: &str) -> PhotoSummary {
    PhotoSummary {
        id: id.to_string(),
        secret: format!("secret{id}"),
        server: "65535".to_string(),
        farm: 66,
        title: format!("Photo {id}"),
    }
}

/// `count` summaries with ids `{prefix}0`, `{prefix}1`, ...
pub fn summaries(prefix: &str, count: usize) -> Vec<PhotoSummary> {
    (0..count).map(|i| summary(&format!("{prefix}{i}"))).collect()
}

pub fn page(photos: Vec<PhotoSummary>, page: u64, page_count: u64) -> SearchPage {
    let total_results = if page_count == 0 {
        0
    } else {
        (page_count * 25).max(photos.len() as u64)
    };
    SearchPage {
        photos,
        page,
        page_count,
        total_results,
    }
}

pub fn detail_for(summary: &PhotoSummary) -> PhotoDetail {
    PhotoDetail {
        id: summary.id.clone(),
        secret: summary.secret.clone(),
        server: summary.server.clone(),
        farm: summary.farm,
        original_secret: format!("orig{}", summary.id),
        title: summary.title.clone(),
        description: format!("Description of {}", summary.title),
        owner: PhotoOwner {
            username: "The Library of Congress".to_string(),
            realname: None,
        },
        taken: None,
    }
}
