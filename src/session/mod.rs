//! Paged search sessions.
//!
//! A [`SearchSession`] accumulates result pages for one query. Every page
//! request carries the id of the session that issued it, and a response is
//! only applied when that id (and the page number) is still the one the
//! session is waiting for. [`SearchCoordinator`] owns the single live session
//! and replaces it whenever the query changes, which makes responses for the
//! old query inert.

use tracing::{debug, info, warn};

use crate::api::{HttpError, PhotoSource, PhotoSummary, SearchPage};


pub type SessionId = u64;

/// A page fetch issued by a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub session: SessionId,
    pub query: String,
    pub page: u64,
}

impl PageRequest {
    /// Run the request against a source. Called from worker threads.
    pub fn execute(&self, source: &dyn PhotoSource) -> PageResponse {
        PageResponse {
            session: self.session,
            page: self.page,
            result: source.search(&self.query, self.page),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageResponse {
    pub session: SessionId,
    pub page: u64,
    pub result: Result<SearchPage, HttpError>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// First page requested, nothing received yet.
    Starting,
    Results,
    Error(String),
}

pub struct SearchSession {
    id: SessionId,
    query: String,
    status: SessionStatus,
    loading: bool,
    results: Vec<PhotoSummary>,
    total_results: u64,
    has_more: bool,
    /// Last page whose results were appended; 0 before the first one lands.
    last_page: u64,
    pending_page: Option<u64>,
}

impl SearchSession {
    /// Create a session and the request for its first page.
    pub fn start(id: SessionId, query: impl Into<String>) -> (Self, PageRequest) {
        let mut session = Self {
            id,
            query: query.into(),
            status: SessionStatus::Starting,
            loading: false,
            results: Vec::new(),
            total_results: 0,
            has_more: true,
            last_page: 0,
            pending_page: None,
        };
        let request = session.request_page(1);
        (session, request)
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn results(&self) -> &[PhotoSummary] {
        &self.results
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SessionStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Request the next page. Returns `None` while a fetch is outstanding,
    /// after an error, or once the last page has arrived.
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if self.pending_page.is_some() || self.status != SessionStatus::Results || !self.has_more
        {
            return None;
        }
        Some(self.request_page(self.last_page + 1))
    }

    /// Re-issue the page that failed, keeping what was already accumulated.
    pub fn retry(&mut self) -> Option<PageRequest> {
        if self.pending_page.is_some() || !matches!(self.status, SessionStatus::Error(_)) {
            return None;
        }
        self.status = if self.last_page == 0 {
            SessionStatus::Starting
        } else {
            SessionStatus::Results
        };
        self.has_more = true;
        Some(self.request_page(self.last_page + 1))
    }

    /// Apply a resolved page fetch. Returns `false` (and leaves the session
    /// untouched) when the response was not issued by this session or is not
    /// the page currently awaited.
    pub fn apply(&mut self, response: PageResponse) -> bool {
        if response.session != self.id || self.pending_page != Some(response.page) {
            debug!(
                "Dropping stale page {} for session {} (current session {}, awaiting {:?})",
                response.page, response.session, self.id, self.pending_page
            );
            return false;
        }

        self.pending_page = None;
        self.loading = false;

        match response.result {
            Ok(page) => {
                debug!(
                    "Session {} received page {}/{} with {} photos",
                    self.id,
                    response.page,
                    page.page_count,
                    page.photos.len()
                );
                self.results.extend(page.photos);
                self.total_results = page.total_results;
                self.last_page = response.page;
                self.has_more = response.page < page.page_count;
                self.status = SessionStatus::Results;
            }
            Err(err) => {
                warn!(
                    "Session {} failed to load page {}: {err}",
                    self.id, response.page
                );
                self.has_more = false;
                self.status = SessionStatus::Error(err.to_string());
            }
        }
        true
    }

    fn request_page(&mut self, page: u64) -> PageRequest {
        self.loading = true;
        self.pending_page = Some(page);
        PageRequest {
            session: self.id,
            query: self.query.clone(),
            page,
        }
    }
}

/// Owns the live search session for the current query.
#[derive(Default)]
pub struct SearchCoordinator {
    last_id: SessionId,
    current: Option<SearchSession>,
}

impl SearchCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the live session. A blank query leaves no session at all.
    pub fn set_query(&mut self, query: &str) -> Option<PageRequest> {
        let query = query.trim();
        if query.is_empty() {
            self.current = None;
            return None;
        }

        self.last_id += 1;
        info!("Starting search session {} for {:?}", self.last_id, query);
        let (session, request) = SearchSession::start(self.last_id, query);
        self.current = Some(session);
        Some(request)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&SearchSession> {
        self.current.as_ref()
    }

    pub fn load_more(&mut self) -> Option<PageRequest> {
        self.current.as_mut().and_then(SearchSession::load_more)
    }

    pub fn retry(&mut self) -> Option<PageRequest> {
        self.current.as_mut().and_then(SearchSession::retry)
    }

    /// Route a response to the live session. Responses for superseded
    /// sessions are dropped here.
    pub fn apply(&mut self, response: PageResponse) -> bool {
        match self.current.as_mut() {
            Some(session) => session.apply(response),
            None => {
                debug!(
                    "Dropping page {} for session {}: no live session",
                    response.page, response.session
                );
                false
            }
        }
    }
}
