use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
#[cfg(test)]
use std::time::Duration;

use tracing::{debug, warn};

use crate::api::PhotoSource;
use crate::interactive::domain::models::FetchResponse;
use crate::selection::DetailRequest;
use crate::session::PageRequest;

/// Runs remote calls off the UI thread.
///
/// Page searches and detail lookups each get their own worker so a slow page
/// never holds up the overlay. Responses from both come back on one channel
/// and are applied by the event loop.
pub struct FetchService {
    page_sender: Sender<PageRequest>,
    detail_sender: Sender<DetailRequest>,
    responses: Receiver<FetchResponse>,
}

impl FetchService {
    pub fn start(source: Arc<dyn PhotoSource>) -> Self {
        let (page_sender, page_requests) = mpsc::channel::<PageRequest>();
        let (detail_sender, detail_requests) = mpsc::channel::<DetailRequest>();
        let (response_tx, responses) = mpsc::channel::<FetchResponse>();

        let page_source = source.clone();
        let page_tx = response_tx.clone();
        thread::spawn(move || {
            while let Ok(request) = page_requests.recv() {
                debug!(
                    "Fetching page {} of {:?} (session {})",
                    request.page, request.query, request.session
                );
                let response = request.execute(page_source.as_ref());
                if page_tx.send(FetchResponse::Page(response)).is_err() {
                    break;
                }
            }
        });

        thread::spawn(move || {
            while let Ok(request) = detail_requests.recv() {
                debug!(
                    "Fetching detail for photo {} (selection {})",
                    request.id, request.selection
                );
                let response = request.execute(source.as_ref());
                if response_tx.send(FetchResponse::Detail(response)).is_err() {
                    break;
                }
            }
        });

        Self {
            page_sender,
            detail_sender,
            responses,
        }
    }

    pub fn submit_page(&self, request: PageRequest) {
        if let Err(err) = self.page_sender.send(request) {
            warn!("Page worker is gone, dropping request: {err}");
        }
    }

    pub fn submit_detail(&self, request: DetailRequest) {
        if let Err(err) = self.detail_sender.send(request) {
            warn!("Detail worker is gone, dropping request: {err}");
        }
    }

    pub fn try_recv(&self) -> Option<FetchResponse> {
        self.responses.try_recv().ok()
    }

    #[cfg(test)]
    pub fn recv_timeout(&self, timeout: Duration) -> Option<FetchResponse> {
        self.responses.recv_timeout(timeout).ok()
    }
}
