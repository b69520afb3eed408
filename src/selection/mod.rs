//! The photo currently inspected in the overlay.
//!
//! Selecting a photo starts a detail fetch tagged with a fresh
//! [`SelectionId`]. Backing out, or selecting another photo, retires that id
//! so a late response can no longer touch the overlay.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{HttpError, PhotoDetail, PhotoSource, PhotoSummary};
use crate::handoff::HandoffPayload;


pub type SelectionId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRequest {
    pub selection: SelectionId,
    pub id: String,
    pub secret: String,
}

impl DetailRequest {
    pub fn execute(&self, source: &dyn PhotoSource) -> DetailResponse {
        DetailResponse {
            selection: self.selection,
            result: source.fetch_detail(&self.id, &self.secret),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailResponse {
    pub selection: SelectionId,
    pub result: Result<PhotoDetail, HttpError>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Loaded(PhotoDetail),
    /// The lookup failed; shown inline, the user can go back and pick again.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    id: SelectionId,
    photo: PhotoSummary,
    detail: DetailState,
}

impl Selection {
    pub fn id(&self) -> SelectionId {
        self.id
    }

    pub fn photo(&self) -> &PhotoSummary {
        &self.photo
    }

    pub fn detail(&self) -> &DetailState {
        &self.detail
    }

    /// "Use this image" is only offered once details have arrived.
    pub fn can_confirm(&self) -> bool {
        matches!(self.detail, DetailState::Loaded(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("No image is selected")]
    NothingSelected,
    #[error("Image details have not loaded yet")]
    DetailNotLoaded,
}

#[derive(Default)]
pub struct SelectionFlow {
    last_id: SelectionId,
    current: Option<Selection>,
}

impl SelectionFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Selection> {
        self.current.as_ref()
    }

    /// Open the overlay for `photo` and return the detail lookup to run.
    pub fn select(&mut self, photo: PhotoSummary) -> DetailRequest {
        self.last_id += 1;
        info!("Selected photo {} (selection {})", photo.id, self.last_id);
        let request = DetailRequest {
            selection: self.last_id,
            id: photo.id.clone(),
            secret: photo.secret.clone(),
        };
        self.current = Some(Selection {
            id: self.last_id,
            photo,
            detail: DetailState::Loading,
        });
        request
    }

    /// Drop the current selection. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some(selection) => {
                debug!("Selection {} cancelled", selection.id);
                true
            }
            None => false,
        }
    }

    /// Apply a resolved detail lookup if it belongs to the live selection.
    pub fn apply_detail(&mut self, response: DetailResponse) -> bool {
        let Some(selection) = self.current.as_mut() else {
            debug!(
                "Dropping detail for selection {}: nothing selected",
                response.selection
            );
            return false;
        };
        if selection.id != response.selection {
            debug!(
                "Dropping detail for selection {} (current selection {})",
                response.selection, selection.id
            );
            return false;
        }

        selection.detail = match response.result {
            Ok(detail) => DetailState::Loaded(detail),
            Err(err) => {
                warn!("Detail lookup for photo {} failed: {err}", selection.photo.id);
                DetailState::Failed(err.to_string())
            }
        };
        true
    }

    /// Turn the loaded selection into a handoff payload, ending the selection.
    /// Leaves the selection in place when details are not available.
    pub fn confirm(&mut self) -> Result<HandoffPayload, SelectionError> {
        let detail = match self.current.as_ref().map(Selection::detail) {
            None => return Err(SelectionError::NothingSelected),
            Some(DetailState::Loaded(detail)) => detail,
            Some(_) => return Err(SelectionError::DetailNotLoaded),
        };

        let payload = HandoffPayload::from_detail(detail);
        if let Some(selection) = self.current.take() {
            info!(
                "Confirmed selection {} -> {}",
                selection.id, payload.download_url
            );
        }
        Ok(payload)
    }
}
