//! Handing the chosen photo back to whoever opened the picker.
//!
//! A host announces what it can accept through a [`HostRequest`]. On
//! confirmation the picker offers the photo two ways, as a download reference
//! and as the image bytes themselves, and the host channel delivers whichever
//! the host accepts before closing.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::api::{HttpError, PhotoDetail, PhotoSource};

pub mod stdio;


pub use stdio::StdioChannel;

pub const CONTENT_DOWNLOAD: &str = "content-download";
pub const CONTENT_BLOB: &str = "content-blob";

/// Everything the host needs to know about the confirmed photo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HandoffPayload {
    pub download_url: String,
    pub title: String,
    pub description: String,
}

impl HandoffPayload {
    pub fn from_detail(detail: &PhotoDetail) -> Self {
        Self {
            download_url: detail.original_url(),
            title: detail.title.clone(),
            description: detail.description.clone(),
        }
    }

    /// The two alternative offerings, download reference first. The blob is
    /// only downloaded if the host ends up choosing it.
    pub fn into_offerings(self, source: Arc<dyn PhotoSource>) -> Vec<Offering> {
        let download = DownloadContent {
            download: self.download_url.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
        };
        let HandoffPayload {
            download_url,
            title,
            description,
        } = self;
        let blob = Sending::Lazy(Box::new(move || {
            let blob = source.fetch_bytes(&download_url)?;
            Ok(BlobContent {
                blob,
                title,
                description,
            })
        }));

        vec![
            Offering::ContentDownload(Sending::Value(download)),
            Offering::ContentBlob(blob),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DownloadContent {
    pub download: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlobContent {
    pub blob: Vec<u8>,
    pub title: String,
    pub description: String,
}

pub type Producer<T> = Box<dyn FnOnce() -> Result<T, HttpError> + Send>;

/// An offering's value, either ready now or produced on demand.
pub enum Sending<T> {
    Value(T),
    Lazy(Producer<T>),
}

impl<T> Sending<T> {
    pub fn resolve(self) -> Result<T, HttpError> {
        match self {
            Sending::Value(value) => Ok(value),
            Sending::Lazy(produce) => produce(),
        }
    }
}

pub enum Offering {
    ContentDownload(Sending<DownloadContent>),
    ContentBlob(Sending<BlobContent>),
}

impl Offering {
    pub fn form(&self) -> &'static str {
        match self {
            Offering::ContentDownload(_) => CONTENT_DOWNLOAD,
            Offering::ContentBlob(_) => CONTENT_BLOB,
        }
    }
}

impl fmt::Debug for Offering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Offering").field(&self.form()).finish()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Accepting,
    Offering,
}

/// One thing the host is willing to do, e.g. accept a `content-blob`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub side: Side,
    pub form: String,
    #[serde(default)]
    pub origin: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRequest {
    pub matching: Vec<Capability>,
}

impl HostRequest {
    pub fn parse(json: &str) -> Result<Self, HandoffError> {
        serde_json::from_str(json).map_err(|err| HandoffError::InvalidRequest(err.to_string()))
    }

    /// The capability that makes this request usable by the picker, if any.
    /// `content-blob` is matched on either side.
    pub fn compatible_match(&self) -> Option<&Capability> {
        self.matching.iter().find(|capability| {
            (capability.side == Side::Accepting && capability.form == CONTENT_DOWNLOAD)
                || capability.form == CONTENT_BLOB
        })
    }

    /// Whether the host takes the given offering form.
    pub fn accepts(&self, form: &str) -> bool {
        self.matching.iter().any(|capability| {
            capability.form == form && (capability.side == Side::Accepting || form == CONTENT_BLOB)
        })
    }
}

/// Outcome of host detection at startup, shown on the welcome screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostStatus {
    Compatible { origin: String },
    Incompatible,
    Absent,
}

impl HostStatus {
    pub fn from_request(request: Option<&HostRequest>) -> Self {
        match request {
            None => HostStatus::Absent,
            Some(request) => match request.compatible_match() {
                Some(capability) => HostStatus::Compatible {
                    origin: capability.origin.clone(),
                },
                None => HostStatus::Incompatible,
            },
        }
    }

    pub fn is_compatible(&self) -> bool {
        matches!(self, HostStatus::Compatible { .. })
    }
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostStatus::Compatible { origin } => {
                write!(f, "(A compatible request was detected, from {origin})")
            }
            HostStatus::Incompatible => write!(
                f,
                "(This picker is running for a host, but the request is not compatible - this picker offers content-download or content-blob)"
            ),
            HostStatus::Absent => write!(
                f,
                "(It does not appear this picker was opened by a host - no request was detected)"
            ),
        }
    }
}

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("Host request is not valid: {0}")]
    InvalidRequest(String),
    #[error("The host accepts none of the offered forms")]
    NoAcceptedOffering,
    #[error("The host channel is already closed")]
    Closed,
    #[error("Failed to produce offering: {0}")]
    Offering(#[from] HttpError),
    #[error("Failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Failed to write response: {0}")]
    Io(#[from] std::io::Error),
}

/// The boundary to the host that opened the picker.
pub trait HostChannel {
    /// Look for a request from a host. Called once at startup.
    fn detect_request(&mut self) -> Option<HostRequest>;

    /// Deliver the result; the host picks among `offerings`.
    fn open_response(&mut self, offerings: Vec<Offering>) -> Result<(), HandoffError>;

    /// End the exchange, with or without a response.
    fn close(&mut self);
}
