//! Client for the Flickr Commons search proxy.
//!
//! Two JSON endpoints (paged search and single-photo lookup) plus plain
//! downloads of image bytes. No retries and no caching happen here; callers
//! decide what to do with an [`HttpError`].

pub mod client;
pub mod error;
pub mod models;
pub mod urls;


pub use client::{CommonsClient, PhotoSource};
pub use error::HttpError;
pub use models::{PhotoDetail, PhotoOwner, PhotoSummary, SearchPage};
pub use urls::{DEFAULT_API_BASE, DEFAULT_PAGE_SIZE, ImageSize, image_url};
