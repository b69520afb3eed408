use crate::selection::DetailResponse;
use crate::session::PageResponse;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Search,
    Selection,
    Help,
}

/// A resolved remote call coming back from the fetch workers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchResponse {
    Page(PageResponse),
    Detail(DetailResponse),
}
