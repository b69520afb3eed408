use url::{Url, form_urlencoded};

pub const DEFAULT_API_BASE: &str = "https://f4r.poppy.io";
pub const DEFAULT_PAGE_SIZE: u32 = 25;

const SEARCH_PATH: [&str; 2] = ["api", "commons-search"];
const DETAIL_PATH: [&str; 2] = ["api", "photo-info"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSize {
    /// 240px on the longest side, addressed with the regular secret.
    Thumbnail,
    /// Original upload, addressed with the original secret.
    Original,
}

impl ImageSize {
    fn suffix(self) -> &'static str {
        match self {
            ImageSize::Thumbnail => "m",
            ImageSize::Original => "o",
        }
    }
}

pub fn image_url(farm: u64, server: &str, id: &str, secret: &str, size: ImageSize) -> String {
    format!(
        "https://farm{farm}.static.flickr.com/{server}/{id}_{secret}_{}.jpg",
        size.suffix()
    )
}

/// The query goes out percent-encoded with spaces as `%20`, not the `+` of
/// form encoding.
pub fn search_url(base: &Url, page_size: u32, page: u64, query: &str) -> Url {
    let mut url = endpoint(base, &SEARCH_PATH);
    url.query_pairs_mut()
        .append_pair("c", &page_size.to_string())
        .append_pair("p", &page.to_string());
    let pairs = url.query().unwrap_or_default().to_string();
    url.set_query(Some(&format!("{pairs}&q={}", encode_component(query))));
    url
}

/// Form encoding escapes a literal `+` as `%2B`, so every `+` left in the
/// output stands for a space.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn detail_url(base: &Url, id: &str, secret: &str) -> Url {
    let mut url = endpoint(base, &DETAIL_PATH);
    url.query_pairs_mut()
        .append_pair("p", id)
        .append_pair("s", secret);
    url
}

/// Append path segments to the configured base, keeping any prefix the base
/// already carries (e.g. a proxy mounted under `/flickr`).
fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
