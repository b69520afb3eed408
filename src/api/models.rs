use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::error::HttpError;
use super::urls::{ImageSize, image_url};

/// One hit from the commons search endpoint. Carries just enough to build a
/// thumbnail URL and to ask for the photo's details.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSummary {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub secret: String,
    #[serde(deserialize_with = "string_or_number")]
    pub server: String,
    #[serde(deserialize_with = "unsigned")]
    pub farm: u64,
    pub title: String,
}

impl PhotoSummary {
    pub fn thumbnail_url(&self) -> String {
        image_url(self.farm, &self.server, &self.id, &self.secret, ImageSize::Thumbnail)
    }
}

/// One page of search results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPage {
    pub photos: Vec<PhotoSummary>,
    pub page: u64,
    pub page_count: u64,
    pub total_results: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoOwner {
    pub username: String,
    pub realname: Option<String>,
}

/// Extended metadata for a single photo, fetched when the photo is selected.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPhotoDetail")]
pub struct PhotoDetail {
    pub id: String,
    pub secret: String,
    pub server: String,
    pub farm: u64,
    pub original_secret: String,
    pub title: String,
    pub description: String,
    pub owner: PhotoOwner,
    /// `dates.taken` as reported by Flickr, e.g. `1918-05-13 00:00:00`.
    pub taken: Option<String>,
}

impl PhotoDetail {
    /// URL of the original-size image.
    pub fn original_url(&self) -> String {
        image_url(
            self.farm,
            &self.server,
            &self.id,
            &self.original_secret,
            ImageSize::Original,
        )
    }
}

#[derive(Deserialize)]
struct SearchEnvelope {
    photos: RawSearchPage,
}

#[derive(Deserialize)]
struct RawSearchPage {
    photo: Vec<PhotoSummary>,
    #[serde(deserialize_with = "unsigned")]
    total: u64,
    #[serde(deserialize_with = "unsigned")]
    page: u64,
    #[serde(deserialize_with = "unsigned")]
    pages: u64,
}

#[derive(Deserialize)]
struct DetailEnvelope {
    photo: PhotoDetail,
}

#[derive(Deserialize)]
struct Content {
    #[serde(rename = "_content")]
    content: String,
}

#[derive(Deserialize)]
struct RawOwner {
    username: String,
    #[serde(default)]
    realname: Option<String>,
}

#[derive(Deserialize)]
struct RawDates {
    #[serde(default)]
    taken: Option<String>,
}

#[derive(Deserialize)]
struct RawPhotoDetail {
    #[serde(deserialize_with = "string_or_number")]
    id: String,
    secret: String,
    #[serde(deserialize_with = "string_or_number")]
    server: String,
    #[serde(deserialize_with = "unsigned")]
    farm: u64,
    #[serde(rename = "originalsecret")]
    original_secret: String,
    title: Content,
    description: Content,
    owner: RawOwner,
    #[serde(default)]
    dates: Option<RawDates>,
}

impl From<RawPhotoDetail> for PhotoDetail {
    fn from(raw: RawPhotoDetail) -> Self {
        PhotoDetail {
            id: raw.id,
            secret: raw.secret,
            server: raw.server,
            farm: raw.farm,
            original_secret: raw.original_secret,
            title: raw.title.content,
            description: raw.description.content,
            owner: PhotoOwner {
                username: raw.owner.username,
                realname: raw.owner.realname.filter(|name| !name.trim().is_empty()),
            },
            taken: raw.dates.and_then(|dates| dates.taken),
        }
    }
}

/// Parse the body of `/api/commons-search`.
pub fn parse_search_page(body: &str) -> Result<SearchPage, HttpError> {
    let envelope: SearchEnvelope = serde_json::from_str(body)?;
    let raw = envelope.photos;
    Ok(SearchPage {
        photos: raw.photo,
        page: raw.page,
        page_count: raw.pages,
        total_results: raw.total,
    })
}

/// Parse the body of `/api/photo-info`.
pub fn parse_photo_detail(body: &str) -> Result<PhotoDetail, HttpError> {
    let envelope: DetailEnvelope = serde_json::from_str(body)?;
    Ok(envelope.photo)
}

// Flickr is inconsistent about quoting numbers: `total` and `server` show up
// as either strings or numbers depending on the endpoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => Ok(s),
        StringOrNumber::Number(n) => Ok(n.to_string()),
    }
}

fn unsigned<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected an unsigned integer, found {s:?}"))),
        StringOrNumber::Number(n) => n
            .as_u64()
            .ok_or_else(|| de::Error::custom(format!("expected an unsigned integer, found {n}"))),
    }
}
