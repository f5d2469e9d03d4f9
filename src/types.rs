//! Data shapes shared with API consumers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Kind of media a library entry represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaType {
    /// Feature film.
    Movie,
    /// Television series.
    Tv,
}

/// A single entry of the media library.
///
/// Not served by any endpoint yet; exported so clients agree on the record
/// shape ahead of the library routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Movie or TV.
    #[serde(rename = "type")]
    pub media_type: MediaType,
}
