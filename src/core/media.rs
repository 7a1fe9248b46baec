use crate::domain::model::CatalogItem;
use serde::Serialize;

const VIDEO_HOST_MARKERS: [&str; 2] = ["youtube", "youtu.be"];
const VIDEO_EXTENSIONS: [&str; 3] = [".mp4", ".webm", ".ogg"];
const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// One entry of an item's gallery. `src` is what a viewer should load:
/// the embed URL for videos, the original URL for images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaEntry {
    pub kind: MediaKind,
    pub url: String,
    pub src: String,
}

pub fn classify_media(url: &str) -> MediaKind {
    let lower = url.to_lowercase();
    let is_video = VIDEO_HOST_MARKERS.iter().any(|marker| lower.contains(marker))
        || VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext));
    if is_video {
        MediaKind::Video
    } else {
        MediaKind::Image
    }
}

/// Rewrites YouTube watch and short links to the embeddable form.
///
/// Other URLs are returned unchanged. A malformed YouTube link can produce
/// an empty video id; that is passed through as is.
pub fn to_embed_url(url: &str) -> String {
    if url.contains("youtube.com/watch?v=") {
        let video_id = url
            .split_once("v=")
            .map(|(_, rest)| rest.split('&').next().unwrap_or_default())
            .unwrap_or_default();
        return format!("{}{}", YOUTUBE_EMBED_BASE, video_id);
    }
    if let Some((_, rest)) = url.split_once("youtu.be/") {
        let video_id = rest.split('?').next().unwrap_or_default();
        return format!("{}{}", YOUTUBE_EMBED_BASE, video_id);
    }
    url.to_string()
}

pub fn media_entry(url: &str) -> MediaEntry {
    let kind = classify_media(url);
    let src = match kind {
        MediaKind::Video => to_embed_url(url),
        MediaKind::Image => url.to_string(),
    };
    MediaEntry {
        kind,
        url: url.to_string(),
        src,
    }
}

/// Non-empty media of an item, in display order.
pub fn gallery(item: &CatalogItem) -> Vec<MediaEntry> {
    item.media_urls
        .iter()
        .map(|url| url.trim())
        .filter(|url| !url.is_empty())
        .map(media_entry)
        .collect()
}

/// Cover picture: the first non-empty entry that is an image.
pub fn primary_image(item: &CatalogItem) -> Option<&str> {
    item.media_urls
        .iter()
        .map(|url| url.trim())
        .find(|url| !url.is_empty() && classify_media(url) == MediaKind::Image)
}
