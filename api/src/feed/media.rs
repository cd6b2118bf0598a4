//! Media classification and placeholders

use std::borrow::Cow;

use crate::domain::entities::MediaAsset;

/// Suffixes that mark a URL as an image; everything else plays as video
pub const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".svg"];

pub const PLACEHOLDER: &str = "/placeholder.svg";
pub const VIDEO_PREVIEW_POSTER: &str = "/placeholder.svg?height=600&width=800&text=Video+Preview";
pub const VIDEO_UNAVAILABLE_POSTER: &str =
    "/placeholder.svg?height=600&width=800&text=Video+Unavailable";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify purely by the URL's suffix, case-insensitively
    pub fn of_url(url: &str) -> Self {
        let lower = url.to_lowercase();
        if IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
            MediaKind::Image
        } else {
            MediaKind::Video
        }
    }

    pub fn of(asset: &MediaAsset) -> Self {
        Self::of_url(&asset.secure_url)
    }
}

/// Poster for a card's lead video: the post's first image, else the preview placeholder
pub fn card_poster(media: &[MediaAsset]) -> &str {
    media
        .iter()
        .find(|m| m.has_url() && MediaKind::of(m) == MediaKind::Image)
        .map(|m| m.secure_url.as_str())
        .unwrap_or(VIDEO_PREVIEW_POSTER)
}

/// Photo URL or the placeholder
pub fn photo_or_placeholder(photo: &MediaAsset) -> &str {
    if photo.has_url() {
        &photo.secure_url
    } else {
        PLACEHOLDER
    }
}

/// Scheme-less links (`youtube.com/@x`) are opened over https
pub fn with_scheme(link: &str) -> Cow<'_, str> {
    let lower = link.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Cow::Borrowed(link)
    } else {
        Cow::Owned(format!("https://{}", link))
    }
}
