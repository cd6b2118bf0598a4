//! Post domain entity
//!
//! A student's talent-showcase submission, in its normalized display form.

use serde::{Deserialize, Serialize};

/// Length of a store identifier in hexadecimal characters
pub const POST_ID_LEN: usize = 24;

/// Store-assigned identifier for a post.
///
/// Holds the 24-character hexadecimal form of the store's object id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(String);

impl PostId {
    /// Parse an identifier, rejecting anything the store could never have assigned
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == POST_ID_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(raw.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored media object (profile photo or talent media item)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub public_id: String,
    pub secure_url: String,
    pub id: String,
}

impl MediaAsset {
    pub fn has_url(&self) -> bool {
        !self.secure_url.is_empty()
    }
}

/// Outbound profile link kinds, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Github,
    Linkedin,
    Instagram,
    Facebook,
    Youtube,
}

impl LinkKind {
    pub const ALL: [LinkKind; 5] = [
        LinkKind::Github,
        LinkKind::Linkedin,
        LinkKind::Instagram,
        LinkKind::Facebook,
        LinkKind::Youtube,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Github => "GitHub",
            LinkKind::Linkedin => "LinkedIn",
            LinkKind::Instagram => "Instagram",
            LinkKind::Facebook => "Facebook",
            LinkKind::Youtube => "YouTube",
        }
    }
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

/// A normalized post. Every field is always present; absent values are `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub name: String,
    pub enrollment_no: String,
    pub department: String,
    pub batch: String,
    pub contact_number: String,
    pub category: String,
    pub github_link: String,
    pub linkedin_link: String,
    pub instagram_link: String,
    pub youtube_link: String,
    pub facebook_link: String,
    pub post_title: String,
    pub description: String,
    pub student_photo: MediaAsset,
    pub talent_media: Vec<MediaAsset>,
    pub created_at: String,
    pub updated_at: String,
}

impl Post {
    pub fn link(&self, kind: LinkKind) -> Option<&str> {
        let link = match kind {
            LinkKind::Github => &self.github_link,
            LinkKind::Linkedin => &self.linkedin_link,
            LinkKind::Instagram => &self.instagram_link,
            LinkKind::Facebook => &self.facebook_link,
            LinkKind::Youtube => &self.youtube_link,
        };
        (!link.is_empty()).then_some(link.as_str())
    }

    /// Links that are present, in display order
    pub fn present_links(&self) -> impl Iterator<Item = (LinkKind, &str)> + '_ {
        LinkKind::ALL
            .into_iter()
            .filter_map(|kind| self.link(kind).map(|url| (kind, url)))
    }

    /// First letter of the submitter's name, used when there is no photo
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// The first talent media item, if it has a URL
    pub fn lead_media(&self) -> Option<&MediaAsset> {
        self.talent_media.first().filter(|m| m.has_url())
    }
}
