//! Post normalization
//!
//! Maps whatever the store happens to hold for a post onto the strict `Post`
//! record. Storage-internal fields are dropped, missing values become `""`,
//! nested `_id`s become text ids and timestamps become ISO-8601 text.

use chrono::{DateTime, SecondsFormat, Utc};
use mongodb::bson::{Bson, Document};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::{MediaAsset, Post};

static EXTERNAL_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)(https?://)?([a-z0-9-]+\.)+[a-z]{2,}(:\d{1,5})?([/?#]\S*)?$")
        .expect("hardcoded link regex is invalid - fix source code")
});

/// Normalize one stored post document
pub fn normalize_post(doc: &Document) -> Post {
    Post {
        id: identifier(doc),
        name: text(doc, "name"),
        enrollment_no: text(doc, "enrollmentNo"),
        department: text(doc, "department"),
        batch: text(doc, "batch"),
        contact_number: text(doc, "contactNumber"),
        category: text(doc, "category"),
        github_link: external_link(doc, "githubLink"),
        linkedin_link: external_link(doc, "linkedinLink"),
        instagram_link: external_link(doc, "instagramLink"),
        youtube_link: external_link(doc, "youtubeLink"),
        facebook_link: external_link(doc, "facebookLink"),
        post_title: text(doc, "postTitle"),
        description: text(doc, "description"),
        student_photo: doc.get("studentPhoto").map(media).unwrap_or_default(),
        talent_media: match doc.get("talentMedia") {
            Some(Bson::Array(items)) => items.iter().map(media).collect(),
            _ => Vec::new(),
        },
        created_at: timestamp(doc, "createdAt"),
        updated_at: timestamp(doc, "updatedAt"),
    }
}

fn media(value: &Bson) -> MediaAsset {
    match value {
        Bson::Document(d) => MediaAsset {
            public_id: text(d, "public_id"),
            secure_url: text(d, "secure_url"),
            id: identifier(d),
        },
        Bson::String(url) => MediaAsset {
            secure_url: url.clone(),
            ..Default::default()
        },
        _ => MediaAsset::default(),
    }
}

fn identifier(doc: &Document) -> String {
    match doc.get("_id") {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(Bson::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn text(doc: &Document, key: &str) -> String {
    match doc.get(key) {
        Some(Bson::String(s)) => s.clone(),
        Some(Bson::Int32(n)) => n.to_string(),
        Some(Bson::Int64(n)) => n.to_string(),
        Some(Bson::Double(n)) => n.to_string(),
        Some(Bson::Boolean(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn external_link(doc: &Document, key: &str) -> String {
    let raw = text(doc, key);
    let trimmed = raw.trim();
    if EXTERNAL_LINK.is_match(trimmed) {
        trimmed.to_string()
    } else {
        if !trimmed.is_empty() {
            tracing::debug!(field = key, "Dropping link that is not an external URL");
        }
        String::new()
    }
}

fn timestamp(doc: &Document, key: &str) -> String {
    let parsed: Option<DateTime<Utc>> = match doc.get(key) {
        Some(Bson::DateTime(dt)) => {
            DateTime::<Utc>::from_timestamp_millis(dt.timestamp_millis())
        }
        Some(Bson::String(s)) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        _ => None,
    };

    parsed
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}
