//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Stored documents mirror what the upload flow writes; normalized posts are
//! ready for rendering tests.

use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};

use crate::domain::entities::{MediaAsset, Post};

/// A stored post document created at a fixed instant
pub fn test_post_doc_at(name: &str, created_millis: i64) -> Document {
    doc! {
        "_id": ObjectId::new(),
        "name": name,
        "enrollmentNo": "03514802722",
        "department": "Computer Science",
        "batch": "2022-2026",
        "contactNumber": "9876543210",
        "category": "Music",
        "githubLink": format!("https://github.com/{}", name.to_lowercase()),
        "postTitle": format!("{} performs", name),
        "description": "Acoustic covers recorded in the campus studio.",
        "studentPhoto": {
            "_id": ObjectId::new(),
            "public_id": format!("students/{}", name.to_lowercase()),
            "secure_url": format!("https://cdn.example.com/students/{}.jpg", name.to_lowercase()),
        },
        "talentMedia": [
            {
                "_id": ObjectId::new(),
                "public_id": "talent/clip",
                "secure_url": "https://cdn.example.com/talent/clip.mp4",
            },
        ],
        "createdAt": DateTime::from_millis(created_millis),
        "updatedAt": DateTime::from_millis(created_millis),
        "__v": 0,
    }
}

/// A stored post document with default timestamps
pub fn test_post_doc(name: &str) -> Document {
    test_post_doc_at(name, 1_704_067_200_000)
}

/// A media asset with only a URL
pub fn media(url: &str) -> MediaAsset {
    MediaAsset {
        public_id: String::new(),
        secure_url: url.to_string(),
        id: ObjectId::new().to_hex(),
    }
}

/// A normalized post with every field filled in
pub fn sample_post() -> Post {
    Post {
        id: ObjectId::new().to_hex(),
        name: "Ananya Rao".to_string(),
        enrollment_no: "03514802722".to_string(),
        department: "Electronics".to_string(),
        batch: "2021-2025".to_string(),
        contact_number: "9876543210".to_string(),
        category: "Photography".to_string(),
        github_link: "https://github.com/ananya".to_string(),
        linkedin_link: "https://www.linkedin.com/in/ananya".to_string(),
        instagram_link: "https://instagram.com/ananya.clicks".to_string(),
        youtube_link: "youtube.com/@ananya".to_string(),
        facebook_link: "https://facebook.com/ananya".to_string(),
        post_title: "Monsoon Portraits".to_string(),
        description: "A series shot across the city during the first rains.".to_string(),
        student_photo: media("https://cdn.example.com/students/ananya.jpg"),
        talent_media: vec![
            media("https://cdn.example.com/talent/rain-01.jpg"),
            media("https://cdn.example.com/talent/rain-reel.mp4"),
        ],
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        updated_at: "2024-01-01T00:00:00.000Z".to_string(),
    }
}
