//! Typed projections of store documents.
//!
//! Only the fields the previews use are extracted. Absent fields take fixed
//! defaults: `""` for strings, `0` for integers, empty for lists.

use crate::store::Document;

/// Who may see a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Followers,
    Private,
    /// Missing or unrecognised marker.
    Unknown,
}

impl Visibility {
    /// Wire value stored in the `visibility` field of public posts.
    pub const PUBLIC: &'static str = "public";

    pub fn parse(raw: &str) -> Self {
        match raw {
            "public" => Self::Public,
            "followers" => Self::Followers,
            "private" => Self::Private,
            _ => Self::Unknown,
        }
    }

    pub fn is_public(self) -> bool {
        self == Self::Public
    }
}

/// Post fields used by post and place previews.
#[derive(Debug, Clone, PartialEq)]
pub struct PostPreview {
    pub place_name: String,
    pub city: String,
    pub caption: String,
    /// Star rating, clamped to `0..=5`.
    pub rating: u8,
    pub photo_urls: Vec<String>,
    pub author_name: String,
    pub visibility: Visibility,
}

impl PostPreview {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            place_name: doc.string("placeName").to_string(),
            city: doc.string("city").to_string(),
            caption: doc.string("caption").to_string(),
            rating: doc.integer("rating").clamp(0, 5) as u8,
            photo_urls: doc.string_list("photoUrls"),
            author_name: doc.string("authorName").to_string(),
            visibility: Visibility::parse(doc.string("visibility")),
        }
    }
}

/// User profile fields used by profile previews.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPreview {
    pub display_name: String,
    pub bio: String,
    pub post_count: u64,
    pub photo_url: String,
}

impl UserPreview {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            display_name: doc.string("displayName").to_string(),
            bio: doc.string("bio").to_string(),
            post_count: u64::try_from(doc.integer("postCount")).unwrap_or(0),
            photo_url: doc.string("photoURL").to_string(),
        }
    }
}

/// Place identity, derived from a public post about it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacePreview {
    pub place_name: String,
    pub city: String,
    pub photo_urls: Vec<String>,
}

impl From<PostPreview> for PlacePreview {
    fn from(post: PostPreview) -> Self {
        Self {
            place_name: post.place_name,
            city: post.city,
            photo_urls: post.photo_urls,
        }
    }
}
