//! API response type definitions.

use serde::{Deserialize, Deserializer};

/// Post list for one thread.
///
/// `posts` is required; a response without it is rejected at
/// deserialization, before any download starts.
#[derive(Debug, Deserialize)]
pub struct ThreadResponse {
    pub posts: Vec<Post>,
}

/// A single post, optionally carrying file attachments.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub files: Option<Vec<ThreadFile>>,
}

/// A file attached to a post.
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadFile {
    /// Declared filename, e.g. `16234.jpg`.
    pub name: String,

    /// Site-relative path, e.g. `/b/src/292606618/16234.jpg`.
    pub path: String,

    /// Size in kilobytes as reported by the API. The API is inconsistent
    /// about the encoding, so both `123` and `"123"` are accepted.
    #[serde(default, deserialize_with = "size_from_int_or_string")]
    pub size: Option<u64>,
}

fn size_from_int_or_string<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum SizeField {
        Int(u64),
        Str(String),
    }

    match Option::<SizeField>::deserialize(deserializer)? {
        None => Ok(None),
        Some(SizeField::Int(n)) => Ok(Some(n)),
        Some(SizeField::Str(s)) => Ok(s.trim().parse().ok()),
    }
}
