//! Blog post records and the request bodies that create or change them.
//!
//! Request bodies deserialize with every field optional so that a missing
//! field reaches `validate` and comes back as a 400, instead of being
//! rejected by the JSON extractor before the handler runs.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Longest title accepted on creation, counted in characters.
pub const MAX_TITLE_LEN: usize = 40;

/// A single blog post as stored and returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub text: String,
}

/// Validated input for a new blog post.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub text: String,
}

/// Body of `POST /blog-posts`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateBlogPost {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

/// Body of `PUT /blog-posts/{id}`. Only `text` can change after creation;
/// a `title` in the body is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBlogPost {
    #[serde(default)]
    pub text: Option<String>,
}

impl CreateBlogPost {
    pub fn validate(self) -> Result<NewBlogPost, ValidationError> {
        let title = required("title", self.title)?;
        let len = title.chars().count();
        if len > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
                actual: len,
            });
        }
        let text = required("text", self.text)?;
        Ok(NewBlogPost { title, text })
    }
}

impl UpdateBlogPost {
    /// Returns the replacement text.
    pub fn validate(self) -> Result<String, ValidationError> {
        required("text", self.text)
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(ValidationError::Blank(field)),
        None => Err(ValidationError::Missing(field)),
    }
}
