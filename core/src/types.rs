//! Wire types for the blog post API.
//!
//! Defined independently of `blog-server`; the live round-trip test catches
//! schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A blog post returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub text: String,
}

/// Request payload for creating a blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogPost {
    pub title: String,
    pub text: String,
}

/// Request payload for updating a blog post. The title cannot be changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBlogPost {
    pub text: String,
}
