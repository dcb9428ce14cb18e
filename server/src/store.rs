//! In-memory blog post collection.
//!
//! `Store` has no locking of its own and is not safe for concurrent
//! mutation. [`BlogPostsDataService`](crate::BlogPostsDataService) owns the
//! only instance behind an `RwLock`, so id allocation and list mutation always
//! happen under the same write guard.

use crate::error::ServiceError;
use crate::model::{BlogPost, NewBlogPost};

/// Blog posts in insertion order plus the last id handed out.
#[derive(Debug, Default)]
pub struct Store {
    posts: Vec<BlogPost>,
    last_id: u64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the two sample posts the service ships with.
    pub fn with_sample_posts() -> Self {
        let mut store = Self::new();
        for n in 1..=2 {
            store.create(NewBlogPost {
                title: format!("Title {n}"),
                text: format!("Text {n}"),
            });
        }
        store
    }

    pub fn all(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn get(&self, id: u64) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Appends a post under the next id. Ids start at 1 and are never reused,
    /// even after the post holding the highest id is deleted.
    pub fn create(&mut self, new: NewBlogPost) -> &BlogPost {
        self.last_id += 1;
        self.posts.push(BlogPost {
            id: self.last_id,
            title: new.title,
            text: new.text,
        });
        &self.posts[self.posts.len() - 1]
    }

    pub fn update_text(&mut self, id: u64, text: String) -> Result<&BlogPost, ServiceError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ServiceError::EntityNotFound(id))?;
        post.text = text;
        Ok(post)
    }

    pub fn delete(&mut self, id: u64) -> Result<BlogPost, ServiceError> {
        let idx = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(ServiceError::EntityNotFound(id))?;
        Ok(self.posts.remove(idx))
    }
}
