//! Data service over the blog post store.
//!
//! Missing ids come back as [`ServiceError::EntityNotFound`] on update and
//! delete; lookups return `Option` and leave the meaning of absence to the
//! caller.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::ServiceError;
use crate::model::{BlogPost, NewBlogPost};
use crate::store::Store;

/// Data service for blog posts.
///
/// Cheap to clone; every clone shares the same [`Store`]. Reads take the read
/// lock, anything that mutates (including id allocation) takes the write lock.
#[derive(Clone, Debug, Default)]
pub struct BlogPostsDataService {
    store: Arc<RwLock<Store>>,
}

impl BlogPostsDataService {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn get_all(&self) -> Vec<BlogPost> {
        let store = self.store.read().await;
        store.all().to_vec()
    }

    /// Absence is not an error here; the caller decides what it means.
    pub async fn get_by_id(&self, id: u64) -> Option<BlogPost> {
        let store = self.store.read().await;
        store.get(id).cloned()
    }

    pub async fn create(&self, new: NewBlogPost) -> BlogPost {
        let mut store = self.store.write().await;
        let post = store.create(new).clone();
        tracing::info!(id = post.id, title = %post.title, "blog post created");
        post
    }

    pub async fn update(&self, id: u64, text: String) -> Result<BlogPost, ServiceError> {
        let mut store = self.store.write().await;
        let post = store.update_text(id, text)?.clone();
        tracing::info!(id, "blog post updated");
        Ok(post)
    }

    pub async fn delete(&self, id: u64) -> Result<(), ServiceError> {
        let mut store = self.store.write().await;
        store.delete(id)?;
        tracing::info!(id, "blog post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_post(title: &str, text: &str) -> NewBlogPost {
        NewBlogPost {
            title: title.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn create_then_get_all_in_order() {
        let service = BlogPostsDataService::default();
        let first = service.create(new_post("Title 1", "Text 1")).await;
        let second = service.create(new_post("Title 2", "Text 2")).await;

        assert_eq!(first, BlogPost { id: 1, title: "Title 1".into(), text: "Text 1".into() });
        assert_eq!(second.id, 2);
        assert_eq!(service.get_all().await, vec![first, second]);
    }

    #[tokio::test]
    async fn get_by_id_returns_created_record() {
        let service = BlogPostsDataService::default();
        let created = service.create(new_post("Hello", "World")).await;

        assert_eq!(service.get_by_id(created.id).await, Some(created));
        assert_eq!(service.get_by_id(42).await, None);
    }

    #[tokio::test]
    async fn update_on_empty_store_is_not_found() {
        let service = BlogPostsDataService::default();
        let err = service.update(99, "x".to_string()).await.unwrap_err();
        assert_eq!(err, ServiceError::EntityNotFound(99));
    }

    #[tokio::test]
    async fn update_changes_only_text() {
        let service = BlogPostsDataService::default();
        let created = service.create(new_post("Title", "before")).await;

        let updated = service.update(created.id, "after".to_string()).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.text, "after");
    }

    #[tokio::test]
    async fn delete_then_get_is_absent() {
        let service = BlogPostsDataService::default();
        let created = service.create(new_post("Title", "Text")).await;

        service.delete(created.id).await.unwrap();
        assert_eq!(service.get_by_id(created.id).await, None);
        assert_eq!(
            service.delete(created.id).await.unwrap_err(),
            ServiceError::EntityNotFound(created.id)
        );
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let service = BlogPostsDataService::default();
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let service = service.clone();
                tokio::spawn(async move { service.create(new_post(&format!("t{i}"), "x")).await.id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<u64>>());
    }
}
