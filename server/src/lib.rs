//! In-memory blog post service over HTTP.
//!
//! # Overview
//! Three layers, leaf first: [`Store`] holds the records and the id counter,
//! [`BlogPostsDataService`] wraps it behind a lock and reports missing ids as
//! [`ServiceError::EntityNotFound`], and the handlers in [`routes`] validate
//! bodies and map errors to status codes.
//!
//! Nothing is persisted. The store lives as long as the router built from it,
//! so every call to [`app`] starts from an empty collection.

pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod service;
pub mod store;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ServiceError, ValidationError};
pub use model::{BlogPost, CreateBlogPost, NewBlogPost, UpdateBlogPost, MAX_TITLE_LEN};
pub use service::BlogPostsDataService;
pub use store::Store;

/// Router over a fresh, empty store.
pub fn app() -> Router {
    router(BlogPostsDataService::default())
}

/// Router over an existing data service.
pub fn router(service: BlogPostsDataService) -> Router {
    Router::new()
        .route(
            "/blog-posts",
            get(routes::list_blog_posts).post(routes::create_blog_post),
        )
        .route(
            "/blog-posts/{id}",
            get(routes::get_blog_post)
                .put(routes::update_blog_post)
                .delete(routes::delete_blog_post),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serve an empty store on `listener` until the process exits.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
