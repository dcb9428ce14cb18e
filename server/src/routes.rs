//! HTTP handlers for `/blog-posts`.
//!
//! Bodies are validated before the data service is called, so a rejected
//! request never touches the store.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, ServiceError};
use crate::model::{BlogPost, CreateBlogPost, UpdateBlogPost};
use crate::service::BlogPostsDataService;

pub async fn list_blog_posts(State(service): State<BlogPostsDataService>) -> Json<Vec<BlogPost>> {
    let posts = service.get_all().await;
    tracing::debug!(count = posts.len(), "listing blog posts");
    Json(posts)
}

pub async fn get_blog_post(
    State(service): State<BlogPostsDataService>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<BlogPost>, ApiError> {
    let Path(id) = path?;
    tracing::debug!(id, "fetching blog post");
    service
        .get_by_id(id)
        .await
        .map(Json)
        .ok_or(ApiError::Service(ServiceError::EntityNotFound(id)))
}

pub async fn create_blog_post(
    State(service): State<BlogPostsDataService>,
    payload: Result<Json<CreateBlogPost>, JsonRejection>,
) -> Result<Json<BlogPost>, ApiError> {
    let Json(input) = payload?;
    let new = input.validate()?;
    Ok(Json(service.create(new).await))
}

pub async fn update_blog_post(
    State(service): State<BlogPostsDataService>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<UpdateBlogPost>, JsonRejection>,
) -> Result<Json<BlogPost>, ApiError> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let text = input.validate()?;
    Ok(Json(service.update(id, text).await?))
}

pub async fn delete_blog_post(
    State(service): State<BlogPostsDataService>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    service.delete(id).await?;
    Ok(StatusCode::OK)
}
