//! Stateless request builder and response parser for the blog post API.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ClientError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{BlogPost, CreateBlogPost, UpdateBlogPost};

/// Synchronous, stateless client for the blog post API.
///
/// Holds only `base_url`. The caller is responsible for executing the HTTP
/// round-trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
}

impl BlogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list_blog_posts(&self) -> HttpRequest {
        self.request(HttpMethod::Get, "/blog-posts".to_string())
    }

    pub fn build_get_blog_post(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Get, format!("/blog-posts/{id}"))
    }

    pub fn build_create_blog_post(&self, input: &CreateBlogPost) -> Result<HttpRequest, ClientError> {
        self.json_request(HttpMethod::Post, "/blog-posts".to_string(), input)
    }

    pub fn build_update_blog_post(
        &self,
        id: u64,
        input: &UpdateBlogPost,
    ) -> Result<HttpRequest, ClientError> {
        self.json_request(HttpMethod::Put, format!("/blog-posts/{id}"), input)
    }

    pub fn build_delete_blog_post(&self, id: u64) -> HttpRequest {
        self.request(HttpMethod::Delete, format!("/blog-posts/{id}"))
    }

    pub fn parse_list_blog_posts(&self, response: HttpResponse) -> Result<Vec<BlogPost>, ClientError> {
        parse_json(response)
    }

    pub fn parse_get_blog_post(&self, response: HttpResponse) -> Result<BlogPost, ClientError> {
        parse_json(response)
    }

    pub fn parse_create_blog_post(&self, response: HttpResponse) -> Result<BlogPost, ClientError> {
        parse_json(response)
    }

    pub fn parse_update_blog_post(&self, response: HttpResponse) -> Result<BlogPost, ClientError> {
        parse_json(response)
    }

    pub fn parse_delete_blog_post(&self, response: HttpResponse) -> Result<(), ClientError> {
        check_status(&response, 200)
    }

    fn request(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path: format!("{}{path}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        input: &T,
    ) -> Result<HttpRequest, ClientError> {
        let body =
            serde_json::to_string(input).map_err(|e| ClientError::Serialization(e.to_string()))?;
        let mut req = self.request(method, path);
        req.headers = vec![("content-type".to_string(), "application/json".to_string())];
        req.body = Some(body);
        Ok(req)
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ClientError> {
    check_status(&response, 200)?;
    serde_json::from_str(&response.body).map_err(|e| ClientError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ClientError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ClientError> {
    match response.status {
        s if s == expected => Ok(()),
        404 => Err(ClientError::NotFound),
        400 => Err(ClientError::BadRequest {
            body: response.body.clone(),
        }),
        status => Err(ClientError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
