//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Bodies are compared as parsed JSON so field
//! order does not matter.

use blog_core::{
    BlogClient, BlogPost, ClientError, CreateBlogPost, HttpRequest, HttpResponse, UpdateBlogPost,
};
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

fn client() -> BlogClient {
    BlogClient::new(BASE_URL)
}

fn simulated_response(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Compare method, path, headers and body of a built request with a vector.
fn assert_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method.as_str(), expected["method"].as_str().unwrap(), "{name}: method");
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    match expected.get("body") {
        Some(body) => {
            let expected_headers: Vec<(String, String)> = expected["headers"]
                .as_array()
                .unwrap()
                .iter()
                .map(|h| {
                    let arr = h.as_array().unwrap();
                    (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
                })
                .collect();
            assert_eq!(req.headers, expected_headers, "{name}: headers");

            let req_body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&req_body, body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn assert_error(name: &str, err: ClientError, expected: &Value) {
    match expected.as_str().unwrap() {
        "NotFound" => assert!(matches!(err, ClientError::NotFound), "{name}: expected NotFound"),
        "BadRequest" => {
            assert!(matches!(err, ClientError::BadRequest { .. }), "{name}: expected BadRequest")
        }
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

fn cases(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/create.json")) {
        let name = case["name"].as_str().unwrap();
        let input: CreateBlogPost = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_create_blog_post(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_create_blog_post(simulated_response(&case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_error(name, result.unwrap_err(), expected_error);
        } else {
            let expected: BlogPost = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/list.json")) {
        let name = case["name"].as_str().unwrap();

        let req = c.build_list_blog_posts();
        assert_request(name, &req, &case["expected_request"]);

        let posts = c.parse_list_blog_posts(simulated_response(&case)).unwrap();
        let expected: Vec<BlogPost> = serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(posts, expected, "{name}: parsed result");
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[test]
fn get_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/get.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();

        let req = c.build_get_blog_post(id);
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_get_blog_post(simulated_response(&case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_error(name, result.unwrap_err(), expected_error);
        } else {
            let expected: BlogPost = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/update.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();
        let input: UpdateBlogPost = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_update_blog_post(id, &input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_update_blog_post(simulated_response(&case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_error(name, result.unwrap_err(), expected_error);
        } else {
            let expected: BlogPost = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let c = client();
    for case in cases(include_str!("../../test-vectors/delete.json")) {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_u64().unwrap();

        let req = c.build_delete_blog_post(id);
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_delete_blog_post(simulated_response(&case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_error(name, result.unwrap_err(), expected_error);
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}
