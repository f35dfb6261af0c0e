use crate::http::{HTTPError, HTTPResult};
use crate::reddit::service::Service;
use std::fs;
use std::path::Path;

const EMPTY_LISTING: &str = r#"{"kind": "Listing", "data": {"after": null, "children": []}}"#;

const EMPTY_TREE: &str = r#"[
    {"kind": "Listing", "data": {"after": null, "children": []}},
    {"kind": "Listing", "data": {"after": null, "children": []}}
]"#;

pub fn load_data(file: &str) -> String {
    fs::read_to_string(format!("tests/data/{file}.json")).expect("could not find test data")
}

fn load_data_or(file: &str, fallback: &str) -> String {
    let path = format!("tests/data/{file}.json");
    if Path::new(&path).exists() {
        fs::read_to_string(&path).expect("could not read test data")
    } else {
        fallback.to_string()
    }
}

/// A [`Service`] that serves canned JSON fixtures from `tests/data/`.
///
/// Fixture files are keyed by the service's suffix plus the request:
/// `about_<suffix>.json`, `search_<suffix>_<start>.json` (first page of a
/// window) and `search_<suffix>_<start>_<after>.json` (subsequent pages),
/// and `comments_<suffix>_<article>.json`. Search windows and comment
/// trees without a fixture file resolve to empty listings, so tests only
/// provide fixtures for the data they care about.
pub struct TestService {
    suffix: &'static str,
}

impl TestService {
    pub fn new(suffix: &'static str) -> Self {
        Self { suffix }
    }
}

/// A [`Service`] whose session has been rejected by the remote end:
/// every call fails with an authentication error.
pub struct RejectedService;

impl Service for RejectedService {
    async fn about(&self, _subreddit: &str) -> HTTPResult<String> {
        Err(HTTPError::Auth(String::from("invalid_grant")))
    }

    async fn submissions_window(
        &self,
        _subreddit: &str,
        _start: i64,
        _end: i64,
        _after: Option<&str>,
    ) -> HTTPResult<String> {
        Err(HTTPError::Auth(String::from("invalid_grant")))
    }

    async fn comments(&self, _subreddit: &str, _article: &str) -> HTTPResult<String> {
        Err(HTTPError::Auth(String::from("invalid_grant")))
    }
}

impl Service for TestService {
    async fn about(&self, _subreddit: &str) -> HTTPResult<String> {
        Ok(load_data(&format!("about_{}", self.suffix)))
    }

    async fn submissions_window(
        &self,
        _subreddit: &str,
        start: i64,
        _end: i64,
        after: Option<&str>,
    ) -> HTTPResult<String> {
        let file = match after {
            Some(after) => format!("search_{}_{start}_{after}", self.suffix),
            None => format!("search_{}_{start}", self.suffix),
        };
        Ok(load_data_or(&file, EMPTY_LISTING))
    }

    async fn comments(&self, _subreddit: &str, article: &str) -> HTTPResult<String> {
        Ok(load_data_or(&format!("comments_{}_{article}", self.suffix), EMPTY_TREE))
    }
}
