// SPDX-License-Identifier: Apache-2.0

//! HTTPS connector for the Reddit API.
//!
//! Service structures in this module provide a low-level way to interact
//! with the Reddit API over HTTPS, essentially a specialized HTTPS client
//! specifically for Reddit. Authentication, OAuth token handling, and URL
//! construction all live here; parsing the returned JSON is the job of
//! [`crate::reddit::thing`].

use crate::conf::Credentials;
use crate::http::{self, HTTPError, HTTPResult};
use reqwest::{Client, header};
use serde::Deserialize;

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_ROOT: &str = "https://oauth.reddit.com";

/// Submissions per search page, the maximum the API allows.
const PAGE_LIMIT: u32 = 100;

/// A service for retrieving a subreddit's history.
///
/// Using this trait, clients can implement different ways of connecting
/// to the Reddit API, such as an actual connector for production code,
/// and a mocked connector for testing purposes. All methods return the
/// raw response body; callers parse it into things.
pub trait Service {
    /// Retrieves metadata about `subreddit`.
    fn about(&self, subreddit: &str) -> impl Future<Output = HTTPResult<String>> + Send;

    /// Retrieves one page of submissions to `subreddit` created within
    /// `[start, end)` unix seconds. `after` is the pagination cursor
    /// returned by the previous page, or `None` for the first page.
    fn submissions_window(
        &self,
        subreddit: &str,
        start: i64,
        end: i64,
        after: Option<&str>,
    ) -> impl Future<Output = HTTPResult<String>> + Send;

    /// Retrieves the comment tree of the submission identified by
    /// `article`, limited to top-level comments.
    fn comments(
        &self,
        subreddit: &str,
        article: &str,
    ) -> impl Future<Output = HTTPResult<String>> + Send;
}

/// A service that contacts the Reddit API directly to retrieve information.
///
/// A `RedditService` only exists in an authenticated state: construction
/// performs the OAuth password grant and fails if Reddit rejects the
/// credentials. The single underlying HTTP connection pool and bearer
/// token are reused for the whole run.
pub struct RedditService {
    client: Client,
    token: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}

impl RedditService {
    /// Authenticates against the Reddit API with the password grant.
    ///
    /// Returns [`HTTPError::Auth`] if the service rejects the credentials.
    /// This is fatal; there is no retry.
    pub async fn authenticate(credentials: &Credentials) -> HTTPResult<Self> {
        let client = http::client(&credentials.user_agent);
        let params = [
            ("grant_type", "password"),
            ("username", credentials.username.as_str()),
            ("password", credentials.password.as_str()),
        ];
        let resp = client
            .post(TOKEN_URL)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&params)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(HTTPError::Http(resp.status()));
        }

        // Reddit reports bad account credentials with a 200 response whose
        // body carries an error field instead of a token.
        let token: TokenResponse = resp.json().await?;
        match (token.access_token, token.error) {
            (Some(token), _) => Ok(Self { client, token }),
            (None, Some(error)) => Err(HTTPError::Auth(error)),
            (None, None) => Err(HTTPError::Auth(String::from("no access token in response"))),
        }
    }

    fn about_uri(subreddit: &str) -> String {
        format!("{API_ROOT}/r/{subreddit}/about")
    }

    fn search_uri(subreddit: &str, start: i64, end: i64, after: Option<&str>) -> String {
        let mut uri = format!(
            "{API_ROOT}/r/{subreddit}/search?q=timestamp%3A{start}..{end}\
             &syntax=cloudsearch&restrict_sr=on&sort=new&limit={PAGE_LIMIT}"
        );
        if let Some(after) = after {
            uri.push_str("&after=");
            uri.push_str(&urlencoding::encode(after));
        }
        uri
    }

    fn comments_uri(subreddit: &str, article: &str) -> String {
        format!("{API_ROOT}/r/{subreddit}/comments/{article}?depth=1&limit=500")
    }

    /// Sends a GET request to a Reddit API endpoint and returns the raw body.
    async fn get(&self, uri: &str) -> HTTPResult<String> {
        let resp = self.client.get(uri).bearer_auth(&self.token).send().await?;

        if !resp.status().is_success() {
            Err(HTTPError::Http(resp.status()))
        } else {
            let content_type = resp
                .headers()
                .get(header::CONTENT_TYPE)
                .ok_or(HTTPError::MissingContentType)?
                .to_str()?;
            if !content_type.starts_with("application/json") {
                Err(HTTPError::UnexpectedContentType(content_type.to_string()))
            } else {
                Ok(resp.text().await?)
            }
        }
    }
}

impl Service for RedditService {
    async fn about(&self, subreddit: &str) -> HTTPResult<String> {
        self.get(&Self::about_uri(subreddit)).await
    }

    async fn submissions_window(
        &self,
        subreddit: &str,
        start: i64,
        end: i64,
        after: Option<&str>,
    ) -> HTTPResult<String> {
        self.get(&Self::search_uri(subreddit, start, end, after)).await
    }

    async fn comments(&self, subreddit: &str, article: &str) -> HTTPResult<String> {
        self.get(&Self::comments_uri(subreddit, article)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_returns_a_uri_for_subreddit_metadata() {
        let actual_uri = RedditService::about_uri("Nootropics");
        let expected_uri = "https://oauth.reddit.com/r/Nootropics/about";
        assert_eq!(actual_uri, expected_uri);
    }

    #[test]
    fn it_returns_a_uri_for_a_search_window() {
        let actual_uri = RedditService::search_uri("Nootropics", 1485796660, 1517332671, None);
        let expected_uri = "https://oauth.reddit.com/r/Nootropics/search\
                            ?q=timestamp%3A1485796660..1517332671\
                            &syntax=cloudsearch&restrict_sr=on&sort=new&limit=100";
        assert_eq!(actual_uri, expected_uri);
    }

    #[test]
    fn it_appends_the_pagination_cursor_to_a_search_uri() {
        let actual_uri =
            RedditService::search_uri("Nootropics", 1485796660, 1517332671, Some("t3_abc123"));
        assert!(actual_uri.ends_with("&after=t3_abc123"));
    }

    #[test]
    fn it_percent_encodes_the_pagination_cursor() {
        let actual_uri = RedditService::search_uri("Nootropics", 0, 1, Some("t3 odd/cursor"));
        assert!(actual_uri.ends_with("&after=t3%20odd%2Fcursor"));
    }

    #[test]
    fn it_returns_a_uri_for_a_comment_tree() {
        let actual_uri = RedditService::comments_uri("Nootropics", "abc123");
        let expected_uri = "https://oauth.reddit.com/r/Nootropics/comments/abc123?depth=1&limit=500";
        assert_eq!(actual_uri, expected_uri);
    }
}
