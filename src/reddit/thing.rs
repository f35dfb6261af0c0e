// SPDX-License-Identifier: Apache-2.0

//! A "thing" in the Reddit sense.
//!
//! Historically in the Reddit API and its old source code, a "Thing" was
//! any element of the Reddit system: users, posts, comments, subreddits,
//! and so on. This module encapsulates that idea and parses JSON payloads
//! from the Reddit API into the handful of things subdump cares about:
//! submissions (`t3`), comments (`t1`), and subreddit metadata (`t5`).

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// A parse error.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed JSON, or JSON whose fields do not match the expected thing.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structurally valid JSON that is not shaped like the expected payload.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(&'static str),
}

// Listing envelopes. Every Reddit API response wraps its payload in a
// {"kind": ..., "data": ...} envelope; a Listing's data holds the page of
// children plus the pagination cursor.
#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    after: Option<String>,
    #[serde(default)]
    children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
struct Child {
    kind: String,
    data: Value,
}

/// A submission (a top-level post) in a subreddit.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Submission {
    /// Opaque identifier, unique per submission.
    pub id: String,

    /// Submission title.
    pub title: String,

    /// Submission score (upvotes minus downvotes, fuzzed by Reddit).
    pub score: i64,

    /// Link URL; for self posts, the submission's own permalink.
    pub url: String,

    /// Number of comments on the submission, as reported by the API.
    pub num_comments: u64,

    /// Creation time as unix seconds.
    pub created_utc: f64,

    /// Body text of a self post. Empty for link posts.
    #[serde(default)]
    pub selftext: String,
}

/// One page of submissions from a windowed search, along with the cursor
/// to the next page, if there is one.
#[derive(Debug)]
pub struct SubmissionPage {
    pub submissions: Vec<Submission>,
    pub after: Option<String>,
}

impl SubmissionPage {
    /// Parses one page of a submission search.
    ///
    /// `body` is the raw response of a call to `/r/<subreddit>/search`.
    /// Children that are not submissions are skipped.
    pub fn parse(body: &str) -> Result<Self, Error> {
        let listing: Listing = serde_json::from_str(body)?;
        let after = listing.data.after.filter(|cursor| !cursor.is_empty());
        let submissions = listing
            .data
            .children
            .into_iter()
            .filter(|child| child.kind == "t3")
            .map(|child| serde_json::from_value(child.data))
            .collect::<Result<Vec<Submission>, _>>()?;
        Ok(SubmissionPage { submissions, after })
    }
}

/// A comment on a submission.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Comment {
    /// Opaque identifier, unique per comment.
    pub id: String,

    /// Comment body text.
    pub body: String,

    /// Creation time as unix seconds.
    pub created_utc: f64,
}

impl Comment {
    /// Parses the top-level comments out of a comment tree response.
    ///
    /// `body` is the raw response of a call to
    /// `/r/<subreddit>/comments/<article>`: a two-element JSON array whose
    /// first listing holds the submission itself and whose second listing
    /// holds the top-level comments. Nested replies live inside each
    /// comment's `replies` field and are not parsed; `more` placeholders
    /// are skipped.
    pub fn parse_top_level(body: &str) -> Result<Vec<Self>, Error> {
        let listings: Vec<Listing> = serde_json::from_str(body)?;
        let comments = listings
            .into_iter()
            .nth(1)
            .ok_or(Error::UnexpectedShape("comment response has no comment listing"))?;
        comments
            .data
            .children
            .into_iter()
            .filter(|child| child.kind == "t1")
            .map(|child| serde_json::from_value(child.data).map_err(Error::from))
            .collect()
    }
}

/// Metadata about a subreddit.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct About {
    /// Display name of the subreddit, without the `/r/` prefix.
    pub display_name: String,

    /// The date the subreddit was created, as unix seconds.
    pub created_utc: f64,
}

impl About {
    /// Parses subreddit metadata.
    ///
    /// `body` is the raw response of a call to `/r/<subreddit>/about`.
    pub fn parse(body: &str) -> Result<Self, Error> {
        let envelope: Child = serde_json::from_str(body)?;
        if envelope.kind != "t5" {
            return Err(Error::UnexpectedShape("about response is not a subreddit thing"));
        }
        serde_json::from_value(envelope.data).map_err(Error::from)
    }
}
