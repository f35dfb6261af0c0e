// SPDX-License-Identifier: Apache-2.0

//! Clients for reading data from the Reddit API.

use crate::http;
use crate::reddit::service::Service;
use crate::reddit::thing::{self, Comment, Submission, SubmissionPage};
use log::debug;
use thiserror::Error;

/// Represents a single subreddit.
///
/// This is the handle the rest of the program works through: it is bound
/// to one community and one [`Service`], and every call it makes goes
/// through that service.
#[derive(Debug)]
pub struct Subreddit<S: Service> {
    name: String,
    service: S,
}

impl<S: Service> Subreddit<S> {
    /// Creates a new client for the named subreddit.
    ///
    /// `name` is the subreddit's name without the `/r/` prefix. `service`
    /// is the actual service implementation that will be used to retrieve
    /// the subreddit's history.
    pub fn new(name: impl Into<String>, service: S) -> Self {
        Self { name: name.into(), service }
    }

    /// The subreddit's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The date the subreddit was created, as unix seconds.
    pub async fn created(&self) -> Result<f64, Error> {
        let body = self.service.about(&self.name).await?;
        Ok(thing::About::parse(&body)?.created_utc)
    }

    /// All submissions created within `[start, end)` unix seconds, newest
    /// first, draining the service's pagination cursor until the window
    /// is exhausted.
    pub async fn submissions_between(&self, start: i64, end: i64) -> Result<Vec<Submission>, Error> {
        let mut submissions = Vec::new();
        let mut after: Option<String> = None;
        loop {
            let body = self
                .service
                .submissions_window(&self.name, start, end, after.as_deref())
                .await?;
            let page = SubmissionPage::parse(&body)?;
            debug!(
                "window [{start}, {end}): page of {} submissions, after = {:?}",
                page.submissions.len(),
                page.after,
            );
            let done = page.after.is_none() || page.submissions.is_empty();
            submissions.extend(page.submissions);
            if done {
                break;
            }
            after = page.after;
        }
        Ok(submissions)
    }

    /// The top-level comments of the submission identified by `article`,
    /// in the order the API returns them. Nested replies are excluded.
    pub async fn top_level_comments(&self, article: &str) -> Result<Vec<Comment>, Error> {
        let body = self.service.comments(&self.name, article).await?;
        Ok(Comment::parse_top_level(&body)?)
    }
}

/// A client error.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the underlying HTTP service.
    #[error("Service error: {0}")]
    Service(#[from] http::HTTPError),

    /// An error parsing data.
    #[error("Parse error: {0}")]
    Parse(#[from] thing::Error),
}
