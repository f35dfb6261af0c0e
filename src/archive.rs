// SPDX-License-Identifier: Apache-2.0

//! Collects a subreddit's history into in-memory tables.
//!
//! The collectors in this module run the two passes of the archive
//! pipeline: a windowed walk over the subreddit's submissions, then a
//! comment fetch for every collected submission. Results accumulate in
//! column-oriented tables whose columns always stay positionally aligned;
//! the exporter serializes them as-is.

use crate::clock::local_datetime;
use crate::reddit::Subreddit;
use crate::reddit::client::Error;
use crate::reddit::service::Service;
use crate::reddit::thing::{Comment, Submission};
use log::{debug, info};

/// An iterator of adjacent half-open `[start, end)` unix-timestamp
/// windows, walking backward from `end` until `epoch` is reached.
///
/// Windows are yielded newest first. Adjacent windows share a boundary
/// but never overlap, so a submission can appear in at most one window.
/// The oldest window is truncated at `epoch`.
#[derive(Clone, Copy, Debug)]
pub struct Windows {
    epoch: i64,
    hi: i64,
    step: i64,
}

impl Windows {
    /// Creates a window sequence covering `[epoch, end)` in `step`-second
    /// increments.
    ///
    /// Yields nothing if `end` is not after `epoch`. `step` must be
    /// positive.
    pub fn walk_back(end: i64, epoch: i64, step: i64) -> Self {
        assert!(step > 0, "window step must be positive");
        Self { epoch, hi: end, step }
    }
}

impl Iterator for Windows {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.hi <= self.epoch {
            return None;
        }
        let lo = self.epoch.max(self.hi - self.step);
        let window = (lo, self.hi);
        self.hi = lo;
        Some(window)
    }
}

/// Column-oriented accumulator of submissions.
///
/// Every `push` appends to all columns, so the columns share one length
/// and one positional order for the life of the table.
#[derive(Debug, Default)]
pub struct PostTable {
    pub title: Vec<String>,
    pub score: Vec<i64>,
    pub id: Vec<String>,
    pub url: Vec<String>,
    pub comms_num: Vec<u64>,
    pub created: Vec<f64>,
    pub body: Vec<String>,

    /// Derived column: always `local_datetime(created)` of the same row.
    pub timestamp: Vec<String>,
}

impl PostTable {
    /// Appends one submission's fields to every column.
    pub fn push(&mut self, submission: &Submission) {
        self.title.push(submission.title.clone());
        self.score.push(submission.score);
        self.id.push(submission.id.clone());
        self.url.push(submission.url.clone());
        self.comms_num.push(submission.num_comments);
        self.created.push(submission.created_utc);
        self.body.push(submission.selftext.clone());
        self.timestamp.push(local_datetime(submission.created_utc));
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.id.len()
    }

    /// True if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

/// Column-oriented accumulator of top-level comments.
#[derive(Debug, Default)]
pub struct CommentTable {
    /// The id of the submission each comment belongs to.
    pub topic: Vec<String>,
    pub body: Vec<String>,
    pub comm_id: Vec<String>,
    pub created: Vec<f64>,

    /// Derived column: always `local_datetime(created)` of the same row.
    pub timestamp: Vec<String>,
}

impl CommentTable {
    /// Appends one comment's fields to every column.
    ///
    /// `topic` is the id of the submission the comment was posted under.
    pub fn push(&mut self, topic: &str, comment: &Comment) {
        self.topic.push(topic.to_string());
        self.body.push(comment.body.clone());
        self.comm_id.push(comment.id.clone());
        self.created.push(comment.created_utc);
        self.timestamp.push(local_datetime(comment.created_utc));
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.comm_id.len()
    }

    /// True if the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.comm_id.is_empty()
    }
}

/// Collects every submission in every window into a [`PostTable`], in
/// encounter order.
///
/// Rows are never deduplicated; window sequences from
/// [`Windows::walk_back`] cannot overlap, so each submission appears at
/// most once. Any service or parse error aborts the collection.
pub async fn collect_posts<S: Service>(
    subreddit: &Subreddit<S>,
    windows: impl Iterator<Item = (i64, i64)>,
) -> Result<PostTable, Error> {
    let mut table = PostTable::default();
    for (start, end) in windows {
        debug!("collecting submissions in [{start}, {end})");
        for submission in subreddit.submissions_between(start, end).await? {
            table.push(&submission);
        }
        info!("{} submissions collected so far", table.len());
    }
    Ok(table)
}

/// Collects the top-level comments of every listed submission into a
/// [`CommentTable`].
///
/// `topics` is iterated in its original order, and a monotonically
/// increasing progress counter is printed to stdout for each submission,
/// since this pass dominates the runtime. A submission with no top-level
/// comments contributes zero rows. Any service or parse error aborts the
/// collection; nothing is saved for a partial pass.
pub async fn collect_comments<S: Service>(
    subreddit: &Subreddit<S>,
    topics: &[String],
) -> Result<CommentTable, Error> {
    let mut table = CommentTable::default();
    for (iteration, topic) in topics.iter().enumerate() {
        println!("{}/{}", iteration + 1, topics.len());
        for comment in subreddit.top_level_comments(topic).await? {
            table.push(topic, &comment);
        }
    }
    Ok(table)
}
