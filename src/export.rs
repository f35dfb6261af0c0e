// SPDX-License-Identifier: Apache-2.0

//! Serializes collected tables to CSV files.
//!
//! The layout matches the dataframe-style export the archive's consumers
//! expect: a header row, a leading row-index column whose header name is
//! empty and whose values count from 0, and RFC 4180 quoting for any
//! field containing the delimiter, a quote, or a newline.

use crate::archive::{CommentTable, PostTable};
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const POSTS_HEADER: &str = ",title,score,id,url,comms_num,created,body,timestamp";
const COMMENTS_HEADER: &str = ",topic,body,comm_id,created,timestamp";

/// Writes the post table to the file at `path`.
///
/// One row per submission, in table order, plus a header row.
pub fn export_posts(table: &PostTable, path: &Path) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_posts(table, &mut w)?;
    w.flush()
}

/// Writes the comment table to the file at `path`.
///
/// One row per top-level comment, in table order, plus a header row.
pub fn export_comments(table: &CommentTable, path: &Path) -> io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    write_comments(table, &mut w)?;
    w.flush()
}

fn write_posts(table: &PostTable, w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "{POSTS_HEADER}")?;
    for row in 0..table.len() {
        writeln!(
            w,
            "{row},{},{},{},{},{},{},{},{}",
            field(&table.title[row]),
            table.score[row],
            field(&table.id[row]),
            field(&table.url[row]),
            table.comms_num[row],
            float(table.created[row]),
            field(&table.body[row]),
            field(&table.timestamp[row]),
        )?;
    }
    Ok(())
}

fn write_comments(table: &CommentTable, w: &mut impl Write) -> io::Result<()> {
    writeln!(w, "{COMMENTS_HEADER}")?;
    for row in 0..table.len() {
        writeln!(
            w,
            "{row},{},{},{},{},{}",
            field(&table.topic[row]),
            field(&table.body[row]),
            field(&table.comm_id[row]),
            float(table.created[row]),
            field(&table.timestamp[row]),
        )?;
    }
    Ok(())
}

/// Quotes a field if it contains the delimiter, a quote, or a line break.
/// Embedded quotes are doubled, per RFC 4180.
fn field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Formats a float so integral values keep a trailing `.0`.
fn float(value: f64) -> String {
    format!("{value:?}")
}
