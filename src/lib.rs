// SPDX-License-Identifier: Apache-2.0

//! subdump is a command-line tool that archives the complete history of a
//! subreddit. It walks backward through time from the present day to the
//! subreddit's creation date, collecting every submission posted in each
//! time window along with each submission's top-level comments, and writes
//! the results to a pair of CSV files.
//!
//! # Examples
//!
//! Archive all of r/Nootropics into the current directory:
//!
//! ```bash
//! subdump Nootropics
//! ```
//!
//! Archive a subreddit into a specific directory, searching in 90-day
//! windows instead of the default year-long windows:
//!
//! ```bash
//! subdump --output ~/archives --window-days 90 Nootropics
//! ```
//!
//! Get usage and help for the tool:
//!
//! ```bash
//! subdump --help
//! ```
//!
//! # Reddit API Setup
//!
//! subdump talks to the Reddit API as a "script" application using the
//! OAuth password grant, so it needs a registered application and the
//! account credentials of the user it runs as. To set this up:
//!
//! 1. Create a script-type application on your Reddit account's
//!    [app preferences] page.
//! 2. Note the application's client ID and client secret.
//! 3. Export the credentials in your shell's environment:
//!
//!    ```bash
//!    $ export REDDIT_CLIENT_ID='application client id'
//!    $ export REDDIT_CLIENT_SECRET='application client secret'
//!    $ export REDDIT_USERNAME='your reddit username'
//!    $ export REDDIT_PASSWORD='your reddit password'
//!    ```
//!
//! `$REDDIT_USER_AGENT` may also be set to override the user agent string
//! sent with every request; it defaults to the program name and version.
//!
//! # Output
//!
//! Two files are written per run: `subreddit_<name>_topics.csv`, with one
//! row per submission, and `subreddit_<name>_comments.csv`, with one row
//! per top-level comment. Each file carries a header row and a leading
//! row-index column.
//!
//! [app preferences]: https://www.reddit.com/prefs/apps
//!
//! # License
//!
//! subdump is licensed under the terms of the [Apache License 2.0]. Please
//! see the LICENSE file accompanying this source code or visit the previous
//! link for more information on licensing.
//!
//! [Apache License 2.0]: https://www.apache.org/licenses/LICENSE-2.0

pub mod archive;
pub mod cli;
pub mod clock;
pub mod conf;
pub mod export;
pub mod http;
pub mod reddit;

#[cfg(test)]
mod test_utils;
