//! Environment and configuration utilities.

use crate::http;
use std::env;
use thiserror::Error;

const CLIENT_ID_VAR: &str = "REDDIT_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "REDDIT_CLIENT_SECRET";
const USERNAME_VAR: &str = "REDDIT_USERNAME";
const PASSWORD_VAR: &str = "REDDIT_PASSWORD";
const USER_AGENT_VAR: &str = "REDDIT_USER_AGENT";

/// Credentials for a Reddit "script" application.
///
/// Reddit's password grant needs both the application's identity (client
/// id and secret) and the account the script acts as (username and
/// password), plus a user agent string identifying the program.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    pub user_agent: String,
}

impl Credentials {
    /// Loads credentials from the environment.
    ///
    /// `$REDDIT_CLIENT_ID`, `$REDDIT_CLIENT_SECRET`, `$REDDIT_USERNAME`,
    /// and `$REDDIT_PASSWORD` are required; a missing variable is a fatal
    /// configuration error. `$REDDIT_USER_AGENT` is optional and defaults
    /// to the program's name and version.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Credentials {
            client_id: require(CLIENT_ID_VAR)?,
            client_secret: require(CLIENT_SECRET_VAR)?,
            username: require(USERNAME_VAR)?,
            password: require(PASSWORD_VAR)?,
            user_agent: env::var(USER_AGENT_VAR).unwrap_or_else(|_| http::default_user_agent()),
        })
    }
}

fn require(var: &'static str) -> Result<String, Error> {
    env::var(var).map_err(|_| Error::MissingVar(var))
}

/// Indicates that the program is not configured correctly.
#[derive(Debug, Error)]
pub enum Error {
    /// A required environment variable is unset or unreadable.
    #[error("${0} is not set")]
    MissingVar(&'static str),
}
