//! Whitelist command types and error definitions.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur while talking to the panel.
#[derive(Debug, Error)]
pub enum PanelError {
    /// Action was neither `add` nor `remove`.
    #[error("Illegal whitelist operation '{0}'")]
    InvalidAction(String),

    /// Username would corrupt the console command or the form body.
    #[error("Illegal username '{0}'")]
    InvalidUsername(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build panel client: {0}")]
    Client(String),

    /// DNS, connect or send failure.
    #[error("{0}")]
    Transport(String),

    /// Round-trip completed but the body could not be read.
    #[error("Failed to read panel response: {0}")]
    ReadBody(String),
}

/// Result type for panel operations.
pub type PanelResult<T> = Result<T, PanelError>;

impl PanelError {
    pub(crate) fn transport(err: &reqwest::Error) -> Self {
        Self::Transport(error_chain(err))
    }

    pub(crate) fn read_body(err: &reqwest::Error) -> Self {
        Self::ReadBody(error_chain(err))
    }
}

/// Render an error together with all of its sources.
///
/// `reqwest` keeps the interesting part ("Connection refused") in the
/// source chain, not in its own `Display`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut previous = err.to_string();
    let mut description = previous.clone();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        // Wrappers that display their inner error would repeat it
        if !previous.ends_with(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        previous = cause_text;
        source = cause.source();
    }
    description
}

/// Whitelist mutation understood by the game server console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhitelistAction {
    Add,
    Remove,
}

impl WhitelistAction {
    pub fn as_str(self) -> &'static str {
        match self {
            WhitelistAction::Add => "add",
            WhitelistAction::Remove => "remove",
        }
    }
}

impl fmt::Display for WhitelistAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WhitelistAction {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(WhitelistAction::Add),
            "remove" => Ok(WhitelistAction::Remove),
            other => Err(PanelError::InvalidAction(other.to_string())),
        }
    }
}

/// A validated `whitelist <action> <username>` console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistCommand {
    action: WhitelistAction,
    username: String,
}

impl WhitelistCommand {
    /// Build a command, rejecting usernames that cannot be sent verbatim.
    pub fn new(action: WhitelistAction, username: &str) -> PanelResult<Self> {
        let illegal = username.is_empty()
            || username
                .chars()
                .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '&' | '=' | '+' | '%'));
        if illegal {
            return Err(PanelError::InvalidUsername(username.to_string()));
        }

        Ok(Self {
            action,
            username: username.to_string(),
        })
    }

    pub fn action(&self) -> WhitelistAction {
        self.action
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Form-encoded request body. Sent as-is; the username was validated
    /// not to contain form metacharacters.
    pub fn form_body(&self) -> String {
        format!("command={}", self)
    }
}

impl fmt::Display for WhitelistCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "whitelist {} {}", self.action, self.username)
    }
}
