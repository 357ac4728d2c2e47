//! Request parsing.
//!
//! # Responsibilities
//! - Extract the `username` query parameter
//! - Enforce "exactly one, non-empty"

use url::form_urlencoded;

/// Query parameter carrying the username.
pub const USERNAME_PARAM: &str = "username";

/// Return the username if the raw query holds exactly one non-empty
/// `username` value.
pub fn single_username(query: Option<&str>) -> Option<String> {
    let query = query?;

    let mut values = form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == USERNAME_PARAM)
        .map(|(_, value)| value.into_owned());

    match (values.next(), values.next()) {
        (Some(username), None) if !username.is_empty() => Some(username),
        _ => None,
    }
}
