use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::error::{CannonError, CannonResult, FetchFailureKind};

// Alphanumerics or single interior hyphens, 1..=39 characters.
static LOGIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9]|-[A-Za-z0-9]){0,38}$").expect("static login regex")
});

const MAX_LOGIN_LEN: usize = 39;

/// Check that `login` is a syntactically valid GitHub username.
///
/// Fails with an [`FetchFailureKind::InvalidUsername`] upstream error, which is how the calling
/// layer reports a bad login before any request is attempted.
pub fn validate_username(login: &str) -> CannonResult<()> {
    if login.len() <= MAX_LOGIN_LEN && LOGIN_RE.is_match(login) {
        return Ok(());
    }
    Err(CannonError::upstream(
        FetchFailureKind::InvalidUsername,
        format!("\"{login}\" is not a valid GitHub username"),
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/username.rs"]
mod tests;
