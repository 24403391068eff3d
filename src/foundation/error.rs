use std::fmt;

/// Convenience result type used across the crate.
pub type CannonResult<T> = Result<T, CannonError>;

/// Category of an upstream (calendar provider) failure.
///
/// The synthesizer never fetches anything itself; these categories exist so that a provider
/// response carrying an error, or a caller-side username check, surfaces as a typed failure
/// instead of being papered over with placeholder data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchFailureKind {
    /// The requested login is not a syntactically valid GitHub username.
    InvalidUsername,
    /// The provider reports that the user does not exist.
    NotFound,
    /// The provider throttled the request.
    RateLimited,
    /// Transport-level failure reaching the provider.
    Network,
    /// The provider refused access (bad or missing credentials).
    AccessDenied,
    /// Any other provider-reported failure.
    Other,
}

impl FetchFailureKind {
    /// Short human-readable category suitable for user-facing messages.
    pub fn category(self) -> &'static str {
        match self {
            Self::InvalidUsername => "invalid username format",
            Self::NotFound => "user not found",
            Self::RateLimited => "rate limited",
            Self::Network => "network error",
            Self::AccessDenied => "access denied",
            Self::Other => "upstream error",
        }
    }
}

impl fmt::Display for FetchFailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.category())
    }
}

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum CannonError {
    /// The calendar payload failed structural validation.
    #[error("malformed calendar data: {0}")]
    MalformedCalendarData(String),

    /// The calendar has no weeks, so there is nothing to lay out.
    #[error("empty calendar: no weeks to render")]
    EmptyCalendar,

    /// The calendar provider (or the request for it) failed.
    #[error("upstream fetch failure ({kind}): {message}")]
    UpstreamFetch {
        /// Failure category.
        kind: FetchFailureKind,
        /// Provider or caller supplied detail.
        message: String,
    },

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CannonError {
    /// Build a [`CannonError::MalformedCalendarData`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedCalendarData(msg.into())
    }

    /// Build a [`CannonError::UpstreamFetch`] value.
    pub fn upstream(kind: FetchFailureKind, msg: impl Into<String>) -> Self {
        Self::UpstreamFetch {
            kind,
            message: msg.into(),
        }
    }

    /// Build a [`CannonError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CannonError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Upstream failure category, if this is an upstream failure.
    pub fn fetch_kind(&self) -> Option<FetchFailureKind> {
        match self {
            Self::UpstreamFetch { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
