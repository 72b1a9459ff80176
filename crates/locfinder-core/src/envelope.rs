//! Success-or-failure result returned by every client operation.
//!
//! A non-2xx upstream response is not an error in the Rust sense: it is
//! parsed into a [`FailureResponse`] and returned as [`Envelope::Failure`].
//! Transport and parse problems are reported separately by the client.

use serde::{Deserialize, Deserializer, Serialize};

/// Problem-details body the upstream returns with a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResponse {
    /// HTTP status as reported in the body. Numeric statuses are kept as
    /// their decimal string.
    #[serde(deserialize_with = "status_string")]
    pub status: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub instance: Option<String>,
}

fn status_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawStatus {
        Text(String),
        Code(u16),
    }

    Ok(match RawStatus::deserialize(deserializer)? {
        RawStatus::Text(s) => s,
        RawStatus::Code(code) => code.to_string(),
    })
}

/// Outcome of one upstream call: exactly one of a parsed payload or a
/// structured failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "body", rename_all = "lowercase")]
pub enum Envelope<T> {
    Success(T),
    Failure(FailureResponse),
}

impl<T> Envelope<T> {
    /// `true` iff this envelope holds a [`FailureResponse`].
    #[must_use]
    pub const fn failed(&self) -> bool {
        matches!(self, Envelope::Failure(_))
    }

    #[must_use]
    pub const fn success(&self) -> Option<&T> {
        match self {
            Envelope::Success(value) => Some(value),
            Envelope::Failure(_) => None,
        }
    }

    #[must_use]
    pub const fn failure(&self) -> Option<&FailureResponse> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Failure(failure) => Some(failure),
        }
    }

    /// Applies `f` to the success payload, leaving a failure untouched.
    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Envelope::Success(value) => Envelope::Success(f(value)),
            Envelope::Failure(failure) => Envelope::Failure(failure),
        }
    }

    /// Converts into a standard `Result`, with the failure body as the error.
    ///
    /// # Errors
    ///
    /// Returns the [`FailureResponse`] when the envelope is a failure.
    pub fn into_result(self) -> Result<T, FailureResponse> {
        self.into()
    }
}

impl<T> From<Envelope<T>> for Result<T, FailureResponse> {
    fn from(envelope: Envelope<T>) -> Self {
        match envelope {
            Envelope::Success(value) => Ok(value),
            Envelope::Failure(failure) => Err(failure),
        }
    }
}

impl std::fmt::Display for FailureResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "status {}", self.status)?;
        if let Some(title) = &self.title {
            write!(f, ": {title}")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}
