//! Outcome of a client operation.
//!
//! Transport and decoding failures stop a call immediately and surface as
//! [`CallError::Client`]. Once a response is decoded, every logical problem
//! (provider error, unexpected state) is collected into [`Causes`] and
//! returned together with the response as [`CallError::Rejected`], so none
//! of them masks another.

use std::error::Error;
use std::fmt;

use super::ClientError;
use crate::objects::ProviderError;

/// Result of a client operation returning `T`.
pub type CallResult<T> = Result<T, CallError<T>>;

/// One reason a decoded response was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Cause {
    /// The envelope reported `Success: false`.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The call succeeded but left the payment in another state.
    #[error("unexpected payment status: {actual}")]
    UnexpectedStatus {
        expected: &'static str,
        actual: String,
    },
}

/// Every cause found while checking one response, in detection order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Causes(Vec<Cause>);

impl Causes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cause: impl Into<Cause>) {
        self.0.push(cause.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cause> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<&Cause> {
        self.0.first()
    }

    /// The provider error, if the envelope reported one.
    pub fn provider_error(&self) -> Option<&ProviderError> {
        self.0.iter().find_map(|cause| match cause {
            Cause::Provider(err) => Some(err),
            _ => None,
        })
    }

    /// The actual status, if it did not match the expected one.
    pub fn unexpected_status(&self) -> Option<&str> {
        self.0.iter().find_map(|cause| match cause {
            Cause::UnexpectedStatus { actual, .. } => Some(actual.as_str()),
            _ => None,
        })
    }

    /// `Ok(response)` when nothing was found, otherwise a rejection carrying
    /// both the response and the causes.
    pub fn into_result<T>(self, response: T) -> CallResult<T> {
        if self.is_empty() {
            Ok(response)
        } else {
            Err(CallError::Rejected(Rejected {
                response,
                causes: self,
            }))
        }
    }
}

impl From<Vec<Cause>> for Causes {
    fn from(causes: Vec<Cause>) -> Self {
        Self(causes)
    }
}

impl<'a> IntoIterator for &'a Causes {
    type Item = &'a Cause;
    type IntoIter = std::slice::Iter<'a, Cause>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Causes {
    type Item = Cause;
    type IntoIter = std::vec::IntoIter<Cause>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Causes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cause) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{cause}")?;
        }
        Ok(())
    }
}

impl Error for Causes {}

/// A decoded response that failed one or more checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected<T> {
    pub response: T,
    pub causes: Causes,
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.causes, f)
    }
}

impl<T: fmt::Debug> Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.causes.first().map(|cause| cause as &(dyn Error + 'static))
    }
}

/// Error of a client operation returning `T`.
#[derive(Debug)]
pub enum CallError<T> {
    /// No response was decoded.
    Client(ClientError),
    /// A response was decoded but not accepted.
    Rejected(Rejected<T>),
}

impl<T> CallError<T> {
    /// The decoded response, when there is one.
    pub fn response(&self) -> Option<&T> {
        match self {
            CallError::Client(_) => None,
            CallError::Rejected(rejected) => Some(&rejected.response),
        }
    }

    pub fn into_response(self) -> Option<T> {
        match self {
            CallError::Client(_) => None,
            CallError::Rejected(rejected) => Some(rejected.response),
        }
    }

    pub fn causes(&self) -> Option<&Causes> {
        match self {
            CallError::Client(_) => None,
            CallError::Rejected(rejected) => Some(&rejected.causes),
        }
    }
}

impl<T> From<ClientError> for CallError<T> {
    fn from(err: ClientError) -> Self {
        CallError::Client(err)
    }
}

impl<T> fmt::Display for CallError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallError::Client(err) => fmt::Display::fmt(err, f),
            CallError::Rejected(rejected) => fmt::Display::fmt(rejected, f),
        }
    }
}

impl<T: fmt::Debug> Error for CallError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CallError::Client(err) => err.source(),
            CallError::Rejected(rejected) => rejected.source(),
        }
    }
}
