//! The explicit caller identity threaded through normalization.
//!
//! The acting user is passed as a value with every call rather than
//! recovered from ambient or thread-local state, so concurrent conversions
//! for different users never interfere.

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};

/// The identity context a normalization call runs under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    user: Option<String>,
}

impl RequestContext {
    /// Creates a context acting as the given user.
    pub fn authenticated(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }

    /// Creates a context with no acting user.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Returns the acting user, if any.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the acting user, or [`ConvertError::Unauthenticated`].
    pub fn require_user(&self) -> ConvertResult<&str> {
        self.user.as_deref().ok_or(ConvertError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_context_yields_user() {
        let ctx = RequestContext::authenticated("alice");
        assert_eq!(ctx.user(), Some("alice"));
        assert_eq!(ctx.require_user(), Ok("alice"));
    }

    #[test]
    fn anonymous_context_is_rejected() {
        let ctx = RequestContext::anonymous();
        assert_eq!(ctx.user(), None);
        assert_eq!(ctx.require_user(), Err(ConvertError::Unauthenticated));
    }
}
