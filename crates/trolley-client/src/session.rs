//! Session identity.
//!
//! The cart store does not decide who is logged in; the application's
//! identity provider does, and pushes transitions into the store via
//! [`crate::store::CartStore::set_session`]. A [`Session`] is just the
//! snapshot the store gates on: which user, if any.

use trolley_core::UserId;

/// The identity context a cart is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    user_id: Option<UserId>,
}

impl Session {
    /// A session for an authenticated user.
    pub fn logged_in(user_id: impl Into<UserId>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// No authenticated user.
    pub fn logged_out() -> Self {
        Self { user_id: None }
    }

    /// Whether a user is currently authenticated.
    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    /// The authenticated user, if any.
    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_in() {
        let session = Session::logged_in("u1");
        assert!(session.is_logged_in());
        assert_eq!(session.user_id().unwrap().as_str(), "u1");
    }

    #[test]
    fn test_logged_out() {
        let session = Session::logged_out();
        assert!(!session.is_logged_in());
        assert!(session.user_id().is_none());
    }

    #[test]
    fn test_default_is_logged_out() {
        assert_eq!(Session::default(), Session::logged_out());
    }

    #[test]
    fn test_same_user_compares_equal() {
        assert_eq!(Session::logged_in("u1"), Session::logged_in("u1"));
        assert_ne!(Session::logged_in("u1"), Session::logged_in("u2"));
    }
}
