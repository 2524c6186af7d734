//! Explicit session context.
//!
//! One `Session` covers one user's interaction between login and
//! logout/reload. It replaces ambient page-global state: handlers receive
//! it as an argument, and nothing survives process exit.

use serde::Deserialize;

use crate::items::LineItemStore;
use crate::numbering::SequentialAllocator;

/// Authenticated user as returned by `POST /usuario/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub nome: String,
    pub email: String,
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    user: Option<User>,
    pub items: LineItemStore,
    pub numbers: SequentialAllocator,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn login(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Drops the user and the quote under composition.
    pub fn logout(&mut self) {
        self.user = None;
        self.items.clear();
    }

    pub fn reset_items(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{Session, User};

    fn user() -> User {
        User { id: "u-1".to_string(), nome: "Ana".to_string(), email: "ana@example.com".to_string() }
    }

    #[test]
    fn session_starts_unauthenticated_with_an_empty_list() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.items.is_empty());
    }

    #[test]
    fn login_sets_the_user_and_logout_resets_everything() {
        let mut session = Session::new();
        session.login(user());
        session.items.add();
        assert!(session.is_authenticated());

        session.logout();
        assert!(!session.is_authenticated());
        assert!(session.items.is_empty());
    }

    #[test]
    fn user_record_parses_the_login_response() {
        let body = r#"{"id": "u-1", "nome": "Ana", "email": "ana@example.com", "telefone": null}"#;
        let parsed: User = serde_json::from_str(body).expect("login response parses");
        assert_eq!(parsed, user());
    }
}
