//! In-memory user registry, keyed by email.
//!
//! Lives for one page load. Grows only through signup and never shrinks.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::DemoAccount;
use crate::credentials::Credentials;
use crate::error::AuthError;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub credentials: Credentials,
}

/// The public part of a [`User`], safe to hand to the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: &str, email: &str, password: &str) -> Self {
        User {
            name: name.to_string(),
            email: email.to_string(),
            credentials: Credentials::new(password),
        }
    }

    pub fn profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserRegistry {
    users: HashMap<String, User>,
}

impl UserRegistry {
    /// An empty registry. The site always starts from [`UserRegistry::seeded`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding only the fixed demo account.
    pub fn seeded(account: &DemoAccount) -> Self {
        let mut registry = Self::new();
        let user = User::new(&account.name, &account.email, &account.password);
        registry.users.insert(user.email.clone(), user);
        registry
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Case-sensitive lookup.
    pub fn get(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.users.contains_key(email)
    }

    /// Find the user whose email and password both match exactly.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&User, AuthError> {
        self.users
            .get(email)
            .filter(|u| u.credentials.verify(password))
            .ok_or(AuthError::InvalidCredentials)
    }

    /// Insert a new user. Fails without touching the registry if the email
    /// is already taken.
    pub fn register(&mut self, user: User) -> Result<&User, AuthError> {
        if self.contains(&user.email) {
            return Err(AuthError::EmailAlreadyRegistered);
        }
        let email = user.email.clone();
        Ok(self.users.entry(email).or_insert(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> UserRegistry {
        UserRegistry::seeded(&DemoAccount::default())
    }

    #[test]
    fn seeded_with_demo_account() {
        let reg = seeded();
        assert_eq!(reg.len(), 1);
        let user = reg.get("test@user.com").expect("demo user missing");
        assert_eq!(user.name, "Test");
    }

    #[test]
    fn authenticate_requires_both_fields() {
        let reg = seeded();
        assert!(reg.authenticate("test@user.com", "password").is_ok());
        assert_eq!(
            reg.authenticate("test@user.com", "nope"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            reg.authenticate("TEST@user.com", "password"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn register_rejects_duplicate_email() {
        let mut reg = seeded();
        let dup = User::new("Other", "test@user.com", "different");
        assert_eq!(reg.register(dup).err(), Some(AuthError::EmailAlreadyRegistered));
        assert_eq!(reg.len(), 1);
        // Original record untouched.
        assert!(reg.authenticate("test@user.com", "password").is_ok());
    }

    #[test]
    fn register_grows_by_one() {
        let mut reg = seeded();
        let user = reg.register(User::new("Ada", "ada@example.com", "pw")).unwrap();
        assert_eq!(user.email, "ada@example.com");
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn emails_are_case_sensitive_keys() {
        let mut reg = seeded();
        assert!(reg.register(User::new("Caps", "Test@User.com", "pw")).is_ok());
        assert_eq!(reg.len(), 2);
        assert!(reg.contains("Test@User.com"));
        assert!(!reg.contains("test@USER.com"));
    }

    #[test]
    fn profile_drops_credentials() {
        let user = User::new("Ada", "ada@example.com", "pw");
        let json = serde_json::to_string(&user.profile()).unwrap();
        assert_eq!(json, r#"{"name":"Ada","email":"ada@example.com"}"#);
    }
}
