//! Stored secrets for the in-memory user registry.
//!
//! The demo keeps passwords in plaintext. Callers only ever go through
//! [`Credentials::new`] and [`Credentials::verify`], so a real scheme can
//! replace the plaintext variant without touching them.

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Demo-only: the raw password, compared byte for byte.
    Plaintext(String),
}

impl Credentials {
    pub fn new(password: &str) -> Self {
        Credentials::Plaintext(password.to_string())
    }

    /// Exact, case-sensitive match against the stored secret.
    pub fn verify(&self, password: &str) -> bool {
        match self {
            Credentials::Plaintext(stored) => stored == password,
        }
    }
}

// Never print the secret, even in debug output.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Plaintext(_) => f.write_str("Credentials::Plaintext(<redacted>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_is_exact_and_case_sensitive() {
        let creds = Credentials::new("password");
        assert!(creds.verify("password"));
        assert!(!creds.verify("Password"));
        assert!(!creds.verify("password "));
        assert!(!creds.verify(""));
    }

    #[test]
    fn debug_output_is_redacted() {
        let creds = Credentials::new("hunter2");
        let shown = format!("{creds:?}");
        assert!(!shown.contains("hunter2"));
    }
}
