use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudioError {
    Auth(AuthError),
    UnknownPage(String),
    UnknownSample(String),
    Config(String),
}

/// Failures of the login/signup flow. All of them are recoverable and
/// end up as an inline status line in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials,
    EmailAlreadyRegistered,
    MissingRequiredField { field: &'static str },
    AlreadyAuthenticated,
}

impl AuthError {
    /// Status line shown under the form for this failure.
    pub fn status_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials => "❌ Invalid email or password.".to_string(),
            AuthError::EmailAlreadyRegistered => {
                "❌ Email already registered. Please log in.".to_string()
            }
            AuthError::MissingRequiredField { field } => {
                format!("❌ Please fill out the {field} field.")
            }
            AuthError::AlreadyAuthenticated => "❌ You are already logged in.".to_string(),
        }
    }
}

impl fmt::Display for StudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudioError::Auth(e) => write!(f, "Auth error: {e}"),
            StudioError::UnknownPage(id) => write!(f, "Unknown page '{id}'"),
            StudioError::UnknownSample(name) => write!(f, "Unknown sample '{name}'"),
            StudioError::Config(msg) => write!(f, "Config error: {msg}"),
        }
    }
}

impl std::error::Error for StudioError {}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "invalid email or password"),
            AuthError::EmailAlreadyRegistered => write!(f, "email already registered"),
            AuthError::MissingRequiredField { field } => {
                write!(f, "missing required field '{field}'")
            }
            AuthError::AlreadyAuthenticated => write!(f, "already authenticated"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<AuthError> for StudioError {
    fn from(e: AuthError) -> Self {
        StudioError::Auth(e)
    }
}

impl From<serde_json::Error> for StudioError {
    fn from(e: serde_json::Error) -> Self {
        StudioError::Config(e.to_string())
    }
}
