//! Login/signup modal host.

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ModalForm {
    Login,
    Signup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusKind {
    Success,
    Error,
}

/// Inline status line under the modal form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn success(text: &str) -> Self {
        StatusLine {
            kind: StatusKind::Success,
            text: text.to_string(),
        }
    }

    pub fn error(err: &AuthError) -> Self {
        StatusLine {
            kind: StatusKind::Error,
            text: err.status_message(),
        }
    }
}

pub const LOGIN_SUCCESS: &str = "✅ Log in successful! Redirecting...";
pub const SIGNUP_SUCCESS: &str = "🎉 Signup successful! Welcome!";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Modal {
    #[default]
    Closed,
    Open {
        form: ModalForm,
        status: Option<StatusLine>,
    },
}

impl Modal {
    /// Open (or switch to) a form with a blank status line.
    pub fn open(&mut self, form: ModalForm) {
        *self = Modal::Open { form, status: None };
    }

    pub fn close(&mut self) {
        *self = Modal::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open { .. })
    }

    pub fn form(&self) -> Option<ModalForm> {
        match self {
            Modal::Closed => None,
            Modal::Open { form, .. } => Some(*form),
        }
    }

    /// Show a status line. Ignored while closed.
    pub fn set_status(&mut self, line: StatusLine) {
        if let Modal::Open { status, .. } = self {
            *status = Some(line);
        }
    }

    pub fn status(&self) -> Option<&StatusLine> {
        match self {
            Modal::Closed => None,
            Modal::Open { status, .. } => status.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

fn require(field: &'static str, value: &str) -> Result<(), AuthError> {
    if value.is_empty() {
        return Err(AuthError::MissingRequiredField { field });
    }
    Ok(())
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), AuthError> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), AuthError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("password", &self.password)
    }
}
