//! Small page fixtures that never touch the session: splash screen and
//! the demo contact form.

use serde::{Deserialize, Serialize};

pub const CONTACT_SENT: &str = "Message sent! (Demo)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splash {
    visible: bool,
}

impl Default for Splash {
    fn default() -> Self {
        Splash { visible: true }
    }
}

impl Splash {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Both the "start" and the "dismiss" button land here.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub status: String,
    pub reset_form: bool,
}

/// The demo never sends anything; every submission "succeeds".
pub fn submit_contact(_form: &ContactForm) -> ContactReceipt {
    ContactReceipt {
        status: CONTACT_SENT.to_string(),
        reset_form: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splash_starts_visible_and_stays_dismissed() {
        let mut splash = Splash::default();
        assert!(splash.is_visible());
        splash.dismiss();
        splash.dismiss();
        assert!(!splash.is_visible());
    }

    #[test]
    fn contact_always_succeeds() {
        let receipt = submit_contact(&ContactForm::default());
        assert_eq!(receipt.status, CONTACT_SENT);
        assert!(receipt.reset_form);
    }
}
