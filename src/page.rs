//! Page identifiers and the page book.
//!
//! The page book keeps each page's content template separate from how its
//! slot is currently rendered, so a page that was shown as a locked
//! placeholder can be restored in place once the user logs in.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// Named page sections of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    Dashboard,
    Audio,
    Images,
    About,
    Contact,
}

impl PageId {
    pub const ALL: [PageId; 5] = [
        PageId::Dashboard,
        PageId::Audio,
        PageId::Images,
        PageId::About,
        PageId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::Audio => "audio",
            PageId::Images => "images",
            PageId::About => "about",
            PageId::Contact => "contact",
        }
    }

    /// Restricted pages need an authenticated session to show their content.
    pub fn is_restricted(&self) -> bool {
        matches!(self, PageId::Audio | PageId::Images)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| StudioError::UnknownPage(s.to_string()))
    }
}

/// Markup shown in a restricted page's slot while anonymous.
pub fn locked_placeholder(page: PageId) -> String {
    format!(
        r#"<div class="locked">
  <h1>🔒 Access Denied</h1>
  <p class="lead">You must be logged in to view the **{}** studio features.</p>
  <button class="btn btn-primary" data-action="open-login">Log In</button>
  <button class="btn btn-ghost" data-action="open-signup">Sign Up</button>
</div>"#,
        page.as_str().to_uppercase()
    )
}

/// What a page slot currently displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotState {
    #[default]
    Original,
    Locked,
}

#[derive(Debug, Clone)]
pub struct PageBook {
    templates: HashMap<PageId, String>,
    slots: HashMap<PageId, SlotState>,
}

impl PageBook {
    pub fn new(templates: HashMap<PageId, String>) -> Self {
        PageBook {
            templates,
            slots: HashMap::new(),
        }
    }

    pub fn slot(&self, page: PageId) -> SlotState {
        self.slots.get(&page).copied().unwrap_or_default()
    }

    /// Replace the page's slot with the locked placeholder. The template is
    /// left untouched.
    pub fn lock(&mut self, page: PageId) {
        self.slots.insert(page, SlotState::Locked);
    }

    /// Put the template back into a locked slot. Returns whether the slot
    /// was locked.
    pub fn restore(&mut self, page: PageId) -> bool {
        self.slots.remove(&page) == Some(SlotState::Locked)
    }

    /// Rendered markup for the page's slot.
    pub fn content(&self, page: PageId) -> String {
        match self.slot(page) {
            SlotState::Locked => locked_placeholder(page),
            SlotState::Original => self.templates.get(&page).cloned().unwrap_or_default(),
        }
    }
}
