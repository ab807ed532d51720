//! Site configuration.
//!
//! The page hands a JSON object to [`SiteConfig::from_json`]; any field it
//! leaves out falls back to the defaults below.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Deserializer};

use crate::dsp::renderer::check_sample_rate;
use crate::error::StudioError;
use crate::page::PageId;

/// The fixed account every fresh registry starts with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DemoAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Default for DemoAccount {
    fn default() -> Self {
        DemoAccount {
            name: "Test".to_string(),
            email: "test@user.com".to_string(),
            password: "password".to_string(),
        }
    }
}

/// One entry of the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NavLinkConfig {
    pub page: PageId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub demo_account: DemoAccount,
    /// How long the modal keeps showing a success message before closing.
    pub modal_close_delay_ms: u32,
    /// Nav links in display order. Pages without an entry have no link.
    pub nav_links: Vec<NavLinkConfig>,
    /// Original markup of each page section. Pages the JSON leaves out keep
    /// their default markup.
    #[serde(deserialize_with = "merge_templates")]
    pub templates: HashMap<PageId, String>,
    /// Render rate for the sample sounds.
    pub sample_rate: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let nav_links = [
            (PageId::Dashboard, "Home"),
            (PageId::Audio, "Audio Studio"),
            (PageId::Images, "Image Lab"),
            (PageId::About, "About"),
            (PageId::Contact, "Contact"),
        ]
        .into_iter()
        .map(|(page, label)| NavLinkConfig {
            page,
            label: label.to_string(),
        })
        .collect();

        SiteConfig {
            demo_account: DemoAccount::default(),
            modal_close_delay_ms: 1500,
            nav_links,
            templates: default_templates(),
            sample_rate: 44100,
        }
    }
}

fn default_templates() -> HashMap<PageId, String> {
    let mut t = HashMap::new();
    t.insert(
        PageId::Dashboard,
        r#"<h1>Your Studio Dashboard</h1><p class="lead">Mix, record and master in the browser.</p>"#
            .to_string(),
    );
    t.insert(
        PageId::Audio,
        r#"<h1>Audio Studio</h1><div class="recorder"><span id="rec-timer">00:00</span></div><div class="samples"></div>"#
            .to_string(),
    );
    t.insert(
        PageId::Images,
        r#"<h1>Image Lab</h1><p class="lead">Cover art and waveform snapshots.</p>"#.to_string(),
    );
    t.insert(
        PageId::About,
        r#"<h1>About</h1><p class="lead">A demo of a browser mixing studio.</p>"#.to_string(),
    );
    t.insert(
        PageId::Contact,
        r#"<h1>Contact</h1><form id="contact-form"></form><div id="contact-status"></div>"#
            .to_string(),
    );
    t
}

fn merge_templates<'de, D>(deserializer: D) -> Result<HashMap<PageId, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let given = HashMap::<PageId, String>::deserialize(deserializer)?;
    let mut templates = default_templates();
    templates.extend(given);
    Ok(templates)
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, StudioError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), StudioError> {
        let mut seen = HashSet::new();
        for link in &self.nav_links {
            if !seen.insert(link.page) {
                return Err(StudioError::Config(format!(
                    "duplicate nav link for page '{}'",
                    link.page
                )));
            }
        }
        check_sample_rate(self.sample_rate)?;
        if self.demo_account.email.is_empty() {
            return Err(StudioError::Config("demo account needs an email".to_string()));
        }
        Ok(())
    }

    pub fn nav_link(&self, page: PageId) -> Option<&NavLinkConfig> {
        self.nav_links.iter().find(|l| l.page == page)
    }
}
