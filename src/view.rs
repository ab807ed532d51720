//! View model handed to the page after every event.
//!
//! The page script owns no state of its own: it paints whatever the latest
//! [`ViewModel`] says.

use serde::Serialize;

use crate::controller::Controller;
use crate::modal::Modal;
use crate::page::PageId;

pub const CTA_LOGGED_IN: &str = "Start Mixing Now →";
pub const CTA_LOGGED_OUT: &str = "Sign Up to Start Mixing →";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub id: PageId,
    pub active: bool,
    pub locked: bool,
    /// Set on the one navigation that swapped the placeholder back out.
    pub restored: bool,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLinkView {
    pub page: PageId,
    pub label: String,
    pub active: bool,
}

/// Right-hand side of the nav bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum NavActions {
    /// "Log in" and "Sign up" buttons.
    LoggedOut,
    /// Greeting plus a "Log Out" button.
    LoggedIn { greeting: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub pages: Vec<PageView>,
    pub nav_links: Vec<NavLinkView>,
    pub nav_actions: NavActions,
    pub hero_cta: String,
    pub modal: Modal,
    pub splash_visible: bool,
    pub contact_status: Option<String>,
}

impl ViewModel {
    pub fn build(
        controller: &Controller,
        modal: &Modal,
        splash_visible: bool,
        contact_status: Option<&str>,
    ) -> Self {
        let nav = controller.navigation();

        let pages = PageId::ALL
            .into_iter()
            .map(|id| {
                let active = id == nav.current;
                PageView {
                    id,
                    active,
                    locked: controller.is_locked(id),
                    restored: active && nav.restored,
                    html: controller.pages().content(id),
                }
            })
            .collect();

        let nav_links = controller
            .config()
            .nav_links
            .iter()
            .map(|link| NavLinkView {
                page: link.page,
                label: link.label.clone(),
                active: nav.active_link == Some(link.page),
            })
            .collect();

        let (nav_actions, hero_cta) = match controller.session().user() {
            Some(user) => (
                NavActions::LoggedIn {
                    greeting: format!("Hello, {}!", user.name),
                },
                CTA_LOGGED_IN,
            ),
            None => (NavActions::LoggedOut, CTA_LOGGED_OUT),
        };

        ViewModel {
            pages,
            nav_links,
            nav_actions,
            hero_cta: hero_cta.to_string(),
            modal: modal.clone(),
            splash_visible,
            contact_status: contact_status.map(str::to_string),
        }
    }

    pub fn active_page(&self) -> Option<&PageView> {
        self.pages.iter().find(|p| p.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;

    fn build(c: &Controller) -> ViewModel {
        ViewModel::build(c, &Modal::Closed, false, None)
    }

    #[test]
    fn exactly_one_page_and_link_active() {
        let mut c = Controller::new(SiteConfig::default());
        for page in PageId::ALL {
            c.navigate(page);
            let view = build(&c);
            assert_eq!(view.pages.iter().filter(|p| p.active).count(), 1);
            assert_eq!(view.nav_links.iter().filter(|l| l.active).count(), 1);
            assert_eq!(view.active_page().map(|p| p.id), Some(page));
        }
    }

    #[test]
    fn anonymous_view() {
        let mut c = Controller::new(SiteConfig::default());
        c.navigate(PageId::Audio);
        let view = build(&c);
        assert_eq!(view.nav_actions, NavActions::LoggedOut);
        assert_eq!(view.hero_cta, CTA_LOGGED_OUT);
        let audio = view.active_page().unwrap();
        assert!(audio.locked);
        assert!(audio.html.contains("**AUDIO**"));
    }

    #[test]
    fn logged_in_view_greets_user() {
        let mut c = Controller::new(SiteConfig::default());
        c.request_login("test@user.com", "password").unwrap();
        let view = build(&c);
        assert_eq!(
            view.nav_actions,
            NavActions::LoggedIn {
                greeting: "Hello, Test!".to_string()
            }
        );
        assert_eq!(view.hero_cta, CTA_LOGGED_IN);
    }

    #[test]
    fn restored_flag_only_on_active_page() {
        let mut c = Controller::new(SiteConfig::default());
        c.navigate(PageId::Audio);
        c.request_login("test@user.com", "password").unwrap();
        c.navigate(PageId::Audio);
        let view = build(&c);
        let restored: Vec<_> = view.pages.iter().filter(|p| p.restored).map(|p| p.id).collect();
        assert_eq!(restored, vec![PageId::Audio]);
        assert!(!view.active_page().unwrap().html.contains("Access Denied"));
    }

    #[test]
    fn serializes_camel_case() {
        let c = Controller::new(SiteConfig::default());
        let json = serde_json::to_value(build(&c)).unwrap();
        assert_eq!(json["navActions"]["kind"], "loggedOut");
        assert_eq!(json["splashVisible"], false);
        assert_eq!(json["pages"][0]["id"], "dashboard");
    }
}
