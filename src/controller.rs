//! View/Session controller — the mock session and the visible page.
//!
//! Every operation runs synchronously inside one UI event. A login or
//! signup mutates the session before it returns, so whatever navigation
//! the caller issues next already sees the new state.

use serde::Serialize;
use tracing::debug;

use crate::config::SiteConfig;
use crate::error::AuthError;
use crate::page::{PageBook, PageId, SlotState};
use crate::registry::{User, UserRegistry};
use crate::session::Session;

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "camelCase")]
pub enum NavOutcome {
    /// The page is active and shows its own content.
    Show(PageId),
    /// The page is active but its slot holds the access-denied placeholder.
    ShowLocked(PageId),
}

/// Which page is visible and which nav link is marked active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    pub current: PageId,
    /// `None` when the current page has no nav link.
    pub active_link: Option<PageId>,
    pub locked: bool,
    /// The last navigation put a page's template back in place of its
    /// placeholder.
    pub restored: bool,
}

#[derive(Debug, Clone)]
pub struct Controller {
    config: SiteConfig,
    registry: UserRegistry,
    session: Session,
    pages: PageBook,
    nav: NavigationState,
}

impl Controller {
    pub fn new(config: SiteConfig) -> Self {
        let registry = UserRegistry::seeded(&config.demo_account);
        let pages = PageBook::new(config.templates.clone());
        let mut controller = Controller {
            registry,
            session: Session::Anonymous,
            pages,
            nav: NavigationState {
                current: PageId::Dashboard,
                active_link: None,
                locked: false,
                restored: false,
            },
            config,
        };
        controller.nav.active_link = controller.link_for(PageId::Dashboard);
        controller
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn registry(&self) -> &UserRegistry {
        &self.registry
    }

    pub fn pages(&self) -> &PageBook {
        &self.pages
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    pub fn current_page(&self) -> PageId {
        self.nav.current
    }

    /// Log in with an existing account.
    pub fn request_login(&mut self, email: &str, password: &str) -> Result<Session, AuthError> {
        if self.session.is_authenticated() {
            return Err(AuthError::AlreadyAuthenticated);
        }
        let user = self.registry.authenticate(email, password)?.clone();
        debug!(email = %user.email, "session: login");
        self.session = Session::Authenticated(user);
        Ok(self.session.clone())
    }

    /// Register a new account and log it in.
    pub fn request_signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        if self.session.is_authenticated() {
            return Err(AuthError::AlreadyAuthenticated);
        }
        let user = self
            .registry
            .register(User::new(name, email, password))?
            .clone();
        debug!(email = %user.email, registered = self.registry.len(), "session: signup");
        self.session = Session::Authenticated(user);
        Ok(self.session.clone())
    }

    /// Drop back to anonymous and show the dashboard. Safe to call twice.
    pub fn logout(&mut self) -> NavOutcome {
        if self.session.is_authenticated() {
            debug!("session: logout");
        }
        self.session = Session::Anonymous;
        self.navigate(PageId::Dashboard)
    }

    pub fn navigate(&mut self, page: PageId) -> NavOutcome {
        if page.is_restricted() && !self.session.is_authenticated() {
            self.pages.lock(page);
            self.activate(page, true, false);
            debug!(page = %page, "nav: locked");
            return NavOutcome::ShowLocked(page);
        }

        // A leftover placeholder gets its template back in place.
        let restored = self.pages.restore(page);
        self.activate(page, false, restored);
        debug!(page = %page, restored, "nav: show");
        NavOutcome::Show(page)
    }

    fn activate(&mut self, page: PageId, locked: bool, restored: bool) {
        self.nav = NavigationState {
            current: page,
            active_link: self.link_for(page),
            locked,
            restored,
        };
    }

    fn link_for(&self, page: PageId) -> Option<PageId> {
        self.config.nav_link(page).map(|l| l.page)
    }

    /// Whether the page's slot currently shows the placeholder.
    pub fn is_locked(&self, page: PageId) -> bool {
        self.pages.slot(page) == SlotState::Locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> Controller {
        Controller::new(SiteConfig::default())
    }

    #[test]
    fn starts_anonymous_on_dashboard() {
        let c = controller();
        assert_eq!(c.session(), &Session::Anonymous);
        assert_eq!(c.current_page(), PageId::Dashboard);
        assert_eq!(c.navigation().active_link, Some(PageId::Dashboard));
    }

    #[test]
    fn login_with_demo_account() {
        let mut c = controller();
        let session = c.request_login("test@user.com", "password").unwrap();
        assert_eq!(session.user().map(|u| u.email.as_str()), Some("test@user.com"));
        assert!(c.session().is_authenticated());
    }

    #[test]
    fn wrong_password_leaves_session_alone() {
        let mut c = controller();
        assert_eq!(
            c.request_login("test@user.com", "Password"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(c.session(), &Session::Anonymous);
    }

    #[test]
    fn relogin_while_authenticated_is_rejected() {
        let mut c = controller();
        c.request_login("test@user.com", "password").unwrap();
        assert_eq!(
            c.request_login("test@user.com", "password"),
            Err(AuthError::AlreadyAuthenticated)
        );
        assert_eq!(
            c.request_signup("Ada", "ada@example.com", "pw"),
            Err(AuthError::AlreadyAuthenticated)
        );
        assert_eq!(c.registry().len(), 1);
    }

    #[test]
    fn signup_registers_and_logs_in() {
        let mut c = controller();
        let session = c.request_signup("Ada", "ada@example.com", "pw").unwrap();
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Ada"));
        assert_eq!(c.registry().len(), 2);

        c.logout();
        assert!(c.request_login("ada@example.com", "pw").is_ok());
    }

    #[test]
    fn duplicate_signup_changes_nothing() {
        let mut c = controller();
        for (name, pw) in [("Test", "password"), ("Someone", "other"), ("", "")] {
            assert_eq!(
                c.request_signup(name, "test@user.com", pw),
                Err(AuthError::EmailAlreadyRegistered)
            );
        }
        assert_eq!(c.registry().len(), 1);
        assert_eq!(c.session(), &Session::Anonymous);
    }

    #[test]
    fn restricted_pages_lock_when_anonymous() {
        let mut c = controller();
        for page in [PageId::Audio, PageId::Images] {
            assert_eq!(c.navigate(page), NavOutcome::ShowLocked(page));
            let nav = c.navigation();
            assert_eq!(nav.current, page);
            assert_eq!(nav.active_link, Some(page));
            assert!(nav.locked);
            assert!(c.is_locked(page));
        }
    }

    #[test]
    fn unrestricted_pages_always_show() {
        let mut c = controller();
        for page in [PageId::Dashboard, PageId::About, PageId::Contact] {
            assert_eq!(c.navigate(page), NavOutcome::Show(page));
            assert!(!c.navigation().locked);
        }
    }

    #[test]
    fn locked_page_restores_after_login_without_reload() {
        let mut c = controller();
        assert_eq!(c.navigate(PageId::Images), NavOutcome::ShowLocked(PageId::Images));
        c.request_login("test@user.com", "password").unwrap();
        c.navigate(PageId::Dashboard);

        assert_eq!(c.navigate(PageId::Images), NavOutcome::Show(PageId::Images));
        assert!(c.navigation().restored);
        assert!(!c.is_locked(PageId::Images));
        assert!(c.pages().content(PageId::Images).contains("Image Lab"));

        // Visiting again is a plain show.
        c.navigate(PageId::Dashboard);
        c.navigate(PageId::Images);
        assert!(!c.navigation().restored);
    }

    #[test]
    fn logout_is_idempotent() {
        let mut c = controller();
        c.request_login("test@user.com", "password").unwrap();
        c.navigate(PageId::Audio);
        assert_eq!(c.logout(), NavOutcome::Show(PageId::Dashboard));
        assert_eq!(c.logout(), NavOutcome::Show(PageId::Dashboard));
        assert_eq!(c.session(), &Session::Anonymous);
        assert_eq!(c.current_page(), PageId::Dashboard);
    }

    #[test]
    fn page_without_nav_link_clears_active_link() {
        let mut config = SiteConfig::default();
        config.nav_links.retain(|l| l.page != PageId::Contact);
        let mut c = Controller::new(config);
        c.navigate(PageId::Contact);
        assert_eq!(c.navigation().current, PageId::Contact);
        assert_eq!(c.navigation().active_link, None);
    }

    #[test]
    fn nav_outcome_serializes_tagged() {
        let json = serde_json::to_string(&NavOutcome::ShowLocked(PageId::Audio)).unwrap();
        assert_eq!(json, r#"{"kind":"showLocked","page":"audio"}"#);
    }
}
