//! Studio — the page-level event handlers.
//!
//! Each method corresponds to one UI event (a click or a submit). It
//! updates the controller, the modal and the fixtures, then the page asks
//! for a fresh [`ViewModel`].

use serde::Serialize;

use crate::config::SiteConfig;
use crate::controller::{Controller, NavOutcome};
use crate::dsp::renderer::{SampleSound, render_samples};
use crate::error::StudioError;
use crate::modal::{
    LOGIN_SUCCESS, LoginForm, Modal, ModalForm, SIGNUP_SUCCESS, SignupForm, StatusLine,
};
use crate::page::PageId;
use crate::recorder::RecorderClock;
use crate::site::{ContactForm, ContactReceipt, Splash, submit_contact};
use crate::view::ViewModel;

/// What a modal form submission did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    pub status: StatusLine,
    /// Navigation issued after a successful login/signup.
    pub navigation: Option<NavOutcome>,
    /// Cosmetic delay before the page should call [`Studio::close_modal`].
    /// The session change has already happened by now.
    pub close_after_ms: Option<u32>,
}

/// Result of clicking the hero call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CtaAction {
    Navigated { outcome: NavOutcome },
    OpenedSignup,
}

#[derive(Debug, Clone)]
pub struct Studio {
    controller: Controller,
    modal: Modal,
    splash: Splash,
    recorder: RecorderClock,
    contact_status: Option<String>,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

impl Studio {
    pub fn new(config: SiteConfig) -> Self {
        Studio {
            controller: Controller::new(config),
            modal: Modal::Closed,
            splash: Splash::default(),
            recorder: RecorderClock::default(),
            contact_status: None,
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn recorder(&self) -> &RecorderClock {
        &self.recorder
    }

    pub fn recorder_mut(&mut self) -> &mut RecorderClock {
        &mut self.recorder
    }

    pub fn navigate(&mut self, page: PageId) -> NavOutcome {
        self.controller.navigate(page)
    }

    /// `data-back` buttons.
    pub fn back(&mut self) -> NavOutcome {
        self.controller.navigate(PageId::Dashboard)
    }

    pub fn logout(&mut self) -> NavOutcome {
        self.controller.logout()
    }

    pub fn hero_cta(&mut self) -> CtaAction {
        if self.controller.session().is_authenticated() {
            CtaAction::Navigated {
                outcome: self.controller.navigate(PageId::Audio),
            }
        } else {
            self.modal.open(ModalForm::Signup);
            CtaAction::OpenedSignup
        }
    }

    pub fn open_login(&mut self) {
        self.modal.open(ModalForm::Login);
    }

    pub fn open_signup(&mut self) {
        self.modal.open(ModalForm::Signup);
    }

    /// Close button, backdrop click, or the end of the success delay.
    pub fn close_modal(&mut self) {
        self.modal.close();
    }

    pub fn submit_login(&mut self, form: &LoginForm) -> SubmitOutcome {
        let result = form
            .validate()
            .and_then(|()| self.controller.request_login(&form.email, &form.password));
        match result {
            Ok(_) => self.finish_auth(LOGIN_SUCCESS),
            Err(err) => self.fail(StatusLine::error(&err)),
        }
    }

    pub fn submit_signup(&mut self, form: &SignupForm) -> SubmitOutcome {
        let result = form.validate().and_then(|()| {
            self.controller
                .request_signup(&form.name, &form.email, &form.password)
        });
        match result {
            Ok(_) => self.finish_auth(SIGNUP_SUCCESS),
            Err(err) => self.fail(StatusLine::error(&err)),
        }
    }

    fn finish_auth(&mut self, message: &str) -> SubmitOutcome {
        let navigation = self.controller.navigate(PageId::Dashboard);
        let status = StatusLine::success(message);
        let delay = self.controller.config().modal_close_delay_ms;
        let close_after_ms = if delay == 0 {
            self.modal.close();
            None
        } else {
            self.modal.set_status(status.clone());
            Some(delay)
        };
        SubmitOutcome {
            status,
            navigation: Some(navigation),
            close_after_ms,
        }
    }

    fn fail(&mut self, status: StatusLine) -> SubmitOutcome {
        self.modal.set_status(status.clone());
        SubmitOutcome {
            status,
            navigation: None,
            close_after_ms: None,
        }
    }

    pub fn dismiss_splash(&mut self) {
        self.splash.dismiss();
    }

    pub fn submit_contact(&mut self, form: &ContactForm) -> ContactReceipt {
        let receipt = submit_contact(form);
        self.contact_status = Some(receipt.status.clone());
        receipt
    }

    /// A `data-sample` button, rendered at the configured rate.
    pub fn render_sample(&self, name: &str) -> Result<Vec<f32>, StudioError> {
        let sound: SampleSound = name.parse()?;
        render_samples(sound, self.controller.config().sample_rate)
    }

    pub fn view(&self) -> ViewModel {
        ViewModel::build(
            &self.controller,
            &self.modal,
            self.splash.is_visible(),
            self.contact_status.as_deref(),
        )
    }
}
