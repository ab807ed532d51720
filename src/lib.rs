pub mod app;
pub mod config;
pub mod controller;
pub mod credentials;
pub mod dsp;
pub mod error;
pub mod modal;
pub mod page;
pub mod recorder;
pub mod registry;
pub mod session;
pub mod site;
pub mod view;

use crate::app::Studio;
use crate::config::SiteConfig;
use crate::dsp::renderer::SampleSound;
use crate::error::StudioError;
use crate::modal::{LoginForm, SignupForm};
use crate::page::PageId;
use crate::site::ContactForm;
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the mixstudio-core version string.
#[wasm_bindgen(js_name = coreVersion)]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Build a [`Studio`] from an optional JSON config; `None` uses the defaults.
pub fn studio_from_json(config_json: Option<&str>) -> Result<Studio, StudioError> {
    let config = match config_json {
        Some(json) => SiteConfig::from_json(json)?,
        None => SiteConfig::default(),
    };
    Ok(Studio::new(config))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&format!("{e}")))
}

fn js_err(e: StudioError) -> JsValue {
    JsValue::from_str(&format!("{e}"))
}

/// WASM-exposed handle the page script forwards its DOM events to.
#[wasm_bindgen]
pub struct StudioApp {
    inner: Studio,
}

#[wasm_bindgen]
impl StudioApp {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<StudioApp, JsValue> {
        let inner = studio_from_json(config_json.as_deref()).map_err(js_err)?;
        Ok(StudioApp { inner })
    }

    /// Current view model as a plain JS object.
    #[wasm_bindgen(js_name = viewModel)]
    pub fn view_model(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.view())
    }

    pub fn navigate(&mut self, page_id: &str) -> Result<JsValue, JsValue> {
        let page: PageId = page_id.parse().map_err(js_err)?;
        to_js(&self.inner.navigate(page))
    }

    pub fn back(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.back())
    }

    pub fn logout(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.logout())
    }

    #[wasm_bindgen(js_name = heroCta)]
    pub fn hero_cta(&mut self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.hero_cta())
    }

    #[wasm_bindgen(js_name = openLogin)]
    pub fn open_login(&mut self) {
        self.inner.open_login();
    }

    #[wasm_bindgen(js_name = openSignup)]
    pub fn open_signup(&mut self) {
        self.inner.open_signup();
    }

    #[wasm_bindgen(js_name = closeModal)]
    pub fn close_modal(&mut self) {
        self.inner.close_modal();
    }

    /// Submit the login form: `{ email, password }`.
    pub fn login(&mut self, form: JsValue) -> Result<JsValue, JsValue> {
        let form: LoginForm = serde_wasm_bindgen::from_value(form)?;
        to_js(&self.inner.submit_login(&form))
    }

    /// Submit the signup form: `{ name, email, password }`.
    pub fn signup(&mut self, form: JsValue) -> Result<JsValue, JsValue> {
        let form: SignupForm = serde_wasm_bindgen::from_value(form)?;
        to_js(&self.inner.submit_signup(&form))
    }

    #[wasm_bindgen(js_name = dismissSplash)]
    pub fn dismiss_splash(&mut self) {
        self.inner.dismiss_splash();
    }

    #[wasm_bindgen(js_name = submitContact)]
    pub fn submit_contact(&mut self, form: JsValue) -> Result<JsValue, JsValue> {
        let form: ContactForm = serde_wasm_bindgen::from_value(form)?;
        to_js(&self.inner.submit_contact(&form))
    }

    /// A `data-sample` button: mono f32 samples at the configured rate.
    #[wasm_bindgen(js_name = playSample)]
    pub fn play_sample(&self, name: &str) -> Result<Vec<f32>, JsValue> {
        self.inner.render_sample(name).map_err(js_err)
    }

    #[wasm_bindgen(js_name = recordStart)]
    pub fn record_start(&mut self) {
        self.inner.recorder_mut().start();
    }

    /// One-second timer tick; returns the `mm:ss` display while recording.
    #[wasm_bindgen(js_name = recordTick)]
    pub fn record_tick(&mut self) -> Option<String> {
        self.inner.recorder_mut().tick()
    }

    #[wasm_bindgen(js_name = recordStop)]
    pub fn record_stop(&mut self) -> bool {
        self.inner.recorder_mut().stop()
    }

    #[wasm_bindgen(js_name = hasRecording)]
    pub fn has_recording(&self) -> bool {
        self.inner.recorder().has_take()
    }
}

/// WASM-exposed: file name and MIME type for exporting a recording.
#[wasm_bindgen(js_name = recordingExport)]
pub fn recording_export() -> Vec<String> {
    vec![
        recorder::EXPORT_FILE_NAME.to_string(),
        recorder::EXPORT_MIME.to_string(),
    ]
}

/// WASM-exposed: render a demo sound ("sine", "square", "noise") to mono
/// f32 samples for AudioWorklet playback.
#[wasm_bindgen(js_name = renderSample)]
pub fn render_sample(name: &str, sample_rate: u32) -> Result<Vec<f32>, JsValue> {
    let sound: SampleSound = name.parse().map_err(js_err)?;
    dsp::renderer::render_samples(sound, sample_rate).map_err(js_err)
}

/// WASM-exposed: render a demo sound to a 16-bit mono WAV byte array.
#[wasm_bindgen(js_name = renderSampleWav)]
pub fn render_sample_wav(name: &str, sample_rate: u32) -> Result<Vec<u8>, JsValue> {
    let sound: SampleSound = name.parse().map_err(js_err)?;
    dsp::renderer::render_wav(sound, sample_rate).map_err(js_err)
}
