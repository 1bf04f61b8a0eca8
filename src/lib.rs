#![cfg(target_arch = "wasm32")]
//! Pointer-reactive liquid button for the web.
//!
//! ```js
//! const button = mount("cta", { text: "Summarize", width: 150, height: 48 }, () => go());
//! // later
//! button.dispose();
//! ```
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod mount;
mod options;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("liquid-button loaded");
    Ok(())
}

/// Handle returned to the hosting page.
#[wasm_bindgen]
pub struct LiquidButton {
    inner: Option<mount::Mounted>,
}

#[wasm_bindgen]
impl LiquidButton {
    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&self, text: &str) {
        if let Some(m) = &self.inner {
            m.set_text(text);
        }
    }

    #[wasm_bindgen(js_name = setDisabled)]
    pub fn set_disabled(&self, disabled: bool) {
        if let Some(m) = &self.inner {
            m.set_disabled(disabled);
        }
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.inner.is_some()
    }

    /// Stops the frame loop, the speed timer and every listener. Repeated
    /// calls are no-ops.
    pub fn dispose(&mut self) {
        if let Some(mut m) = self.inner.take() {
            m.dispose();
        }
    }
}

/// Mounts a liquid button into the element with id `container_id`.
#[wasm_bindgen]
pub fn mount(
    container_id: &str,
    options: JsValue,
    on_click: Option<js_sys::Function>,
) -> Result<LiquidButton, JsValue> {
    match mount::mount(container_id, &options, on_click) {
        Ok(m) => Ok(LiquidButton { inner: Some(m) }),
        Err(e) => {
            log::error!("[mount] {:?}", e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}
