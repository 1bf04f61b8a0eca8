use crate::constants::ACTIVATION_EVENT;
use crate::dom;
use liquid_core::{Simulation, Teardown};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Forwards completed clicks to `on_click` unless the button is disabled.
pub fn wire_activation(
    button: &web::HtmlElement,
    sim: &Rc<RefCell<Simulation>>,
    on_click: Option<js_sys::Function>,
    teardown: &mut Teardown,
) -> anyhow::Result<()> {
    let Some(on_click) = on_click else {
        return Ok(());
    };
    let sim = sim.clone();
    dom::listen(
        button,
        ACTIVATION_EVENT,
        false,
        move |_ev: web::Event| {
            // Release the borrow before calling out; the callback may call back in.
            let disabled = sim.borrow().is_disabled();
            if disabled {
                return;
            }
            if let Err(e) = on_click.call0(&JsValue::NULL) {
                log::error!("[click] onClick threw: {:?}", e);
            }
        },
        teardown,
    )
}
