use crate::dom::{self, js_err};
use crate::events::{self, LayoutWiring};
use crate::frame::{self, FrameContext};
use crate::options;
use liquid_core::{SimParams, Simulation, Teardown};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// A live button: DOM nodes, shared simulation and every acquired resource.
pub struct Mounted {
    sim: Rc<RefCell<Simulation>>,
    button: web::HtmlButtonElement,
    label: web::HtmlElement,
    teardown: Teardown,
}

impl Mounted {
    pub fn set_text(&self, text: &str) {
        self.label.set_text_content(Some(text));
        self.sim.borrow_mut().set_text(text);
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.button.set_disabled(disabled);
        self.sim.borrow_mut().set_disabled(disabled);
    }

    pub fn dispose(&mut self) {
        let released = self.teardown.release();
        if released > 0 {
            log::info!("[teardown] released {} resources", released);
        }
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Builds the button inside `#container_id` and starts the simulation.
///
/// Anything acquired before a failure is released before returning.
pub fn mount(
    container_id: &str,
    options: &JsValue,
    on_click: Option<js_sys::Function>,
) -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", container_id))?;

    let config = options::button_config(options);
    let params = SimParams::default();
    let sim = Rc::new(RefCell::new(Simulation::new(config.clone(), params)?));

    let mut teardown = Teardown::new();
    let parts = dom::build_button(&document, &config, params.padding)?;
    container.append_child(&parts.button).map_err(js_err)?;
    {
        let container = container.clone();
        let button = parts.button.clone();
        teardown.defer("dom", move || {
            _ = container.remove_child(&button);
        });
    }
    {
        let sim = sim.clone();
        teardown.defer("mesh", move || sim.borrow_mut().release_meshes());
    }

    let button_el: web::HtmlElement = parts.button.clone().unchecked_into();
    let layout = LayoutWiring {
        button: button_el.clone(),
        canvas: parts.canvas.clone(),
        sim: sim.clone(),
    };
    // Mesh and canvas follow the laid-out size, which may differ from the
    // requested one (CSS, zoom).
    events::refresh_layout(&layout, true);
    dom::set_canvas_size(&parts.canvas, sim.borrow().canvas_size());

    events::wire_pointer_handlers(&document, &sim, &mut teardown)?;
    events::wire_layout_handlers(&window, &layout, &mut teardown)?;
    events::wire_activation(&button_el, &sim, on_click, &mut teardown)?;
    frame::start_speed_sampler(&sim, params.speed_interval_ms, &mut teardown)?;
    frame::start_loop(FrameContext::new(parts.canvas.clone(), sim.clone()), &mut teardown)?;

    log::info!(
        "[mount] #{} {}x{} touch={} resources={}",
        container_id,
        sim.borrow().button_size().x,
        sim.borrow().button_size().y,
        dom::is_touch_device(&window),
        teardown.len()
    );
    Ok(Mounted {
        sim,
        button: parts.button,
        label: parts.label,
        teardown,
    })
}
