use crate::constants::OFFSET_EVENTS;
use crate::dom;
use liquid_core::{Simulation, Teardown};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct LayoutWiring {
    pub button: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub sim: Rc<RefCell<Simulation>>,
}

/// Re-reads the canvas offset and, when the button was resized, rebuilds the
/// meshes and the canvas backing size.
pub fn refresh_layout(w: &LayoutWiring, remesh: bool) {
    let mut sim = w.sim.borrow_mut();
    if remesh {
        if let Some((width, height)) = dom::measure_button(&w.button) {
            match sim.resize(width, height) {
                Ok(true) => {
                    dom::set_canvas_size(&w.canvas, sim.canvas_size());
                    log::info!("[mount] button resized to {:.0}x{:.0}", width, height);
                }
                Ok(false) => {}
                Err(e) => log::warn!("[mount] ignoring resize: {}", e),
            }
        }
    }
    if let Some(offset) = dom::measure_offset(&w.canvas) {
        sim.set_offset(offset);
    }
}

/// Window-level resize/scroll/orientation listeners keeping the offset fresh.
pub fn wire_layout_handlers(
    window: &web::Window,
    w: &LayoutWiring,
    teardown: &mut Teardown,
) -> anyhow::Result<()> {
    for event in OFFSET_EVENTS {
        let w = w.clone();
        // scrolling never changes the button's own size
        let remesh = event != "scroll";
        dom::listen(
            window,
            event,
            false,
            move |_ev: web::Event| refresh_layout(&w, remesh),
            teardown,
        )?;
    }
    Ok(())
}
