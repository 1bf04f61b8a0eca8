use crate::constants::POINTER_EVENTS;
use crate::dom;
use glam::DVec2;
use liquid_core::{Simulation, Teardown};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy)]
enum PointerKind {
    MouseMove,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl PointerKind {
    fn for_event(event: &str) -> Option<Self> {
        match event {
            "mousemove" => Some(Self::MouseMove),
            "touchstart" => Some(Self::TouchStart),
            "touchmove" => Some(Self::TouchMove),
            "touchend" | "touchcancel" => Some(Self::TouchEnd),
            _ => None,
        }
    }
}

fn first_touch(ev: &web::Event) -> Option<DVec2> {
    let touches = ev.dyn_ref::<web::TouchEvent>()?.touches();
    let t = touches.get(0)?;
    Some(dom::page_position(t.client_x(), t.client_y()))
}

fn handle(kind: PointerKind, ev: &web::Event, sim: &Rc<RefCell<Simulation>>) {
    let mut sim = sim.borrow_mut();
    let pointer = sim.pointer_mut();
    match kind {
        PointerKind::MouseMove => {
            if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
                pointer.mouse_move(dom::page_position(m.client_x(), m.client_y()));
            }
        }
        PointerKind::TouchStart => pointer.touch_start(first_touch(ev)),
        PointerKind::TouchMove => pointer.touch_move(first_touch(ev)),
        PointerKind::TouchEnd => pointer.touch_end(),
    }
}

/// Document-level mouse and touch listeners feeding the pointer tracker.
pub fn wire_pointer_handlers(
    document: &web::Document,
    sim: &Rc<RefCell<Simulation>>,
    teardown: &mut Teardown,
) -> anyhow::Result<()> {
    for event in POINTER_EVENTS {
        let Some(kind) = PointerKind::for_event(event) else {
            continue;
        };
        let sim = sim.clone();
        let passive = matches!(kind, PointerKind::TouchMove);
        dom::listen(
            document,
            event,
            passive,
            move |ev: web::Event| handle(kind, &ev, &sim),
            teardown,
        )?;
    }
    log::info!("[pointer] listening for {} pointer events", POINTER_EVENTS.len());
    Ok(())
}
