use crate::canvas::{context_2d, Canvas2dSurface};
use crate::dom::{self, js_err};
use liquid_core::{FrameGate, Simulation, Teardown};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub sim: Rc<RefCell<Simulation>>,
    surface: Option<Canvas2dSurface>,
    frames: u64,
    missing_context_logged: bool,
}

impl FrameContext {
    pub fn new(canvas: web::HtmlCanvasElement, sim: Rc<RefCell<Simulation>>) -> Self {
        Self {
            canvas,
            sim,
            surface: None,
            frames: 0,
            missing_context_logged: false,
        }
    }

    pub fn frame(&mut self) {
        if self.surface.is_none() {
            // No context yet: skip, the next frame asks again.
            match context_2d(&self.canvas) {
                Some(ctx) => self.surface = Some(Canvas2dSurface::new(ctx)),
                None => {
                    if !self.missing_context_logged {
                        log::warn!("[frame] 2d context unavailable, skipping frames");
                        self.missing_context_logged = true;
                    }
                    return;
                }
            }
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        self.sim.borrow_mut().frame(surface);
        self.frames += 1;
        if self.frames == 1 {
            log::info!("[frame] first frame drawn");
        }
    }
}

/// Runs `frame_ctx` once per animation frame until the teardown fires.
pub fn start_loop(frame_ctx: FrameContext, teardown: &mut Teardown) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let gate = FrameGate::new();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let gate_tick = gate.clone();
    let mut frame_ctx = frame_ctx;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !gate_tick.begin_tick() {
            return;
        }
        frame_ctx.frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                if let Ok(id) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    gate_tick.scheduled(id);
                }
            }
        }
    }) as Box<dyn FnMut()>));

    let gate_release = gate.clone();
    let tick_release = tick.clone();
    teardown.defer("animation-frame", move || {
        if let Some(id) = gate_release.cancel() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure's self-reference
        if let Some(cb) = tick_release.borrow_mut().take() {
            dom::drop_later(cb);
        }
    });

    let first = match tick.borrow().as_ref() {
        Some(cb) => window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(js_err)?,
        None => anyhow::bail!("frame callback missing"),
    };
    gate.scheduled(first);
    Ok(())
}

/// Samples pointer speed every `interval_ms`, independent of frame rate.
pub fn start_speed_sampler(
    sim: &Rc<RefCell<Simulation>>,
    interval_ms: u32,
    teardown: &mut Teardown,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let timeout = i32::try_from(interval_ms)
        .map_err(|_| anyhow::anyhow!("speed interval {}ms out of range", interval_ms))?;
    let sim = sim.clone();
    let closure = Closure::wrap(Box::new(move || {
        sim.borrow_mut().pointer_mut().sample_speed();
    }) as Box<dyn FnMut()>);
    let handle = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout,
        )
        .map_err(js_err)?;
    teardown.defer("speed-sampler", move || {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(handle);
        }
        dom::drop_later(closure);
    });
    Ok(())
}
