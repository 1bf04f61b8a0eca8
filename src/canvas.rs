use glam::DVec2;
use liquid_core::{Paint, Surface};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// 2D context with an alpha channel, or `None` if the canvas cannot
/// provide one right now.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    let opts = js_sys::Object::new();
    js_sys::Reflect::set(&opts, &JsValue::from_str("alpha"), &JsValue::TRUE).ok()?;
    canvas
        .get_context_with_context_options("2d", &opts)
        .ok()
        .flatten()?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .ok()
}

pub struct Canvas2dSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for Canvas2dSurface {
    fn clear(&mut self, size: DVec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x, size.y);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, p: DVec2) {
        self.ctx.move_to(p.x, p.y);
    }

    fn bezier_curve_to(&mut self, c1: DVec2, c2: DVec2, end: DVec2) {
        self.ctx
            .bezier_curve_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self, paint: &Paint<'_>) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(color),
            Paint::Radial(g) => {
                let gradient = match self.ctx.create_radial_gradient(
                    g.center.x,
                    g.center.y,
                    g.outer_radius,
                    g.center.x,
                    g.center.y,
                    0.0,
                ) {
                    Ok(gradient) => gradient,
                    Err(e) => {
                        log::debug!("[frame] gradient rejected: {:?}", e);
                        return;
                    }
                };
                // stop 0 sits on the outer circle, stop 1 on the center
                _ = gradient.add_color_stop(0.0, g.outer_color);
                _ = gradient.add_color_stop(1.0, g.inner_color);
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        self.ctx.fill();
    }
}
