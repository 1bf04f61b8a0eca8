use crate::constants::{button_style, canvas_style, label_style, BUTTON_CLASS};
use glam::DVec2;
use liquid_core::{ButtonConfig, CanvasOffset, Teardown};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

#[inline]
pub fn scroll_position(window: &web::Window) -> DVec2 {
    DVec2::new(
        window.scroll_x().unwrap_or(0.0),
        window.scroll_y().unwrap_or(0.0),
    )
}

/// Viewport coordinates to page coordinates.
#[inline]
pub fn page_position(client_x: i32, client_y: i32) -> DVec2 {
    let scroll = web::window()
        .map(|w| scroll_position(&w))
        .unwrap_or(DVec2::ZERO);
    DVec2::new(client_x as f64, client_y as f64) + scroll
}

pub fn measure_offset(canvas: &web::HtmlCanvasElement) -> Option<CanvasOffset> {
    let window = web::window()?;
    let rect = canvas.get_bounding_client_rect();
    Some(CanvasOffset::from_client_rect(
        rect.left(),
        rect.top(),
        scroll_position(&window),
    ))
}

/// Laid-out button size, or `None` before the first layout.
pub fn measure_button(button: &web::HtmlElement) -> Option<(f64, f64)> {
    let w = button.offset_width();
    let h = button.offset_height();
    (w > 0 && h > 0).then_some((w as f64, h as f64))
}

pub fn set_canvas_size(canvas: &web::HtmlCanvasElement, size: DVec2) {
    canvas.set_width(size.x.round().max(1.0) as u32);
    canvas.set_height(size.y.round().max(1.0) as u32);
}

#[inline]
pub fn is_touch_device(window: &web::Window) -> bool {
    let has_ontouchstart =
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_ontouchstart || window.navigator().max_touch_points() > 0
}

pub struct ButtonParts {
    pub button: web::HtmlButtonElement,
    pub label: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
}

/// `<button>` holding the label span and the overhanging canvas.
pub fn build_button(
    document: &web::Document,
    config: &ButtonConfig,
    padding: f64,
) -> anyhow::Result<ButtonParts> {
    let button: web::HtmlButtonElement = document
        .create_element("button")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    button.set_type("button");
    button.set_class_name(BUTTON_CLASS);
    button.set_disabled(config.disabled);
    button
        .set_attribute("style", &button_style(config.width, config.height))
        .map_err(js_err)?;

    let label: web::HtmlElement = document
        .create_element("span")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    label.set_text_content(Some(&config.text));
    label
        .set_attribute("style", &label_style())
        .map_err(js_err)?;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas
        .set_attribute("style", &canvas_style(padding))
        .map_err(js_err)?;

    button.append_child(&label).map_err(js_err)?;
    button.append_child(&canvas).map_err(js_err)?;
    Ok(ButtonParts {
        button,
        label,
        canvas,
    })
}

/// Drops a value once the current task has finished, so a closure can
/// safely be released from inside its own invocation.
pub fn drop_later<T: 'static>(value: T) {
    wasm_bindgen_futures::spawn_local(async move {
        drop(value);
    });
}

/// Adds `handler` for `event` on `target` and registers its removal on
/// `teardown`.
pub fn listen(
    target: &web::EventTarget,
    event: &'static str,
    passive: bool,
    handler: impl FnMut(web::Event) + 'static,
    teardown: &mut Teardown,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if passive {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &opts,
            )
            .map_err(js_err)?;
    } else {
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
    }
    let target = target.clone();
    teardown.defer(event, move || {
        _ = target.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        drop_later(closure);
    });
    Ok(())
}
