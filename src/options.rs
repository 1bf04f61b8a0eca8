use liquid_core::ButtonConfig;
use wasm_bindgen::JsValue;

fn field(options: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(options, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Reads the embedding options object; absent keys keep their defaults.
pub fn button_config(options: &JsValue) -> ButtonConfig {
    let mut config = ButtonConfig::default();
    if !options.is_object() {
        return config;
    }
    let string = |key: &str| field(options, key).and_then(|v| v.as_string());
    let number = |key: &str| field(options, key).and_then(|v| v.as_f64());

    if let Some(text) = string("text") {
        config.text = text;
    }
    if let Some(disabled) = field(options, "disabled").and_then(|v| v.as_bool()) {
        config.disabled = disabled;
    }
    if let Some(width) = number("width") {
        config.width = width;
    }
    if let Some(height) = number("height") {
        config.height = height;
    }
    if let Some(color) = string("backgroundColor") {
        config.background_color = color;
    }
    if let Some(color) = string("gradientColorInner") {
        config.gradient_color_inner = color;
    }
    if let Some(color) = string("gradientColorOuter") {
        config.gradient_color_outer = color;
    }
    config
}
