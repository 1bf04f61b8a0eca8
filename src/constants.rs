/// DOM and event-wiring constants for the web front end.
///
/// Kept free of imports so host-side tests can `include!` this file.

// Listener sets, all registered at mount and removed together on dispose.
pub const POINTER_EVENTS: [&str; 5] = ["mousemove", "touchstart", "touchmove", "touchend", "touchcancel"];
pub const OFFSET_EVENTS: [&str; 3] = ["resize", "scroll", "orientationchange"];
pub const ACTIVATION_EVENT: &str = "click";

// Stacking: label above canvas
pub const LABEL_Z_INDEX: i32 = 2;
pub const CANVAS_Z_INDEX: i32 = 1;

// Button typography
pub const FONT_FAMILY: &str = "'Droid Sans', sans-serif";
pub const FONT_SIZE_PX: u32 = 14;
pub const LETTER_SPACING_EM: f64 = 0.05;

pub const BUTTON_CLASS: &str = "liquid-button";

#[inline]
pub fn button_style(width: f64, height: f64) -> String {
    format!(
        "position:relative;display:inline-block;width:{w}px;height:{h}px;line-height:{h}px;\
         border:none;border-radius:9999px;background:transparent;color:#fff;cursor:pointer;\
         font-family:{font};font-weight:bold;font-size:{size}px;letter-spacing:{ls}em;\
         text-align:center;text-transform:uppercase;text-decoration:none;",
        w = width,
        h = height,
        font = FONT_FAMILY,
        size = FONT_SIZE_PX,
        ls = LETTER_SPACING_EM,
    )
}

#[inline]
pub fn label_style() -> String {
    format!("position:relative;z-index:{};", LABEL_Z_INDEX)
}

/// Canvas overhangs the button by `padding` on every side.
#[inline]
pub fn canvas_style(padding: f64) -> String {
    format!(
        "position:absolute;top:-{p}px;right:-{p}px;bottom:-{p}px;left:-{p}px;z-index:{z};",
        p = padding,
        z = CANVAS_Z_INDEX,
    )
}
