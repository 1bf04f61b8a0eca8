//! Embedding options and simulation tuning.
//!
//! `ButtonConfig` carries what the hosting page supplies (label, box size,
//! colors, enabled flag). `SimParams` carries the physics and presentation
//! constants; its `Default` mirrors `constants.rs`.

use crate::constants::*;
use crate::error::ConfigError;

/// Options accepted from the hosting UI.
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonConfig {
    pub text: String,
    pub width: f64,
    pub height: f64,
    pub disabled: bool,
    pub background_color: String,
    pub gradient_color_inner: String,
    pub gradient_color_outer: String,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            disabled: false,
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            gradient_color_inner: DEFAULT_GRADIENT_COLOR_INNER.to_string(),
            gradient_color_outer: DEFAULT_GRADIENT_COLOR_OUTER.to_string(),
        }
    }
}

impl ButtonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)?;
        for (field, color) in [
            ("backgroundColor", &self.background_color),
            ("gradientColorInner", &self.gradient_color_inner),
            ("gradientColorOuter", &self.gradient_color_outer),
        ] {
            if color.trim().is_empty() {
                return Err(ConfigError::EmptyColor { field });
            }
        }
        Ok(())
    }
}

pub(crate) fn check_dimension(axis: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension { axis, value })
    }
}

/// Outer radius law for the foreground gradient, as a function of the
/// focal point's normalized distance from the canvas center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientSizing {
    /// `base + span * distance`
    Linear { base: f64, span: f64 },
    Constant(f64),
}

impl Default for GradientSizing {
    fn default() -> Self {
        GradientSizing::Linear {
            base: GRADIENT_RADIUS_BASE,
            span: GRADIENT_RADIUS_SPAN,
        }
    }
}

impl GradientSizing {
    #[inline]
    pub fn outer_radius(&self, normalized_distance: f64) -> f64 {
        let r = match *self {
            GradientSizing::Linear { base, span } => base + span * normalized_distance,
            GradientSizing::Constant(r) => r,
        };
        // canvas rejects negative radii
        r.max(0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimParams {
    pub points: usize,
    pub viscosity: f64,
    pub pointer_dist: f64,
    pub damping: f64,
    pub padding: f64,
    pub speed_interval_ms: u32,
    pub speed_divisor: f64,
    pub mouse_multiplier: f64,
    pub touch_multiplier: f64,
    pub gradient: GradientSizing,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            points: POINTS,
            viscosity: VISCOSITY,
            pointer_dist: POINTER_DIST,
            damping: DAMPING,
            padding: CANVAS_PADDING,
            speed_interval_ms: POINTER_SPEED_UPDATE_INTERVAL_MS,
            speed_divisor: POINTER_SPEED_DIVISOR,
            mouse_multiplier: MOUSE_INFLUENCE_MULTIPLIER,
            touch_multiplier: TOUCH_INFLUENCE_MULTIPLIER,
            gradient: GradientSizing::default(),
        }
    }
}

impl SimParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.points == 0 {
            return Err(ConfigError::TooFewPoints(self.points));
        }
        for (name, value) in [
            ("viscosity", self.viscosity),
            ("pointer_dist", self.pointer_dist),
            ("speed_divisor", self.speed_divisor),
            ("speed_interval_ms", self.speed_interval_ms as f64),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if i32::try_from(self.speed_interval_ms).is_err() {
            return Err(ConfigError::IntervalOutOfRange(self.speed_interval_ms));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::DampingOutOfRange(self.damping));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(ConfigError::NonPositive {
                name: "padding",
                value: self.padding,
            });
        }
        Ok(())
    }

    /// Velocity scale applied to the pointer impulse for the active input source.
    #[inline]
    pub fn influence_multiplier(&self, is_touch: bool) -> f64 {
        if is_touch {
            self.touch_multiplier
        } else {
            self.mouse_multiplier
        }
    }
}
