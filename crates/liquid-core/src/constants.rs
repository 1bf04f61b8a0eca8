// Simulation tuning shared by every front end.

// Mesh layout
pub const POINTS: usize = 6; // subdivisions of the flat top/bottom edges
pub const CANVAS_PADDING: f64 = 30.0; // room for the blob to bleed past the button box
pub const LEVEL_BACKGROUND: u8 = 1;
pub const LEVEL_FOREGROUND: u8 = 2; // stiffer, so it lags behind the background

// Spring and damping
pub const VISCOSITY: f64 = 30.0; // higher = slower return to rest
pub const DAMPING: f64 = 0.15; // fraction of velocity removed per frame

// Pointer influence
pub const POINTER_DIST: f64 = 30.0; // radius (px) within which the pointer pushes points
pub const POINTER_SPEED_DIVISOR: f64 = 8.0;
pub const MOUSE_INFLUENCE_MULTIPLIER: f64 = 0.6;
pub const TOUCH_INFLUENCE_MULTIPLIER: f64 = 0.8;
pub const POINTER_SPEED_UPDATE_INTERVAL_MS: u32 = 30;

// Foreground gradient: outer radius = base + span * normalized distance from center
pub const GRADIENT_RADIUS_BASE: f64 = 300.0;
pub const GRADIENT_RADIUS_SPAN: f64 = 300.0;

// Embedding defaults
pub const DEFAULT_TEXT: &str = "Bouton liquide";
pub const DEFAULT_WIDTH: f64 = 240.0;
pub const DEFAULT_HEIGHT: f64 = 60.0;
pub const DEFAULT_BACKGROUND_COLOR: &str = "#1CE2D8";
pub const DEFAULT_GRADIENT_COLOR_INNER: &str = "#E406D6";
pub const DEFAULT_GRADIENT_COLOR_OUTER: &str = "#102ce5";
