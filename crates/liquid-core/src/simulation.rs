use crate::config::{check_dimension, ButtonConfig, SimParams};
use crate::error::ConfigError;
use crate::mesh::{canvas_size, MeshPair};
use crate::offset::CanvasOffset;
use crate::physics::advance_mesh;
use crate::pointer::PointerTracker;
use crate::render::{render_frame, Palette, Surface};
use glam::DVec2;

/// Owns the meshes and pointer state of one mounted button.
///
/// Input handlers and the frame callback mutate it only through these
/// methods; nothing else holds the meshes.
#[derive(Debug)]
pub struct Simulation {
    config: ButtonConfig,
    params: SimParams,
    meshes: MeshPair,
    pointer: PointerTracker,
    button_size: DVec2,
    canvas_size: DVec2,
}

impl Simulation {
    pub fn new(config: ButtonConfig, params: SimParams) -> Result<Self, ConfigError> {
        config.validate()?;
        params.validate()?;
        let button_size = DVec2::new(config.width, config.height);
        let meshes = MeshPair::build(button_size.x, button_size.y, &params);
        Ok(Self {
            canvas_size: canvas_size(button_size.x, button_size.y, params.padding),
            config,
            params,
            meshes,
            pointer: PointerTracker::new(),
            button_size,
        })
    }

    /// Rebuilds both meshes for a new measured button size.
    /// Returns whether anything changed.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<bool, ConfigError> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        let size = DVec2::new(width, height);
        if size == self.button_size && !self.meshes.background.is_empty() {
            return Ok(false);
        }
        self.button_size = size;
        self.canvas_size = canvas_size(width, height, self.params.padding);
        self.meshes = MeshPair::build(width, height, &self.params);
        Ok(true)
    }

    /// Advances every point of both layers by one frame.
    pub fn step(&mut self) {
        let pointer = *self.pointer.state();
        for mesh in self.meshes.layers_mut() {
            advance_mesh(mesh, &pointer, &self.params);
        }
    }

    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let palette = Palette {
            background: &self.config.background_color,
            gradient_inner: &self.config.gradient_color_inner,
            gradient_outer: &self.config.gradient_color_outer,
        };
        render_frame(
            surface,
            &mut self.meshes,
            self.pointer.state().position,
            self.pointer.offset(),
            self.canvas_size,
            &self.params.gradient,
            &palette,
        );
    }

    /// One scheduled frame: integrate, then paint.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.step();
        self.render(surface);
    }

    /// Drops both meshes at teardown.
    pub fn release_meshes(&mut self) {
        self.meshes.clear();
    }

    pub fn set_offset(&mut self, offset: CanvasOffset) {
        self.pointer.set_offset(offset);
    }

    #[inline]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    #[inline]
    pub fn pointer_mut(&mut self) -> &mut PointerTracker {
        &mut self.pointer
    }

    #[inline]
    pub fn meshes(&self) -> &MeshPair {
        &self.meshes
    }

    #[inline]
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    #[inline]
    pub fn button_size(&self) -> DVec2 {
        self.button_size
    }

    #[inline]
    pub fn canvas_size(&self) -> DVec2 {
        self.canvas_size
    }

    pub fn set_text(&mut self, text: &str) {
        self.config.text = text.to_string();
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.config.disabled
    }
}
