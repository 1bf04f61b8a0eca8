pub mod config;
pub mod constants;
pub mod error;
pub mod lifecycle;
pub mod mesh;
pub mod offset;
pub mod physics;
pub mod pointer;
pub mod render;
pub mod simulation;

pub use config::*;
pub use error::ConfigError;
pub use lifecycle::{CancelToken, FrameGate, Teardown};
pub use mesh::{Mesh, MeshPair, Point};
pub use offset::CanvasOffset;
pub use pointer::{PointerState, PointerTracker};
pub use render::{Paint, RadialGradient, Surface};
pub use simulation::Simulation;
