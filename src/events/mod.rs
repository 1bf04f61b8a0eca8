pub mod activation;
pub mod layout;
pub mod pointer;

pub use activation::wire_activation;
pub use layout::{refresh_layout, wire_layout_handlers, LayoutWiring};
pub use pointer::wire_pointer_handlers;
