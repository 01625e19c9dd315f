//! Renderer-agnostic presentation
//!
//! Builds colored court-space triangles plus the court/clip transforms. GPU
//! resources, shaders and windowing belong to the host's renderer.

pub mod frame;
pub mod shapes;
pub mod vertex;
pub mod viewport;

pub use frame::{Frame, build_frame};
pub use vertex::{Vertex, colors};
pub use viewport::Viewport;
