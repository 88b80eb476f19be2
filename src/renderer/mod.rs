//! wgpu rendering module
//!
//! Scene geometry is built on the CPU as a flat triangle list (shapes and
//! stroke-font text) and drawn with a single orthographic pipeline.

pub mod font;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::{Frame, build_frame};
pub use vertex::Vertex;
