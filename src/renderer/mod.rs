//! WebGPU rendering module
//!
//! Flat-coloured triangles in world pixel coordinates, rebuilt every frame.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
