//! Render pipelines.
//!
//! There is exactly one: the fixed triangle, built once after device creation.

mod triangle;

pub use triangle::{
    straight_alpha_blend, TrianglePipeline, FRAGMENT_ENTRY, SHADER_SOURCE, VERTEX_ENTRY,
};
