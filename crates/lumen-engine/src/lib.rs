//! Lumen engine crate.
//!
//! Window, wgpu device bring-up, the fixed triangle pipeline and the frame
//! loop that draws it.

pub mod device;
pub mod frame;
pub mod logging;
pub mod pipeline;
pub mod window;
