//! Per-frame submission.
//!
//! Each iteration: acquire a surface view, record one clear+draw pass, submit
//! the single command buffer, present, release the view. An unavailable view
//! drops the frame; the next iteration simply tries again.

mod driver;
mod plan;
mod state;
mod target;

pub use driver::{FrameLoop, FrameOutcome, FrameStats};
pub use plan::{PassPlan, CLEAR_COLOR, FRAME_MARKER};
pub use state::{FrameError, FrameOp, FrameState};
pub use target::{FrameTarget, GpuFrameTarget};
