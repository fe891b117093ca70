//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance and acquiring Adapter/Device/Queue synchronously
//! - configuring the Surface and handing out one view per frame
//! - logging asynchronous driver notifications

mod error;
mod gpu;
mod hooks;
mod init;
mod inspect;
mod request;
mod surface;

pub use error::StartupError;
pub use gpu::Gpu;
pub use hooks::{install_device_hooks, watch_queue_work_done};
pub use init::{
    compiled_backends, create_instance, select_backends, GpuInit, SURFACE_HEIGHT, SURFACE_WIDTH,
};
pub use inspect::{log_adapter, log_device};
pub use request::{request_adapter_sync, request_device_sync, request_sync, RequestKind};
pub use surface::{full_view_descriptor, surface_config, AcquiredView, SurfacePresenter, SurfaceStatus};
