//! Fire-and-forget driver callbacks. They only log; nothing is recovered.

use std::sync::Arc;

/// Registers the device-lost and uncaptured-error callbacks on `device`.
pub fn install_device_hooks(device: &wgpu::Device) {
    device.set_device_lost_callback(|reason, message| {
        log::error!("{}", describe_device_lost(reason, &message));
    });

    device.on_uncaptured_error(Arc::new(|error: wgpu::Error| {
        log::error!("{}", describe_uncaptured_error(&error));
    }));
}

/// Logs once the work submitted to `queue` so far has finished.
pub fn watch_queue_work_done(queue: &wgpu::Queue) {
    queue.on_submitted_work_done(|| {
        log::info!("queued work finished");
    });
}

pub(crate) fn describe_device_lost(reason: wgpu::DeviceLostReason, message: &str) -> String {
    if message.is_empty() {
        format!("device lost: reason {reason:?}")
    } else {
        format!("device lost: reason {reason:?} ({message})")
    }
}

pub(crate) fn describe_uncaptured_error(error: &wgpu::Error) -> String {
    #[allow(unreachable_patterns)]
    let kind = match error {
        wgpu::Error::OutOfMemory { .. } => "out-of-memory",
        wgpu::Error::Validation { .. } => "validation",
        wgpu::Error::Internal { .. } => "internal",
        _ => "unknown",
    };
    format!("uncaptured device error: type {kind} ({error})")
}
