//! Blocking wrappers over wgpu's asynchronous adapter/device requests.
//!
//! `request_adapter_sync(..)` is the linear-startup equivalent of
//! `instance.request_adapter(..).await`.

use std::fmt;
use std::future::Future;

use super::hooks;

/// Which request a [`request_sync`] call is waiting on. Used in diagnostics.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RequestKind {
    Adapter,
    Device,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Adapter => "adapter",
            Self::Device => "device",
        })
    }
}

/// Shared slot between a request and its completion.
///
/// Written exactly once by [`Completion::finish`] from inside the awaited
/// request; read back only after the blocking wait has returned.
struct Completion<T> {
    result: Option<T>,
    ended: bool,
}

impl<T> Completion<T> {
    fn new() -> Self {
        Self {
            result: None,
            ended: false,
        }
    }

    fn finish<E: fmt::Display>(&mut self, kind: RequestKind, outcome: Result<T, E>) {
        debug_assert!(!self.ended, "{kind} request completed twice");
        match outcome {
            Ok(handle) => self.result = Some(handle),
            Err(err) => log::error!("could not get WebGPU {kind}: {err}"),
        }
        self.ended = true;
    }

    fn into_result(self, kind: RequestKind) -> Option<T> {
        assert!(self.ended, "{kind} request returned before completing");
        self.result
    }
}

/// Blocks the calling thread until `request` resolves.
///
/// Returns the handle on success. On failure the diagnostic is logged and
/// `None` is returned. There is no timeout and no cancellation.
pub fn request_sync<T, E, F>(kind: RequestKind, request: F) -> Option<T>
where
    F: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let mut completion = Completion::new();
    let slot = &mut completion;
    pollster::block_on(async move {
        let outcome = request.await;
        slot.finish(kind, outcome);
    });
    completion.into_result(kind)
}

/// Synchronously requests an adapter compatible with `options`.
pub fn request_adapter_sync(
    instance: &wgpu::Instance,
    options: &wgpu::RequestAdapterOptions<'_, '_>,
) -> Option<wgpu::Adapter> {
    log::info!("requesting adapter...");
    let adapter = request_sync(RequestKind::Adapter, instance.request_adapter(options))?;
    log::info!("got adapter: {}", adapter.get_info().name);
    Some(adapter)
}

/// Synchronously requests a device from `adapter`.
///
/// On success the device-lost and uncaptured-error hooks are installed; they
/// stay registered for the device's whole lifetime.
pub fn request_device_sync(
    adapter: &wgpu::Adapter,
    descriptor: &wgpu::DeviceDescriptor<'_>,
) -> Option<(wgpu::Device, wgpu::Queue)> {
    log::info!("requesting device...");
    let (device, queue) = request_sync(RequestKind::Device, adapter.request_device(descriptor))?;
    hooks::install_device_hooks(&device);
    log::info!("got device: {:?}", descriptor.label.unwrap_or("<unlabeled>"));
    Some((device, queue))
}
