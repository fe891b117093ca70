use winit::window::Window;

use super::hooks::watch_queue_work_done;
use super::request::{request_adapter_sync, request_device_sync};
use super::surface::{AcquiredView, SurfacePresenter};
use super::{inspect, GpuInit, StartupError, SURFACE_HEIGHT, SURFACE_WIDTH};

/// Device, queue and configured surface for one window.
///
/// Field order is release order: queue, then surface, then device. Call
/// [`Gpu::unconfigure`] before dropping.
pub struct Gpu<'w> {
    /// Command queue derived from `device`.
    queue: wgpu::Queue,

    /// Surface bound to the window; the window must outlive it (`'w`).
    presenter: SurfacePresenter<'w>,

    /// Logical device. Lives until shutdown.
    device: wgpu::Device,

    surface_format: wgpu::TextureFormat,
}

impl<'w> Gpu<'w> {
    /// Runs the startup sequence against `window`:
    /// surface, adapter, device, warm-up submission, surface configuration.
    ///
    /// The adapter is released once the device has been derived from it.
    pub fn new(
        instance: &wgpu::Instance,
        window: &'w Window,
        init: &GpuInit,
    ) -> Result<Self, StartupError> {
        let surface = instance
            .create_surface(window)
            .map_err(|e| StartupError::Surface(e.to_string()))?;

        let adapter = request_adapter_sync(
            instance,
            &wgpu::RequestAdapterOptions {
                power_preference: init.power_preference,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            },
        )
        .ok_or(StartupError::Adapter)?;
        inspect::log_adapter(&adapter);

        let (device, queue) = request_device_sync(
            &adapter,
            &wgpu::DeviceDescriptor {
                label: Some(init.device_label.as_str()),
                required_features: init.required_features,
                required_limits: init.required_limits.clone(),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            },
        )
        .ok_or(StartupError::Device)?;
        inspect::log_device(&device);

        warm_up(&device, &queue, init.startup_poll_ticks);

        let mut presenter = SurfacePresenter::new(surface);
        let surface_format =
            presenter.configure(&device, &adapter, init, SURFACE_WIDTH, SURFACE_HEIGHT)?;

        drop(adapter);

        Ok(Self {
            queue,
            presenter,
            device,
            surface_format,
        })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// Format the surface was configured with.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.surface_format
    }

    pub fn acquire_next_view(&self) -> Option<AcquiredView> {
        self.presenter.acquire_next_view(&self.device)
    }

    pub fn present(&self, acquired: AcquiredView) {
        self.presenter.present(acquired);
    }

    /// Detaches the surface. The remaining handles are released on drop.
    pub fn unconfigure(&mut self) {
        self.presenter.unconfigure();
    }
}

/// Submits an empty, marker-only command buffer and ticks the device so the
/// queue-work-done notification fires before the first frame.
fn warm_up(device: &wgpu::Device, queue: &wgpu::Queue, ticks: u32) {
    let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("lumen warm-up encoder"),
    });
    encoder.insert_debug_marker("Do one thing");
    encoder.insert_debug_marker("Do another thing");
    let command = encoder.finish();

    log::info!("submitting warm-up command...");
    queue.submit(std::iter::once(command));
    watch_queue_work_done(queue);
    log::info!("warm-up command submitted");

    for _ in 0..ticks {
        log::debug!("tick/poll device...");
        if let Err(err) = device.poll(wgpu::PollType::Poll) {
            log::warn!("device poll failed: {err}");
        }
    }
}
