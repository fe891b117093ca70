use super::StartupError;

/// Window surface size in physical pixels. The surface is never reconfigured.
pub const SURFACE_WIDTH: u32 = 640;
pub const SURFACE_HEIGHT: u32 = 480;

/// Initialization parameters for the GPU layer.
///
/// Defaults reproduce the fixed bring-up configuration: FIFO presentation,
/// automatic alpha, no extra features, default limits.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends the instance may use. Chosen at compile time, see [`compiled_backends`].
    pub backends: wgpu::Backends,

    pub power_preference: wgpu::PowerPreference,

    /// Present mode (swap behavior).
    pub present_mode: wgpu::PresentMode,

    pub alpha_mode: wgpu::CompositeAlphaMode,

    /// Required wgpu features. Empty for portability.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    pub device_label: String,

    /// Hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,

    /// Number of non-blocking device polls issued after the warm-up submission.
    pub startup_poll_ticks: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: compiled_backends(),
            power_preference: wgpu::PowerPreference::default(),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            device_label: "lumen device".to_string(),
            desired_maximum_frame_latency: 2,
            startup_poll_ticks: 5,
        }
    }
}

/// Backend set fixed by the `gl` cargo feature.
pub fn compiled_backends() -> wgpu::Backends {
    if cfg!(feature = "gl") {
        wgpu::Backends::GL
    } else {
        wgpu::Backends::PRIMARY
    }
}

/// Intersects the requested backends with those present in this wgpu build.
pub fn select_backends(
    requested: wgpu::Backends,
    enabled: wgpu::Backends,
) -> Result<wgpu::Backends, StartupError> {
    let usable = requested & enabled;
    if usable.is_empty() {
        return Err(StartupError::NoBackend { requested, enabled });
    }
    Ok(usable)
}

/// Creates the graphics instance.
///
/// This is the first GPU call of the process and runs before any window exists.
pub fn create_instance(init: &GpuInit) -> Result<wgpu::Instance, StartupError> {
    let backends = select_backends(init.backends, wgpu::Instance::enabled_backend_features())?;

    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends,
        ..Default::default()
    });

    log::info!("wgpu instance created (backends: {backends:?})");
    Ok(instance)
}
