use super::{GpuInit, StartupError};

/// Outcome of asking the surface for its current texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceStatus {
    Success,
    Timeout,
    Outdated,
    Lost,
    OutOfMemory,
    Other,
}

impl SurfaceStatus {
    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    /// Lost and outdated surfaces only hand out textures again after being
    /// reconfigured.
    pub fn needs_reconfigure(self) -> bool {
        matches!(self, Self::Lost | Self::Outdated)
    }
}

impl From<&wgpu::SurfaceError> for SurfaceStatus {
    fn from(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Timeout => Self::Timeout,
            wgpu::SurfaceError::Outdated => Self::Outdated,
            wgpu::SurfaceError::Lost => Self::Lost,
            wgpu::SurfaceError::OutOfMemory => Self::OutOfMemory,
            wgpu::SurfaceError::Other => Self::Other,
        }
    }
}

/// A surface texture together with the view rendered into this frame.
///
/// Consumed by [`SurfacePresenter::present`]. Dropping it unpresented
/// discards the frame.
pub struct AcquiredView {
    texture: wgpu::SurfaceTexture,
    view: wgpu::TextureView,
}

impl AcquiredView {
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}

/// Full, single-mip, single-layer 2D view at the texture's native format.
pub fn full_view_descriptor(format: wgpu::TextureFormat) -> wgpu::TextureViewDescriptor<'static> {
    wgpu::TextureViewDescriptor {
        label: Some("surface texture view"),
        format: Some(format),
        dimension: Some(wgpu::TextureViewDimension::D2),
        usage: None,
        aspect: wgpu::TextureAspect::All,
        base_mip_level: 0,
        mip_level_count: Some(1),
        base_array_layer: 0,
        array_layer_count: Some(1),
    }
}

/// Builds the fixed surface configuration.
pub fn surface_config(
    init: &GpuInit,
    format: wgpu::TextureFormat,
    width: u32,
    height: u32,
) -> wgpu::SurfaceConfiguration {
    wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: width.max(1),
        height: height.max(1),
        present_mode: init.present_mode,
        alpha_mode: init.alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: init.desired_maximum_frame_latency,
    }
}

/// Owns the window surface and hands out one view per frame.
pub struct SurfacePresenter<'w> {
    surface: wgpu::Surface<'w>,
    config: Option<wgpu::SurfaceConfiguration>,
}

impl<'w> SurfacePresenter<'w> {
    pub fn new(surface: wgpu::Surface<'w>) -> Self {
        Self {
            surface,
            config: None,
        }
    }

    /// Binds the surface to `device`. Must run once, before the first frame.
    ///
    /// The format is the surface's preferred one for `adapter`.
    pub fn configure(
        &mut self,
        device: &wgpu::Device,
        adapter: &wgpu::Adapter,
        init: &GpuInit,
        width: u32,
        height: u32,
    ) -> Result<wgpu::TextureFormat, StartupError> {
        let caps = self.surface.get_capabilities(adapter);
        let format = caps
            .formats
            .first()
            .copied()
            .ok_or(StartupError::NoSurfaceFormat)?;

        let config = surface_config(init, format, width, height);
        self.surface.configure(device, &config);
        log::info!(
            "surface configured: {}x{} {:?} {:?}",
            config.width,
            config.height,
            config.format,
            config.present_mode
        );

        self.config = Some(config);
        Ok(format)
    }

    /// Returns the view for this frame, or `None` when the surface has no
    /// texture to give (lost, outdated, timed out, unconfigured). The caller
    /// skips the frame.
    ///
    /// A lost or outdated surface is reconfigured with the stored
    /// configuration so the next frame can proceed.
    pub fn acquire_next_view(&self, device: &wgpu::Device) -> Option<AcquiredView> {
        let Some(config) = self.config.as_ref() else {
            log::warn!("surface not configured; skipping frame");
            return None;
        };

        let texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(err) => {
                let status = SurfaceStatus::from(&err);
                log::debug!("surface texture unavailable: {status:?}");
                if status.needs_reconfigure() {
                    self.surface.configure(device, config);
                }
                return None;
            }
        };

        let view = texture
            .texture
            .create_view(&full_view_descriptor(texture.texture.format()));

        Some(AcquiredView { texture, view })
    }

    /// Presents the frame rendered into `acquired`, then releases its view.
    pub fn present(&self, acquired: AcquiredView) {
        let AcquiredView { texture, view } = acquired;
        texture.present();
        drop(view);
    }

    /// Detaches the surface from the device. Called once at shutdown.
    pub fn unconfigure(&mut self) {
        if self.config.take().is_some() {
            log::debug!("surface unconfigured");
        }
    }
}
