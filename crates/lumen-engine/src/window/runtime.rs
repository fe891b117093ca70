use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::device::{self, Gpu, GpuInit, StartupError, SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::frame::{FrameLoop, FrameOutcome, GpuFrameTarget, PassPlan};
use crate::pipeline::TrianglePipeline;

/// Window configuration. The window is fixed-size; the surface never resizes.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub size: PhysicalSize<u32>,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Learn WebGPU".to_string(),
            size: PhysicalSize::new(SURFACE_WIDTH, SURFACE_HEIGHT),
            resizable: false,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs startup, the frame loop, and shutdown.
    ///
    /// Returns an error if any startup step fails; the frame loop is never
    /// entered in that case.
    pub fn run(config: RuntimeConfig, gpu_init: GpuInit) -> Result<()> {
        // The instance comes first: without one no window is created.
        let instance = device::create_instance(&gpu_init)?;

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut state = AppState::new(config, gpu_init, instance);
        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.shutdown();
        log::info!("windowing system terminated");

        match state.startup_error.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    instance: wgpu::Instance,

    entry: Option<WindowEntry>,
    pipeline: Option<TrianglePipeline>,
    frames: FrameLoop,

    close_requested: bool,
    startup_error: Option<StartupError>,
}

impl AppState {
    fn new(config: RuntimeConfig, gpu_init: GpuInit, instance: wgpu::Instance) -> Self {
        Self {
            config,
            gpu_init,
            instance,
            entry: None,
            pipeline: None,
            frames: FrameLoop::new(PassPlan::triangle()),
            close_requested: false,
            startup_error: None,
        }
    }

    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<(), StartupError> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| StartupError::Window(e.to_string()))?;

        let instance = &self.instance;
        let gpu_init = &self.gpu_init;

        let entry = WindowEntryTryBuilder {
            window,
            gpu_builder: |w| Gpu::new(instance, w, gpu_init),
        }
        .try_build()?;

        let pipeline =
            entry.with_gpu(|gpu| TrianglePipeline::new(gpu.device(), gpu.surface_format()));

        self.pipeline = Some(pipeline);
        self.entry = Some(entry);
        log::info!("startup complete; entering frame loop");
        Ok(())
    }

    /// Releases everything in reverse dependency order:
    /// pipeline, surface configuration, queue, surface, device, window.
    fn shutdown(&mut self) {
        let Some(mut entry) = self.entry.take() else {
            return;
        };

        log::info!("shutting down after {:?}", self.frames.stats());
        drop(self.pipeline.take());
        entry.with_gpu_mut(|gpu| gpu.unconfigure());
        // Gpu fields drop queue -> surface -> device, then the window goes.
        drop(entry);
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.startup_error.is_some() {
            return;
        }

        if let Err(err) = self.start(event_loop) {
            log::error!("startup failed: {err}");
            self.startup_error = Some(err);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::CloseRequested = event {
            log::debug!("close requested");
            self.close_requested = true;
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Self {
            entry,
            pipeline,
            frames,
            close_requested,
            ..
        } = self;

        let (Some(entry), Some(pipeline)) = (entry.as_ref(), pipeline.as_ref()) else {
            return;
        };

        let result = entry.with(|fields| {
            let mut target = GpuFrameTarget::new(fields.window, fields.gpu, pipeline);
            frames.iterate(*close_requested, &mut target)
        });

        match result {
            Ok(FrameOutcome::Closed) => {
                self.shutdown();
                event_loop.exit();
            }
            Ok(FrameOutcome::Presented | FrameOutcome::Skipped) => {}
            Err(err) => {
                log::error!("frame loop aborted: {err}");
                self.shutdown();
                event_loop.exit();
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
