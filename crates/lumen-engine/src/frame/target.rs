use winit::window::Window;

use crate::device::{AcquiredView, Gpu};
use crate::pipeline::TrianglePipeline;

use super::PassPlan;

/// The operations one frame is made of.
///
/// `View` is held from acquisition until presentation; `Commands` is the
/// single command buffer recorded against it. Both are moved, so neither can
/// be used twice.
pub trait FrameTarget {
    type View;
    type Commands;

    /// Returns `None` when no view is available this frame.
    fn acquire_view(&mut self) -> Option<Self::View>;

    /// Records one render pass into `view` as described by `plan`.
    fn encode(&mut self, view: &Self::View, plan: &PassPlan) -> Self::Commands;

    fn submit(&mut self, commands: Self::Commands);

    /// Presents `view` and releases it.
    fn present(&mut self, view: Self::View);
}

/// [`FrameTarget`] over the window's surface and the triangle pipeline.
pub struct GpuFrameTarget<'a, 'w> {
    window: &'a Window,
    gpu: &'a Gpu<'w>,
    pipeline: &'a TrianglePipeline,
}

impl<'a, 'w> GpuFrameTarget<'a, 'w> {
    pub fn new(window: &'a Window, gpu: &'a Gpu<'w>, pipeline: &'a TrianglePipeline) -> Self {
        Self {
            window,
            gpu,
            pipeline,
        }
    }
}

impl FrameTarget for GpuFrameTarget<'_, '_> {
    type View = AcquiredView;
    type Commands = wgpu::CommandBuffer;

    fn acquire_view(&mut self) -> Option<AcquiredView> {
        self.gpu.acquire_next_view()
    }

    fn encode(&mut self, view: &AcquiredView, plan: &PassPlan) -> wgpu::CommandBuffer {
        let mut encoder = self
            .gpu
            .device()
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("lumen frame encoder"),
            });
        encoder.insert_debug_marker(plan.marker);

        // Pass is dropped (ended) before the encoder is finished.
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("lumen triangle pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: view.view(),
                    resolve_target: None,
                    ops: plan.color_ops(),
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_pipeline(self.pipeline.raw());
            rpass.draw(plan.vertices.clone(), plan.instances.clone());
        }

        encoder.finish()
    }

    fn submit(&mut self, commands: wgpu::CommandBuffer) {
        self.gpu.queue().submit(std::iter::once(commands));
    }

    fn present(&mut self, view: AcquiredView) {
        self.window.pre_present_notify();
        self.gpu.present(view);
    }
}
