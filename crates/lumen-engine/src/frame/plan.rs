use std::ops::Range;

/// Clear color of the single render pass.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.9,
    g: 0.1,
    b: 0.2,
    a: 1.0,
};

/// Debug marker inserted into every frame encoder.
pub const FRAME_MARKER: &str = "lumen triangle frame";

/// What one frame records: clear, then a single non-indexed draw.
#[derive(Debug, Clone, PartialEq)]
pub struct PassPlan {
    /// Debug marker written to the encoder before the pass begins.
    pub marker: &'static str,
    pub clear: wgpu::Color,
    pub vertices: Range<u32>,
    pub instances: Range<u32>,
}

impl PassPlan {
    /// One clear-and-store pass drawing 3 vertices, 1 instance, no offsets.
    pub fn triangle() -> Self {
        Self {
            marker: FRAME_MARKER,
            clear: CLEAR_COLOR,
            vertices: 0..3,
            instances: 0..1,
        }
    }

    pub fn color_ops(&self) -> wgpu::Operations<wgpu::Color> {
        wgpu::Operations {
            load: wgpu::LoadOp::Clear(self.clear),
            store: wgpu::StoreOp::Store,
        }
    }
}

impl Default for PassPlan {
    fn default() -> Self {
        Self::triangle()
    }
}
