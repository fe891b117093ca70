/// WGSL program with one vertex and one fragment stage.
pub const SHADER_SOURCE: &str = include_str!("shaders/triangle.wgsl");

pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// Straight (non-premultiplied) alpha blending.
///
/// Color is composited source-over; destination alpha is kept as is.
pub fn straight_alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::Zero,
            dst_factor: wgpu::BlendFactor::One,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

/// The fixed triangle pipeline.
///
/// Invalid shader or pipeline state is reported through the device's
/// uncaptured-error hook, not here.
pub struct TrianglePipeline {
    pipeline: wgpu::RenderPipeline,
}

impl TrianglePipeline {
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lumen triangle shader"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("lumen triangle pipeline"),
            // Derived from the shader; it binds nothing.
            layout: None,

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some(VERTEX_ENTRY),
                compilation_options: Default::default(),
                buffers: &[],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some(FRAGMENT_ENTRY),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(straight_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },

            multiview_mask: None,
            cache: None,
        });

        // The pipeline keeps what it needs from the module.
        drop(shader);
        log::debug!("triangle pipeline built for {format:?}");

        Self { pipeline }
    }

    pub fn raw(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse() -> naga::Module {
        naga::front::wgsl::parse_str(SHADER_SOURCE).expect("triangle shader parses")
    }

    #[test]
    fn shader_validates() {
        let module = parse();
        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        )
        .validate(&module)
        .expect("triangle shader validates");
    }

    #[test]
    fn vertex_entry_emits_clip_position_from_vertex_index() {
        let module = parse();
        let ep = module
            .entry_points
            .iter()
            .find(|ep| ep.name == VERTEX_ENTRY)
            .expect("vertex entry point");
        assert_eq!(ep.stage, naga::ShaderStage::Vertex);
        assert_eq!(ep.function.arguments.len(), 1);
        assert!(matches!(
            ep.function.arguments[0].binding,
            Some(naga::Binding::BuiltIn(naga::BuiltIn::VertexIndex))
        ));
        assert!(matches!(
            ep.function.result.as_ref().and_then(|r| r.binding.as_ref()),
            Some(naga::Binding::BuiltIn(naga::BuiltIn::Position { .. }))
        ));
    }

    #[test]
    fn fragment_entry_writes_location_zero() {
        let module = parse();
        let ep = module
            .entry_points
            .iter()
            .find(|ep| ep.name == FRAGMENT_ENTRY)
            .expect("fragment entry point");
        assert_eq!(ep.stage, naga::ShaderStage::Fragment);
        assert!(ep.function.arguments.is_empty());
        assert!(matches!(
            ep.function.result.as_ref().and_then(|r| r.binding.as_ref()),
            Some(naga::Binding::Location { location: 0, .. })
        ));
    }

    #[test]
    fn blend_is_straight_alpha_over() {
        let blend = straight_alpha_blend();
        assert_eq!(blend.color.src_factor, wgpu::BlendFactor::SrcAlpha);
        assert_eq!(blend.color.dst_factor, wgpu::BlendFactor::OneMinusSrcAlpha);
        assert_eq!(blend.alpha.src_factor, wgpu::BlendFactor::Zero);
        assert_eq!(blend.alpha.dst_factor, wgpu::BlendFactor::One);
        assert_ne!(blend, wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING);
    }
}
