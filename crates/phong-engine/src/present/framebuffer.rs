use crate::render::RenderCtx;

/// Uploads a tightly packed RGB24 image into a texture and blits it onto the
/// frame, one texel per physical pixel.
///
/// Row 0 of the image is the top of the window. Pixels outside the image
/// are drawn black.
#[derive(Default)]
pub struct FramebufferPresenter {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,

    texture: Option<wgpu::Texture>,
    texture_format: Option<wgpu::TextureFormat>,
    texture_size: (u32, u32),
    bind_group: Option<wgpu::BindGroup>,

    /// RGBA staging copy reused across frames.
    rgba: Vec<u8>,
}

impl FramebufferPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Presents `rgb` (`width * height * 3` bytes) onto the frame.
    ///
    /// An empty image draws nothing. A buffer of the wrong length is skipped
    /// with a warning and the frame keeps its clear color.
    pub fn present(
        &mut self,
        ctx: &mut RenderCtx<'_>,
        width: u32,
        height: u32,
        rgb: &[u8],
    ) {
        if width == 0 || height == 0 {
            return;
        }
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            log::warn!(
                "framebuffer size mismatch: {} bytes for {width}x{height}, expected {expected}",
                rgb.len()
            );
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_texture(ctx, width, height);

        expand_rgb_to_rgba(rgb, &mut self.rgba);

        let Some(texture) = self.texture.as_ref() else { return };
        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &self.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
        );

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = ctx.color_pass("phong blit pass", wgpu::LoadOp::Load);
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("phong blit shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blit.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("phong blit bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: false },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("phong blit pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("phong blit pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
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
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("blit pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        // Old bind group belongs to the old layout.
        self.bind_group = None;
        self.texture = None;
    }

    fn ensure_texture(&mut self, ctx: &RenderCtx<'_>, width: u32, height: u32) {
        let format = upload_format(ctx.surface_format);
        if self.texture.is_some()
            && self.texture_size == (width, height)
            && self.texture_format == Some(format)
        {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("phong framebuffer texture"),
            size: wgpu::Extent3d { width, height, depth_or_array_layers: 1 },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("phong blit bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            }],
        });

        log::debug!("framebuffer texture reallocated: {width}x{height} {format:?}");

        self.texture = Some(texture);
        self.texture_format = Some(format);
        self.texture_size = (width, height);
        self.bind_group = Some(bind_group);
    }
}

/// Texture format for uploaded pixels.
///
/// The bytes are already display-encoded. On an sRGB surface the texture is
/// tagged sRGB so the decode on load and the encode on store cancel out.
pub fn upload_format(surface_format: wgpu::TextureFormat) -> wgpu::TextureFormat {
    if surface_format.is_srgb() {
        wgpu::TextureFormat::Rgba8UnormSrgb
    } else {
        wgpu::TextureFormat::Rgba8Unorm
    }
}

/// Widens RGB24 into opaque RGBA32, reusing `out`'s allocation.
pub fn expand_rgb_to_rgba(rgb: &[u8], out: &mut Vec<u8>) {
    out.clear();
    out.reserve(rgb.len() / 3 * 4);
    for px in rgb.chunks_exact(3) {
        out.extend_from_slice(&[px[0], px[1], px[2], u8::MAX]);
    }
}
