/// Color attachment views for one acquired frame.
///
/// With MSAA enabled, drawing goes to `msaa_view` and is resolved into the
/// swapchain `view` at the end of the pass.
pub struct FrameTarget {
    pub view: wgpu::TextureView,
    pub msaa_view: Option<wgpu::TextureView>,
    pub sample_count: u32,
    pub width: u32,
    pub height: u32,
}

impl FrameTarget {
    /// Color attachment that renders into this frame, resolving MSAA if active.
    pub fn color_attachment(
        &self,
        load: wgpu::LoadOp<wgpu::Color>,
    ) -> wgpu::RenderPassColorAttachment<'_> {
        let (view, resolve_target) = match &self.msaa_view {
            Some(msaa) => (msaa, Some(&self.view)),
            None => (&self.view, None),
        };

        wgpu::RenderPassColorAttachment {
            view,
            resolve_target,
            ops: wgpu::Operations {
                load,
                store: wgpu::StoreOp::Store,
            },
            depth_slice: None,
        }
    }
}

/// Represents a single acquired frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next one.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub target: FrameTarget,
    pub encoder: wgpu::CommandEncoder,
}

impl GpuFrame {
    /// Records a pass that only clears the color target.
    pub fn clear(&mut self, color: wgpu::Color) {
        let _pass = self.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("ember clear"),
            color_attachments: &[Some(self.target.color_attachment(wgpu::LoadOp::Clear(color)))],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }
}
