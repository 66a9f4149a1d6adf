//! egui integration: input forwarding and the UI render pass

use winit::{event::WindowEvent, window::Window};

use crate::graphics::GraphicsContext;

pub struct EguiOverlay {
    pub ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl EguiOverlay {
    pub fn new(gfx: &GraphicsContext) -> Self {
        let ctx = egui::Context::default();
        let state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            &gfx.window,
            Some(gfx.window.scale_factor() as f32),
            None,
        );
        let renderer = egui_wgpu::Renderer::new(&gfx.device, gfx.config.format, None, 1);

        Self { ctx, state, renderer }
    }

    /// Forward a window event; returns true when egui consumed it
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.state.on_window_event(window, event).consumed
    }

    /// Run one UI frame and record its draw calls on top of `view`
    pub fn render(
        &mut self,
        gfx: &GraphicsContext,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        run_ui: impl FnMut(&egui::Context),
    ) {
        let raw_input = self.state.take_egui_input(&gfx.window);
        let full_output = self.ctx.run(raw_input, run_ui);

        self.state
            .handle_platform_output(&gfx.window, full_output.platform_output);
        let tris = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(&gfx.device, &gfx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gfx.size.width, gfx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        self.renderer
            .update_buffers(&gfx.device, &gfx.queue, encoder, &tris, &screen_descriptor);
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}
