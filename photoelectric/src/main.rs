//! Photoelectric Effect Lab
//!
//! Interactive simulator: choose a light frequency, an intensity and a cathode
//! material, and watch the photon energy, the work-function threshold and the
//! kinetic energy of emitted electrons on an energy-level diagram.
//!
//! Controls:
//! - Up/Down: Adjust light frequency by one slider step
//! - 1/2/3: Cesium, zinc, copper cathode
//! - C: Toggle the LED comparison window
//! - Escape: Close the comparison window and LED details

use common::{clear_pass, EguiOverlay, GraphicsContext, BACKGROUND};
use photoelectric::config::PresenterConfig;
use photoelectric::equations_ui::{
    draw_equations_sidebar, PHOTOELECTRIC_EQUATIONS, PHOTOELECTRIC_VARIABLES,
};
use photoelectric::panel::SimulatorPanel;
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

const WINDOW_TITLE: &str = "Photoelectric Effect - Energy Diagram";
const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 720;

struct App {
    ctx: GraphicsContext,
    overlay: EguiOverlay,
    panel: SimulatorPanel,
}

impl App {
    fn new(ctx: GraphicsContext) -> Self {
        let overlay = EguiOverlay::new(&ctx);
        let panel = SimulatorPanel::new(PresenterConfig::default());

        Self { ctx, overlay, panel }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        clear_pass(&mut encoder, &view, BACKGROUND);

        let panel = &mut self.panel;
        self.overlay.render(&self.ctx, &mut encoder, &view, |ctx| {
            let current = panel
                .readout()
                .map(|readout| (readout, &panel.params().material));
            draw_equations_sidebar(
                ctx,
                "Photoelectric Effect",
                PHOTOELECTRIC_EQUATIONS,
                PHOTOELECTRIC_VARIABLES,
                current,
            );
            panel.show(ctx);
        });

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        match key {
            KeyCode::ArrowUp => self.panel.step_frequency(1),
            KeyCode::ArrowDown => self.panel.step_frequency(-1),
            KeyCode::Digit1 => {
                self.panel.select_material(0);
            }
            KeyCode::Digit2 => {
                self.panel.select_material(1);
            }
            KeyCode::Digit3 => {
                self.panel.select_material(2);
            }
            KeyCode::KeyC => self.panel.toggle_comparison(),
            KeyCode::Escape => self.panel.close_windows(),
            _ => {}
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.overlay.handle_window_event(&self.ctx.window, event)
    }
}

fn main() {
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        WINDOW_TITLE,
        WINDOW_WIDTH,
        WINDOW_HEIGHT,
    ));

    let mut app = App::new(ctx);

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { ref event, .. } => {
                    let consumed = app.handle_window_event(event);

                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(size) => app.resize(*size),
                        WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    physical_key: PhysicalKey::Code(key),
                                    state,
                                    ..
                                },
                            ..
                        } if !consumed => app.handle_key(*key, *state),
                        WindowEvent::RedrawRequested => match app.render() {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                log::error!("Out of GPU memory, exiting");
                                elwt.exit();
                            }
                            Err(e) => log::error!("Render error: {:?}", e),
                        },
                        _ => {}
                    }
                }
                Event::AboutToWait => {
                    app.ctx.window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
