//! Vitrine - animated showcase
//!
//! A native rendition of a decorative landing page: a drifting glow-particle
//! field, a 3D rotating panel ring with a lightbox, a typewriter title, a
//! time-since-epoch readout, and a confetti easter egg.

mod config;

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Fullscreen, Window, WindowId},
};

use vitrine_core::{
    AutoRotate, CivilDate, ConfettiSystem, Countdown, Elapsed, Lightbox, ParticleField, Ring,
    Typewriter,
};
use vitrine_input::{RingCommand, RingController};
use vitrine_math::Vec2;
use vitrine_render::{
    context::RenderContext,
    frame,
    pipeline::{GlowPipeline, GlowUniforms, QuadPipeline},
    ViewParams,
};

use config::AppConfig;

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    glow_pipeline: Option<GlowPipeline>,
    quad_pipeline: Option<QuadPipeline>,
    /// Widget state, all owned here and advanced by the redraw handler
    field: ParticleField,
    ring: Ring,
    auto_rotate: AutoRotate,
    lightbox: Lightbox,
    confetti: ConfettiSystem,
    countdown: Countdown,
    typewriter: Typewriter,
    controller: RingController,
    /// Cached countdown readout, refreshed once per second
    elapsed: Elapsed,
    countdown_clock: Duration,
    last_frame: Instant,
    occluded: bool,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let surface = Vec2::new(config.window.width as f32, config.window.height as f32);
        let field = ParticleField::new(surface, config.field.to_field_params());
        let ring = Ring::new(config.ring.panel_count, config.ring.panel_width);
        let auto_rotate = AutoRotate::new(Duration::from_millis(config.ring.auto_rotate_ms));
        let countdown = Countdown::new(CivilDate::new(
            config.countdown.epoch_year,
            config.countdown.epoch_month,
            config.countdown.epoch_day,
        ));
        let elapsed = countdown.elapsed_now();
        let typewriter = Typewriter::with_delay(
            config.window.title.clone(),
            Duration::from_millis(config.typewriter.speed_ms),
            Duration::from_millis(config.typewriter.initial_delay_ms),
        );
        let controller = RingController::new().with_swipe_threshold(config.ring.swipe_threshold);

        log::info!(
            "Showcase ready: {} particles, {} panels (ring radius {:.0})",
            field.particle_count(),
            ring.panel_count(),
            ring.radius()
        );

        Self {
            config,
            window: None,
            render_context: None,
            glow_pipeline: None,
            quad_pipeline: None,
            field,
            ring,
            auto_rotate,
            lightbox: Lightbox::new(),
            confetti: ConfettiSystem::new(),
            countdown,
            typewriter,
            controller,
            elapsed,
            countdown_clock: Duration::ZERO,
            last_frame: Instant::now(),
            occluded: false,
        }
    }

    /// Current projection parameters; the surface tracks the field bounds
    fn view_params(&self) -> ViewParams {
        ViewParams {
            surface: self.field.bounds(),
            fov_deg: self.config.ring.fov,
            view_distance: self.config.ring.view_distance,
            panel_width: self.config.ring.panel_width,
            panel_height: self.config.ring.panel_height,
        }
    }

    fn window_title(&self) -> String {
        let e = &self.elapsed;
        let mut title = format!(
            "{} | {}y {}m {}d {}h",
            self.typewriter.visible(),
            e.years,
            e.months,
            e.days,
            e.hours
        );
        if self.auto_rotate.is_manually_paused() {
            title.push_str(" [rotation paused]");
        }
        title
    }

    fn apply_command(&mut self, command: RingCommand, event_loop: &ActiveEventLoop) {
        match command {
            RingCommand::Previous => {
                self.auto_rotate.user_stop();
                self.ring.rotate(-1);
            }
            RingCommand::Next => {
                self.auto_rotate.user_stop();
                self.ring.rotate(1);
            }
            RingCommand::ToggleRotation => {
                let running = self.auto_rotate.user_toggle();
                log::info!("Auto-rotation {}", if running { "on" } else { "off" });
            }
            RingCommand::ActivateFront => {
                if self.lightbox.intercepts_input() {
                    self.lightbox.request_close();
                } else if let Some(front) = self.ring.front_panel() {
                    self.lightbox.open(front);
                }
            }
            RingCommand::Click(position) => self.handle_click(position),
            RingCommand::Dismiss => {
                if self.lightbox.intercepts_input() {
                    self.lightbox.request_close();
                } else {
                    event_loop.exit();
                }
            }
            RingCommand::ConfettiBurst => {
                self.confetti.burst(self.field.bounds().x);
            }
        }
    }

    /// A short click: dismiss the lightbox if it is open, otherwise open it
    /// when the click lands on the front panel
    fn handle_click(&mut self, position: Vec2) {
        if self.lightbox.intercepts_input() {
            self.lightbox.request_close();
            return;
        }

        let Some(front) = self.ring.front_panel() else {
            return;
        };
        if let Some((min, max)) = frame::panel_pixel_rect(&self.ring, &self.view_params(), front) {
            let inside = position.x >= min.x
                && position.x <= max.x
                && position.y >= min.y
                && position.y <= max.y;
            if inside {
                self.lightbox.open(front);
            }
        }
    }

    /// Advance all widgets by one frame and repaint
    fn update_and_render(&mut self, event_loop: &ActiveEventLoop) {
        // Calculate delta time
        let now = Instant::now();
        let raw_dt = now - self.last_frame;
        // Cap dt so a stall does not fast-forward the overlays
        let dt = raw_dt.min(Duration::from_millis(33));
        self.last_frame = now;

        // Drain input
        self.controller.update(dt);
        for command in self.controller.poll() {
            self.apply_command(command, event_loop);
        }

        // Periodic rotation
        let fires = self.auto_rotate.tick(dt);
        for _ in 0..fires {
            self.ring.rotate(1);
        }

        // Per-frame widget updates
        self.field.step();
        self.lightbox.update(dt);
        self.confetti.update(dt);
        self.typewriter.update(dt);

        // Countdown refresh on a one-second cadence
        self.countdown_clock += dt;
        if self.countdown_clock >= Duration::from_secs(1) {
            self.countdown_clock = Duration::ZERO;
            self.elapsed = self.countdown.elapsed_now();
        }

        if let Some(window) = &self.window {
            window.set_title(&self.window_title());
        }

        self.render_frame(event_loop);

        // Request next frame
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Paint the current widget state; a no-op without a render context
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let view = self.view_params();
        let surface = view.surface;

        let glow_instances = frame::glow_instances(&self.field);
        let panel_instances = frame::panel_instances(&self.ring, &view);
        let panel_count = panel_instances.len() as u32;

        let mut quad_instances = panel_instances;
        quad_instances.extend(frame::confetti_instances(&self.confetti, surface));
        quad_instances.extend(frame::lightbox_instances(&self.lightbox, &view));
        let total_quads = quad_instances.len() as u32;

        let (Some(ctx), Some(glow_pipeline), Some(quad_pipeline)) = (
            &self.render_context,
            &mut self.glow_pipeline,
            &mut self.quad_pipeline,
        ) else {
            return;
        };

        let rendering = &self.config.rendering;
        glow_pipeline.update_uniforms(
            &ctx.queue,
            &GlowUniforms {
                surface_size: surface.to_array(),
                _padding: [0.0; 2],
                core_color: rendering.glow_core_color,
                glow_inner: rendering.glow_inner_color,
                glow_mid: rendering.glow_mid_color,
            },
        );
        glow_pipeline.upload_instances(&ctx.device, &ctx.queue, &glow_instances);
        quad_pipeline.upload_instances(&ctx.device, &ctx.queue, &quad_instances);

        // Get surface texture
        let output = match ctx.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) => {
                let size = ctx.size;
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(size);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                event_loop.exit();
                return;
            }
            Err(e) => {
                log::warn!("Surface error: {:?}", e);
                return;
            }
        };

        let view_texture = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Showcase Encoder"),
            });

        {
            let bg = &rendering.background_color;
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Showcase Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view_texture,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg[0] as f64,
                            g: bg[1] as f64,
                            b: bg[2] as f64,
                            a: bg[3] as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Ring panels back to front, glow field over them, overlays on top
            quad_pipeline.draw_range(&mut pass, 0..panel_count);
            glow_pipeline.draw(&mut pass);
            quad_pipeline.draw_range(&mut pass, panel_count..total_quads);
        }

        ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let mut window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ));
            if self.config.window.fullscreen {
                window_attributes =
                    window_attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
            }

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            // A machine without a usable GPU still gets the event loop,
            // title updates, and input; rendering silently degrades
            match pollster::block_on(RenderContext::new(window.clone(), self.config.window.vsync))
            {
                Ok(ctx) => {
                    let glow_pipeline = GlowPipeline::new(
                        &ctx.device,
                        ctx.config.format,
                        self.config.field.particle_count,
                    );
                    let quad_pipeline = QuadPipeline::new(
                        &ctx.device,
                        ctx.config.format,
                        self.config.ring.panel_count + 128,
                    );
                    self.field
                        .resize(Vec2::new(ctx.size.width as f32, ctx.size.height as f32));
                    self.render_context = Some(ctx);
                    self.glow_pipeline = Some(glow_pipeline);
                    self.quad_pipeline = Some(quad_pipeline);
                }
                Err(e) => {
                    log::warn!("Rendering disabled: {}", e);
                }
            }

            window.request_redraw();
            self.window = Some(window);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
                // Field bounds resync; particles re-enter via wraparound
                self.field.resize(Vec2::new(
                    physical_size.width as f32,
                    physical_size.height as f32,
                ));
            }

            WindowEvent::Occluded(occluded) => {
                self.occluded = occluded;
                if occluded {
                    self.auto_rotate.visibility_hidden();
                    log::info!("Window hidden; pausing animations");
                } else {
                    self.auto_rotate.visibility_visible();
                    self.last_frame = Instant::now();
                    if let Some(window) = &self.window {
                        window.request_redraw();
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if event.state == ElementState::Pressed && key == KeyCode::KeyF {
                        if let Some(window) = &self.window {
                            let new_fullscreen = if window.fullscreen().is_some() {
                                None
                            } else {
                                Some(Fullscreen::Borderless(None))
                            };
                            window.set_fullscreen(new_fullscreen);
                        }
                        return;
                    }
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.controller
                    .process_cursor_moved(position.x as f32, position.y as f32);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.controller.process_mouse_button(button, state);
            }

            WindowEvent::RedrawRequested => {
                if self.occluded {
                    return;
                }
                self.update_and_render(event_loop);
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting Vitrine");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
