use anyhow::{Context, Result};
use clap::Parser;
use egui::Context as EguiContext;
use glam::Vec2;
use roomview_common::ViewerConfig;
use roomview_input::{Action, InputState, MouseTracker, scroll_lines};
use roomview_render::{Camera, SceneLayout, plan_frame};
use roomview_render_wgpu::WgpuRenderer;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowId};

#[derive(Parser)]
#[command(name = "roomview", about = "Fly through a textured room")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Directory holding the texture images
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Optional JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Per-run viewer state, passed to every callback.
struct AppContext {
    camera: Camera,
    scene: SceneLayout,
    input: InputState,
    mouse: MouseTracker,
    lamp_orbiting: bool,
    show_hud: bool,
    last_frame: Instant,
    frame_time: f32,
}

impl AppContext {
    fn new(config: &ViewerConfig) -> Self {
        Self {
            camera: Camera::new(config.camera_position),
            scene: SceneLayout::from_config(config),
            input: InputState::new(),
            mouse: MouseTracker::new(),
            lamp_orbiting: false,
            show_hud: false,
            last_frame: Instant::now(),
            frame_time: 0.0,
        }
    }

    /// Apply held movement keys for the elapsed time.
    fn update(&mut self, dt: f32) {
        self.frame_time = dt;
        for direction in self.input.held_directions() {
            self.camera.process_keyboard(direction, dt);
        }
    }

    /// Returns `true` when the viewer should close.
    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::StartLampOrbit => {
                self.lamp_orbiting = true;
                tracing::debug!("lamp orbit on");
            }
            Action::StopLampOrbit => {
                self.lamp_orbiting = false;
                tracing::debug!("lamp orbit off");
            }
            Action::ToggleHud => self.show_hud = !self.show_hud,
            Action::Move(_) => {}
        }
        false
    }

    fn look(&mut self, position: Vec2) {
        let offset = self.mouse.offset(f64::from(position.x), f64::from(position.y));
        self.camera.process_mouse_movement(offset.x, offset.y);
    }

    fn draw_hud(&self, ctx: &EguiContext) {
        if !self.show_hud {
            return;
        }
        let camera = &self.camera;
        egui::Window::new("Camera")
            .default_pos([12.0, 12.0])
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(format!(
                    "Position: ({:.2}, {:.2}, {:.2})",
                    camera.position.x, camera.position.y, camera.position.z
                ));
                ui.label(format!("Yaw: {:.1}  Pitch: {:.1}", camera.yaw(), camera.pitch()));
                ui.label(format!("Zoom: {:.1}", camera.zoom()));
                ui.label(format!("Frame: {:.2} ms", self.frame_time * 1000.0));
                ui.label(format!("Lamp orbit: {}", if self.lamp_orbiting { "on" } else { "off" }));
                ui.separator();
                ui.small("F1: Toggle HUD | WASD/QE: Move | Mouse: Look | Esc: Quit");
            });
    }
}

/// Everything that exists once the window and GPU are up.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
    grab: CursorGrabMode,
    // Accumulated raw motion while the cursor is locked.
    locked_cursor: Vec2,
}

impl Gpu {
    fn new(event_loop: &ActiveEventLoop, viewer: &ViewerConfig, egui_ctx: &EguiContext) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(viewer.window.title.clone())
            .with_inner_size(PhysicalSize::new(viewer.window.width, viewer.window.height))
            .with_resizable(true);
        let window = Arc::new(event_loop.create_window(attrs).context("failed to create window")?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no compatible GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("roomview_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("failed to create device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("surface reports no formats")?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        tracing::info!("GPU initialized with {} backend", adapter.get_info().backend.to_str());

        let renderer = WgpuRenderer::new(&device, &queue, surface_format, config.width, config.height, viewer)?;

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        let grab = capture_cursor(&window);

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
            grab,
            locked_cursor: Vec2::ZERO,
        })
    }

    fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.config.width = size.width.max(1);
        self.config.height = size.height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer.resize(&self.device, self.config.width, self.config.height);
    }

    fn draw_overlay(&mut self, egui_ctx: &EguiContext, ctx: &AppContext, view: &wgpu::TextureView) {
        let raw_input = self.egui_winit.take_egui_input(&self.window);
        let full_output = egui_ctx.run(raw_input, |ui_ctx| ctx.draw_hud(ui_ctx));
        self.egui_winit
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let mut encoder = self.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("egui_encoder"),
        });
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.egui_renderer.render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
    }
}

/// Hide the cursor and keep it inside the window. Confined keeps absolute
/// cursor events flowing; Locked is the fallback where confinement is not
/// supported.
fn capture_cursor(window: &Window) -> CursorGrabMode {
    window.set_cursor_visible(false);
    for mode in [CursorGrabMode::Confined, CursorGrabMode::Locked] {
        match window.set_cursor_grab(mode) {
            Ok(()) => {
                tracing::debug!(?mode, "cursor captured");
                return mode;
            }
            Err(e) => tracing::debug!(?mode, "cursor grab unavailable: {e}"),
        }
    }
    CursorGrabMode::None
}

struct ViewerApp {
    viewer: ViewerConfig,
    ctx: AppContext,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
    failure: Option<anyhow::Error>,
}

impl ViewerApp {
    fn new(viewer: ViewerConfig) -> Self {
        Self {
            ctx: AppContext::new(&viewer),
            viewer,
            gpu: None,
            egui_ctx: EguiContext::default(),
            failure: None,
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = (now - self.ctx.last_frame).as_secs_f32();
        self.ctx.last_frame = now;
        self.ctx.update(dt);

        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let frame = plan_frame(&self.ctx.camera, gpu.aspect(), dt, &self.ctx.scene);
        gpu.renderer.render(&gpu.device, &gpu.queue, &view, &frame);
        gpu.draw_overlay(&self.egui_ctx, &self.ctx, &view);

        output.present();
        gpu.window.request_redraw();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() || self.failure.is_some() {
            return;
        }
        match Gpu::new(event_loop, &self.viewer, &self.egui_ctx) {
            Ok(gpu) => {
                self.ctx.last_frame = Instant::now();
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("startup failed: {e:#}");
                self.failure = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let Some(gpu) = &mut self.gpu {
            // The overlay is read-only; it never consumes input.
            let _ = gpu.egui_winit.on_window_event(&gpu.window, &event);
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => {
                if let Some(action) = self.ctx.input.handle_key(key, state == ElementState::Pressed) {
                    if self.ctx.apply(action) {
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let locked = self.gpu.as_ref().is_some_and(|g| g.grab == CursorGrabMode::Locked);
                if !locked {
                    self.ctx.look(Vec2::new(position.x as f32, position.y as f32));
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.ctx.camera.process_mouse_scroll(scroll_lines(delta));
            }
            WindowEvent::MouseInput { state, button, .. } => {
                tracing::debug!(?button, ?state, "mouse button");
            }
            WindowEvent::Focused(focused) => {
                if focused {
                    self.ctx.mouse.reset();
                } else {
                    self.ctx.input.clear();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        let DeviceEvent::MouseMotion { delta } = event else {
            return;
        };
        let Some(gpu) = &mut self.gpu else {
            return;
        };
        if gpu.grab == CursorGrabMode::Locked {
            gpu.locked_cursor += Vec2::new(delta.0 as f32, delta.1 as f32);
            let position = gpu.locked_cursor;
            self.ctx.look(position);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = self.gpu.take() {
            gpu.renderer.destroy();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut viewer = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };
    if let Some(dir) = cli.assets {
        viewer.asset_dir = dir;
    }
    viewer.validate()?;

    tracing::info!(assets = %viewer.asset_dir.display(), "roomview starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(viewer);
    event_loop.run_app(&mut app)?;

    match app.failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
