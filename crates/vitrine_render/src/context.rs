//! WGPU render context
//!
//! Owns the surface, device, and queue. Construction is fallible by design:
//! a machine with no compatible adapter gets a warning and a window without
//! decoration, never a crash.

use std::sync::Arc;

use winit::window::Window;

/// Why the render context could not be created
#[derive(Debug)]
pub enum RenderInitError {
    Surface(wgpu::CreateSurfaceError),
    AdapterUnavailable,
    Device(wgpu::RequestDeviceError),
}

impl std::fmt::Display for RenderInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderInitError::Surface(e) => write!(f, "failed to create surface: {}", e),
            RenderInitError::AdapterUnavailable => write!(f, "no compatible GPU adapter found"),
            RenderInitError::Device(e) => write!(f, "failed to acquire device: {}", e),
        }
    }
}

impl std::error::Error for RenderInitError {}

impl From<wgpu::CreateSurfaceError> for RenderInitError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RenderInitError::Surface(e)
    }
}

impl From<wgpu::RequestDeviceError> for RenderInitError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RenderInitError::Device(e)
    }
}

/// WGPU surface, device, and queue for one window
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
}

impl RenderContext {
    /// Create a context for the given window
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, RenderInitError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderInitError::AdapterUnavailable)?;

        log::info!("Using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Vitrine Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Resync the surface to a new window size
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Surface aspect ratio (width / height)
    pub fn aspect_ratio(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }
}
