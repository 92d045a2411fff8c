use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::error::OsError;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window, WindowAttributes, WindowId};

use crate::device::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
use crate::input::platform::winit::Translator;
use crate::window::WindowConfig;

use super::{Backend, PlatformEvent, Size};

/// Collects winit callbacks for the owner to drain.
///
/// Each backend has its own collector, so no global handler instance is needed
/// to route native callbacks back to a window.
struct Collector {
    attributes: Option<WindowAttributes>,
    window: Option<Window>,
    error: Option<OsError>,
    events: Vec<WindowEvent>,
}

impl ApplicationHandler for Collector {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let Some(attributes) = self.attributes.take() else {
            return;
        };

        match event_loop.create_window(attributes) {
            Ok(window) => self.window = Some(window),
            Err(e) => self.error = Some(e),
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.events.push(event);
    }
}

#[self_referencing]
struct NativeSurface {
    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

/// Backend driving a winit window and a wgpu surface.
///
/// The event loop is pumped once per frame instead of owning the thread, so
/// the window loop keeps control of iteration order.
pub struct WinitBackend {
    // Field order is drop order: frame, then surface + window, then the loop.
    frame: Option<GpuFrame>,
    surface: NativeSurface,
    collector: Collector,
    translator: Translator,
    event_loop: EventLoop<()>,
    epoch: Instant,
    clear_color: wgpu::Color,
}

impl WinitBackend {
    /// Opens the window and creates the graphics context described by `config`.
    pub fn new(config: &WindowConfig) -> Result<Self> {
        let mut event_loop = EventLoop::new().context("failed to create winit EventLoop")?;

        let attributes = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64))
            .with_fullscreen(config.fullscreen.then_some(Fullscreen::Borderless(None)));

        let mut collector = Collector {
            attributes: Some(attributes),
            window: None,
            error: None,
            events: Vec::new(),
        };

        let window = loop {
            let status = event_loop.pump_app_events(Some(Duration::ZERO), &mut collector);

            if let Some(e) = collector.error.take() {
                anyhow::bail!("failed to create window: {e}");
            }
            if let Some(window) = collector.window.take() {
                break window;
            }
            if let PumpStatus::Exit(code) = status {
                anyhow::bail!("event loop exited with code {code} before the window was created");
            }
        };

        let init = GpuInit::from_config(config);
        let surface = NativeSurfaceTryBuilder {
            window,
            gpu_builder: |window| pollster::block_on(Gpu::new(window, init)),
        }
        .try_build()
        .context("failed to create graphics context")?;

        let size = surface.borrow_window().inner_size();
        log::info!(
            "created window \"{}\" ({}x{} px, {}x msaa)",
            config.title,
            size.width,
            size.height,
            surface.borrow_gpu().sample_count(),
        );

        Ok(Self {
            frame: None,
            surface,
            collector,
            translator: Translator::default(),
            event_loop,
            epoch: Instant::now(),
            clear_color: wgpu::Color::BLACK,
        })
    }

    pub fn gpu(&self) -> &Gpu<'_> {
        self.surface.borrow_gpu()
    }

    pub fn window(&self) -> &Window {
        self.surface.borrow_window()
    }

    /// Color used when a frame is presented without anything drawn into it.
    pub fn set_clear_color(&mut self, color: wgpu::Color) {
        self.clear_color = color;
    }

    /// Records into the current frame, acquiring it on first use.
    ///
    /// `draw` is skipped when no frame is available (minimized window, surface
    /// being reconfigured). A fatal surface error is returned.
    pub fn draw<F>(&mut self, draw: F) -> Result<()>
    where
        F: FnOnce(&Gpu<'_>, &mut GpuFrame) -> Result<()>,
    {
        if self.frame.is_none() {
            self.frame = self.acquire_frame()?;
        }

        let Some(frame) = self.frame.as_mut() else {
            return Ok(());
        };
        draw(self.surface.borrow_gpu(), frame)
    }

    fn acquire_frame(&mut self) -> Result<Option<GpuFrame>> {
        let size = self.surface.borrow_gpu().size();
        if size.width == 0 || size.height == 0 {
            return Ok(None);
        }

        let err = match self.surface.borrow_gpu().begin_frame() {
            Ok(frame) => return Ok(Some(frame)),
            Err(err) => err,
        };

        let reason = err.to_string();
        match self.surface.with_gpu_mut(|gpu| gpu.handle_surface_error(err)) {
            SurfaceErrorAction::Fatal => anyhow::bail!("surface is unusable: {reason}"),
            action => {
                log::debug!("skipping frame ({action:?}): {reason}");
                Ok(None)
            }
        }
    }
}

impl Backend for WinitBackend {
    fn poll_events(&mut self, out: &mut Vec<PlatformEvent>) -> Result<()> {
        let status = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.collector);

        let (collector, translator) = (&mut self.collector, &mut self.translator);
        self.surface.with_mut(|fields| {
            for event in collector.events.drain(..) {
                match &event {
                    WindowEvent::Resized(size) => fields.gpu.resize(*size),
                    WindowEvent::ScaleFactorChanged { .. } => {
                        fields.gpu.resize(fields.window.inner_size())
                    }
                    _ => {}
                }

                translator.translate(
                    &event,
                    fields.window.scale_factor(),
                    fields.window.inner_size(),
                    out,
                );
            }
        });

        if let PumpStatus::Exit(code) = status {
            log::warn!("winit event loop exited with code {code}");
            out.push(PlatformEvent::CloseRequested);
        }

        Ok(())
    }

    fn present(&mut self) -> Result<bool> {
        if self.frame.is_none() {
            self.frame = self.acquire_frame()?;
            if let Some(frame) = self.frame.as_mut() {
                frame.clear(self.clear_color);
            }
        }

        let Some(frame) = self.frame.take() else {
            return Ok(false);
        };

        self.surface.borrow_window().pre_present_notify();
        self.surface.borrow_gpu().submit(frame);
        Ok(true)
    }

    fn window_size(&self) -> Size {
        let window = self.surface.borrow_window();
        let logical = window.inner_size().to_logical::<u32>(window.scale_factor());
        Size::new(logical.width, logical.height)
    }

    fn framebuffer_size(&self) -> Size {
        let size = self.surface.borrow_window().inner_size();
        Size::new(size.width, size.height)
    }

    fn time(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.surface.borrow_window().set_cursor_visible(visible);
    }
}
