//! DormDraw — place, rotate, drag, and delete furniture sprites over a
//! floor-plan background, then save the result as a PNG.
//!
//! The window opens at the canvas size; cursor positions are mapped through
//! the pixel surface in case the window manager resizes it anyway.

mod cli;
mod pointer;

use anyhow::Context;
use dd_editor::{DormCanvas, InputEvent, Response};
use image::RgbaImage;
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

struct App {
    canvas: DormCanvas,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    frame: RgbaImage,
    cursor: (f32, f32),
    /// Fatal error raised inside the event loop, reported after it exits.
    error: Option<anyhow::Error>,
}

impl App {
    fn new(canvas: DormCanvas) -> Self {
        let frame = canvas.new_frame();
        Self {
            canvas,
            window: None,
            pixels: None,
            frame,
            cursor: (0.0, 0.0),
            error: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let (width, height) = (self.canvas.config().width, self.canvas.config().height);
        let attrs = Window::default_attributes()
            .with_title("DormDraw")
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let size = window.inner_size();
        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels =
            Pixels::new(width, height, surface).context("failed to create pixel surface")?;

        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }

    /// Map a physical window position to canvas pixels, following any
    /// scaling `pixels` applies when the surface and buffer sizes differ.
    fn canvas_pos(&self, x: f64, y: f64) -> (f32, f32) {
        let (fx, fy) = pointer::floor_position(x, y);
        match &self.pixels {
            Some(pixels) => pointer::from_buffer_pos(pixels.window_pos_to_pixel((fx, fy))),
            None => (fx, fy),
        }
    }

    fn handle(&mut self, event: InputEvent) {
        match self.canvas.dispatch(&event) {
            Response::Ignored => {}
            Response::Redraw => self.request_redraw(),
            Response::Snapshot(path) => {
                if let Err(e) = self.canvas.save_snapshot(&path) {
                    log::error!("{:#}", anyhow::Error::new(e));
                }
            }
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let Some(pixels) = self.pixels.as_mut() else {
            return Ok(());
        };
        self.canvas.render_frame(&mut self.frame);
        pixels.frame_mut().copy_from_slice(self.frame.as_raw());
        pixels.render().context("failed to present frame")
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.error = Some(err);
        event_loop.exit();
    }
}

/// Key name as understood by `ShortcutMap`.
fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(s) => Some(s.to_string()),
        Key::Named(NamedKey::Backspace) => Some("Backspace".to_string()),
        _ => None,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            self.fail(event_loop, e);
            return;
        }
        self.request_redraw();
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(pixels) = &mut self.pixels
                    && let Err(e) = pixels.resize_surface(size.width, size.height)
                {
                    log::warn!("failed to resize surface: {e}");
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self.canvas_pos(position.x, position.y);
                let (x, y) = self.cursor;
                self.handle(InputEvent::from_pointer_move(x, y));
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.cursor;
                let event = match state {
                    ElementState::Pressed => InputEvent::from_pointer_down(x, y),
                    ElementState::Released => InputEvent::from_pointer_up(x, y),
                };
                self.handle(event);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                if let Some(key) = key_name(&event.logical_key) {
                    let (x, y) = self.cursor;
                    self.handle(InputEvent::key(key, x, y));
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e);
                }
            }

            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = cli::Options::parse(std::env::args().skip(1))?;
    if opts.help {
        println!("{}", cli::USAGE);
        return Ok(());
    }

    let config = opts.load_config()?;
    let canvas = DormCanvas::initialize(config).context("failed to load assets")?;

    let event_loop = EventLoop::new().context("failed to start event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(canvas);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
