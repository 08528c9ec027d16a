//! Standalone showcase window backed by winit.
//!
//! The viewer plays the flip-book background through a softbuffer surface
//! and drives the showcase engine from window input: arrow keys step the
//! carousel, cursor motion feeds the parallax tracker. Actual 3D model
//! drawing is the embedding renderer's job — the viewer has none, so it
//! logs active-item changes and exposes the same
//! [`SceneFrame`](crate::engine::SceneFrame) (via [`ShowcaseEngine`]) a
//! real renderer would consume. Click and hover hit-testing likewise live
//! with the renderer's picking, not here.
//!
//! ```no_run
//! # use crema::Viewer;
//! Viewer::builder()
//!     .with_title("CoffeeOn")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::num::NonZeroU32;
use std::sync::Arc;

use web_time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use crate::engine::{ShowcaseEngine, ShowcaseItem};
use crate::error::CremaError;
use crate::frames::{
    DrawSurface, FitRect, FrameImage, FrameLoader, FramePlayer, FrameSource,
    FrameStore,
};
use crate::input::{InputEvent, InputProcessor};
use crate::intro::{IntroPhase, IntroSequence};
use crate::options::Options;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    items: Vec<ShowcaseItem>,
    captions: Vec<String>,
    title: String,
}

fn default_items() -> Vec<ShowcaseItem> {
    (1..=3)
        .map(|id| ShowcaseItem {
            id,
            asset: format!("assets/models/machine-{id}.glb"),
        })
        .collect()
}

fn default_captions() -> Vec<String> {
    vec![
        String::from("CoffeeOn doesn't vend."),
        String::from("It's your smart barista"),
    ]
}

impl ViewerBuilder {
    /// A builder with sensible defaults (title "Crema", demo items, the
    /// brand intro captions, default options).
    fn new() -> Self {
        Self {
            options: None,
            items: default_items(),
            captions: default_captions(),
            title: String::from("Crema"),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the showcased items.
    #[must_use]
    pub fn with_items(mut self, items: Vec<ShowcaseItem>) -> Self {
        self.items = items;
        self
    }

    /// Set the intro captions. An empty list skips the intro entirely.
    #[must_use]
    pub fn with_captions(mut self, captions: Vec<String>) -> Self {
        self.captions = captions;
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            items: self.items,
            captions: self.captions,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that runs the showcase.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Option<Options>,
    items: Vec<ShowcaseItem>,
    captions: Vec<String>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run until closed.
    pub fn run(self) -> Result<(), CremaError> {
        let event_loop = EventLoop::new()
            .map_err(|e| CremaError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);
        let mut app = ViewerApp::new(
            self.options.unwrap_or_default(),
            self.items,
            self.captions,
            self.title,
        );
        event_loop
            .run_app(&mut app)
            .map_err(|e| CremaError::Viewer(e.to_string()))
    }
}

// ── Software surface ─────────────────────────────────────────────────────

/// Softbuffer-backed [`DrawSurface`]: frames are composited into a
/// staging buffer of `0RGB` pixels and presented once per redraw.
struct SoftSurface {
    _context: softbuffer::Context<Arc<Window>>,
    surface: softbuffer::Surface<Arc<Window>, Arc<Window>>,
    pixels: Vec<u32>,
    width: u32,
    height: u32,
}

impl SoftSurface {
    fn new(window: Arc<Window>) -> Result<Self, CremaError> {
        let context = softbuffer::Context::new(Arc::clone(&window))
            .map_err(|e| CremaError::Viewer(e.to_string()))?;
        let surface = softbuffer::Surface::new(&context, window)
            .map_err(|e| CremaError::Viewer(e.to_string()))?;
        Ok(Self {
            _context: context,
            surface,
            pixels: Vec::new(),
            width: 0,
            height: 0,
        })
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.width = size.width;
        self.height = size.height;
        self.pixels
            .resize(size.width as usize * size.height as usize, 0);
        self.pixels.fill(0);
        if let (Some(w), Some(h)) =
            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        {
            if let Err(e) = self.surface.resize(w, h) {
                log::error!("surface resize failed: {e}");
            }
        }
    }

    fn present(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        match self.surface.buffer_mut() {
            Ok(mut buffer) => {
                if buffer.len() == self.pixels.len() {
                    buffer.copy_from_slice(&self.pixels);
                }
                if let Err(e) = buffer.present() {
                    log::error!("present failed: {e}");
                }
            }
            Err(e) => log::error!("surface buffer unavailable: {e}"),
        }
    }
}

impl DrawSurface for SoftSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn draw_image(&mut self, image: &FrameImage, rect: FitRect) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let (iw, ih) = image.size();
        if iw == 0 || ih == 0 {
            return;
        }
        let pixels = image.pixels();
        let x0 = rect.x.max(0.0) as u32;
        let y0 = rect.y.max(0.0) as u32;
        let x1 = (rect.x + rect.width).min(self.width as f32) as u32;
        let y1 = (rect.y + rect.height).min(self.height as f32) as u32;

        // Nearest-neighbour sampling, composited over the black backdrop.
        for dy in y0..y1 {
            let v = (dy as f32 - rect.y) / rect.height;
            let sy = ((v * ih as f32) as u32).min(ih - 1);
            let src_row = sy as usize * iw as usize * 4;
            let dst_row = dy as usize * self.width as usize;
            for dx in x0..x1 {
                let u = (dx as f32 - rect.x) / rect.width;
                let sx = ((u * iw as f32) as u32).min(iw - 1);
                let src = src_row + sx as usize * 4;
                let a = u32::from(pixels[src + 3]);
                let r = u32::from(pixels[src]) * a / 255;
                let g = u32::from(pixels[src + 1]) * a / 255;
                let b = u32::from(pixels[src + 2]) * a / 255;
                self.pixels[dst_row + dx as usize] = (r << 16) | (g << 8) | b;
            }
        }
    }
}

// ── App ──────────────────────────────────────────────────────────────────

struct ViewerApp {
    title: String,
    options: Options,
    items: Vec<ShowcaseItem>,
    captions: Vec<String>,
    window: Option<Arc<Window>>,
    surface: Option<SoftSurface>,
    engine: Option<ShowcaseEngine>,
    intro: Option<IntroSequence>,
    last_caption: Option<usize>,
    store: FrameStore,
    loader: Option<FrameLoader>,
    player: FramePlayer,
    input: InputProcessor,
    last_active: usize,
}

impl ViewerApp {
    fn new(
        options: Options,
        items: Vec<ShowcaseItem>,
        captions: Vec<String>,
        title: String,
    ) -> Self {
        let store = FrameStore::new(options.playback.frame_count);
        let player = FramePlayer::from_options(&options.playback);
        Self {
            title,
            options,
            items,
            captions,
            window: None,
            surface: None,
            engine: None,
            intro: None,
            last_caption: None,
            store,
            loader: None,
            player,
            input: InputProcessor::new(),
            last_active: 0,
        }
    }

    /// Create the engine once the intro has released the showcase.
    fn start_showcase(&mut self, now: Instant) {
        if self.engine.is_some() {
            return;
        }
        let mut engine =
            ShowcaseEngine::new(self.items.clone(), &self.options, now);
        if let Some(window) = &self.window {
            let size = window.inner_size();
            engine.set_viewport(size.width as f32, size.height as f32);
        }
        self.last_active = engine.active_index();
        self.engine = Some(engine);
        self.intro = None;
        log::info!("showcase started with {} items", self.items.len());
    }

    fn forward(&mut self, event: &InputEvent) {
        if let (Some(cmd), Some(engine)) =
            (self.input.handle_event(event), &mut self.engine)
        {
            engine.execute(cmd, Instant::now());
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(1280.0, 720.0));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("window creation failed: {e}");
                event_loop.exit();
                return;
            }
        };

        match SoftSurface::new(Arc::clone(&window)) {
            Ok(mut surface) => {
                surface.resize(window.inner_size());
                self.surface = Some(surface);
            }
            Err(e) => {
                log::error!("software surface unavailable: {e}");
                event_loop.exit();
                return;
            }
        }

        let source = FrameSource::from_options(&self.options.playback);
        match FrameLoader::spawn(source) {
            Ok(loader) => self.loader = Some(loader),
            Err(e) => {
                log::warn!(
                    "frame loader unavailable: {e}; background stays empty"
                );
            }
        }

        let now = Instant::now();
        if self.captions.is_empty() {
            self.window = Some(Arc::clone(&window));
            self.start_showcase(now);
        } else {
            self.intro =
                Some(IntroSequence::new(self.captions.clone(), now));
            self.window = Some(Arc::clone(&window));
        }
        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                if let Some(loader) = &mut self.loader {
                    loader.stop();
                }
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(surface) = &mut self.surface {
                    surface.resize(size);
                }
                if let Some(engine) = &mut self.engine {
                    engine
                        .set_viewport(size.width as f32, size.height as f32);
                }
            }

            WindowEvent::RedrawRequested => {
                let now = Instant::now();

                if let Some(loader) = &mut self.loader {
                    let _ = loader.poll(&mut self.store);
                }

                // Hold the showcase behind the intro captions.
                if self.engine.is_none() {
                    let phase = self
                        .intro
                        .as_ref()
                        .map_or(IntroPhase::Done, |intro| intro.phase(now));
                    match phase {
                        IntroPhase::Caption(index) => {
                            if self.last_caption != Some(index) {
                                if let Some(text) = self
                                    .intro
                                    .as_ref()
                                    .and_then(|i| i.captions().get(index))
                                {
                                    log::info!("{text}");
                                }
                                self.last_caption = Some(index);
                            }
                        }
                        IntroPhase::FadingOut => {}
                        IntroPhase::Done => self.start_showcase(now),
                    }
                }

                if let Some(surface) = &mut self.surface {
                    let _ = self.player.tick(now, &self.store, surface);
                }

                if let Some(engine) = &mut self.engine {
                    let _ = engine.update(now);
                    let active = engine.active_index();
                    if active != self.last_active {
                        let id = engine
                            .items()
                            .get(active)
                            .map_or(0, |item| item.id);
                        log::info!("active item -> {active} (id {id})");
                        self.last_active = active;
                    }
                }

                if let Some(surface) = &mut self.surface {
                    surface.present();
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.forward(&InputEvent::CursorMoved {
                    x: position.x as f32,
                    y: position.y as f32,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                let key = format!("{code:?}");
                self.forward(&InputEvent::KeyPressed(key));
            }

            _ => (),
        }
    }
}
