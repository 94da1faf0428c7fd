use crate::constants::{ICON_URLS, MAX_FRAME_DT_SEC};
use crate::core::{AnimationDirector, SceneConfig};
use crate::dom;
use crate::render;
use instant::Instant;
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the animation frame callback touches.
pub struct FrameContext {
    pub director: AnimationDirector,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub rng: StdRng,
    pub last_instant: Instant,
    // Icon pixels decoded before the GPU was ready
    pending_icons: Vec<(usize, Vec<u8>, u32)>,
}

impl FrameContext {
    pub fn new(director: AnimationDirector, canvas: web::HtmlCanvasElement, rng: StdRng) -> Self {
        Self {
            director,
            gpu: None,
            canvas,
            rng,
            last_instant: Instant::now(),
            pending_icons: Vec::new(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.director.advance(dt_sec);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&self.director) {
                log::error!("render error: {:?}", e);
            }
        }
    }

    /// Rebuild the grid for the current window and start the reveal.
    pub fn init_scene(&mut self) {
        let (w, h) = dom::window_inner_size().unwrap_or((0.0, 0.0));
        self.director.init_scene(w as f32, h as f32, &mut self.rng);
    }

    pub fn resize(&mut self) {
        if let Some((w, h)) = dom::window_inner_size() {
            self.director.resize(w as f32, h as f32);
        }
    }

    pub fn attach_gpu(&mut self, mut gpu: render::GpuState) {
        for (index, rgba, size) in self.pending_icons.drain(..) {
            gpu.upload_icon(index, &rgba, size);
        }
        self.gpu = Some(gpu);
    }

    /// Texture for icon `index` is decoded; upload it and launch its flight.
    pub fn icon_loaded(&mut self, index: usize, rgba: Vec<u8>, size: u32) {
        match &mut self.gpu {
            Some(g) => g.upload_icon(index, &rgba, size),
            None => self.pending_icons.push((index, rgba, size)),
        }
        self.director
            .spawn_icon(index, ICON_URLS.len(), &mut self.rng);
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &SceneConfig,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, scene, ICON_URLS.len()).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
