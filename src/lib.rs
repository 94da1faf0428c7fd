#![cfg(target_arch = "wasm32")]
use crate::core::{AnimationDirector, SceneConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
pub mod events;
mod frame;
mod icons;
mod render;

fn wire_resize(ctx: &Rc<RefCell<frame::FrameContext>>, canvas: &web::HtmlCanvasElement) {
    let ctx = ctx.clone();
    let canvas = canvas.clone();
    dom::add_window_listener("resize", move |_| {
        dom::fit_canvas_to_window(&canvas);
        ctx.borrow_mut().resize();
    });
}

fn start_scene(ctx: &Rc<RefCell<frame::FrameContext>>) {
    ctx.borrow_mut().init_scene();
    icons::request_all(ctx);
}

// The module may finish loading after the window `load` event already fired.
fn wire_scene_start(document: &web::Document, ctx: &Rc<RefCell<frame::FrameContext>>) {
    if document.ready_state() == "complete" {
        start_scene(ctx);
        return;
    }
    let ctx = ctx.clone();
    dom::add_window_listener("load", move |_| start_scene(&ctx));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-reveal starting");

    match dom::require_document() {
        Ok(document) => {
            let bound = events::wire_all(&document);
            log::info!("[events] {} handler units bound", bound);
        }
        Err(e) => log::error!("[events] {}", e),
    }

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::require_document()?;
    let canvas: web::HtmlCanvasElement = dom::require_by_id(&document, constants::CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    dom::fit_canvas_to_window(&canvas);
    let (w, h) = dom::window_inner_size().unwrap_or((0.0, 0.0));
    let scene = SceneConfig::default();
    let director = AnimationDirector::new(scene.clone(), w as f32, h as f32);
    let ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        director,
        canvas.clone(),
        StdRng::from_entropy(),
    )));

    wire_resize(&ctx, &canvas);
    wire_scene_start(&document, &ctx);
    frame::start_loop(ctx.clone());

    // The director runs without a renderer until (and unless) WebGPU is up.
    if let Some(gpu) = frame::init_gpu(&canvas, &scene).await {
        ctx.borrow_mut().attach_gpu(gpu);
    }
    Ok(())
}
