use crate::constants::{ICON_TEXTURE_PX, ICON_URLS};
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Draw `img` scaled onto a `size × size` scratch canvas and read back RGBA8.
fn rasterize(img: &web::HtmlImageElement, size: u32) -> anyhow::Result<Vec<u8>> {
    let document = crate::dom::require_document()?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("scratch element is not a canvas"))?;
    canvas.set_width(size);
    canvas.set_height(size);
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("2d context has unexpected type"))?;
    let s = size as f64;
    ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, s, s)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let data = ctx
        .get_image_data(0.0, 0.0, s, s)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(data.data().0)
}

fn request(ctx: &Rc<RefCell<FrameContext>>, index: usize, url: &'static str) -> anyhow::Result<()> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));

    let ctx = ctx.clone();
    let loaded = img.clone();
    let onload = Closure::once_into_js(move || match rasterize(&loaded, ICON_TEXTURE_PX) {
        Ok(rgba) => {
            log::info!("[icons] loaded {}", url);
            ctx.borrow_mut().icon_loaded(index, rgba, ICON_TEXTURE_PX);
        }
        Err(e) => log::warn!("[icons] {} unusable: {:#}", url, e),
    });
    let onerror = Closure::once_into_js(move || {
        log::warn!("[icons] failed to load {}", url);
    });
    img.set_onload(Some(onload.unchecked_ref()));
    img.set_onerror(Some(onerror.unchecked_ref()));
    img.set_src(url);
    Ok(())
}

/// Start loading every icon; each one animates as soon as it arrives.
pub fn request_all(ctx: &Rc<RefCell<FrameContext>>) {
    for (index, url) in ICON_URLS.iter().copied().enumerate() {
        if let Err(e) = request(ctx, index, url) {
            log::warn!("[icons] {} not requested: {:#}", url, e);
        }
    }
}
