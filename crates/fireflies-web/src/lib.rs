#![cfg(target_arch = "wasm32")]
use fireflies_core::{SceneConfig, SceneContext};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod dom;
mod events;
mod frame;
mod input;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fireflies-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::create_fullscreen_canvas(&document)?;

    let scene = Rc::new(RefCell::new(SceneContext::new(&SceneConfig::default())?));

    // Size the canvas before the surface is configured from it
    events::wire_canvas_resize(&canvas, scene.clone());
    events::wire_pointermove(&canvas, scene.clone());

    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
