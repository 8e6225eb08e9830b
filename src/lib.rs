#![cfg(target_arch = "wasm32")]
use pillow_core::DesignSession;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pillow-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let ui = view::Ui::build(&document)?;
    let app = app::App::new(DesignSession::default(), ui);

    events::wire_upload_inputs(&document, &app)?;
    events::wire_pointer_handlers(&app);
    events::wire_controls(&document, &app);

    log::info!("[init] ready, waiting for an upload");
    Ok(())
}
