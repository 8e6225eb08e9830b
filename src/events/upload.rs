use crate::app::{schedule_filter, App};
use crate::constants::UPLOAD_INPUT_SELECTOR;
use pillow_core::UploadedAsset;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

async fn read_file_bytes(file: &web::File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("failed to read file: {:?}", e))?;
    let array = js_sys::Uint8Array::new(&buffer);
    Ok(array.to_vec())
}

/// Every file input on the page feeds the same session.
pub fn wire_upload_inputs(document: &web::Document, app: &Rc<RefCell<App>>) -> anyhow::Result<()> {
    let inputs = document
        .query_selector_all(UPLOAD_INPUT_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let mut wired = 0;
    for i in 0..inputs.length() {
        if let Some(input) = inputs
            .get(i)
            .and_then(|n| n.dyn_into::<web::HtmlInputElement>().ok())
        {
            wire_input(input, app.clone());
            wired += 1;
        }
    }
    log::info!("[upload] wired {} file inputs", wired);
    Ok(())
}

fn wire_input(input: web::HtmlInputElement, app: Rc<RefCell<App>>) {
    let target = input.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let file = target.files().and_then(|list| list.get(0));
        // Clear so picking the same file again still fires `change`.
        target.set_value("");
        let Some(file) = file else {
            return;
        };
        // Taken now, not when the read resolves: the last file picked wins.
        let pick = app.borrow_mut().on_pick();
        let app = app.clone();
        spawn_local(async move {
            match read_file_bytes(&file).await {
                Ok(bytes) => {
                    let asset = UploadedAsset::new(file.name(), file.type_(), bytes);
                    let request = app.borrow_mut().on_upload(pick, Some(asset));
                    if let Some(request) = request {
                        schedule_filter(&app, request);
                    }
                }
                Err(e) => app.borrow_mut().on_read_error(pick, &e),
            }
        });
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
    closure.forget();
}
