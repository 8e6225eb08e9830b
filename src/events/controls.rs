use crate::app::{schedule_filter, App};
use crate::constants::{RESET_BUTTON_ID, SUBMIT_BUTTON_ID};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_controls(document: &web::Document, app: &Rc<RefCell<App>>) {
    if let Some(el) = document.get_element_by_id(RESET_BUTTON_ID) {
        let app_r = app.clone();
        dom::add_click_listener(&el, move || {
            log::info!("[controls] reset rotation");
            app_r.borrow_mut().reset_rotation();
        });
    }

    if let Some(el) = document.get_element_by_id(SUBMIT_BUTTON_ID) {
        let app_s = app.clone();
        dom::add_click_listener(&el, move || app_s.borrow().submit());
    }

    let buttons: Vec<(&'static str, web::HtmlElement)> = app.borrow().ui().tier_buttons.clone();
    for (label, button) in buttons {
        let app_t = app.clone();
        dom::add_click_listener(&button, move || {
            let request = app_t.borrow_mut().on_tier(label);
            if let Some(request) = request {
                log::info!("[size] {} selected, re-running filter {}", label, request.generation);
                schedule_filter(&app_t, request);
            }
        });
    }

    wire_pagehide(app);
}

// Leaving the page stops the clock and drops the upload.
fn wire_pagehide(app: &Rc<RefCell<App>>) {
    let app_p = app.clone();
    let closure = Closure::wrap(Box::new(move || {
        app_p.borrow_mut().teardown();
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
