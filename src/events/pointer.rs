use crate::app::App;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(app: &Rc<RefCell<App>>) {
    wire_pointerdown(app);
    wire_pointermove(app);
    wire_pointerup(app);
}

fn wire_pointerdown(app: &Rc<RefCell<App>>) {
    let app_m = app.clone();
    let surface = app.borrow().ui().surface.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !input::is_primary_button(&ev) {
            return;
        }
        let pos = input::pointer_client_pos(&ev);
        let started = app_m.borrow_mut().pointer_down(pos);
        if started {
            log::info!("[pointer] begin drag at ({:.0},{:.0})", pos.x, pos.y);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = surface.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

// Move/up are tracked on the window so a drag keeps going outside the surface.
fn wire_pointermove(app: &Rc<RefCell<App>>) {
    let app_m = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_client_pos(&ev);
        app_m.borrow_mut().pointer_move(pos);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(app: &Rc<RefCell<App>>) {
    let app_m = app.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        app_m.borrow_mut().pointer_up();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        for name in ["pointerup", "pointercancel"] {
            _ = wnd.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
    closure.forget();
}
