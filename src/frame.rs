use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}

/// Handle for the auto-rotate loop driven by `requestAnimationFrame`.
///
/// At most one frame is pending at a time. `cancel` (or dropping the handle)
/// revokes it, so no further ticks reach the preview.
#[derive(Default)]
pub struct AutoRotateTask {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl AutoRotateTask {
    #[inline]
    pub fn is_running(&self) -> bool {
        self.raf_id.get().is_some()
    }

    /// Call `on_frame` once per display refresh until it returns `false`
    /// or the task is cancelled.
    pub fn start(&self, mut on_frame: impl FnMut() -> bool + 'static) {
        if self.is_running() {
            return;
        }
        let raf_id = self.raf_id.clone();
        let slot = Rc::downgrade(&self.tick);
        *self.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_id.set(None);
            if !on_frame() {
                return;
            }
            if let Some(slot) = slot.upgrade() {
                if let Some(cb) = slot.borrow().as_ref() {
                    raf_id.set(request_frame(cb));
                }
            }
        }) as Box<dyn FnMut()>));
        if let Some(cb) = self.tick.borrow().as_ref() {
            self.raf_id.set(request_frame(cb));
        }
        log::debug!("[clock] auto-rotate started");
    }

    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
            log::debug!("[clock] auto-rotate cancelled");
        }
    }
}

impl Drop for AutoRotateTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
