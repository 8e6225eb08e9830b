use crate::constants::PNG_MIME;
use crate::dom;
use crate::frame::AutoRotateTask;
use crate::view::Ui;
use glam::Vec2;
use instant::Instant;
use pillow_core::{
    ClockCommand, Completion, DesignSession, FilterOutput, FilterRequest, Generation,
    PreviewError, Transition, UploadedAsset,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen_futures::spawn_local;

/// Controller: owns the session and is the only writer of its state.
pub struct App {
    session: DesignSession,
    ui: Ui,
    clock: AutoRotateTask,
    object_url: Option<String>,
    self_ref: Weak<RefCell<App>>,
}

impl App {
    pub fn new(session: DesignSession, ui: Ui) -> Rc<RefCell<App>> {
        let app = Rc::new_cyclic(|self_ref| {
            RefCell::new(App {
                session,
                ui,
                clock: AutoRotateTask::default(),
                object_url: None,
                self_ref: self_ref.clone(),
            })
        });
        {
            let a = app.borrow();
            a.ui.render(&a.session);
        }
        app
    }

    pub fn ui(&self) -> &Ui {
        &self.ui
    }

    fn apply(&mut self, transition: Transition) {
        match transition.clock() {
            Some(ClockCommand::Start) => {
                let weak = self.self_ref.clone();
                self.clock.start(move || {
                    weak.upgrade()
                        .map(|app| app.borrow_mut().on_frame())
                        .unwrap_or(false)
                });
            }
            Some(ClockCommand::Stop) => self.clock.cancel(),
            None => {}
        }
        if transition.changed() {
            log::info!("[preview] {:?} -> {:?}", transition.from, transition.to);
        }
    }

    /// Pointer-driven updates only need a full render when the mode changed.
    fn apply_and_refresh(&mut self, transition: Transition) {
        self.apply(transition);
        if transition.changed() {
            self.ui.render(&self.session);
        } else {
            self.ui.apply_orientation(&self.session);
        }
    }

    /// One display refresh. Returns whether the loop should keep going.
    fn on_frame(&mut self) -> bool {
        if !self.session.tick() {
            return false;
        }
        self.ui.apply_orientation(&self.session);
        true
    }

    pub fn on_pick(&mut self) -> Generation {
        self.session.begin_pick()
    }

    pub fn on_upload(
        &mut self,
        pick: Generation,
        asset: Option<UploadedAsset>,
    ) -> Option<FilterRequest> {
        let (request, transition) = self.session.begin_upload(pick, asset)?;
        self.set_object_url(None);
        self.apply(transition);
        self.ui.render(&self.session);
        Some(request)
    }

    pub fn on_read_error(&mut self, pick: Generation, message: &str) {
        if !self.session.is_latest_pick(pick) {
            return;
        }
        log::error!("[upload] could not read file: {}", message);
        crate::overlay::show_error(&self.ui.document, message);
    }

    pub fn on_tier(&mut self, label: &str) -> Option<FilterRequest> {
        let request = self.session.select_tier(label);
        self.ui.render(&self.session);
        request
    }

    fn is_current(&self, generation: Generation) -> bool {
        self.session.generation() == generation
    }

    fn on_filter_done(&mut self, generation: Generation, result: Result<FilterOutput, PreviewError>) {
        let completion = self.session.complete(generation, result);
        match completion {
            Completion::Applied(transition) => {
                let png = self.session.filtered().map(|f| f.to_png());
                match png {
                    Some(Ok(png)) => match dom::create_object_url(&png, PNG_MIME) {
                        Ok(url) => self.set_object_url(Some(url)),
                        Err(e) => log::error!("[view] object url failed: {:?}", e),
                    },
                    Some(Err(e)) => log::error!("[view] {}", e),
                    None => {}
                }
                self.apply(transition);
                self.ui.render(&self.session);
            }
            Completion::Failed(transition) => {
                self.set_object_url(None);
                self.apply(transition);
                self.ui.render(&self.session);
            }
            Completion::Stale => {}
        }
    }

    fn set_object_url(&mut self, url: Option<String>) {
        if let Some(old) = self.object_url.take() {
            dom::revoke_object_url(&old);
        }
        self.ui.set_image_src(url.as_deref().unwrap_or(""));
        self.object_url = url;
    }

    pub fn pointer_down(&mut self, pos: Vec2) -> bool {
        let t = self.session.pointer_down(pos);
        self.apply_and_refresh(t);
        t.changed()
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        if self.session.preview().is_dragging() {
            let t = self.session.pointer_move(pos);
            self.apply_and_refresh(t);
        }
    }

    pub fn pointer_up(&mut self) {
        let t = self.session.pointer_up();
        self.apply_and_refresh(t);
    }

    pub fn reset_rotation(&mut self) {
        let t = self.session.reset_rotation();
        self.apply_and_refresh(t);
    }

    pub fn submit(&self) {
        _ = self.session.submit();
    }

    pub fn teardown(&mut self) {
        let t = self.session.clear();
        self.apply_and_refresh(t);
        self.set_object_url(None);
    }
}

/// Run the filter off the current task and hand the result back by generation.
pub fn schedule_filter(app: &Rc<RefCell<App>>, request: FilterRequest) {
    let app = app.clone();
    spawn_local(async move {
        dom::next_task().await;
        if !app.borrow().is_current(request.generation) {
            log::debug!("[filter] {} superseded before start", request.generation);
            return;
        }
        let started = Instant::now();
        let result = request.run();
        match &result {
            Ok(out) => log::info!(
                "[filter] {} {}x{} in {:?}, {} background px, {}",
                request.generation,
                out.image.width(),
                out.image.height(),
                started.elapsed(),
                out.stats.background,
                out.dimensions
            ),
            Err(e) => log::warn!("[filter] {} error: {}", request.generation, e),
        }
        app.borrow_mut().on_filter_done(request.generation, result);
    });
}
