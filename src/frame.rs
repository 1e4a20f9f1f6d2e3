use crate::constants::RENDER_WRITE_EPSILON;
use crate::dom::StageElements;
use instant::Instant;
use scroll_core::ScrollController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: Rc<RefCell<ScrollController>>,
    pub elements: StageElements,
    pub last_instant: Instant,
    pub last_render: Option<f64>,
}

impl FrameContext {
    /// Returns false once the controller has been disposed.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let output = {
            let mut controller = self.controller.borrow_mut();
            if controller.is_disposed() {
                return false;
            }
            controller.update(dt)
        };

        // style writes are skipped while the stage is at rest
        let changed = self
            .last_render
            .map_or(true, |prev| (prev - output.render).abs() > RENDER_WRITE_EPSILON);
        if changed {
            self.elements.apply(&output.projection);
            self.last_render = Some(output.render);
        }
        true
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx.borrow_mut().frame() {
            log::info!("[frame] loop stopped");
            return;
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
