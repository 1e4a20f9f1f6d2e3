use crate::dom;
use crate::units;
use scroll_core::ScrollController;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_wheel_handler(window: &web::Window, controller: Rc<RefCell<ScrollController>>) {
    dom::add_passive_listener(window, "wheel", move |ev: web::WheelEvent| {
        let delta = units::wheel_delta_px(ev.delta_y(), ev.delta_mode());
        controller.borrow_mut().on_wheel(delta);
    });
}
