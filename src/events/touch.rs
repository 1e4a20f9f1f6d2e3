use crate::dom;
use scroll_core::ScrollController;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_touch_handlers(window: &web::Window, controller: Rc<RefCell<ScrollController>>) {
    wire_touchstart(window, controller.clone());
    wire_touchmove(window, controller.clone());
    wire_touchend(window, controller);
}

/// clientY of the first active touch, if any.
#[inline]
fn first_touch_y(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_y() as f64)
}

fn wire_touchstart(window: &web::Window, controller: Rc<RefCell<ScrollController>>) {
    dom::add_passive_listener(window, "touchstart", move |ev: web::TouchEvent| {
        if let Some(y) = first_touch_y(&ev) {
            controller.borrow_mut().on_touch_start(y);
        }
    });
}

fn wire_touchmove(window: &web::Window, controller: Rc<RefCell<ScrollController>>) {
    dom::add_passive_listener(window, "touchmove", move |ev: web::TouchEvent| {
        if let Some(y) = first_touch_y(&ev) {
            controller.borrow_mut().on_touch_move(y);
        }
    });
}

// touchcancel ends the drag the same way, without a flick of its own
fn wire_touchend(window: &web::Window, controller: Rc<RefCell<ScrollController>>) {
    for name in ["touchend", "touchcancel"] {
        let controller = controller.clone();
        dom::add_passive_listener(window, name, move |_ev: web::TouchEvent| {
            if let Some(event) = controller.borrow_mut().on_touch_end() {
                log::debug!("[touch] release -> {:?}", event);
            }
        });
    }
}
