use crate::dom;
use scroll_core::ScrollController;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_page_handlers(
    window: &web::Window,
    document: &web::Document,
    controller: Rc<RefCell<ScrollController>>,
) {
    let doc = document.clone();
    let visibility = controller.clone();
    dom::add_passive_listener(document, "visibilitychange", move |_ev: web::Event| {
        let visible = dom::page_visible(&doc);
        visibility.borrow_mut().on_visibility_change(visible);
    });

    let resize = controller.clone();
    dom::add_passive_listener(window, "resize", move |_ev: web::Event| {
        resize.borrow_mut().on_resize(dom::viewport_width());
    });

    // A page kept in the back/forward cache may come back, so only a real
    // unload disposes. The frame loop stops rescheduling after that.
    dom::add_passive_listener(window, "pagehide", move |ev: web::PageTransitionEvent| {
        if !ev.persisted() {
            controller.borrow_mut().dispose();
        }
    });
}
