use crate::constants::{PAUSED_BODY_CLASS, PROGRESS_DETAIL_KEY};
use crate::dom;
use scroll_core::{PauseSignal, PauseState};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Mirror a pause edge onto the page: toggle the body class the background
/// animation keys off and dispatch `hero:pause` / `hero:resume` on the
/// document.
pub fn publish(document: &web::Document, signal: PauseSignal, progress: f64) {
    dom::set_body_class(document, PAUSED_BODY_CLASS, signal == PauseSignal::Pause);

    let detail = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &detail,
        &JsValue::from_str(PROGRESS_DETAIL_KEY),
        &JsValue::from_f64(progress),
    );
    let init = web::CustomEventInit::new();
    init.set_detail(&detail);
    match web::CustomEvent::new_with_event_init_dict(signal.event_name(), &init) {
        Ok(ev) => {
            let _ = document.dispatch_event(&ev);
        }
        Err(e) => log::warn!("[pause] could not create {}: {:?}", signal.event_name(), e),
    }
}

/// Initial class state, set once before the first edge is published.
pub fn apply_state(document: &web::Document, state: PauseState) {
    dom::set_body_class(document, PAUSED_BODY_CLASS, state == PauseState::Paused);
}
