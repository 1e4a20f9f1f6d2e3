#![cfg(target_arch = "wasm32")]
use instant::Instant;
use scroll_core::{DeviceProfile, PauseSignal, ScrollController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod broadcast;
mod constants;
mod dom;
mod events;
mod frame;
mod units;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let profile = DeviceProfile::detect(dom::viewport_width(), dom::touch_capable());
    let feel = dom::read_feel(&document);
    let elements = dom::StageElements::lookup(&document);
    log::info!(
        "[init] class={:?} feel={:?} items={}",
        profile.class(),
        feel,
        elements.item_count()
    );

    let mut controller = ScrollController::init(profile, feel, elements.item_count())?;
    broadcast::apply_state(&document, controller.pause_state());
    let doc_for_sink = document.clone();
    controller.subscribe(move |signal: PauseSignal, progress: f64| {
        broadcast::publish(&doc_for_sink, signal, progress)
    });
    if !dom::page_visible(&document) {
        controller.on_visibility_change(false);
    }
    let controller = Rc::new(RefCell::new(controller));

    events::wire_wheel_handler(&window, controller.clone());
    events::wire_touch_handlers(&window, controller.clone());
    events::wire_page_handlers(&window, &document, controller.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        controller,
        elements,
        last_instant: Instant::now(),
        last_render: None,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
