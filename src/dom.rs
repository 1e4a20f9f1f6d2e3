use crate::constants::*;
use crate::units;
use scroll_core::{Feel, LayerStyle, Projection};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::INFINITY)
}

pub fn touch_capable() -> bool {
    web::window()
        .map(|w| w.navigator().max_touch_points() > 0)
        .unwrap_or(false)
}

#[inline]
pub fn page_visible(document: &web::Document) -> bool {
    document.visibility_state() == web::VisibilityState::Visible
}

pub fn read_feel(document: &web::Document) -> Feel {
    let raw = document
        .body()
        .and_then(|b| b.get_attribute(FEEL_ATTRIBUTE))
        .unwrap_or_default();
    match raw.parse::<Feel>() {
        Ok(feel) => feel,
        Err(e) => {
            log::warn!("[config] {}; using standard feel", e);
            Feel::Standard
        }
    }
}

/// Passive listener whose closure lives for the rest of the page.
pub fn add_passive_listener<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event_name: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event_name,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("[dom] could not listen for {}: {:?}", event_name, e);
    }
    closure.forget();
}

pub fn set_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        let cl = body.class_list();
        let _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
    }
}

/// Handles the projector writes to. Missing handles only disable their own
/// mapping.
pub struct StageElements {
    hero: Option<web::HtmlElement>,
    work: Option<web::HtmlElement>,
    heading: Option<web::HtmlElement>,
    items: Vec<web::HtmlElement>,
}

impl StageElements {
    pub fn lookup(document: &web::Document) -> Self {
        let elements = Self {
            hero: query_html(document, HERO_SELECTOR),
            work: query_html(document, WORK_SELECTOR),
            heading: query_html(document, HEADING_SELECTOR),
            items: query_all_html(document, ITEM_SELECTOR),
        };
        for (name, found) in [
            (HERO_SELECTOR, elements.hero.is_some()),
            (WORK_SELECTOR, elements.work.is_some()),
            (HEADING_SELECTOR, elements.heading.is_some()),
        ] {
            if !found {
                log::warn!("[dom] missing {}; its mapping is disabled", name);
            }
        }
        elements
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn apply(&self, projection: &Projection) {
        if let Some(el) = &self.hero {
            set_layer(el, &projection.hero, HERO_UNIT);
        }
        if let Some(el) = &self.work {
            set_layer(el, &projection.work, WORK_UNIT);
        }
        if let Some(el) = &self.heading {
            set_layer(el, &projection.heading, REVEAL_UNIT);
        }
        for (el, style) in self.items.iter().zip(projection.items.iter()) {
            set_layer(el, style, REVEAL_UNIT);
        }
    }
}

fn set_layer(el: &web::HtmlElement, style: &LayerStyle, unit: &str) {
    let css = el.style();
    let _ = css.set_property("transform", &units::translate_y(style.translate_y, unit));
    let _ = css.set_property("opacity", &units::opacity(style.opacity));
}

fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn query_all_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}
