//! Render projection: a pure mapping from the clamped progress value to the
//! transform and opacity of each visual layer.

use crate::constants::*;
use crate::physics::clamp_unit;
use smallvec::SmallVec;

/// Vertical offset plus opacity. The unit of `translate_y` depends on the
/// layer: `vh` for the hero, `%` for the work container, `px` otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStyle {
    pub translate_y: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub render: f64,
    pub hero: LayerStyle,
    pub work: LayerStyle,
    pub heading: LayerStyle,
    pub items: SmallVec<[LayerStyle; 8]>,
}

pub fn project(render: f64, item_count: usize) -> Projection {
    let render = clamp_unit(render);
    Projection {
        render,
        hero: hero_style(render),
        work: work_style(render),
        heading: heading_style(render),
        items: (0..item_count).map(|i| item_style(render, i)).collect(),
    }
}

#[inline]
pub fn hero_style(render: f64) -> LayerStyle {
    let render = clamp_unit(render);
    LayerStyle {
        translate_y: -render * HERO_TRAVEL_VH,
        opacity: 1.0 - render,
    }
}

#[inline]
pub fn work_style(render: f64) -> LayerStyle {
    let render = clamp_unit(render);
    LayerStyle {
        translate_y: (1.0 - render) * WORK_TRAVEL_PERCENT,
        opacity: render,
    }
}

#[inline]
pub fn heading_style(render: f64) -> LayerStyle {
    reveal(reveal_progress(render, HEADING_DELAY), HEADING_TRAVEL_PX)
}

#[inline]
pub fn item_style(render: f64, index: usize) -> LayerStyle {
    reveal(reveal_progress(render, item_delay(index)), ITEM_TRAVEL_PX)
}

#[inline]
pub fn item_delay(index: usize) -> f64 {
    ITEM_BASE_DELAY + index as f64 * ITEM_STAGGER
}

/// Local 0..1 progress of an element that starts revealing at `delay`.
#[inline]
pub fn reveal_progress(render: f64, delay: f64) -> f64 {
    ((clamp_unit(render) - delay) * REVEAL_RATE).clamp(0.0, 1.0)
}

#[inline]
fn reveal(p: f64, travel_px: f64) -> LayerStyle {
    LayerStyle {
        translate_y: (1.0 - p) * travel_px,
        opacity: p,
    }
}
