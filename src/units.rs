// Pure helpers turning projector values into CSS strings and raw wheel
// deltas into pixels. Kept free of web-sys so host tests can include them.

use crate::constants::{WHEEL_LINE_PX, WHEEL_PAGE_PX};

#[inline]
pub fn translate_y(value: f64, unit: &str) -> String {
    format!("translateY({:.3}{})", normalize_zero(value), unit)
}

#[inline]
pub fn opacity(value: f64) -> String {
    let v = if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 };
    format!("{:.3}", normalize_zero(v))
}

/// `deltaMode`: 0 = pixels, 1 = lines, 2 = pages.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f64 {
    match delta_mode {
        1 => delta_y * WHEEL_LINE_PX,
        2 => delta_y * WHEEL_PAGE_PX,
        _ => delta_y,
    }
}

// -0.0 prints as "-0.000"
#[inline]
fn normalize_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}
