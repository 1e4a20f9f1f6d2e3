//! Device classification.
//!
//! A [`DeviceProfile`] is built once from the environment. Touch capability is
//! fixed for the session; the viewport predicate is re-evaluated on resize and
//! may move the profile between device classes.

use crate::constants::MOBILE_BREAKPOINT_PX;

/// Which rule set applies to the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceProfile {
    pub is_touch_capable: bool,
    pub is_mobile_viewport: bool,
}

impl DeviceProfile {
    pub fn detect(viewport_width: f64, touch_capable: bool) -> Self {
        Self {
            is_touch_capable: touch_capable,
            is_mobile_viewport: is_mobile_width(viewport_width),
        }
    }

    /// Re-evaluate the viewport predicate; touch capability is kept.
    pub fn with_viewport_width(self, viewport_width: f64) -> Self {
        Self {
            is_mobile_viewport: is_mobile_width(viewport_width),
            ..self
        }
    }

    /// A narrow window without touch still scrolls with a wheel, so both
    /// predicates must hold for the mobile rule set.
    pub fn class(&self) -> DeviceClass {
        if self.is_mobile_viewport && self.is_touch_capable {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// A narrow window without touch keeps wheel scrolling.
    #[inline]
    pub fn accepts_wheel(&self) -> bool {
        self.class() == DeviceClass::Desktop
    }
}

#[inline]
pub fn is_mobile_width(viewport_width: f64) -> bool {
    viewport_width.is_finite() && viewport_width <= MOBILE_BREAKPOINT_PX
}
