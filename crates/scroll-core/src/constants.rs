// Tuning constants for the scroll stage, shared by the web and native frontends.
// Per-frame factors assume one integration step per display refresh.

// Progress range
pub const HERO_PROGRESS: f64 = 0.0;
pub const WORK_PROGRESS: f64 = 1.0;
pub const MIDPOINT: f64 = 0.5; // strict snap decision boundary

// Device classification
pub const MOBILE_BREAKPOINT_PX: f64 = 767.0; // widths at or below are mobile viewports

// Input sensitivity (progress units per CSS pixel of delta)
pub const WHEEL_SENSITIVITY: f64 = 0.0009;
pub const TOUCH_SENSITIVITY_DESKTOP: f64 = 0.0009;
pub const TOUCH_SENSITIVITY_MOBILE: f64 = 0.0011;
pub const TOUCH_START_VELOCITY_CARRY: f64 = 0.6; // fraction of velocity kept when a finger lands
pub const RESISTANCE_SLOPE: f64 = 6.0; // touch increment scale is 1 / (1 + slope * |overshoot|)

// Integrator
pub const MAX_VELOCITY: f64 = 1.2;
pub const DAMPING: f64 = 0.92;
pub const DAMPING_LOOSE: f64 = 0.82;
pub const SMOOTH_FACTOR: f64 = 0.06;
pub const SMOOTH_FACTOR_LOOSE: f64 = 0.08;
pub const SMOOTH_SETTLE_EPSILON: f64 = 1e-4; // smoothed value snaps onto a resting position below this gap

// Rubber band (mobile)
pub const RUBBER_STIFFNESS: f64 = 0.14;
pub const RUBBER_DAMPING: f64 = 0.82; // extra damping while out of bounds
pub const OVERSCROLL_LIMIT: f64 = 0.55; // allowed excursion past either endpoint

// Snap
pub const SNAP_IDLE_MS: f64 = 120.0;
pub const SNAP_VELOCITY_THRESHOLD: f64 = 0.03;
pub const SNAP_DAMPING: f64 = 0.80; // spring stiffness is derived for critical damping
pub const SNAP_SETTLE_EPSILON: f64 = 1e-3;
pub const FLICK_THRESHOLD: f64 = 0.02; // per-sample velocity treated as directional intent
pub const REBOUND_ZONE: f64 = 0.06; // hero commits below this position bounce first
pub const REBOUND_IMPULSE: f64 = 0.035;

// Pause coordination
pub const HERO_VISIBLE_EPSILON: f64 = 0.01; // render at or below counts as hero fully in view

// Render projection
pub const HERO_TRAVEL_VH: f64 = 22.0;
pub const WORK_TRAVEL_PERCENT: f64 = 100.0;
pub const REVEAL_RATE: f64 = 6.0; // reveal progress gained per unit of render
pub const HEADING_DELAY: f64 = 0.15;
pub const HEADING_TRAVEL_PX: f64 = 12.0;
pub const ITEM_BASE_DELAY: f64 = 0.22;
pub const ITEM_STAGGER: f64 = 0.06;
pub const ITEM_TRAVEL_PX: f64 = 14.0;
