// DOM contract of the stage: the elements the projector writes to and the
// names used to talk to the background animation.

// Layer handles (any of them may be absent)
pub const HERO_SELECTOR: &str = "canvas"; // hero text canvas
pub const WORK_SELECTOR: &str = "#work"; // work screen container
pub const HEADING_SELECTOR: &str = ".work-heading";
pub const ITEM_SELECTOR: &str = ".work-nav li"; // staggered nav items, in document order

// Background animation coordination
pub const PAUSED_BODY_CLASS: &str = "bg-animation-paused";
pub const PROGRESS_DETAIL_KEY: &str = "progress"; // CustomEvent detail field

// Configuration hooks
pub const FEEL_ATTRIBUTE: &str = "data-scroll-feel"; // on <body>: "standard" | "loose"

// Style units
pub const HERO_UNIT: &str = "vh";
pub const WORK_UNIT: &str = "%";
pub const REVEAL_UNIT: &str = "px";

// Wheel normalization (WheelEvent.deltaMode)
pub const WHEEL_LINE_PX: f64 = 16.0; // DOM_DELTA_LINE
pub const WHEEL_PAGE_PX: f64 = 800.0; // DOM_DELTA_PAGE

// Projection output is only rewritten when render moves by more than this
pub const RENDER_WRITE_EPSILON: f64 = 1e-5;
