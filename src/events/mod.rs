pub mod page;
pub mod touch;
pub mod wheel;

pub use page::wire_page_handlers;
pub use touch::wire_touch_handlers;
pub use wheel::wire_wheel_handler;
