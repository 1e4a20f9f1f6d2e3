pub mod constants;
pub mod controller;
pub mod input;
pub mod pause;
pub mod physics;
pub mod profile;
pub mod projector;
pub mod snap;
pub mod tuning;

pub use controller::*;
pub use input::*;
pub use pause::*;
pub use physics::*;
pub use profile::*;
pub use projector::*;
pub use snap::*;
pub use tuning::*;
