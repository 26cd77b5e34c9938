//! Platform abstraction layer
//!
//! Browser-independent pieces of the host loop:
//! - Key-to-action mapping
//! - Fixed-rate tick clock

pub mod clock;
pub mod input;

pub use clock::TickClock;
pub use input::{InputAction, map_key};
