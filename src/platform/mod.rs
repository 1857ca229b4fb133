//! Platform abstraction layer
//!
//! - `input`: key/touch mapping and the pending-intent queue
//! - `dom` (WASM only): score display and end screen

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod input;

pub use input::{InputQueue, TOUCH_ZONES, direction_for_key, direction_for_zone};
