// Control resolution engine - independent of any UI toolkit

pub mod codecs;
pub mod controls;
pub mod core;
pub mod session;

pub use core::*;
pub use session::{ControlSession, Selection};
