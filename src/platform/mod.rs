//! Platform abstraction layer
//!
//! Input comes from an `InputSource`: a device-backed one in a windowed
//! build, a scripted one in tests, or the autopilot for headless runs.

pub mod autopilot;
pub mod input;

pub use autopilot::Autopilot;
pub use input::{InputFrame, InputSource, ScriptedInput};
