//! Rendering module
//!
//! Maps simulation state to triangle lists and text labels. No GPU or window
//! code lives here; a backend consumes `DrawList`s.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{Anchor, DrawList, DrawListPresenter, FrameView, Presenter, TextLabel};
pub use vertex::Vertex;
