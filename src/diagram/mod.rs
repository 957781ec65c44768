//! Process diagram rendering.
//!
//! - `engine`: the diagram engine capability and the built-in text engine
//! - `renderer`: asynchronous rendering into named containers

mod engine;
mod renderer;

pub use engine::{
    DiagramEngine, DiagramError, DiagramLine, DiagramOptions, RenderedDiagram, SegmentKind,
    TextDiagramEngine,
};
pub use renderer::{DiagramRenderer, PaneOutput, RENDER_ERROR_TEXT};
