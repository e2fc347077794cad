//! Rendering utilities for human surfaces (console tables, Markdown).

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{
    RenderableEstimate, RenderableFinding, RenderableReport, RenderableSeverity,
    RenderableVerdict,
};
pub use text::render_text;
