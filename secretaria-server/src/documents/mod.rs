//! Template Renderer and tabular reports

pub mod renderer;
pub mod reports;
pub mod templates;

pub use renderer::{member_tokens, render_template};
