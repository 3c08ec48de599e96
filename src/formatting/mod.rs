//! Formatting questionnaires back into their canonical source form

pub mod formatter;
mod renderer;
mod syntax;

pub use formatter::format_with_renderer;
pub use renderer::*;
pub use syntax::*;
