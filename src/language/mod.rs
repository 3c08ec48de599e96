// Types representing a questionnaire

mod colour;
mod error;
mod types;

// Re-export all public symbols
pub use colour::*;
pub use error::*;
pub use types::*;
