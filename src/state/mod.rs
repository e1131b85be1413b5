//! Application state module

mod content;
pub mod debounce;
mod forms;

pub use content::*;
pub use forms::*;
