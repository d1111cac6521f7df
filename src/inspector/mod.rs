pub mod content;
pub mod overlay;
pub mod resolver;
