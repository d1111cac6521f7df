pub mod canvas;
pub mod frontend;
pub mod panels;
pub mod theme;
