pub mod controller;
pub mod gui;
pub mod inspector;
pub mod persistence;
pub mod schema;
