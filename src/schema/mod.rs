pub mod connectors;
pub mod layout;
pub mod registry;
