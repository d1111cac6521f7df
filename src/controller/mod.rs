pub mod deferred;
pub mod drag;
pub mod gate;
pub mod pulse;
pub mod selection;
