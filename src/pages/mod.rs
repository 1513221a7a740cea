//! Page-level components, one module per routed view group.

pub mod game;
pub mod login;
pub mod minigames;
