pub mod analyze;
pub mod config;
pub mod interactive;
pub mod search;
pub mod theme;
