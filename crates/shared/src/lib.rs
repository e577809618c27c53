pub mod config;
pub mod result;
pub mod state;
pub mod stats;
